use anyhow::Context;
use clap::Parser;
use host::cli::{Cli, execute};
use host::{app, config, logger};
use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let settings = config::load_settings(cli.settings.as_deref())
        .context("failed to load settings")?;

    let problems = settings.validate();
    if !problems.is_empty() {
        for problem in &problems {
            eprintln!("{}\n", problem.user_message());
        }
        anyhow::bail!("invalid settings ({} problem(s))", problems.len());
    }

    logger::setup_logger(settings.logging(), cli.verbose)?;
    log::info!("chromaport {} starting", env!("CARGO_PKG_VERSION"));

    let mut coordinator = app::build_coordinator(&settings)?;
    let output = execute(&cli.command, &mut coordinator)?;
    print!("{}", output.text);

    Ok(if output.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
