//! Command-line front end.

use crate::error::{AppError, AppResult};
use clap::{Args, Parser, Subcommand, ValueEnum};
use engine::ApplicationCoordinator;
use engine::config::ConfigurationUpdate;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "chromaport", version, about = "Apply VS Code color themes to an application")]
pub struct Cli {
    /// Settings file (defaults to chromaport.toml in the config directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub settings: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List loaded themes
    List,
    /// Derive and write the styles of the configured theme
    Apply,
    /// Switch to another theme and apply it
    Set {
        /// Theme id as shown by `list`
        theme: String,
    },
    /// Change which surfaces are styled or the override text, then apply
    Configure(ConfigureArgs),
    /// Print the derived artifact of a theme for a context
    Show {
        theme: String,
        /// content-surface, chrome-surface or restricted-surface
        context: String,
    },
    /// Report theme files that failed to load and normalization warnings
    Check,
}

#[derive(Debug, Args)]
pub struct ConfigureArgs {
    /// Style the content view
    #[arg(long, value_name = "on|off")]
    pub content: Option<Toggle>,

    /// Style the application chrome
    #[arg(long, value_name = "on|off")]
    pub chrome: Option<Toggle>,

    /// Read override text from a file
    #[arg(long, value_name = "PATH", conflicts_with = "clear_override")]
    pub override_file: Option<PathBuf>,

    /// Remove the override text
    #[arg(long)]
    pub clear_override: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Toggle {
    On,
    Off,
}

impl From<Toggle> for bool {
    fn from(toggle: Toggle) -> Self {
        toggle == Toggle::On
    }
}

/// Text to print and whether the command succeeded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub text: String,
    pub success: bool,
}

impl CommandOutput {
    fn ok(text: String) -> Self {
        Self {
            text,
            success: true,
        }
    }
}

impl ConfigureArgs {
    fn to_update(&self) -> AppResult<ConfigurationUpdate> {
        let override_text = match (&self.override_file, self.clear_override) {
            (Some(path), _) => Some(
                fs::read_to_string(path)
                    .map_err(|e| AppError::io(format!("reading {}", path.display()), e))?,
            ),
            (None, true) => Some(String::new()),
            (None, false) => None,
        };

        Ok(ConfigurationUpdate {
            current_theme_id: None,
            apply_to_content: self.content.map(bool::from),
            apply_to_chrome: self.chrome.map(bool::from),
            override_text,
        })
    }
}

pub fn execute(
    command: &Command,
    coordinator: &mut ApplicationCoordinator,
) -> AppResult<CommandOutput> {
    match command {
        Command::List => Ok(CommandOutput::ok(list(coordinator))),
        Command::Apply => Ok(report_output(coordinator.apply_current_theme(), coordinator)),
        Command::Set { theme } => {
            if !coordinator.registry().contains(theme) {
                return Err(AppError::Usage(format!(
                    "unknown theme '{theme}', run `chromaport list` to see available themes"
                )));
            }
            Ok(report_output(coordinator.set_theme(theme.as_str()), coordinator))
        }
        Command::Configure(args) => {
            let update = args.to_update()?;
            if update.is_empty() {
                return Ok(CommandOutput::ok(describe_configuration(coordinator)));
            }
            Ok(report_output(coordinator.update_configuration(update), coordinator))
        }
        Command::Show { theme, context } => {
            if engine::Surface::from_tag(context).is_none() {
                log::warn!("Unknown context '{context}', nothing is derived for it");
            }
            let artifact = coordinator.artifact_for(theme, context)?;
            Ok(CommandOutput::ok(artifact.body().to_string()))
        }
        Command::Check => Ok(check(coordinator)),
    }
}

fn list(coordinator: &ApplicationCoordinator) -> String {
    let current = &coordinator.config().current_theme_id;
    let mut text = String::new();
    for (id, name) in coordinator.list_themes() {
        let marker = if &id == current { "*" } else { " " };
        let kind = coordinator
            .registry()
            .get(&id)
            .map(|theme| theme.kind.to_string())
            .unwrap_or_default();
        text.push_str(&format!("{marker} {id:<28} {kind:<6} {name}\n"));
    }
    text
}

fn report_output(
    report: engine::ApplyReport,
    coordinator: &ApplicationCoordinator,
) -> CommandOutput {
    let stats = coordinator.cache().stats();
    log::debug!(
        "Artifact cache: {} hit(s), {} miss(es), {} computation(s), generation {}",
        stats.hits,
        stats.misses,
        stats.computations,
        stats.generation
    );
    CommandOutput {
        success: report.is_complete_success(),
        text: report.to_string(),
    }
}

fn describe_configuration(coordinator: &ApplicationCoordinator) -> String {
    let config = coordinator.config();
    let on_off = |enabled: bool| if enabled { "on" } else { "off" };
    format!(
        "theme:    {}\ncontent:  {}\nchrome:   {}\noverride: {} bytes\n",
        config.current_theme_id,
        on_off(config.apply_to_content),
        on_off(config.apply_to_chrome),
        config.override_text.len()
    )
}

fn check(coordinator: &ApplicationCoordinator) -> CommandOutput {
    let registry = coordinator.registry();
    let mut text = String::new();

    for error in registry.load_errors() {
        text.push_str(&format!("error: {error}\n"));
    }
    for (id, _) in registry.list() {
        let Ok(theme) = registry.get(&id) else {
            continue;
        };
        for warning in &theme.warnings {
            text.push_str(&format!("warning: {id}: {warning}\n"));
        }
    }
    text.push_str(&format!(
        "{} theme(s) loaded, {} skipped\n",
        registry.len(),
        registry.load_errors().len()
    ));

    CommandOutput {
        text,
        success: registry.load_errors().is_empty(),
    }
}
