//! Host settings and the file-backed configuration store.
//!
//! Settings come from an optional `chromaport.toml` layered under environment
//! variables with the `CHROMAPORT__` prefix (nested keys use `__`, e.g.
//! `CHROMAPORT__LOGGING__LEVEL=debug`). A `.env` file in the working
//! directory is honored.

use crate::error::AppResult;
use config::{Config, Environment, File};
use std::path::Path;

pub mod settings;
pub mod store;
pub mod validation;

pub use settings::{AppSettings, LoggingSettings};
pub use store::TomlConfigStore;
pub use validation::SettingsValidationError;

pub const SETTINGS_FILE_NAME: &str = "chromaport.toml";
pub const ENV_PREFIX: &str = "CHROMAPORT";

/// Load settings.
///
/// With an explicit path the file must exist. Otherwise the per-user
/// settings file and a `chromaport.toml` in the working directory are both
/// optional, the latter taking precedence.
pub fn load_settings(explicit: Option<&Path>) -> AppResult<AppSettings> {
    dotenv::dotenv().ok();

    let mut builder = Config::builder();
    match explicit {
        Some(path) => {
            log::debug!("Loading settings from {}", path.display());
            builder = builder.add_source(File::from(path).required(true));
        }
        None => {
            let user_file = settings::config_base().join(SETTINGS_FILE_NAME);
            builder = builder
                .add_source(File::from(user_file).required(false))
                .add_source(File::from(Path::new(SETTINGS_FILE_NAME)).required(false));
        }
    }

    let settings = builder
        .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
        .build()?
        .try_deserialize::<AppSettings>()?;
    Ok(settings)
}
