use crate::utils::write_atomically;
use engine::common::ConfigStoreError;
use engine::config::{ConfigStore, Configuration};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Persists the theme [`Configuration`] as a TOML file.
///
/// A missing file reads as the default configuration.
#[derive(Debug, Clone)]
pub struct TomlConfigStore {
    path: PathBuf,
}

impl TomlConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigStore for TomlConfigStore {
    fn read(&self) -> Result<Configuration, ConfigStoreError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!(
                    "No saved configuration at {}, using defaults",
                    self.path.display()
                );
                return Ok(Configuration::default());
            }
            Err(e) => {
                return Err(ConfigStoreError::Read {
                    reason: format!("{}: {e}", self.path.display()),
                });
            }
        };

        toml::from_str(&text).map_err(|e| ConfigStoreError::Read {
            reason: format!("{}: {e}", self.path.display()),
        })
    }

    fn write(&self, configuration: &Configuration) -> Result<(), ConfigStoreError> {
        let text = toml::to_string_pretty(configuration).map_err(|e| ConfigStoreError::Write {
            reason: e.to_string(),
        })?;

        write_atomically(&self.path, text.as_bytes()).map_err(|e| ConfigStoreError::Write {
            reason: format!("{}: {e}", self.path.display()),
        })?;
        log::debug!("Saved configuration to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_reads_default() {
        let dir = tempfile::tempdir().unwrap();
        let store = TomlConfigStore::new(dir.path().join("state.toml"));
        assert_eq!(store.read().unwrap(), Configuration::default());
    }

    #[test]
    fn test_round_trip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = TomlConfigStore::new(dir.path().join("state").join("state.toml"));
        let configuration = Configuration {
            current_theme_id: "nord".to_string(),
            apply_to_content: false,
            apply_to_chrome: true,
            override_text: "QWidget { font-size: 13px; }\n".to_string(),
        };

        store.write(&configuration).unwrap();
        assert_eq!(store.read().unwrap(), configuration);
    }

    #[test]
    fn test_malformed_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.toml");
        fs::write(&path, "current_theme_id = [").unwrap();

        let error = TomlConfigStore::new(&path).read().unwrap_err();
        assert!(matches!(error, ConfigStoreError::Read { .. }));
    }
}
