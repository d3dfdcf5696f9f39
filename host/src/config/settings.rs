use serde::Deserialize;
use std::path::PathBuf;

pub const APP_DIR_NAME: &str = "chromaport";

/// Host application settings.
///
/// Every path is optional; unset paths resolve to per-user defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppSettings {
    /// Directory scanned for `*.json` theme documents.
    themes_dir: Option<String>,
    /// Directory that receives the generated style files.
    output_dir: Option<String>,
    /// TOML file holding the persisted theme configuration.
    state_file: Option<String>,
    #[serde(default)]
    logging: LoggingSettings,
}

impl AppSettings {
    pub fn themes_dir(&self) -> PathBuf {
        resolve(self.themes_dir.as_deref(), || config_base().join("themes"))
    }

    pub fn output_dir(&self) -> PathBuf {
        resolve(self.output_dir.as_deref(), || data_base().join("styles"))
    }

    pub fn state_file(&self) -> PathBuf {
        resolve(self.state_file.as_deref(), || config_base().join("state.toml"))
    }

    pub fn logging(&self) -> &LoggingSettings {
        &self.logging
    }

    /// Paths set explicitly, by field name.
    pub(crate) fn explicit_paths(&self) -> Vec<(&'static str, &str)> {
        [
            ("themes_dir", self.themes_dir.as_deref()),
            ("output_dir", self.output_dir.as_deref()),
            ("state_file", self.state_file.as_deref()),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.map(|v| (field, v)))
        .collect()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingSettings {
    level: Option<String>,
    file: Option<String>,
}

impl LoggingSettings {
    pub fn level(&self) -> &str {
        self.level.as_deref().unwrap_or("info")
    }

    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }
}

fn resolve(explicit: Option<&str>, default: impl FnOnce() -> PathBuf) -> PathBuf {
    match explicit {
        Some(path) => PathBuf::from(path),
        None => default(),
    }
}

/// `~/.config/chromaport` or platform equivalent.
pub fn config_base() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
}

fn data_base() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_paths_win() {
        let settings: AppSettings = toml::from_str(
            r#"
            themes_dir = "/opt/themes"
            output_dir = "/tmp/styles"
            "#,
        )
        .unwrap();

        assert_eq!(settings.themes_dir(), PathBuf::from("/opt/themes"));
        assert_eq!(settings.output_dir(), PathBuf::from("/tmp/styles"));
        assert!(settings.state_file().ends_with("chromaport/state.toml"));
        assert_eq!(settings.logging().level(), "info");
        assert_eq!(settings.logging().file(), None);
    }
}
