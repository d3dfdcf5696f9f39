use super::settings::AppSettings;

pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Settings validation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsValidationError {
    #[error("Invalid {field}: path is empty")]
    EmptyPath { field: &'static str },

    #[error("Invalid logging.level: '{configured}' (expected one of: {})", LOG_LEVELS.join(", "))]
    UnknownLogLevel { configured: String },

    #[error("Invalid output_dir: '{path}' is also the themes directory")]
    OutputIsThemesDir { path: String },
}

impl SettingsValidationError {
    pub fn user_message(&self) -> String {
        match self {
            SettingsValidationError::EmptyPath { field } => format!(
                "The setting '{field}' is set to an empty path.\n\
                 Remove it from chromaport.toml to use the default location."
            ),
            SettingsValidationError::UnknownLogLevel { configured } => format!(
                "Unknown log level '{configured}'.\n\
                 Valid levels: {}.",
                LOG_LEVELS.join(", ")
            ),
            SettingsValidationError::OutputIsThemesDir { path } => format!(
                "Generated styles would be written into the themes directory '{path}'.\n\
                 Point output_dir somewhere else."
            ),
        }
    }
}

impl AppSettings {
    /// Check the settings; an empty list means they are usable.
    pub fn validate(&self) -> Vec<SettingsValidationError> {
        let mut errors = Vec::new();

        for (field, value) in self.explicit_paths() {
            if value.trim().is_empty() {
                errors.push(SettingsValidationError::EmptyPath { field });
            }
        }

        let level = self.logging().level().to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            errors.push(SettingsValidationError::UnknownLogLevel {
                configured: self.logging().level().to_string(),
            });
        }

        if self.output_dir() == self.themes_dir() {
            errors.push(SettingsValidationError::OutputIsThemesDir {
                path: self.output_dir().display().to_string(),
            });
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(toml: &str) -> AppSettings {
        toml::from_str(toml).unwrap()
    }

    #[test]
    fn test_defaults_are_valid() {
        assert!(settings("").validate().is_empty());
    }

    #[test]
    fn test_reports_every_problem() {
        let errors = settings(
            r#"
            themes_dir = "/srv/themes"
            output_dir = "/srv/themes"
            state_file = " "

            [logging]
            level = "verbose"
            "#,
        )
        .validate();

        assert_eq!(
            errors,
            vec![
                SettingsValidationError::EmptyPath {
                    field: "state_file"
                },
                SettingsValidationError::UnknownLogLevel {
                    configured: "verbose".to_string()
                },
                SettingsValidationError::OutputIsThemesDir {
                    path: "/srv/themes".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_log_level_is_case_insensitive() {
        let errors = settings("[logging]\nlevel = \"DEBUG\"").validate();
        assert!(errors.is_empty());
    }
}
