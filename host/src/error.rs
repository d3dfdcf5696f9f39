use engine::common::{ArtifactError, ConfigStoreError};
use thiserror::Error;

/// Errors of the host application.
///
/// Apply failures are not errors here: they are carried by
/// [`engine::ApplyReport`] and turned into an exit status by the CLI.
#[derive(Debug, Error)]
pub enum AppError {
    /// Settings could not be loaded or failed validation.
    #[error("Configuration Error: {0}")]
    Config(String),

    /// File system failures outside the collaborators.
    #[error("I/O Error: {context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Logging Error: {0}")]
    Logging(String),

    #[error(transparent)]
    Store(#[from] ConfigStoreError),

    #[error(transparent)]
    Artifact(#[from] ArtifactError),

    /// Invalid command-line input.
    #[error("Usage Error: {0}")]
    Usage(String),
}

impl AppError {
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        AppError::Io {
            context: context.into(),
            source,
        }
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<log::SetLoggerError> for AppError {
    fn from(err: log::SetLoggerError) -> Self {
        AppError::Logging(err.to_string())
    }
}

/// Result type alias for host operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_keeps_context() {
        let error = AppError::io(
            "reading themes",
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such directory"),
        );
        assert_eq!(
            error.to_string(),
            "I/O Error: reading themes: no such directory"
        );
    }

    #[test]
    fn test_store_error_is_transparent() {
        let error = AppError::from(ConfigStoreError::Read {
            reason: "bad toml".to_string(),
        });
        assert_eq!(error.to_string(), "failed to read configuration: bad toml");
    }
}
