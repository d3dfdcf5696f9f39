use thiserror::Error;

/// Reason a source document was rejected by the registry.
///
/// Rejections are never raised out of [`ThemeRegistry::load`]; they are
/// collected in the registry's skip list together with the source name.
///
/// [`ThemeRegistry::load`]: crate::theme::ThemeRegistry::load
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadErrorReason {
    /// Raw text could not be parsed as JSON.
    #[error("invalid JSON: {0}")]
    Parse(String),

    /// The top-level value is not a JSON object.
    #[error("document is not an object")]
    NotAnObject,

    /// The document has no `colors` object.
    #[error("document has no `colors` object")]
    MissingColors,

    /// Neither `editor.background` nor `editor.foreground` is present.
    #[error("`colors` has no usable `editor.background` or `editor.foreground`")]
    MissingBaseColors,

    /// The source name does not produce a usable theme id.
    #[error("cannot derive a theme id: {0}")]
    InvalidId(String),

    /// An envelope field has the wrong type (e.g. `name` is a number).
    #[error("malformed document: {0}")]
    Shape(String),
}

/// A source document that failed parsing or validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to load theme '{source_name}': {reason}")]
pub struct LoadError {
    pub source_name: String,
    pub reason: LoadErrorReason,
}

impl LoadError {
    pub fn new(source_name: impl Into<String>, reason: LoadErrorReason) -> Self {
        Self {
            source_name: source_name.into(),
            reason,
        }
    }
}

/// Requested theme id is not present in the registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupMiss {
    #[error("theme '{id}' not found")]
    NotFound { id: String },
}

/// Template coverage defects detected while emitting a surface's rules.
///
/// These never occur for a consistent role table. They exist so that an
/// incomplete surface definition fails loudly in tests instead of emitting a
/// rule with a missing value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DerivationError {
    /// A template references a role its surface's role table does not declare.
    #[error("template for '{context}' references undeclared role '{role}'")]
    UndeclaredRole { context: String, role: String },

    /// A declared role resolved to an empty value.
    #[error("role '{role}' resolved to an empty value in '{context}'")]
    UnresolvedRole { context: String, role: String },
}

/// Cache-related errors for artifact memoization.
///
/// The cache never stores a failed computation, so a subsequent
/// `get_or_compute` for the same key computes again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CacheError {
    #[error("failed to compute '{context}' artifact for theme '{theme_id}': {source}")]
    Compute {
        theme_id: String,
        context: String,
        #[source]
        source: DerivationError,
    },
}

/// Failure to produce an artifact on demand, outside of an apply pass.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArtifactError {
    #[error(transparent)]
    Lookup(#[from] LookupMiss),

    #[error(transparent)]
    Compute(#[from] CacheError),

    #[error("no theme is loaded")]
    EmptyRegistry,
}

/// Failures of the external configuration store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigStoreError {
    #[error("failed to read configuration: {reason}")]
    Read { reason: String },

    #[error("failed to write configuration: {reason}")]
    Write { reason: String },
}

/// Error raised by a host collaborator (injector or mode signal).
#[derive(Debug, Error)]
#[error(transparent)]
pub struct CollaboratorError(#[from] Box<dyn std::error::Error + Send + Sync>);

impl CollaboratorError {
    pub fn msg(message: impl Into<String>) -> Self {
        let message: String = message.into();
        Self(message.into())
    }
}

impl From<std::io::Error> for CollaboratorError {
    fn from(error: std::io::Error) -> Self {
        Self(Box::new(error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_error_message_names_source() {
        let error = LoadError::new("broken.json", LoadErrorReason::MissingColors);
        let message = error.to_string();
        assert!(message.contains("broken.json"));
        assert!(message.contains("colors"));
    }

    #[test]
    fn test_cache_error_keeps_derivation_source() {
        let error = CacheError::Compute {
            theme_id: "nord".to_string(),
            context: "chrome-surface".to_string(),
            source: DerivationError::UndeclaredRole {
                context: "chrome-surface".to_string(),
                role: "tab.border".to_string(),
            },
        };
        let source = std::error::Error::source(&error).map(|e| e.to_string());
        assert_eq!(
            source.as_deref(),
            Some("template for 'chrome-surface' references undeclared role 'tab.border'")
        );
    }

    #[test]
    fn test_collaborator_error_from_message() {
        let error = CollaboratorError::msg("surface detached");
        assert_eq!(error.to_string(), "surface detached");
    }
}
