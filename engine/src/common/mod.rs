pub mod errors;

pub use errors::{
    ArtifactError, CacheError, CollaboratorError, ConfigStoreError, DerivationError, LoadError,
    LoadErrorReason, LookupMiss,
};
