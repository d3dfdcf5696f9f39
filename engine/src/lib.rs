//! # chromaport engine
//!
//! Core library that turns declarative color themes into style artifacts for
//! a host application and keeps them cached until their inputs change.
//!
//! ## Modules
//!
//! - [`color`] - Color normalization and luminance
//! - [`theme`] - Theme documents and the theme registry
//! - [`derive`] - Role tables, rule templates and the derivation engine
//! - [`cache`] - Generation-keyed artifact cache with single-flight computation
//! - [`coordinator`] - The "apply current theme" sequence and its report
//! - [`collaborators`] - Interfaces implemented by the host
//! - [`config`] - The persisted configuration record
//! - [`common`] - Error types
//! - [`validation`] - The validator trait

pub mod cache;
pub mod collaborators;
pub mod color;
pub mod common;
pub mod config;
pub mod coordinator;
pub mod derive;
pub mod theme;
pub mod validation;

pub use cache::{ArtifactCache, DerivedArtifact};
pub use coordinator::{ApplicationCoordinator, ApplyReport};
pub use derive::{DerivationEngine, Surface};
pub use theme::{SourceDocument, ThemeDocument, ThemeKind, ThemeRegistry};
