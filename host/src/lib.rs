//! # chromaport host
//!
//! Connects the theme engine to the outside world: settings, a TOML state
//! file, theme files on disk and style files the consuming application
//! picks up.
//!
//! ## Modules
//!
//! - [`app`] - Builds the coordinator from settings
//! - [`cli`] - Command-line interface
//! - [`config`] - Settings loading and the configuration store
//! - [`error`] - Host error type
//! - [`injectors`] - File-backed style injectors and the mode file
//! - [`logger`] - Logging setup
//! - [`source`] - Bundled and on-disk theme sources
//! - [`utils`] - Atomic file replacement

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod injectors;
pub mod logger;
pub mod source;
pub mod utils;

pub use error::{AppError, AppResult};
