//! # Theme Registry
//!
//! Loads theme documents from a source collection, validates and normalizes
//! them, and serves them by id.
//!
//! Documents follow the VS Code color theme shape:
//!
//! ```json
//! {
//!   "name": "One Dark Pro",
//!   "type": "dark",
//!   "colors": { "editor.background": "#282c34", "editor.foreground": "#abb2bf" },
//!   "tokenColors": [
//!     { "scope": ["comment"], "settings": { "foreground": "#5c6370", "fontStyle": "italic" } }
//!   ]
//! }
//! ```
//!
//! Only an object with a `colors` object holding `editor.background` or
//! `editor.foreground` is required. Everything else is normalized with
//! warnings:
//!
//! - **Colors** - hex values are canonicalized (`#abc` becomes `#AABBCC`),
//!   other strings are kept and flagged
//! - **Kind** - a missing `type` is inferred from background luminance
//! - **Display name** - defaults to the id, which is a slug of the source name
//!
//! A load that leaves the registry empty inserts the built-in
//! [`fallback_theme`](palette::fallback_theme).

pub mod palette;
pub mod registry;
pub mod source;
pub mod types;
pub mod validation;

pub use registry::{LoadSummary, ThemeRegistry};
pub use source::SourceDocument;
pub use types::{FontStyle, ThemeDocument, ThemeKind, TokenRule, TokenSettings, ValidationWarning};
