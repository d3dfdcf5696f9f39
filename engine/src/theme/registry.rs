use crate::common::{LoadError, LoadErrorReason, LookupMiss};
use crate::theme::palette::fallback_theme;
use crate::theme::source::{Payload, SourceDocument};
use crate::theme::types::ThemeDocument;
use crate::theme::validation::{
    DocumentValidator, ThemeIdValidator, normalize_document, slugify,
};
use crate::validation::Validator;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// Outcome of one [`ThemeRegistry::load`] call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadSummary {
    /// Ids inserted or replaced by this load, in source order.
    pub loaded: Vec<String>,
    /// Number of source documents skipped.
    pub skipped: usize,
    /// Whether the built-in fallback theme was synthesized.
    pub fallback_synthesized: bool,
}

/// Read-mostly store of normalized theme documents.
///
/// Documents are shared as `Arc<ThemeDocument>` and never mutated; loading a
/// document under an existing id replaces it while keeping its position in
/// [`list`](Self::list).
pub struct ThemeRegistry {
    themes: HashMap<String, Arc<ThemeDocument>>,
    order: Vec<String>,
    load_errors: Vec<LoadError>,
    document_validator: DocumentValidator,
    id_validator: ThemeIdValidator,
}

impl ThemeRegistry {
    pub fn new() -> Self {
        Self {
            themes: HashMap::new(),
            order: Vec::new(),
            load_errors: Vec::new(),
            document_validator: DocumentValidator,
            id_validator: ThemeIdValidator,
        }
    }

    /// Load a source collection.
    ///
    /// Invalid documents are skipped and recorded in [`load_errors`]
    /// (replaced on every call). If the registry is still empty afterwards the
    /// fallback theme is inserted.
    ///
    /// [`load_errors`]: Self::load_errors
    pub fn load<I>(&mut self, source: I) -> LoadSummary
    where
        I: IntoIterator<Item = SourceDocument>,
    {
        let mut summary = LoadSummary::default();
        self.load_errors.clear();

        for document in source {
            let (name, payload) = document.into_parts();
            match self.build_document(&name, payload) {
                Ok(theme) => {
                    log::debug!(
                        "Loaded theme '{}' from '{name}' ({} warnings)",
                        theme.id,
                        theme.warnings.len()
                    );
                    for warning in &theme.warnings {
                        log::debug!("Theme '{}': {warning}", theme.id);
                    }
                    if summary.loaded.contains(&theme.id) {
                        log::warn!("Source '{name}' replaces theme '{}' loaded earlier", theme.id);
                    } else {
                        summary.loaded.push(theme.id.clone());
                    }
                    self.insert(theme);
                }
                Err(reason) => {
                    let error = LoadError::new(name, reason);
                    log::warn!("{error}");
                    self.load_errors.push(error);
                    summary.skipped += 1;
                }
            }
        }

        if self.themes.is_empty() {
            log::warn!("No valid themes loaded, using the built-in fallback theme");
            let fallback = fallback_theme();
            summary.loaded.push(fallback.id.clone());
            summary.fallback_synthesized = true;
            self.insert(fallback);
        }

        log::info!(
            "Theme registry loaded {} theme(s), skipped {}",
            summary.loaded.len(),
            summary.skipped
        );
        summary
    }

    fn build_document(
        &self,
        name: &str,
        payload: Payload,
    ) -> Result<ThemeDocument, LoadErrorReason> {
        let id = slugify(name);
        self.id_validator.validate(&id)?;

        let value = match payload {
            Payload::Parsed(value) => value,
            Payload::Text(text) => serde_json::from_str(&text)
                .map_err(|e| LoadErrorReason::Parse(e.to_string()))?,
        };

        self.document_validator.validate(&value)?;
        normalize_document(&id, value)
    }

    fn insert(&mut self, theme: ThemeDocument) {
        let id = theme.id.clone();
        if self.themes.insert(id.clone(), Arc::new(theme)).is_none() {
            self.order.push(id);
        }
    }

    /// Structural check used by `load`: an object with a `colors` object that
    /// defines at least one of the base colors.
    pub fn validate(&self, document: &Value) -> bool {
        self.document_validator.validate(document).is_ok()
    }

    pub fn get(&self, id: &str) -> Result<Arc<ThemeDocument>, LookupMiss> {
        self.themes
            .get(id)
            .cloned()
            .ok_or_else(|| LookupMiss::NotFound { id: id.to_string() })
    }

    /// `(id, display name)` pairs in insertion order.
    pub fn list(&self) -> Vec<(String, String)> {
        self.order
            .iter()
            .filter_map(|id| self.themes.get(id))
            .map(|theme| (theme.id.clone(), theme.display_name.clone()))
            .collect()
    }

    pub fn first_id(&self) -> Option<&str> {
        self.order.first().map(String::as_str)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.themes.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    /// Remove a document. Does not synthesize the fallback theme.
    pub fn unload(&mut self, id: &str) -> Option<Arc<ThemeDocument>> {
        let removed = self.themes.remove(id)?;
        self.order.retain(|existing| existing != id);
        log::info!("Unloaded theme '{id}'");
        Some(removed)
    }

    /// Documents skipped by the most recent `load`.
    pub fn load_errors(&self) -> &[LoadError] {
        &self.load_errors
    }
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
