//! # Application Coordinator
//!
//! Owns the registry, the cache and the configuration, and runs the apply
//! sequence:
//!
//! 1. **Resolve theme** - the configured id, else the first loaded theme
//!    (with a warning). An empty registry is fatal.
//! 2. **Derive** - content and chrome when enabled, restricted always.
//! 3. **Mode signal** - tell the host whether the theme is dark.
//! 4. **Handoff** - give each derived artifact to its surface's injector.
//!
//! Every step records its outcome in an [`ApplyReport`] and a failure in one
//! surface never stops the others.

pub mod report;

pub use report::{ApplyReport, ApplyStep, StepOutcome, StepRecord};

use crate::cache::{ArtifactCache, DerivedArtifact};
use crate::collaborators::{ModeSignal, SurfaceInjectors};
use crate::common::{ArtifactError, ConfigStoreError};
use crate::config::{ConfigStore, Configuration, ConfigurationUpdate};
use crate::derive::{DerivationEngine, Surface};
use crate::theme::{LoadSummary, SourceDocument, ThemeDocument, ThemeRegistry};
use std::sync::Arc;

/// Explicit application handle; construct once and pass it to whatever needs it.
pub struct ApplicationCoordinator {
    registry: ThemeRegistry,
    engine: DerivationEngine,
    cache: ArtifactCache,
    configuration: Configuration,
    store: Box<dyn ConfigStore>,
    injectors: SurfaceInjectors,
    mode_signal: Option<Box<dyn ModeSignal>>,
}

impl ApplicationCoordinator {
    /// Build a coordinator whose configuration is read from `store`.
    pub fn from_store(
        registry: ThemeRegistry,
        store: Box<dyn ConfigStore>,
    ) -> Result<Self, ConfigStoreError> {
        let configuration = store.read()?;
        Ok(Self::new(registry, configuration, store))
    }

    pub fn new(
        registry: ThemeRegistry,
        configuration: Configuration,
        store: Box<dyn ConfigStore>,
    ) -> Self {
        Self {
            registry,
            engine: DerivationEngine::new(),
            cache: ArtifactCache::new(),
            configuration,
            store,
            injectors: SurfaceInjectors::new(),
            mode_signal: None,
        }
    }

    pub fn with_injectors(mut self, injectors: SurfaceInjectors) -> Self {
        self.injectors = injectors;
        self
    }

    pub fn with_mode_signal(mut self, signal: impl ModeSignal + 'static) -> Self {
        self.mode_signal = Some(Box::new(signal));
        self
    }

    /// Replace the cache. Artifacts carry this coordinator's override text,
    /// so the cache is owned and never shared between coordinators.
    pub fn with_cache(mut self, cache: ArtifactCache) -> Self {
        self.cache = cache;
        self
    }

    pub fn config(&self) -> &Configuration {
        &self.configuration
    }

    pub fn registry(&self) -> &ThemeRegistry {
        &self.registry
    }

    pub fn cache(&self) -> &ArtifactCache {
        &self.cache
    }

    pub fn list_themes(&self) -> Vec<(String, String)> {
        self.registry.list()
    }

    /// Derive and hand off the configured theme.
    pub fn apply_current_theme(&self) -> ApplyReport {
        let mut report = ApplyReport::new();
        self.apply_into(&mut report);
        report
    }

    /// Merge `update` into the configuration, persist it, flush the cache and
    /// apply.
    ///
    /// A persistence failure is recorded and the in-memory configuration is
    /// still used for this and later passes.
    pub fn update_configuration(&mut self, update: ConfigurationUpdate) -> ApplyReport {
        let mut report = ApplyReport::new();
        self.configuration.merge(update);

        match self.store.write(&self.configuration) {
            Ok(()) => report.add_success(ApplyStep::PersistConfiguration, None),
            Err(e) => report.add_failure(ApplyStep::PersistConfiguration, None, e.to_string()),
        }

        self.cache.invalidate_all();
        self.apply_into(&mut report);
        report
    }

    pub fn set_theme(&mut self, id: impl Into<String>) -> ApplyReport {
        self.update_configuration(ConfigurationUpdate::theme(id))
    }

    /// Load more documents and drop cached artifacts of every id the load
    /// inserted or replaced.
    pub fn reload_themes<I>(&mut self, source: I) -> LoadSummary
    where
        I: IntoIterator<Item = SourceDocument>,
    {
        let summary = self.registry.load(source);
        for id in &summary.loaded {
            self.cache.invalidate_theme(id);
        }
        summary
    }

    /// The artifact of `surface` for the current theme, derived on demand.
    pub fn artifact(&self, surface: Surface) -> Result<Arc<DerivedArtifact>, ArtifactError> {
        let theme = match self.registry.get(&self.configuration.current_theme_id) {
            Ok(theme) => theme,
            Err(miss) => {
                let first = self.registry.first_id().ok_or(ArtifactError::EmptyRegistry)?;
                log::debug!("{miss}, using '{first}' for {surface}");
                self.registry.get(first)?
            }
        };
        Ok(self.derive_cached(&theme, surface.tag())?)
    }

    /// The artifact of any theme for any context tag. Unknown tags give an
    /// empty artifact.
    pub fn artifact_for(
        &self,
        theme_id: &str,
        context: &str,
    ) -> Result<Arc<DerivedArtifact>, ArtifactError> {
        let theme = self.registry.get(theme_id)?;
        Ok(self.derive_cached(&theme, context)?)
    }

    fn derive_cached(
        &self,
        theme: &ThemeDocument,
        context: &str,
    ) -> Result<Arc<DerivedArtifact>, crate::common::CacheError> {
        let override_text = &self.configuration.override_text;
        self.cache.get_or_compute(&theme.id, context, || {
            self.engine.derive(theme, context, override_text)
        })
    }

    fn surfaces_to_derive(&self) -> Vec<Surface> {
        let mut surfaces = Vec::with_capacity(Surface::ALL.len());
        if self.configuration.apply_to_content {
            surfaces.push(Surface::Content);
        }
        if self.configuration.apply_to_chrome {
            surfaces.push(Surface::Chrome);
        }
        surfaces.push(Surface::Restricted);
        surfaces
    }

    fn apply_into(&self, report: &mut ApplyReport) {
        let Some(theme) = self.resolve_theme(report) else {
            return;
        };
        log::info!("Applying theme '{}' ({})", theme.id, theme.kind);
        report.theme_id = Some(theme.id.clone());

        let mut derived = Vec::new();
        for surface in self.surfaces_to_derive() {
            match self.derive_cached(&theme, surface.tag()) {
                Ok(artifact) => {
                    report.add_success_with(
                        ApplyStep::DeriveArtifact,
                        Some(surface),
                        format!("{} bytes", artifact.byte_len()),
                    );
                    derived.push((surface, artifact));
                }
                Err(e) => {
                    log::error!("{e}");
                    report.add_failure(ApplyStep::DeriveArtifact, Some(surface), e.to_string());
                }
            }
        }

        if !derived.is_empty() {
            self.signal_mode(&theme, report);
        }

        for (surface, artifact) in &derived {
            self.hand_off(*surface, artifact, report);
        }

        log::info!(
            "Applied theme '{}': {} failure(s), {} warning(s)",
            theme.id,
            report.failures().count(),
            report.warnings.len()
        );
    }

    fn resolve_theme(&self, report: &mut ApplyReport) -> Option<Arc<ThemeDocument>> {
        let wanted = &self.configuration.current_theme_id;
        let miss = match self.registry.get(wanted) {
            Ok(theme) => {
                report.add_success(ApplyStep::ResolveTheme, None);
                return Some(theme);
            }
            Err(miss) => miss,
        };

        let fallback = self
            .registry
            .first_id()
            .and_then(|first| self.registry.get(first).ok());
        match fallback {
            Some(theme) => {
                report.add_warning(format!("{miss}, falling back to '{}'", theme.id));
                report.add_success_with(
                    ApplyStep::ResolveTheme,
                    None,
                    format!("fell back to '{}'", theme.id),
                );
                Some(theme)
            }
            None => {
                report.add_failure(ApplyStep::ResolveTheme, None, miss.to_string());
                report.set_fatal("no theme is loaded");
                None
            }
        }
    }

    fn signal_mode(&self, theme: &ThemeDocument, report: &mut ApplyReport) {
        let Some(signal) = &self.mode_signal else {
            return;
        };
        let dark = theme.kind.is_dark();
        match signal.set_dark_mode(dark) {
            Ok(()) => report.add_success_with(
                ApplyStep::ModeSignal,
                None,
                if dark { "dark" } else { "light" },
            ),
            Err(e) => report.add_failure(ApplyStep::ModeSignal, None, e.to_string()),
        }
    }

    fn hand_off(&self, surface: Surface, artifact: &DerivedArtifact, report: &mut ApplyReport) {
        let Some(injector) = self.injectors.get(surface) else {
            log::debug!("No injector registered for {surface}");
            return;
        };
        if artifact.is_empty() {
            report.add_skipped(ApplyStep::Handoff, Some(surface), "empty artifact");
            return;
        }
        match injector.inject(artifact.body()) {
            Ok(()) => report.add_success(ApplyStep::Handoff, Some(surface)),
            Err(e) => report.add_failure(ApplyStep::Handoff, Some(surface), e.to_string()),
        }
    }
}

impl std::fmt::Debug for ApplicationCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApplicationCoordinator")
            .field("themes", &self.registry.len())
            .field("configuration", &self.configuration)
            .field("injectors", &self.injectors)
            .field("mode_signal", &self.mode_signal.is_some())
            .finish()
    }
}
