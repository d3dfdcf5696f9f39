use crate::common::{CacheError, DerivationError};
use once_cell::sync::OnceCell;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Cache epoch. Bumping it makes every earlier entry unreachable.
pub type Generation = u64;

/// Composite cache key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub theme_id: String,
    pub context: String,
    pub generation: Generation,
}

/// Style text derived for one (theme, context) pair. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedArtifact {
    theme_id: String,
    context: String,
    generation: Generation,
    body: String,
}

impl DerivedArtifact {
    pub fn new(
        theme_id: impl Into<String>,
        context: impl Into<String>,
        generation: Generation,
        body: String,
    ) -> Self {
        Self {
            theme_id: theme_id.into(),
            context: context.into(),
            generation,
            body,
        }
    }

    pub fn theme_id(&self) -> &str {
        &self.theme_id
    }

    pub fn context(&self) -> &str {
        &self.context
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn byte_len(&self) -> usize {
        self.body.len()
    }

    /// An empty artifact means "nothing to apply".
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Snapshot of cache counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub computations: u64,
    pub generation: Generation,
    pub entries: usize,
}

// An entry stays uninitialized while its first caller computes; concurrent
// callers for the same key block on the cell instead of computing again.
type Slot = Arc<OnceCell<Arc<DerivedArtifact>>>;

#[derive(Default)]
struct CacheState {
    generation: Generation,
    entries: HashMap<CacheKey, Slot>,
}

/// Memoizes derived artifacts per (theme id, context, generation).
///
/// Entries are never evicted by size or age. They disappear only through
/// [`invalidate_all`](Self::invalidate_all), which bumps the generation, or
/// [`invalidate_theme`](Self::invalidate_theme).
#[derive(Default)]
pub struct ArtifactCache {
    state: Mutex<CacheState>,
    hits: AtomicU64,
    misses: AtomicU64,
    computations: AtomicU64,
}

impl ArtifactCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, CacheState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Return the cached artifact, or compute and store it.
    ///
    /// At most one computation runs per key: concurrent callers for a key
    /// that is being computed wait for that result. A failed computation is
    /// not stored, so the next call computes again.
    pub fn get_or_compute<F>(
        &self,
        theme_id: &str,
        context: &str,
        compute: F,
    ) -> Result<Arc<DerivedArtifact>, CacheError>
    where
        F: FnOnce() -> Result<String, DerivationError>,
    {
        let (generation, slot) = {
            let mut state = self.lock();
            let generation = state.generation;
            let key = CacheKey {
                theme_id: theme_id.to_string(),
                context: context.to_string(),
                generation,
            };
            (generation, Arc::clone(state.entries.entry(key).or_default()))
        };

        if let Some(artifact) = slot.get() {
            self.hits.fetch_add(1, Ordering::Relaxed);
            log::debug!("Artifact cache hit: {theme_id}/{context} (generation {generation})");
            return Ok(Arc::clone(artifact));
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let artifact = slot
            .get_or_try_init(|| {
                self.computations.fetch_add(1, Ordering::Relaxed);
                log::debug!(
                    "Computing artifact {theme_id}/{context} (generation {generation})"
                );
                let body = compute()?;
                Ok(Arc::new(DerivedArtifact::new(
                    theme_id, context, generation, body,
                )))
            })
            .map_err(|source| CacheError::Compute {
                theme_id: theme_id.to_string(),
                context: context.to_string(),
                source,
            })?;

        Ok(Arc::clone(artifact))
    }

    /// Peek at a completed entry of the current generation without computing.
    pub fn get(&self, theme_id: &str, context: &str) -> Option<Arc<DerivedArtifact>> {
        let state = self.lock();
        let key = CacheKey {
            theme_id: theme_id.to_string(),
            context: context.to_string(),
            generation: state.generation,
        };
        state.entries.get(&key).and_then(|slot| slot.get().cloned())
    }

    /// Start a new generation and drop every entry. Returns the new generation.
    pub fn invalidate_all(&self) -> Generation {
        let mut state = self.lock();
        state.generation += 1;
        let dropped = state.entries.len();
        state.entries.clear();
        log::info!(
            "Artifact cache flushed: generation {} ({dropped} entries dropped)",
            state.generation
        );
        state.generation
    }

    /// Drop all contexts of one theme at the current generation.
    ///
    /// Returns how many entries were removed.
    pub fn invalidate_theme(&self, theme_id: &str) -> usize {
        let mut state = self.lock();
        let generation = state.generation;
        let before = state.entries.len();
        state
            .entries
            .retain(|key, _| !(key.theme_id == theme_id && key.generation == generation));
        let removed = before - state.entries.len();
        log::debug!("Invalidated {removed} cached artifact(s) for theme '{theme_id}'");
        removed
    }

    pub fn generation(&self) -> Generation {
        self.lock().generation
    }

    /// Number of completed entries.
    pub fn len(&self) -> usize {
        self.lock()
            .entries
            .values()
            .filter(|slot| slot.get().is_some())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            computations: self.computations.load(Ordering::Relaxed),
            generation: self.generation(),
            entries: self.len(),
        }
    }
}
