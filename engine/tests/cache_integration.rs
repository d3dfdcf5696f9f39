use claims::{assert_err, assert_none, assert_ok, assert_some};
use engine::cache::ArtifactCache;
use engine::common::{CacheError, DerivationError};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;
use std::time::Duration;

mod helpers {
    use super::*;

    /// A compute function that counts its invocations.
    pub fn counting<'a>(
        calls: &'a AtomicUsize,
        body: &'static str,
    ) -> impl FnOnce() -> Result<String, DerivationError> + 'a {
        move || {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok(body.to_string())
        }
    }

    pub fn failing() -> Result<String, DerivationError> {
        Err(DerivationError::UnresolvedRole {
            context: "chrome-surface".to_string(),
            role: "editor.background".to_string(),
        })
    }
}

use helpers::*;

mod single_flight {
    use super::*;

    #[test]
    fn test_concurrent_callers_compute_once() {
        const CALLERS: usize = 16;
        let cache = Arc::new(ArtifactCache::new());
        let calls = Arc::new(AtomicUsize::new(0));
        let barrier = Arc::new(Barrier::new(CALLERS));

        let handles: Vec<_> = (0..CALLERS)
            .map(|_| {
                let cache = Arc::clone(&cache);
                let calls = Arc::clone(&calls);
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    cache.get_or_compute("nord", "content-surface", || {
                        calls.fetch_add(1, Ordering::SeqCst);
                        thread::sleep(Duration::from_millis(50));
                        Ok("body{}".to_string())
                    })
                })
            })
            .collect();

        let artifacts: Vec<_> = handles
            .into_iter()
            .map(|handle| handle.join().unwrap().unwrap())
            .collect();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        for artifact in &artifacts {
            assert!(Arc::ptr_eq(artifact, &artifacts[0]));
        }
        assert_eq!(cache.stats().computations, 1);
    }

    #[test]
    fn test_distinct_keys_compute_independently() {
        let cache = ArtifactCache::new();
        let calls = AtomicUsize::new(0);

        assert_ok!(cache.get_or_compute("nord", "content-surface", counting(&calls, "a")));
        assert_ok!(cache.get_or_compute("nord", "chrome-surface", counting(&calls, "b")));
        assert_ok!(cache.get_or_compute("paper", "content-surface", counting(&calls, "c")));

        assert_eq!(calls.load(Ordering::SeqCst), 3);
        assert_eq!(cache.len(), 3);
    }
}

mod invalidation {
    use super::*;

    #[test]
    fn test_invalidate_all_forces_recompute() {
        let cache = ArtifactCache::new();
        let calls = AtomicUsize::new(0);

        for _ in 0..3 {
            assert_ok!(cache.get_or_compute("nord", "chrome-surface", counting(&calls, "x")));
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        cache.invalidate_all();
        assert!(cache.is_empty());

        let artifact = cache
            .get_or_compute("nord", "chrome-surface", counting(&calls, "y"))
            .unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(artifact.body(), "y");
        assert_eq!(artifact.generation(), 1);
    }

    #[test]
    fn test_generation_is_monotonic() {
        let cache = ArtifactCache::new();
        let generations: Vec<_> = (0..5).map(|_| cache.invalidate_all()).collect();
        assert_eq!(generations, vec![1, 2, 3, 4, 5]);
        assert_eq!(cache.generation(), 5);
    }

    #[test]
    fn test_invalidate_theme_leaves_other_themes() {
        let cache = ArtifactCache::new();
        let calls = AtomicUsize::new(0);

        let b_before = cache
            .get_or_compute("b", "chrome-surface", counting(&calls, "b"))
            .unwrap();
        assert_ok!(cache.get_or_compute("a", "chrome-surface", counting(&calls, "a")));

        assert_eq!(cache.invalidate_theme("a"), 1);

        let b_after = cache
            .get_or_compute("b", "chrome-surface", counting(&calls, "b2"))
            .unwrap();
        assert!(Arc::ptr_eq(&b_before, &b_after));
        assert_none!(cache.get("a", "chrome-surface"));
        assert_eq!(cache.generation(), 0);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_invalidate_unknown_theme_is_noop() {
        let cache = ArtifactCache::new();
        let calls = AtomicUsize::new(0);
        assert_ok!(cache.get_or_compute("a", "content-surface", counting(&calls, "a")));

        assert_eq!(cache.invalidate_theme("missing"), 0);
        assert_some!(cache.get("a", "content-surface"));
    }
}

mod failures {
    use super::*;

    #[test]
    fn test_failure_propagates_and_is_retried() {
        let cache = ArtifactCache::new();
        let calls = AtomicUsize::new(0);

        let error = assert_err!(cache.get_or_compute("nord", "chrome-surface", failing));
        let CacheError::Compute { theme_id, context, source } = error;
        assert_eq!(theme_id, "nord");
        assert_eq!(context, "chrome-surface");
        assert!(matches!(source, DerivationError::UnresolvedRole { .. }));

        let artifact = cache
            .get_or_compute("nord", "chrome-surface", counting(&calls, "recovered"))
            .unwrap();
        assert_eq!(artifact.body(), "recovered");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_failure_does_not_count_as_entry() {
        let cache = ArtifactCache::new();
        assert_err!(cache.get_or_compute("nord", "chrome-surface", failing));
        assert!(cache.is_empty());
        assert_eq!(cache.stats().entries, 0);
    }
}
