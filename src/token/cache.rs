//! Single-slot cache of the most recently encoded token.
//!
//! Encoding hashes once per wall-clock second at most; callers within the
//! same second all read the cached snapshot. Each [`crate::Trust`] instance
//! owns its own slot, so instances with different keys never interfere.

use std::sync::Mutex;

use tracing::trace;

/// The values computed for one wall-clock second. Always swapped whole, so
/// readers never see a digest from one second paired with a timestamp from
/// another.
#[derive(Debug, Clone)]
pub(crate) struct Snapshot {
    /// Unix second the snapshot was computed for.
    pub second: u64,
    /// Hex digest binding `second` to the shared key.
    pub digest: String,
    /// Decimal rendering of `second`.
    pub timestamp_str: String,
    /// Composite `"<timestamp>-<digest>"` form.
    pub composite: String,
}

/// Thread-safe single-slot token cache keyed by the current second.
#[derive(Debug, Default)]
pub(crate) struct TokenCache {
    slot: Mutex<Option<Snapshot>>,
}

impl TokenCache {
    /// Create an empty cache.
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Return the snapshot for `now`, recomputing and storing it first if
    /// the cached one is stale.
    ///
    /// The check-and-refresh sequence runs under the lock, so concurrent
    /// callers in the same second observe one consistent snapshot.
    /// Recomputation is one hash of a short string; serializing it is
    /// cheaper than it sounds.
    pub(crate) fn snapshot_for(&self, now: u64, compute: impl FnOnce() -> Snapshot) -> Snapshot {
        let mut slot = match self.slot.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(), // Recover from mutex poisoning
        };

        match slot.as_ref() {
            Some(snapshot) if snapshot.second >= now => snapshot.clone(),
            _ => {
                let snapshot = compute();
                trace!(second = snapshot.second, "Refreshed token cache");
                *slot = Some(snapshot.clone());
                snapshot
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(second: u64, tag: &str) -> Snapshot {
        Snapshot {
            second,
            digest: format!("digest-{tag}"),
            timestamp_str: second.to_string(),
            composite: format!("{second}-digest-{tag}"),
        }
    }

    #[test]
    fn test_first_call_computes() {
        let cache = TokenCache::new();
        let snap = cache.snapshot_for(10, || snapshot(10, "a"));
        assert_eq!(snap.second, 10);
        assert_eq!(snap.digest, "digest-a");
    }

    #[test]
    fn test_same_second_served_from_cache() {
        let cache = TokenCache::new();
        cache.snapshot_for(10, || snapshot(10, "a"));
        let snap = cache.snapshot_for(10, || panic!("should not recompute"));
        assert_eq!(snap.digest, "digest-a");
    }

    #[test]
    fn test_newer_second_overwrites() {
        let cache = TokenCache::new();
        cache.snapshot_for(10, || snapshot(10, "a"));
        let snap = cache.snapshot_for(11, || snapshot(11, "b"));
        assert_eq!(snap.second, 11);
        assert_eq!(snap.digest, "digest-b");

        // And the new value stays cached.
        let again = cache.snapshot_for(11, || panic!("should not recompute"));
        assert_eq!(again.digest, "digest-b");
    }

    #[test]
    fn test_snapshot_fields_stay_paired_under_concurrency() {
        use std::sync::Arc;

        let cache = Arc::new(TokenCache::new());
        let mut handles = Vec::new();
        for second in [20u64, 21, 21, 22, 22, 22] {
            let cache = Arc::clone(&cache);
            handles.push(std::thread::spawn(move || {
                cache.snapshot_for(second, || snapshot(second, "x"))
            }));
        }
        for handle in handles {
            let snap = handle.join().unwrap();
            assert_eq!(snap.timestamp_str, snap.second.to_string());
            assert!(snap.composite.starts_with(&snap.timestamp_str));
        }
    }
}
