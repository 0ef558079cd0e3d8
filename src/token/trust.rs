//! Shared-secret token encoder/decoder.

use std::time::{SystemTime, UNIX_EPOCH};

use tracing::{debug, warn};

use crate::error::{TrustError, TrustResult};

use super::cache::{Snapshot, TokenCache};
use super::digest::compute_digest;
use super::wire;

/// Shared-secret token authority for one key and skew window.
///
/// One instance is created at setup time and shared by reference across the
/// process; it is `Send + Sync` and never mutated after construction apart
/// from its internal cache slot.
pub struct Trust {
    key: String,
    /// Allowed difference between token timestamp and local time, in
    /// seconds, in either direction. Inclusive on both ends.
    allowed_skew: u64,
    cache: TokenCache,
}

impl Trust {
    /// Create a token authority for a pre-shared key and skew window.
    ///
    /// `allowed_skew_seconds` absorbs transfer latency and clock drift
    /// between producer and consumer. The key is opaque to this crate; key
    /// distribution is the embedding application's problem.
    pub fn new(key: impl Into<String>, allowed_skew_seconds: u64) -> Self {
        let key = key.into();
        if key.is_empty() {
            warn!("Trust created with an empty key; tokens carry no secret at all");
        }
        Self {
            key,
            allowed_skew: allowed_skew_seconds,
            cache: TokenCache::new(),
        }
    }

    /// Encode a token in composite `"<timestamp>-<digest>"` form.
    pub fn encode_composite(&self) -> String {
        self.current_snapshot().composite
    }

    /// Encode a token as separate digest and integer timestamp.
    pub fn encode_split_int(&self) -> (String, u64) {
        let snapshot = self.current_snapshot();
        (snapshot.digest, snapshot.second)
    }

    /// Encode a token as separate digest and decimal-string timestamp.
    pub fn encode_split_string(&self) -> (String, String) {
        let snapshot = self.current_snapshot();
        (snapshot.digest, snapshot.timestamp_str)
    }

    /// Validate a composite token.
    ///
    /// Splits on the separator, then validates as a split token. Rejects
    /// with [`TrustError::MalformedToken`] if the split does not yield
    /// exactly a timestamp and a digest.
    pub fn decode_composite(&self, token: &str) -> TrustResult<()> {
        let (timestamp, digest) = wire::parse_composite(token)?;
        self.decode_split_str(digest, timestamp)
    }

    /// Validate a split token with a decimal-string timestamp.
    pub fn decode_split_str(&self, digest: &str, timestamp: &str) -> TrustResult<()> {
        let seconds: u64 = timestamp.parse().map_err(|_| {
            debug!(timestamp, "Rejected token with non-integer timestamp");
            TrustError::MalformedToken {
                message: format!("timestamp '{timestamp}' is not a valid integer"),
            }
        })?;
        self.validate_at(digest, timestamp, seconds, unix_now())
    }

    /// Validate a split token with an integer timestamp.
    pub fn decode_split_int(&self, digest: &str, timestamp: u64) -> TrustResult<()> {
        self.validate_at(digest, &timestamp.to_string(), timestamp, unix_now())
    }

    /// Boolean-only variant of [`Self::decode_composite`].
    pub fn is_valid_composite(&self, token: &str) -> bool {
        self.decode_composite(token).is_ok()
    }

    /// Boolean-only variant of [`Self::decode_split_str`].
    pub fn is_valid_split_str(&self, digest: &str, timestamp: &str) -> bool {
        self.decode_split_str(digest, timestamp).is_ok()
    }

    /// Boolean-only variant of [`Self::decode_split_int`].
    pub fn is_valid_split_int(&self, digest: &str, timestamp: u64) -> bool {
        self.decode_split_int(digest, timestamp).is_ok()
    }

    /// Return the cached snapshot, refreshing it first if the cached second
    /// is stale. All `encode_*` methods go through here.
    fn current_snapshot(&self) -> Snapshot {
        let now = unix_now();
        self.cache.snapshot_for(now, || {
            let timestamp_str = now.to_string();
            let digest = compute_digest(&self.key, &timestamp_str);
            let composite = wire::format_composite(&timestamp_str, &digest);
            Snapshot {
                second: now,
                digest,
                timestamp_str,
                composite,
            }
        })
    }

    /// Core validation, shared by every `decode_*` method.
    ///
    /// Checks:
    /// 1. Timestamp within the skew window of `now`, inclusive both ends
    /// 2. Supplied digest equals the one recomputed from the shared key
    fn validate_at(
        &self,
        digest: &str,
        timestamp_str: &str,
        timestamp: u64,
        now: u64,
    ) -> TrustResult<()> {
        let age = now.saturating_sub(timestamp);
        if age > self.allowed_skew {
            debug!(age_seconds = age, "Rejected expired token");
            return Err(TrustError::Expired { age_seconds: age });
        }

        let ahead = timestamp.saturating_sub(now);
        if ahead > self.allowed_skew {
            debug!(ahead_seconds = ahead, "Rejected token from the future");
            return Err(TrustError::FromFuture {
                ahead_seconds: ahead,
            });
        }

        let expected = compute_digest(&self.key, timestamp_str);
        if digest != expected {
            debug!("Rejected token with mismatched digest");
            return Err(TrustError::DigestMismatch);
        }

        Ok(())
    }
}

/// Current wall-clock time as whole Unix seconds.
///
/// A pre-epoch clock is not modeled; it reads as second zero and every
/// in-window token simply fails the window check.
fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_secs())
}
