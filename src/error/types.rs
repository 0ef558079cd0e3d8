//! Error types for token validation.

use thiserror::Error;

/// Reasons a received token is rejected.
///
/// Every variant is a local, non-fatal rejection: the caller should refuse
/// the request and must not retry with the same token. Callers that only
/// need a gate can use the `is_valid_*` methods on [`crate::Trust`] instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrustError {
    /// The token text does not have the expected shape.
    #[error("Malformed token: {message}")]
    MalformedToken { message: String },

    /// The token timestamp is older than the allowed skew window.
    #[error("Token expired: age {age_seconds}s exceeds allowed skew")]
    Expired { age_seconds: u64 },

    /// The token timestamp is further in the future than the allowed skew
    /// window. Indicates clock drift between producer and consumer.
    #[error("Token from the future: {ahead_seconds}s ahead exceeds allowed skew")]
    FromFuture { ahead_seconds: u64 },

    /// The recomputed digest does not match the supplied one. Indicates a
    /// wrong shared key, tampering, or a non-participant caller.
    #[error("Digest mismatch")]
    DigestMismatch,
}

impl TrustError {
    /// Whether the rejection was a timestamp-window failure, in either
    /// direction.
    pub fn is_out_of_window(&self) -> bool {
        matches!(self, Self::Expired { .. } | Self::FromFuture { .. })
    }
}

/// Result type alias for token operations.
pub type TrustResult<T> = Result<T, TrustError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_window_covers_both_directions() {
        assert!(TrustError::Expired { age_seconds: 3 }.is_out_of_window());
        assert!(TrustError::FromFuture { ahead_seconds: 3 }.is_out_of_window());
        assert!(!TrustError::DigestMismatch.is_out_of_window());
        assert!(!TrustError::MalformedToken {
            message: "empty".to_string()
        }
        .is_out_of_window());
    }
}
