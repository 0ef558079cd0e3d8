//! Composite wire format: `"<timestamp>-<digest>"`.

use crate::error::{TrustError, TrustResult};

/// Separator between the timestamp and digest parts.
///
/// Digests are lowercase hex and timestamps are non-negative decimal
/// integers, so neither part can contain the separator in correct use.
const SEPARATOR: char = '-';

/// Render the composite form of a token.
pub(crate) fn format_composite(timestamp: &str, digest: &str) -> String {
    format!("{timestamp}{SEPARATOR}{digest}")
}

/// Split a composite token into its `(timestamp, digest)` parts.
///
/// Rejects with [`TrustError::MalformedToken`] unless the input splits on
/// the separator into exactly two parts. The timestamp part is not parsed
/// here; the caller validates it.
pub(crate) fn parse_composite(token: &str) -> TrustResult<(&str, &str)> {
    let (timestamp, digest) = token.split_once(SEPARATOR).ok_or_else(|| {
        TrustError::MalformedToken {
            message: format!("expected '{SEPARATOR}'-separated timestamp and digest"),
        }
    })?;

    if digest.contains(SEPARATOR) {
        return Err(TrustError::MalformedToken {
            message: format!("more than one '{SEPARATOR}' separator"),
        });
    }

    Ok((timestamp, digest))
}
