//! Digest computation binding a timestamp to the shared key.

use md5::{Digest, Md5};

/// Compute the token digest for a timestamp under the given key.
///
/// The digest is the lowercase hex MD5 of the timestamp string directly
/// followed by the key, with no separator. The input order and the hash
/// function are both load-bearing: changing either breaks interoperability
/// with existing deployments of this scheme.
pub(crate) fn compute_digest(key: &str, timestamp: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(timestamp.as_bytes());
    hasher.update(key.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_digest() {
        // MD5("1700000000" ++ "hello trust")
        assert_eq!(
            compute_digest("hello trust", "1700000000"),
            "528c1798939e3abfc5da9418fd9e95c2"
        );
        // MD5("0" ++ "k")
        assert_eq!(compute_digest("k", "0"), "4965a47e7ac67b5e46e4613137b22c7c");
    }

    #[test]
    fn test_digest_is_lowercase_hex() {
        let digest = compute_digest("some key", "1700000000");
        assert_eq!(digest.len(), 32);
        assert!(digest
            .chars()
            .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_digest_depends_on_key_and_timestamp() {
        let base = compute_digest("key-a", "1700000000");
        assert_ne!(base, compute_digest("key-b", "1700000000"));
        assert_ne!(base, compute_digest("key-a", "1700000001"));
    }

    #[test]
    fn test_concatenation_has_no_separator() {
        // "12" ++ "3key" and "1" ++ "23key" hash the same bytes; the
        // timestamp-first concatenation is the only framing there is.
        assert_eq!(compute_digest("3key", "12"), compute_digest("23key", "1"));
    }
}
