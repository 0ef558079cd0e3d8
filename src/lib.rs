//! Trustgate Library
//!
//! This crate provides a minimal shared-secret token scheme for internal,
//! low-latency, semi-trusted networks: a lightweight gate against casual or
//! unintended calls to internal APIs, not a defense against a determined
//! attacker.
//!
//! A producer derives a token from a pre-shared key and the current time; a
//! consumer holding the same key recomputes the expected digest from the
//! timestamp embedded in the token and accepts it only if the digest matches
//! and the timestamp falls within the configured clock-skew window.
//!
//! The `decode_*` methods report why a token was rejected; the `is_valid_*`
//! variants return only the verdict. Note that the split `encode_*` methods
//! return the digest and timestamp separately; the digest alone does not
//! carry the timestamp.
//!
//! There is no nonce and no replay protection beyond the coarse time window,
//! and the digest is a plain hash rather than a keyed MAC. Use this only
//! inside trusted environments.

pub mod error;
pub mod token;

pub use error::{TrustError, TrustResult};
pub use token::Trust;
