//! Token encoding and validation.
//!
//! Handles digest computation, the composite wire format, second-keyed
//! caching of freshly encoded tokens, and the public [`Trust`] API.

mod cache;
mod digest;
mod trust;
mod wire;

pub use trust::Trust;
