//! XML payload decoding.
//!
//! Recurly v2 speaks XML on the wire. This module converts response bodies
//! into the nested key-value structure ([`serde_json::Value`]) that the
//! resource model consumes during inflation.
//!
//! The decoder is a trait object collaborator rather than a module-level
//! singleton so tests can substitute fakes without process-wide state.

mod decoder;

pub use decoder::XmlDecoder;

use std::fmt;

use serde_json::Value;
use thiserror::Error;

/// Error returned when a response body cannot be decoded.
///
/// Carries both the parse failure and the raw body for diagnostics.
#[derive(Debug, Error)]
#[error("failed to decode XML payload: {reason}")]
pub struct DecodeError {
    /// Description of the parse failure.
    pub reason: String,
    /// The raw body that failed to decode.
    pub body: String,
}

/// A decoder from wire payloads to nested key-value structures.
///
/// Implementations must turn a full response body into a [`Value`] or fail
/// with a [`DecodeError`]; partial data is never returned for malformed
/// input.
pub trait Decode: fmt::Debug + Send + Sync {
    /// Decodes a response body.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] if the body is not well-formed.
    fn decode(&self, body: &str) -> Result<Value, DecodeError>;
}
