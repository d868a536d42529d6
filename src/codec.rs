//! JSON codec shared by every endpoint.
//!
//! Decoding is tolerant for all models: unknown fields are skipped and
//! unknown enum constants become the enum's `Unknown` variant, so the API
//! can grow without breaking this client. A `null` in place of a number,
//! string, list or object takes that type's default, and `null` entries in
//! result pages are dropped. Only invalid JSON, or a known field with an
//! incompatible shape, is a decode error.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;

/// Decode a success body into `T`.
///
/// An empty body (e.g. `204 No Content`) is decoded as JSON `null`, which
/// yields `()` or `None` for callers expecting no payload.
pub fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(serde_json::from_slice(b"null")?);
    }
    Ok(serde_json::from_slice(body)?)
}

/// Encode a request body.
pub fn encode<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(value)?)
}
