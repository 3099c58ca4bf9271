//! Response body decoding
//!
//! A body decodes to a JSON value in exactly one of three ways: empty for
//! a 204, JSON-parsed when the server says the content is JSON, and a raw
//! text value otherwise. Typed conversion (including date revival on model
//! fields, see [`super::dates`]) happens afterwards via serde.

use crate::error::{Error, Result};
use crate::types::JsonValue;

/// Decode a response body according to status and content type.
///
/// A 204 has no body and decodes to `null`; so does an empty body on any
/// other status, which keeps `()`-returning operations decodable when a
/// server omits the body entirely.
pub(crate) fn decode_body(
    status: u16,
    content_type: Option<&str>,
    text: &str,
) -> Result<JsonValue> {
    if status == 204 || text.is_empty() {
        return Ok(JsonValue::Null);
    }
    match content_type {
        Some(ct) if ct.starts_with("application/json") => serde_json::from_str(text)
            .map_err(|e| Error::decode(format!("invalid JSON body: {e}"))),
        _ => Ok(JsonValue::String(text.to_string())),
    }
}
