//! Success and failure envelopes

use super::meta::ResponseMeta;
use crate::api::models::ApiErrorBody;
use crate::types::JsonValue;

/// A successful API response: the parsed body value plus the transport
/// metadata it arrived with.
///
/// The data keeps exactly the declared type's shape; the metadata is a
/// side-channel that never interferes with it.
#[derive(Debug, Clone)]
pub struct Envelope<T> {
    /// The parsed response body, typed as the operation's declared return
    pub data: T,
    /// Transport metadata and originating request context
    pub meta: ResponseMeta,
}

impl<T> Envelope<T> {
    /// Pair parsed data with its response metadata
    pub fn new(data: T, meta: ResponseMeta) -> Self {
        Self { data, meta }
    }

    /// The HTTP status this envelope arrived with
    pub fn status(&self) -> u16 {
        self.meta.status
    }
}

/// A failed API response: same envelope shape as a success, surfaced
/// through `Err` instead of `Ok`.
///
/// `error` holds the parsed error body when the server answered with the
/// declared error shape; `body` always holds whatever was parsed, so
/// nothing is lost when a proxy or maintenance page answers instead.
#[derive(Debug, Clone)]
pub struct ErrorResponse {
    /// Parsed error body, when the response matched the declared shape
    pub error: Option<ApiErrorBody>,
    /// The raw parsed body
    pub body: JsonValue,
    /// Transport metadata and originating request context
    pub meta: ResponseMeta,
}

impl ErrorResponse {
    /// The HTTP status of the failed call
    pub fn status(&self) -> u16 {
        self.meta.status
    }

    /// The declared error code (e.g. `RATE_LIMITED`), if the body parsed
    pub fn code(&self) -> Option<&str> {
        self.error.as_ref().map(|e| e.code.as_str())
    }

    /// The human-readable error message, if the body parsed
    pub fn message(&self) -> Option<&str> {
        self.error.as_ref().map(|e| e.message.as_str())
    }

    /// Look up a response header by name (case-insensitive)
    pub fn header(&self, name: &str) -> Option<&str> {
        self.meta.header(name)
    }
}

impl std::fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.error {
            Some(body) => write!(
                f,
                "API error {} {}: {}",
                self.meta.status, body.code, body.message
            ),
            None => write!(f, "API error {} {}", self.meta.status, self.meta.status_text),
        }
    }
}
