//! Transport metadata attached to every envelope

use crate::schema::Operation;
use crate::types::{JsonValue, StringMap};
use url::Url;

/// Body payload of one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestBody {
    /// JSON-encoded body, sent as `application/json`
    Json(JsonValue),
    /// Plain string body, sent as `text/plain`
    Text(String),
}

/// The concrete values substituted into an operation descriptor for one
/// call. Retained on the response envelope so pagination can re-issue the
/// same logical query with a different page.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// The operation that was called
    pub operation: &'static Operation,
    /// Resolved path parameters
    pub path_params: StringMap,
    /// Resolved query parameters
    pub query_params: StringMap,
    /// Request body, if one was sent
    pub body: Option<RequestBody>,
}

impl RequestContext {
    /// Create a request context for one call
    pub fn new(
        operation: &'static Operation,
        path_params: StringMap,
        query_params: StringMap,
        body: Option<RequestBody>,
    ) -> Self {
        Self {
            operation,
            path_params,
            query_params,
            body,
        }
    }

    /// Create a context with no parameters at all
    pub fn bare(operation: &'static Operation) -> Self {
        Self::new(operation, StringMap::new(), StringMap::new(), None)
    }
}

/// Low-level facts about a completed exchange
#[derive(Debug, Clone)]
pub struct ResponseMeta {
    /// The status code of the response
    pub status: u16,
    /// The status message corresponding to the status code (e.g. `OK`)
    pub status_text: String,
    /// Whether the status was in the `200`–`299` range
    pub ok: bool,
    /// Whether the response is the result of a redirect
    pub redirected: bool,
    /// The final URL of the response
    pub url: Url,
    /// Response headers; keys are lower-cased
    pub headers: StringMap,
    /// The request this response answers
    pub request: RequestContext,
}

impl ResponseMeta {
    /// Look up a response header by name (case-insensitive)
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_ascii_lowercase()).map(String::as_str)
    }
}
