//! Error types for the Cloudnode client
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.
//!
//! A failed API call is not a distinct exception type: the server answers
//! with the same envelope shape as a success, and the client surfaces it as
//! [`Error::Api`] carrying the full [`ErrorResponse`]. Callers branch on
//! control flow (`Ok` vs `Err`) and pattern-match the error envelope's
//! status, headers and code directly.

use crate::response::ErrorResponse;
use thiserror::Error;

/// The main error type for the Cloudnode client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // API Errors
    // ============================================================================
    /// The server answered with a non-success status. Carries the parsed
    /// error body together with the response metadata and the originating
    /// request context.
    #[error("{0}")]
    Api(Box<ErrorResponse>),

    // ============================================================================
    // Transport Errors
    // ============================================================================
    /// The request never produced a response (DNS failure, connection
    /// reset, timeout in the transport)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A URL could not be parsed or joined against the base URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Decoding Errors
    // ============================================================================
    /// JSON serialization or deserialization failed outside of a response
    /// body (e.g. while encoding a request body)
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// A response body could not be decoded into its declared shape
    #[error("Failed to decode response: {message}")]
    Decode {
        /// What failed to decode and why
        message: String,
    },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    /// Invalid client configuration
    #[error("Configuration error: {message}")]
    Config {
        /// Which setting is invalid and why
        message: String,
    },
}

impl Error {
    /// Create an API error from an error response envelope
    pub fn api(response: ErrorResponse) -> Self {
        Self::Api(Box::new(response))
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// The error response envelope, if this is an API error
    pub fn as_api(&self) -> Option<&ErrorResponse> {
        match self {
            Self::Api(response) => Some(response),
            _ => None,
        }
    }

    /// The declared API error code (e.g. `RATE_LIMITED`), if present
    pub fn api_code(&self) -> Option<&str> {
        self.as_api().and_then(ErrorResponse::code)
    }

    /// The HTTP status of the failed call, if this is an API error
    pub fn api_status(&self) -> Option<u16> {
        self.as_api().map(ErrorResponse::status)
    }
}

/// Result type alias for the Cloudnode client
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::decode("unexpected body");
        assert_eq!(err.to_string(), "Failed to decode response: unexpected body");

        let err = Error::config("base URL must end with a slash");
        assert_eq!(
            err.to_string(),
            "Configuration error: base URL must end with a slash"
        );
    }

    #[test]
    fn test_non_api_errors_have_no_code() {
        let err = Error::decode("nope");
        assert!(err.as_api().is_none());
        assert!(err.api_code().is_none());
        assert!(err.api_status().is_none());
    }
}
