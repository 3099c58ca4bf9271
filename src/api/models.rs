//! Wire models for API schema v5.12.0
//!
//! Every struct mirrors one response shape declared in the schema. Date
//! fields are ISO-8601 strings on the wire and revive to [`DateTime<Utc>`]
//! on decode via [`crate::response::dates`].

use crate::response::dates;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================================
// Error Body
// ============================================================================

/// Declared error codes
pub mod codes {
    /// A request field failed validation
    pub const INVALID_DATA: &str = "INVALID_DATA";
    /// The addressed resource does not exist
    pub const RESOURCE_NOT_FOUND: &str = "RESOURCE_NOT_FOUND";
    /// The request conflicts with existing state
    pub const CONFLICT: &str = "CONFLICT";
    /// The addressed resource cannot be modified
    pub const MODIFICATION_NOT_ALLOWED: &str = "MODIFICATION_NOT_ALLOWED";
    /// Missing or invalid credentials
    pub const UNAUTHORIZED: &str = "UNAUTHORIZED";
    /// The token lacks the required scope
    pub const NO_PERMISSION: &str = "NO_PERMISSION";
    /// The caller's IP address was rejected
    pub const IP_REJECTED: &str = "IP_REJECTED";
    /// Too many requests; retry hints are in the response headers
    pub const RATE_LIMITED: &str = "RATE_LIMITED";
    /// The API is temporarily down for maintenance
    pub const MAINTENANCE: &str = "MAINTENANCE";
    /// Unexpected server-side failure
    pub const INTERNAL_SERVER_ERROR: &str = "INTERNAL_SERVER_ERROR";
}

/// Per-field validation message: either a message for the field itself or
/// messages for its nested fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldError {
    /// Message for the field itself
    Message(String),
    /// Messages for nested fields
    Nested(HashMap<String, String>),
}

/// An API error response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    /// A human-readable description of this error
    pub message: String,
    /// Error code
    pub code: String,
    /// Affected request fields, keyed by input parameter name
    #[serde(default)]
    pub fields: HashMap<String, FieldError>,
}

// ============================================================================
// Newsletters
// ============================================================================

/// A data field that is required to subscribe to a newsletter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsletterData {
    /// The name of the field
    pub name: String,
    /// Description of the field
    pub description: Option<String>,
    /// The type of data (`string`, `number` or `boolean`)
    #[serde(rename = "type")]
    pub data_type: String,
    /// Whether this field is required
    pub required: bool,
}

/// A newsletter that can be subscribed to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Newsletter {
    /// The unique identifier for this newsletter
    pub id: String,
    /// The name of this newsletter
    pub name: String,
    /// Additional data that is required to subscribe
    pub data: HashMap<String, NewsletterData>,
}

/// A subscription to a newsletter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsletterSubscription {
    /// The ID of the subscription. Can be used to unsubscribe.
    pub id: String,
    /// The email address of the subscriber
    pub email: String,
    /// The ID of the newsletter that was subscribed to
    pub newsletter: String,
}

/// A newsletter subscription with a creation date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatedNewsletterSubscription {
    /// The ID of the subscription. Can be used to unsubscribe.
    pub id: String,
    /// The email address of the subscriber
    pub email: String,
    /// The ID of the newsletter that was subscribed to
    pub newsletter: String,
    /// The date the subscription was created
    #[serde(with = "dates")]
    pub date: DateTime<Utc>,
}

// ============================================================================
// Tokens
// ============================================================================

/// Additional metadata about a token
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenMetadata {
    /// A user-supplied note for this token
    pub note: Option<String>,
}

/// An authentication token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The ID or key of the token
    pub id: String,
    /// Date and time when this token was created
    #[serde(with = "dates")]
    pub created: DateTime<Utc>,
    /// Date and time when this token expires. Null if it never expires.
    #[serde(with = "dates::optional")]
    pub expires: Option<DateTime<Utc>>,
    /// Permission scopes that this token holds
    pub permissions: Vec<String>,
    /// Set when this token is for internal use only, e.g. to power a
    /// session — i.e. it was not created by the client
    pub internal: Option<String>,
    /// Additional metadata about this token
    #[serde(default)]
    pub metadata: TokenMetadata,
}

/// A token without its `permissions` field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialToken {
    /// The ID or key of the token
    pub id: String,
    /// Date and time when this token was created
    #[serde(with = "dates")]
    pub created: DateTime<Utc>,
    /// Date and time when this token expires. Null if it never expires.
    #[serde(with = "dates::optional")]
    pub expires: Option<DateTime<Utc>>,
    /// Set when this token is for internal use only
    pub internal: Option<String>,
    /// Additional metadata about this token
    #[serde(default)]
    pub metadata: TokenMetadata,
}

/// A recent API request made with a token, in list form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortRequest {
    /// The ID of the request
    pub id: String,
    /// The HTTP method of the request
    pub method: String,
    /// The URL scheme of the request
    pub scheme: String,
    /// The host the request was made to
    pub host: String,
    /// The request path including the query string
    pub url: String,
    /// The status code the request was answered with
    pub status: u16,
    /// The IP address the request was made from
    pub ip: String,
    /// Date and time when the request was made
    #[serde(with = "dates")]
    pub date: DateTime<Utc>,
}

/// A recent API request with full details
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestDetails {
    /// The ID of the request
    pub id: String,
    /// The HTTP method of the request
    pub method: String,
    /// The URL scheme of the request
    pub scheme: String,
    /// The host the request was made to
    pub host: String,
    /// The request path including the query string
    pub url: String,
    /// The status code the request was answered with
    pub status: u16,
    /// The IP address the request was made from
    pub ip: String,
    /// Date and time when the request was made
    #[serde(with = "dates")]
    pub date: DateTime<Utc>,
    /// Request headers, with sensitive values redacted by the server
    #[serde(default)]
    pub headers: HashMap<String, String>,
    /// The request body, if one was recorded
    pub body: Option<String>,
}

// ============================================================================
// Auth & Account
// ============================================================================

/// A newly created session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Session token. Also returned in the `Set-Cookie` header.
    pub session: String,
}

/// Details of the authenticated account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountDetails {
    /// The unique identifier of the account
    pub id: String,
    /// Whether a password is set on the account
    pub password: bool,
    /// The group this account belongs to
    pub group: String,
    /// Permission scopes held by the account
    #[serde(default)]
    pub permissions: Vec<String>,
}

/// Identity of the authenticated account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountIdentity {
    /// The account's unique username
    pub username: String,
    /// The account's full name, if set
    pub name: Option<String>,
}

/// An e-mail address registered on the account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountEmail {
    /// The ID of the e-mail address
    pub id: String,
    /// The e-mail address, hidden unless the token may read it
    pub address: Option<String>,
    /// Whether this address is the account's primary address
    pub primary: bool,
    /// Whether this address has been verified
    pub verified: bool,
}

/// The account's primary e-mail address, with the date it was added
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatedPrimaryEmail {
    /// The ID of the e-mail address
    pub id: String,
    /// The e-mail address, hidden unless the token may read it
    pub address: Option<String>,
    /// Whether this address has been verified
    pub verified: bool,
    /// Date and time when this address was added to the account
    #[serde(with = "dates")]
    pub date: DateTime<Utc>,
}

/// A permission scope with a user-friendly description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permission {
    /// The permission scope string
    pub permission: String,
    /// User-friendly description of the permission
    pub description: String,
    /// Additional note about the permission, if any
    pub note: Option<String>,
    /// The group this permission belongs to, if any
    pub group: Option<String>,
}

// ============================================================================
// Projects
// ============================================================================

/// A project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// The unique identifier of the project
    pub id: String,
    /// Project name
    pub name: String,
    /// The ID of the user that owns this project
    pub user: String,
}

// ============================================================================
// Version Probe
// ============================================================================

/// Version information reported by the API root
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionInfo {
    /// The API version the server is running
    pub version: String,
}
