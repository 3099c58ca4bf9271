//! Operation descriptor types
//!
//! Descriptors are created at compile time and immutable thereafter.

use crate::types::Method;

/// Authorization requirement of an operation
///
/// Mirrors the schema's tri-state token field: no token needed, any valid
/// token, or a token holding a specific permission scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Auth {
    /// No token required; the Authorization header is never sent
    None,
    /// A valid token of any scope is required
    AnyToken,
    /// A token holding the named permission scope is required
    Scope(&'static str),
}

impl Auth {
    /// Whether this operation wants credentials attached when available
    pub fn required(self) -> bool {
        !matches!(self, Auth::None)
    }

    /// The named scope, if this operation requires a specific one
    pub fn scope(self) -> Option<&'static str> {
        match self {
            Auth::Scope(scope) => Some(scope),
            _ => None,
        }
    }
}

/// Definition of one request parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parameter {
    /// Parameter name as sent on the wire
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Declared type name from the schema (e.g. `string`, `number`)
    pub type_name: &'static str,
    /// Whether the parameter must be supplied
    pub required: bool,
    /// Default value applied when an optional parameter is omitted
    pub default: Option<&'static str>,
}

/// One declared response shape of an operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseShape {
    /// HTTP status code this shape is returned with
    pub status: u16,
    /// Declared type name from the schema
    pub type_name: &'static str,
}

/// Immutable definition of one API call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    /// Dotted operation name (e.g. `newsletters.list`)
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// HTTP method
    pub method: Method,
    /// URL path template with `:name` placeholders
    pub path: &'static str,
    /// Parameters substituted into the path template
    pub path_params: &'static [Parameter],
    /// Parameters appended to the query string
    pub query_params: &'static [Parameter],
    /// Parameters sent in the request body
    pub body_params: &'static [Parameter],
    /// Declared response shapes, keyed by status code
    pub returns: &'static [ResponseShape],
    /// Authorization requirement
    pub auth: Auth,
}

impl Operation {
    /// Look up a parameter definition by name across all three groups
    pub fn parameter(&self, name: &str) -> Option<&'static Parameter> {
        self.path_params
            .iter()
            .chain(self.query_params)
            .chain(self.body_params)
            .find(|p| p.name == name)
    }

    /// Whether the schema declares a response for the given status
    pub fn declares_status(&self, status: u16) -> bool {
        self.returns.iter().any(|r| r.status == status)
    }

    /// The declared success (2xx) response shape, if any
    pub fn success_shape(&self) -> Option<&'static ResponseShape> {
        self.returns.iter().find(|r| (200..300).contains(&r.status))
    }
}
