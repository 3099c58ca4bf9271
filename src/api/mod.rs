//! Typed API surface
//!
//! One endpoint group per schema namespace. Each group holds a borrowed
//! client and pairs static [`crate::schema::Operation`] descriptors with
//! the concrete parameter values of a call. All groups go through the same
//! generic send path; none carries state of its own.

pub mod models;

mod account;
mod auth;
mod newsletters;
mod projects;
mod tokens;

pub use account::Account;
pub use auth::Auth;
pub use newsletters::Newsletters;
pub use projects::Projects;
pub use tokens::Tokens;

use crate::types::StringMap;

/// Build a parameter map from literal entries
pub(crate) fn params<const N: usize>(entries: [(&'static str, String); N]) -> StringMap {
    entries
        .into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect()
}
