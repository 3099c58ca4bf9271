//! The API client
//!
//! Holds the transport, the optional bearer token and the immutable
//! configuration. Endpoint groups are reached through accessor methods
//! ([`Client::newsletters`], [`Client::tokens`], ...); each typed method
//! pairs a static operation descriptor with concrete parameter values and
//! hands both to the generic send path.

use crate::api::{Account, Auth, Newsletters, Projects, Tokens};
use crate::config::{ClientConfig, RetryOverrides};
use crate::error::Result;
use crate::response::{Envelope, RequestContext};
use crate::{API_VERSION, USER_AGENT};
use serde::de::DeserializeOwned;

/// Result of comparing the client's supported API version against the
/// version the server reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compatibility {
    /// Fully compatible; only the patch version may differ
    Compatible,
    /// Compatible, but new features are unavailable (minor version differs)
    Outdated,
    /// Breaking changes (major version differs)
    Incompatible,
}

/// Cloudnode API client
#[derive(Clone)]
pub struct Client {
    transport: reqwest::Client,
    token: Option<String>,
    config: ClientConfig,
}

impl Client {
    /// Create an unauthenticated client with the default configuration
    pub fn new() -> Self {
        Self::with_config(None, ClientConfig::default())
    }

    /// Create a client that authenticates with the given API token
    pub fn with_token(token: impl Into<String>) -> Self {
        Self::with_config(Some(token.into()), ClientConfig::default())
    }

    /// Create a client with an optional token and a custom configuration
    pub fn with_config(token: Option<String>, config: ClientConfig) -> Self {
        let transport = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .expect("Failed to build HTTP client");
        Self {
            transport,
            token,
            config,
        }
    }

    /// The client configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The configured API token, if any
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub(crate) fn transport(&self) -> &reqwest::Client {
        &self.transport
    }

    // ========================================================================
    // Endpoint groups
    // ========================================================================

    /// Newsletter and subscription operations
    pub fn newsletters(&self) -> Newsletters<'_> {
        Newsletters::new(self)
    }

    /// Token management operations
    pub fn tokens(&self) -> Tokens<'_> {
        Tokens::new(self)
    }

    /// Account registration and login
    pub fn auth(&self) -> Auth<'_> {
        Auth::new(self)
    }

    /// Operations on the authenticated account
    pub fn account(&self) -> Account<'_> {
        Account::new(self)
    }

    /// Project operations
    pub fn projects(&self) -> Projects<'_> {
        Projects::new(self)
    }

    // ========================================================================
    // Generic entry points
    // ========================================================================

    /// Call an operation directly, with optional per-call retry overrides.
    ///
    /// The typed endpoint methods cover every declared operation; this is
    /// the escape hatch for callers that need to adjust retry behavior for
    /// a single call.
    pub async fn call<T: DeserializeOwned>(
        &self,
        ctx: RequestContext,
        overrides: Option<&RetryOverrides>,
    ) -> Result<Envelope<T>> {
        self.send(ctx, overrides).await
    }

    /// Check compatibility with the API server.
    ///
    /// Fetches the API root above the versioned base URL and compares the
    /// reported version against the version this client was built for.
    pub async fn check_compatibility(&self) -> Result<Compatibility> {
        let root = self.config.base_url.join("../")?;
        let info: crate::api::models::VersionInfo =
            self.transport.get(root).send().await?.json().await?;
        Ok(compare_versions(&info.version, API_VERSION))
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("config", &self.config)
            .field("has_token", &self.token.is_some())
            .finish_non_exhaustive()
    }
}

/// Compare two versions on their major and minor parts. Missing parts
/// count as `0`.
fn compare_versions(server: &str, client: &str) -> Compatibility {
    fn part(version: &str, index: usize) -> &str {
        version
            .split('.')
            .nth(index)
            .filter(|p| !p.is_empty())
            .unwrap_or("0")
    }

    if part(server, 0) != part(client, 0) {
        Compatibility::Incompatible
    } else if part(server, 1) != part(client, 1) {
        Compatibility::Outdated
    } else {
        Compatibility::Compatible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_versions() {
        assert_eq!(
            compare_versions("5.12.0", "5.12.3"),
            Compatibility::Compatible
        );
        assert_eq!(compare_versions("5.13.0", "5.12.0"), Compatibility::Outdated);
        assert_eq!(
            compare_versions("6.0.0", "5.12.0"),
            Compatibility::Incompatible
        );
    }

    #[test]
    fn test_compare_versions_missing_parts() {
        assert_eq!(compare_versions("5", "5.0.0"), Compatibility::Compatible);
        assert_eq!(compare_versions("5", "5.12.0"), Compatibility::Outdated);
        assert_eq!(compare_versions("", "5.12.0"), Compatibility::Incompatible);
    }

    #[test]
    fn test_debug_does_not_leak_token() {
        let client = Client::with_token("token_secret");
        let debug = format!("{client:?}");
        assert!(!debug.contains("token_secret"));
        assert!(debug.contains("has_token: true"));
    }
}
