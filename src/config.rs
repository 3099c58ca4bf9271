//! Client configuration
//!
//! Configuration is supplied at construction time and is immutable for the
//! client's lifetime. Per-call retry overrides never touch the client's
//! configuration: they are merged with the defaults into a fresh
//! [`RetryPolicy`] value for that call only.

use crate::error::{Error, Result};
use url::Url;

/// Default base URL of the API
pub const DEFAULT_BASE_URL: &str = "https://api.cloudnode.pro/v5/";

/// Default number of automatic retries for a failed call
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Default upper bound, in seconds, on an acceptable server retry hint
pub const DEFAULT_MAX_RETRY_DELAY: u64 = 5;

// ============================================================================
// Client Configuration
// ============================================================================

/// Configuration for the API client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL all operation paths are resolved against
    pub base_url: Url,
    /// Whether failed calls are automatically retried
    pub auto_retry: bool,
    /// Maximum acceptable server-hinted retry delay, in seconds. Hints
    /// above this bound surface the failure immediately.
    pub max_retry_delay: u64,
    /// Maximum number of retries after the initial attempt
    pub max_retries: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            auto_retry: true,
            max_retry_delay: DEFAULT_MAX_RETRY_DELAY,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

impl ClientConfig {
    /// Create a new config builder
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Resolve the effective retry policy for one call.
    ///
    /// Unset override fields fall back to the client's configured values.
    /// The result is a new value; neither input is modified.
    pub fn retry_policy(&self, overrides: Option<&RetryOverrides>) -> RetryPolicy {
        let overrides = overrides.cloned().unwrap_or_default();
        RetryPolicy {
            auto_retry: overrides.auto_retry.unwrap_or(self.auto_retry),
            max_retry_delay: overrides.max_retry_delay.unwrap_or(self.max_retry_delay),
            max_retries: overrides.max_retries.unwrap_or(self.max_retries),
        }
    }
}

/// Builder for the client config
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    base_url: Option<String>,
    auto_retry: Option<bool>,
    max_retry_delay: Option<u64>,
    max_retries: Option<u32>,
}

impl ClientConfigBuilder {
    /// Set the base URL
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Enable or disable automatic retries
    #[must_use]
    pub fn auto_retry(mut self, enabled: bool) -> Self {
        self.auto_retry = Some(enabled);
        self
    }

    /// Set the maximum acceptable retry delay in seconds
    #[must_use]
    pub fn max_retry_delay(mut self, seconds: u64) -> Self {
        self.max_retry_delay = Some(seconds);
        self
    }

    /// Set the maximum number of retries
    #[must_use]
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.max_retries = Some(retries);
        self
    }

    /// Build the config
    pub fn build(self) -> Result<ClientConfig> {
        let defaults = ClientConfig::default();
        let base_url = match self.base_url {
            // A base URL without a trailing slash would swallow its last
            // segment on join, so normalize here.
            Some(url) if url.ends_with('/') => Url::parse(&url)?,
            Some(url) => Url::parse(&format!("{url}/"))?,
            None => defaults.base_url,
        };
        if base_url.cannot_be_a_base() {
            return Err(Error::config(format!("cannot use {base_url} as a base URL")));
        }
        Ok(ClientConfig {
            base_url,
            auto_retry: self.auto_retry.unwrap_or(defaults.auto_retry),
            max_retry_delay: self.max_retry_delay.unwrap_or(defaults.max_retry_delay),
            max_retries: self.max_retries.unwrap_or(defaults.max_retries),
        })
    }
}

// ============================================================================
// Per-Call Retry Overrides
// ============================================================================

/// Partial retry configuration for a single call
///
/// Any field left unset falls back to the client's configuration.
#[derive(Debug, Clone, Default)]
pub struct RetryOverrides {
    /// Override the auto-retry flag
    pub auto_retry: Option<bool>,
    /// Override the maximum acceptable retry delay in seconds
    pub max_retry_delay: Option<u64>,
    /// Override the maximum number of retries
    pub max_retries: Option<u32>,
}

impl RetryOverrides {
    /// Create an empty override set
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable automatic retries for this call
    #[must_use]
    pub fn auto_retry(mut self, enabled: bool) -> Self {
        self.auto_retry = Some(enabled);
        self
    }

    /// Set the maximum acceptable retry delay for this call
    #[must_use]
    pub fn max_retry_delay(mut self, seconds: u64) -> Self {
        self.max_retry_delay = Some(seconds);
        self
    }

    /// Set the maximum number of retries for this call
    #[must_use]
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.max_retries = Some(retries);
        self
    }
}

/// Effective retry policy for one call, resolved from the client
/// configuration and any per-call overrides
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Whether failed calls are retried at all
    pub auto_retry: bool,
    /// Maximum acceptable server-hinted delay, in seconds
    pub max_retry_delay: u64,
    /// Maximum number of retries after the initial attempt
    pub max_retries: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url.as_str(), DEFAULT_BASE_URL);
        assert!(config.auto_retry);
        assert_eq!(config.max_retry_delay, 5);
        assert_eq!(config.max_retries, 3);
    }

    #[test]
    fn test_builder_normalizes_trailing_slash() {
        let config = ClientConfig::builder()
            .base_url("https://api.example.com/v5")
            .build()
            .unwrap();
        assert_eq!(config.base_url.as_str(), "https://api.example.com/v5/");
    }

    #[test]
    fn test_builder_rejects_invalid_url() {
        assert!(ClientConfig::builder().base_url("not a url").build().is_err());
    }

    #[test]
    fn test_retry_policy_defaults() {
        let config = ClientConfig::default();
        let policy = config.retry_policy(None);
        assert_eq!(
            policy,
            RetryPolicy {
                auto_retry: true,
                max_retry_delay: 5,
                max_retries: 3
            }
        );
    }

    #[test]
    fn test_retry_policy_merge_is_pure() {
        let config = ClientConfig::builder()
            .max_retries(10)
            .build()
            .unwrap();
        let overrides = RetryOverrides::new().auto_retry(false).max_retry_delay(30);

        let policy = config.retry_policy(Some(&overrides));
        assert!(!policy.auto_retry);
        assert_eq!(policy.max_retry_delay, 30);
        // Unset field falls back to the client's value
        assert_eq!(policy.max_retries, 10);

        // Neither input changed
        assert!(config.auto_retry);
        assert_eq!(overrides.max_retries, None);
    }
}
