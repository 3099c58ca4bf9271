//! Bounded automatic retry driven by server hints

use crate::client::Client;
use crate::config::RetryOverrides;
use crate::error::{Error, Result};
use crate::response::{Envelope, RequestContext};
use crate::types::StringMap;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::warn;

/// Headers consulted for the retry delay on a rate-limited (429) response,
/// in order of precedence
const RATE_LIMIT_HINTS: [&str; 6] = [
    "x-ratelimit-reset",
    "x-rate-limit-reset",
    "ratelimit-reset",
    "rate-limit-reset",
    "retry-after",
    "x-retry-after",
];

/// Headers consulted for the retry delay on any other failure status
const GENERAL_HINTS: [&str; 2] = ["x-retry-after", "retry-after"];

/// Extract the server's retry hint, in seconds, from a failed response.
///
/// The first header present wins; if its value is not numeric there is no
/// hint. Returns `None` when no consulted header is present or parsable.
pub(crate) fn retry_hint(status: u16, headers: &StringMap) -> Option<f64> {
    let names: &[&str] = if status == 429 {
        &RATE_LIMIT_HINTS
    } else {
        &GENERAL_HINTS
    };
    names
        .iter()
        .find_map(|name| headers.get(*name))
        .and_then(|value| value.parse::<f64>().ok())
        .filter(|delay| delay.is_finite())
}

impl Client {
    /// Send a request with automatic retry.
    ///
    /// Retries only failures that are API response envelopes and only while
    /// the server supplies a delay hint within `max_retry_delay`, up to
    /// `max_retries` additional attempts. Transport-level failures (DNS,
    /// connection reset) carry no server hint and surface immediately.
    pub(crate) async fn send<T: DeserializeOwned>(
        &self,
        ctx: RequestContext,
        overrides: Option<&RetryOverrides>,
    ) -> Result<Envelope<T>> {
        let policy = self.config().retry_policy(overrides);
        let mut attempt: u32 = 0;

        loop {
            let failure = match self.execute(&ctx).await {
                Ok(envelope) => return Ok(envelope),
                Err(failure) => failure,
            };

            let response = match &failure {
                Error::Api(response) if policy.auto_retry && attempt < policy.max_retries => {
                    response
                }
                _ => return Err(failure),
            };

            let delay = match retry_hint(response.status(), &response.meta.headers) {
                Some(delay) if delay <= policy.max_retry_delay as f64 => delay.max(0.0),
                _ => return Err(failure),
            };

            attempt += 1;
            warn!(
                operation = ctx.operation.name,
                status = response.status(),
                attempt,
                max_retries = policy.max_retries,
                delay_secs = delay,
                "call failed, retrying after server hint"
            );
            tokio::time::sleep(Duration::from_secs_f64(delay)).await;
        }
    }
}
