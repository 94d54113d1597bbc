//! Retry wrapper for faucet calls.
//!
//! # Policy
//! - `rate_limit_exceeded`: back off (1s, 2s, 4s, ...) and try again
//! - `faucet_limit_exceeded`: stop, hand the error back as [`RetryOutcome::LimitReached`]
//! - anything else: give up and return the error
//!
//! Retries are unbounded unless `max_retries` is configured.

use std::future::Future;
use std::time::Duration;

use crate::config::RetryConfig;
use crate::faucet::FaucetError;
use crate::observability::metrics;
use crate::resilience::backoff::Backoff;

/// Backoff settings applied to rate-limited calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    pub base_delay: Duration,
    pub max_delay: Option<Duration>,
    pub max_retries: Option<u32>,
}

impl RetryPolicy {
    fn backoff(&self) -> Backoff {
        Backoff::new(
            self.base_delay.as_millis() as u64,
            self.max_delay.map(|d| d.as_millis() as u64),
            self.max_retries,
        )
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from(&RetryConfig::default())
    }
}

impl From<&RetryConfig> for RetryPolicy {
    fn from(config: &RetryConfig) -> Self {
        Self {
            base_delay: Duration::from_millis(config.base_delay_ms),
            max_delay: config.max_delay_ms.map(Duration::from_millis),
            max_retries: config.max_retries,
        }
    }
}

/// Non-error result of a retried call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RetryOutcome<T> {
    /// The call eventually succeeded.
    Completed(T),
    /// The faucet quota is used up; carries the API's explanation.
    LimitReached(FaucetError),
}

/// Run `operation` until it succeeds, hits the faucet limit, or fails hard.
pub async fn with_retry<T, F, Fut>(
    policy: &RetryPolicy,
    mut operation: F,
) -> Result<RetryOutcome<T>, FaucetError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, FaucetError>>,
{
    let mut backoff = policy.backoff();

    loop {
        match operation().await {
            Ok(value) => return Ok(RetryOutcome::Completed(value)),
            Err(e) if e.is_rate_limited() => {
                let Some(delay) = backoff.next_delay() else {
                    tracing::warn!(
                        retries = backoff.attempts(),
                        error = %e,
                        "Retry limit exhausted while rate limited"
                    );
                    return Err(e);
                };
                tracing::warn!(
                    attempt = backoff.attempts(),
                    delay_ms = delay.as_millis() as u64,
                    "Rate limited, backing off"
                );
                metrics::record_backoff(delay);
                tokio::time::sleep(delay).await;
            }
            Err(e) if e.is_faucet_limit() => {
                tracing::warn!(error = %e, "Faucet limit reached");
                return Ok(RetryOutcome::LimitReached(e));
            }
            Err(e) => {
                tracing::debug!(error = %e, "Faucet request failed");
                return Err(e);
            }
        }
    }
}
