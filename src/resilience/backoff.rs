//! Exponential backoff.

use std::time::Duration;

/// Calculate the exponential backoff delay for a retry attempt.
///
/// Attempt 1 waits `base_ms`, each further attempt doubles it. No jitter.
/// Without `max_ms` the delay only stops growing when it saturates `u64`.
pub fn calculate_backoff(attempt: u32, base_ms: u64, max_ms: Option<u64>) -> Duration {
    if attempt == 0 {
        return Duration::from_millis(0);
    }

    let exponential_base = 2u64.saturating_pow(attempt - 1);
    let delay_ms = base_ms.saturating_mul(exponential_base);
    let capped_delay = match max_ms {
        Some(max) => delay_ms.min(max),
        None => delay_ms,
    };

    Duration::from_millis(capped_delay)
}

/// Stateful backoff sequence for one retried operation.
#[derive(Debug, Clone)]
pub struct Backoff {
    attempt: u32,
    base_ms: u64,
    max_ms: Option<u64>,
    max_retries: Option<u32>,
}

impl Backoff {
    pub fn new(base_ms: u64, max_ms: Option<u64>, max_retries: Option<u32>) -> Self {
        Self {
            attempt: 0,
            base_ms,
            max_ms,
            max_retries,
        }
    }

    /// Retries handed out so far.
    pub fn attempts(&self) -> u32 {
        self.attempt
    }

    /// Delay before the next retry, or `None` once the retry ceiling is hit.
    pub fn next_delay(&mut self) -> Option<Duration> {
        if let Some(max) = self.max_retries {
            if self.attempt >= max {
                return None;
            }
        }
        self.attempt = self.attempt.saturating_add(1);
        Some(calculate_backoff(self.attempt, self.base_ms, self.max_ms))
    }
}
