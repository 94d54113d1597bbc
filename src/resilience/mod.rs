//! Resilience subsystem.
//!
//! # Data Flow
//! ```text
//! Faucet call:
//!     → retries.rs (classify failure, decide retry / stop / fail)
//!     → backoff.rs (delay before the next rate-limited attempt)
//! ```
//!
//! # Design Decisions
//! - Only rate limiting is retried; everything else is final
//! - No jitter: requests are strictly sequential, there is no herd
//! - No ceiling by default; `max_delay_ms` / `max_retries` opt in

pub mod backoff;
pub mod retries;

pub use retries::{with_retry, RetryOutcome, RetryPolicy};
