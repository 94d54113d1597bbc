//! Faucet run orchestration.
//!
//! # Data Flow
//! ```text
//! for each of N requests (sequential):
//!     → resilience::with_retry (backs off on rate limits)
//!     → success: report tx link, continue
//!     → faucet limit: report summary, stop (exit 0)
//!     → other error: report diagnostics, stop (exit 1)
//! ```

pub mod request_loop;

pub use request_loop::{RequestLoop, RunError, RunSummary, StopReason};
