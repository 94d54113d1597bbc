//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! resilience + runner produce:
//!     → logging.rs (structured log events on stderr)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → terminal / log collector
//!     → Prometheus scrape (optional)
//! ```

pub mod logging;
pub mod metrics;
