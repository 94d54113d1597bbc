//! Metrics collection and exposition.
//!
//! # Metrics
//! - `faucet_requests_total` (counter): finished requests by outcome
//!   (`success`, `limit_reached`, `error`)
//! - `faucet_rate_limit_retries_total` (counter): backoffs taken
//! - `faucet_backoff_seconds` (histogram): backoff delay distribution
//!
//! Without an installed recorder every call is a no-op.

use std::net::SocketAddr;
use std::time::Duration;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Start the Prometheus scrape endpoint on `addr`.
///
/// Must be called from within the Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

pub fn record_request(outcome: &'static str) {
    metrics::counter!("faucet_requests_total", "outcome" => outcome).increment(1);
}

pub fn record_backoff(delay: Duration) {
    metrics::counter!("faucet_rate_limit_retries_total").increment(1);
    metrics::histogram!("faucet_backoff_seconds").record(delay.as_secs_f64());
}
