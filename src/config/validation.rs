//! Configuration validation.
//!
//! Serde handles syntax; this checks values. All problems are reported at
//! once rather than stopping at the first.

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::FaucetConfig;
use crate::faucet::client::faucet_endpoint;
use crate::observability::logging::LOG_LEVELS;

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Validate a configuration, returning every error found.
pub fn validate_config(config: &FaucetConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.faucet.requests == 0 {
        errors.push(ValidationError::new("faucet.requests", "must be greater than 0"));
    }

    if faucet_endpoint(&config.faucet.api_url).is_err() {
        errors.push(ValidationError::new(
            "faucet.api_url",
            format!("'{}' is not a valid URL", config.faucet.api_url),
        ));
    }

    if config.faucet.request_timeout_secs == Some(0) {
        errors.push(ValidationError::new(
            "faucet.request_timeout_secs",
            "must be greater than 0 when set",
        ));
    }

    if config.retries.base_delay_ms == 0 {
        errors.push(ValidationError::new("retries.base_delay_ms", "must be greater than 0"));
    }

    if let Some(max) = config.retries.max_delay_ms {
        if max < config.retries.base_delay_ms {
            errors.push(ValidationError::new(
                "retries.max_delay_ms",
                format!("{} is below base_delay_ms {}", max, config.retries.base_delay_ms),
            ));
        }
    }

    if !LOG_LEVELS.contains(&config.observability.log_level.as_str()) {
        errors.push(ValidationError::new(
            "observability.log_level",
            format!(
                "'{}' is not one of {}",
                config.observability.log_level,
                LOG_LEVELS.join(", ")
            ),
        ));
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::new(
            "observability.metrics_address",
            format!("'{}' is not a socket address", config.observability.metrics_address),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
