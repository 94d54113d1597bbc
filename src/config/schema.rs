//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from TOML files. Every
//! field has a default, so an empty file (or no file) is a valid config.

use serde::{Deserialize, Serialize};

use crate::faucet::{Network, Token};

/// Default CDP platform API root.
pub const DEFAULT_API_URL: &str = "https://api.cdp.coinbase.com/platform";

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct FaucetConfig {
    /// What to request and where.
    pub faucet: FaucetSettings,

    /// Backoff on rate limiting.
    pub retries: RetryConfig,

    /// Logging and metrics.
    pub observability: ObservabilityConfig,
}

/// Faucet request settings.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct FaucetSettings {
    /// Network to fund on.
    pub network: Network,

    /// Token to request.
    pub token: Token,

    /// Number of funding requests to issue.
    pub requests: u32,

    /// CDP platform API root.
    pub api_url: String,

    /// Per-request HTTP timeout in seconds. Unset means no timeout.
    pub request_timeout_secs: Option<u64>,
}

impl Default for FaucetSettings {
    fn default() -> Self {
        Self {
            network: Network::BaseSepolia,
            token: Token::Eth,
            requests: 1000,
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout_secs: None,
        }
    }
}

/// Retry configuration for rate-limited requests.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct RetryConfig {
    /// First backoff delay in milliseconds; doubles on every retry.
    pub base_delay_ms: u64,

    /// Upper bound for a single delay. Unset means uncapped.
    pub max_delay_ms: Option<u64>,

    /// Retries per request before giving up. Unset means retry forever.
    pub max_retries: Option<u32>,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            base_delay_ms: 1000,
            max_delay_ms: None,
            max_retries: None,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable the Prometheus metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}
