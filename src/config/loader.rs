//! Configuration loading from disk and environment.

use std::fs;
use std::path::Path;

use alloy::primitives::Address;
use thiserror::Error;

use crate::config::schema::FaucetConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable holding the wallet to fund.
pub const WALLET_ADDRESS_ENV_VAR: &str = "EXTERNAL_WALLET_ADDRESS";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),

    #[error("Environment variable {0} not set")]
    MissingEnv(&'static str),

    #[error("Invalid wallet address '{value}': {reason}")]
    InvalidAddress { value: String, reason: String },
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<FaucetConfig, ConfigError> {
    let config: FaucetConfig = toml::from_str(content)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<FaucetConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config = parse_config(&content)?;
    tracing::debug!(path = %path.display(), "Configuration file loaded");
    Ok(config)
}

/// Load the file at `path` if given, otherwise use defaults.
pub fn load_or_default(path: Option<&Path>) -> Result<FaucetConfig, ConfigError> {
    match path {
        Some(path) => load_config(path),
        None => Ok(FaucetConfig::default()),
    }
}

/// Parse the destination wallet address.
pub fn parse_wallet_address(value: Option<&str>) -> Result<Address, ConfigError> {
    let value = value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or(ConfigError::MissingEnv(WALLET_ADDRESS_ENV_VAR))?;

    value.parse::<Address>().map_err(|e| ConfigError::InvalidAddress {
        value: value.to_string(),
        reason: e.to_string(),
    })
}
