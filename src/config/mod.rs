//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! defaults
//!     → optional TOML file (loader.rs parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → CLI flag overrides (main.rs)
//!     → FaucetConfig (immutable for the run)
//!
//! environment (.env loaded first):
//!     EXTERNAL_WALLET_ADDRESS → loader.rs parse_wallet_address
//!     CDP_API_KEY_ID / CDP_API_KEY_SECRET → faucet::auth
//! ```
//!
//! # Design Decisions
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_or_default, parse_wallet_address, ConfigError};
pub use schema::{FaucetConfig, FaucetSettings, ObservabilityConfig, RetryConfig};
pub use validation::{validate_config, ValidationError};
