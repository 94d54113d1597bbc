//! Testnet faucet drip library.

pub mod config;
pub mod faucet;
pub mod observability;
pub mod report;
pub mod resilience;
pub mod runner;

pub use config::FaucetConfig;
pub use faucet::{CdpFaucetClient, FaucetApi};
pub use runner::RequestLoop;
