//! Faucet integration subsystem.
//!
//! # Data Flow
//! ```text
//! Environment Variables (CDP API key id + secret)
//!     → auth.rs (key loading, per-request JWT)
//!     → client.rs (POST /v2/evm/faucet)
//!     → error.rs (classify failures by errorType)
//! ```
//!
//! # Security Constraints
//! - API secrets ONLY from environment variables
//! - Never log secrets or bearer tokens

pub mod auth;
pub mod client;
pub mod error;
pub mod types;

pub use auth::{ApiCredentials, AuthError, JwtSigner};
pub use client::{CdpFaucetClient, FaucetApi};
pub use error::{ErrorKind, FaucetError, FaucetResult};
pub use types::{FaucetRequest, FaucetResponse, Network, Token};
