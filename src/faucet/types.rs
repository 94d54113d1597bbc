//! Faucet request/response types and supported networks and tokens.

use std::fmt;
use std::str::FromStr;

use alloy::primitives::{Address, TxHash};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Test network the faucet dispenses on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Network {
    #[default]
    BaseSepolia,
    EthereumSepolia,
    EthereumHoodi,
}

impl Network {
    /// Wire identifier used by the faucet API.
    pub fn as_str(&self) -> &'static str {
        match self {
            Network::BaseSepolia => "base-sepolia",
            Network::EthereumSepolia => "ethereum-sepolia",
            Network::EthereumHoodi => "ethereum-hoodi",
        }
    }

    /// Block explorer base URL for this network.
    pub fn explorer_url(&self) -> &'static str {
        match self {
            Network::BaseSepolia => "https://sepolia.basescan.org",
            Network::EthereumSepolia => "https://sepolia.etherscan.io",
            Network::EthereumHoodi => "https://hoodi.etherscan.io",
        }
    }

    /// Explorer link for a transaction on this network.
    pub fn transaction_url(&self, tx_hash: &TxHash) -> String {
        format!("{}/tx/{}", self.explorer_url(), tx_hash)
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Network {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "base-sepolia" => Ok(Network::BaseSepolia),
            "ethereum-sepolia" => Ok(Network::EthereumSepolia),
            "ethereum-hoodi" => Ok(Network::EthereumHoodi),
            other => Err(UnknownVariant {
                kind: "network",
                value: other.to_string(),
            }),
        }
    }
}

/// Token the faucet dispenses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Token {
    /// Native token.
    #[default]
    Eth,
    Usdc,
    Eurc,
    Cbbtc,
}

impl Token {
    /// Wire identifier used by the faucet API.
    pub fn as_str(&self) -> &'static str {
        match self {
            Token::Eth => "eth",
            Token::Usdc => "usdc",
            Token::Eurc => "eurc",
            Token::Cbbtc => "cbbtc",
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Token {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "eth" => Ok(Token::Eth),
            "usdc" => Ok(Token::Usdc),
            "eurc" => Ok(Token::Eurc),
            "cbbtc" => Ok(Token::Cbbtc),
            other => Err(UnknownVariant {
                kind: "token",
                value: other.to_string(),
            }),
        }
    }
}

/// Parse failure for [`Network`] or [`Token`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}'")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

/// One funding request: who gets what, where.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FaucetRequest {
    pub address: Address,
    pub network: Network,
    pub token: Token,
}

impl FaucetRequest {
    pub fn new(address: Address, network: Network, token: Token) -> Self {
        Self {
            address,
            network,
            token,
        }
    }
}

/// Successful faucet response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaucetResponse {
    pub transaction_hash: TxHash,
}
