//! CDP faucet HTTP client.
//!
//! # Responsibilities
//! - Authenticate each call with a fresh bearer token
//! - POST the funding request and decode the transaction hash
//! - Turn non-2xx bodies and transport failures into [`FaucetError`]

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use url::Url;

use crate::faucet::auth::{AuthError, JwtSigner};
use crate::faucet::error::{ApiErrorBody, FaucetError, FaucetResult};
use crate::faucet::types::{FaucetRequest, FaucetResponse};

/// Path of the EVM faucet endpoint relative to the API base URL.
pub const FAUCET_PATH: &str = "v2/evm/faucet";

/// Anything that can dispense faucet funds.
#[async_trait]
pub trait FaucetApi: Send + Sync {
    /// Request funds once. No retries happen here.
    async fn request_faucet(&self, request: &FaucetRequest) -> FaucetResult<FaucetResponse>;
}

/// Faucet client backed by the CDP REST API.
pub struct CdpFaucetClient {
    http: reqwest::Client,
    endpoint: Url,
    signer: JwtSigner,
}

impl CdpFaucetClient {
    /// Create a client for the API rooted at `api_url`.
    ///
    /// `timeout` bounds each HTTP call; `None` waits indefinitely.
    pub fn new(api_url: &str, signer: JwtSigner, timeout: Option<Duration>) -> Result<Self, FaucetError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;
        Self::with_http_client(api_url, signer, http)
    }

    /// Create a client on top of an existing `reqwest::Client`.
    pub fn with_http_client(
        api_url: &str,
        signer: JwtSigner,
        http: reqwest::Client,
    ) -> Result<Self, FaucetError> {
        let endpoint = faucet_endpoint(api_url)?;
        tracing::debug!(endpoint = %endpoint, "Faucet client initialized");
        Ok(Self {
            http,
            endpoint,
            signer,
        })
    }

    fn bearer_token(&self) -> FaucetResult<String> {
        let host = self.endpoint.host_str().unwrap_or_default();
        self.signer
            .sign_request("POST", host, self.endpoint.path())
            .map_err(|e: AuthError| FaucetError::unclassified(e.to_string()))
    }
}

#[async_trait]
impl FaucetApi for CdpFaucetClient {
    async fn request_faucet(&self, request: &FaucetRequest) -> FaucetResult<FaucetResponse> {
        let token = self.bearer_token()?;

        let res = self
            .http
            .post(self.endpoint.clone())
            .header(AUTHORIZATION, format!("Bearer {}", token))
            .header(ACCEPT, "application/json")
            .json(request)
            .send()
            .await?;

        let status = res.status();
        let text = res.text().await?;

        if !status.is_success() {
            let err = match serde_json::from_str::<ApiErrorBody>(&text) {
                Ok(body) => body.into_error(status.as_u16()),
                Err(_) => {
                    let message = if text.trim().is_empty() {
                        status.canonical_reason().unwrap_or("request failed").to_string()
                    } else {
                        text
                    };
                    FaucetError::unclassified(message).with_status(status.as_u16())
                }
            };
            tracing::debug!(status = status.as_u16(), error = %err, "Faucet request rejected");
            return Err(err);
        }

        serde_json::from_str::<FaucetResponse>(&text).map_err(|e| {
            FaucetError::unclassified(format!("Malformed faucet response: {}", e))
                .with_status(status.as_u16())
        })
    }
}

impl std::fmt::Debug for CdpFaucetClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CdpFaucetClient")
            .field("endpoint", &self.endpoint.as_str())
            .field("signer", &self.signer)
            .finish()
    }
}

/// Resolve the faucet endpoint under `api_url`, tolerating a missing trailing slash.
pub fn faucet_endpoint(api_url: &str) -> Result<Url, FaucetError> {
    let mut base = api_url.to_string();
    if !base.ends_with('/') {
        base.push('/');
    }
    Url::parse(&base)
        .and_then(|url| url.join(FAUCET_PATH))
        .map_err(|e| FaucetError::unclassified(format!("Invalid API URL '{}': {}", api_url, e)))
}
