//! CDP API key authentication.
//!
//! # Security
//! - API secrets are loaded ONLY from environment variables
//! - Secrets are never logged; `Debug` output is redacted
//! - Each request gets its own short-lived JWT with a fresh nonce

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use base64::Engine;
use jsonwebtoken::{Algorithm, EncodingKey};
use p256::pkcs8::{DecodePrivateKey, EncodePrivateKey};
use rand::Rng;
use serde::Serialize;
use thiserror::Error;

/// Environment variable holding the API key id.
pub const API_KEY_ID_ENV_VAR: &str = "CDP_API_KEY_ID";

/// Environment variable holding the API key secret.
pub const API_KEY_SECRET_ENV_VAR: &str = "CDP_API_KEY_SECRET";

/// Lifetime of a request token in seconds.
const TOKEN_TTL_SECS: u64 = 120;

/// PKCS#8 v1 prefix for a bare Ed25519 seed (RFC 8410).
const ED25519_PKCS8_PREFIX: [u8; 16] = [
    0x30, 0x2e, 0x02, 0x01, 0x00, 0x30, 0x05, 0x06, 0x03, 0x2b, 0x65, 0x70, 0x04, 0x22, 0x04, 0x20,
];

/// Errors produced while loading keys or signing tokens.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Environment variable {0} not set")]
    MissingEnv(&'static str),

    #[error("Invalid API key secret: {0}")]
    InvalidKey(String),

    #[error("Token signing failed: {0}")]
    Signing(String),
}

/// CDP API key pair as issued by the developer portal.
#[derive(Clone)]
pub struct ApiCredentials {
    key_id: String,
    key_secret: String,
}

impl ApiCredentials {
    pub fn new(key_id: impl Into<String>, key_secret: impl Into<String>) -> Self {
        Self {
            key_id: key_id.into(),
            key_secret: key_secret.into(),
        }
    }

    /// Load credentials from `CDP_API_KEY_ID` and `CDP_API_KEY_SECRET`.
    pub fn from_env() -> Result<Self, AuthError> {
        let key_id = std::env::var(API_KEY_ID_ENV_VAR)
            .map_err(|_| AuthError::MissingEnv(API_KEY_ID_ENV_VAR))?;
        let key_secret = std::env::var(API_KEY_SECRET_ENV_VAR)
            .map_err(|_| AuthError::MissingEnv(API_KEY_SECRET_ENV_VAR))?;
        Ok(Self::new(key_id, key_secret))
    }
}

impl fmt::Debug for ApiCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiCredentials")
            .field("key_id", &self.key_id)
            .field("key_secret", &"<redacted>")
            .finish()
    }
}

#[derive(Serialize)]
struct JwtHeader<'a> {
    alg: &'static str,
    kid: &'a str,
    typ: &'static str,
    nonce: String,
}

#[derive(Serialize)]
struct JwtClaims<'a> {
    sub: &'a str,
    iss: &'static str,
    aud: [&'static str; 1],
    nbf: u64,
    iat: u64,
    exp: u64,
    uris: [String; 1],
}

/// Signs per-request bearer tokens with the API key.
pub struct JwtSigner {
    key_id: String,
    algorithm: Algorithm,
    key: EncodingKey,
}

impl JwtSigner {
    /// Build a signer from credentials.
    ///
    /// PEM secrets are treated as EC P-256 keys (`ES256`), anything else as a
    /// base64 Ed25519 key (`EdDSA`).
    pub fn new(credentials: &ApiCredentials) -> Result<Self, AuthError> {
        let secret = credentials.key_secret.trim();
        let (algorithm, key) = if secret.contains("-----BEGIN") {
            (Algorithm::ES256, ec_encoding_key(secret)?)
        } else {
            (Algorithm::EdDSA, ed25519_encoding_key(secret)?)
        };

        tracing::debug!(key_id = %credentials.key_id, algorithm = ?algorithm, "API key loaded");

        Ok(Self {
            key_id: credentials.key_id.clone(),
            algorithm,
            key,
        })
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Create a bearer token scoped to one `METHOD host/path` URI.
    pub fn sign_request(&self, method: &str, host: &str, path: &str) -> Result<String, AuthError> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| AuthError::Signing(e.to_string()))?
            .as_secs();

        let header = JwtHeader {
            alg: algorithm_name(self.algorithm),
            kid: &self.key_id,
            typ: "JWT",
            nonce: format!("{:016x}", rand::thread_rng().gen::<u64>()),
        };
        let claims = JwtClaims {
            sub: &self.key_id,
            iss: "cdp",
            aud: ["cdp_service"],
            nbf: now,
            iat: now,
            exp: now + TOKEN_TTL_SECS,
            uris: [format!("{} {}{}", method, host, path)],
        };

        let message = format!("{}.{}", encode_segment(&header)?, encode_segment(&claims)?);
        let signature = jsonwebtoken::crypto::sign(message.as_bytes(), &self.key, self.algorithm)
            .map_err(|e| AuthError::Signing(e.to_string()))?;

        Ok(format!("{}.{}", message, signature))
    }
}

impl fmt::Debug for JwtSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtSigner")
            .field("key_id", &self.key_id)
            .field("algorithm", &self.algorithm)
            .finish()
    }
}

fn algorithm_name(algorithm: Algorithm) -> &'static str {
    match algorithm {
        Algorithm::ES256 => "ES256",
        _ => "EdDSA",
    }
}

fn encode_segment<T: Serialize>(value: &T) -> Result<String, AuthError> {
    let json = serde_json::to_vec(value).map_err(|e| AuthError::Signing(e.to_string()))?;
    Ok(URL_SAFE_NO_PAD.encode(json))
}

fn ec_encoding_key(secret: &str) -> Result<EncodingKey, AuthError> {
    // Keys pasted into .env files usually carry escaped newlines.
    let pem = secret.replace("\\n", "\n");
    let key = if pem.contains("BEGIN EC PRIVATE KEY") {
        p256::SecretKey::from_sec1_pem(&pem)
            .map_err(|e| AuthError::InvalidKey(format!("EC key: {}", e)))?
    } else {
        p256::SecretKey::from_pkcs8_pem(&pem)
            .map_err(|e| AuthError::InvalidKey(format!("PKCS#8 key: {}", e)))?
    };
    let der = key
        .to_pkcs8_der()
        .map_err(|e| AuthError::InvalidKey(format!("PKCS#8 encoding: {}", e)))?;
    Ok(EncodingKey::from_ec_der(der.as_bytes()))
}

fn ed25519_encoding_key(secret: &str) -> Result<EncodingKey, AuthError> {
    let bytes = STANDARD
        .decode(secret)
        .map_err(|e| AuthError::InvalidKey(format!("not base64: {}", e)))?;
    // 64-byte secrets are seed || public key; only the seed is needed.
    let seed = match bytes.len() {
        32 | 64 => &bytes[..32],
        n => {
            return Err(AuthError::InvalidKey(format!(
                "Ed25519 key must be 32 or 64 bytes, got {}",
                n
            )))
        }
    };
    let mut der = Vec::with_capacity(ED25519_PKCS8_PREFIX.len() + seed.len());
    der.extend_from_slice(&ED25519_PKCS8_PREFIX);
    der.extend_from_slice(seed);
    Ok(EncodingKey::from_ed_der(&der))
}
