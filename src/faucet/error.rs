//! Classified faucet errors.

use std::fmt;

use serde::Deserialize;

/// Classification reported by the faucet API in `errorType`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// Too many requests in a time window. Transient.
    RateLimitExceeded,
    /// Allotted funding for the period is used up. Terminal.
    FaucetLimitExceeded,
    /// Any other classification, kept verbatim.
    Other(String),
}

impl ErrorKind {
    pub fn as_str(&self) -> &str {
        match self {
            ErrorKind::RateLimitExceeded => "rate_limit_exceeded",
            ErrorKind::FaucetLimitExceeded => "faucet_limit_exceeded",
            ErrorKind::Other(kind) => kind,
        }
    }
}

impl From<&str> for ErrorKind {
    fn from(s: &str) -> Self {
        match s {
            "rate_limit_exceeded" => ErrorKind::RateLimitExceeded,
            "faucet_limit_exceeded" => ErrorKind::FaucetLimitExceeded,
            other => ErrorKind::Other(other.to_string()),
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned by a faucet call.
///
/// Every field is optional: transport failures carry only a message, API
/// failures carry whatever the error body provided plus the HTTP status.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FaucetError {
    pub kind: Option<ErrorKind>,
    pub message: Option<String>,
    pub status: Option<u16>,
    pub link: Option<String>,
    pub correlation_id: Option<String>,
}

impl FaucetError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind: Some(kind),
            message: Some(message.into()),
            ..Self::default()
        }
    }

    /// Error without a classification, e.g. a connection failure.
    pub fn unclassified(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    pub fn is_rate_limited(&self) -> bool {
        matches!(self.kind, Some(ErrorKind::RateLimitExceeded))
    }

    pub fn is_faucet_limit(&self) -> bool {
        matches!(self.kind, Some(ErrorKind::FaucetLimitExceeded))
    }
}

impl fmt::Display for FaucetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = self.kind.as_ref().map_or("unknown_error", ErrorKind::as_str);
        write!(f, "{}", kind)?;
        if let Some(status) = self.status {
            write!(f, " (HTTP {})", status)?;
        }
        if let Some(message) = &self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}

impl std::error::Error for FaucetError {}

impl From<reqwest::Error> for FaucetError {
    fn from(e: reqwest::Error) -> Self {
        let mut err = FaucetError::unclassified(e.to_string());
        err.status = e.status().map(|s| s.as_u16());
        err
    }
}

/// Error body returned by the CDP API on non-2xx responses.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiErrorBody {
    pub error_type: Option<String>,
    pub error_message: Option<String>,
    pub correlation_id: Option<String>,
    pub error_link: Option<String>,
}

impl ApiErrorBody {
    pub fn into_error(self, status: u16) -> FaucetError {
        FaucetError {
            kind: self.error_type.as_deref().map(ErrorKind::from),
            message: self.error_message,
            status: Some(status),
            link: self.error_link,
            correlation_id: self.correlation_id,
        }
    }
}

/// Result type for faucet operations.
pub type FaucetResult<T> = Result<T, FaucetError>;
