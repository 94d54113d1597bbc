//! Boxed diagnostic report for failed requests.

use std::fmt;

use crate::faucet::FaucetError;

/// Width of the report frame.
pub const REPORT_WIDTH: usize = 60;

const DEFAULT_KIND: &str = "unknown_error";
const DEFAULT_STATUS: &str = "N/A";
const DEFAULT_MESSAGE: &str = "An unknown error occurred";

/// Display-ready error details with defaults filled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorReport {
    pub kind: String,
    pub status: String,
    pub message: String,
    pub link: Option<String>,
}

impl ErrorReport {
    /// Report for an error that has no faucet classification.
    pub fn from_error(error: &dyn std::error::Error) -> Self {
        Self {
            kind: DEFAULT_KIND.to_string(),
            status: DEFAULT_STATUS.to_string(),
            message: error.to_string(),
            link: None,
        }
    }
}

impl From<&FaucetError> for ErrorReport {
    fn from(error: &FaucetError) -> Self {
        Self {
            kind: error
                .kind
                .as_ref()
                .map_or_else(|| DEFAULT_KIND.to_string(), |k| k.to_string()),
            status: error
                .status
                .map_or_else(|| DEFAULT_STATUS.to_string(), |s| s.to_string()),
            message: error
                .message
                .clone()
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| DEFAULT_MESSAGE.to_string()),
            link: error.link.clone().filter(|l| !l.is_empty()),
        }
    }
}

impl fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "═".repeat(REPORT_WIDTH);
        writeln!(f)?;
        writeln!(f, "{}", rule)?;
        writeln!(f, "  ⚠️  ERROR OCCURRED")?;
        writeln!(f, "{}", rule)?;
        writeln!(f, "  Type:        {}", self.kind)?;
        writeln!(f, "  Status:      {}", self.status)?;
        writeln!(f, "  Message:     {}", self.message)?;
        if let Some(link) = &self.link {
            writeln!(f, "  Docs:        {}", link)?;
        }
        writeln!(f, "{}", rule)?;
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::faucet::ErrorKind;

    #[test]
    fn test_defaults_for_empty_error() {
        let report = ErrorReport::from(&FaucetError::default());
        assert_eq!(report.kind, "unknown_error");
        assert_eq!(report.status, "N/A");
        assert_eq!(report.message, "An unknown error occurred");
        assert_eq!(report.link, None);

        let text = report.to_string();
        assert!(text.contains("  Type:        unknown_error\n"));
        assert!(text.contains("  Status:      N/A\n"));
        assert!(text.contains("  Message:     An unknown error occurred\n"));
        assert!(!text.contains("Docs:"));
    }

    #[test]
    fn test_full_report() {
        let err = FaucetError::new(ErrorKind::FaucetLimitExceeded, "Faucet limit reached for this address")
            .with_status(429)
            .with_link("https://docs.cdp.coinbase.com/api-reference/v2/errors#faucet-limit-exceeded");
        let text = ErrorReport::from(&err).to_string();

        assert!(text.contains("  Type:        faucet_limit_exceeded\n"));
        assert!(text.contains("  Status:      429\n"));
        assert!(text.contains("  Docs:        https://docs.cdp.coinbase.com/"));
    }

    #[test]
    fn test_frame_layout() {
        let text = ErrorReport::from(&FaucetError::unclassified("boom")).to_string();
        let lines: Vec<&str> = text.lines().collect();
        let rule = "═".repeat(REPORT_WIDTH);

        assert_eq!(lines[0], "");
        assert_eq!(lines[1], rule);
        assert_eq!(lines[2], "  ⚠️  ERROR OCCURRED");
        assert_eq!(lines[3], rule);
        assert_eq!(lines[7], rule);
        assert_eq!(lines[8], "");
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[1].chars().count(), 60);
    }

    #[test]
    fn test_from_generic_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "config.toml missing");
        let report = ErrorReport::from_error(&io);
        assert_eq!(report.kind, "unknown_error");
        assert_eq!(report.message, "config.toml missing");
    }
}
