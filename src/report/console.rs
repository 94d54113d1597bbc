//! Human-readable progress output.

use std::io::{self, Write};

use alloy::primitives::TxHash;

use crate::faucet::{FaucetError, FaucetRequest};
use crate::report::error_report::{ErrorReport, REPORT_WIDTH};

/// Writes run banners, per-request lines and error reports to a sink.
pub struct Console<W: Write> {
    out: W,
}

impl<W: Write> Console<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn rule() -> String {
        "─".repeat(REPORT_WIDTH)
    }

    pub fn start_banner(&mut self, request: &FaucetRequest) -> io::Result<()> {
        writeln!(self.out, "🚀 Starting faucet requests...\n")?;
        writeln!(self.out, "📍 Network: {}", request.network)?;
        writeln!(self.out, "💰 Token: {}", request.token.as_str().to_uppercase())?;
        writeln!(self.out, "👛 Wallet: {}\n", request.address)?;
        writeln!(self.out, "{}\n", Self::rule())?;
        self.out.flush()
    }

    /// `index` is 1-based.
    pub fn success(&mut self, index: u32, request: &FaucetRequest, tx_hash: &TxHash) -> io::Result<()> {
        writeln!(self.out, "✅ Transaction {}:", index)?;
        writeln!(self.out, "   🔗 {}\n", request.network.transaction_url(tx_hash))?;
        self.out.flush()
    }

    pub fn error_report(&mut self, report: &ErrorReport) -> io::Result<()> {
        write!(self.out, "{}", report)?;
        self.out.flush()
    }

    pub fn faucet_error(&mut self, error: &FaucetError) -> io::Result<()> {
        self.error_report(&ErrorReport::from(error))
    }

    pub fn limit_reached(&mut self, successful: u32) -> io::Result<()> {
        writeln!(self.out, "\n{}", Self::rule())?;
        writeln!(
            self.out,
            "  ✅ Completed {} successful requests before limit reached",
            successful
        )?;
        writeln!(self.out, "  ⏸️  Faucet limit reached. Please try again later.")?;
        writeln!(self.out, "{}\n", Self::rule())?;
        self.out.flush()
    }

    /// `index` is 1-based.
    pub fn failed(&mut self, index: u32) -> io::Result<()> {
        writeln!(self.out, "\n❌ Failed at request {}. Exiting...\n", index)?;
        self.out.flush()
    }

    pub fn all_completed(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", Self::rule())?;
        writeln!(self.out, "  ✨ All requests completed successfully!")?;
        writeln!(self.out, "{}\n", Self::rule())?;
        self.out.flush()
    }
}
