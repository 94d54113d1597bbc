//! faucet-drip
//!
//! Repeatedly requests testnet funds from the CDP faucet for one wallet,
//! backing off on rate limits and stopping once the faucet limit is hit.
//!
//! ```text
//!  .env / env / flags / config.toml
//!              │
//!              ▼
//!      ┌──────────────┐     ┌──────────────┐     ┌──────────────────┐
//!      │    config    │────▶│ runner loop  │────▶│ resilience retry │
//!      └──────────────┘     └──────┬───────┘     └────────┬─────────┘
//!                                  │                      │
//!                                  ▼                      ▼
//!                           ┌─────────────┐      ┌────────────────┐
//!                           │   report    │      │ faucet client  │────▶ CDP API
//!                           │  (stdout)   │      │  (JWT + HTTP)  │
//!                           └─────────────┘      └────────────────┘
//! ```
//!
//! Exit status is 0 when all requests finish or the faucet limit is reached,
//! 1 on any other error.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;

use faucet_drip::config::{self, FaucetConfig};
use faucet_drip::faucet::{ApiCredentials, CdpFaucetClient, FaucetRequest, JwtSigner, Network, Token};
use faucet_drip::observability::{logging, metrics};
use faucet_drip::report::{Console, ErrorReport};
use faucet_drip::resilience::RetryPolicy;
use faucet_drip::runner::{RequestLoop, RunError};

#[derive(Parser)]
#[command(name = "faucet-drip")]
#[command(about = "Request testnet funds from the CDP faucet until the limit is reached", long_about = None)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Wallet to fund
    #[arg(short, long, env = "EXTERNAL_WALLET_ADDRESS")]
    address: Option<String>,

    /// Network (base-sepolia, ethereum-sepolia, ethereum-hoodi)
    #[arg(short, long)]
    network: Option<Network>,

    /// Token (eth, usdc, eurc, cbbtc)
    #[arg(short, long)]
    token: Option<Token>,

    /// Number of requests to issue
    #[arg(short, long)]
    requests: Option<u32>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

impl Cli {
    fn apply_overrides(&self, config: &mut FaucetConfig) {
        if let Some(network) = self.network {
            config.faucet.network = network;
        }
        if let Some(token) = self.token {
            config.faucet.token = token;
        }
        if let Some(requests) = self.requests {
            config.faucet.requests = requests;
        }
        if let Some(level) = &self.log_level {
            config.observability.log_level = level.clone();
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            // stdout may already be gone (closed pipe); the exit status still reports the failure.
            let mut console = Console::new(std::io::stdout().lock());
            if let Err(io_err) = console.error_report(&ErrorReport::from_error(e.as_ref())) {
                eprintln!("{}", e);
                eprintln!("Could not write error report: {}", io_err);
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let mut config = config::load_or_default(cli.config.as_deref())?;
    cli.apply_overrides(&mut config);
    config::validate_config(&config).map_err(config::ConfigError::Validation)?;

    logging::init_logging(&config.observability.log_level);
    tracing::info!("faucet-drip v{} starting", env!("CARGO_PKG_VERSION"));

    if config.observability.metrics_enabled {
        metrics::init_metrics(config.observability.metrics_address.parse()?)?;
    }

    let address = config::parse_wallet_address(cli.address.as_deref())?;
    let credentials = ApiCredentials::from_env()?;
    let signer = JwtSigner::new(&credentials)?;
    let client = CdpFaucetClient::new(
        &config.faucet.api_url,
        signer,
        config.faucet.request_timeout_secs.map(Duration::from_secs),
    )?;

    tracing::info!(
        network = %config.faucet.network,
        token = %config.faucet.token,
        requests = config.faucet.requests,
        base_delay_ms = config.retries.base_delay_ms,
        "Configuration loaded"
    );

    let request = FaucetRequest::new(address, config.faucet.network, config.faucet.token);
    let runner = RequestLoop::new(
        client,
        request,
        config.faucet.requests,
        RetryPolicy::from(&config.retries),
    );

    match runner.run(std::io::stdout().lock()).await {
        Ok(summary) => {
            tracing::info!(successful = summary.successful, stop = ?summary.stop, "Done");
            Ok(ExitCode::SUCCESS)
        }
        // The loop already printed the diagnostic block.
        Err(RunError::Request { .. }) => Ok(ExitCode::FAILURE),
        Err(e) => Err(e.into()),
    }
}
