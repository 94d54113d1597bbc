//! Sequential funding loop.

use std::io::{self, Write};

use thiserror::Error;
use tracing::Instrument;

use crate::faucet::{FaucetApi, FaucetError, FaucetRequest};
use crate::observability::metrics;
use crate::report::Console;
use crate::resilience::{with_retry, RetryOutcome, RetryPolicy};

/// Why a run stopped without failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// Every planned request succeeded.
    Completed,
    /// The faucet quota ran out part way.
    LimitReached,
}

/// Result of a run that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub successful: u32,
    pub stop: StopReason,
}

/// A run that must end the process with a failure status.
#[derive(Debug, Error)]
pub enum RunError {
    /// Request number `index` (1-based) failed unrecoverably.
    #[error("request {index} failed: {source}")]
    Request { index: u32, source: FaucetError },

    #[error("console output failed: {0}")]
    Output(#[from] io::Error),
}

/// Issues up to `total` funding requests, one after another.
pub struct RequestLoop<A> {
    api: A,
    request: FaucetRequest,
    total: u32,
    policy: RetryPolicy,
}

impl<A: FaucetApi> RequestLoop<A> {
    pub fn new(api: A, request: FaucetRequest, total: u32, policy: RetryPolicy) -> Self {
        Self {
            api,
            request,
            total,
            policy,
        }
    }

    /// Run the loop, writing progress to `out`.
    pub async fn run<W: Write>(&self, out: W) -> Result<RunSummary, RunError> {
        let run_id = uuid::Uuid::new_v4();
        let span = tracing::info_span!(
            "faucet_run",
            run_id = %run_id,
            network = %self.request.network,
            token = %self.request.token,
        );
        self.run_inner(Console::new(out)).instrument(span).await
    }

    async fn run_inner<W: Write>(&self, mut console: Console<W>) -> Result<RunSummary, RunError> {
        tracing::info!(address = %self.request.address, total = self.total, "Starting faucet run");
        console.start_banner(&self.request)?;

        for i in 0..self.total {
            let index = i + 1;
            let outcome = with_retry(&self.policy, || self.api.request_faucet(&self.request)).await;

            match outcome {
                Ok(RetryOutcome::Completed(response)) => {
                    metrics::record_request("success");
                    tracing::info!(
                        request = index,
                        tx_hash = %response.transaction_hash,
                        "Faucet request succeeded"
                    );
                    console.success(index, &self.request, &response.transaction_hash)?;
                }
                Ok(RetryOutcome::LimitReached(e)) => {
                    metrics::record_request("limit_reached");
                    tracing::info!(
                        successful = i,
                        correlation_id = e.correlation_id.as_deref().unwrap_or_default(),
                        "Stopping at faucet limit"
                    );
                    console.faucet_error(&e)?;
                    console.limit_reached(i)?;
                    return Ok(RunSummary {
                        successful: i,
                        stop: StopReason::LimitReached,
                    });
                }
                Err(e) => {
                    metrics::record_request("error");
                    tracing::error!(
                        request = index,
                        correlation_id = e.correlation_id.as_deref().unwrap_or_default(),
                        error = %e,
                        "Aborting faucet run"
                    );
                    console.faucet_error(&e)?;
                    console.failed(index)?;
                    return Err(RunError::Request { index, source: e });
                }
            }
        }

        console.all_completed()?;
        tracing::info!(successful = self.total, "Faucet run completed");
        Ok(RunSummary {
            successful: self.total,
            stop: StopReason::Completed,
        })
    }
}
