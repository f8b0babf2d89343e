//! # Task Queue Runtime
//!
//! Reads customer data requests from stdin, one JSON object per line, queues
//! a task per requested provider and dispatches them one at a time.
//!
//! ```text
//! {"user_id": 1, "providers": ["credit_check", "bank_statements"]}
//! ```
//!
//! ## Startup Sequence
//!
//! 1. Initialize telemetry (logs + metrics)
//! 2. Load configuration from the environment
//! 3. Build and validate the provider registry
//! 4. Start the worker
//! 5. Feed intake until end of input, then wait for the queue to drain
//!
//! Ctrl-C stops intake immediately. Either way the worker finishes its
//! in-flight task before exiting.

use anyhow::{Context, Result};
use queue_runtime::{LoggingSink, QueueRuntime, RuntimeConfig, RuntimeError};
use queue_telemetry::{gather_metrics, init_telemetry, TelemetryConfig};
use tokio::io::{AsyncBufReadExt, BufReader};
use tq_02_provider_registry::ProviderRegistry;
use tracing::{debug, info, warn};

/// Feeds stdin lines to intake, then waits for the queue to empty.
async fn feed_and_drain(runtime: &QueueRuntime) -> Result<(), RuntimeError> {
    let intake = runtime.intake();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match intake.handle_line(line) {
            Ok(receipt) => debug!(?receipt, "Request queued"),
            Err(e) => warn!(error = %e, "Ignoring intake line"),
        }
    }

    info!("End of input, waiting for queue to drain");
    runtime.wait_until_drained().await;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    init_telemetry(&TelemetryConfig::from_env()).context("Failed to initialize telemetry")?;

    let config = RuntimeConfig::from_env();
    let registry = ProviderRegistry::reference().context("Invalid provider registry")?;
    for provider in registry.providers() {
        info!(name = %provider.name, base_url = %provider.base_url, "Registered provider");
    }

    let runtime = QueueRuntime::new(config.clone(), registry);
    let mut worker = runtime.spawn_worker(LoggingSink::new(config.work_duration));

    info!("Queue runtime is running. Press Ctrl+C to stop.");
    let finished = tokio::select! {
        result = feed_and_drain(&runtime) => {
            result?;
            None
        }
        signal = tokio::signal::ctrl_c() => {
            signal?;
            info!("Interrupted");
            None
        }
        joined = &mut worker => Some(joined),
    };

    runtime.shutdown();
    let report = match finished {
        Some(joined) => joined,
        None => worker.await,
    }
    .context("Worker task panicked")?;

    info!(
        dispatched = report.dispatched,
        failed = report.failed,
        "Shutdown complete"
    );
    debug!(metrics = %gather_metrics()?, "Final metrics");

    Ok(())
}
