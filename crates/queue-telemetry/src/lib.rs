//! # Queue Telemetry
//!
//! Logging and metrics for the task queue runtime.
//!
//! ## Components
//!
//! - **Logs**: `tracing` subscriber with env-filter, pretty or JSON output
//! - **Metrics**: Prometheus registry with queue, intake and worker metrics
//!
//! ## Usage
//!
//! ```rust,ignore
//! use queue_telemetry::{init_telemetry, TelemetryConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     init_telemetry(&TelemetryConfig::from_env())?;
//!     // Events and metrics are now being collected
//!     Ok(())
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `TQ_SERVICE_NAME` | `task-queue` | Service name in startup logs |
//! | `TQ_LOG_LEVEL` / `RUST_LOG` | `info` | Log level filter |
//! | `TQ_CONSOLE_OUTPUT` | `true` | Write logs at all |
//! | `TQ_JSON_LOGS` | `false` | JSON log lines |

mod config;
mod logging;
pub mod metrics;

pub use config::TelemetryConfig;
pub use logging::init_logging;
pub use metrics::{
    gather_metrics, observe_queue, register_metrics, HistogramTimer, PROVIDERS_SKIPPED,
    QUEUE_AGE, TASKS_ADMITTED, TASKS_DISPATCHED, TASKS_PENDING, TASK_DURATION,
};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Failed to install tracing subscriber: {0}")]
    SubscriberInit(String),

    #[error("Failed to initialize Prometheus metrics: {0}")]
    MetricsInit(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Registers metrics and installs the global log subscriber.
pub fn init_telemetry(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    register_metrics()?;
    init_logging(config)
}

/// Convenience macro for recording a metric increment.
#[macro_export]
macro_rules! metric_inc {
    ($metric:expr) => {
        $metric.inc()
    };
    ($metric:expr, $labels:expr) => {
        $metric.with_label_values($labels).inc()
    };
}

/// Start timing for a histogram. Observation happens on drop.
#[macro_export]
macro_rules! time_histogram {
    ($histogram:expr) => {
        $crate::metrics::HistogramTimer::new(&$histogram)
    };
}
