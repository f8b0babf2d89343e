//! Runtime error types.

use queue_telemetry::TelemetryError;
use thiserror::Error;
use tq_02_provider_registry::RegistryError;

#[derive(Debug, Error)]
pub enum RuntimeError {
    /// An intake line is not a valid request
    #[error("Malformed intake request: {0}")]
    MalformedRequest(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Telemetry error: {0}")]
    Telemetry(#[from] TelemetryError),

    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    /// The dispatch sink could not complete a task
    #[error("Dispatch failed for {work_type} (user {user_id}): {reason}")]
    DispatchFailed {
        work_type: String,
        user_id: u64,
        reason: String,
    },
}
