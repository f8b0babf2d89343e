//! # Error Types
//!
//! Defines error types used across crates.

use thiserror::Error;

/// Errors raised while building caller-facing records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimestampError {
    /// Input is not an ISO-8601 date or date-time.
    #[error("Malformed timestamp: {input:?} is not an ISO-8601 date or date-time")]
    Malformed { input: String },

    /// Arithmetic left the representable range.
    #[error("Timestamp out of range")]
    OutOfRange,
}
