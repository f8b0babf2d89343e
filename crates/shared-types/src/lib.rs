//! # Shared Types Crate
//!
//! This crate contains the records that cross crate boundaries: what intake
//! submits to the ordering engine and what the engine hands to the worker.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: `Submission`, `Dispatch` and their field
//!   types are defined here and nowhere else.
//! - **Structured Attributes**: the optional per-submission hints (priority,
//!   group timestamp, complexity weight) are an explicit record, not a map.
//! - **Minimal Dispatch**: a `Dispatch` carries identity only; derived
//!   ordering attributes never leave the engine.

pub mod entities;
pub mod errors;
pub mod timestamp;

pub use entities::*;
pub use errors::*;
pub use timestamp::Timestamp;
