//! Ports layer for the task queue.
//!
//! - Inbound (Driving) ports: API exposed to intake and the worker
//! - Outbound (Driven) ports: work-type metadata the queue depends on

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
