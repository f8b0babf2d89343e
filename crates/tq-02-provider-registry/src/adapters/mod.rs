//! # Adapters Layer (Hexagonal Architecture)
//!
//! Implements the task queue's outbound port.

mod work_type_registry;
