//! # Task Queue Benchmarks
//!
//! Every pop rescans the pending set, so these measure how pop and admit
//! scale with queue depth and user count.

pub mod task_queue;
