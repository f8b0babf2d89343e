//! # Queue Runtime Library
//!
//! Exposes the runtime pieces for testing. The main entry point is the
//! `main.rs` binary.
//!
//! ## Components
//!
//! - `config` - `RuntimeConfig` from environment variables
//! - `intake` - request handling and provider validation
//! - `worker` - dispatch loop and the `DispatchSink` port
//! - `runtime` - `QueueRuntime`, wiring the pieces around one shared queue
//!
//! ```text
//! stdin ──IntakeRequest──→ IntakeHandler ──admit──→ ┌────────────┐
//!                                                   │ SharedQueue │
//!                      DispatchSink ←──Dispatch──── └─────pop────┘ ← Worker
//! ```

pub mod config;
pub mod errors;
pub mod intake;
pub mod runtime;
pub mod worker;

use std::sync::Arc;

use parking_lot::Mutex;
use tq_01_task_queue::{QueueConfig, TaskQueue};
use tq_02_provider_registry::ProviderRegistry;

pub use config::RuntimeConfig;
pub use errors::RuntimeError;
pub use intake::{IntakeHandler, IntakeReceipt, IntakeRequest};
pub use runtime::QueueRuntime;
pub use worker::{DispatchSink, LoggingSink, Worker, WorkerReport};

/// The engine shared by intake and worker. Locked for one operation at a time.
pub type SharedQueue = Arc<Mutex<TaskQueue<ProviderRegistry>>>;

pub fn new_shared_queue(registry: ProviderRegistry, config: QueueConfig) -> SharedQueue {
    Arc::new(Mutex::new(TaskQueue::with_config(registry, config)))
}
