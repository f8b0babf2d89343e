//! # Queue Runtime
//!
//! Owns the shared queue and the shutdown channel.
//!
//! ## Shutdown Sequence
//!
//! 1. Stop feeding intake (end of input or Ctrl-C)
//! 2. Signal shutdown to the worker
//! 3. Worker finishes its in-flight task and returns a report

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{error, info};
use tq_02_provider_registry::ProviderRegistry;

use crate::config::RuntimeConfig;
use crate::intake::IntakeHandler;
use crate::worker::{DispatchSink, Worker, WorkerReport};
use crate::{new_shared_queue, SharedQueue};

pub struct QueueRuntime {
    config: RuntimeConfig,
    queue: SharedQueue,
    shutdown_tx: watch::Sender<bool>,
    shutdown_rx: watch::Receiver<bool>,
}

impl QueueRuntime {
    pub fn new(config: RuntimeConfig, registry: ProviderRegistry) -> Self {
        info!(
            providers = registry.len(),
            idle_poll_ms = config.idle_poll.as_millis() as u64,
            work_duration_ms = config.work_duration.as_millis() as u64,
            "Creating queue runtime"
        );

        let queue = new_shared_queue(registry, config.queue.clone());
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        Self {
            config,
            queue,
            shutdown_tx,
            shutdown_rx,
        }
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    pub fn queue(&self) -> SharedQueue {
        self.queue.clone()
    }

    pub fn intake(&self) -> IntakeHandler {
        IntakeHandler::new(self.queue.clone())
    }

    /// Starts the worker on the current tokio runtime.
    pub fn spawn_worker<S: DispatchSink + 'static>(&self, sink: S) -> JoinHandle<WorkerReport> {
        let worker = Worker::new(self.queue.clone(), sink, &self.config);
        tokio::spawn(worker.run(self.shutdown_rx.clone()))
    }

    /// Resolves once the queue holds no pending task.
    pub async fn wait_until_drained(&self) {
        while self.queue.lock().size() > 0 {
            tokio::time::sleep(self.config.idle_poll).await;
        }
    }

    /// Signals the worker to stop after its current task.
    pub fn shutdown(&self) {
        info!("Initiating graceful shutdown...");
        if let Err(e) = self.shutdown_tx.send(true) {
            error!("Failed to send shutdown signal: {}", e);
        }
    }
}
