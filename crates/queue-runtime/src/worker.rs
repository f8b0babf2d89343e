//! # Dispatch Worker
//!
//! Pops one task at a time and hands it to a `DispatchSink`.
//!
//! ```text
//! loop:
//!   shutdown? ──yes──→ stop
//!   pop ──None──→ sleep(idle_poll) or wake on shutdown
//!       └─Some──→ sink.handle(dispatch)
//! ```
//!
//! The queue lock is taken for the pop only and released before the sink runs.

use std::time::Duration;

use async_trait::async_trait;
use queue_telemetry::{metric_inc, observe_queue, time_histogram, TASKS_DISPATCHED, TASK_DURATION};
use shared_types::Dispatch;
use tokio::sync::watch;
use tracing::{debug, error, info};

use crate::config::RuntimeConfig;
use crate::errors::RuntimeError;
use crate::SharedQueue;

/// Performs the work a dispatch stands for.
#[async_trait]
pub trait DispatchSink: Send + Sync {
    async fn handle(&self, dispatch: &Dispatch) -> Result<(), RuntimeError>;
}

/// Logs the dispatch and waits `work_duration` in place of a provider call.
#[derive(Debug, Clone)]
pub struct LoggingSink {
    work_duration: Duration,
}

impl LoggingSink {
    pub fn new(work_duration: Duration) -> Self {
        Self { work_duration }
    }
}

#[async_trait]
impl DispatchSink for LoggingSink {
    async fn handle(&self, dispatch: &Dispatch) -> Result<(), RuntimeError> {
        info!(work_type = %dispatch.work_type, user_id = %dispatch.user_id, "Processing task");
        tokio::time::sleep(self.work_duration).await;
        info!(work_type = %dispatch.work_type, user_id = %dispatch.user_id, "Finished task");
        Ok(())
    }
}

/// Counters reported when the worker stops.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorkerReport {
    pub dispatched: u64,
    pub failed: u64,
}

pub struct Worker<S> {
    queue: SharedQueue,
    sink: S,
    idle_poll: Duration,
    max_dispatches: Option<u64>,
}

impl<S: DispatchSink> Worker<S> {
    pub fn new(queue: SharedQueue, sink: S, config: &RuntimeConfig) -> Self {
        Self {
            queue,
            sink,
            idle_poll: config.idle_poll,
            max_dispatches: config.max_dispatches,
        }
    }

    /// Runs until `shutdown` turns true, its sender is dropped, or the
    /// dispatch limit is reached. An in-flight task always completes.
    pub async fn run(self, mut shutdown: watch::Receiver<bool>) -> WorkerReport {
        let mut report = WorkerReport::default();

        loop {
            if *shutdown.borrow() {
                debug!("Worker received shutdown");
                break;
            }
            if self
                .max_dispatches
                .is_some_and(|max| report.dispatched >= max)
            {
                info!(dispatched = report.dispatched, "Dispatch limit reached");
                break;
            }

            let next = {
                let mut queue = self.queue.lock();
                let next = queue.pop();
                observe_queue(queue.size(), queue.age());
                next
            };

            let Some(dispatch) = next else {
                tokio::select! {
                    _ = tokio::time::sleep(self.idle_poll) => {}
                    changed = shutdown.changed() => {
                        if changed.is_err() {
                            break;
                        }
                    }
                }
                continue;
            };

            metric_inc!(TASKS_DISPATCHED, &[dispatch.work_type.as_str()]);
            let _timer = time_histogram!(TASK_DURATION);
            report.dispatched += 1;

            if let Err(e) = self.sink.handle(&dispatch).await {
                report.failed += 1;
                error!(error = %e, %dispatch, "Dispatch failed");
            }
        }

        report
    }
}
