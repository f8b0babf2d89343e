//! # Intake
//!
//! Turns a customer data request into queue submissions. Providers missing
//! from the registry are skipped with a warning. Every admitted provider is
//! stamped with the same local time.

use queue_telemetry::{metric_inc, observe_queue, PROVIDERS_SKIPPED, TASKS_ADMITTED};
use serde::{Deserialize, Serialize};
use shared_types::{Submission, Timestamp, UserId};
use tracing::{info, warn};

use crate::errors::RuntimeError;
use crate::SharedQueue;

/// One intake line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntakeRequest {
    pub user_id: UserId,
    pub providers: Vec<String>,
}

/// Outcome of one intake request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntakeReceipt {
    /// Providers submitted to the queue.
    pub admitted: Vec<String>,
    /// Providers not found in the registry.
    pub skipped: Vec<String>,
    /// Pending count after the request.
    pub pending: usize,
}

#[derive(Clone)]
pub struct IntakeHandler {
    queue: SharedQueue,
}

impl IntakeHandler {
    pub fn new(queue: SharedQueue) -> Self {
        Self { queue }
    }

    /// Parses and handles one JSON line.
    pub fn handle_line(&self, line: &str) -> Result<IntakeReceipt, RuntimeError> {
        let request: IntakeRequest = serde_json::from_str(line)?;
        Ok(self.handle(request))
    }

    /// Handles a request stamped with the current local time.
    pub fn handle(&self, request: IntakeRequest) -> IntakeReceipt {
        self.handle_at(request, Timestamp::now())
    }

    /// Handles a request stamped with `timestamp`.
    pub fn handle_at(&self, request: IntakeRequest, timestamp: Timestamp) -> IntakeReceipt {
        let mut admitted = Vec::new();
        let mut skipped = Vec::new();

        let mut queue = self.queue.lock();
        for provider in request.providers {
            if !queue.registry().contains(&provider) {
                warn!(provider = %provider, user_id = %request.user_id, "Provider doesn't exist. Skipping");
                metric_inc!(PROVIDERS_SKIPPED);
                skipped.push(provider);
                continue;
            }

            queue.admit(Submission::new(provider.as_str(), request.user_id, timestamp));
            metric_inc!(TASKS_ADMITTED);
            admitted.push(provider);
        }
        let pending = queue.size();
        observe_queue(pending, queue.age());
        drop(queue);

        info!(
            user_id = %request.user_id,
            admitted = admitted.len(),
            skipped = skipped.len(),
            pending,
            "Intake request handled"
        );

        IntakeReceipt {
            admitted,
            skipped,
            pending,
        }
    }
}
