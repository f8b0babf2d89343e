//! # Runtime Configuration
//!
//! Worker pacing and queue thresholds, read from environment variables.
//! Unparseable values fall back to the defaults.

use std::env;
use std::time::Duration;

use tq_01_task_queue::QueueConfig;

/// Complete runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Sleep between polls of an empty queue.
    pub idle_poll: Duration,
    /// Simulated time spent on one dispatched task.
    pub work_duration: Duration,
    /// Stop the worker after this many dispatches.
    pub max_dispatches: Option<u64>,
    /// Engine thresholds.
    pub queue: QueueConfig,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            idle_poll: Duration::from_millis(1000),
            work_duration: Duration::from_millis(2000),
            max_dispatches: None,
            queue: QueueConfig::default(),
        }
    }
}

impl RuntimeConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `TQ_IDLE_POLL_MS`: Empty-queue poll interval (default: 1000)
    /// - `TQ_WORK_DURATION_MS`: Time spent per task (default: 2000)
    /// - `TQ_MAX_DISPATCHES`: Stop after N dispatches (default: unbounded)
    /// - `TQ_AGE_THRESHOLD_SECS`: Age reprioritization threshold (default: 300)
    /// - `TQ_RULE_OF_THREE`: Pending tasks per user that trigger grouping (default: 3)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as `from_env`, reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        let parsed = |key: &str| lookup(key).and_then(|v| v.trim().parse::<u64>().ok());

        if let Some(ms) = parsed("TQ_IDLE_POLL_MS") {
            config.idle_poll = Duration::from_millis(ms);
        }
        if let Some(ms) = parsed("TQ_WORK_DURATION_MS") {
            config.work_duration = Duration::from_millis(ms);
        }
        config.max_dispatches = parsed("TQ_MAX_DISPATCHES");

        if let Some(secs) = parsed("TQ_AGE_THRESHOLD_SECS").and_then(|s| i64::try_from(s).ok()) {
            config.queue.age_reprioritization_threshold_secs = secs;
        }
        if let Some(count) = parsed("TQ_RULE_OF_THREE").and_then(|c| usize::try_from(c).ok()) {
            config.queue.rule_of_three_threshold = count;
        }

        config
    }
}
