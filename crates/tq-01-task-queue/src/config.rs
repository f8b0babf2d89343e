//! Configuration for the task queue

use serde::{Deserialize, Serialize};

/// Reprioritization thresholds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueueConfig {
    /// A deprioritized task this many seconds older than the newest admitted
    /// timestamp is treated as a normal task again.
    pub age_reprioritization_threshold_secs: i64,
    /// Pending tasks per user at which the user's NORMAL tasks are promoted.
    pub rule_of_three_threshold: usize,
    /// Complexity weight applied to throttled tasks.
    pub throttled_complexity_weight: u8,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            age_reprioritization_threshold_secs: 300,
            rule_of_three_threshold: 3,
            throttled_complexity_weight: 2,
        }
    }
}
