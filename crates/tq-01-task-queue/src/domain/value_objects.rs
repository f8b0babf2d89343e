//! Value objects for the task queue.

use std::cmp::Ordering;

use shared_types::{PriorityTier, Timestamp};

use super::entities::Task;

/// Sort key of a pending task. Smallest key is dispatched next.
///
/// Compared field by field: tier, group timestamp, complexity weight,
/// timestamp, age-reprioritized tasks first, then admission order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OrderingKey {
    pub priority: PriorityTier,
    pub group_earliest_timestamp: Timestamp,
    pub complexity_weight: u8,
    pub timestamp: Timestamp,
    pub age_reprioritized: bool,
    pub sequence: u64,
}

impl OrderingKey {
    pub fn new(task: &Task, age_reprioritized: bool) -> Self {
        Self {
            priority: task.priority,
            group_earliest_timestamp: task.group_earliest_timestamp,
            complexity_weight: task.complexity_weight,
            timestamp: task.timestamp,
            age_reprioritized,
            sequence: task.sequence(),
        }
    }
}

impl Ord for OrderingKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then_with(|| {
                self.group_earliest_timestamp
                    .cmp(&other.group_earliest_timestamp)
            })
            .then_with(|| self.complexity_weight.cmp(&other.complexity_weight))
            .then_with(|| self.timestamp.cmp(&other.timestamp))
            // Reprioritized first
            .then_with(|| other.age_reprioritized.cmp(&self.age_reprioritized))
            .then_with(|| self.sequence.cmp(&other.sequence))
    }
}

impl PartialOrd for OrderingKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Per-user figures gathered before a reprioritization pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UserAggregate {
    pub earliest_timestamp: Timestamp,
    pub worst_priority: PriorityTier,
    pub pending_count: usize,
}

impl UserAggregate {
    pub fn new(task: &Task) -> Self {
        Self {
            earliest_timestamp: task.timestamp,
            worst_priority: task.priority,
            pending_count: 1,
        }
    }

    pub fn absorb(&mut self, task: &Task) {
        self.earliest_timestamp = self.earliest_timestamp.min(task.timestamp);
        self.worst_priority = self.worst_priority.max(task.priority);
        self.pending_count += 1;
    }
}

/// Point-in-time snapshot of the queue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QueueStatus {
    pub pending_count: usize,
    pub age_secs: u64,
    pub oldest_timestamp: Option<Timestamp>,
    pub newest_timestamp: Option<Timestamp>,
}
