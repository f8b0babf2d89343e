//! # Task Queue - Admission, Reprioritization and Dispatch
//!
//! ## Data Structures
//!
//! - `pending`: O(1) lookup by `(user, work type)` key
//! - `oldest` / `newest`: timestamp extremes, widened on insert and
//!   rescanned on removal of an extreme
//!
//! Priorities are not stored in an ordered index. Every pop recomputes the
//! derived attributes of all pending tasks from per-user aggregates and then
//! selects the smallest `OrderingKey`.
//!
//! ## Reprioritization Rules
//!
//! | Rule | Condition | Effect |
//! |------|-----------|--------|
//! | Age | deprioritized, `newest - timestamp >= threshold` | no throttle, wins full ties |
//! | Rule of three | user has `>= threshold` pending tasks | NORMAL task becomes HIGH, grouped by user's earliest timestamp |
//! | Throttle | deprioritized, not aged | HIGH task demoted to user's worst tier, weight penalty |

use std::collections::HashMap;

use shared_types::{Dispatch, PriorityTier, Submission, Timestamp, UserId};
use tracing::{debug, trace};

use super::entities::{Task, TaskKey, DEFAULT_COMPLEXITY_WEIGHT};
use super::expansion;
use super::value_objects::{OrderingKey, QueueStatus, UserAggregate};
use crate::config::QueueConfig;
use crate::ports::outbound::WorkTypeRegistry;

/// Pending tasks keyed by identity, with derived timestamp extremes.
///
/// Not internally synchronized. Hosts sharing a queue wrap it in a mutex.
#[derive(Debug)]
pub struct TaskQueue<R> {
    config: QueueConfig,
    registry: R,
    pending: HashMap<TaskKey, Task>,
    oldest: Option<Timestamp>,
    newest: Option<Timestamp>,
    next_sequence: u64,
}

impl<R: WorkTypeRegistry> TaskQueue<R> {
    /// Creates an empty queue with default thresholds.
    pub fn new(registry: R) -> Self {
        Self::with_config(registry, QueueConfig::default())
    }

    pub fn with_config(registry: R, config: QueueConfig) -> Self {
        Self {
            config,
            registry,
            pending: HashMap::new(),
            oldest: None,
            newest: None,
            next_sequence: 0,
        }
    }

    pub fn config(&self) -> &QueueConfig {
        &self.config
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// Admits a submission and its prerequisites.
    ///
    /// Returns the pending count afterwards.
    pub fn admit(&mut self, submission: Submission) -> usize {
        let requested = Task::from_submission(submission);
        let batch = expansion::expand(&self.registry, requested);
        let batch_len = batch.len();

        for task in batch {
            self.insert(task);
        }

        debug!(
            batch = batch_len,
            pending = self.pending.len(),
            "Admitted submission"
        );
        self.pending.len()
    }

    /// Recomputes priorities and removes the highest-ranked task.
    pub fn pop(&mut self) -> Option<Dispatch> {
        self.reprioritize();

        let key = self
            .pending
            .values()
            .min_by_key(|task| OrderingKey::new(task, self.is_age_reprioritized(task)))
            .map(Task::key)?;
        let task = self.pending.remove(&key)?;

        if Some(task.timestamp) == self.oldest || Some(task.timestamp) == self.newest {
            self.refresh_bounds();
        }

        debug!(
            work_type = %task.work_type,
            user_id = %task.user_id,
            priority = %task.priority,
            remaining = self.pending.len(),
            "Popped task"
        );
        Some(task.to_dispatch())
    }

    /// Number of pending tasks.
    pub fn size(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Whole seconds between the newest and oldest pending timestamps.
    pub fn age(&self) -> u64 {
        match (self.oldest, self.newest) {
            (Some(oldest), Some(newest)) => newest.whole_seconds_since(oldest).max(0) as u64,
            _ => 0,
        }
    }

    /// Drops every pending task and resets the extremes.
    pub fn purge(&mut self) -> bool {
        let dropped = self.pending.len();
        self.pending.clear();
        self.oldest = None;
        self.newest = None;
        self.next_sequence = 0;
        debug!(dropped, "Purged queue");
        true
    }

    pub fn status(&self) -> QueueStatus {
        QueueStatus {
            pending_count: self.pending.len(),
            age_secs: self.age(),
            oldest_timestamp: self.oldest,
            newest_timestamp: self.newest,
        }
    }

    pub fn oldest_timestamp(&self) -> Option<Timestamp> {
        self.oldest
    }

    pub fn newest_timestamp(&self) -> Option<Timestamp> {
        self.newest
    }

    pub fn get(&self, key: &TaskKey) -> Option<&Task> {
        self.pending.get(key)
    }

    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.pending.values()
    }

    // =========================================================================
    // ADMISSION
    // =========================================================================

    fn insert(&mut self, mut task: Task) {
        let key = task.key();

        match self.pending.get(&key) {
            Some(existing) => {
                if existing.timestamp < task.timestamp {
                    task.timestamp = existing.timestamp;
                }
                task.sequence = existing.sequence;
                trace!(work_type = %key.work_type, user_id = %key.user_id, "Replacing pending task");
            }
            None => {
                task.sequence = self.next_sequence;
                self.next_sequence += 1;
            }
        }

        self.oldest = Some(self.oldest.map_or(task.timestamp, |t| t.min(task.timestamp)));
        self.newest = Some(self.newest.map_or(task.timestamp, |t| t.max(task.timestamp)));
        self.pending.insert(key, task);
    }

    fn refresh_bounds(&mut self) {
        self.oldest = self.pending.values().map(|t| t.timestamp).min();
        self.newest = self.pending.values().map(|t| t.timestamp).max();
    }

    // =========================================================================
    // REPRIORITIZATION
    // =========================================================================

    /// Deprioritized and at least the threshold older than the newest task.
    fn is_age_reprioritized(&self, task: &Task) -> bool {
        age_reprioritized(&self.registry, &self.config, self.newest, task)
    }

    fn user_aggregates(&self) -> HashMap<UserId, UserAggregate> {
        let mut aggregates: HashMap<UserId, UserAggregate> = HashMap::new();
        for task in self.pending.values() {
            aggregates
                .entry(task.user_id)
                .and_modify(|aggregate| aggregate.absorb(task))
                .or_insert_with(|| UserAggregate::new(task));
        }
        aggregates
    }

    fn reprioritize(&mut self) {
        let aggregates = self.user_aggregates();
        let registry = &self.registry;
        let config = &self.config;
        let newest = self.newest;

        for task in self.pending.values_mut() {
            // Built from this same pending set, so every user has an entry.
            let aggregate = &aggregates[&task.user_id];
            let aged = age_reprioritized(registry, config, newest, task);
            let throttled = registry.is_deprioritized(&task.work_type) && !aged;

            match task.priority {
                // Age alone never lifts a NORMAL task; it only drops the penalty.
                PriorityTier::Normal => {
                    task.group_earliest_timestamp = Timestamp::MAX;
                    task.priority = if aggregate.pending_count >= config.rule_of_three_threshold {
                        task.group_earliest_timestamp = aggregate.earliest_timestamp;
                        PriorityTier::High
                    } else {
                        PriorityTier::Normal
                    };
                }
                PriorityTier::High => {
                    if throttled {
                        task.priority = aggregate.worst_priority;
                    }
                }
            }

            task.complexity_weight = if throttled {
                config.throttled_complexity_weight
            } else {
                DEFAULT_COMPLEXITY_WEIGHT
            };
        }
    }
}

fn age_reprioritized<R: WorkTypeRegistry>(
    registry: &R,
    config: &QueueConfig,
    newest: Option<Timestamp>,
    task: &Task,
) -> bool {
    let Some(newest) = newest else {
        return false;
    };
    registry.is_deprioritized(&task.work_type)
        && newest.whole_seconds_since(task.timestamp) >= config.age_reprioritization_threshold_secs
}
