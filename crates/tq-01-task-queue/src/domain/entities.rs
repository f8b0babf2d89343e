//! Core domain entities for the task queue.

use shared_types::{Dispatch, PriorityTier, Submission, Timestamp, UserId, WorkTypeId};

/// Complexity weight of a task that is not throttled.
pub const DEFAULT_COMPLEXITY_WEIGHT: u8 = 1;

/// Identity of a pending task. At most one task per key is queued.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TaskKey {
    pub user_id: UserId,
    pub work_type: WorkTypeId,
}

/// A pending task with its derived ordering attributes.
///
/// `priority`, `group_earliest_timestamp` and `complexity_weight` start from
/// the submission (or defaults) and are rewritten on every pop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Task {
    pub work_type: WorkTypeId,
    pub user_id: UserId,
    pub timestamp: Timestamp,
    pub priority: PriorityTier,
    /// `Timestamp::MAX` when the task carries no group boost.
    pub group_earliest_timestamp: Timestamp,
    pub complexity_weight: u8,
    /// Admission order. A replaced key keeps its original value.
    pub(crate) sequence: u64,
}

impl Task {
    /// Builds a task from a submission, filling absent attributes with defaults.
    pub fn from_submission(submission: Submission) -> Self {
        let attributes = submission.attributes;
        Self {
            work_type: submission.work_type,
            user_id: submission.user_id,
            timestamp: submission.timestamp,
            priority: attributes.priority.unwrap_or_default(),
            group_earliest_timestamp: attributes
                .group_earliest_timestamp
                .unwrap_or(Timestamp::MAX),
            complexity_weight: attributes
                .complexity_weight
                .unwrap_or(DEFAULT_COMPLEXITY_WEIGHT),
            sequence: 0,
        }
    }

    /// Prerequisite task for `work_type`. Same user and timestamp, default
    /// attributes.
    pub fn prerequisite(&self, work_type: WorkTypeId) -> Self {
        Self {
            work_type,
            user_id: self.user_id,
            timestamp: self.timestamp,
            priority: PriorityTier::default(),
            group_earliest_timestamp: Timestamp::MAX,
            complexity_weight: DEFAULT_COMPLEXITY_WEIGHT,
            sequence: 0,
        }
    }

    pub fn key(&self) -> TaskKey {
        TaskKey {
            user_id: self.user_id,
            work_type: self.work_type.clone(),
        }
    }

    pub fn has_group_boost(&self) -> bool {
        !self.group_earliest_timestamp.is_sentinel()
    }

    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    pub fn to_dispatch(&self) -> Dispatch {
        Dispatch {
            work_type: self.work_type.clone(),
            user_id: self.user_id,
        }
    }
}
