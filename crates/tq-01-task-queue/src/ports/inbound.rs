//! # Inbound Port - TaskQueueApi
//!
//! Primary driving port exposing the queue to intake and the worker.
//!
//! | Method | Caller |
//! |--------|--------|
//! | `admit` | intake |
//! | `pop` | worker |
//! | `size` / `age` / `status` | monitoring |
//! | `purge` | operator |

use shared_types::{Dispatch, Submission};

use crate::domain::{QueueStatus, TaskQueue};
use crate::ports::outbound::WorkTypeRegistry;

/// Primary API of the task queue.
///
/// # Example
///
/// ```rust,ignore
/// use tq_01_task_queue::ports::TaskQueueApi;
///
/// fn drain(queue: &mut dyn TaskQueueApi) {
///     while let Some(dispatch) = queue.pop() {
///         println!("{dispatch}");
///     }
/// }
/// ```
pub trait TaskQueueApi: Send {
    /// Admits a submission together with its prerequisites.
    ///
    /// Returns the number of pending tasks afterwards.
    fn admit(&mut self, submission: Submission) -> usize;

    /// Removes and returns the highest-ranked task, or `None` when empty.
    fn pop(&mut self) -> Option<Dispatch>;

    /// Number of pending tasks.
    fn size(&self) -> usize;

    /// Whole seconds between the newest and oldest admitted timestamps.
    fn age(&self) -> u64;

    /// Empties the queue. Always succeeds.
    fn purge(&mut self) -> bool;

    /// Snapshot of the queue counters.
    fn status(&self) -> QueueStatus;
}

impl<R: WorkTypeRegistry> TaskQueueApi for TaskQueue<R> {
    fn admit(&mut self, submission: Submission) -> usize {
        TaskQueue::admit(self, submission)
    }

    fn pop(&mut self) -> Option<Dispatch> {
        TaskQueue::pop(self)
    }

    fn size(&self) -> usize {
        TaskQueue::size(self)
    }

    fn age(&self) -> u64 {
        TaskQueue::age(self)
    }

    fn purge(&mut self) -> bool {
        TaskQueue::purge(self)
    }

    fn status(&self) -> QueueStatus {
        TaskQueue::status(self)
    }
}
