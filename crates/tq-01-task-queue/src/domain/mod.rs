//! # Domain Layer - Task Queue
//!
//! Pure ordering logic. No I/O, no clocks, no locks.
//!
//! ## Components
//!
//! - `entities`: Task, TaskKey
//! - `expansion`: prerequisite expansion over the work-type registry
//! - `queue`: TaskQueue with admission, reprioritization and pop
//! - `value_objects`: OrderingKey, UserAggregate, QueueStatus

pub mod entities;
pub mod expansion;
pub mod queue;
pub mod value_objects;

pub use entities::*;
pub use queue::*;
pub use value_objects::*;
