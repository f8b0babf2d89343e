//! # Task Queue Subsystem
//!
//! **Crate:** tq-01
//!
//! ## Purpose
//!
//! Admits units of work (one work type for one user), expands their
//! prerequisites, and on every pop decides which pending task is dispatched
//! next from explicit priority hints, per-user fairness and a throttle on
//! deprioritized work types.
//!
//! ## Domain Invariants
//!
//! | Invariant | Enforcement Location |
//! |-----------|---------------------|
//! | At most one pending task per `(user, work type)` | `domain/queue.rs` - `insert()` keyed map |
//! | Resubmission keeps the earliest timestamp | `domain/queue.rs` - `insert()` |
//! | Prerequisites admitted before dependents | `domain/expansion.rs` - `expand()` |
//! | Cyclic registries expand finitely | `domain/expansion.rs` - path guard |
//! | Derived attributes recomputed every pop | `domain/queue.rs` - `reprioritize()` |
//! | Deterministic total order | `domain/value_objects.rs` - `OrderingKey` |
//!
//! ## Lifecycle
//!
//! ```text
//! Submission ──admit──→ [PENDING] ──pop (reprioritize + select)──→ Dispatch
//!                           │
//!                           └── purge ──→ [DROPPED]
//! ```
//!
//! ## Outbound Dependencies
//!
//! | Collaborator | Trait | Purpose |
//! |--------------|-------|---------|
//! | Provider registry (tq-02) | `WorkTypeRegistry` | Prerequisites and throttle set |
//!
//! ## Module Structure (Hexagonal Architecture)
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      MIDDLE LAYER                               │
//! │  ports/inbound.rs  - TaskQueueApi trait                         │
//! │  ports/outbound.rs - WorkTypeRegistry trait                     │
//! └─────────────────────────────────────────────────────────────────┘
//!                          ↑ uses ↑
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      INNER LAYER                                │
//! │  domain/entities.rs      - Task, TaskKey                        │
//! │  domain/expansion.rs     - prerequisite expansion               │
//! │  domain/queue.rs         - TaskQueue                            │
//! │  domain/value_objects.rs - OrderingKey, QueueStatus             │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The queue is synchronous and not internally locked. A host that shares
//! it between an intake and a worker serializes access itself.

pub mod config;
pub mod domain;
pub mod ports;

pub use config::QueueConfig;
pub use domain::*;
pub use ports::*;
