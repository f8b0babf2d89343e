//! # Task Queue Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── benchmarks/       # Criterion groups, driven from benches/
//! │   └── task_queue.rs
//! │
//! └── integration/      # Engine + registry + runtime together
//!     ├── scenarios.rs  # Reference provider scenarios
//!     └── properties.rs # Randomized admission and drain checks
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p tq-tests
//!
//! # By category
//! cargo test -p tq-tests integration::scenarios::
//! cargo test -p tq-tests integration::properties::
//!
//! # Benchmarks
//! cargo bench -p tq-tests
//! ```

pub mod benchmarks;
pub mod integration;
