//! # Task Queue Benchmarks
//!
//! ```bash
//! cargo bench -p tq-tests
//! cargo bench -p tq-tests -- tq-01-pop
//! ```

use criterion::{criterion_group, criterion_main, Criterion};
use tq_tests::benchmarks::task_queue;

fn bench_task_queue(c: &mut Criterion) {
    task_queue::register_benchmarks(c);
}

criterion_group!(benches, bench_task_queue);
criterion_main!(benches);
