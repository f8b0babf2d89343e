//! # TQ-01 Task Queue Benchmarks
//!
//! Conditions:
//! - Up to 4,000 pending tasks across 1,000 users
//! - Every user requests every reference provider (full prerequisite expansion)
//! - Timestamps spread over hours so deprioritized work ages out mid-run
//! - Re-admission of keys already pending

use criterion::{black_box, BatchSize, BenchmarkId, Criterion, Throughput};
use shared_types::{PriorityTier, Submission, Timestamp};
use std::time::Duration;
use tq_01_task_queue::TaskQueue;
use tq_02_provider_registry::ProviderRegistry;

const PROVIDERS: [&str; 4] = [
    "companies_house",
    "credit_check",
    "bank_statements",
    "id_verification",
];

fn base_time() -> Timestamp {
    Timestamp::from_ymd(2026, 1, 15).unwrap_or(Timestamp::MAX)
}

/// One submission per (user, provider). Every tenth user is HIGH.
fn submissions(users: u64) -> Vec<Submission> {
    let base = base_time();
    let mut out = Vec::with_capacity(users as usize * PROVIDERS.len());
    for user in 0..users {
        let at = base.plus_seconds(user as i64 * 30).unwrap_or(base);
        for provider in PROVIDERS {
            let submission = Submission::new(provider, user, at);
            out.push(if user % 10 == 0 {
                submission.with_priority(PriorityTier::High)
            } else {
                submission
            });
        }
    }
    out
}

fn populated_queue(users: u64) -> TaskQueue<ProviderRegistry> {
    let registry = ProviderRegistry::reference().expect("reference registry is valid");
    let mut queue = TaskQueue::new(registry);
    for submission in submissions(users) {
        queue.admit(submission);
    }
    queue
}

pub fn bench_admission(c: &mut Criterion) {
    let mut group = c.benchmark_group("tq-01-admission");
    group.measurement_time(Duration::from_secs(10));

    for users in [10u64, 100, 1_000] {
        let batch = submissions(users);
        group.throughput(Throughput::Elements(batch.len() as u64));
        group.bench_with_input(BenchmarkId::new("admit_all", users), &batch, |b, batch| {
            b.iter_batched(
                || populated_queue(0),
                |mut queue| {
                    for submission in batch.iter().cloned() {
                        black_box(queue.admit(submission));
                    }
                    queue
                },
                BatchSize::SmallInput,
            )
        });
    }

    let resubmissions = submissions(100);
    group.bench_function("readmit_pending_keys_100_users", |b| {
        b.iter_batched(
            || populated_queue(100),
            |mut queue| {
                for submission in resubmissions.iter().cloned() {
                    black_box(queue.admit(submission));
                }
                queue
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

pub fn bench_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("tq-01-pop");
    group.measurement_time(Duration::from_secs(10));

    for users in [10u64, 100, 1_000] {
        group.bench_with_input(BenchmarkId::new("single_pop", users), &users, |b, &users| {
            b.iter_batched(
                || populated_queue(users),
                |mut queue| black_box(queue.pop()),
                BatchSize::LargeInput,
            )
        });
    }

    let users = 100u64;
    group.throughput(Throughput::Elements(users * PROVIDERS.len() as u64));
    group.bench_function("drain_100_users", |b| {
        b.iter_batched(
            || populated_queue(users),
            |mut queue| {
                while let Some(dispatch) = queue.pop() {
                    black_box(dispatch);
                }
            },
            BatchSize::LargeInput,
        )
    });

    group.finish();
}

pub fn register_benchmarks(c: &mut Criterion) {
    bench_admission(c);
    bench_pop(c);
}
