//! # Admission and Drain Properties
//!
//! Random submission streams against the reference registry, checked
//! against a plain map of `(user, work type) -> earliest timestamp`.

#[cfg(test)]
mod tests {
    use std::collections::{HashMap, HashSet};

    use proptest::prelude::*;
    use shared_types::{PriorityTier, Submission, Timestamp, UserId, WorkTypeId};
    use tq_01_task_queue::{TaskKey, TaskQueue};
    use tq_02_provider_registry::ProviderRegistry;

    /// `payroll` is not registered and is queued on its own.
    const WORK_TYPES: [&str; 5] = [
        "companies_house",
        "credit_check",
        "bank_statements",
        "id_verification",
        "payroll",
    ];

    type Model = HashMap<(u64, String), Timestamp>;

    fn at(offset_secs: i64) -> Timestamp {
        Timestamp::from_ymd(2026, 1, 15)
            .unwrap()
            .plus_seconds(offset_secs)
            .unwrap()
    }

    /// The work types one submission puts in the queue.
    fn expanded(work_type: &str) -> Vec<&'static str> {
        match work_type {
            "credit_check" => vec!["companies_house", "credit_check"],
            "companies_house" => vec!["companies_house"],
            "bank_statements" => vec!["bank_statements"],
            "id_verification" => vec!["id_verification"],
            _ => vec!["payroll"],
        }
    }

    fn submission_strategy() -> impl Strategy<Value = (usize, u64, i64, bool)> {
        (0usize..WORK_TYPES.len(), 0u64..4, 0i64..7_200, any::<bool>())
    }

    fn build(stream: &[(usize, u64, i64, bool)]) -> Vec<Submission> {
        stream
            .iter()
            .map(|&(w, user, offset, is_high)| {
                let submission = Submission::new(WORK_TYPES[w], user, at(offset));
                if is_high {
                    submission.with_priority(PriorityTier::High)
                } else {
                    submission
                }
            })
            .collect()
    }

    fn record(model: &mut Model, submission: &Submission) {
        for work_type in expanded(submission.work_type.as_str()) {
            model
                .entry((submission.user_id.0, work_type.to_string()))
                .and_modify(|t| *t = (*t).min(submission.timestamp))
                .or_insert(submission.timestamp);
        }
    }

    fn queue() -> TaskQueue<ProviderRegistry> {
        TaskQueue::new(ProviderRegistry::reference().unwrap())
    }

    proptest! {
        #[test]
        fn test_admit_counts_distinct_keys(
            stream in prop::collection::vec(submission_strategy(), 1..40)
        ) {
            let mut queue = queue();
            let mut model = Model::new();

            for submission in build(&stream) {
                record(&mut model, &submission);
                prop_assert_eq!(queue.admit(submission), model.len());
            }
        }

        #[test]
        fn test_resubmission_keeps_earliest_timestamp(
            stream in prop::collection::vec(submission_strategy(), 1..40)
        ) {
            let mut queue = queue();
            let mut model = Model::new();

            for submission in build(&stream) {
                record(&mut model, &submission);
                queue.admit(submission);
            }

            for ((user, work_type), earliest) in &model {
                let key = TaskKey {
                    user_id: UserId(*user),
                    work_type: WorkTypeId::from(work_type.as_str()),
                };
                let task = queue.get(&key);
                prop_assert!(task.is_some());
                prop_assert_eq!(task.map(|t| t.timestamp), Some(*earliest));
            }

            let oldest = model.values().min().copied();
            let newest = model.values().max().copied();
            prop_assert_eq!(queue.oldest_timestamp(), oldest);
            prop_assert_eq!(queue.newest_timestamp(), newest);
        }

        #[test]
        fn test_drain_dispatches_every_key_once(
            stream in prop::collection::vec(submission_strategy(), 1..40)
        ) {
            let mut queue = queue();
            let mut model = Model::new();

            for submission in build(&stream) {
                record(&mut model, &submission);
                queue.admit(submission);
            }

            let mut seen = HashSet::new();
            while let Some(dispatch) = queue.pop() {
                let fresh = seen.insert((dispatch.user_id.0, dispatch.work_type.to_string()));
                prop_assert!(fresh);
                prop_assert_eq!(queue.size(), model.len() - seen.len());
            }

            let expected: HashSet<_> = model.keys().cloned().collect();
            prop_assert_eq!(seen, expected);
            prop_assert_eq!(queue.age(), 0);
        }

        #[test]
        fn test_age_never_exceeds_admitted_span(
            stream in prop::collection::vec(submission_strategy(), 1..40),
            pops in 0usize..20
        ) {
            let mut queue = queue();
            for submission in build(&stream) {
                queue.admit(submission);
            }
            for _ in 0..pops {
                queue.pop();
            }

            let span = queue
                .tasks()
                .map(|t| t.timestamp)
                .max()
                .zip(queue.tasks().map(|t| t.timestamp).min())
                .map_or(0, |(newest, oldest)| newest.whole_seconds_since(oldest) as u64);
            prop_assert_eq!(queue.age(), span);
        }
    }
}
