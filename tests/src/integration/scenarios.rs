//! # Reference Provider Scenarios
//!
//! The ordering engine running against the reference registry:
//!
//! | Provider | Prerequisites | Throttled |
//! |----------|---------------|-----------|
//! | `companies_house` | - | no |
//! | `credit_check` | `companies_house` | no |
//! | `bank_statements` | - | yes |
//! | `id_verification` | - | no |

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use async_trait::async_trait;
    use parking_lot::Mutex;
    use queue_runtime::{DispatchSink, IntakeRequest, QueueRuntime, RuntimeConfig, RuntimeError};
    use shared_types::{Dispatch, PriorityTier, Submission, Timestamp, UserId};
    use tokio::time::timeout;
    use tq_01_task_queue::{TaskQueue, TaskQueueApi};
    use tq_02_provider_registry::ProviderRegistry;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn day(d: u32) -> Timestamp {
        Timestamp::from_ymd(2026, 1, d).unwrap()
    }

    fn queue() -> TaskQueue<ProviderRegistry> {
        TaskQueue::new(ProviderRegistry::reference().unwrap())
    }

    fn normal(provider: &str, user: u64, at: Timestamp) -> Submission {
        Submission::new(provider, user, at).with_priority(PriorityTier::Normal)
    }

    fn high(provider: &str, user: u64, at: Timestamp) -> Submission {
        Submission::new(provider, user, at).with_priority(PriorityTier::High)
    }

    fn drain(queue: &mut TaskQueue<ProviderRegistry>) -> Vec<(String, u64)> {
        std::iter::from_fn(|| queue.pop())
            .map(|d| (d.work_type.to_string(), d.user_id.0))
            .collect()
    }

    /// Records dispatches in the order the worker hands them over.
    #[derive(Default, Clone)]
    struct RecordingSink {
        seen: Arc<Mutex<Vec<Dispatch>>>,
    }

    #[async_trait]
    impl DispatchSink for RecordingSink {
        async fn handle(&self, dispatch: &Dispatch) -> Result<(), RuntimeError> {
            self.seen.lock().push(dispatch.clone());
            Ok(())
        }
    }

    // =============================================================================
    // SIZE / AGE / PURGE
    // =============================================================================

    #[test]
    fn test_empty_queue_reports_zero() {
        let queue = queue();
        assert_eq!(queue.size(), 0);
        assert_eq!(queue.age(), 0);
    }

    #[test]
    fn test_size_of_busy_queue_after_one_pop() {
        let mut queue = queue();
        queue.admit(Submission::new("credit_check", 123u64, day(15)));
        queue.admit(Submission::new("bank_statements", 123u64, day(15)));
        queue.pop();

        assert_eq!(queue.size(), 2);
    }

    #[test]
    fn test_age_spans_oldest_to_newest() {
        let mut queue = queue();
        let t = day(15);
        queue.admit(Submission::new("id_verification", 1u64, t));
        queue.admit(Submission::new("id_verification", 2u64, t.plus_seconds(3600).unwrap()));

        assert_eq!(queue.age(), 3600);
        assert_eq!(queue.status().age_secs, 3600);
    }

    #[test]
    fn test_purge_empties_queue() {
        let mut queue = queue();
        queue.admit(Submission::new("credit_check", 123u64, day(15)));
        queue.admit(Submission::new("bank_statements", 123u64, day(15)));

        assert!(queue.purge());
        assert_eq!(queue.size(), 0);
        assert_eq!(queue.age(), 0);
        assert!(queue.pop().is_none());
    }

    #[test]
    fn test_purge_empty_queue_still_succeeds() {
        assert!(queue().purge());
    }

    // =============================================================================
    // ORDERING
    // =============================================================================

    #[test]
    fn test_prerequisite_dispatched_first() {
        let mut queue = queue();
        assert_eq!(queue.admit(Submission::new("credit_check", 123u64, day(15))), 2);

        let first = queue.pop().unwrap();
        assert_eq!(first.work_type.as_str(), "companies_house");
        assert_eq!(first.user_id, UserId(123));
    }

    #[test]
    fn test_high_priority_user_dispatched_first() {
        let mut queue = queue();
        queue.admit(normal("credit_check", 123, day(15)));
        queue.admit(high("credit_check", 234, day(16)));

        assert_eq!(queue.pop().unwrap().user_id, UserId(234));
    }

    #[test]
    fn test_rule_of_three_groups_users_tasks() {
        let mut queue = queue();
        queue.admit(normal("credit_check", 123, day(15)));
        queue.admit(high("credit_check", 234, day(16)));
        queue.admit(normal("bank_statements", 123, day(15)));
        queue.admit(high("credit_check", 234, day(16)));

        let users: Vec<u64> = drain(&mut queue).into_iter().map(|(_, u)| u).collect();
        assert_eq!(&users[..4], &[123, 123, 123, 234]);
    }

    #[test]
    fn test_rule_of_three_with_distinct_work_types() {
        let mut queue = queue();
        let t = day(15);
        queue.admit(Submission::new("id_verification", 2u64, t));
        queue.admit(Submission::new("companies_house", 1u64, t.plus_seconds(60).unwrap()));
        queue.admit(Submission::new("id_verification", 1u64, t.plus_seconds(60).unwrap()));
        queue.admit(Submission::new("bank_statements", 1u64, t.plus_seconds(60).unwrap()));

        let users: Vec<u64> = drain(&mut queue).into_iter().map(|(_, u)| u).collect();
        assert_eq!(users, vec![1, 1, 1, 2]);
    }

    #[test]
    fn test_bank_statements_yield_to_other_work() {
        let mut queue = queue();
        let t = day(15);
        queue.admit(high("bank_statements", 1, t));
        queue.admit(normal("id_verification", 1, t.plus_seconds(10).unwrap()));

        // demoted to the user's NORMAL tier and weighted behind it
        let order = drain(&mut queue);
        assert_eq!(
            order,
            vec![
                ("id_verification".to_string(), 1),
                ("bank_statements".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_stale_bank_statements_lose_penalty() {
        let mut queue = queue();
        let t = day(15);
        queue.admit(Submission::new("bank_statements", 1u64, t));
        queue.admit(Submission::new("id_verification", 2u64, t.plus_seconds(600).unwrap()));

        assert_eq!(queue.pop().unwrap().work_type.as_str(), "bank_statements");
    }

    #[test]
    fn test_trait_object_matches_inherent_api() {
        let mut engine: Box<dyn TaskQueueApi> = Box::new(queue());
        assert_eq!(engine.admit(Submission::new("credit_check", 5u64, day(15))), 2);
        assert_eq!(engine.size(), 2);
        assert_eq!(engine.pop().unwrap().work_type.as_str(), "companies_house");
        assert!(engine.purge());
        assert_eq!(engine.status().pending_count, 0);
    }

    // =============================================================================
    // RUNTIME END TO END
    // =============================================================================

    #[tokio::test]
    async fn test_runtime_dispatches_intake_in_order() {
        let config = RuntimeConfig {
            idle_poll: Duration::from_millis(5),
            work_duration: Duration::ZERO,
            ..RuntimeConfig::default()
        };
        let runtime = QueueRuntime::new(config, ProviderRegistry::reference().unwrap());

        let receipt = runtime.intake().handle_at(
            IntakeRequest {
                user_id: UserId(9),
                providers: vec!["credit_check".to_string(), "payroll".to_string()],
            },
            day(15),
        );
        assert_eq!(receipt.skipped, vec!["payroll"]);
        assert_eq!(receipt.pending, 2);

        let sink = RecordingSink::default();
        let worker = runtime.spawn_worker(sink.clone());

        timeout(Duration::from_secs(5), runtime.wait_until_drained())
            .await
            .unwrap();
        runtime.shutdown();

        let report = worker.await.unwrap();
        assert_eq!(report.dispatched, 2);

        let seen: Vec<String> = sink
            .seen
            .lock()
            .iter()
            .map(|d| d.work_type.to_string())
            .collect();
        assert_eq!(seen, vec!["companies_house", "credit_check"]);
    }
}
