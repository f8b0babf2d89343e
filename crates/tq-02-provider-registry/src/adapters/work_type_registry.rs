//! `WorkTypeRegistry` backed by the provider catalogue.

use shared_types::WorkTypeId;
use tq_01_task_queue::WorkTypeRegistry;

use crate::domain::ProviderRegistry;

impl WorkTypeRegistry for ProviderRegistry {
    fn prerequisites(&self, work_type: &WorkTypeId) -> Option<&[WorkTypeId]> {
        self.dependencies_of(work_type)
    }

    fn is_deprioritized(&self, work_type: &WorkTypeId) -> bool {
        ProviderRegistry::is_deprioritized(self, work_type)
    }
}
