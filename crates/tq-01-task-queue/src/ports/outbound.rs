//! Outbound (Driven) ports for the task queue.
//!
//! The queue never owns work-type metadata. It asks a registry.

use shared_types::WorkTypeId;

/// Work-type metadata lookup.
pub trait WorkTypeRegistry: Send + Sync {
    /// Direct prerequisites of `work_type`, or `None` if it is unknown.
    fn prerequisites(&self, work_type: &WorkTypeId) -> Option<&[WorkTypeId]>;

    /// Whether tasks of `work_type` are throttled until they age out.
    ///
    /// Unknown work types are not deprioritized.
    fn is_deprioritized(&self, work_type: &WorkTypeId) -> bool;
}

/// Mock registry for testing.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MockRegistry {
    prerequisites: std::collections::HashMap<WorkTypeId, Vec<WorkTypeId>>,
    deprioritized: std::collections::HashSet<WorkTypeId>,
}

#[cfg(test)]
impl MockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `name` with the given prerequisites.
    pub fn with(mut self, name: &str, prerequisites: &[&str]) -> Self {
        self.prerequisites.insert(
            WorkTypeId::from(name),
            prerequisites.iter().map(|p| WorkTypeId::from(*p)).collect(),
        );
        self
    }

    /// Registers `name` as deprioritized, without prerequisites.
    pub fn with_deprioritized(mut self, name: &str) -> Self {
        self = self.with(name, &[]);
        self.deprioritized.insert(WorkTypeId::from(name));
        self
    }

    /// The four reference providers.
    pub fn reference() -> Self {
        Self::new()
            .with_deprioritized("bank_statements")
            .with("companies_house", &[])
            .with("credit_check", &["companies_house"])
            .with("id_verification", &[])
    }
}

#[cfg(test)]
impl WorkTypeRegistry for MockRegistry {
    fn prerequisites(&self, work_type: &WorkTypeId) -> Option<&[WorkTypeId]> {
        self.prerequisites.get(work_type).map(Vec::as_slice)
    }

    fn is_deprioritized(&self, work_type: &WorkTypeId) -> bool {
        self.deprioritized.contains(work_type)
    }
}
