//! Error types for the provider registry

use thiserror::Error;

/// Reasons a provider catalogue is rejected at construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Two providers share a name
    #[error("Duplicate provider: {name}")]
    DuplicateProvider { name: String },

    /// A prerequisite names a provider that is not registered
    #[error("Provider {provider} depends on unknown provider {dependency}")]
    UnknownDependency { provider: String, dependency: String },

    /// The deprioritized set names a provider that is not registered
    #[error("Unknown deprioritized provider: {name}")]
    UnknownDeprioritized { name: String },

    /// Prerequisites form a cycle
    #[error("Cycle detected in provider dependencies at {provider}")]
    CycleDetected { provider: String },
}
