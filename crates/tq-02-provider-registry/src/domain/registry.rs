//! # Provider Registry
//!
//! Immutable catalogue of providers keyed by work type, plus the set of
//! deprioritized work types. Validated once at construction:
//!
//! - no duplicate names
//! - every prerequisite registered
//! - every deprioritized name registered
//! - prerequisites acyclic

use std::collections::{HashMap, HashSet};

use shared_types::WorkTypeId;
use tracing::debug;

use super::entities::Provider;
use super::errors::RegistryError;
use super::invariants::{check_dependencies_known, check_no_cycles};
use crate::config::RegistryConfig;

#[derive(Clone, Debug)]
pub struct ProviderRegistry {
    providers: HashMap<WorkTypeId, Provider>,
    /// Registration order, for listing.
    order: Vec<WorkTypeId>,
    deprioritized: HashSet<WorkTypeId>,
}

impl ProviderRegistry {
    /// Builds and validates a registry.
    pub fn new(
        providers: impl IntoIterator<Item = Provider>,
        deprioritized: impl IntoIterator<Item = WorkTypeId>,
    ) -> Result<Self, RegistryError> {
        let mut by_name = HashMap::new();
        let mut order = Vec::new();

        for provider in providers {
            if by_name.contains_key(&provider.name) {
                return Err(RegistryError::DuplicateProvider {
                    name: provider.name.to_string(),
                });
            }
            order.push(provider.name.clone());
            by_name.insert(provider.name.clone(), provider);
        }

        let deprioritized: HashSet<WorkTypeId> = deprioritized.into_iter().collect();
        if let Some(unknown) = deprioritized.iter().find(|n| !by_name.contains_key(*n)) {
            return Err(RegistryError::UnknownDeprioritized {
                name: unknown.to_string(),
            });
        }

        check_dependencies_known(&by_name)?;
        check_no_cycles(&by_name)?;

        debug!(
            providers = order.len(),
            deprioritized = deprioritized.len(),
            "Provider registry validated"
        );

        Ok(Self {
            providers: by_name,
            order,
            deprioritized,
        })
    }

    pub fn from_config(config: RegistryConfig) -> Result<Self, RegistryError> {
        Self::new(config.providers, config.deprioritized)
    }

    /// The reference catalogue: bank statements (throttled), companies house,
    /// credit check (after companies house) and ID verification.
    pub fn reference() -> Result<Self, RegistryError> {
        Self::from_config(RegistryConfig::default())
    }

    pub fn get(&self, name: &str) -> Option<&Provider> {
        self.providers.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.providers.contains_key(name)
    }

    /// Providers in registration order.
    pub fn providers(&self) -> impl Iterator<Item = &Provider> {
        self.order.iter().filter_map(|name| self.providers.get(name))
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    pub fn dependencies_of(&self, name: &WorkTypeId) -> Option<&[WorkTypeId]> {
        self.providers.get(name).map(|p| p.depends_on.as_slice())
    }

    pub fn is_deprioritized(&self, name: &WorkTypeId) -> bool {
        self.deprioritized.contains(name)
    }
}
