//! Catalogue invariants checked at construction.

use std::collections::{HashMap, HashSet};

use shared_types::WorkTypeId;

use super::entities::Provider;
use super::errors::RegistryError;

/// Every prerequisite is itself registered.
pub fn check_dependencies_known(
    providers: &HashMap<WorkTypeId, Provider>,
) -> Result<(), RegistryError> {
    for provider in providers.values() {
        if let Some(missing) = provider
            .depends_on
            .iter()
            .find(|dep| !providers.contains_key(*dep))
        {
            return Err(RegistryError::UnknownDependency {
                provider: provider.name.to_string(),
                dependency: missing.to_string(),
            });
        }
    }
    Ok(())
}

/// The prerequisite graph is a DAG. Self-dependencies count as cycles.
pub fn check_no_cycles(providers: &HashMap<WorkTypeId, Provider>) -> Result<(), RegistryError> {
    let mut visited = HashSet::new();
    let mut rec_stack = HashSet::new();

    // Sorted so the reported provider is stable
    let mut names: Vec<&WorkTypeId> = providers.keys().collect();
    names.sort();

    for name in names {
        if let Some(at) = find_cycle_dfs(providers, name, &mut visited, &mut rec_stack) {
            return Err(RegistryError::CycleDetected {
                provider: at.to_string(),
            });
        }
    }
    Ok(())
}

fn find_cycle_dfs<'a>(
    providers: &'a HashMap<WorkTypeId, Provider>,
    node: &'a WorkTypeId,
    visited: &mut HashSet<&'a WorkTypeId>,
    rec_stack: &mut HashSet<&'a WorkTypeId>,
) -> Option<&'a WorkTypeId> {
    if rec_stack.contains(node) {
        return Some(node);
    }

    if visited.contains(node) {
        return None;
    }

    visited.insert(node);
    rec_stack.insert(node);

    if let Some(provider) = providers.get(node) {
        for dep in &provider.depends_on {
            if let Some(at) = find_cycle_dfs(providers, dep, visited, rec_stack) {
                return Some(at);
            }
        }
    }

    rec_stack.remove(node);
    None
}
