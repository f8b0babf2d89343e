//! # Dependency Expansion
//!
//! Turns one requested task into the batch of tasks that must be queued:
//! every transitive prerequisite first (depth-first, declared order), then
//! the requested task itself.
//!
//! ```text
//! credit_check ─→ companies_house
//!
//! expand(credit_check) = [companies_house, credit_check]
//! ```
//!
//! A work type already on the current expansion path is not descended into
//! again, so a cyclic registry yields a finite batch. Diamond-shaped graphs
//! yield duplicates; admission collapses them by key.

use std::collections::HashSet;

use shared_types::WorkTypeId;
use tracing::warn;

use super::entities::Task;
use crate::ports::outbound::WorkTypeRegistry;

/// Expands `requested` into prerequisites followed by itself.
///
/// Unknown work types contribute no prerequisites.
pub fn expand<R: WorkTypeRegistry + ?Sized>(registry: &R, requested: Task) -> Vec<Task> {
    let mut batch = Vec::new();
    let mut path = HashSet::from([requested.work_type.clone()]);
    collect_prerequisites(registry, &requested, &mut path, &mut batch);
    batch.push(requested);
    batch
}

fn collect_prerequisites<R: WorkTypeRegistry + ?Sized>(
    registry: &R,
    task: &Task,
    path: &mut HashSet<WorkTypeId>,
    batch: &mut Vec<Task>,
) {
    let Some(prerequisites) = registry.prerequisites(&task.work_type) else {
        return;
    };

    for prerequisite in prerequisites {
        if path.contains(prerequisite) {
            warn!(
                work_type = %task.work_type,
                prerequisite = %prerequisite,
                "Dependency cycle detected, not expanding further"
            );
            continue;
        }

        let child = task.prerequisite(prerequisite.clone());
        path.insert(prerequisite.clone());
        collect_prerequisites(registry, &child, path, batch);
        path.remove(prerequisite);
        batch.push(child);
    }
}
