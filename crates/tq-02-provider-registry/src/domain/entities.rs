//! Domain entities for the provider registry

use serde::{Deserialize, Serialize};
use shared_types::WorkTypeId;

/// An external data provider. Its name is the work type it serves.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provider {
    pub name: WorkTypeId,
    pub base_url: String,
    /// Providers that must be queried first, in order.
    #[serde(default)]
    pub depends_on: Vec<WorkTypeId>,
}

impl Provider {
    pub fn new(name: impl Into<WorkTypeId>, base_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base_url: base_url.into(),
            depends_on: Vec::new(),
        }
    }

    pub fn depends_on(mut self, prerequisite: impl Into<WorkTypeId>) -> Self {
        self.depends_on.push(prerequisite.into());
        self
    }
}
