//! Configuration for the provider registry

use serde::{Deserialize, Serialize};
use shared_types::WorkTypeId;

use crate::domain::Provider;

/// Provider catalogue and throttle set.
///
/// The default is the reference catalogue.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    pub providers: Vec<Provider>,
    /// Work types throttled until they age out
    #[serde(default)]
    pub deprioritized: Vec<WorkTypeId>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            providers: vec![
                Provider::new("bank_statements", "https://fake.bankstatements.co.uk"),
                Provider::new("companies_house", "https://fake.companieshouse.co.uk"),
                Provider::new("credit_check", "https://fake.creditcheck.co.uk")
                    .depends_on("companies_house"),
                Provider::new("id_verification", "https://fake.idv.co.uk"),
            ],
            deprioritized: vec![WorkTypeId::from("bank_statements")],
        }
    }
}
