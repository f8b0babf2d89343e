//! # TQ-02: Provider Registry
//!
//! Static catalogue of data providers. Each provider is a work type with a
//! base URL and an ordered list of prerequisite providers. One or more
//! providers can be marked deprioritized, which the task queue throttles.
//!
//! ## Architecture
//!
//! - **Domain**: `Provider`, `ProviderRegistry`, invariants (known
//!   dependencies, acyclic graph)
//! - **Adapters**: `WorkTypeRegistry` implementation for the task queue
//! - **Config**: `RegistryConfig`, defaulting to the reference catalogue
//!
//! ## Reference Catalogue
//!
//! | Provider | Depends on | Deprioritized |
//! |----------|------------|---------------|
//! | `bank_statements` | | yes |
//! | `companies_house` | | |
//! | `credit_check` | `companies_house` | |
//! | `id_verification` | | |

pub mod adapters;
pub mod config;
pub mod domain;

pub use config::RegistryConfig;
pub use domain::entities::Provider;
pub use domain::errors::RegistryError;
pub use domain::registry::ProviderRegistry;
