//! Domain module for the provider registry
//!
//! Contains the provider entity, the registry, errors, and invariants.

pub mod entities;
pub mod errors;
pub mod invariants;
pub mod registry;

pub use entities::*;
pub use errors::*;
pub use registry::*;
