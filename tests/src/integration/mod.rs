//! # Integration Tests
//!
//! The ordering engine wired to the reference provider registry, and the
//! runtime driving it end to end.

pub mod properties;
pub mod scenarios;
