//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! grant review test suites.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built test data, including the reference expert roster
//! - `builders`: Builder patterns for application data, rosters and services
//! - `assertions`: Custom assertion helpers for lifecycle invariants
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
