//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! lead capture test suite.
//!
//! # Modules
//!
//! - `fixtures`: Known documents, leads, campaigns and forms configuration
//! - `builders`: Builder for lead test data
//! - `assertions`: Assertion helpers for validation results
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
