//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! payment schedule test suite.
//!
//! # Modules
//!
//! - `fixtures`: Reference dates and requests with known schedules
//! - `builders`: Builder for schedule requests with sensible defaults
//! - `assertions`: Assertion helpers for schedule invariants
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
