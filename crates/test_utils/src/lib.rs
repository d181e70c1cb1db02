//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! rating test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built driver profiles and a shared engine
//! - `builders`: Builder for driver profiles with sensible defaults
//! - `assertions`: Custom assertion helpers for premiums
//! - `generators`: Property-based test data generators
//! - `logging`: Test tracing subscriber setup

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;
pub mod logging;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
pub use logging::*;
