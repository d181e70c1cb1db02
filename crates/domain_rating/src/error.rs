//! Rating domain errors
//!
//! This module defines all error types that can occur while rating a
//! driver profile.

use thiserror::Error;

use core_kernel::{CoreError, MoneyError};

/// Errors that can occur in the rating domain
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RatingError {
    /// The knowledge base has no entry for a key a rule needed
    ///
    /// This is a defect in the compiled-in tables, not a recoverable
    /// input problem. No premium is produced.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A rule ran before a rule it depends on
    #[error("Rule '{rule}' requires '{requires}' to have been applied first")]
    RuleDependency {
        rule: &'static str,
        requires: &'static str,
    },

    /// Error raised by a kernel value type
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl RatingError {
    /// Creates a missing knowledge base key error
    pub fn missing_key(key: impl std::fmt::Display) -> Self {
        RatingError::Configuration(format!("knowledge base has no entry for '{}'", key))
    }

    /// Returns true for errors that indicate a broken rating setup
    pub fn is_configuration(&self) -> bool {
        matches!(self, RatingError::Configuration(_) | RatingError::RuleDependency { .. })
    }
}

impl From<MoneyError> for RatingError {
    fn from(err: MoneyError) -> Self {
        RatingError::Core(CoreError::Money(err))
    }
}
