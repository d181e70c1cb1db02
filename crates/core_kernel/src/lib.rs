//! Core Kernel - Foundational value types for the rating system
//!
//! This crate provides the building blocks shared by the rating domain:
//! - Money types with precise decimal arithmetic
//! - Multiplicative rating factors
//! - The kernel error type

pub mod money;
pub mod error;

pub use money::{Money, Currency, Factor, MoneyError};
pub use error::CoreError;
