//! Auto Insurance Rating Domain
//!
//! This crate computes an auto insurance premium for a driver profile by
//! running an ordered set of rating rules against a static knowledge base
//! of rates and factors.
//!
//! # Architecture
//!
//! The domain layer is infrastructure-agnostic, containing only business logic:
//! - **Knowledge Base**: base rates, age factors, accident surcharges
//! - **Classifier**: make/model to vehicle category
//! - **Rules**: base rate, age factor, accident history
//! - **Rules Engine**: applies the rules in sequence to build a Premium
//!
//! # Rating Flow
//!
//! ```text
//! DriverProfile -> [base rate] -> [age factor] -> [accident history] -> Premium
//! ```
//!
//! # Example
//!
//! ```rust
//! use domain_rating::{DriverProfile, RatingEngine};
//!
//! let engine = RatingEngine::new();
//! let premium = engine.calculate_premium(&DriverProfile::new(30, "Toyota", "Camry", 0))?;
//!
//! for adjustment in premium.adjustments() {
//!     println!("{}: {} ({})", adjustment.label, adjustment.amount, adjustment.explanation);
//! }
//! println!("Total: {}", premium.total());
//! # Ok::<(), domain_rating::RatingError>(())
//! ```

pub mod classifier;
pub mod error;
pub mod knowledge_base;
pub mod premium;
pub mod profile;
pub mod rules;
pub mod rules_engine;

pub use classifier::{
    classify, classify_with_basis, Classification, ClassificationBasis, VehicleCategory,
};
pub use error::RatingError;
pub use knowledge_base::{AccidentBucket, AgeBracket, FactKey, KnowledgeBase, KnowledgeBaseBuilder};
pub use premium::{Adjustment, Premium};
pub use profile::DriverProfile;
pub use rules::{RatingRule, ACCIDENT_HISTORY_LABEL, AGE_FACTOR_LABEL};
pub use rules_engine::RatingEngine;
