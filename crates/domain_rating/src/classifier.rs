//! Vehicle classification
//!
//! Maps a raw make/model pair onto the rating category used to pick a
//! base rate. Matching is case-insensitive and follows a fixed priority:
//!
//! 1. luxury makes
//! 2. sports makes
//! 3. SUV models
//! 4. everything else rates as a sedan
//!
//! The first matching list wins. A make that is both listed and paired
//! with an SUV model (a BMW "explorer") is classified by its make.

use serde::{Deserialize, Serialize};
use std::fmt;

const LUXURY_MAKES: &[&str] = &["bmw", "mercedes", "lexus", "audi"];
const SPORTS_MAKES: &[&str] = &["ferrari", "porsche", "mustang", "corvette"];
const SUV_MODELS: &[&str] = &["suv", "explorer", "tahoe", "highlander"];

/// Vehicle rating category
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleCategory {
    Sedan,
    Suv,
    Luxury,
    Sports,
}

impl VehicleCategory {
    /// All categories, in knowledge base order
    pub const ALL: [VehicleCategory; 4] = [
        VehicleCategory::Sedan,
        VehicleCategory::Suv,
        VehicleCategory::Luxury,
        VehicleCategory::Sports,
    ];

    /// Returns the key segment used in the knowledge base
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleCategory::Sedan => "sedan",
            VehicleCategory::Suv => "suv",
            VehicleCategory::Luxury => "luxury",
            VehicleCategory::Sports => "sports",
        }
    }

    /// Parses a knowledge base key segment
    pub fn from_key(segment: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == segment)
    }
}

impl fmt::Display for VehicleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which priority rule produced a classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClassificationBasis {
    /// Make is on the luxury list
    LuxuryMake,
    /// Make is on the sports list
    SportsMake,
    /// Model is on the SUV list
    SuvModel,
    /// Nothing matched; rated as a sedan
    Default,
}

/// Result of classifying a vehicle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub category: VehicleCategory,
    pub basis: ClassificationBasis,
}

/// Classifies a vehicle into its rating category
///
/// Unknown vehicles rate as [`VehicleCategory::Sedan`].
pub fn classify(make: &str, model: &str) -> VehicleCategory {
    classify_with_basis(make, model).category
}

/// Classifies a vehicle and reports which rule matched
pub fn classify_with_basis(make: &str, model: &str) -> Classification {
    let make = make.to_lowercase();
    let model = model.to_lowercase();

    let (category, basis) = if LUXURY_MAKES.contains(&make.as_str()) {
        (VehicleCategory::Luxury, ClassificationBasis::LuxuryMake)
    } else if SPORTS_MAKES.contains(&make.as_str()) {
        (VehicleCategory::Sports, ClassificationBasis::SportsMake)
    } else if SUV_MODELS.contains(&model.as_str()) {
        (VehicleCategory::Suv, ClassificationBasis::SuvModel)
    } else {
        tracing::debug!(%make, %model, "unrecognized vehicle, rating as sedan");
        (VehicleCategory::Sedan, ClassificationBasis::Default)
    };

    Classification { category, basis }
}
