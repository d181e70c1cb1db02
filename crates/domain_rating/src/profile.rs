//! Driver profile consumed by the rating engine
//!
//! The profile is supplied by the caller and is read-only for the whole
//! calculation. Field validation happens where the profile is built.

use serde::{Deserialize, Serialize};

/// A driver and the vehicle to be rated
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DriverProfile {
    /// Driver age in whole years
    pub age: u32,
    /// Vehicle manufacturer, e.g. "Toyota"
    pub vehicle_make: String,
    /// Vehicle model, e.g. "Camry"
    pub vehicle_model: String,
    /// Number of at-fault accidents in the last five years
    pub accidents_in_last_five_years: u32,
}

impl DriverProfile {
    /// Creates a new driver profile
    ///
    /// # Arguments
    ///
    /// * `age` - Driver age in years
    /// * `vehicle_make` - Vehicle manufacturer
    /// * `vehicle_model` - Vehicle model
    /// * `accidents_in_last_five_years` - Recent accident count
    pub fn new(
        age: u32,
        vehicle_make: impl Into<String>,
        vehicle_model: impl Into<String>,
        accidents_in_last_five_years: u32,
    ) -> Self {
        Self {
            age,
            vehicle_make: vehicle_make.into(),
            vehicle_model: vehicle_model.into(),
            accidents_in_last_five_years,
        }
    }

    /// Returns true if the driver has no accidents on record
    pub fn has_clean_record(&self) -> bool {
        self.accidents_in_last_five_years == 0
    }
}
