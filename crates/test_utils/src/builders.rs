//! Test Data Builders
//!
//! Provides a builder for driver profiles with sensible defaults, so
//! tests only specify the fields that matter to them.

use domain_rating::DriverProfile;

/// Builder for constructing test driver profiles
///
/// Defaults to a 30 year old Toyota Camry driver with a clean record.
pub struct DriverProfileBuilder {
    age: u32,
    vehicle_make: String,
    vehicle_model: String,
    accidents: u32,
}

impl Default for DriverProfileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DriverProfileBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            age: 30,
            vehicle_make: "Toyota".to_string(),
            vehicle_model: "Camry".to_string(),
            accidents: 0,
        }
    }

    /// Sets the driver age
    pub fn with_age(mut self, age: u32) -> Self {
        self.age = age;
        self
    }

    /// Sets the vehicle make and model
    pub fn with_vehicle(mut self, make: impl Into<String>, model: impl Into<String>) -> Self {
        self.vehicle_make = make.into();
        self.vehicle_model = model.into();
        self
    }

    /// Sets the accident count for the last five years
    pub fn with_accidents(mut self, accidents: u32) -> Self {
        self.accidents = accidents;
        self
    }

    /// Builds the profile
    pub fn build(self) -> DriverProfile {
        DriverProfile::new(self.age, self.vehicle_make, self.vehicle_model, self.accidents)
    }
}
