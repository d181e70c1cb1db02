//! Pre-built Test Fixtures
//!
//! Provides ready-to-use driver profiles and rating data. These fixtures
//! are consistent and predictable for unit tests.

use core_kernel::{Currency, Money};
use domain_rating::{DriverProfile, RatingEngine};
use once_cell::sync::Lazy;
use rust_decimal_macros::dec;

/// Engine over the standard rates, shared read-only by all tests
pub static STANDARD_ENGINE: Lazy<RatingEngine> = Lazy::new(RatingEngine::new);

/// Fixture for driver profiles
pub struct ProfileFixtures;

impl ProfileFixtures {
    /// 30 year old, Toyota Camry, clean record: rates at exactly $1000
    pub fn standard_sedan_driver() -> DriverProfile {
        DriverProfile::new(30, "Toyota", "Camry", 0)
    }

    /// 17 year old, Ferrari 488, two accidents: rates at $4200
    pub fn young_sports_driver() -> DriverProfile {
        DriverProfile::new(17, "Ferrari", "488", 2)
    }

    /// 45 year old, BMW X5, one accident
    pub fn luxury_driver_one_accident() -> DriverProfile {
        DriverProfile::new(45, "BMW", "X5", 1)
    }

    /// 22 year old, Chevrolet Tahoe, clean record
    pub fn young_adult_suv_driver() -> DriverProfile {
        DriverProfile::new(22, "Chevrolet", "Tahoe", 0)
    }

    /// 70 year old, Lexus ES, clean record
    pub fn senior_luxury_driver() -> DriverProfile {
        DriverProfile::new(70, "Lexus", "ES", 0)
    }

    /// Make listed as luxury paired with a model listed as SUV
    pub fn luxury_make_suv_model() -> DriverProfile {
        DriverProfile::new(40, "BMW", "explorer", 0)
    }
}

/// Fixture for premium amounts
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// Creates a USD amount
    pub fn usd(amount: rust_decimal::Decimal) -> Money {
        Money::new(amount, Currency::USD)
    }

    /// Standard sedan base rate
    pub fn sedan_base_rate() -> Money {
        Money::new(dec!(1000), Currency::USD)
    }

    /// Sports car base rate
    pub fn sports_base_rate() -> Money {
        Money::new(dec!(1800), Currency::USD)
    }
}
