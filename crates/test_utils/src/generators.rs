//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating driver profiles that
//! cover every vehicle category, age bracket, and accident bucket.

use domain_rating::DriverProfile;
use proptest::prelude::*;

/// Makes that fall in the luxury list, in mixed case
pub const LUXURY_MAKES: &[&str] = &["BMW", "Mercedes", "lexus", "AUDI"];

/// Makes that fall in the sports list, in mixed case
pub const SPORTS_MAKES: &[&str] = &["Ferrari", "PORSCHE", "mustang", "Corvette"];

/// Models that fall in the SUV list, in mixed case
pub const SUV_MODELS: &[&str] = &["SUV", "Explorer", "tahoe", "Highlander"];

/// Makes and models on none of the lists
pub const UNLISTED_MAKES: &[&str] = &["Toyota", "Honda", "Ford", "Kia", "Volvo"];
pub const UNLISTED_MODELS: &[&str] = &["Camry", "Civic", "Focus", "Rio", "488", "X5"];

/// Strategy for driver ages, concentrated around bracket boundaries
pub fn age_strategy() -> impl Strategy<Value = u32> {
    prop_oneof![
        0u32..120u32,
        prop::sample::select(vec![16u32, 19, 20, 24, 25, 65, 66, 99]),
    ]
}

/// Strategy for accident counts in the last five years
pub fn accident_strategy() -> impl Strategy<Value = u32> {
    prop_oneof![
        3 => 0u32..3u32,
        1 => 3u32..50u32,
    ]
}

/// Strategy for vehicle makes, listed and unlisted
pub fn make_strategy() -> impl Strategy<Value = String> {
    let makes: Vec<&'static str> = LUXURY_MAKES
        .iter()
        .chain(SPORTS_MAKES)
        .chain(UNLISTED_MAKES)
        .copied()
        .collect();

    prop_oneof![
        3 => prop::sample::select(makes).prop_map(str::to_string),
        1 => "[A-Za-z]{1,12}",
    ]
}

/// Strategy for vehicle models, listed and unlisted
pub fn model_strategy() -> impl Strategy<Value = String> {
    let models: Vec<&'static str> = SUV_MODELS.iter().chain(UNLISTED_MODELS).copied().collect();

    prop_oneof![
        3 => prop::sample::select(models).prop_map(str::to_string),
        1 => "[A-Za-z0-9]{1,12}",
    ]
}

/// Strategy for complete driver profiles
pub fn profile_strategy() -> impl Strategy<Value = DriverProfile> {
    (age_strategy(), make_strategy(), model_strategy(), accident_strategy())
        .prop_map(|(age, make, model, accidents)| DriverProfile::new(age, make, model, accidents))
}

/// Randomizes the case of every character in `s`
pub fn mixed_case_strategy(s: &'static str) -> impl Strategy<Value = String> {
    prop::collection::vec(any::<bool>(), s.len()).prop_map(move |upper| {
        s.chars()
            .zip(upper)
            .map(|(c, up)| if up { c.to_ascii_uppercase() } else { c.to_ascii_lowercase() })
            .collect()
    })
}
