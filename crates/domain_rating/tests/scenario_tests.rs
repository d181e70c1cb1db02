//! End-to-End Rating Scenarios
//!
//! These tests rate complete driver profiles with the standard
//! knowledge base and check the full premium breakdown.

use domain_rating::{
    DriverProfile, RatingEngine, VehicleCategory, ACCIDENT_HISTORY_LABEL, AGE_FACTOR_LABEL,
};
use rust_decimal_macros::dec;
use test_utils::{
    assert_has_adjustment, assert_no_adjustment, assert_total, init_test_tracing, ProfileFixtures,
};

mod standard_rates {
    use super::*;

    /// 30 year old Camry driver with a clean record pays exactly the sedan base rate
    #[test]
    fn test_standard_sedan_driver() {
        init_test_tracing();
        let engine = RatingEngine::new();
        let profile = ProfileFixtures::standard_sedan_driver();

        assert_eq!(engine.classify(&profile).category, VehicleCategory::Sedan);

        let premium = engine.calculate_premium(&profile).expect("Failed to rate profile");

        assert_eq!(premium.base_rate().amount(), dec!(1000));
        assert_has_adjustment(&premium, AGE_FACTOR_LABEL, dec!(0));
        assert_no_adjustment(&premium, ACCIDENT_HISTORY_LABEL);
        assert_total(&premium, dec!(1000));
    }

    /// 17 year old Ferrari driver with two accidents
    #[test]
    fn test_young_sports_driver_with_accidents() {
        init_test_tracing();
        let engine = RatingEngine::new();
        let profile = ProfileFixtures::young_sports_driver();

        assert_eq!(engine.classify(&profile).category, VehicleCategory::Sports);

        let premium = engine.calculate_premium(&profile).expect("Failed to rate profile");

        assert_eq!(premium.base_rate().amount(), dec!(1800));
        assert_has_adjustment(&premium, AGE_FACTOR_LABEL, dec!(1800));
        assert_has_adjustment(&premium, ACCIDENT_HISTORY_LABEL, dec!(600));
        assert_total(&premium, dec!(4200));
        assert_eq!(premium.total().to_string(), "$4200.00");
    }
}

mod repeat_calculations {
    use super::*;

    /// Rating the same profile twice yields identical, independent premiums
    #[test]
    fn test_calculations_do_not_share_state() {
        let engine = RatingEngine::new();
        let profile = DriverProfile::new(19, "Mustang", "GT", 1);

        let first = engine.calculate_premium(&profile).unwrap();
        let second = engine.calculate_premium(&profile).unwrap();

        assert_eq!(first, second);
        assert_eq!(second.adjustments().len(), 2);
        assert_total(&second, dec!(3900));
    }
}
