//! Premium rules engine
//!
//! The [`RatingEngine`] owns a knowledge base and the fixed rule
//! sequence, and applies them to a driver profile to produce a
//! [`Premium`].
//!
//! # Example
//!
//! ```rust
//! use domain_rating::{DriverProfile, RatingEngine};
//!
//! let engine = RatingEngine::new();
//! let profile = DriverProfile::new(17, "Ferrari", "488", 2);
//!
//! let premium = engine.calculate_premium(&profile)?;
//! assert_eq!(premium.total().to_string(), "$4200.00");
//! # Ok::<(), domain_rating::RatingError>(())
//! ```

use tracing::{debug, debug_span, trace};

use crate::classifier::{classify_with_basis, Classification};
use crate::error::RatingError;
use crate::knowledge_base::KnowledgeBase;
use crate::premium::Premium;
use crate::profile::DriverProfile;
use crate::rules::RatingRule;

/// Rules engine for rating driver profiles
///
/// The knowledge base and rule sequence are fixed at construction and
/// only read afterwards, so one engine can rate profiles from several
/// threads at once. Each calculation builds its own [`Premium`].
#[derive(Debug, Clone)]
pub struct RatingEngine {
    knowledge_base: KnowledgeBase,
    rules: Vec<RatingRule>,
}

impl RatingEngine {
    /// Creates an engine over the standard compiled-in rates
    pub fn new() -> Self {
        Self::with_knowledge_base(KnowledgeBase::standard())
    }

    /// Creates an engine over a custom knowledge base
    pub fn with_knowledge_base(knowledge_base: KnowledgeBase) -> Self {
        Self {
            knowledge_base,
            rules: RatingRule::SEQUENCE.to_vec(),
        }
    }

    pub fn knowledge_base(&self) -> &KnowledgeBase {
        &self.knowledge_base
    }

    /// Rules in application order
    pub fn rules(&self) -> &[RatingRule] {
        &self.rules
    }

    /// Classifies the profile's vehicle
    pub fn classify(&self, profile: &DriverProfile) -> Classification {
        classify_with_basis(&profile.vehicle_make, &profile.vehicle_model)
    }

    /// Calculates the premium for a driver profile
    ///
    /// Every rule whose check passes is applied once, in sequence order.
    ///
    /// # Arguments
    ///
    /// * `profile` - The driver and vehicle to rate
    ///
    /// # Returns
    ///
    /// The premium with its base rate and all adjustments
    ///
    /// # Errors
    ///
    /// Any rule failure aborts the calculation; no partial premium is
    /// returned.
    pub fn calculate_premium(&self, profile: &DriverProfile) -> Result<Premium, RatingError> {
        let span = debug_span!(
            "calculate_premium",
            age = profile.age,
            make = %profile.vehicle_make,
            model = %profile.vehicle_model,
            accidents = profile.accidents_in_last_five_years,
        );
        let _guard = span.enter();

        let mut premium = Premium::new(self.knowledge_base.currency());

        for rule in &self.rules {
            if !rule.applies(profile) {
                trace!(rule = rule.name(), "rule skipped");
                continue;
            }

            rule.apply(profile, &mut premium, &self.knowledge_base)?;
            trace!(rule = rule.name(), total = %premium.total(), "rule applied");
        }

        debug!(
            base_rate = %premium.base_rate(),
            adjustments = premium.adjustments().len(),
            total = %premium.total(),
            "premium calculated"
        );

        Ok(premium)
    }
}

impl Default for RatingEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::VehicleCategory;
    use crate::knowledge_base::{AgeBracket, FactKey};
    use crate::rules::{ACCIDENT_HISTORY_LABEL, AGE_FACTOR_LABEL};
    use rust_decimal_macros::dec;

    #[test]
    fn test_standard_sedan() {
        let engine = RatingEngine::new();
        let premium = engine
            .calculate_premium(&DriverProfile::new(30, "Toyota", "Camry", 0))
            .unwrap();

        assert_eq!(premium.base_rate().amount(), dec!(1000));
        assert_eq!(premium.adjustment(AGE_FACTOR_LABEL).unwrap().amount.amount(), dec!(0));
        assert!(premium.adjustment(ACCIDENT_HISTORY_LABEL).is_none());
        assert_eq!(premium.total().amount(), dec!(1000));
    }

    #[test]
    fn test_young_sports_driver_with_accidents() {
        let engine = RatingEngine::new();
        let premium = engine
            .calculate_premium(&DriverProfile::new(17, "Ferrari", "488", 2))
            .unwrap();

        assert_eq!(premium.base_rate().amount(), dec!(1800));
        assert_eq!(premium.adjustments().len(), 2);
        assert_eq!(premium.adjustments()[0].amount.amount(), dec!(1800));
        assert_eq!(premium.adjustments()[1].amount.amount(), dec!(600));
        assert_eq!(premium.total().amount(), dec!(4200));
    }

    #[test]
    fn test_engine_exposes_rule_sequence() {
        assert_eq!(RatingEngine::new().rules(), RatingRule::SEQUENCE.as_slice());
    }

    #[test]
    fn test_custom_knowledge_base() {
        let kb = KnowledgeBase::builder()
            .extend_from(&KnowledgeBase::standard())
            .fact(FactKey::BaseRate(VehicleCategory::Sedan), dec!(800))
            .fact(FactKey::AgeFactor(AgeBracket::Adult), dec!(0.9))
            .build()
            .unwrap();
        let engine = RatingEngine::with_knowledge_base(kb);

        let premium = engine
            .calculate_premium(&DriverProfile::new(40, "Honda", "Accord", 0))
            .unwrap();

        assert_eq!(premium.total().amount(), dec!(720));
    }

    #[test]
    fn test_engine_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RatingEngine>();
    }
}
