//! Rating rules
//!
//! Each rule is a named pair of an applicability check and an effect on
//! the premium being built. Rules carry no state of their own; the facts
//! they need are read from the [`KnowledgeBase`] passed to `apply`.
//!
//! # Ordering
//!
//! Rules run in the order of [`RatingRule::SEQUENCE`]:
//!
//! 1. [`RatingRule::BaseRate`] sets the base rate
//! 2. [`RatingRule::AgeFactor`] scales off that base rate
//! 3. [`RatingRule::AccidentHistory`] adds a flat surcharge
//!
//! The age rule reads the base rate, so it refuses to run on a premium
//! that has none (see [`RatingRule::requires`]).

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::trace;

use crate::classifier::classify;
use crate::error::RatingError;
use crate::knowledge_base::{AccidentBucket, AgeBracket, KnowledgeBase};
use crate::premium::Premium;
use crate::profile::DriverProfile;

/// Label of the adjustment added by the age rule
pub const AGE_FACTOR_LABEL: &str = "Age factor";

/// Label of the adjustment added by the accident rule
pub const ACCIDENT_HISTORY_LABEL: &str = "Accident history";

/// A premium rating rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RatingRule {
    /// Sets the base rate from the vehicle category
    BaseRate,
    /// Adds `base_rate * (factor - 1)` for the driver's age bracket
    AgeFactor,
    /// Adds a surcharge for accidents in the last five years
    AccidentHistory,
}

impl RatingRule {
    /// The fixed order rules are applied in
    pub const SEQUENCE: [RatingRule; 3] = [
        RatingRule::BaseRate,
        RatingRule::AgeFactor,
        RatingRule::AccidentHistory,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            RatingRule::BaseRate => "base rate",
            RatingRule::AgeFactor => "age factor",
            RatingRule::AccidentHistory => "accident history",
        }
    }

    /// Rule whose effect must already be on the premium
    pub fn requires(&self) -> Option<RatingRule> {
        match self {
            RatingRule::AgeFactor => Some(RatingRule::BaseRate),
            RatingRule::BaseRate | RatingRule::AccidentHistory => None,
        }
    }

    /// Returns true if the rule applies to this profile
    pub fn applies(&self, profile: &DriverProfile) -> bool {
        match self {
            RatingRule::BaseRate | RatingRule::AgeFactor => true,
            RatingRule::AccidentHistory => !profile.has_clean_record(),
        }
    }

    /// Applies the rule's effect to the premium
    ///
    /// The caller is expected to have checked [`RatingRule::applies`].
    ///
    /// # Errors
    ///
    /// * [`RatingError::RuleDependency`] if a required rule has not run
    /// * [`RatingError::Configuration`] if a needed fact is missing
    pub fn apply(
        &self,
        profile: &DriverProfile,
        premium: &mut Premium,
        knowledge_base: &KnowledgeBase,
    ) -> Result<(), RatingError> {
        self.check_requirements(premium)?;

        match self {
            RatingRule::BaseRate => {
                let category = classify(&profile.vehicle_make, &profile.vehicle_model);
                let rate = knowledge_base.base_rate(category)?;
                premium.set_base_rate(rate)
            }
            RatingRule::AgeFactor => {
                let bracket = AgeBracket::for_age(profile.age);
                let factor = knowledge_base.age_factor(bracket)?;
                trace!(bracket = bracket.as_str(), factor = %factor, "age factor selected");
                let adjustment = factor.adjustment_on(&premium.base_rate());
                premium.add_adjustment(AGE_FACTOR_LABEL, adjustment, bracket.explanation())
            }
            RatingRule::AccidentHistory => {
                let bucket = AccidentBucket::for_count(profile.accidents_in_last_five_years);
                // Clean records never get an accident adjustment, not even a zero one
                let Some(explanation) = bucket.explanation() else {
                    return Ok(());
                };
                let surcharge = knowledge_base.accident_surcharge(bucket)?;
                premium.add_adjustment(ACCIDENT_HISTORY_LABEL, surcharge, explanation)
            }
        }
    }

    fn check_requirements(&self, premium: &Premium) -> Result<(), RatingError> {
        match self.requires() {
            Some(RatingRule::BaseRate) if !premium.has_base_rate() => {
                Err(RatingError::RuleDependency {
                    rule: self.name(),
                    requires: RatingRule::BaseRate.name(),
                })
            }
            _ => Ok(()),
        }
    }
}

impl fmt::Display for RatingRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
