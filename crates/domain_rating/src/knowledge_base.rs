//! Rating knowledge base
//!
//! A static table of named numeric facts read by the rating rules. Three
//! families of facts are held:
//!
//! | Key                         | Meaning                               |
//! |-----------------------------|---------------------------------------|
//! | `baseRate.<category>`       | Base premium for a vehicle category   |
//! | `ageFactor.<bracket>`       | Multiplicative age risk factor        |
//! | `accidentSurcharge.<count>` | Flat surcharge for recent accidents   |
//!
//! Keys are typed ([`FactKey`]) and a knowledge base can only be built
//! when every key is present, so a missing rate shows up when the base is
//! constructed rather than halfway through a calculation. The string
//! form of each key is still accepted by [`KnowledgeBase::get`].

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use core_kernel::{Currency, Factor, Money};

use crate::classifier::VehicleCategory;
use crate::error::RatingError;

/// Driver age bracket
///
/// Brackets are half-open and checked in order: under 20, under 25,
/// under 66, then everyone else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AgeBracket {
    /// Under 20
    Teen,
    /// 20 to 24
    YoungAdult,
    /// 25 to 65
    Adult,
    /// 66 and over
    Senior,
}

impl AgeBracket {
    pub const ALL: [AgeBracket; 4] = [
        AgeBracket::Teen,
        AgeBracket::YoungAdult,
        AgeBracket::Adult,
        AgeBracket::Senior,
    ];

    /// Selects the bracket for a driver age
    pub fn for_age(age: u32) -> Self {
        if age < 20 {
            AgeBracket::Teen
        } else if age < 25 {
            AgeBracket::YoungAdult
        } else if age < 66 {
            AgeBracket::Adult
        } else {
            AgeBracket::Senior
        }
    }

    /// Returns the key segment used in the knowledge base
    pub fn as_str(&self) -> &'static str {
        match self {
            AgeBracket::Teen => "16-19",
            AgeBracket::YoungAdult => "20-24",
            AgeBracket::Adult => "25-65",
            AgeBracket::Senior => "66+",
        }
    }

    /// Human-readable reason attached to the age adjustment
    pub fn explanation(&self) -> &'static str {
        match self {
            AgeBracket::Teen => "Drivers under 20 have higher statistical risk",
            AgeBracket::YoungAdult => "Drivers 20-24 have moderately higher risk",
            AgeBracket::Adult => "Standard rate for drivers 25-65",
            AgeBracket::Senior => "Slight increase for senior drivers",
        }
    }

    fn from_key(segment: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.as_str() == segment)
    }
}

/// Accident count bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AccidentBucket {
    None,
    One,
    TwoOrMore,
}

impl AccidentBucket {
    pub const ALL: [AccidentBucket; 3] = [
        AccidentBucket::None,
        AccidentBucket::One,
        AccidentBucket::TwoOrMore,
    ];

    /// Selects the bucket for an accident count
    pub fn for_count(accidents: u32) -> Self {
        match accidents {
            0 => AccidentBucket::None,
            1 => AccidentBucket::One,
            _ => AccidentBucket::TwoOrMore,
        }
    }

    /// Returns the key segment used in the knowledge base
    pub fn as_str(&self) -> &'static str {
        match self {
            AccidentBucket::None => "0",
            AccidentBucket::One => "1",
            AccidentBucket::TwoOrMore => "2+",
        }
    }

    /// Human-readable reason attached to the accident adjustment
    ///
    /// `None` for a clean record, which never carries an accident adjustment.
    pub fn explanation(&self) -> Option<&'static str> {
        match self {
            AccidentBucket::None => None,
            AccidentBucket::One => Some("Surcharge for 1 accident in past 5 years"),
            AccidentBucket::TwoOrMore => Some("Major surcharge for 2+ accidents in past 5 years"),
        }
    }

    fn from_key(segment: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.as_str() == segment)
    }
}

/// A typed knowledge base key
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FactKey {
    BaseRate(VehicleCategory),
    AgeFactor(AgeBracket),
    AccidentSurcharge(AccidentBucket),
}

impl FactKey {
    /// Every key a rating rule may request
    pub fn all() -> impl Iterator<Item = FactKey> {
        VehicleCategory::ALL
            .into_iter()
            .map(FactKey::BaseRate)
            .chain(AgeBracket::ALL.into_iter().map(FactKey::AgeFactor))
            .chain(AccidentBucket::ALL.into_iter().map(FactKey::AccidentSurcharge))
    }
}

impl fmt::Display for FactKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FactKey::BaseRate(c) => write!(f, "baseRate.{}", c.as_str()),
            FactKey::AgeFactor(b) => write!(f, "ageFactor.{}", b.as_str()),
            FactKey::AccidentSurcharge(b) => write!(f, "accidentSurcharge.{}", b.as_str()),
        }
    }
}

impl FromStr for FactKey {
    type Err = RatingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (family, segment) = s
            .split_once('.')
            .ok_or_else(|| RatingError::missing_key(s))?;

        let key = match family {
            "baseRate" => VehicleCategory::from_key(segment).map(FactKey::BaseRate),
            "ageFactor" => AgeBracket::from_key(segment).map(FactKey::AgeFactor),
            "accidentSurcharge" => {
                AccidentBucket::from_key(segment).map(FactKey::AccidentSurcharge)
            }
            _ => None,
        };

        key.ok_or_else(|| RatingError::missing_key(s))
    }
}

/// Static table of rating facts
///
/// Built once and never mutated. Each engine owns its own base; there is
/// no process-wide instance.
#[derive(Debug, Clone, PartialEq)]
pub struct KnowledgeBase {
    currency: Currency,
    facts: BTreeMap<FactKey, Decimal>,
}

impl KnowledgeBase {
    /// Returns the compiled-in rating table
    pub fn standard() -> Self {
        let facts = BTreeMap::from([
            (FactKey::BaseRate(VehicleCategory::Sedan), dec!(1000.0)),
            (FactKey::BaseRate(VehicleCategory::Suv), dec!(1200.0)),
            (FactKey::BaseRate(VehicleCategory::Luxury), dec!(1500.0)),
            (FactKey::BaseRate(VehicleCategory::Sports), dec!(1800.0)),
            (FactKey::AgeFactor(AgeBracket::Teen), dec!(2.0)),
            (FactKey::AgeFactor(AgeBracket::YoungAdult), dec!(1.5)),
            (FactKey::AgeFactor(AgeBracket::Adult), dec!(1.0)),
            (FactKey::AgeFactor(AgeBracket::Senior), dec!(1.3)),
            (FactKey::AccidentSurcharge(AccidentBucket::None), dec!(0.0)),
            (FactKey::AccidentSurcharge(AccidentBucket::One), dec!(300.0)),
            (FactKey::AccidentSurcharge(AccidentBucket::TwoOrMore), dec!(600.0)),
        ]);

        Self {
            currency: Currency::USD,
            facts,
        }
    }

    /// Starts an empty knowledge base for custom tables
    pub fn builder() -> KnowledgeBaseBuilder {
        KnowledgeBaseBuilder::default()
    }

    /// Currency that monetary facts are denominated in
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Looks up a fact by its namespaced string key
    ///
    /// # Errors
    ///
    /// Returns [`RatingError::Configuration`] if the key is malformed or
    /// has no entry.
    pub fn get(&self, key: &str) -> Result<Decimal, RatingError> {
        self.fact(key.parse()?)
    }

    /// Looks up a fact by typed key
    pub fn fact(&self, key: FactKey) -> Result<Decimal, RatingError> {
        self.facts
            .get(&key)
            .copied()
            .ok_or_else(|| RatingError::missing_key(key))
    }

    /// Base premium for a vehicle category
    pub fn base_rate(&self, category: VehicleCategory) -> Result<Money, RatingError> {
        let rate = self.fact(FactKey::BaseRate(category))?;
        Ok(Money::new(rate, self.currency))
    }

    /// Age risk factor for a bracket
    pub fn age_factor(&self, bracket: AgeBracket) -> Result<Factor, RatingError> {
        Ok(Factor::new(self.fact(FactKey::AgeFactor(bracket))?))
    }

    /// Flat surcharge for an accident bucket
    pub fn accident_surcharge(&self, bucket: AccidentBucket) -> Result<Money, RatingError> {
        let surcharge = self.fact(FactKey::AccidentSurcharge(bucket))?;
        Ok(Money::new(surcharge, self.currency))
    }

    /// Iterates facts in key order
    pub fn iter(&self) -> impl Iterator<Item = (FactKey, Decimal)> + '_ {
        self.facts.iter().map(|(k, v)| (*k, *v))
    }
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::standard()
    }
}

/// Builder for custom knowledge bases
///
/// `build` refuses to produce a base that is missing any [`FactKey`].
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBaseBuilder {
    currency: Currency,
    facts: BTreeMap<FactKey, Decimal>,
}

impl KnowledgeBaseBuilder {
    /// Sets the currency of monetary facts
    pub fn currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Sets a fact, replacing any earlier value for the key
    pub fn fact(mut self, key: FactKey, value: Decimal) -> Self {
        self.facts.insert(key, value);
        self
    }

    /// Copies every fact from an existing base
    pub fn extend_from(mut self, base: &KnowledgeBase) -> Self {
        self.facts.extend(base.iter());
        self
    }

    /// Removes a fact
    pub fn without(mut self, key: FactKey) -> Self {
        self.facts.remove(&key);
        self
    }

    /// Validates and builds the knowledge base
    ///
    /// # Errors
    ///
    /// Returns [`RatingError::Configuration`] naming the first missing key.
    pub fn build(self) -> Result<KnowledgeBase, RatingError> {
        if let Some(missing) = FactKey::all().find(|k| !self.facts.contains_key(k)) {
            return Err(RatingError::missing_key(missing));
        }

        Ok(KnowledgeBase {
            currency: self.currency,
            facts: self.facts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table_values() {
        let kb = KnowledgeBase::standard();

        assert_eq!(kb.get("baseRate.sedan").unwrap(), dec!(1000));
        assert_eq!(kb.get("baseRate.suv").unwrap(), dec!(1200));
        assert_eq!(kb.get("baseRate.luxury").unwrap(), dec!(1500));
        assert_eq!(kb.get("baseRate.sports").unwrap(), dec!(1800));
        assert_eq!(kb.get("ageFactor.16-19").unwrap(), dec!(2.0));
        assert_eq!(kb.get("ageFactor.20-24").unwrap(), dec!(1.5));
        assert_eq!(kb.get("ageFactor.25-65").unwrap(), dec!(1.0));
        assert_eq!(kb.get("ageFactor.66+").unwrap(), dec!(1.3));
        assert_eq!(kb.get("accidentSurcharge.0").unwrap(), dec!(0));
        assert_eq!(kb.get("accidentSurcharge.1").unwrap(), dec!(300));
        assert_eq!(kb.get("accidentSurcharge.2+").unwrap(), dec!(600));
        assert_eq!(kb.iter().count(), FactKey::all().count());
    }

    #[test]
    fn test_unknown_key_is_configuration_error() {
        let kb = KnowledgeBase::standard();

        for key in ["baseRate.truck", "ageFactor.0-15", "nonsense", "bonus.1"] {
            let err = kb.get(key).unwrap_err();
            assert!(err.is_configuration(), "{key}");
            assert!(err.to_string().contains(key));
        }
    }

    #[test]
    fn test_key_display_round_trip() {
        for key in FactKey::all() {
            assert_eq!(key.to_string().parse::<FactKey>().unwrap(), key);
        }
    }

    #[test]
    fn test_age_bracket_boundaries() {
        assert_eq!(AgeBracket::for_age(0), AgeBracket::Teen);
        assert_eq!(AgeBracket::for_age(19), AgeBracket::Teen);
        assert_eq!(AgeBracket::for_age(20), AgeBracket::YoungAdult);
        assert_eq!(AgeBracket::for_age(24), AgeBracket::YoungAdult);
        assert_eq!(AgeBracket::for_age(25), AgeBracket::Adult);
        assert_eq!(AgeBracket::for_age(65), AgeBracket::Adult);
        assert_eq!(AgeBracket::for_age(66), AgeBracket::Senior);
    }

    #[test]
    fn test_accident_buckets() {
        assert_eq!(AccidentBucket::for_count(0), AccidentBucket::None);
        assert_eq!(AccidentBucket::for_count(1), AccidentBucket::One);
        assert_eq!(AccidentBucket::for_count(2), AccidentBucket::TwoOrMore);
        assert_eq!(AccidentBucket::for_count(u32::MAX), AccidentBucket::TwoOrMore);
    }

    #[test]
    fn test_clean_record_bucket_has_no_explanation() {
        assert_eq!(AccidentBucket::None.explanation(), None);
        assert!(AccidentBucket::One.explanation().is_some());
        assert!(AccidentBucket::TwoOrMore.explanation().is_some());
    }

    #[test]
    fn test_builder_rejects_missing_key() {
        let err = KnowledgeBase::builder()
            .extend_from(&KnowledgeBase::standard())
            .without(FactKey::AgeFactor(AgeBracket::Senior))
            .build()
            .unwrap_err();

        assert_eq!(
            err,
            RatingError::Configuration(
                "knowledge base has no entry for 'ageFactor.66+'".to_string(),
            )
        );
    }

    #[test]
    fn test_builder_custom_currency() {
        let kb = KnowledgeBase::builder()
            .currency(Currency::EUR)
            .extend_from(&KnowledgeBase::standard())
            .fact(FactKey::BaseRate(VehicleCategory::Sedan), dec!(900))
            .build()
            .unwrap();

        let rate = kb.base_rate(VehicleCategory::Sedan).unwrap();
        assert_eq!(rate, Money::new(dec!(900), Currency::EUR));
    }
}
