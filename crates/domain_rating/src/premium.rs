//! Premium result accumulator
//!
//! A [`Premium`] starts empty for each calculation, receives a base rate
//! and a list of labelled adjustments from the rating rules, and is then
//! handed back to the caller. The total is never stored; it is derived
//! from the parts every time it is asked for.

use rust_decimal::Decimal;
use serde::Serialize;

use core_kernel::{Currency, Money};

use crate::error::RatingError;

/// A labelled, explained change to the premium total
///
/// Adjustments are append-only; once added they are never modified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Adjustment {
    /// Short label, e.g. "Age factor"
    pub label: String,
    /// Amount added to the total (negative for a discount)
    pub amount: Money,
    /// Human-readable reason for the adjustment
    pub explanation: String,
}

/// Premium being built up by the rating rules
///
/// Only serializable: a premium is built through its methods so every
/// amount stays in the premium's currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Premium {
    currency: Currency,
    base_rate: Option<Money>,
    adjustments: Vec<Adjustment>,
}

impl Premium {
    /// Creates an empty premium in the given currency
    pub fn new(currency: Currency) -> Self {
        Self {
            currency,
            base_rate: None,
            adjustments: Vec::new(),
        }
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns the base rate, or zero if none has been set yet
    pub fn base_rate(&self) -> Money {
        self.base_rate.unwrap_or_else(|| Money::zero(self.currency))
    }

    /// Returns true once a base rate has been set
    pub fn has_base_rate(&self) -> bool {
        self.base_rate.is_some()
    }

    /// Sets the base rate, replacing any earlier value
    ///
    /// # Errors
    ///
    /// Returns an error if `rate` is in a different currency.
    pub fn set_base_rate(&mut self, rate: Money) -> Result<(), RatingError> {
        rate.ensure_currency(self.currency)?;
        self.base_rate = Some(rate);
        Ok(())
    }

    /// Appends an adjustment
    ///
    /// # Arguments
    ///
    /// * `label` - Short label shown alongside the amount
    /// * `amount` - Delta applied to the total
    /// * `explanation` - Why the adjustment applies
    ///
    /// # Errors
    ///
    /// Returns an error if `amount` is in a different currency.
    pub fn add_adjustment(
        &mut self,
        label: impl Into<String>,
        amount: Money,
        explanation: impl Into<String>,
    ) -> Result<(), RatingError> {
        amount.ensure_currency(self.currency)?;
        self.adjustments.push(Adjustment {
            label: label.into(),
            amount,
            explanation: explanation.into(),
        });
        Ok(())
    }

    /// Adjustments in the order they were applied
    pub fn adjustments(&self) -> &[Adjustment] {
        &self.adjustments
    }

    /// First adjustment with the given label
    pub fn adjustment(&self, label: &str) -> Option<&Adjustment> {
        self.adjustments.iter().find(|a| a.label == label)
    }

    /// Sum of all adjustments, in list order
    pub fn adjustments_total(&self) -> Money {
        let sum = self
            .adjustments
            .iter()
            .fold(Decimal::ZERO, |acc, a| acc + a.amount.amount());
        Money::new(sum, self.currency)
    }

    /// Base rate plus every adjustment
    pub fn total(&self) -> Money {
        let total = self.base_rate().amount() + self.adjustments_total().amount();
        Money::new(total, self.currency)
    }
}
