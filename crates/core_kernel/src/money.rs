//! Money types with precise decimal arithmetic
//!
//! Premium amounts and rating factors are carried as `rust_decimal`
//! values so that a premium total is exactly the sum of its parts.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Currency codes following ISO 4217
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    USD,
    EUR,
}

impl Currency {
    /// Returns the number of decimal places for this currency
    pub fn decimal_places(&self) -> u32 {
        2
    }

    /// Returns the currency symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "€",
        }
    }

    /// Returns the ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Errors that can occur during money operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Currency mismatch: cannot operate on {0} and {1}")]
    CurrencyMismatch(String, String),
}

/// A monetary amount with associated currency
///
/// Amounts are stored with 4 decimal places so that factor-derived
/// adjustments keep their precision until presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

impl Money {
    /// Creates a new Money value
    pub fn new(amount: Decimal, currency: Currency) -> Self {
        Self {
            amount: amount.round_dp(4),
            currency,
        }
    }

    /// Creates a zero amount in the specified currency
    pub fn zero(currency: Currency) -> Self {
        Self {
            amount: dec!(0),
            currency,
        }
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is strictly positive
    pub fn is_positive(&self) -> bool {
        self.amount.is_sign_positive() && !self.amount.is_zero()
    }

    /// Checks that this amount is denominated in `currency`
    pub fn ensure_currency(&self, currency: Currency) -> Result<(), MoneyError> {
        if self.currency != currency {
            return Err(MoneyError::CurrencyMismatch(
                currency.to_string(),
                self.currency.to_string(),
            ));
        }
        Ok(())
    }

    /// Multiplies by a scalar
    pub fn multiply(&self, factor: Decimal) -> Self {
        Self::new(self.amount * factor, self.currency)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dp = self.currency.decimal_places();
        write!(
            f,
            "{}{:.dp$}",
            self.currency.symbol(),
            self.amount,
            dp = dp as usize
        )
    }
}

/// A multiplicative rating factor (e.g. 1.5 for a 50% loading)
///
/// A factor of 1.0 leaves a rate unchanged. The `loading` is the part of
/// the factor above (or below) 1.0 and is what gets added to a premium.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Factor {
    value: Decimal,
}

impl Factor {
    pub fn new(value: Decimal) -> Self {
        Self { value }
    }

    /// Returns `factor - 1.0`
    pub fn loading(&self) -> Decimal {
        self.value - Decimal::ONE
    }

    /// Returns the delta this factor adds on top of `base`
    ///
    /// `base * (factor - 1.0)`, zero for a neutral factor.
    pub fn adjustment_on(&self, base: &Money) -> Money {
        base.multiply(self.loading())
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x{}", self.value.normalize())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn factor_adjustment_plus_base_equals_scaled_base(
            base in 0i64..10_000_000i64,
            factor in 0u32..400u32
        ) {
            let money = Money::new(Decimal::new(base, 2), Currency::USD);
            let factor = Decimal::new(factor as i64, 2);

            let scaled = money.multiply(factor);
            let adjusted = money.amount() + Factor::new(factor).adjustment_on(&money).amount();
            prop_assert_eq!(adjusted, scaled.amount());
        }
    }
}
