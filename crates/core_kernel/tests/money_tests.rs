//! Unit tests for the Money and Factor value types
//!
//! Tests cover money creation, currency checks, and the
//! factor loadings used by premium rating.

use core_kernel::{Currency, Factor, Money, MoneyError, CoreError};
use rust_decimal_macros::dec;

mod creation {
    use super::*;

    #[test]
    fn test_new_rounds_to_four_decimal_places() {
        let m = Money::new(dec!(100.123456789), Currency::USD);
        assert_eq!(m.amount(), dec!(100.1235));
    }

    #[test]
    fn test_zero_creates_zero_amount() {
        let m = Money::zero(Currency::EUR);
        assert!(m.is_zero());
        assert!(!m.is_positive());
        assert_eq!(m.currency(), Currency::EUR);
    }

    #[test]
    fn test_default_currency_is_usd() {
        assert_eq!(Currency::default(), Currency::USD);
    }
}

mod currency_checks {
    use super::*;

    #[test]
    fn test_ensure_currency_accepts_same_currency() {
        let m = Money::new(dec!(1200), Currency::EUR);
        assert_eq!(m.ensure_currency(Currency::EUR), Ok(()));
    }

    #[test]
    fn test_ensure_currency_mismatch_names_expected_then_actual() {
        let eur = Money::new(dec!(10), Currency::EUR);

        assert_eq!(
            eur.ensure_currency(Currency::USD),
            Err(MoneyError::CurrencyMismatch("USD".to_string(), "EUR".to_string()))
        );
    }

    #[test]
    fn test_multiply_by_rate() {
        let m = Money::new(dec!(1000), Currency::USD);
        assert_eq!(m.multiply(dec!(1.3)).amount(), dec!(1300));
    }

    #[test]
    fn test_display_uses_symbol_and_two_places() {
        assert_eq!(Money::new(dec!(1234.5), Currency::EUR).to_string(), "€1234.50");
    }

    #[test]
    fn test_money_error_converts_into_core_error() {
        let err: CoreError = MoneyError::CurrencyMismatch("USD".into(), "EUR".into()).into();
        assert_eq!(
            err.to_string(),
            "Money error: Currency mismatch: cannot operate on USD and EUR"
        );
    }
}

mod factors {
    use super::*;

    #[test]
    fn test_neutral_factor_has_no_loading() {
        assert_eq!(Factor::new(dec!(1.0)).loading(), dec!(0));
    }

    #[test]
    fn test_loading_above_one() {
        let base = Money::new(dec!(1200), Currency::USD);
        let factor = Factor::new(dec!(1.5));

        assert_eq!(factor.loading(), dec!(0.5));
        assert_eq!(factor.adjustment_on(&base).amount(), dec!(600));
    }

    #[test]
    fn test_senior_factor() {
        let base = Money::new(dec!(1500), Currency::USD);
        assert_eq!(Factor::new(dec!(1.3)).adjustment_on(&base).amount(), dec!(450));
    }

    #[test]
    fn test_discount_factor_produces_negative_adjustment() {
        let base = Money::new(dec!(1000), Currency::USD);
        assert_eq!(Factor::new(dec!(0.9)).adjustment_on(&base).amount(), dec!(-100));
    }
}

mod serialization {
    use super::*;

    #[test]
    fn test_currency_serializes_uppercase() {
        let json = serde_json::to_string(&Currency::USD).unwrap();
        assert_eq!(json, "\"USD\"");
    }
}
