//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for premiums that give more
//! meaningful error messages than standard assertions.

use domain_rating::Premium;
use rust_decimal::Decimal;

/// Asserts that a premium total equals its base rate plus adjustments
///
/// # Panics
///
/// Panics if the total differs from the sum of its parts
pub fn assert_total_is_sum_of_parts(premium: &Premium) {
    let expected = premium
        .adjustments()
        .iter()
        .fold(premium.base_rate().amount(), |acc, a| acc + a.amount.amount());

    assert_eq!(
        premium.total().amount(),
        expected,
        "Total {} is not base rate {} plus adjustments {:?}",
        premium.total(),
        premium.base_rate(),
        premium.adjustments()
    );
}

/// Asserts that a premium carries an adjustment with the given amount
///
/// # Arguments
///
/// * `premium` - The premium to inspect
/// * `label` - Adjustment label to look for
/// * `amount` - Expected adjustment amount
pub fn assert_has_adjustment(premium: &Premium, label: &str, amount: Decimal) {
    let adjustment = premium.adjustment(label).unwrap_or_else(|| {
        panic!(
            "Expected adjustment '{}', found {:?}",
            label,
            premium.adjustments().iter().map(|a| &a.label).collect::<Vec<_>>()
        )
    });

    assert_eq!(
        adjustment.amount.amount(),
        amount,
        "Adjustment '{}' has amount {}, expected {}",
        label,
        adjustment.amount.amount(),
        amount
    );
}

/// Asserts that a premium has no adjustment with the given label at all
pub fn assert_no_adjustment(premium: &Premium, label: &str) {
    assert!(
        premium.adjustment(label).is_none(),
        "Expected no '{}' adjustment, found {:?}",
        label,
        premium.adjustment(label)
    );
}

/// Asserts that a premium total equals an expected amount
pub fn assert_total(premium: &Premium, expected: Decimal) {
    assert_eq!(
        premium.total().amount(),
        expected,
        "Premium total {} does not match expected {}",
        premium.total().amount(),
        expected
    );
}
