//! Integration tests for decimal helpers

use commonplace::foundation::ErrorKind;
use commonplace::number::{
    add_percent, none_if_zero, percent, subtract_percent, truncate, zero_if_none,
};
use rust_decimal::Decimal;

fn dec(text: &str) -> Decimal {
    text.parse().unwrap()
}

// =============================================================================
// Coalescing
// =============================================================================

#[test]
fn missing_amounts_count_as_zero() {
    let amounts = [Some(dec("12.50")), None, Some(dec("7.25"))];
    let total: Decimal = amounts.into_iter().map(zero_if_none).sum();
    assert_eq!(total, dec("19.75"));
}

#[test]
fn zero_discounts_are_dropped() {
    let discounts = [Some(dec("0.00")), Some(dec("5")), None];
    let kept: Vec<_> = discounts.into_iter().filter_map(none_if_zero).collect();
    assert_eq!(kept, vec![dec("5")]);
}

// =============================================================================
// Truncation
// =============================================================================

#[test]
fn truncate_money() {
    assert_eq!(truncate(dec("19.999"), 2).unwrap().to_string(), "19.99");
    assert_eq!(truncate(dec("-0.129"), 2).unwrap().to_string(), "-0.12");
    assert_eq!(truncate(dec("3"), 2).unwrap().to_string(), "3.00");
}

#[test]
fn truncate_limit() {
    assert!(truncate(dec("1.1"), 28).is_ok());
    let err = truncate(dec("1.1"), 29).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidArgument(_)));
}

// =============================================================================
// Percentages
// =============================================================================

#[test]
fn price_with_tax_and_discount() {
    let price = dec("80.00");
    assert_eq!(percent(price, dec("15")).unwrap(), dec("12"));
    assert_eq!(add_percent(price, dec("15")).unwrap(), dec("92"));
    assert_eq!(subtract_percent(price, dec("12.5")).unwrap(), dec("70"));
}

#[test]
fn fractional_percent_keeps_precision() {
    let fee = percent(dec("1234.56"), dec("0.35")).unwrap();
    assert_eq!(fee, dec("4.32096"));
    assert_eq!(truncate(fee, 2).unwrap(), dec("4.32"));
}

#[test]
fn overflow_names_operation() {
    let err = subtract_percent(Decimal::MAX, dec("-100")).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::OutOfRange(_)));
    assert_eq!(err.operation(), Some("subtract_percent"));
}
