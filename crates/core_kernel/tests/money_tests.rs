//! Tests for money types and display formatting

use core_kernel::{Currency, Money, MoneyError};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[test]
fn test_money_creation() {
    let money = Money::new(dec!(5000), Currency::INR);
    assert_eq!(money.amount(), dec!(5000));
    assert_eq!(money.currency(), Currency::INR);
}

#[test]
fn test_zero_money() {
    let zero = Money::zero(Currency::INR);
    assert!(zero.is_zero());
    assert!(!zero.is_negative());
}

#[test]
fn test_checked_add_same_currency() {
    let a = Money::new(dec!(1500), Currency::INR);
    let b = Money::new(dec!(2500), Currency::INR);
    let sum = a.checked_add(&b).unwrap();
    assert_eq!(sum.amount(), dec!(4000));
}

#[test]
fn test_checked_add_currency_mismatch() {
    let inr = Money::new(dec!(100), Currency::INR);
    let usd = Money::new(dec!(100), Currency::USD);
    let err = inr.checked_add(&usd).unwrap_err();
    assert!(matches!(err, MoneyError::CurrencyMismatch(_, _)));
}

#[test]
fn test_display_grouped_thousands() {
    let money = Money::new(dec!(5000), Currency::INR);
    assert_eq!(money.display_grouped(), "₹5,000");
}

#[test]
fn test_display_grouped_millions() {
    let money = Money::new(dec!(1234567), Currency::INR);
    assert_eq!(money.display_grouped(), "₹1,234,567");
}

#[test]
fn test_display_grouped_small_amount_has_no_separator() {
    let money = Money::new(dec!(999), Currency::INR);
    assert_eq!(money.display_grouped(), "₹999");
}

#[test]
fn test_display_grouped_drops_zero_fraction() {
    let money = Money::new(dec!(100.00), Currency::INR);
    assert_eq!(money.display_grouped(), "₹100");
}

#[test]
fn test_display_grouped_keeps_nonzero_fraction() {
    let money = Money::new(dec!(1234.5), Currency::INR);
    assert_eq!(money.display_grouped(), "₹1,234.5");
}

#[test]
fn test_display_grouped_other_symbol() {
    let money = Money::new(dec!(42000), Currency::USD);
    assert_eq!(money.display_grouped(), "$42,000");
}

proptest! {
    /// Stripping the symbol and separators from the grouped display must
    /// give back the rounded amount.
    #[test]
    fn prop_display_grouped_roundtrips(units in 0i64..1_000_000_000) {
        let money = Money::new(Decimal::new(units, 2), Currency::INR);
        let display = money.display_grouped();
        let stripped: String = display
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
            .collect();
        let parsed: Decimal = stripped.parse().unwrap();
        prop_assert_eq!(parsed, money.amount().round_dp(2).normalize());
    }

    /// Separators appear every three digits of the integer part.
    #[test]
    fn prop_display_grouped_group_sizes(units in 0i64..1_000_000_000_000) {
        let money = Money::new(Decimal::new(units, 0), Currency::INR);
        let display = money.display_grouped();
        let digits = display.trim_start_matches('₹');
        let int_part = digits.split('.').next().unwrap();
        for (i, group) in int_part.split(',').enumerate() {
            if i == 0 {
                prop_assert!(group.len() <= 3 && !group.is_empty());
            } else {
                prop_assert_eq!(group.len(), 3);
            }
        }
    }
}
