//! Shared rounding helpers.
//!
//! Monetary figures are kept at two decimal places and areas at five, both
//! with half-up (away from zero) midpoint handling.

use rust_decimal::Decimal;

/// Rounds a monetary value to exactly two decimal places using half-up
/// rounding.
///
/// Values at exactly 0.005 are rounded up to 0.01 (away from zero).
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use smeta_core::calculations::common::round_money;
///
/// assert_eq!(round_money(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_money(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_money(dec!(123.456)), dec!(123.46));
/// ```
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds an area in square meters to five decimal places using half-up
/// rounding.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use smeta_core::calculations::common::round_area;
///
/// assert_eq!(round_area(dec!(0.123454)), dec!(0.12345));
/// assert_eq!(round_area(dec!(0.123455)), dec!(0.12346));
/// ```
pub fn round_area(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(5, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}
