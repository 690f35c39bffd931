//! Shared helpers for payment and income calculations.

use rust_decimal::Decimal;

/// Rounds a decimal amount to two decimal places using half-up rounding.
///
/// Standard financial rounding: values at exactly 0.005 round away from
/// zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use loan_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(3464.004)), dec!(3464.00));
/// assert_eq!(round_half_up(dec!(3464.005)), dec!(3464.01));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}
