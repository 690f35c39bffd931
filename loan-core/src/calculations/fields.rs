//! Sanitizers for raw text coming from the binding layer.
//!
//! The form never rejects malformed numeric entry; empty or non-numeric
//! text reads as zero so that derived displays can always recompute.
//! Negative entries also clamp to zero since every numeric field in the
//! application (rates, hours, amounts, durations) is non-negative.

use rust_decimal::Decimal;

/// Parses a currency or rate field, falling back to zero.
pub fn decimal_or_zero(raw: &str) -> Decimal {
    raw.trim()
        .parse::<Decimal>()
        .unwrap_or(Decimal::ZERO)
        .max(Decimal::ZERO)
}

/// Parses a whole-number field (years, months), falling back to zero.
pub fn int_or_zero(raw: &str) -> u32 {
    raw.trim().parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn decimal_or_zero_parses_plain_numbers() {
        assert_eq!(decimal_or_zero("1250.75"), dec!(1250.75));
    }

    #[test]
    fn decimal_or_zero_trims_whitespace() {
        assert_eq!(decimal_or_zero("  42 "), dec!(42));
    }

    #[test]
    fn decimal_or_zero_defaults_empty_to_zero() {
        assert_eq!(decimal_or_zero(""), Decimal::ZERO);
    }

    #[test]
    fn decimal_or_zero_defaults_non_numeric_to_zero() {
        assert_eq!(decimal_or_zero("abc"), Decimal::ZERO);
    }

    #[test]
    fn decimal_or_zero_clamps_negative_to_zero() {
        assert_eq!(decimal_or_zero("-15"), Decimal::ZERO);
    }

    #[test]
    fn int_or_zero_parses_and_defaults() {
        assert_eq!(int_or_zero("7"), 7);
        assert_eq!(int_or_zero("seven"), 0);
        assert_eq!(int_or_zero(""), 0);
        assert_eq!(int_or_zero("-3"), 0);
    }
}
