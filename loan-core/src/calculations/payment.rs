//! Monthly payment amounts and protection surcharges.
//!
//! The base payment is a whole-dollar amount driven by a slider in the
//! front end, constrained to [`MIN_MONTHLY_PAYMENT`],
//! [`MAX_MONTHLY_PAYMENT`]. Each protection option adds a fixed monthly
//! surcharge on top of the base.
//!
//! # Example
//!
//! ```
//! use loan_core::calculations::payment::total_monthly_payment;
//! use loan_core::models::ProtectionOptions;
//!
//! let options = ProtectionOptions {
//!     extended_warranty: true,
//!     gap_coverage: true,
//! };
//! assert_eq!(total_monthly_payment(400, &options), 474);
//! ```

use crate::models::ProtectionOptions;

/// Lowest base payment the form accepts, in dollars per month.
pub const MIN_MONTHLY_PAYMENT: u32 = 200;

/// Highest base payment the form accepts, in dollars per month.
pub const MAX_MONTHLY_PAYMENT: u32 = 1000;

/// Base payment a fresh application starts with.
pub const DEFAULT_MONTHLY_PAYMENT: u32 = 400;

/// Monthly surcharge for the extended warranty add-on.
pub const EXTENDED_WARRANTY_SURCHARGE: u32 = 49;

/// Monthly surcharge for GAP coverage.
pub const GAP_COVERAGE_SURCHARGE: u32 = 25;

/// Total monthly payment: base plus the surcharge of each enabled
/// protection option.
pub fn total_monthly_payment(
    base: u32,
    options: &ProtectionOptions,
) -> u32 {
    let mut total = base;

    if options.extended_warranty {
        total += EXTENDED_WARRANTY_SURCHARGE;
    }

    if options.gap_coverage {
        total += GAP_COVERAGE_SURCHARGE;
    }

    total
}

/// Clamps a free-text payment entry into the accepted range.
///
/// Only the text entry needs clamping; the paired slider cannot leave
/// the range on its own.
pub fn clamp_monthly_payment(raw: i64) -> u32 {
    raw.clamp(i64::from(MIN_MONTHLY_PAYMENT), i64::from(MAX_MONTHLY_PAYMENT)) as u32
}

/// Interprets a raw text entry for the payment field.
///
/// Non-numeric or empty text falls back to the minimum payment before
/// clamping, matching the behavior of the numeric entry control.
pub fn payment_entry(raw: &str) -> u32 {
    let value = raw
        .trim()
        .parse::<i64>()
        .unwrap_or(i64::from(MIN_MONTHLY_PAYMENT));

    clamp_monthly_payment(value)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    // =========================================================================
    // total_monthly_payment tests
    // =========================================================================

    #[test]
    fn total_payment_without_options_is_base() {
        let result = total_monthly_payment(400, &ProtectionOptions::default());

        assert_eq!(result, 400);
    }

    #[test]
    fn total_payment_adds_extended_warranty() {
        let options = ProtectionOptions {
            extended_warranty: true,
            gap_coverage: false,
        };

        assert_eq!(total_monthly_payment(400, &options), 449);
    }

    #[test]
    fn total_payment_adds_gap_coverage() {
        let options = ProtectionOptions {
            extended_warranty: false,
            gap_coverage: true,
        };

        assert_eq!(total_monthly_payment(400, &options), 425);
    }

    #[test]
    fn total_payment_adds_both_surcharges() {
        let options = ProtectionOptions {
            extended_warranty: true,
            gap_coverage: true,
        };

        assert_eq!(total_monthly_payment(400, &options), 474);
    }

    // =========================================================================
    // clamp_monthly_payment tests
    // =========================================================================

    #[test]
    fn clamp_raises_values_below_minimum() {
        assert_eq!(clamp_monthly_payment(50), 200);
    }

    #[test]
    fn clamp_lowers_values_above_maximum() {
        assert_eq!(clamp_monthly_payment(5000), 1000);
    }

    #[test]
    fn clamp_keeps_in_range_values() {
        assert_eq!(clamp_monthly_payment(600), 600);
    }

    #[test]
    fn clamp_keeps_boundary_values() {
        assert_eq!(clamp_monthly_payment(200), 200);
        assert_eq!(clamp_monthly_payment(1000), 1000);
    }

    // =========================================================================
    // payment_entry tests
    // =========================================================================

    #[test]
    fn payment_entry_parses_and_clamps() {
        assert_eq!(payment_entry("600"), 600);
        assert_eq!(payment_entry("50"), 200);
        assert_eq!(payment_entry("5000"), 1000);
    }

    #[test]
    fn payment_entry_falls_back_to_minimum_on_garbage() {
        assert_eq!(payment_entry(""), 200);
        assert_eq!(payment_entry("lots"), 200);
    }
}
