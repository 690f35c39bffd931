//! Estimated monthly income from hourly or salaried pay.
//!
//! All estimates use a fixed 4.33 weeks-per-month factor and round to
//! two decimal places half-up. Raw-text entry points sanitize missing
//! or non-numeric input to zero rather than failing, so the estimate
//! display can always recompute.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use loan_core::calculations::income::{monthly_income_from_hourly, monthly_income_from_salary, SalaryPeriod};
//!
//! assert_eq!(monthly_income_from_hourly(dec!(20), dec!(40)), dec!(3464.00));
//! assert_eq!(
//!     monthly_income_from_salary(dec!(60000), SalaryPeriod::Yearly),
//!     dec!(5000.00),
//! );
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::round_half_up;
use crate::calculations::fields::decimal_or_zero;

/// Pay period for a salaried amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SalaryPeriod {
    Weekly,
    Biweekly,
    Monthly,
    Yearly,
}

impl SalaryPeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Weekly => "weekly",
            Self::Biweekly => "biweekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "weekly" => Some(Self::Weekly),
            "biweekly" => Some(Self::Biweekly),
            "monthly" => Some(Self::Monthly),
            "yearly" => Some(Self::Yearly),
            _ => None,
        }
    }
}

/// Average weeks in a month used for hourly and weekly conversions.
fn weeks_per_month() -> Decimal {
    Decimal::new(433, 2)
}

/// Estimated monthly income from an hourly rate and weekly hours.
pub fn monthly_income_from_hourly(
    rate: Decimal,
    hours_per_week: Decimal,
) -> Decimal {
    round_half_up(rate * hours_per_week * weeks_per_month())
}

/// Estimated monthly income from a salaried amount and its pay period.
pub fn monthly_income_from_salary(
    amount: Decimal,
    period: SalaryPeriod,
) -> Decimal {
    let monthly = match period {
        SalaryPeriod::Weekly => amount * weeks_per_month(),
        SalaryPeriod::Biweekly => amount * Decimal::new(217, 2),
        SalaryPeriod::Monthly => amount,
        SalaryPeriod::Yearly => amount / Decimal::from(12),
    };

    round_half_up(monthly)
}

/// Raw-text entry point for the hourly estimate display.
pub fn estimated_hourly_income(
    rate: &str,
    hours_per_week: &str,
) -> Decimal {
    monthly_income_from_hourly(decimal_or_zero(rate), decimal_or_zero(hours_per_week))
}

/// Raw-text entry point for the salary estimate display.
///
/// An unrecognized period yields zero, same as a blank amount.
pub fn estimated_salary_income(
    amount: &str,
    period: &str,
) -> Decimal {
    match SalaryPeriod::parse(period) {
        Some(period) => monthly_income_from_salary(decimal_or_zero(amount), period),
        None => Decimal::ZERO,
    }
}
