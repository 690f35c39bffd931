//! Pure derived-field calculations.
//!
//! Everything here is stateless: the binding layer feeds in the current
//! field values and re-renders the result on every relevant change.

pub mod common;
pub mod duration;
pub mod fields;
pub mod income;
pub mod payment;

pub use duration::{duration_bucket, job_tenure_from_hire_date, DurationBucket, JobTenure};
pub use income::{
    estimated_hourly_income, estimated_salary_income, monthly_income_from_hourly,
    monthly_income_from_salary, SalaryPeriod,
};
pub use payment::{clamp_monthly_payment, payment_entry, total_monthly_payment};
