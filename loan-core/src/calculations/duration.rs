//! Duration buckets for employment and address history.
//!
//! The application asks for a previous employer or previous address
//! whenever the current entry covers more than zero but less than two
//! years. Hire dates can stand in for the manually entered tenure; a
//! future hire date is rejected rather than producing a negative
//! tenure.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Total months below which a previous employer/address entry is
/// required.
pub const PREVIOUS_ENTRY_THRESHOLD_MONTHS: u32 = 24;

/// Result of bucketing a years/months duration entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationBucket {
    pub total_months: u32,
    /// True when the duration is short enough that the form must show
    /// the previous-employer (or previous-address) section.
    pub needs_previous_entry: bool,
}

/// Buckets a years/months entry.
///
/// A zero duration does not request a previous entry; the applicant
/// simply has not filled the fields in yet.
pub fn duration_bucket(
    years: u32,
    months: u32,
) -> DurationBucket {
    let total_months = years * 12 + months;

    DurationBucket {
        total_months,
        needs_previous_entry: total_months > 0
            && total_months < PREVIOUS_ENTRY_THRESHOLD_MONTHS,
    }
}

/// Job tenure derived from a hire date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobTenure {
    pub years: u32,
    pub months: u32,
}

/// Derives job tenure from a hire date, counting whole calendar months.
///
/// Returns `None` when the hire date lies in the future; the caller
/// keeps whatever tenure was previously displayed.
pub fn job_tenure_from_hire_date(
    hire_date: NaiveDate,
    today: NaiveDate,
) -> Option<JobTenure> {
    if hire_date > today {
        return None;
    }

    let months = (today.year() - hire_date.year()) * 12
        + (today.month() as i32 - hire_date.month() as i32);
    let months = months.max(0) as u32;

    Some(JobTenure {
        years: months / 12,
        months: months % 12,
    })
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    use super::*;

    fn date(
        y: i32,
        m: u32,
        d: u32,
    ) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // =========================================================================
    // duration_bucket tests
    // =========================================================================

    #[test]
    fn eighteen_months_needs_previous_entry() {
        let bucket = duration_bucket(1, 6);

        assert_eq!(bucket.total_months, 18);
        assert!(bucket.needs_previous_entry);
    }

    #[test]
    fn three_years_does_not_need_previous_entry() {
        let bucket = duration_bucket(3, 0);

        assert_eq!(bucket.total_months, 36);
        assert!(!bucket.needs_previous_entry);
    }

    #[test]
    fn zero_duration_does_not_need_previous_entry() {
        let bucket = duration_bucket(0, 0);

        assert!(!bucket.needs_previous_entry);
    }

    #[test]
    fn one_month_needs_previous_entry() {
        assert!(duration_bucket(0, 1).needs_previous_entry);
    }

    #[test]
    fn exactly_two_years_does_not_need_previous_entry() {
        assert!(!duration_bucket(2, 0).needs_previous_entry);
        assert!(duration_bucket(1, 11).needs_previous_entry);
    }

    // =========================================================================
    // job_tenure_from_hire_date tests
    // =========================================================================

    #[test]
    fn tenure_splits_months_into_years_and_remainder() {
        let tenure = job_tenure_from_hire_date(date(2023, 6, 1), date(2026, 8, 23));

        assert_eq!(tenure, Some(JobTenure { years: 3, months: 2 }));
    }

    #[test]
    fn tenure_counts_whole_calendar_months() {
        let tenure = job_tenure_from_hire_date(date(2026, 7, 30), date(2026, 8, 1));

        assert_eq!(tenure, Some(JobTenure { years: 0, months: 1 }));
    }

    #[test]
    fn tenure_is_zero_within_the_hire_month() {
        let tenure = job_tenure_from_hire_date(date(2026, 8, 1), date(2026, 8, 23));

        assert_eq!(tenure, Some(JobTenure { years: 0, months: 0 }));
    }

    #[test]
    fn future_hire_date_is_rejected() {
        let tenure = job_tenure_from_hire_date(date(2027, 1, 1), date(2026, 8, 23));

        assert_eq!(tenure, None);
    }

    #[test]
    fn year_boundary_is_handled() {
        let tenure = job_tenure_from_hire_date(date(2025, 12, 15), date(2026, 1, 10));

        assert_eq!(tenure, Some(JobTenure { years: 0, months: 1 }));
    }
}
