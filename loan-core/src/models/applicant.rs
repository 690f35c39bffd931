//! Applicant records collected by the form steps.
//!
//! Each of these structs is owned by exactly one wizard step and is
//! written into the application aggregate when the wizard leaves that
//! step. They are plain data; sanitizing raw input is the job of
//! [`crate::calculations::fields`].

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Contact details collected on the personal-information step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

/// How the applicant occupies their current residence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HousingStatus {
    Own,
    Rent,
    Other,
}

impl HousingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Own => "own",
            Self::Rent => "rent",
            Self::Other => "other",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "own" => Some(Self::Own),
            "rent" => Some(Self::Rent),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

/// Residence details collected on the address step.
///
/// `years_at_address`/`months_at_address` feed the address-duration
/// bucket; when the applicant has lived here for less than two years the
/// front end asks for a previous address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressInfo {
    pub street_address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub housing_status: Option<HousingStatus>,
    pub years_at_address: u32,
    pub months_at_address: u32,
}

/// Employment category selected on the employment step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmploymentStatus {
    #[default]
    Employed,
    SelfEmployed,
    Retired,
    OtherIncome,
}

impl EmploymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Employed => "employed",
            Self::SelfEmployed => "self-employed",
            Self::Retired => "retired",
            Self::OtherIncome => "other-income",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "employed" => Some(Self::Employed),
            "self-employed" => Some(Self::SelfEmployed),
            "retired" => Some(Self::Retired),
            "other-income" => Some(Self::OtherIncome),
            _ => None,
        }
    }

    /// Whether the employer-detail section (employer, title, tenure)
    /// applies to this status. Retirees and other-income applicants
    /// skip it.
    pub fn has_employer_details(&self) -> bool {
        !matches!(self, Self::Retired | Self::OtherIncome)
    }
}

/// Employment details collected on the employment step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmploymentInfo {
    pub status: EmploymentStatus,
    pub employer: String,
    pub job_title: String,
    pub monthly_income: Decimal,
    pub years_at_job: u32,
    pub months_at_job: u32,
    /// Optional hire date; when present the front end derives the
    /// tenure fields from it instead of asking for them directly.
    pub hire_date: Option<NaiveDate>,
}
