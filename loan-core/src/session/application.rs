//! The in-memory application aggregate.
//!
//! One instance exists per session and accumulates the applicant's
//! input across steps. Nothing here is persisted; the aggregate lives
//! exactly as long as the session that owns it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::payment::{total_monthly_payment, DEFAULT_MONTHLY_PAYMENT};
use crate::models::{AddressInfo, EmploymentInfo, PersonalInfo, ProtectionOptions};
use crate::session::{AdditionalIncomeLedger, VehicleSelection};

/// Everything the applicant has entered so far.
///
/// Payment, selection, protection and terms fields update immediately
/// on change; the structured sections (`personal`, `address`,
/// `employment`) are written only when the wizard leaves the step that
/// owns them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationState {
    pub vehicles: VehicleSelection,
    pub monthly_payment: u32,
    pub down_payment: Decimal,
    pub protection: ProtectionOptions,
    pub personal: Option<PersonalInfo>,
    pub address: Option<AddressInfo>,
    pub employment: Option<EmploymentInfo>,
    pub additional_income: AdditionalIncomeLedger,
    pub terms_agreed: bool,
}

impl Default for ApplicationState {
    fn default() -> Self {
        Self {
            vehicles: VehicleSelection::new(),
            monthly_payment: DEFAULT_MONTHLY_PAYMENT,
            down_payment: Decimal::ZERO,
            protection: ProtectionOptions::default(),
            personal: None,
            address: None,
            employment: None,
            additional_income: AdditionalIncomeLedger::new(),
            terms_agreed: false,
        }
    }
}

impl ApplicationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Base payment plus enabled protection surcharges.
    pub fn total_monthly_payment(&self) -> u32 {
        total_monthly_payment(self.monthly_payment, &self.protection)
    }
}
