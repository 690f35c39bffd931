use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Identifier for an additional-income entry.
///
/// Ids are handed out by the ledger from a monotonic counter and are
/// unique for the ledger's lifetime.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct IncomeSourceId(pub u64);

impl fmt::Display for IncomeSourceId {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single additional income source declared by the applicant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeSource {
    pub id: IncomeSourceId,
    /// Free-form description, e.g. "bonus" or "rental income".
    pub kind: String,
    /// Monthly amount, never negative.
    pub amount: Decimal,
}
