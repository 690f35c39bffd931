//! Additional income sources declared alongside the main employment.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::calculations::fields::decimal_or_zero;
use crate::models::{IncomeSource, IncomeSourceId};

/// Rejections surfaced by ledger operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LedgerError {
    #[error("an income source needs both a type and an amount")]
    MissingField,
}

/// Ordered list of additional income sources with a monotonic id
/// counter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdditionalIncomeLedger {
    entries: Vec<IncomeSource>,
    next_id: u64,
}

impl AdditionalIncomeLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new income source.
    ///
    /// Both fields must be non-blank; the amount text sanitizes to zero
    /// when non-numeric, like every other numeric field on the form.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::MissingField`] when either field is blank.
    pub fn add(
        &mut self,
        kind: &str,
        amount: &str,
    ) -> Result<IncomeSourceId, LedgerError> {
        let kind = kind.trim();
        if kind.is_empty() || amount.trim().is_empty() {
            return Err(LedgerError::MissingField);
        }

        let id = IncomeSourceId(self.next_id);
        self.next_id += 1;

        self.entries.push(IncomeSource {
            id,
            kind: kind.to_string(),
            amount: decimal_or_zero(amount),
        });
        debug!(%id, kind, "income source added");

        Ok(id)
    }

    /// Removes the entry with the given id. Returns false when no such
    /// entry exists.
    pub fn remove(
        &mut self,
        id: IncomeSourceId,
    ) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    /// Current entries in insertion order.
    pub fn entries(&self) -> &[IncomeSource] {
        &self.entries
    }

    /// Drives the "additional income" display toggle in the front end.
    pub fn has_entries(&self) -> bool {
        !self.entries.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn add_then_remove_round_trips_to_empty() {
        let mut ledger = AdditionalIncomeLedger::new();

        let id = ledger.add("bonus", "500").unwrap();
        assert!(ledger.has_entries());

        assert!(ledger.remove(id));
        assert!(ledger.is_empty());
        assert_eq!(ledger, {
            let mut expected = AdditionalIncomeLedger::new();
            let expected_id = expected.add("bonus", "500").unwrap();
            expected.remove(expected_id);
            expected
        });
    }

    #[test]
    fn add_records_kind_and_amount() {
        let mut ledger = AdditionalIncomeLedger::new();

        let id = ledger.add("rental income", "850.50").unwrap();

        let entry = &ledger.entries()[0];
        assert_eq!(entry.id, id);
        assert_eq!(entry.kind, "rental income");
        assert_eq!(entry.amount, dec!(850.50));
    }

    #[test]
    fn add_rejects_blank_kind() {
        let mut ledger = AdditionalIncomeLedger::new();

        assert_eq!(ledger.add("  ", "500"), Err(LedgerError::MissingField));
        assert!(ledger.is_empty());
    }

    #[test]
    fn add_rejects_blank_amount() {
        let mut ledger = AdditionalIncomeLedger::new();

        assert_eq!(ledger.add("bonus", ""), Err(LedgerError::MissingField));
    }

    #[test]
    fn non_numeric_amount_sanitizes_to_zero() {
        let mut ledger = AdditionalIncomeLedger::new();

        ledger.add("bonus", "a lot").unwrap();

        assert_eq!(ledger.entries()[0].amount, dec!(0));
    }

    #[test]
    fn ids_stay_unique_across_removals() {
        let mut ledger = AdditionalIncomeLedger::new();

        let first = ledger.add("bonus", "500").unwrap();
        ledger.remove(first);
        let second = ledger.add("bonus", "500").unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn remove_missing_id_reports_false() {
        let mut ledger = AdditionalIncomeLedger::new();
        ledger.add("bonus", "500").unwrap();

        assert!(!ledger.remove(IncomeSourceId(99)));
        assert_eq!(ledger.entries().len(), 1);
    }
}
