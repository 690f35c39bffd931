use serde::{Deserialize, Serialize};

/// Optional paid add-ons, each with a fixed monthly surcharge.
///
/// Surcharge amounts live in [`crate::calculations::payment`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtectionOptions {
    pub extended_warranty: bool,
    pub gap_coverage: bool,
}
