//! Stateful session core: the application aggregate, the selection
//! manager, the income ledger and the step wizard that owns them.
//!
//! Everything here is single-threaded by design: each front-end event
//! mutates the session synchronously and returns before the next event
//! is handled, so no locking is needed.

mod application;
mod ledger;
mod selection;
mod wizard;

pub use application::ApplicationState;
pub use ledger::{AdditionalIncomeLedger, LedgerError};
pub use selection::{SelectionError, ToggleOutcome, VehicleSelection, MAX_SELECTIONS};
pub use wizard::{
    Section, Step, StepFields, StepWizard, Transition, WizardError, WizardPhase, TOTAL_STEPS,
};
