//! Core of the auto-loan application wizard: the step state machine,
//! the in-memory application aggregate and the pure derived-field
//! calculations. Rendering, input collection and the vehicle catalog
//! live in the front end.

pub mod calculations;
pub mod models;
pub mod session;

pub use session::{ApplicationState, StepWizard, WizardError};
