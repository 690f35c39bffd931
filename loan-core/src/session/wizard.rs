//! The step wizard state machine.
//!
//! The application flow is a landing screen, eight numbered steps and a
//! terminal submitted state. Navigation between steps is a direct jump:
//! forward "next" and backward "back" buttons both call
//! [`StepWizard::navigate_to`]. Leaving a step validates it, commits
//! that step's draft into the aggregate (for the steps that own a
//! structured section) and recomputes the progress percentage.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::models::{AddressInfo, EmploymentInfo, PersonalInfo};
use crate::session::ApplicationState;

/// Number of numbered steps in the flow.
pub const TOTAL_STEPS: u8 = 8;

/// A validated step number in `1..=TOTAL_STEPS`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Step(u8);

impl Step {
    pub const FIRST: Step = Step(1);
    pub const LAST: Step = Step(TOTAL_STEPS);

    /// Returns `None` for numbers outside `1..=TOTAL_STEPS`.
    pub fn new(number: u8) -> Option<Self> {
        (1..=TOTAL_STEPS).contains(&number).then_some(Self(number))
    }

    pub fn number(self) -> u8 {
        self.0
    }

    pub fn next(self) -> Option<Step> {
        Self::new(self.0 + 1)
    }

    pub fn previous(self) -> Option<Step> {
        self.0.checked_sub(1).and_then(Self::new)
    }

    /// The structured section this step persists on exit, if any.
    pub fn owned_section(self) -> Option<Section> {
        match self.0 {
            4 => Some(Section::Personal),
            5 => Some(Section::Address),
            6 => Some(Section::Employment),
            _ => None,
        }
    }
}

impl fmt::Display for Step {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Structured sections of the aggregate, each owned by one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Personal,
    Address,
    Employment,
}

/// Where the session currently is in the flow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WizardPhase {
    /// The landing screen shown before the numbered steps.
    #[default]
    Landing,
    InProgress(Step),
    /// Terminal state; no further transitions are possible.
    Submitted,
}

/// A draft of one step's editable fields, recorded by the binding
/// layer as the applicant types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepFields {
    Personal(PersonalInfo),
    Address(AddressInfo),
    Employment(EmploymentInfo),
}

/// Reasons a wizard operation is refused.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum WizardError {
    /// The step being left did not pass validation; the transition was
    /// aborted with no state change.
    #[error("step {step} did not pass validation")]
    Validation { step: Step },

    #[error("the application has not been started")]
    NotStarted,

    #[error("the application was already submitted")]
    AlreadySubmitted,
}

/// A completed step transition.
///
/// On every successful transition the binding layer is expected to
/// scroll its viewport back to the top before rendering the new step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub from: Step,
    pub to: Step,
    /// Progress through the flow after the transition, in percent.
    pub progress: f64,
}

/// Drafts of the structured sections, committed on step exit.
#[derive(Debug, Clone, Default)]
struct StepDrafts {
    personal: PersonalInfo,
    address: AddressInfo,
    employment: EmploymentInfo,
}

/// Owns the application aggregate and the current position in the flow.
///
/// One wizard per session; there is no ambient global state, so tests
/// (and any future concurrent sessions) each construct their own
/// instance.
#[derive(Debug, Default)]
pub struct StepWizard {
    phase: WizardPhase,
    state: ApplicationState,
    drafts: StepDrafts,
}

impl StepWizard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Leaves the landing screen and enters step 1.
    ///
    /// Starting is idempotent while the flow is in progress: the
    /// current step is returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`WizardError::AlreadySubmitted`] after submission.
    pub fn start(&mut self) -> Result<Step, WizardError> {
        match self.phase {
            WizardPhase::Landing => {
                self.phase = WizardPhase::InProgress(Step::FIRST);
                info!("application started");
                Ok(Step::FIRST)
            }
            WizardPhase::InProgress(step) => Ok(step),
            WizardPhase::Submitted => Err(WizardError::AlreadySubmitted),
        }
    }

    pub fn phase(&self) -> WizardPhase {
        self.phase
    }

    /// The active step, or `None` on the landing screen and after
    /// submission.
    pub fn current_step(&self) -> Option<Step> {
        match self.phase {
            WizardPhase::InProgress(step) => Some(step),
            _ => None,
        }
    }

    /// Progress through the flow: 0 on the landing screen, step/8 as a
    /// percentage while in progress, 100 once submitted.
    pub fn progress_percent(&self) -> f64 {
        match self.phase {
            WizardPhase::Landing => 0.0,
            WizardPhase::InProgress(step) => {
                f64::from(step.number()) / f64::from(TOTAL_STEPS) * 100.0
            }
            WizardPhase::Submitted => 100.0,
        }
    }

    pub fn state(&self) -> &ApplicationState {
        &self.state
    }

    /// Mutable access for the immediate-update fields: payment terms,
    /// vehicle selection, protection options, terms agreement and the
    /// additional-income ledger.
    pub fn state_mut(&mut self) -> &mut ApplicationState {
        &mut self.state
    }

    /// Records the current contents of a step's editable fields.
    ///
    /// Drafts are committed into the aggregate only when the wizard
    /// leaves the owning step, so re-entering a step never clobbers
    /// previously committed data.
    pub fn record_step_fields(
        &mut self,
        fields: StepFields,
    ) {
        match fields {
            StepFields::Personal(personal) => self.drafts.personal = personal,
            StepFields::Address(address) => self.drafts.address = address,
            StepFields::Employment(employment) => self.drafts.employment = employment,
        }
    }

    /// Jumps to `target`, committing the current step on the way out.
    ///
    /// # Errors
    ///
    /// - [`WizardError::NotStarted`] / [`WizardError::AlreadySubmitted`]
    ///   when the flow is not in progress.
    /// - [`WizardError::Validation`] when the current step refuses to
    ///   be left; the wizard is unchanged in that case.
    pub fn navigate_to(
        &mut self,
        target: Step,
    ) -> Result<Transition, WizardError> {
        let current = self.require_in_progress()?;

        self.validate_step(current)?;
        self.commit_section(current);
        self.phase = WizardPhase::InProgress(target);

        let transition = Transition {
            from: current,
            to: target,
            progress: self.progress_percent(),
        };
        debug!(
            from = current.number(),
            to = target.number(),
            progress = transition.progress,
            "step transition"
        );

        Ok(transition)
    }

    /// Submits the application: commits the current step's draft,
    /// forces progress to 100 % and enters the terminal state.
    ///
    /// Submission is a local transition only; nothing leaves the
    /// process.
    ///
    /// # Errors
    ///
    /// Returns [`WizardError::NotStarted`] or
    /// [`WizardError::AlreadySubmitted`] when the flow is not in
    /// progress.
    pub fn submit(&mut self) -> Result<(), WizardError> {
        let current = self.require_in_progress()?;

        self.commit_section(current);
        self.phase = WizardPhase::Submitted;
        info!(from = current.number(), "application submitted");

        Ok(())
    }

    /// Whether the "next" control should be enabled on the current
    /// step: step 1 requires a non-empty selection, the last step
    /// requires the terms agreement.
    pub fn can_advance(&self) -> bool {
        match self.phase {
            WizardPhase::InProgress(step) if step == Step::FIRST => {
                self.state.vehicles.can_proceed()
            }
            WizardPhase::InProgress(step) if step == Step::LAST => self.state.terms_agreed,
            WizardPhase::InProgress(_) => true,
            _ => false,
        }
    }

    /// The submit control is gated on the terms-agreement checkbox.
    pub fn can_submit(&self) -> bool {
        matches!(self.phase, WizardPhase::InProgress(_)) && self.state.terms_agreed
    }

    fn require_in_progress(&self) -> Result<Step, WizardError> {
        match self.phase {
            WizardPhase::InProgress(step) => Ok(step),
            WizardPhase::Landing => Err(WizardError::NotStarted),
            WizardPhase::Submitted => Err(WizardError::AlreadySubmitted),
        }
    }

    /// Per-step validation hook, checked before a step may be left.
    ///
    /// No step currently defines rules, so this always passes; the
    /// result type keeps a future failure visible to callers instead of
    /// silently blocking the transition.
    fn validate_step(
        &self,
        step: Step,
    ) -> Result<(), WizardError> {
        let _ = step;
        Ok(())
    }

    /// Write-on-exit: copies the owning section's draft into the
    /// aggregate, overwriting any previous value.
    fn commit_section(
        &mut self,
        step: Step,
    ) {
        match step.owned_section() {
            Some(Section::Personal) => {
                self.state.personal = Some(self.drafts.personal.clone());
            }
            Some(Section::Address) => {
                self.state.address = Some(self.drafts.address.clone());
            }
            Some(Section::Employment) => {
                self.state.employment = Some(self.drafts.employment.clone());
            }
            None => {}
        }
    }
}
