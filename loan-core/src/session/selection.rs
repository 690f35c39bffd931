//! Vehicle selection with a favorite marker.
//!
//! The applicant can shortlist up to [`MAX_SELECTIONS`] vehicles and
//! mark one of them as the favorite. The favorite is always a member of
//! the selection or unset; every mutation re-establishes that
//! invariant.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::models::VehicleId;

/// Maximum number of vehicles an application can shortlist.
pub const MAX_SELECTIONS: usize = 5;

/// Rejections surfaced by selection operations.
///
/// These replace the silent no-ops of the original form: the binding
/// layer decides whether to show a message or simply leave the display
/// unchanged.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SelectionError {
    #[error("selection limit of {MAX_SELECTIONS} vehicles reached")]
    CapacityReached,

    #[error("vehicle {0} is not in the current selection")]
    NotSelected(VehicleId),
}

/// What a successful toggle did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The vehicle was added; `became_favorite` is true when it was the
    /// first selection.
    Selected { became_favorite: bool },
    /// The vehicle was removed; `new_favorite` carries the reassigned
    /// favorite when the removed vehicle held that role.
    Deselected { new_favorite: Option<VehicleId> },
}

/// Ordered, unique shortlist of vehicles plus the favorite marker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleSelection {
    selected: Vec<VehicleId>,
    favorite: Option<VehicleId>,
}

impl VehicleSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the vehicle to the selection, or removes it when already
    /// selected.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::CapacityReached`] when adding would
    /// exceed [`MAX_SELECTIONS`].
    pub fn toggle(
        &mut self,
        id: VehicleId,
    ) -> Result<ToggleOutcome, SelectionError> {
        let outcome = match self.selected.iter().position(|&v| v == id) {
            None => {
                if self.selected.len() >= MAX_SELECTIONS {
                    return Err(SelectionError::CapacityReached);
                }

                self.selected.push(id);

                // The first shortlisted vehicle doubles as the favorite.
                let became_favorite = self.selected.len() == 1;
                if became_favorite {
                    self.favorite = Some(id);
                }

                ToggleOutcome::Selected { became_favorite }
            }
            Some(index) => {
                self.selected.remove(index);

                if self.favorite == Some(id) {
                    self.favorite = self.selected.first().copied();
                }

                ToggleOutcome::Deselected {
                    new_favorite: self.favorite,
                }
            }
        };

        debug_assert!(self.favorite_is_consistent());
        debug!(vehicle = %id, count = self.selected.len(), "selection toggled");

        Ok(outcome)
    }

    /// Marks an already-selected vehicle as the favorite.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::NotSelected`] when the vehicle is not
    /// in the current selection.
    pub fn set_favorite(
        &mut self,
        id: VehicleId,
    ) -> Result<(), SelectionError> {
        if !self.contains(id) {
            return Err(SelectionError::NotSelected(id));
        }

        self.favorite = Some(id);
        debug_assert!(self.favorite_is_consistent());

        Ok(())
    }

    pub fn contains(
        &self,
        id: VehicleId,
    ) -> bool {
        self.selected.contains(&id)
    }

    /// Shortlisted vehicles in selection order.
    pub fn selected(&self) -> &[VehicleId] {
        &self.selected
    }

    pub fn favorite(&self) -> Option<VehicleId> {
        self.favorite
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Whether the applicant may leave the vehicle step.
    pub fn can_proceed(&self) -> bool {
        !self.selected.is_empty()
    }

    fn favorite_is_consistent(&self) -> bool {
        match self.favorite {
            Some(id) => self.selected.contains(&id),
            None => true,
        }
    }
}
