//! Planner service shared by the live preview and the save path
//!
//! Both paths go through [`evaluate`], so a saved selection always reports
//! the same percent, amounts and projection that the preview showed for the
//! same inputs.

use crate::account::AccountSnapshot;
use crate::assumptions::ProjectionAssumptions;
use crate::contribution::{normalize_contribution, ContributionSelection, NormalizedContribution};
use crate::error::Result;
use crate::projection::{project_retirement_balance, MissingInput, ProjectionResult};
use crate::store::ContributionStore;
use log::info;
use serde::{Deserialize, Serialize};

/// Everything the planner shows for one selection against one account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContributionView {
    pub selection: ContributionSelection,
    pub snapshot: AccountSnapshot,
    pub assumptions: ProjectionAssumptions,
    pub normalized: NormalizedContribution,
    /// `None` when the projection is indeterminate
    pub projection: Option<ProjectionResult>,
    /// Which input was missing when `projection` is `None`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missing_input: Option<MissingInput>,
}

/// Normalize a selection and project the resulting yearly contribution
pub fn evaluate(
    selection: &ContributionSelection,
    snapshot: &AccountSnapshot,
    assumptions: &ProjectionAssumptions,
) -> ContributionView {
    let normalized = normalize_contribution(selection, snapshot);
    let (projection, missing_input) =
        match project_retirement_balance(snapshot, assumptions, normalized.yearly_amount) {
            Ok(result) => (Some(result), None),
            Err(indeterminate) => (None, Some(indeterminate.missing)),
        };

    ContributionView {
        selection: *selection,
        snapshot: *snapshot,
        assumptions: *assumptions,
        normalized,
        projection,
        missing_input,
    }
}

/// Reads and writes the stored selection, answering with derived figures
pub struct PlannerService<S: ContributionStore> {
    store: S,
    assumptions: ProjectionAssumptions,
}

impl<S: ContributionStore> PlannerService<S> {
    pub fn new(store: S, assumptions: ProjectionAssumptions) -> Self {
        Self { store, assumptions }
    }

    pub fn assumptions(&self) -> &ProjectionAssumptions {
        &self.assumptions
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// The saved selection and what it works out to
    pub fn current(&self) -> Result<ContributionView> {
        let selection = self.store.selection()?;
        let snapshot = self.store.snapshot()?;
        Ok(evaluate(&selection, &snapshot, &self.assumptions))
    }

    /// What a selection would work out to, without saving it
    pub fn preview(&self, selection: ContributionSelection) -> Result<ContributionView> {
        selection.validate()?;
        let snapshot = self.store.snapshot()?;
        Ok(evaluate(&selection, &snapshot, &self.assumptions))
    }

    /// Validate and save a selection, returning the stored view
    pub fn save(&mut self, selection: ContributionSelection) -> Result<ContributionView> {
        selection.validate()?;
        self.store.save_selection(selection)?;
        info!("saved contribution: {} {}", selection.kind, selection.value);
        self.current()
    }

    /// Validate and replace the account facts
    pub fn update_snapshot(&mut self, snapshot: AccountSnapshot) -> Result<ContributionView> {
        snapshot.validate()?;
        self.store.update_snapshot(snapshot)?;
        info!("account snapshot updated");
        self.current()
    }
}
