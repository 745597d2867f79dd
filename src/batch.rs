//! Batch projections across many accounts
//!
//! Assumptions are fixed for the run; every account goes through the same
//! [`evaluate`] path used by the interactive service.

use crate::account::AccountRecord;
use crate::assumptions::ProjectionAssumptions;
use crate::projection::MissingInput;
use crate::service::{evaluate, ContributionView};
use log::{info, warn};
use rayon::prelude::*;
use serde::Serialize;

/// Result for one account in a batch run
#[derive(Debug, Clone, PartialEq)]
pub struct BatchRow {
    pub account_id: String,
    pub view: ContributionView,
}

impl BatchRow {
    pub fn is_indeterminate(&self) -> bool {
        self.view.projection.is_none()
    }
}

/// Flat output record for CSV writers
#[derive(Debug, Clone, Serialize)]
pub struct BatchOutputRecord {
    #[serde(rename = "AccountId")]
    pub account_id: String,
    #[serde(rename = "EquivalentPercent")]
    pub equivalent_percent: f64,
    #[serde(rename = "PerPaycheck")]
    pub per_paycheck_amount: f64,
    #[serde(rename = "Yearly")]
    pub yearly_amount: f64,
    #[serde(rename = "ProjectedBalance")]
    pub projected_balance: Option<f64>,
    #[serde(rename = "MissingInput")]
    pub missing_input: Option<MissingInput>,
}

impl From<&BatchRow> for BatchOutputRecord {
    fn from(row: &BatchRow) -> Self {
        Self {
            account_id: row.account_id.clone(),
            equivalent_percent: row.view.normalized.equivalent_percent,
            per_paycheck_amount: row.view.normalized.per_paycheck_amount,
            yearly_amount: row.view.normalized.yearly_amount,
            projected_balance: row.view.projection.map(|p| p.projected_balance),
            missing_input: row.view.missing_input,
        }
    }
}

/// Runs many accounts against one set of assumptions
#[derive(Debug, Clone, Default)]
pub struct BatchRunner {
    assumptions: ProjectionAssumptions,
}

impl BatchRunner {
    pub fn new(assumptions: ProjectionAssumptions) -> Self {
        Self { assumptions }
    }

    pub fn assumptions(&self) -> &ProjectionAssumptions {
        &self.assumptions
    }

    /// Project every account in parallel, keeping input order
    pub fn run_batch(&self, records: &[AccountRecord]) -> Vec<BatchRow> {
        let rows: Vec<BatchRow> = records
            .par_iter()
            .map(|record| BatchRow {
                account_id: record.account_id.clone(),
                view: evaluate(&record.selection, &record.snapshot, &self.assumptions),
            })
            .collect();

        let indeterminate = rows.iter().filter(|r| r.is_indeterminate()).count();
        if indeterminate > 0 {
            warn!("{} of {} accounts could not be projected", indeterminate, rows.len());
        }
        info!("projected {} accounts", rows.len() - indeterminate);
        rows
    }

    /// Sum of projected balances, skipping indeterminate accounts
    pub fn total_projected(rows: &[BatchRow]) -> f64 {
        rows.iter()
            .filter_map(|r| r.view.projection.map(|p| p.projected_balance))
            .sum()
    }
}
