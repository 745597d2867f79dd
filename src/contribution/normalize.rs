//! Convert a contribution selection into percent, per-paycheck and yearly terms
//!
//! No rounding happens here. Display code rounds to whole currency units; the
//! numbers produced by this module are what gets compared and persisted.

use super::selection::{ContributionKind, ContributionSelection};
use crate::account::AccountSnapshot;
use log::debug;
use serde::{Deserialize, Serialize};

/// A selection expressed in every unit the planner shows
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NormalizedContribution {
    /// Contribution as a percentage of annual salary
    pub equivalent_percent: f64,
    /// Dollars taken from each paycheck
    pub per_paycheck_amount: f64,
    /// Dollars contributed over a full year
    pub yearly_amount: f64,
}

/// Normalize a selection against the salary and pay schedule of an account
///
/// Degenerate inputs (no salary, zero pay periods) never produce NaN or
/// infinity: any figure that would divide by them is reported as 0. A
/// dollar selection has no meaningful percent or yearly figure without both,
/// so all three come back as 0 in that case.
pub fn normalize_contribution(
    selection: &ContributionSelection,
    snapshot: &AccountSnapshot,
) -> NormalizedContribution {
    let salary = snapshot.salary.unwrap_or(0.0);
    let periods = snapshot.pay_periods_per_year as f64;

    match selection.kind {
        ContributionKind::Percent => {
            let yearly_amount = salary * (selection.value / 100.0);
            let per_paycheck_amount = if periods > 0.0 {
                yearly_amount / periods
            } else {
                debug!("no pay periods, per-paycheck amount forced to 0");
                0.0
            };
            NormalizedContribution {
                equivalent_percent: selection.value,
                per_paycheck_amount,
                yearly_amount,
            }
        }
        ContributionKind::Dollar => {
            if salary <= 0.0 || periods <= 0.0 {
                debug!(
                    "dollar selection with salary {} and {} pay periods normalizes to 0",
                    salary, periods
                );
                return NormalizedContribution::default();
            }
            let yearly_amount = selection.value * periods;
            NormalizedContribution {
                equivalent_percent: yearly_amount / salary * 100.0,
                per_paycheck_amount: selection.value,
                yearly_amount,
            }
        }
    }
}
