//! Year-by-year roll-forward of the balance to retirement

use super::projector::{required_inputs, Indeterminate};
use crate::account::AccountSnapshot;
use crate::assumptions::ProjectionAssumptions;
use serde::{Deserialize, Serialize};

/// One projection year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionRow {
    /// Projection year (1-indexed)
    pub year: u32,
    /// Age at the start of the year
    pub age: u8,
    pub opening_balance: f64,
    /// Investment return earned on the opening balance
    pub growth: f64,
    /// Contribution credited at year end
    pub contribution: f64,
    pub closing_balance: f64,
}

/// Roll the balance forward one year at a time until retirement
///
/// The last closing balance matches `project_retirement_balance` for the
/// same inputs. Past retirement a single row credits one contribution with
/// no growth.
pub fn projection_schedule(
    snapshot: &AccountSnapshot,
    assumptions: &ProjectionAssumptions,
    yearly_contribution: f64,
) -> Result<Vec<ProjectionRow>, Indeterminate> {
    let (age, retirement_age, current_balance) = required_inputs(snapshot, assumptions)?;
    let rate = assumptions.annual_return_rate;

    if retirement_age <= age {
        return Ok(vec![ProjectionRow {
            year: 1,
            age,
            opening_balance: current_balance,
            growth: 0.0,
            contribution: yearly_contribution,
            closing_balance: current_balance + yearly_contribution,
        }]);
    }

    let mut rows = Vec::with_capacity((retirement_age - age) as usize);
    let mut balance = current_balance;

    for (year, attained_age) in (age..retirement_age).enumerate() {
        let growth = balance * rate;
        let closing_balance = balance + growth + yearly_contribution;
        rows.push(ProjectionRow {
            year: year as u32 + 1,
            age: attained_age,
            opening_balance: balance,
            growth,
            contribution: yearly_contribution,
            closing_balance,
        });
        balance = closing_balance;
    }

    Ok(rows)
}
