//! Closed-form projection of the balance at retirement
//!
//! The balance grows by compound interest over the whole horizon, and each
//! year's contribution is credited at year end (an ordinary annuity). Nothing
//! is rounded.

use crate::account::AccountSnapshot;
use crate::assumptions::ProjectionAssumptions;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A projection input that has not been supplied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingInput {
    Age,
    RetirementAge,
    Salary,
    CurrentBalance,
}

impl fmt::Display for MissingInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MissingInput::Age => "age",
            MissingInput::RetirementAge => "retirement age",
            MissingInput::Salary => "salary",
            MissingInput::CurrentBalance => "current balance",
        };
        f.write_str(name)
    }
}

/// The projection cannot be computed yet; distinct from a projection of zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("projection is indeterminate: {missing} not supplied")]
pub struct Indeterminate {
    pub missing: MissingInput,
}

/// Projected balance at retirement and the terms that make it up
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Balance at retirement age
    pub projected_balance: f64,
    /// Retirement age minus current age; zero or negative past retirement
    pub years_to_retirement: i32,
    /// Current balance grown to retirement
    pub future_balance: f64,
    /// Value at retirement of all future contributions
    pub future_contributions: f64,
    /// Multiplier applied to the yearly contribution
    pub annuity_factor: f64,
}

/// `balance * (1 + r)^years`
pub fn compound_growth(balance: f64, annual_rate: f64, years: i32) -> f64 {
    balance * (1.0 + annual_rate).powi(years)
}

/// Future value of `years` level payments of 1 made at each year end
///
/// With a zero rate the factor is simply `years`, the limit of the general
/// formula as the rate goes to zero.
pub fn annuity_factor(annual_rate: f64, years: i32) -> f64 {
    if annual_rate == 0.0 {
        years as f64
    } else {
        ((1.0 + annual_rate).powi(years) - 1.0) / annual_rate
    }
}

/// Project with every input known
///
/// At or past retirement age no growth is applied; the result is the current
/// balance plus one more year of contributions.
pub fn project_balance(
    age: u8,
    retirement_age: u8,
    annual_rate: f64,
    current_balance: f64,
    yearly_contribution: f64,
) -> ProjectionResult {
    let years = retirement_age as i32 - age as i32;

    if years <= 0 {
        return ProjectionResult {
            projected_balance: current_balance + yearly_contribution,
            years_to_retirement: years,
            future_balance: current_balance,
            future_contributions: yearly_contribution,
            annuity_factor: 1.0,
        };
    }

    let future_balance = compound_growth(current_balance, annual_rate, years);
    let factor = annuity_factor(annual_rate, years);
    let future_contributions = yearly_contribution * factor;

    ProjectionResult {
        projected_balance: future_balance + future_contributions,
        years_to_retirement: years,
        future_balance,
        future_contributions,
        annuity_factor: factor,
    }
}

/// Project an account's balance at retirement
///
/// Age, salary and current balance must be present on the snapshot, and the
/// assumptions must carry a retirement age; otherwise the first missing one
/// is reported as [`Indeterminate`].
pub fn project_retirement_balance(
    snapshot: &AccountSnapshot,
    assumptions: &ProjectionAssumptions,
    yearly_contribution: f64,
) -> Result<ProjectionResult, Indeterminate> {
    let (age, retirement_age, current_balance) = required_inputs(snapshot, assumptions)?;
    Ok(project_balance(
        age,
        retirement_age,
        assumptions.annual_return_rate,
        current_balance,
        yearly_contribution,
    ))
}

/// Age, retirement age and current balance, or the first input that is missing
pub(crate) fn required_inputs(
    snapshot: &AccountSnapshot,
    assumptions: &ProjectionAssumptions,
) -> Result<(u8, u8, f64), Indeterminate> {
    let absent = |missing| Indeterminate { missing };

    let age = snapshot.age.ok_or(absent(MissingInput::Age))?;
    let retirement_age = assumptions
        .retirement_age
        .ok_or(absent(MissingInput::RetirementAge))?;
    snapshot.salary.ok_or(absent(MissingInput::Salary))?;
    let current_balance = snapshot
        .current_balance
        .ok_or(absent(MissingInput::CurrentBalance))?;

    Ok((age, retirement_age, current_balance))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contribution::{normalize_contribution, ContributionSelection};
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_reference_scenario() {
        // age 30 -> 65 at 5%, $15k balance, 10% of $120k salary
        let snapshot = AccountSnapshot::new(30, 120_000.0, 26, 15_000.0);
        let assumptions = ProjectionAssumptions::default();
        let yearly = normalize_contribution(&ContributionSelection::percent(10.0), &snapshot).yearly_amount;
        assert_relative_eq!(yearly, 12_000.0);

        let result = project_retirement_balance(&snapshot, &assumptions, yearly).unwrap();
        assert_eq!(result.years_to_retirement, 35);
        assert_abs_diff_eq!(result.future_balance, 82_740.23, epsilon = 0.01);
        assert_abs_diff_eq!(result.annuity_factor, 90.3203, epsilon = 0.0001);
        assert_abs_diff_eq!(result.future_contributions, 1_083_843.69, epsilon = 0.01);
        assert_abs_diff_eq!(result.projected_balance, 1_166_583.92, epsilon = 0.01);
    }

    #[test]
    fn test_past_retirement_adds_one_contribution() {
        let result = project_balance(70, 65, 0.05, 250_000.0, 9_000.0);
        assert_eq!(result.projected_balance, 259_000.0);
        assert_eq!(result.years_to_retirement, -5);

        let result = project_balance(65, 65, 0.05, 250_000.0, 9_000.0);
        assert_eq!(result.projected_balance, 259_000.0);
        assert_eq!(result.years_to_retirement, 0);
    }

    #[test]
    fn test_zero_rate_is_linear() {
        for years in [1, 10, 35] {
            assert_eq!(annuity_factor(0.0, years), years as f64);
        }
        let result = project_balance(40, 65, 0.0, 20_000.0, 5_000.0);
        assert_eq!(result.annuity_factor, 25.0);
        assert_relative_eq!(result.projected_balance, 20_000.0 + 5_000.0 * 25.0);
    }

    #[test]
    fn test_annuity_factor_approaches_years_near_zero_rate() {
        assert_relative_eq!(annuity_factor(1e-9, 30), 30.0, max_relative = 1e-6);
        assert_relative_eq!(annuity_factor(0.05, 1), 1.0, max_relative = 1e-12);
    }

    #[test]
    fn test_negative_rate() {
        let result = project_balance(60, 62, -0.1, 1_000.0, 100.0);
        assert_relative_eq!(result.future_balance, 810.0, max_relative = 1e-12);
        assert_relative_eq!(result.annuity_factor, 1.9, max_relative = 1e-12);
        assert_relative_eq!(result.projected_balance, 1_000.0, max_relative = 1e-12);
    }

    #[test]
    fn test_missing_inputs_are_indeterminate() {
        let assumptions = ProjectionAssumptions::default();

        let mut snapshot = AccountSnapshot::demo();
        snapshot.age = None;
        assert_eq!(
            project_retirement_balance(&snapshot, &assumptions, 1_000.0),
            Err(Indeterminate { missing: MissingInput::Age })
        );

        let mut snapshot = AccountSnapshot::demo();
        snapshot.current_balance = None;
        assert_eq!(
            project_retirement_balance(&snapshot, &assumptions, 1_000.0),
            Err(Indeterminate { missing: MissingInput::CurrentBalance })
        );

        let mut snapshot = AccountSnapshot::demo();
        snapshot.salary = None;
        assert_eq!(
            project_retirement_balance(&snapshot, &assumptions, 0.0),
            Err(Indeterminate { missing: MissingInput::Salary })
        );

        let no_retirement_age = ProjectionAssumptions { retirement_age: None, ..assumptions };
        assert_eq!(
            project_retirement_balance(&AccountSnapshot::demo(), &no_retirement_age, 0.0),
            Err(Indeterminate { missing: MissingInput::RetirementAge })
        );
    }

    #[test]
    fn test_zero_is_not_indeterminate() {
        let snapshot = AccountSnapshot::new(30, 0.0, 26, 0.0);
        let result = project_retirement_balance(&snapshot, &ProjectionAssumptions::default(), 0.0).unwrap();
        assert_eq!(result.projected_balance, 0.0);
    }

    #[test]
    fn test_higher_percent_projects_higher_balance() {
        let snapshot = AccountSnapshot::demo();
        let assumptions = ProjectionAssumptions::default();

        let mut previous = f64::NEG_INFINITY;
        let mut percent = 0.0;
        while percent <= 50.0 {
            let yearly = normalize_contribution(&ContributionSelection::percent(percent), &snapshot).yearly_amount;
            let balance = project_retirement_balance(&snapshot, &assumptions, yearly)
                .unwrap()
                .projected_balance;
            assert!(balance > previous, "{percent}% did not increase the balance");
            previous = balance;
            percent += 0.5;
        }
    }

    #[test]
    fn test_indeterminate_message() {
        let err = Indeterminate { missing: MissingInput::CurrentBalance };
        assert_eq!(err.to_string(), "projection is indeterminate: current balance not supplied");
    }
}
