//! Account facts used as projection inputs

use crate::error::{ensure_in_range, ensure_non_negative, ValidationError};
use serde::{Deserialize, Serialize};

/// Youngest plausible plan participant
pub const MIN_AGE: u8 = 14;

/// Oldest plausible plan participant
pub const MAX_AGE: u8 = 100;

/// Weekly pay is the most frequent schedule accepted
pub const MAX_PAY_PERIODS: u32 = 52;

/// Snapshot of an account at the time of a calculation
///
/// `None` means the value has not been supplied yet. The projector reports
/// such a snapshot as indeterminate instead of treating the gap as zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AccountSnapshot {
    /// Current age in whole years
    #[serde(default)]
    pub age: Option<u8>,

    /// Annual salary in dollars
    #[serde(default)]
    pub salary: Option<f64>,

    /// Paychecks per year (26 = biweekly)
    pub pay_periods_per_year: u32,

    /// Balance already in the account
    #[serde(default)]
    pub current_balance: Option<f64>,
}

impl AccountSnapshot {
    pub fn new(age: u8, salary: f64, pay_periods_per_year: u32, current_balance: f64) -> Self {
        Self {
            age: Some(age),
            salary: Some(salary),
            pay_periods_per_year,
            current_balance: Some(current_balance),
        }
    }

    /// Demo account the in-memory store starts with
    pub fn demo() -> Self {
        Self::new(30, 120_000.0, 26, 15_000.0)
    }

    /// Range-check every supplied field; absent fields are allowed
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(age) = self.age {
            ensure_in_range("age", age as f64, MIN_AGE as f64, MAX_AGE as f64)?;
        }
        if let Some(salary) = self.salary {
            ensure_non_negative("salary", salary)?;
        }
        ensure_in_range(
            "pay periods per year",
            self.pay_periods_per_year as f64,
            1.0,
            MAX_PAY_PERIODS as f64,
        )?;
        if let Some(balance) = self.current_balance {
            ensure_non_negative("current balance", balance)?;
        }
        Ok(())
    }
}

impl Default for AccountSnapshot {
    fn default() -> Self {
        Self {
            age: None,
            salary: None,
            pay_periods_per_year: 26,
            current_balance: None,
        }
    }
}
