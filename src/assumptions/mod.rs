//! Projection assumptions: retirement age and expected annual return

mod loader;

pub use loader::{ANNUAL_RETURN_RATE_VAR, RETIREMENT_AGE_VAR};

use crate::account::{MAX_AGE, MIN_AGE};
use crate::error::{ensure_finite, ensure_in_range, ValidationError};
use serde::{Deserialize, Serialize};

/// Retirement age used when nothing else is configured
pub const DEFAULT_RETIREMENT_AGE: u8 = 65;

/// Expected annual return used when nothing else is configured
pub const DEFAULT_ANNUAL_RETURN_RATE: f64 = 0.05;

fn default_retirement_age() -> Option<u8> {
    Some(DEFAULT_RETIREMENT_AGE)
}

fn default_annual_return_rate() -> f64 {
    DEFAULT_ANNUAL_RETURN_RATE
}

/// Fixed inputs of a projection that do not come from the account
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionAssumptions {
    /// Age at which contributions stop and the balance is reported
    #[serde(default = "default_retirement_age")]
    pub retirement_age: Option<u8>,

    /// Annual return as a fraction (0.05 = 5%)
    #[serde(default = "default_annual_return_rate")]
    pub annual_return_rate: f64,
}

impl ProjectionAssumptions {
    pub fn new(retirement_age: u8, annual_return_rate: f64) -> Self {
        Self {
            retirement_age: Some(retirement_age),
            annual_return_rate,
        }
    }

    /// Check the retirement age is plausible and the rate is a sane fraction
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(age) = self.retirement_age {
            ensure_in_range("retirement age", age as f64, MIN_AGE as f64, MAX_AGE as f64)?;
        }
        ensure_finite("annual return rate", self.annual_return_rate)?;
        if self.annual_return_rate <= -1.0 || self.annual_return_rate >= 1.0 {
            return Err(ValidationError::OutOfRange {
                field: "annual return rate",
                value: self.annual_return_rate,
                min: -1.0,
                max: 1.0,
            });
        }
        Ok(())
    }
}

impl Default for ProjectionAssumptions {
    fn default() -> Self {
        Self::new(DEFAULT_RETIREMENT_AGE, DEFAULT_ANNUAL_RETURN_RATE)
    }
}
