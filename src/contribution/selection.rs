//! The user's chosen contribution input

use crate::error::{ensure_non_negative, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Highest contribution rate accepted, in percent of salary
pub const MAX_PERCENT: f64 = 50.0;

/// Highest fixed contribution accepted, in dollars per paycheck
pub const MAX_DOLLAR: f64 = 5000.0;

/// How the contribution value is expressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContributionKind {
    /// Percentage of annual salary
    Percent,
    /// Fixed dollar amount per paycheck
    Dollar,
}

impl ContributionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContributionKind::Percent => "percent",
            ContributionKind::Dollar => "dollar",
        }
    }

    /// Upper bound on the selection value for this kind
    pub fn max_value(&self) -> f64 {
        match self {
            ContributionKind::Percent => MAX_PERCENT,
            ContributionKind::Dollar => MAX_DOLLAR,
        }
    }
}

impl fmt::Display for ContributionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContributionKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "percent" | "%" => Ok(ContributionKind::Percent),
            "dollar" | "$" => Ok(ContributionKind::Dollar),
            other => Err(ValidationError::UnknownKind(other.to_string())),
        }
    }
}

/// A contribution choice: either a percent of salary or dollars per paycheck
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContributionSelection {
    pub kind: ContributionKind,
    pub value: f64,
}

impl ContributionSelection {
    pub fn percent(value: f64) -> Self {
        Self { kind: ContributionKind::Percent, value }
    }

    pub fn dollar(value: f64) -> Self {
        Self { kind: ContributionKind::Dollar, value }
    }

    /// Check the value is finite, non-negative and under the cap for its kind
    pub fn validate(&self) -> Result<(), ValidationError> {
        let field = match self.kind {
            ContributionKind::Percent => "contribution percent",
            ContributionKind::Dollar => "contribution dollar amount",
        };
        ensure_non_negative(field, self.value)?;

        let max = self.kind.max_value();
        if self.value > max {
            return Err(ValidationError::AboveMax { field, value: self.value, max });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_parsing() {
        assert_eq!("percent".parse::<ContributionKind>().unwrap(), ContributionKind::Percent);
        assert_eq!(" Dollar ".parse::<ContributionKind>().unwrap(), ContributionKind::Dollar);
        assert_eq!("%".parse::<ContributionKind>().unwrap(), ContributionKind::Percent);
        assert!(matches!(
            "roth".parse::<ContributionKind>(),
            Err(ValidationError::UnknownKind(k)) if k == "roth"
        ));
    }

    #[test]
    fn test_kind_serde() {
        let json = serde_json::to_string(&ContributionSelection::dollar(250.0)).unwrap();
        assert_eq!(json, r#"{"kind":"dollar","value":250.0}"#);

        let parsed: ContributionSelection =
            serde_json::from_str(r#"{"kind":"percent","value":6}"#).unwrap();
        assert_eq!(parsed, ContributionSelection::percent(6.0));

        assert!(serde_json::from_str::<ContributionSelection>(r#"{"kind":"shares","value":1}"#).is_err());
    }

    #[test]
    fn test_validate_caps() {
        assert!(ContributionSelection::percent(0.0).validate().is_ok());
        assert!(ContributionSelection::percent(50.0).validate().is_ok());
        assert!(matches!(
            ContributionSelection::percent(50.5).validate(),
            Err(ValidationError::AboveMax { max, .. }) if max == MAX_PERCENT
        ));

        assert!(ContributionSelection::dollar(5000.0).validate().is_ok());
        assert!(ContributionSelection::dollar(5000.01).validate().is_err());
    }

    #[test]
    fn test_validate_rejects_negative_and_nan() {
        assert!(matches!(
            ContributionSelection::dollar(-1.0).validate(),
            Err(ValidationError::Negative { .. })
        ));
        assert!(matches!(
            ContributionSelection::percent(f64::NAN).validate(),
            Err(ValidationError::NotFinite { .. })
        ));
    }
}
