//! Error types for the planner library

use thiserror::Error;

/// Result type for planner operations
pub type Result<T> = std::result::Result<T, PlannerError>;

/// Rejected user input, reported back to whoever supplied it
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{field} must be a finite number, got {value}")]
    NotFinite { field: &'static str, value: f64 },

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },

    #[error("{field} must be at most {max}, got {value}")]
    AboveMax { field: &'static str, value: f64, max: f64 },

    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange { field: &'static str, value: f64, min: f64, max: f64 },

    #[error("unknown contribution type: {0}")]
    UnknownKind(String),
}

/// Problems reading projection assumptions from the environment or a file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("environment variable {name} is not a number: {value:?}")]
    BadEnvValue { name: &'static str, value: String },

    #[error("failed to read assumptions file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse assumptions file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid assumptions: {0}")]
    Invalid(#[from] ValidationError),
}

/// Problems loading account snapshots for a batch run
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("account {account_id}: {source}")]
    Row {
        account_id: String,
        #[source]
        source: ValidationError,
    },
}

/// Umbrella error for the service layer and binaries
#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("store error: {0}")]
    Store(String),
}

/// Reject NaN and infinities before any range checks
pub(crate) fn ensure_finite(field: &'static str, value: f64) -> std::result::Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::NotFinite { field, value })
    }
}

pub(crate) fn ensure_non_negative(field: &'static str, value: f64) -> std::result::Result<(), ValidationError> {
    ensure_finite(field, value)?;
    if value < 0.0 {
        Err(ValidationError::Negative { field, value })
    } else {
        Ok(())
    }
}

pub(crate) fn ensure_in_range(
    field: &'static str,
    value: f64,
    min: f64,
    max: f64,
) -> std::result::Result<(), ValidationError> {
    ensure_finite(field, value)?;
    if value < min || value > max {
        Err(ValidationError::OutOfRange { field, value, min, max })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_helpers() {
        assert!(ensure_finite("salary", 1.0).is_ok());
        assert!(matches!(
            ensure_finite("salary", f64::NAN),
            Err(ValidationError::NotFinite { field: "salary", .. })
        ));
        assert!(matches!(
            ensure_non_negative("salary", -1.0),
            Err(ValidationError::Negative { .. })
        ));
        assert!(ensure_in_range("age", 14.0, 14.0, 100.0).is_ok());
        assert!(ensure_in_range("age", 101.0, 14.0, 100.0).is_err());
    }

    #[test]
    fn test_error_messages() {
        let err = ValidationError::AboveMax { field: "percent", value: 60.0, max: 50.0 };
        assert_eq!(err.to_string(), "percent must be at most 50, got 60");

        let wrapped: PlannerError = err.into();
        assert!(wrapped.to_string().starts_with("validation failed"));

        let config: PlannerError = ConfigError::BadEnvValue { name: "RETIREMENT_AGE", value: "x".into() }.into();
        assert!(matches!(config, PlannerError::Config(_)));
        assert!(config.to_string().starts_with("configuration error"));
    }
}
