//! Contribution Planner - 401(k) contribution math and retirement projections
//!
//! This library provides:
//! - Contribution normalization (percent of salary or dollars per paycheck)
//! - Closed-form and year-by-year retirement balance projections
//! - An injectable store and a service shared by preview and save paths
//! - Batch projections over many accounts

pub mod error;
pub mod contribution;
pub mod account;
pub mod assumptions;
pub mod projection;
pub mod store;
pub mod service;
pub mod batch;

// Re-export commonly used types
pub use error::{ConfigError, LoadError, PlannerError, Result, ValidationError};
pub use contribution::{normalize_contribution, ContributionKind, ContributionSelection, NormalizedContribution};
pub use account::AccountSnapshot;
pub use assumptions::ProjectionAssumptions;
pub use projection::{project_retirement_balance, Indeterminate, MissingInput, ProjectionResult};
pub use service::{ContributionView, PlannerService};
