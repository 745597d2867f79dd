//! Retirement balance projection

mod projector;
mod schedule;

pub use projector::{
    annuity_factor, compound_growth, project_balance, project_retirement_balance,
    Indeterminate, MissingInput, ProjectionResult,
};
pub use schedule::{projection_schedule, ProjectionRow};
