//! Contribution selections and their normalization against an account

mod selection;
mod normalize;

pub use selection::{ContributionKind, ContributionSelection, MAX_DOLLAR, MAX_PERCENT};
pub use normalize::{normalize_contribution, NormalizedContribution};
