//! Storage for the saved contribution selection and account facts

mod memory;

pub use memory::InMemoryStore;

use crate::account::AccountSnapshot;
use crate::contribution::ContributionSelection;
use crate::error::Result;

/// Where the planner keeps the current selection and account snapshot
///
/// Only raw inputs are stored. Percentages, amounts and projections are
/// always derived from them on read.
pub trait ContributionStore {
    /// Current account facts
    fn snapshot(&self) -> Result<AccountSnapshot>;

    /// Currently saved contribution selection
    fn selection(&self) -> Result<ContributionSelection>;

    /// Replace the saved selection
    fn save_selection(&mut self, selection: ContributionSelection) -> Result<()>;

    /// Replace the account facts
    fn update_snapshot(&mut self, snapshot: AccountSnapshot) -> Result<()>;
}
