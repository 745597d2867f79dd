//! Process-lifetime store; contents are lost on restart

use super::ContributionStore;
use crate::account::AccountSnapshot;
use crate::contribution::ContributionSelection;
use crate::error::Result;
use log::debug;

/// Store owned by whoever constructs it, holding one account
#[derive(Debug, Clone, PartialEq)]
pub struct InMemoryStore {
    snapshot: AccountSnapshot,
    selection: ContributionSelection,
}

impl InMemoryStore {
    pub fn new(snapshot: AccountSnapshot, selection: ContributionSelection) -> Self {
        Self { snapshot, selection }
    }

    /// Demo account: age 30, $120k salary paid biweekly, $15k saved, 10% rate
    pub fn demo() -> Self {
        Self::new(AccountSnapshot::demo(), ContributionSelection::percent(10.0))
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::demo()
    }
}

impl ContributionStore for InMemoryStore {
    fn snapshot(&self) -> Result<AccountSnapshot> {
        Ok(self.snapshot)
    }

    fn selection(&self) -> Result<ContributionSelection> {
        Ok(self.selection)
    }

    fn save_selection(&mut self, selection: ContributionSelection) -> Result<()> {
        debug!("saving selection {} {}", selection.kind, selection.value);
        self.selection = selection;
        Ok(())
    }

    fn update_snapshot(&mut self, snapshot: AccountSnapshot) -> Result<()> {
        debug!("updating account snapshot");
        self.snapshot = snapshot;
        Ok(())
    }
}
