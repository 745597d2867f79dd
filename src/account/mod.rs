//! Account snapshot data and batch loading

mod snapshot;
pub mod loader;

pub use snapshot::{AccountSnapshot, MAX_AGE, MAX_PAY_PERIODS, MIN_AGE};
pub use loader::{load_snapshots, load_snapshots_from_reader, AccountRecord};
