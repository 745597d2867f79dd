//! Load account snapshots and selections from CSV for batch projections

use super::AccountSnapshot;
use crate::contribution::{ContributionKind, ContributionSelection};
use crate::error::LoadError;
use csv::Reader;
use log::info;
use std::path::Path;

/// Raw CSV row; empty cells mean the value was not supplied
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "AccountId")]
    account_id: String,
    #[serde(rename = "Age")]
    age: Option<u8>,
    #[serde(rename = "Salary")]
    salary: Option<f64>,
    #[serde(rename = "PayPeriods")]
    pay_periods: u32,
    #[serde(rename = "CurrentBalance")]
    current_balance: Option<f64>,
    #[serde(rename = "Kind")]
    kind: String,
    #[serde(rename = "Value")]
    value: f64,
}

/// One account to project: its facts plus its contribution choice
#[derive(Debug, Clone, PartialEq)]
pub struct AccountRecord {
    pub account_id: String,
    pub snapshot: AccountSnapshot,
    pub selection: ContributionSelection,
}

impl CsvRow {
    fn into_record(self) -> Result<AccountRecord, LoadError> {
        let account_id = self.account_id;
        let row_error = |source| LoadError::Row { account_id: account_id.clone(), source };

        let kind: ContributionKind = self.kind.parse().map_err(row_error)?;
        let selection = ContributionSelection { kind, value: self.value };
        selection.validate().map_err(row_error)?;

        let snapshot = AccountSnapshot {
            age: self.age,
            salary: self.salary,
            pay_periods_per_year: self.pay_periods,
            current_balance: self.current_balance,
        };
        snapshot.validate().map_err(row_error)?;

        Ok(AccountRecord { account_id, snapshot, selection })
    }
}

/// Load all account records from a CSV file
pub fn load_snapshots<P: AsRef<Path>>(path: P) -> Result<Vec<AccountRecord>, LoadError> {
    let path = path.as_ref();
    let records = read_records(Reader::from_path(path)?)?;
    info!("loaded {} accounts from {}", records.len(), path.display());
    Ok(records)
}

/// Load account records from any reader (e.g., string buffer, stdin)
pub fn load_snapshots_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<AccountRecord>, LoadError> {
    read_records(Reader::from_reader(reader))
}

fn read_records<R: std::io::Read>(mut reader: Reader<R>) -> Result<Vec<AccountRecord>, LoadError> {
    let mut records = Vec::new();
    for result in reader.deserialize() {
        let row: CsvRow = result?;
        records.push(row.into_record()?);
    }
    Ok(records)
}
