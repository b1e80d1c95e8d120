//! Record sources: a fixed in-memory table and a CSV directory reader.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use csv::{ReaderBuilder, Trim};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::constants::{ACTIVITY_RECORDS_FILE, STATUS_RECORDS_FILE};
use crate::errors::{Error, Result, ValidationError};
use crate::goals::goals_model::{GoalActivityRecord, GoalStatusRecord, ProgressStatus};
use crate::goals::goals_traits::GoalRecordSourceTrait;
use crate::utils::time_utils::{parse_record_date, parse_record_datetime};

/// Serves records from memory. Each load returns a fresh copy.
#[derive(Debug, Clone, Default)]
pub struct InMemoryGoalSource {
    status_records: Vec<GoalStatusRecord>,
    activity_records: Vec<GoalActivityRecord>,
}

impl InMemoryGoalSource {
    pub fn new(
        status_records: Vec<GoalStatusRecord>,
        activity_records: Vec<GoalActivityRecord>,
    ) -> Self {
        Self {
            status_records,
            activity_records,
        }
    }
}

impl GoalRecordSourceTrait for InMemoryGoalSource {
    fn load_status_records(&self) -> Result<Vec<GoalStatusRecord>> {
        Ok(self.status_records.clone())
    }

    fn load_activity_records(&self) -> Result<Vec<GoalActivityRecord>> {
        Ok(self.activity_records.clone())
    }
}

/// Reads `goal_status.csv` and `goal_activity.csv` from a directory on every
/// load.
///
/// Headers may be the export labels (`Child ID`), camelCase or snake_case.
/// Dates are day-first, with ISO accepted as a fallback. Empty cells are null.
#[derive(Debug, Clone)]
pub struct CsvGoalSource {
    data_dir: PathBuf,
}

impl CsvGoalSource {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn read_rows<T: DeserializeOwned>(&self, file_name: &str) -> Result<Vec<(usize, T)>> {
        let path = self.data_dir.join(file_name);
        let file = File::open(&path).map_err(|e| {
            Error::DataSource(format!("Cannot open {}: {}", path.display(), e))
        })?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(Trim::All)
            .flexible(false)
            .from_reader(file);

        let mut rows = Vec::new();
        for (index, row) in reader.deserialize::<T>().enumerate() {
            // Row numbers are 1-based and count the header line.
            let line = index + 2;
            let row = row.map_err(|e| {
                Error::DataSource(format!("{} row {}: {}", file_name, line, e))
            })?;
            rows.push((line, row));
        }
        log::debug!("Read {} row(s) from {}", rows.len(), path.display());
        Ok(rows)
    }
}

impl GoalRecordSourceTrait for CsvGoalSource {
    fn load_status_records(&self) -> Result<Vec<GoalStatusRecord>> {
        self.read_rows::<StatusRow>(STATUS_RECORDS_FILE)?
            .into_iter()
            .map(|(line, row)| {
                row.into_record().map_err(|e| {
                    Error::DataSource(format!("{} row {}: {}", STATUS_RECORDS_FILE, line, e))
                })
            })
            .collect()
    }

    fn load_activity_records(&self) -> Result<Vec<GoalActivityRecord>> {
        self.read_rows::<ActivityRow>(ACTIVITY_RECORDS_FILE)?
            .into_iter()
            .map(|(line, row)| {
                row.into_record().map_err(|e| {
                    Error::DataSource(format!("{} row {}: {}", ACTIVITY_RECORDS_FILE, line, e))
                })
            })
            .collect()
    }
}

#[derive(Debug, Deserialize)]
struct StatusRow {
    #[serde(rename = "Child ID", alias = "childId", alias = "child_id")]
    child_id: String,
    #[serde(rename = "Nickname", alias = "nickname")]
    nickname: String,
    #[serde(rename = "Access Level", alias = "accessLevel", alias = "access_level")]
    access_level: String,
    #[serde(rename = "Parent ID", alias = "parentId", alias = "parent_id")]
    parent_id: String,
    #[serde(rename = "Parent Username", alias = "parentUsername", alias = "parent_username")]
    parent_username: String,
    #[serde(rename = "Goal Name", alias = "goalName", alias = "goal_name")]
    goal_name: String,
    #[serde(
        rename = "Current Amount Allocated",
        alias = "currentAmountAllocated",
        alias = "current_amount_allocated"
    )]
    current_amount_allocated: String,
    #[serde(rename = "Target Amount", alias = "targetAmount", alias = "target_amount")]
    target_amount: String,
    #[serde(rename = "Created Date", alias = "createdDate", alias = "created_date")]
    created_date: String,
    #[serde(
        rename = "Target End Date",
        alias = "targetEndDate",
        alias = "target_end_date",
        default
    )]
    target_end_date: Option<String>,
    #[serde(
        rename = "Actual End Date",
        alias = "actualEndDate",
        alias = "actual_end_date",
        default
    )]
    actual_end_date: Option<String>,
    #[serde(
        rename = "Progress Status",
        alias = "progressStatus",
        alias = "progress_status",
        alias = "Status"
    )]
    progress_status: String,
}

impl StatusRow {
    fn into_record(self) -> Result<GoalStatusRecord> {
        let progress_status = ProgressStatus::parse(&self.progress_status).ok_or_else(|| {
            ValidationError::InvalidInput(format!(
                "Unknown progress status '{}'",
                self.progress_status
            ))
        })?;
        let record = GoalStatusRecord {
            current_amount_allocated: parse_amount(&self.current_amount_allocated)?,
            target_amount: parse_amount(&self.target_amount)?,
            created_date: parse_record_date(&self.created_date)?,
            target_end_date: parse_optional_date(self.target_end_date.as_deref())?,
            actual_end_date: parse_optional_date(self.actual_end_date.as_deref())?,
            child_id: self.child_id,
            nickname: self.nickname,
            access_level: self.access_level,
            parent_id: self.parent_id,
            parent_username: self.parent_username,
            goal_name: self.goal_name,
            progress_status,
        };
        record.validate()?;
        Ok(record)
    }
}

#[derive(Debug, Deserialize)]
struct ActivityRow {
    #[serde(
        rename = "Transaction Date & Time",
        alias = "transactionDateTime",
        alias = "transaction_date_time"
    )]
    transaction_date_time: String,
    #[serde(rename = "Child ID", alias = "childId", alias = "child_id")]
    child_id: String,
    #[serde(rename = "Nickname", alias = "nickname")]
    nickname: String,
    #[serde(rename = "Child Access", alias = "childAccess", alias = "child_access")]
    child_access: String,
    #[serde(rename = "Parent ID", alias = "parentId", alias = "parent_id")]
    parent_id: String,
    #[serde(rename = "Parent Username", alias = "parentUsername", alias = "parent_username")]
    parent_username: String,
    #[serde(rename = "Goal Name", alias = "goalName", alias = "goal_name")]
    goal_name: String,
    #[serde(
        rename = "Amount Allocated",
        alias = "amountAllocated",
        alias = "amount_allocated"
    )]
    amount_allocated: String,
    #[serde(
        rename = "Amount Post Allocation",
        alias = "amountPostAllocation",
        alias = "amount_post_allocation"
    )]
    amount_post_allocation: String,
}

impl ActivityRow {
    fn into_record(self) -> Result<GoalActivityRecord> {
        Ok(GoalActivityRecord {
            transaction_date_time: parse_record_datetime(&self.transaction_date_time)?,
            amount_allocated: parse_amount(&self.amount_allocated)?,
            amount_post_allocation: parse_amount(&self.amount_post_allocation)?,
            child_id: self.child_id,
            nickname: self.nickname,
            child_access: self.child_access,
            parent_id: self.parent_id,
            parent_username: self.parent_username,
            goal_name: self.goal_name,
        })
    }
}

/// Plain decimal amounts; a leading currency symbol such as `$` or `S$` is stripped.
fn parse_amount(value: &str) -> Result<Decimal> {
    let trimmed = value.trim();
    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };
    let digits = unsigned.trim_start_matches(|c: char| c.is_alphabetic() || c == '$');
    let amount = Decimal::from_str(digits)?;
    Ok(if negative { -amount } else { amount })
}

fn parse_optional_date(value: Option<&str>) -> Result<Option<chrono::NaiveDate>> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => parse_record_date(text).map(Some),
    }
}
