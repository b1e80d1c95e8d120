//! Filter criteria and column models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Every column of both report tables. A record kind only has a subset;
/// see [`crate::filters::ReportRecord::columns`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Column {
    TransactionDateTime,
    ChildId,
    Nickname,
    AccessLevel,
    ChildAccess,
    ParentId,
    ParentUsername,
    GoalName,
    CurrentAmountAllocated,
    TargetAmount,
    CreatedDate,
    TargetEndDate,
    ActualEndDate,
    ProgressStatus,
    AmountAllocated,
    AmountPostAllocation,
}

impl Column {
    pub const ALL: [Column; 16] = [
        Column::TransactionDateTime,
        Column::ChildId,
        Column::Nickname,
        Column::AccessLevel,
        Column::ChildAccess,
        Column::ParentId,
        Column::ParentUsername,
        Column::GoalName,
        Column::CurrentAmountAllocated,
        Column::TargetAmount,
        Column::CreatedDate,
        Column::TargetEndDate,
        Column::ActualEndDate,
        Column::ProgressStatus,
        Column::AmountAllocated,
        Column::AmountPostAllocation,
    ];

    /// Header label used in tables and export files.
    pub fn label(&self) -> &'static str {
        match self {
            Column::TransactionDateTime => "Transaction Date & Time",
            Column::ChildId => "Child ID",
            Column::Nickname => "Nickname",
            Column::AccessLevel => "Access Level",
            Column::ChildAccess => "Child Access",
            Column::ParentId => "Parent ID",
            Column::ParentUsername => "Parent Username",
            Column::GoalName => "Goal Name",
            Column::CurrentAmountAllocated => "Current Amount Allocated",
            Column::TargetAmount => "Target Amount",
            Column::CreatedDate => "Created Date",
            Column::TargetEndDate => "Target End Date",
            Column::ActualEndDate => "Actual End Date",
            Column::ProgressStatus => "Progress Status",
            Column::AmountAllocated => "Amount Allocated",
            Column::AmountPostAllocation => "Amount Post Allocation",
        }
    }

    /// Resolves `goalName`, `goal_name` or `Goal Name` (any case).
    pub fn parse(name: &str) -> Option<Self> {
        let key = normalize_name(name);
        if key == "status" {
            return Some(Column::ProgressStatus);
        }
        Column::ALL
            .into_iter()
            .find(|column| normalize_name(column.label()) == key)
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Date or date-time columns usable as a range filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DateField {
    CreatedDate,
    TargetEndDate,
    ActualEndDate,
    TransactionDateTime,
}

impl DateField {
    pub fn column(&self) -> Column {
        match self {
            DateField::CreatedDate => Column::CreatedDate,
            DateField::TargetEndDate => Column::TargetEndDate,
            DateField::ActualEndDate => Column::ActualEndDate,
            DateField::TransactionDateTime => Column::TransactionDateTime,
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        match Column::parse(name)? {
            Column::CreatedDate => Some(DateField::CreatedDate),
            Column::TargetEndDate => Some(DateField::TargetEndDate),
            Column::ActualEndDate => Some(DateField::ActualEndDate),
            Column::TransactionDateTime => Some(DateField::TransactionDateTime),
            _ => None,
        }
    }
}

/// Inclusive calendar-date bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

impl From<(NaiveDate, NaiveDate)> for DateRange {
    fn from((start, end): (NaiveDate, NaiveDate)) -> Self {
        Self { start, end }
    }
}

/// The full set of inputs a dashboard tab filters by.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    /// Case-insensitive substring matched against `search_columns`.
    #[serde(default)]
    pub keyword: String,
    /// Columns the keyword is matched against. Empty means the record
    /// kind's default search columns.
    #[serde(default)]
    pub search_columns: Vec<Column>,
    /// Per-column substring constraints, all of which must match.
    #[serde(default)]
    pub column_filters: BTreeMap<Column, String>,
    /// Raw status selection. Unknown names are dropped when applied.
    #[serde(default)]
    pub statuses: Vec<String>,
    /// Field the date range applies to. `None` uses the record kind's default.
    #[serde(default)]
    pub date_field: Option<DateField>,
    #[serde(default)]
    pub date_range: Option<DateRange>,
}

impl FilterCriteria {
    /// Criteria with only a date range set.
    pub fn with_date_range(range: impl Into<DateRange>) -> Self {
        Self {
            date_range: Some(range.into()),
            ..Self::default()
        }
    }

    pub fn has_date_range(&self) -> bool {
        self.date_range.is_some()
    }
}

fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}
