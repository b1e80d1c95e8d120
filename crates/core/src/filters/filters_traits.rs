use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::filters::filters_model::{Column, DateField};
use crate::goals::ProgressStatus;

/// Which dashboard table a record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReportKind {
    GoalStatus,
    GoalActivity,
}

impl ReportKind {
    /// Prefix for export file names.
    pub fn file_stem(&self) -> &'static str {
        match self {
            ReportKind::GoalStatus => "goal_status",
            ReportKind::GoalActivity => "goal_activity",
        }
    }
}

/// A strongly-typed table row that the filter pipeline can search, bound by
/// date, and serialize column by column.
pub trait ReportRecord: Clone {
    const KIND: ReportKind;

    /// Whether the record kind has a progress status the status-set filter
    /// applies to.
    const CARRIES_STATUS: bool = false;

    /// Columns of this record kind, in display and export order.
    fn columns() -> &'static [Column];

    /// Columns searched by the keyword filter when none are specified.
    fn default_search_columns() -> &'static [Column];

    /// Date field the range filter applies to when none is specified.
    fn default_date_field() -> DateField;

    /// Stringified value of `column`, or `None` if this record kind has no
    /// such column. Null fields render as an empty string.
    fn column_value(&self, column: Column) -> Option<String>;

    /// Value of a date or date-time field; dates are read as midnight.
    /// `None` when the field is absent from the kind or null on this record.
    fn date_time_value(&self, field: DateField) -> Option<NaiveDateTime>;

    fn date_value(&self, field: DateField) -> Option<NaiveDate> {
        self.date_time_value(field).map(|dt| dt.date())
    }

    fn progress_status(&self) -> Option<ProgressStatus> {
        None
    }
}
