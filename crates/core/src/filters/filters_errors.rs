use chrono::NaiveDate;
use thiserror::Error;

/// Failures raised by the filter and export pipeline.
///
/// Both are surfaced before any rows are produced, so a caller never sees a
/// partial result alongside one of these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    #[error("Time range filter is mandatory for exporting data")]
    MissingDateRange,
}
