//! The filter pipeline: keyword, column, status and date-range stages.
//!
//! Every stage is a pure function over a slice of records. Stages never
//! mutate their input and never fail on odd field values; only an inverted
//! date range is an error, and it is reported before any row is examined.

use std::collections::{BTreeMap, HashSet};

use chrono::NaiveDate;

use crate::errors::Result;
use crate::filters::filters_errors::FilterError;
use crate::filters::filters_model::{Column, DateField, DateRange, FilterCriteria};
use crate::filters::filters_traits::ReportRecord;
use crate::goals::ProgressStatus;

/// Keeps records where any of `columns` contains `keyword`, ignoring case.
///
/// An empty keyword returns the input unchanged. Columns the record kind
/// does not have are skipped.
pub fn filter_keyword<R: ReportRecord>(records: &[R], columns: &[Column], keyword: &str) -> Vec<R> {
    if keyword.is_empty() {
        return records.to_vec();
    }
    let needle = keyword.to_lowercase();
    records
        .iter()
        .filter(|record| {
            columns.iter().any(|column| {
                record
                    .column_value(*column)
                    .map(|value| value.to_lowercase().contains(&needle))
                    .unwrap_or(false)
            })
        })
        .cloned()
        .collect()
}

/// Keeps records where every non-empty entry of `filters` is a
/// case-insensitive substring of that column's value.
///
/// Entries naming a column the record kind lacks are ignored.
pub fn filter_columns<R: ReportRecord>(
    records: &[R],
    filters: &BTreeMap<Column, String>,
) -> Vec<R> {
    let active: Vec<(Column, String)> = filters
        .iter()
        .filter(|(column, text)| !text.is_empty() && R::columns().contains(*column))
        .map(|(column, text)| (*column, text.to_lowercase()))
        .collect();
    if active.is_empty() {
        return records.to_vec();
    }
    records
        .iter()
        .filter(|record| {
            active.iter().all(|(column, needle)| {
                record
                    .column_value(*column)
                    .map(|value| value.to_lowercase().contains(needle.as_str()))
                    .unwrap_or(false)
            })
        })
        .cloned()
        .collect()
}

/// Keeps records whose `field` falls within `start..=end` by calendar date.
///
/// The time of day never excludes a record. Records with no value for
/// `field` are dropped.
pub fn filter_date_range<R: ReportRecord>(
    records: &[R],
    field: DateField,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<R>> {
    if start > end {
        return Err(FilterError::InvalidDateRange { start, end }.into());
    }
    let range = DateRange::new(start, end);
    Ok(records
        .iter()
        .filter(|record| {
            record
                .date_value(field)
                .map(|date| range.contains(date))
                .unwrap_or(false)
        })
        .cloned()
        .collect())
}

/// Keeps records whose progress status is in `selected`.
///
/// An empty selection is no constraint. Names outside the six known
/// statuses are dropped from the selection, so a selection made only of
/// unknown names matches nothing.
pub fn filter_status_set<R, S>(records: &[R], selected: &[S]) -> Vec<R>
where
    R: ReportRecord,
    S: AsRef<str>,
{
    if selected.is_empty() {
        return records.to_vec();
    }
    let wanted = resolve_statuses(selected);
    records
        .iter()
        .filter(|record| {
            record
                .progress_status()
                .map(|status| wanted.contains(&status))
                .unwrap_or(false)
        })
        .cloned()
        .collect()
}

/// Parses a raw status selection, discarding unknown names.
pub fn resolve_statuses<S: AsRef<str>>(selected: &[S]) -> HashSet<ProgressStatus> {
    selected
        .iter()
        .filter_map(|name| {
            let status = ProgressStatus::parse(name.as_ref());
            if status.is_none() {
                log::warn!("Ignoring unknown progress status '{}'", name.as_ref());
            }
            status
        })
        .collect()
}

/// Runs every stage of `criteria` in order: keyword (with column filters),
/// status set, then date range.
///
/// The date range is checked before any stage runs. The status stage only
/// applies to record kinds that carry a progress status; the date stage is
/// skipped when no range is set.
pub fn apply_all<R: ReportRecord>(records: &[R], criteria: &FilterCriteria) -> Result<Vec<R>> {
    if let Some(range) = criteria.date_range {
        if range.start > range.end {
            return Err(FilterError::InvalidDateRange {
                start: range.start,
                end: range.end,
            }
            .into());
        }
    }

    let search_columns: &[Column] = if criteria.search_columns.is_empty() {
        R::default_search_columns()
    } else {
        &criteria.search_columns
    };
    let mut result = filter_keyword(records, search_columns, &criteria.keyword);
    result = filter_columns(&result, &criteria.column_filters);
    log::debug!(
        "{:?}: keyword stage kept {} of {} record(s)",
        R::KIND,
        result.len(),
        records.len()
    );

    if R::CARRIES_STATUS {
        result = filter_status_set(&result, &criteria.statuses);
        log::debug!("{:?}: status stage kept {} record(s)", R::KIND, result.len());
    }

    if let Some(range) = criteria.date_range {
        let field = criteria.date_field.unwrap_or_else(R::default_date_field);
        result = filter_date_range(&result, field, range.start, range.end)?;
        log::debug!("{:?}: date stage kept {} record(s)", R::KIND, result.len());
    }

    Ok(result)
}

/// Stable sort, latest first, by a date or date-time field. Records with no
/// value for `field` sort last, keeping their relative order.
pub fn sort_by_date_time_descending<R: ReportRecord>(mut records: Vec<R>, field: DateField) -> Vec<R> {
    records.sort_by(|a, b| b.date_time_value(field).cmp(&a.date_time_value(field)));
    records
}
