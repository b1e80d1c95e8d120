//! Export validation and CSV serialization.

use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::constants::EXPORT_MIME_TYPE;
use crate::errors::{Error, Result};
use crate::export::export_model::{ExportPayload, ExportScope};
use crate::filters::{apply_all, DateRange, FilterCriteria, FilterError, ReportRecord};

/// Exports of either scope require a non-empty date range in the current
/// criteria: present, with the start on or before the end.
pub fn validate_export(criteria: &FilterCriteria) -> Result<DateRange> {
    let range = criteria.date_range.ok_or(FilterError::MissingDateRange)?;
    if range.start > range.end {
        return Err(FilterError::InvalidDateRange {
            start: range.start,
            end: range.end,
        }
        .into());
    }
    Ok(range)
}

/// Serializes `records` as comma-separated text: a header row of column
/// labels, then one line per record in column order.
///
/// Amounts are plain decimals and dates are day-first. Values containing
/// the delimiter, quotes or newlines are quoted.
pub fn export_payload<R: ReportRecord>(records: &[R], scope: ExportScope) -> Result<ExportPayload> {
    let mut writer = WriterBuilder::new()
        .delimiter(b',')
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    let columns = R::columns();
    writer.write_record(columns.iter().map(|column| column.label()))?;
    for record in records {
        writer.write_record(
            columns
                .iter()
                .map(|column| record.column_value(*column).unwrap_or_default()),
        )?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| Error::Export(e.to_string()))?;
    let content = String::from_utf8(bytes).map_err(|e| Error::Export(e.to_string()))?;

    Ok(ExportPayload {
        kind: R::KIND,
        scope,
        mime_type: EXPORT_MIME_TYPE.to_string(),
        content,
        row_count: records.len(),
    })
}

/// Validates `criteria`, picks the rows for `scope`, and serializes them.
///
/// `Filtered` exports the result of [`apply_all`]; `All` exports `records`
/// untouched, ignoring every active filter. Nothing is produced when
/// validation fails.
pub fn export_report<R: ReportRecord>(
    records: &[R],
    criteria: &FilterCriteria,
    scope: ExportScope,
) -> Result<ExportPayload> {
    validate_export(criteria)?;
    let payload = match scope {
        ExportScope::Filtered => export_payload(&apply_all(records, criteria)?, scope)?,
        ExportScope::All => export_payload(records, scope)?,
    };
    log::info!(
        "Exported {} {:?} row(s) with scope '{}'",
        payload.row_count,
        R::KIND,
        scope
    );
    Ok(payload)
}
