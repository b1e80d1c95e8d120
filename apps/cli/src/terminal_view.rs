//! Terminal rendering of the dashboard: comfy-table tables, inline errors on
//! stderr, and exports written into the export directory.

use std::fs;
use std::io::{self, Stderr, Stdout, Write};
use std::path::{Path, PathBuf};

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};
use goalboard_core::errors::Result;
use goalboard_core::export::ExportPayload;
use goalboard_core::filters::{Column, ReportRecord};
use goalboard_core::goals::{GoalActivityRecord, GoalStatusRecord};
use goalboard_core::presentation::ReportView;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    #[default]
    Table,
    Json,
    /// Renders nothing; used when only the export file matters.
    Silent,
}

pub struct TerminalView<W: Write = Stdout, E: Write = Stderr> {
    out: W,
    err: E,
    mode: OutputMode,
    export_dir: PathBuf,
    last_error: Option<String>,
    last_export: Option<PathBuf>,
}

impl TerminalView {
    pub fn stdio(export_dir: impl Into<PathBuf>, mode: OutputMode) -> Self {
        Self::new(io::stdout(), io::stderr(), export_dir, mode)
    }
}

impl<W: Write, E: Write> TerminalView<W, E> {
    pub fn new(out: W, err: E, export_dir: impl Into<PathBuf>, mode: OutputMode) -> Self {
        Self {
            out,
            err,
            mode,
            export_dir: export_dir.into(),
            last_error: None,
            last_export: None,
        }
    }

    /// The error currently shown, if any.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Path of the most recent file written by an export.
    pub fn last_export(&self) -> Option<&Path> {
        self.last_export.as_deref()
    }

    #[cfg(test)]
    pub fn into_writers(self) -> (W, E) {
        (self.out, self.err)
    }

    fn render<R: ReportRecord + Serialize>(&mut self, title: &str, rows: &[R]) {
        let written = match self.mode {
            OutputMode::Table => {
                let table = build_table(rows);
                writeln!(self.out, "{} ({} rows)", title, rows.len())
                    .and_then(|_| writeln!(self.out, "{table}"))
            }
            OutputMode::Json => serde_json::to_writer_pretty(&mut self.out, rows)
                .map_err(io::Error::from)
                .and_then(|_| writeln!(self.out)),
            OutputMode::Silent => Ok(()),
        };
        if let Err(err) = written {
            tracing::warn!("Failed to write {} table: {}", title, err);
        }
    }
}

impl<W: Write, E: Write> ReportView for TerminalView<W, E> {
    fn render_status_table(&mut self, rows: &[GoalStatusRecord]) {
        self.render("Goals Status", rows);
    }

    fn render_activity_table(&mut self, rows: &[GoalActivityRecord]) {
        self.render("Goals Activity", rows);
    }

    fn show_error(&mut self, message: &str) {
        if let Err(err) = writeln!(self.err, "error: {message}") {
            tracing::warn!("Failed to write error message: {}", err);
        }
        self.last_error = Some(message.to_string());
    }

    fn clear_error(&mut self) {
        self.last_error = None;
    }

    fn offer_download(&mut self, file_name: &str, payload: &ExportPayload) -> Result<()> {
        fs::create_dir_all(&self.export_dir)?;
        let path = self.export_dir.join(file_name);
        fs::write(&path, payload.content.as_bytes())?;
        tracing::info!(
            "Wrote {} rows ({}) to {}",
            payload.row_count,
            payload.mime_type,
            path.display()
        );
        writeln!(
            self.out,
            "Exported {} rows to {}",
            payload.row_count,
            path.display()
        )?;
        self.last_export = Some(path);
        Ok(())
    }
}

/// Builds a table with one column per record column, in export order.
pub fn build_table<R: ReportRecord>(rows: &[R]) -> Table {
    let columns = R::columns();
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(
        columns
            .iter()
            .map(|column| Cell::new(column.label()).add_attribute(Attribute::Bold)),
    );
    for row in rows {
        table.add_row(columns.iter().map(|column| {
            let cell = Cell::new(row.column_value(*column).unwrap_or_default());
            if is_amount(*column) {
                cell.set_alignment(CellAlignment::Right)
            } else {
                cell
            }
        }));
    }
    table
}

fn is_amount(column: Column) -> bool {
    matches!(
        column,
        Column::CurrentAmountAllocated
            | Column::TargetAmount
            | Column::AmountAllocated
            | Column::AmountPostAllocation
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use goalboard_core::export::ExportScope;
    use goalboard_core::filters::ReportKind;
    use goalboard_core::goals::ProgressStatus;
    use rust_decimal_macros::dec;

    fn record() -> GoalStatusRecord {
        GoalStatusRecord {
            child_id: "C001".to_string(),
            nickname: "Tobi".to_string(),
            access_level: "Full".to_string(),
            parent_id: "P-1001".to_string(),
            parent_username: "JohnDoe".to_string(),
            goal_name: "New Bike".to_string(),
            current_amount_allocated: dec!(50.00),
            target_amount: dec!(200.00),
            created_date: NaiveDate::from_ymd_opt(2026, 1, 8).unwrap(),
            target_end_date: None,
            actual_end_date: None,
            progress_status: ProgressStatus::Active,
        }
    }

    fn view(dir: &Path, mode: OutputMode) -> TerminalView<Vec<u8>, Vec<u8>> {
        TerminalView::new(Vec::new(), Vec::new(), dir, mode)
    }

    #[test]
    fn test_table_shows_labels_and_values() {
        let dir = tempfile::tempdir().unwrap();
        let mut view = view(dir.path(), OutputMode::Table);
        view.render_status_table(&[record()]);

        let (out, _) = view.into_writers();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Goals Status (1 rows)"));
        assert!(text.contains("Child ID"));
        assert!(text.contains("New Bike"));
        assert!(text.contains("08-01-2026"));
    }

    #[test]
    fn test_json_mode_writes_camel_case_rows() {
        let dir = tempfile::tempdir().unwrap();
        let mut view = view(dir.path(), OutputMode::Json);
        view.render_status_table(&[record()]);

        let (out, _) = view.into_writers();
        let rows: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(rows[0]["childId"], "C001");
        assert_eq!(rows[0]["progressStatus"], "Active");
        assert_eq!(rows[0]["targetAmount"], "200.00");
    }

    #[test]
    fn test_errors_go_to_stderr_and_clear() {
        let dir = tempfile::tempdir().unwrap();
        let mut view = view(dir.path(), OutputMode::Table);
        view.show_error("Start date is after end date");
        assert_eq!(view.last_error(), Some("Start date is after end date"));
        view.clear_error();
        assert_eq!(view.last_error(), None);

        let (out, err) = view.into_writers();
        assert!(out.is_empty());
        assert_eq!(
            String::from_utf8(err).unwrap(),
            "error: Start date is after end date\n"
        );
    }

    #[test]
    fn test_offer_download_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let export_dir = dir.path().join("exports");
        let mut view = view(&export_dir, OutputMode::Table);
        let payload = ExportPayload {
            kind: ReportKind::GoalStatus,
            scope: ExportScope::Filtered,
            mime_type: "text/csv".to_string(),
            content: "Child ID\nC001\n".to_string(),
            row_count: 1,
        };

        view.offer_download("goal_status_filtered_20260120_143000.csv", &payload)
            .unwrap();

        let path = export_dir.join("goal_status_filtered_20260120_143000.csv");
        assert_eq!(view.last_export(), Some(path.as_path()));
        assert_eq!(fs::read_to_string(&path).unwrap(), "Child ID\nC001\n");
    }
}
