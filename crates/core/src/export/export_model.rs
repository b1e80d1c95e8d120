//! Export domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::filters::ReportKind;
use crate::utils::time_utils::export_timestamp;

/// Whether an export serializes the filtered subset or the whole table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExportScope {
    Filtered,
    All,
}

impl ExportScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportScope::Filtered => "filtered",
            ExportScope::All => "all",
        }
    }
}

impl fmt::Display for ExportScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A serialized export, ready to hand to a download sink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportPayload {
    pub kind: ReportKind,
    pub scope: ExportScope,
    pub mime_type: String,
    /// Comma-separated text with a header row.
    pub content: String,
    /// Data rows, excluding the header.
    pub row_count: usize,
}

impl ExportPayload {
    /// e.g. `goal_status_filtered_20260120_143000.csv`
    pub fn file_name(&self, now: NaiveDateTime) -> String {
        format!(
            "{}_{}_{}.csv",
            self.kind.file_stem(),
            self.scope.as_str(),
            export_timestamp(now)
        )
    }
}
