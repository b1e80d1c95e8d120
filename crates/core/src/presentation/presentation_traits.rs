use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::export::ExportPayload;
use crate::goals::{GoalActivityRecord, GoalStatusRecord};

/// The two dashboard tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReportTab {
    #[default]
    Status,
    Activity,
}

impl ReportTab {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "status" | "goals status" | "goal_status" => Some(ReportTab::Status),
            "activity" | "goals activity" | "goal_activity" => Some(ReportTab::Activity),
            _ => None,
        }
    }
}

/// Rendering surface for the dashboard: tables, inline errors, and the
/// download hand-off.
pub trait ReportView {
    fn render_status_table(&mut self, rows: &[GoalStatusRecord]);
    fn render_activity_table(&mut self, rows: &[GoalActivityRecord]);
    fn show_error(&mut self, message: &str);
    fn clear_error(&mut self);

    /// Hands a payload to the export sink under `file_name`.
    fn offer_download(&mut self, file_name: &str, payload: &ExportPayload) -> Result<()>;
}
