//! Goal-change notification preview models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The editable fields of a goal, as seen before or after a parent's edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalEditSnapshot {
    pub goal_name: String,
    /// Display text, e.g. `S$150`. Compared verbatim.
    pub target_amount: String,
    pub target_end_date: NaiveDate,
}

/// Field that differs between two snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GoalField {
    GoalName,
    TargetAmount,
    TargetEndDate,
}

impl GoalField {
    pub fn description(&self) -> &'static str {
        match self {
            GoalField::GoalName => "goal name",
            GoalField::TargetAmount => "target amount",
            GoalField::TargetEndDate => "end date",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalFieldChange {
    pub field: GoalField,
    pub previous: String,
    pub current: String,
}

/// Preview of the push message a child would receive. Never delivered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPreview {
    pub message: String,
    pub changes: Vec<GoalFieldChange>,
}

impl NotificationPreview {
    pub fn has_changes(&self) -> bool {
        !self.changes.is_empty()
    }
}
