//! Goal reporting domain models.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::{Result, ValidationError};

/// Lifecycle state of a goal. Closed set of six values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ProgressStatus {
    Active,
    Completed,
    PendingApproval,
    Cancelled,
    Rejected,
    Expired,
}

impl ProgressStatus {
    pub const ALL: [ProgressStatus; 6] = [
        ProgressStatus::Active,
        ProgressStatus::Completed,
        ProgressStatus::PendingApproval,
        ProgressStatus::Cancelled,
        ProgressStatus::Rejected,
        ProgressStatus::Expired,
    ];

    /// Human-readable label, as shown in the dashboard and written to exports.
    pub fn label(&self) -> &'static str {
        match self {
            ProgressStatus::Active => "Active",
            ProgressStatus::Completed => "Completed",
            ProgressStatus::PendingApproval => "Pending Approval",
            ProgressStatus::Cancelled => "Cancelled",
            ProgressStatus::Rejected => "Rejected",
            ProgressStatus::Expired => "Expired",
        }
    }

    /// Parses a status name, ignoring case, spaces, `_` and `-`.
    /// Returns `None` for anything outside the closed set.
    pub fn parse(value: &str) -> Option<Self> {
        let key: String = value
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .flat_map(char::to_lowercase)
            .collect();
        match key.as_str() {
            "active" => Some(ProgressStatus::Active),
            "completed" => Some(ProgressStatus::Completed),
            "pendingapproval" => Some(ProgressStatus::PendingApproval),
            "cancelled" | "canceled" => Some(ProgressStatus::Cancelled),
            "rejected" => Some(ProgressStatus::Rejected),
            "expired" => Some(ProgressStatus::Expired),
            _ => None,
        }
    }

    /// Terminal statuses are the only ones that carry an actual end date.
    pub fn is_terminal(&self) -> bool {
        !matches!(
            self,
            ProgressStatus::Active | ProgressStatus::PendingApproval
        )
    }
}

impl fmt::Display for ProgressStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of the "Goals Status" tab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalStatusRecord {
    pub child_id: String,
    pub nickname: String,
    pub access_level: String,
    pub parent_id: String,
    pub parent_username: String,
    pub goal_name: String,
    pub current_amount_allocated: Decimal,
    pub target_amount: Decimal,
    pub created_date: NaiveDate,
    pub target_end_date: Option<NaiveDate>,
    pub actual_end_date: Option<NaiveDate>,
    pub progress_status: ProgressStatus,
}

impl GoalStatusRecord {
    /// Checks the amount and end-date invariants of a loaded record.
    pub fn validate(&self) -> Result<()> {
        if self.current_amount_allocated.is_sign_negative() {
            return Err(ValidationError::AmountOutOfRange {
                field: "currentAmountAllocated",
                amount: self.current_amount_allocated.to_string(),
            }
            .into());
        }
        if self.target_amount <= Decimal::ZERO {
            return Err(ValidationError::AmountOutOfRange {
                field: "targetAmount",
                amount: self.target_amount.to_string(),
            }
            .into());
        }
        if let Some(end) = self.actual_end_date {
            if !self.progress_status.is_terminal() {
                return Err(ValidationError::UnexpectedEndDate(end).into());
            }
        }
        Ok(())
    }
}

/// One row of the "Goals Activity" tab: a single allocation transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalActivityRecord {
    pub transaction_date_time: NaiveDateTime,
    pub child_id: String,
    pub nickname: String,
    pub child_access: String,
    pub parent_id: String,
    pub parent_username: String,
    pub goal_name: String,
    /// Signed; reversals are negative.
    pub amount_allocated: Decimal,
    /// Running balance after this transaction. Not reconciled here.
    pub amount_post_allocation: Decimal,
}
