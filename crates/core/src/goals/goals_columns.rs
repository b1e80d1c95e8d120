//! Column access for the goal report tables.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;

use crate::filters::{Column, DateField, ReportKind, ReportRecord};
use crate::goals::goals_model::{GoalActivityRecord, GoalStatusRecord, ProgressStatus};
use crate::utils::time_utils::{format_day_first_date, format_day_first_datetime};

const STATUS_COLUMNS: [Column; 12] = [
    Column::ChildId,
    Column::Nickname,
    Column::AccessLevel,
    Column::ParentId,
    Column::ParentUsername,
    Column::GoalName,
    Column::CurrentAmountAllocated,
    Column::TargetAmount,
    Column::CreatedDate,
    Column::TargetEndDate,
    Column::ActualEndDate,
    Column::ProgressStatus,
];

const ACTIVITY_COLUMNS: [Column; 9] = [
    Column::TransactionDateTime,
    Column::ChildId,
    Column::Nickname,
    Column::ChildAccess,
    Column::ParentId,
    Column::ParentUsername,
    Column::GoalName,
    Column::AmountAllocated,
    Column::AmountPostAllocation,
];

const SEARCH_COLUMNS: [Column; 5] = [
    Column::GoalName,
    Column::ChildId,
    Column::ParentUsername,
    Column::Nickname,
    Column::ParentId,
];

fn amount_text(amount: Decimal) -> String {
    amount.to_string()
}

fn optional_date_text(date: Option<NaiveDate>) -> String {
    date.map(format_day_first_date).unwrap_or_default()
}

fn at_midnight(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

impl ReportRecord for GoalStatusRecord {
    const KIND: ReportKind = ReportKind::GoalStatus;
    const CARRIES_STATUS: bool = true;

    fn columns() -> &'static [Column] {
        &STATUS_COLUMNS
    }

    fn default_search_columns() -> &'static [Column] {
        &SEARCH_COLUMNS
    }

    fn default_date_field() -> DateField {
        DateField::CreatedDate
    }

    fn column_value(&self, column: Column) -> Option<String> {
        let value = match column {
            Column::ChildId => self.child_id.clone(),
            Column::Nickname => self.nickname.clone(),
            Column::AccessLevel => self.access_level.clone(),
            Column::ParentId => self.parent_id.clone(),
            Column::ParentUsername => self.parent_username.clone(),
            Column::GoalName => self.goal_name.clone(),
            Column::CurrentAmountAllocated => amount_text(self.current_amount_allocated),
            Column::TargetAmount => amount_text(self.target_amount),
            Column::CreatedDate => format_day_first_date(self.created_date),
            Column::TargetEndDate => optional_date_text(self.target_end_date),
            Column::ActualEndDate => optional_date_text(self.actual_end_date),
            Column::ProgressStatus => self.progress_status.label().to_string(),
            Column::TransactionDateTime
            | Column::ChildAccess
            | Column::AmountAllocated
            | Column::AmountPostAllocation => return None,
        };
        Some(value)
    }

    fn date_time_value(&self, field: DateField) -> Option<NaiveDateTime> {
        match field {
            DateField::CreatedDate => Some(at_midnight(self.created_date)),
            DateField::TargetEndDate => self.target_end_date.map(at_midnight),
            DateField::ActualEndDate => self.actual_end_date.map(at_midnight),
            DateField::TransactionDateTime => None,
        }
    }

    fn progress_status(&self) -> Option<ProgressStatus> {
        Some(self.progress_status)
    }
}

impl ReportRecord for GoalActivityRecord {
    const KIND: ReportKind = ReportKind::GoalActivity;

    fn columns() -> &'static [Column] {
        &ACTIVITY_COLUMNS
    }

    fn default_search_columns() -> &'static [Column] {
        &SEARCH_COLUMNS
    }

    fn default_date_field() -> DateField {
        DateField::TransactionDateTime
    }

    fn column_value(&self, column: Column) -> Option<String> {
        let value = match column {
            Column::TransactionDateTime => format_day_first_datetime(self.transaction_date_time),
            Column::ChildId => self.child_id.clone(),
            Column::Nickname => self.nickname.clone(),
            Column::ChildAccess => self.child_access.clone(),
            Column::ParentId => self.parent_id.clone(),
            Column::ParentUsername => self.parent_username.clone(),
            Column::GoalName => self.goal_name.clone(),
            Column::AmountAllocated => amount_text(self.amount_allocated),
            Column::AmountPostAllocation => amount_text(self.amount_post_allocation),
            Column::AccessLevel
            | Column::CurrentAmountAllocated
            | Column::TargetAmount
            | Column::CreatedDate
            | Column::TargetEndDate
            | Column::ActualEndDate
            | Column::ProgressStatus => return None,
        };
        Some(value)
    }

    fn date_time_value(&self, field: DateField) -> Option<NaiveDateTime> {
        match field {
            DateField::TransactionDateTime => Some(self.transaction_date_time),
            _ => None,
        }
    }
}
