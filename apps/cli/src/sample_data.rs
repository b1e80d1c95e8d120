//! Built-in records served when no data directory is configured.
//!
//! Dates are laid out relative to `today` so the default 30-day range always
//! shows a useful slice, with a few older rows just outside it.

use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime};
use goalboard_core::goals::{
    GoalActivityRecord, GoalStatusRecord, InMemoryGoalSource, ProgressStatus,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

pub fn sample_source(today: NaiveDate) -> InMemoryGoalSource {
    InMemoryGoalSource::new(status_records(today), activity_records(today))
}

fn days_ago(today: NaiveDate, days: u64) -> NaiveDate {
    today.checked_sub_days(Days::new(days)).unwrap_or(today)
}

fn days_ahead(today: NaiveDate, days: u64) -> NaiveDate {
    today.checked_add_days(Days::new(days)).unwrap_or(today)
}

fn at(date: NaiveDate, hour: u32, minute: u32) -> NaiveDateTime {
    date.and_hms_opt(hour, minute, 0)
        .unwrap_or_else(|| date.and_time(NaiveTime::MIN))
}

#[allow(clippy::too_many_arguments)]
fn status(
    child_id: &str,
    nickname: &str,
    parent: (&str, &str),
    goal_name: &str,
    current: Decimal,
    target: Decimal,
    created: NaiveDate,
    target_end: Option<NaiveDate>,
    actual_end: Option<NaiveDate>,
    progress_status: ProgressStatus,
) -> GoalStatusRecord {
    GoalStatusRecord {
        child_id: child_id.to_string(),
        nickname: nickname.to_string(),
        access_level: "Full".to_string(),
        parent_id: parent.0.to_string(),
        parent_username: parent.1.to_string(),
        goal_name: goal_name.to_string(),
        current_amount_allocated: current,
        target_amount: target,
        created_date: created,
        target_end_date: target_end,
        actual_end_date: actual_end,
        progress_status,
    }
}

fn status_records(today: NaiveDate) -> Vec<GoalStatusRecord> {
    let john = ("P-1001", "JohnDoe");
    let jane = ("P-1002", "JaneSmith");
    vec![
        status(
            "C001",
            "Tobi",
            john,
            "New Bike",
            dec!(50.00),
            dec!(200.00),
            days_ago(today, 12),
            Some(days_ahead(today, 90)),
            None,
            ProgressStatus::Active,
        ),
        status(
            "C002",
            "Mila",
            jane,
            "Laptop",
            dec!(1000.00),
            dec!(1000.00),
            days_ago(today, 26),
            Some(days_ago(today, 2)),
            Some(days_ago(today, 3)),
            ProgressStatus::Completed,
        ),
        status(
            "C003",
            "Leo",
            john,
            "Skateboard",
            dec!(10.00),
            dec!(80.00),
            days_ago(today, 4),
            Some(days_ahead(today, 45)),
            None,
            ProgressStatus::PendingApproval,
        ),
        status(
            "C004",
            "Ava",
            jane,
            "Concert Tickets",
            dec!(35.50),
            dec!(120.00),
            days_ago(today, 18),
            Some(days_ago(today, 1)),
            Some(days_ago(today, 1)),
            ProgressStatus::Expired,
        ),
        status(
            "C005",
            "Noah",
            ("P-1003", "SamLee"),
            "Video Game",
            dec!(0.00),
            dec!(60.00),
            days_ago(today, 45),
            Some(days_ago(today, 10)),
            Some(days_ago(today, 40)),
            ProgressStatus::Cancelled,
        ),
    ]
}

fn activity(
    at_time: NaiveDateTime,
    child: (&str, &str),
    parent: (&str, &str),
    goal_name: &str,
    allocated: Decimal,
    post_allocation: Decimal,
) -> GoalActivityRecord {
    GoalActivityRecord {
        transaction_date_time: at_time,
        child_id: child.0.to_string(),
        nickname: child.1.to_string(),
        child_access: "Full".to_string(),
        parent_id: parent.0.to_string(),
        parent_username: parent.1.to_string(),
        goal_name: goal_name.to_string(),
        amount_allocated: allocated,
        amount_post_allocation: post_allocation,
    }
}

fn activity_records(today: NaiveDate) -> Vec<GoalActivityRecord> {
    let alex = ("C-8821", "Alex");
    let mila = ("C-8822", "Mila");
    let john = ("P-1001", "JohnDoe");
    let jane = ("P-1002", "JaneSmith");
    vec![
        activity(
            at(days_ago(today, 20), 9, 15),
            alex,
            john,
            "New Bike",
            dec!(20.00),
            dec!(20.00),
        ),
        activity(
            at(days_ago(today, 6), 14, 30),
            alex,
            john,
            "New Bike",
            dec!(30.00),
            dec!(50.00),
        ),
        activity(
            at(days_ago(today, 6), 16, 5),
            alex,
            john,
            "New Bike",
            dec!(-5.00),
            dec!(45.00),
        ),
        activity(
            at(days_ago(today, 1), 18, 45),
            mila,
            jane,
            "Laptop",
            dec!(150.00),
            dec!(1000.00),
        ),
        activity(
            at(days_ago(today, 60), 11, 0),
            mila,
            jane,
            "Laptop",
            dec!(100.00),
            dec!(850.00),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_records_pass_validation() {
        let today = NaiveDate::from_ymd_opt(2026, 1, 20).unwrap();
        for record in status_records(today) {
            assert!(record.validate().is_ok(), "{}", record.child_id);
        }
    }

    #[test]
    fn test_sample_spans_default_range_boundary() {
        let today = NaiveDate::from_ymd_opt(2026, 1, 20).unwrap();
        let start = days_ago(today, 30);
        let activity = activity_records(today);
        assert!(activity
            .iter()
            .any(|r| r.transaction_date_time.date() < start));
        assert!(activity
            .iter()
            .any(|r| r.transaction_date_time.date() >= start));
    }
}
