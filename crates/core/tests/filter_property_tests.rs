//! Property-based integration tests for the filter pipeline.
//!
//! These tests verify that the pipeline's guarantees hold across randomly
//! generated record sets, using the `proptest` crate.

use chrono::{NaiveDate, NaiveDateTime};
use goalboard_core::filters::{
    filter_date_range, filter_keyword, filter_status_set, sort_by_date_time_descending, Column,
    DateField,
};
use goalboard_core::goals::{GoalActivityRecord, GoalStatusRecord, ProgressStatus};
use proptest::prelude::*;
use rust_decimal::Decimal;

// =============================================================================
// Generators
// =============================================================================

fn arb_status() -> impl Strategy<Value = ProgressStatus> {
    prop_oneof![
        Just(ProgressStatus::Active),
        Just(ProgressStatus::Completed),
        Just(ProgressStatus::PendingApproval),
        Just(ProgressStatus::Cancelled),
        Just(ProgressStatus::Rejected),
        Just(ProgressStatus::Expired),
    ]
}

/// Days since 2025-01-01, spanning roughly two years.
fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (0u64..730).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2025, 1, 1)
            .unwrap()
            .checked_add_days(chrono::Days::new(offset))
            .unwrap()
    })
}

fn arb_date_time() -> impl Strategy<Value = NaiveDateTime> {
    (arb_date(), 0u32..24, 0u32..60, 0u32..60)
        .prop_map(|(date, h, m, s)| date.and_hms_opt(h, m, s).unwrap())
}

fn arb_status_record() -> impl Strategy<Value = GoalStatusRecord> {
    (
        "C-[0-9]{3}",           // child_id
        "[A-Za-z ]{3,12}",      // goal_name
        "[A-Za-z]{3,10}",       // parent_username
        0i64..100_000,          // current amount, cents
        arb_date(),             // created_date
        arb_status(),
    )
        .prop_map(
            |(child_id, goal_name, parent_username, cents, created_date, status)| {
                GoalStatusRecord {
                    child_id,
                    nickname: "Kid".to_string(),
                    access_level: "Full".to_string(),
                    parent_id: "P-1".to_string(),
                    parent_username,
                    goal_name,
                    current_amount_allocated: Decimal::new(cents, 2),
                    target_amount: Decimal::new(cents + 1, 2),
                    created_date,
                    target_end_date: None,
                    actual_end_date: None,
                    progress_status: status,
                }
            },
        )
}

fn arb_activity_record() -> impl Strategy<Value = GoalActivityRecord> {
    ("C-[0-9]{2}", arb_date_time(), -5_000i64..5_000).prop_map(|(child_id, at, cents)| {
        GoalActivityRecord {
            transaction_date_time: at,
            child_id,
            nickname: "Kid".to_string(),
            child_access: "Full".to_string(),
            parent_id: "P-1".to_string(),
            parent_username: "JaneSmith".to_string(),
            goal_name: "Laptop".to_string(),
            amount_allocated: Decimal::new(cents, 2),
            amount_post_allocation: Decimal::new(cents, 2),
        }
    })
}

const SEARCH: [Column; 3] = [Column::GoalName, Column::ChildId, Column::ParentUsername];

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Filtering by the same keyword twice gives the same rows as once.
    #[test]
    fn prop_keyword_filter_is_idempotent(
        records in proptest::collection::vec(arb_status_record(), 0..40),
        keyword in "[a-zA-Z0-9-]{0,3}",
    ) {
        let once = filter_keyword(&records, &SEARCH, &keyword);
        let twice = filter_keyword(&once, &SEARCH, &keyword);
        prop_assert_eq!(once, twice);
    }

    /// The empty keyword returns the input unchanged.
    #[test]
    fn prop_empty_keyword_is_identity(
        records in proptest::collection::vec(arb_status_record(), 0..40),
    ) {
        prop_assert_eq!(filter_keyword(&records, &SEARCH, ""), records);
    }

    /// Keyword matching ignores case.
    #[test]
    fn prop_keyword_case_insensitive(
        records in proptest::collection::vec(arb_status_record(), 0..40),
        keyword in "[a-z]{1,3}",
    ) {
        let lower = filter_keyword(&records, &SEARCH, &keyword);
        let upper = filter_keyword(&records, &SEARCH, &keyword.to_uppercase());
        prop_assert_eq!(lower, upper);
    }

    /// Every kept row is inside the bounds; every dropped row is outside.
    #[test]
    fn prop_date_range_partitions_records(
        records in proptest::collection::vec(arb_activity_record(), 0..40),
        a in arb_date(),
        b in arb_date(),
    ) {
        let (start, end) = if a <= b { (a, b) } else { (b, a) };
        let kept = filter_date_range(&records, DateField::TransactionDateTime, start, end).unwrap();

        for record in &kept {
            let day = record.transaction_date_time.date();
            prop_assert!(start <= day && day <= end);
        }
        for record in records.iter().filter(|r| !kept.contains(r)) {
            let day = record.transaction_date_time.date();
            prop_assert!(day < start || day > end);
        }
    }

    /// An inverted range is always an error.
    #[test]
    fn prop_inverted_range_fails(
        records in proptest::collection::vec(arb_status_record(), 0..10),
        a in arb_date(),
        b in arb_date(),
    ) {
        prop_assume!(a != b);
        let (start, end) = if a > b { (a, b) } else { (b, a) };
        prop_assert!(filter_date_range(&records, DateField::CreatedDate, start, end).is_err());
    }

    /// A non-empty selection keeps exactly the records whose status was
    /// selected, and unknown names never widen the result.
    #[test]
    fn prop_status_selection_membership(
        records in proptest::collection::vec(arb_status_record(), 0..40),
        selected in proptest::collection::vec(arb_status(), 1..4),
    ) {
        let mut names: Vec<String> = selected.iter().map(|s| s.label().to_string()).collect();
        names.push("Archived".to_string());

        let kept = filter_status_set(&records, &names);
        for record in &kept {
            prop_assert!(selected.contains(&record.progress_status));
        }
        let expected = records
            .iter()
            .filter(|r| selected.contains(&r.progress_status))
            .count();
        prop_assert_eq!(kept.len(), expected);
    }

    /// Sorting is latest-first and sorting again changes nothing.
    #[test]
    fn prop_sort_descending_and_stable(
        records in proptest::collection::vec(arb_activity_record(), 0..40),
    ) {
        let sorted = sort_by_date_time_descending(records, DateField::TransactionDateTime);
        for pair in sorted.windows(2) {
            prop_assert!(pair[0].transaction_date_time >= pair[1].transaction_date_time);
        }
        let again = sort_by_date_time_descending(sorted.clone(), DateField::TransactionDateTime);
        prop_assert_eq!(again, sorted);
    }
}
