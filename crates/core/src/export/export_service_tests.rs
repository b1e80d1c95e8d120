#[cfg(test)]
mod tests {
    use crate::errors::Error;
    use crate::export::*;
    use crate::filters::{DateRange, FilterCriteria, FilterError, ReportKind};
    use crate::goals::{GoalActivityRecord, GoalStatusRecord, ProgressStatus};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn status_record(child_id: &str, goal_name: &str, status: ProgressStatus) -> GoalStatusRecord {
        GoalStatusRecord {
            child_id: child_id.to_string(),
            nickname: "Tobi".to_string(),
            access_level: "Full".to_string(),
            parent_id: "P-01".to_string(),
            parent_username: "JohnDoe".to_string(),
            goal_name: goal_name.to_string(),
            current_amount_allocated: dec!(1234.50),
            target_amount: dec!(2000),
            created_date: date(2026, 1, 15),
            target_end_date: Some(date(2026, 6, 1)),
            actual_end_date: None,
            progress_status: status,
        }
    }

    fn scenario_records() -> Vec<GoalStatusRecord> {
        vec![
            status_record("C-001", "New Bike", ProgressStatus::Active),
            status_record("C-002", "Lego Set", ProgressStatus::Completed),
        ]
    }

    const STATUS_HEADER: &str = "Child ID,Nickname,Access Level,Parent ID,Parent Username,\
Goal Name,Current Amount Allocated,Target Amount,Created Date,Target End Date,\
Actual End Date,Progress Status";

    // ============================================================================
    // validate_export Tests
    // ============================================================================

    #[test]
    fn test_validate_export_requires_date_range() {
        let criteria = FilterCriteria::default();
        assert!(matches!(
            validate_export(&criteria),
            Err(Error::Filter(FilterError::MissingDateRange))
        ));
    }

    #[test]
    fn test_validate_export_accepts_ordered_range() {
        let criteria = FilterCriteria::with_date_range((date(2026, 1, 1), date(2026, 1, 31)));
        assert_eq!(
            validate_export(&criteria).unwrap(),
            DateRange::new(date(2026, 1, 1), date(2026, 1, 31))
        );
    }

    #[test]
    fn test_missing_range_blocks_both_scopes() {
        let records = scenario_records();
        let criteria = FilterCriteria::default();
        for scope in [ExportScope::Filtered, ExportScope::All] {
            assert!(matches!(
                export_report(&records, &criteria, scope),
                Err(Error::Filter(FilterError::MissingDateRange))
            ));
        }
    }

    #[test]
    fn test_inverted_range_blocks_both_scopes() {
        let records = scenario_records();
        let criteria = FilterCriteria::with_date_range((date(2026, 2, 1), date(2026, 1, 1)));
        assert_eq!(
            validate_export(&criteria).unwrap_err().to_string(),
            "Filter error: Invalid date range: start 2026-02-01 is after end 2026-01-01"
        );
        for scope in [ExportScope::Filtered, ExportScope::All] {
            assert!(matches!(
                export_report(&records, &criteria, scope),
                Err(Error::Filter(FilterError::InvalidDateRange { .. }))
            ));
        }
    }

    #[test]
    fn test_single_day_range_is_valid() {
        let criteria = FilterCriteria::with_date_range((date(2026, 1, 15), date(2026, 1, 15)));
        let payload = export_report(&scenario_records(), &criteria, ExportScope::All).unwrap();
        assert_eq!(payload.row_count, 2);
    }

    // ============================================================================
    // export_payload Tests
    // ============================================================================

    #[test]
    fn test_payload_has_header_and_one_line_per_record() {
        let records = scenario_records();
        let payload = export_payload(&records, ExportScope::Filtered).unwrap();

        let lines: Vec<&str> = payload.content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], STATUS_HEADER);
        assert_eq!(
            lines[1],
            "C-001,Tobi,Full,P-01,JohnDoe,New Bike,1234.50,2000,15-01-2026,01-06-2026,,Active"
        );
        assert_eq!(payload.mime_type, "text/csv");
        assert_eq!(payload.row_count, 2);
        assert_eq!(payload.kind, ReportKind::GoalStatus);
    }

    #[test]
    fn test_payload_quotes_values_with_delimiters() {
        let records = vec![status_record("C-009", "Bike, red", ProgressStatus::Active)];
        let payload = export_payload(&records, ExportScope::Filtered).unwrap();
        assert!(payload.content.contains("\"Bike, red\""));
    }

    #[test]
    fn test_empty_subset_exports_header_only() {
        let records: Vec<GoalStatusRecord> = Vec::new();
        let payload = export_payload(&records, ExportScope::Filtered).unwrap();
        assert_eq!(payload.content, format!("{}\n", STATUS_HEADER));
        assert_eq!(payload.row_count, 0);
    }

    #[test]
    fn test_activity_payload_uses_activity_columns() {
        let records = vec![GoalActivityRecord {
            transaction_date_time: date(2026, 1, 20).and_hms_opt(14, 30, 0).unwrap(),
            child_id: "C-8821".to_string(),
            nickname: "Alex".to_string(),
            child_access: "Full".to_string(),
            parent_id: "P-9".to_string(),
            parent_username: "JaneSmith".to_string(),
            goal_name: "New Bike".to_string(),
            amount_allocated: dec!(50.00),
            amount_post_allocation: dec!(150.00),
        }];
        let payload = export_payload(&records, ExportScope::All).unwrap();
        let lines: Vec<&str> = payload.content.lines().collect();
        assert_eq!(
            lines[0],
            "Transaction Date & Time,Child ID,Nickname,Child Access,Parent ID,\
Parent Username,Goal Name,Amount Allocated,Amount Post Allocation"
        );
        assert_eq!(
            lines[1],
            "20-01-2026 14:30:00,C-8821,Alex,Full,P-9,JaneSmith,New Bike,50.00,150.00"
        );
    }

    // ============================================================================
    // export_report Tests
    // ============================================================================

    #[test]
    fn test_export_all_ignores_active_filters() {
        let records = scenario_records();
        let mut criteria = FilterCriteria::with_date_range((date(2030, 1, 1), date(2030, 1, 2)));
        criteria.keyword = "bike".to_string();
        criteria.statuses = vec!["Active".to_string()];

        let payload = export_report(&records, &criteria, ExportScope::All).unwrap();
        assert_eq!(payload.row_count, 2);
        assert_eq!(payload.content.lines().count(), 3);
        assert!(payload.content.contains("Lego Set"));
    }

    #[test]
    fn test_export_filtered_applies_criteria() {
        let records = scenario_records();
        let mut criteria = FilterCriteria::with_date_range((date(2026, 1, 1), date(2026, 1, 31)));
        criteria.keyword = "bike".to_string();

        let payload = export_report(&records, &criteria, ExportScope::Filtered).unwrap();
        assert_eq!(payload.row_count, 1);
        assert!(payload.content.contains("New Bike"));
        assert!(!payload.content.contains("Lego Set"));
    }

    #[test]
    fn test_export_filtered_propagates_invalid_range() {
        let records = scenario_records();
        let criteria = FilterCriteria::with_date_range((date(2026, 2, 1), date(2026, 1, 1)));
        assert!(matches!(
            export_report(&records, &criteria, ExportScope::Filtered),
            Err(Error::Filter(FilterError::InvalidDateRange { .. }))
        ));
    }

    #[test]
    fn test_file_name_embeds_kind_scope_and_timestamp() {
        let payload = export_payload(&scenario_records(), ExportScope::All).unwrap();
        let now = date(2026, 1, 20).and_hms_opt(14, 30, 5).unwrap();
        assert_eq!(payload.file_name(now), "goal_status_all_20260120_143005.csv");

        let filtered = export_payload(&scenario_records(), ExportScope::Filtered).unwrap();
        assert_eq!(
            filtered.file_name(now),
            "goal_status_filtered_20260120_143005.csv"
        );
    }
}
