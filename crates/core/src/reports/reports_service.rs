use std::sync::Arc;

use crate::errors::Result;
use crate::export::{export_report, ExportPayload, ExportScope};
use crate::filters::{apply_all, sort_by_date_time_descending, DateField, FilterCriteria};
use crate::goals::{GoalActivityRecord, GoalRecordSourceTrait, GoalStatusRecord};

use super::reports_traits::GoalReportServiceTrait;

/// Loads records from a source on every call and runs them through the
/// filter and export pipeline.
pub struct GoalReportService {
    source: Arc<dyn GoalRecordSourceTrait>,
}

impl GoalReportService {
    pub fn new(source: Arc<dyn GoalRecordSourceTrait>) -> Self {
        GoalReportService { source }
    }

    /// Activity rows in their default presentation order, latest first.
    fn ordered_activity_records(&self) -> Result<Vec<GoalActivityRecord>> {
        let records = self.source.load_activity_records()?;
        Ok(sort_by_date_time_descending(
            records,
            DateField::TransactionDateTime,
        ))
    }
}

impl GoalReportServiceTrait for GoalReportService {
    fn status_report(&self, criteria: &FilterCriteria) -> Result<Vec<GoalStatusRecord>> {
        let records = self.source.load_status_records()?;
        apply_all(&records, criteria)
    }

    fn activity_report(&self, criteria: &FilterCriteria) -> Result<Vec<GoalActivityRecord>> {
        let records = self.ordered_activity_records()?;
        apply_all(&records, criteria)
    }

    fn export_status(&self, criteria: &FilterCriteria, scope: ExportScope) -> Result<ExportPayload> {
        let records = self.source.load_status_records()?;
        export_report(&records, criteria, scope)
    }

    fn export_activity(
        &self,
        criteria: &FilterCriteria,
        scope: ExportScope,
    ) -> Result<ExportPayload> {
        let records = self.ordered_activity_records()?;
        export_report(&records, criteria, scope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use crate::filters::{DateRange, FilterError};
    use crate::goals::{InMemoryGoalSource, ProgressStatus};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn activity(child_id: &str, day: u32, hour: u32) -> GoalActivityRecord {
        GoalActivityRecord {
            transaction_date_time: date(2026, 1, day).and_hms_opt(hour, 0, 0).unwrap(),
            child_id: child_id.to_string(),
            nickname: "Alex".to_string(),
            child_access: "Full".to_string(),
            parent_id: "P-9".to_string(),
            parent_username: "JaneSmith".to_string(),
            goal_name: "New Bike".to_string(),
            amount_allocated: dec!(10),
            amount_post_allocation: dec!(10),
        }
    }

    fn status(child_id: &str, status: ProgressStatus) -> GoalStatusRecord {
        GoalStatusRecord {
            child_id: child_id.to_string(),
            nickname: "Mila".to_string(),
            access_level: "Full".to_string(),
            parent_id: "P-1".to_string(),
            parent_username: "JohnDoe".to_string(),
            goal_name: "Laptop".to_string(),
            current_amount_allocated: dec!(100),
            target_amount: dec!(1000),
            created_date: date(2026, 1, 10),
            target_end_date: None,
            actual_end_date: None,
            progress_status: status,
        }
    }

    fn service() -> GoalReportService {
        let source = InMemoryGoalSource::new(
            vec![
                status("C-1", ProgressStatus::Active),
                status("C-2", ProgressStatus::Expired),
            ],
            vec![activity("A", 2, 9), activity("B", 5, 9), activity("C", 3, 9)],
        );
        GoalReportService::new(Arc::new(source))
    }

    #[test]
    fn test_activity_report_is_latest_first() {
        let rows = service()
            .activity_report(&FilterCriteria::default())
            .unwrap();
        let ids: Vec<&str> = rows.iter().map(|r| r.child_id.as_str()).collect();
        assert_eq!(ids, vec!["B", "C", "A"]);
    }

    #[test]
    fn test_status_report_applies_statuses() {
        let criteria = FilterCriteria {
            statuses: vec!["Expired".to_string()],
            ..FilterCriteria::default()
        };
        let rows = service().status_report(&criteria).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].child_id, "C-2");
    }

    #[test]
    fn test_export_activity_all_keeps_presentation_order() {
        let criteria = FilterCriteria::with_date_range(DateRange::new(date(2026, 1, 4), date(2026, 1, 4)));
        let payload = service()
            .export_activity(&criteria, ExportScope::All)
            .unwrap();
        let first_ids: Vec<&str> = payload
            .content
            .lines()
            .skip(1)
            .map(|line| line.split(',').nth(1).unwrap_or_default())
            .collect();
        assert_eq!(first_ids, vec!["B", "C", "A"]);
    }

    #[test]
    fn test_export_status_without_range_fails() {
        let err = service()
            .export_status(&FilterCriteria::default(), ExportScope::All)
            .unwrap_err();
        assert!(matches!(err, Error::Filter(FilterError::MissingDateRange)));
    }
}
