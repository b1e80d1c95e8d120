use crate::errors::Result;
use crate::export::{ExportPayload, ExportScope};
use crate::filters::FilterCriteria;
use crate::goals::{GoalActivityRecord, GoalStatusRecord};

/// Trait for goal report operations, one pair per dashboard tab.
pub trait GoalReportServiceTrait: Send + Sync {
    fn status_report(&self, criteria: &FilterCriteria) -> Result<Vec<GoalStatusRecord>>;
    fn activity_report(&self, criteria: &FilterCriteria) -> Result<Vec<GoalActivityRecord>>;
    fn export_status(&self, criteria: &FilterCriteria, scope: ExportScope) -> Result<ExportPayload>;
    fn export_activity(&self, criteria: &FilterCriteria, scope: ExportScope)
        -> Result<ExportPayload>;
}
