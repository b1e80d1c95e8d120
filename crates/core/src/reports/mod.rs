//! Reports module - the per-tab report service over a record source.

mod reports_service;
mod reports_traits;

pub use reports_service::GoalReportService;
pub use reports_traits::GoalReportServiceTrait;
