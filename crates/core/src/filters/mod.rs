//! Filters module - criteria models, record access traits, and the pipeline.

mod filters_errors;
mod filters_model;
mod filters_service;
mod filters_traits;


pub use filters_errors::FilterError;
pub use filters_model::{Column, DateField, DateRange, FilterCriteria};
pub use filters_service::{
    apply_all, filter_columns, filter_date_range, filter_keyword, filter_status_set,
    resolve_statuses, sort_by_date_time_descending,
};
pub use filters_traits::{ReportKind, ReportRecord};
