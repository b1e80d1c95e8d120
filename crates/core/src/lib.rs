//! Goalboard Core - goal report models, filtering, and export.
//!
//! This crate holds the reporting engine behind the goal dashboard: typed
//! records for the status and activity tables, the keyword/status/date
//! filter pipeline, CSV export with its validation rule, and the
//! session-scoped controller that drives a presentation adapter.

pub mod constants;
pub mod errors;
pub mod export;
pub mod filters;
pub mod goals;
pub mod notifications;
pub mod presentation;
pub mod reports;
pub mod session;
pub mod utils;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
