//! Presentation module - the view abstraction and the dashboard controller.

mod dashboard;
mod presentation_traits;


pub use dashboard::{Dashboard, DisplayedRows};
pub use presentation_traits::{ReportTab, ReportView};
