//! Export module - scope and payload models, validation, CSV serialization.

mod export_model;
mod export_service;

#[cfg(test)]
mod export_service_tests;

pub use export_model::{ExportPayload, ExportScope};
pub use export_service::{export_payload, export_report, validate_export};
