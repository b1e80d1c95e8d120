//! Core error types for Goalboard.
//!
//! Module-level errors (filtering, export) are wrapped by the root [`Error`]
//! so callers can match on a single type while still reaching the specific
//! condition.

use chrono::{NaiveDate, ParseError as ChronoParseError};
use thiserror::Error;

use crate::filters::FilterError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the reporting engine.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Filter error: {0}")]
    Filter(#[from] FilterError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Failed to load records: {0}")]
    DataSource(String),

    #[error("Export failed: {0}")]
    Export(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns true for errors the presentation layer should show inline
    /// rather than treat as fatal.
    pub fn is_user_facing(&self) -> bool {
        matches!(self, Error::Filter(_) | Error::Validation(_))
    }
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),

    #[error("Failed to parse date/time: {0}")]
    DateTimeParse(#[from] ChronoParseError),

    #[error("Invalid date '{value}': expected {expected}")]
    InvalidDate { value: String, expected: &'static str },

    #[error("Amount {amount} for '{field}' is out of range")]
    AmountOutOfRange { field: &'static str, amount: String },

    #[error("Actual end date {0} is set on a goal that has not ended")]
    UnexpectedEndDate(NaiveDate),
}

// === From implementations for common error types ===

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<ChronoParseError> for Error {
    fn from(err: ChronoParseError) -> Self {
        Error::Validation(ValidationError::DateTimeParse(err))
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Export(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Validation(ValidationError::InvalidInput(err.to_string()))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
