use std::time::Duration;

/// Number of calendar days covered by the initial date filter
pub const DEFAULT_RANGE_DAYS: u64 = 30;

/// Quiescence window before re-running filters after an input change
pub const DEFAULT_DEBOUNCE_WINDOW: Duration = Duration::from_millis(1000);

/// Day-first date format used for all text input and export output
pub const DAY_FIRST_DATE_FORMAT: &str = "%d-%m-%Y";

/// Day-first date-time format, second precision
pub const DAY_FIRST_DATETIME_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

/// Day-first date-time format without seconds, as typed in the dashboard
pub const DAY_FIRST_DATETIME_SHORT_FORMAT: &str = "%d-%m-%Y %H:%M";

/// Timestamp embedded in export file names
pub const EXPORT_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// MIME type handed to the export sink
pub const EXPORT_MIME_TYPE: &str = "text/csv";

/// File names read by the file-backed record source
pub const STATUS_RECORDS_FILE: &str = "goal_status.csv";
pub const ACTIVITY_RECORDS_FILE: &str = "goal_activity.csv";
