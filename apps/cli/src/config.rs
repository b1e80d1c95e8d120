use std::path::PathBuf;
use std::time::Duration;

use goalboard_core::constants::DEFAULT_DEBOUNCE_WINDOW;

use crate::logging::LogFormat;

/// Runtime settings, read from the environment (and `.env`) then
/// overridden by command-line flags.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding `goal_status.csv` / `goal_activity.csv`. `None`
    /// serves the built-in sample data.
    pub data_dir: Option<PathBuf>,
    pub export_dir: PathBuf,
    pub debounce: Duration,
    pub log_format: LogFormat,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let data_dir = std::env::var("GOALBOARD_DATA_DIR")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);
        let export_dir = std::env::var("GOALBOARD_EXPORT_DIR")
            .unwrap_or_else(|_| "./exports".into())
            .into();
        let debounce = std::env::var("GOALBOARD_DEBOUNCE_MS")
            .ok()
            .and_then(|ms| ms.parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_DEBOUNCE_WINDOW);
        let log_format = std::env::var("GOALBOARD_LOG_FORMAT")
            .map(|s| LogFormat::parse(&s))
            .unwrap_or_default();
        Self {
            data_dir,
            export_dir,
            debounce,
            log_format,
        }
    }
}
