//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "goalboard",
    version,
    about = "Goal reporting dashboard - filter and export children's savings goals",
    long_about = "Browse goal status and goal allocation activity, filter by keyword,\n\
                  status and date range, and export the results to CSV.\n\n\
                  Records are read from GOALBOARD_DATA_DIR (goal_status.csv and\n\
                  goal_activity.csv) or from a built-in sample set when unset."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Directory holding goal_status.csv and goal_activity.csv.
    #[arg(long = "data-dir", value_name = "DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Directory exports are written to.
    #[arg(long = "export-dir", value_name = "DIR", global = true)]
    pub export_dir: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors.
    #[arg(short = 'q', long = "quiet", global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log output format.
    #[arg(long = "log-format", value_enum, global = true)]
    pub log_format: Option<LogFormatArg>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the "Goals Status" table.
    Status(ReportArgs),

    /// Show the "Goals Activity" table, latest transaction first.
    Activity(ReportArgs),

    /// Export a tab to CSV.
    Export(ExportArgs),

    /// Preview the message a child receives after a goal edit.
    NotifyPreview(NotifyArgs),

    /// Interactive dashboard session reading commands from stdin.
    Interactive(InteractiveArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Case-insensitive keyword matched against the searchable columns.
    #[arg(short = 'k', long = "keyword", default_value = "")]
    pub keyword: String,

    /// Columns the keyword is matched against (repeatable).
    #[arg(long = "search-column", value_name = "COLUMN")]
    pub search_columns: Vec<String>,

    /// Per-column filter as COLUMN=TEXT (repeatable).
    #[arg(short = 'c', long = "column", value_name = "COLUMN=TEXT")]
    pub column_filters: Vec<String>,

    /// Progress statuses to keep (comma separated or repeatable).
    #[arg(short = 's', long = "status", value_delimiter = ',')]
    pub statuses: Vec<String>,

    /// Start of the date range, DD-MM-YYYY.
    #[arg(long = "from", value_name = "DATE")]
    pub from: Option<String>,

    /// End of the date range, DD-MM-YYYY.
    #[arg(long = "to", value_name = "DATE")]
    pub to: Option<String>,

    /// Date column the range applies to.
    #[arg(long = "date-field", value_name = "COLUMN")]
    pub date_field: Option<String>,

    /// Drop the date range entirely. Exports then fail.
    #[arg(long = "all-dates", conflicts_with_all = ["from", "to"])]
    pub all_dates: bool,
}

#[derive(Args)]
pub struct ReportArgs {
    #[command(flatten)]
    pub filters: FilterArgs,

    /// Print rows as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Args)]
pub struct ExportArgs {
    /// Tab to export.
    #[arg(value_enum)]
    pub tab: TabArg,

    /// Export the filtered rows or every row.
    #[arg(long = "scope", value_enum, default_value = "filtered")]
    pub scope: ScopeArg,

    #[command(flatten)]
    pub filters: FilterArgs,
}

#[derive(Args)]
pub struct NotifyArgs {
    /// Goal name before the edit.
    #[arg(long = "old-name")]
    pub old_name: String,

    /// Goal name after the edit (defaults to the old name).
    #[arg(long = "new-name")]
    pub new_name: Option<String>,

    /// Target amount before the edit, as displayed.
    #[arg(long = "old-target")]
    pub old_target: String,

    #[arg(long = "new-target")]
    pub new_target: Option<String>,

    /// Target end date before the edit, DD-MM-YYYY.
    #[arg(long = "old-end")]
    pub old_end: String,

    #[arg(long = "new-end")]
    pub new_end: Option<String>,

    /// Print the preview as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Args)]
pub struct InteractiveArgs {
    /// Quiescence window before typed input is applied, in milliseconds.
    #[arg(long = "debounce-ms", value_name = "MS")]
    pub debounce_ms: Option<u64>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum TabArg {
    Status,
    Activity,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ScopeArg {
    Filtered,
    All,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Text,
    Json,
}
