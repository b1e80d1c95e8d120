//! Interactive dashboard session.
//!
//! Reads one command per line from stdin. Filter edits are held by the
//! session and applied once no further edit has arrived for the debounce
//! window; tab switches, `show` and exports act immediately.

use std::process::ExitCode;
use std::time::{Duration, Instant};

use chrono::{Local, NaiveDate};
use goalboard_core::export::ExportScope;
use goalboard_core::filters::{Column, DateRange, FilterCriteria};
use goalboard_core::presentation::{Dashboard, ReportTab, ReportView};
use goalboard_core::utils::time_utils::{default_date_range, parse_day_first_date};
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use crate::cli::InteractiveArgs;
use crate::commands::open_dashboard;
use crate::config::Config;
use crate::terminal_view::{OutputMode, TerminalView};

const HELP: &str = "\
Commands:
  keyword <text>            search goal name, child ID, parent username (empty clears)
  status <name>[,<name>..]  keep only these progress statuses (empty clears)
  range <from> <to>         date range, DD-MM-YYYY
  range none                drop the date range
  column <name>=<text>      per-column filter (empty text clears)
  tab <status|activity>     switch table
  show                      re-render the current table
  export <filtered|all>     write the current tab to CSV
  help                      this message
  quit";

/// A parsed prompt line.
#[derive(Debug, Clone, PartialEq)]
pub enum PromptCommand {
    Keyword(String),
    Statuses(Vec<String>),
    Range(Option<DateRange>),
    ColumnFilter(Column, String),
    Tab(ReportTab),
    Show,
    Export(ExportScope),
    Help,
    Quit,
}

#[derive(Error, Debug, PartialEq)]
pub enum PromptError {
    #[error("Unknown command '{0}', type 'help' for a list")]
    UnknownCommand(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("Unknown column '{0}'")]
    UnknownColumn(String),

    #[error("Unknown tab '{0}', expected status or activity")]
    UnknownTab(String),

    #[error("Unknown export scope '{0}', expected filtered or all")]
    UnknownScope(String),

    #[error("{0}")]
    InvalidDate(String),
}

impl PromptCommand {
    /// Parses a prompt line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>, PromptError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "keyword" | "k" => PromptCommand::Keyword(rest.to_string()),
            "status" | "s" => PromptCommand::Statuses(
                rest.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect(),
            ),
            "range" | "r" => PromptCommand::Range(parse_range(rest)?),
            "column" | "c" => {
                let (name, text) = rest
                    .split_once('=')
                    .ok_or(PromptError::Usage("column <name>=<text>"))?;
                let column = Column::parse(name)
                    .ok_or_else(|| PromptError::UnknownColumn(name.trim().to_string()))?;
                PromptCommand::ColumnFilter(column, text.trim().to_string())
            }
            "tab" | "t" => PromptCommand::Tab(
                ReportTab::parse(rest).ok_or_else(|| PromptError::UnknownTab(rest.to_string()))?,
            ),
            "show" => PromptCommand::Show,
            "export" | "e" => PromptCommand::Export(match rest.to_ascii_lowercase().as_str() {
                "" | "filtered" => ExportScope::Filtered,
                "all" => ExportScope::All,
                other => return Err(PromptError::UnknownScope(other.to_string())),
            }),
            "help" | "?" => PromptCommand::Help,
            "quit" | "exit" | "q" => PromptCommand::Quit,
            other => return Err(PromptError::UnknownCommand(other.to_string())),
        };
        Ok(Some(command))
    }
}

fn parse_range(rest: &str) -> Result<Option<DateRange>, PromptError> {
    if rest.eq_ignore_ascii_case("none") {
        return Ok(None);
    }
    let mut bounds = rest.split_whitespace();
    let (Some(from), Some(to), None) = (bounds.next(), bounds.next(), bounds.next()) else {
        return Err(PromptError::Usage("range <from> <to> | range none"));
    };
    let start = parse_day_first_date(from).map_err(|e| PromptError::InvalidDate(e.to_string()))?;
    let end = parse_day_first_date(to).map_err(|e| PromptError::InvalidDate(e.to_string()))?;
    Ok(Some(DateRange::new(start, end)))
}

#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub fn run_interactive(
    args: &InteractiveArgs,
    config: &Config,
    today: NaiveDate,
) -> anyhow::Result<ExitCode> {
    let mut config = config.clone();
    if let Some(ms) = args.debounce_ms {
        config.debounce = Duration::from_millis(ms);
    }
    let criteria = FilterCriteria::with_date_range(default_date_range(today));
    let view = TerminalView::stdio(&config.export_dir, OutputMode::Table);
    let mut dashboard = open_dashboard(&config, view, criteria, today);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    println!("{HELP}");
    runtime.block_on(run_session(
        &mut dashboard,
        BufReader::new(tokio::io::stdin()),
    ))?;
    Ok(ExitCode::SUCCESS)
}

/// Drives `dashboard` from `input` until `quit` or end of input. Pending
/// edits still inside their window at end of input are applied once the
/// window closes.
pub async fn run_session<V, R>(dashboard: &mut Dashboard<V>, input: R) -> anyhow::Result<()>
where
    V: ReportView,
    R: AsyncBufRead + Unpin,
{
    tracing::info!("Interactive session started");
    if let Err(err) = dashboard.refresh() {
        tracing::debug!("Initial render failed: {}", err);
    }

    let mut lines = input.lines();
    loop {
        match dashboard.session().deadline() {
            Some(deadline) => {
                tokio::select! {
                    line = lines.next_line() => {
                        match line? {
                            Some(line) => {
                                if handle_line(dashboard, &line) == Flow::Quit {
                                    break;
                                }
                            }
                            None => {
                                tokio::time::sleep_until(deadline.into()).await;
                                apply_pending(dashboard);
                                break;
                            }
                        }
                    }
                    _ = tokio::time::sleep_until(deadline.into()) => {
                        apply_pending(dashboard);
                    }
                }
            }
            None => match lines.next_line().await? {
                Some(line) => {
                    if handle_line(dashboard, &line) == Flow::Quit {
                        break;
                    }
                }
                None => break,
            },
        }
    }

    tracing::info!("Interactive session finished");
    Ok(())
}

fn apply_pending<V: ReportView>(dashboard: &mut Dashboard<V>) {
    match dashboard.tick(Instant::now()) {
        Ok(true) => tracing::debug!("Applied pending filter input"),
        Ok(false) => {}
        Err(err) => tracing::debug!("Pending filter input rejected: {}", err),
    }
}

fn handle_line<V: ReportView>(dashboard: &mut Dashboard<V>, line: &str) -> Flow {
    let command = match PromptCommand::parse(line) {
        Ok(Some(command)) => command,
        Ok(None) => return Flow::Continue,
        Err(err) => {
            dashboard.view_mut().show_error(&err.to_string());
            return Flow::Continue;
        }
    };

    let now = Instant::now();
    let outcome = match command {
        PromptCommand::Keyword(text) => {
            dashboard.set_keyword(text, now);
            Ok(())
        }
        PromptCommand::Statuses(statuses) => {
            dashboard.set_statuses(statuses, now);
            Ok(())
        }
        PromptCommand::Range(range) => {
            dashboard.set_date_range(range, now);
            Ok(())
        }
        PromptCommand::ColumnFilter(column, text) => {
            dashboard.set_column_filter(column, text, now);
            Ok(())
        }
        PromptCommand::Tab(tab) => dashboard.switch_tab(tab),
        PromptCommand::Show => dashboard.refresh(),
        PromptCommand::Export(scope) => dashboard
            .export(scope, Local::now().naive_local())
            .map(|_| ()),
        PromptCommand::Help => {
            println!("{HELP}");
            Ok(())
        }
        PromptCommand::Quit => return Flow::Quit,
    };
    if let Err(err) = outcome {
        tracing::debug!("Command '{}' failed: {}", line.trim(), err);
    }
    Flow::Continue
}
