//! One-shot subcommands. Each builds a dashboard over the configured source,
//! applies the filters from the command line, and renders or exports once.

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{anyhow, bail, Context};
use chrono::{Local, NaiveDate};
use goalboard_core::export::ExportScope;
use goalboard_core::filters::{Column, DateField, DateRange, FilterCriteria};
use goalboard_core::goals::{CsvGoalSource, GoalRecordSourceTrait};
use goalboard_core::notifications::{preview_goal_change, GoalEditSnapshot};
use goalboard_core::presentation::{Dashboard, ReportTab, ReportView};
use goalboard_core::reports::{GoalReportService, GoalReportServiceTrait};
use goalboard_core::session::FilterSession;
use goalboard_core::utils::time_utils::{default_date_range, parse_day_first_date};

use crate::cli::{ExportArgs, FilterArgs, NotifyArgs, ReportArgs, ScopeArg, TabArg};
use crate::config::Config;
use crate::sample_data::sample_source;
use crate::terminal_view::{OutputMode, TerminalView};

/// Report service over the CSV directory when configured, otherwise the
/// built-in sample records.
pub fn build_service(config: &Config, today: NaiveDate) -> Arc<dyn GoalReportServiceTrait> {
    let source: Arc<dyn GoalRecordSourceTrait> = match &config.data_dir {
        Some(dir) => {
            tracing::debug!("Reading goal records from {}", dir.display());
            Arc::new(CsvGoalSource::new(dir))
        }
        None => {
            tracing::debug!("No data directory configured, serving sample records");
            Arc::new(sample_source(today))
        }
    };
    Arc::new(GoalReportService::new(source))
}

/// Turns command-line filter flags into criteria. Without `--from`/`--to`
/// the default range ending `today` applies; a single bound keeps the default
/// for the other.
pub fn build_criteria(args: &FilterArgs, today: NaiveDate) -> anyhow::Result<FilterCriteria> {
    let search_columns = args
        .search_columns
        .iter()
        .map(|name| parse_column(name.as_str()))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let mut criteria = FilterCriteria {
        keyword: args.keyword.clone(),
        search_columns,
        statuses: args
            .statuses
            .iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect(),
        ..FilterCriteria::default()
    };

    for entry in &args.column_filters {
        let (name, text) = entry
            .split_once('=')
            .ok_or_else(|| anyhow!("Column filter '{}' must look like COLUMN=TEXT", entry))?;
        criteria
            .column_filters
            .insert(parse_column(name)?, text.trim().to_string());
    }

    if let Some(name) = &args.date_field {
        let field =
            DateField::parse(name).ok_or_else(|| anyhow!("'{}' is not a date column", name))?;
        criteria.date_field = Some(field);
    }

    if !args.all_dates {
        let (default_start, default_end) = default_date_range(today);
        let start = match &args.from {
            Some(text) => parse_day_first_date(text).context("Invalid --from date")?,
            None => default_start,
        };
        let end = match &args.to {
            Some(text) => parse_day_first_date(text).context("Invalid --to date")?,
            None => default_end,
        };
        criteria.date_range = Some(DateRange::new(start, end));
    }

    Ok(criteria)
}

fn parse_column(name: &str) -> anyhow::Result<Column> {
    match Column::parse(name) {
        Some(column) => Ok(column),
        None => bail!("Unknown column '{}'", name.trim()),
    }
}

pub fn run_report(
    tab: ReportTab,
    args: &ReportArgs,
    config: &Config,
    today: NaiveDate,
) -> anyhow::Result<ExitCode> {
    let criteria = build_criteria(&args.filters, today)?;
    let mode = if args.json {
        OutputMode::Json
    } else {
        OutputMode::Table
    };
    let view = TerminalView::stdio(&config.export_dir, mode);
    let mut dashboard = open_dashboard(config, view, criteria, today);
    Ok(exit_code(show_tab(&mut dashboard, tab).is_ok()))
}

pub fn run_export(args: &ExportArgs, config: &Config, today: NaiveDate) -> anyhow::Result<ExitCode> {
    let criteria = build_criteria(&args.filters, today)?;
    let view = TerminalView::stdio(&config.export_dir, OutputMode::Silent);
    let mut dashboard = open_dashboard(config, view, criteria, today);
    if show_tab(&mut dashboard, tab_from_arg(args.tab)).is_err() {
        return Ok(ExitCode::FAILURE);
    }
    let scope = match args.scope {
        ScopeArg::Filtered => ExportScope::Filtered,
        ScopeArg::All => ExportScope::All,
    };
    let exported = dashboard.export(scope, Local::now().naive_local());
    Ok(exit_code(exported.is_ok()))
}

pub fn run_notify_preview(args: &NotifyArgs) -> anyhow::Result<ExitCode> {
    let previous = GoalEditSnapshot {
        goal_name: args.old_name.clone(),
        target_amount: args.old_target.clone(),
        target_end_date: parse_day_first_date(&args.old_end).context("Invalid --old-end date")?,
    };
    let current = GoalEditSnapshot {
        goal_name: args.new_name.clone().unwrap_or_else(|| previous.goal_name.clone()),
        target_amount: args
            .new_target
            .clone()
            .unwrap_or_else(|| previous.target_amount.clone()),
        target_end_date: match &args.new_end {
            Some(text) => parse_day_first_date(text).context("Invalid --new-end date")?,
            None => previous.target_end_date,
        },
    };

    let preview = preview_goal_change(&previous, &current);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&preview)?);
    } else {
        println!("{}", preview.message);
    }
    Ok(ExitCode::SUCCESS)
}

pub fn tab_from_arg(tab: TabArg) -> ReportTab {
    match tab {
        TabArg::Status => ReportTab::Status,
        TabArg::Activity => ReportTab::Activity,
    }
}

pub fn open_dashboard<V: ReportView>(
    config: &Config,
    view: V,
    criteria: FilterCriteria,
    today: NaiveDate,
) -> Dashboard<V> {
    let session = FilterSession::with_window(criteria, config.debounce);
    Dashboard::with_session(build_service(config, today), view, session)
}

/// Renders `tab`, whether or not it is already active. Failures have
/// already been shown through the view.
pub fn show_tab<V: ReportView>(
    dashboard: &mut Dashboard<V>,
    tab: ReportTab,
) -> goalboard_core::Result<()> {
    if dashboard.tab() == tab {
        dashboard.refresh()
    } else {
        dashboard.switch_tab(tab)
    }
}

fn exit_code(success: bool) -> ExitCode {
    if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
