//! Goalboard terminal dashboard.

use std::process::ExitCode;

use clap::Parser;
use goalboard_core::presentation::ReportTab;
use goalboard_core::utils::time_utils::local_today;

mod cli;
mod commands;
mod config;
mod interactive;
mod logging;
mod sample_data;
mod terminal_view;

use crate::cli::{Cli, Command, LogFormatArg};
use crate::commands::{run_export, run_notify_preview, run_report};
use crate::config::Config;
use crate::interactive::run_interactive;
use crate::logging::{init_tracing, level_from_verbosity, LogFormat};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = config_from_cli(&cli);

    let explicit_level = cli.verbose > 0 || cli.quiet;
    init_tracing(
        config.log_format,
        level_from_verbosity(cli.verbose, cli.quiet),
        explicit_level,
    );
    tracing::debug!("Resolved configuration: {:?}", config);

    let today = local_today();
    let result = match &cli.command {
        Command::Status(args) => run_report(ReportTab::Status, args, &config, today),
        Command::Activity(args) => run_report(ReportTab::Activity, args, &config, today),
        Command::Export(args) => run_export(args, &config, today),
        Command::NotifyPreview(args) => run_notify_preview(args),
        Command::Interactive(args) => run_interactive(args, &config, today),
    };

    match result {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error:#}");
            ExitCode::FAILURE
        }
    }
}

/// Environment first, then flags on top.
fn config_from_cli(cli: &Cli) -> Config {
    let mut config = Config::from_env();
    if let Some(dir) = &cli.data_dir {
        config.data_dir = Some(dir.clone());
    }
    if let Some(dir) = &cli.export_dir {
        config.export_dir = dir.clone();
    }
    if let Some(format) = cli.log_format {
        config.log_format = match format {
            LogFormatArg::Text => LogFormat::Text,
            LogFormatArg::Json => LogFormat::Json,
        };
    }
    config
}
