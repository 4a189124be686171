//! Command implementations for the regatta formatter CLI
//!
//! This module contains the command execution logic, logging setup and the
//! run summary printed after each command.

use anyhow::Context;
use colored::*;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};

use crate::app::models::Standings;
use crate::app::services::footage_mapper::{FootageMapper, RenameSummary};
use crate::app::services::report_renderer::{ReportRenderer, format_seconds, write_report};
use crate::app::services::results_parser::{ParseResult, ResultsParser};
use crate::app::services::standings::StandingsComputer;
use crate::cli::args::{Args, CheckArgs, Commands, OutputFormat, ProcessArgs};
use crate::config::Config;
use crate::constants::LOG_TARGET;
use crate::{Error, Result};

/// Per-category line of the run summary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySummary {
    pub label: String,
    pub entries: usize,
    pub fastest_seconds: f64,
    pub winner: Option<u32>,
}

/// What happened to the footage phase
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FootageOutcome {
    Skipped { reason: String },
    Completed(RenameSummary),
}

/// Summary of a `process` or `check` run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub results_path: PathBuf,
    pub records_read: usize,
    pub entries_ranked: usize,
    pub non_finishers: usize,
    pub skipped_numbers: Vec<String>,
    pub categories: Vec<CategorySummary>,
    pub report_path: Option<PathBuf>,
    pub report_lines: usize,
    pub footage: FootageOutcome,
    pub processing_time_ms: u128,
}

/// Options for one processing run beyond what the configuration holds
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessOptions {
    pub dry_run: bool,
    pub skip_footage: bool,
    pub show_progress: bool,
}

/// Main command runner for the regatta formatter
///
/// Dispatches to the subcommand handler. Errors come back with context for
/// printing as `{:#}`.
pub fn run(args: Args) -> anyhow::Result<RunSummary> {
    match args.command {
        Some(Commands::Process(process_args)) => run_process(&process_args),
        Some(Commands::Check(check_args)) => run_check(&check_args),
        None => anyhow::bail!("No command given; run with --help for usage"),
    }
}

/// Run the `process` command: rank, write the report and rename footage
pub fn run_process(args: &ProcessArgs) -> anyhow::Result<RunSummary> {
    setup_logging(args.get_log_level(), args.quiet);
    args.validate().context("Invalid command line arguments")?;

    let mut config = Config::load_layered(args.config_file.as_deref())
        .context("Failed to load configuration")?;
    apply_cli_overrides(&mut config, args)?;
    config.validate().context("Invalid configuration")?;

    let options = ProcessOptions {
        dry_run: args.dry_run,
        skip_footage: args.skip_footage,
        show_progress: args.show_progress(),
    };

    let summary = process_results(&config, &options).map_err(describe_failure)?;
    generate_final_report(args.output_format, &summary)?;
    Ok(summary)
}

/// Run the `check` command: parse and rank without writing anything
pub fn run_check(args: &CheckArgs) -> anyhow::Result<RunSummary> {
    setup_logging(args.get_log_level(), false);
    args.validate().context("Invalid command line arguments")?;

    let mut config = Config::load_layered(args.config_file.as_deref())
        .context("Failed to load configuration")?;
    if let Some(results) = &args.results {
        config.set_results_path(&absolute(results)?);
    }

    let summary = check_results(&config).map_err(describe_failure)?;
    generate_human_report(&summary);
    Ok(summary)
}

/// Parse, rank, write the report and run the footage phase
pub fn process_results(config: &Config, options: &ProcessOptions) -> Result<RunSummary> {
    let start_time = Instant::now();

    let results_path = config.results_path()?;
    let parsed = parse_results(config, &results_path)?;
    let standings = StandingsComputer::new(config.policy()?).compute(&parsed.entries)?;

    let report = ReportRenderer::new(config.report.label.as_str())
        .render(&standings, config.report.order);
    let report_path = config.template_path()?;
    write_report(&report_path, &report)?;

    let footage = run_footage_phase(config, options)?;

    let mut summary = build_summary(results_path, &parsed, &standings, start_time);
    summary.report_path = Some(report_path);
    summary.report_lines = standings.entry_count();
    summary.footage = footage;
    Ok(summary)
}

/// Parse and rank only
pub fn check_results(config: &Config) -> Result<RunSummary> {
    let start_time = Instant::now();

    let results_path = config.results_path()?;
    let parsed = parse_results(config, &results_path)?;
    let standings = StandingsComputer::new(config.policy()?).compute(&parsed.entries)?;

    let mut summary = build_summary(results_path, &parsed, &standings, start_time);
    summary.footage = FootageOutcome::Skipped {
        reason: "check only".to_string(),
    };
    Ok(summary)
}

fn parse_results(config: &Config, results_path: &Path) -> Result<ParseResult> {
    ResultsParser::new()
        .with_delimiter(config.delimiter()?)
        .parse_file(results_path)
}

fn run_footage_phase(config: &Config, options: &ProcessOptions) -> Result<FootageOutcome> {
    if options.skip_footage {
        return Ok(skipped("disabled on the command line"));
    }

    let Some(mapping_path) = config.mapping_path() else {
        info!("Not generating primary footage because no mapping file is configured");
        return Ok(skipped("no mapping file configured"));
    };

    let (Some(capture_dir), Some(primary_dir)) = (config.capture_dir(), config.primary_dir())
    else {
        return Err(Error::configuration(
            "capture_dir and primary_dir must be set to rename footage",
        ));
    };

    let mapper = FootageMapper::new(capture_dir, primary_dir)
        .with_extension(config.footage.video_extension.as_str())
        .with_progress(options.show_progress);

    Ok(match mapper.run(&mapping_path, options.dry_run)? {
        Some(summary) => FootageOutcome::Completed(summary),
        None => skipped(&format!("mapping file missing ({})", mapping_path.display())),
    })
}

fn skipped(reason: &str) -> FootageOutcome {
    FootageOutcome::Skipped {
        reason: reason.to_string(),
    }
}

fn build_summary(
    results_path: PathBuf,
    parsed: &ParseResult,
    standings: &Standings,
    start_time: Instant,
) -> RunSummary {
    let categories = standings
        .categories
        .values()
        .map(|category| CategorySummary {
            label: category.label.clone(),
            entries: category.size(),
            fastest_seconds: category.fastest,
            winner: category.winner(),
        })
        .collect();

    RunSummary {
        results_path,
        records_read: parsed.stats.total_records,
        entries_ranked: standings.entry_count(),
        non_finishers: parsed.stats.non_finishers,
        skipped_numbers: parsed.stats.skipped_numbers.clone(),
        categories,
        report_path: None,
        report_lines: 0,
        footage: skipped("not run"),
        processing_time_ms: start_time.elapsed().as_millis(),
    }
}

/// Set up structured logging on stderr
///
/// `RUST_LOG` takes precedence over the verbosity flags. Only the first call
/// in a process installs a subscriber.
pub fn setup_logging(log_level: &str, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    // Create filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={}", LOG_TARGET, log_level)));

    let initialized = if quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    } else {
        // Standard logging with timestamps
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    if initialized.is_ok() {
        debug!("Logging initialized at level: {}", log_level);
    }
}

/// Apply command line path and order overrides to the loaded configuration
fn apply_cli_overrides(config: &mut Config, args: &ProcessArgs) -> anyhow::Result<()> {
    if let Some(results) = &args.results {
        config.set_results_path(&absolute(results)?);
    }
    if let Some(template) = &args.template {
        config.set_template_path(&absolute(template)?);
    }
    if let Some(mapping) = &args.mapping {
        config.set_mapping_path(&absolute(mapping)?);
    }
    if let Some(capture_dir) = &args.capture_dir {
        config.paths.capture_dir = Some(absolute(capture_dir)?);
    }
    if let Some(primary_dir) = &args.primary_dir {
        config.paths.primary_dir = Some(absolute(primary_dir)?);
    }
    if let Some(order) = args.order {
        config.report.order = order;
    }

    debug!("Effective configuration: {:?}", config);
    Ok(())
}

fn absolute(path: &Path) -> anyhow::Result<PathBuf> {
    std::path::absolute(path).with_context(|| format!("Invalid path {}", path.display()))
}

fn describe_failure(error: Error) -> anyhow::Error {
    if error.is_data_error() {
        anyhow::Error::new(error).context("Results rejected; correct the input and run again")
    } else {
        anyhow::Error::new(error)
    }
}

/// Print the run summary in the requested format
fn generate_final_report(format: OutputFormat, summary: &RunSummary) -> anyhow::Result<()> {
    match format {
        OutputFormat::Human => {
            generate_human_report(summary);
            Ok(())
        }
        OutputFormat::Json => generate_json_report(summary),
    }
}

fn generate_human_report(summary: &RunSummary) {
    let title = if summary.report_path.is_some() {
        "Regatta Results Processed"
    } else {
        "Regatta Results Checked"
    };
    println!("\n{}", title.bright_green().bold());
    println!(
        "  {} {}",
        "Results file:".bright_cyan(),
        summary.results_path.display()
    );
    println!(
        "  {} {}",
        "Records read:".bright_cyan(),
        summary.records_read.to_string().bright_white()
    );
    println!(
        "  {} {}",
        "Entries ranked:".bright_cyan(),
        summary.entries_ranked.to_string().bright_white().bold()
    );
    if summary.non_finishers > 0 {
        println!(
            "  {} {} ({})",
            "Non-finishers skipped:".bright_yellow(),
            summary.non_finishers.to_string().bright_yellow(),
            summary.skipped_numbers.join(", ")
        );
    }

    println!("  {}", "Categories:".bright_cyan());
    for category in &summary.categories {
        let winner = category
            .winner
            .map(|number| format!(", won by crew {}", number))
            .unwrap_or_default();
        println!(
            "    {} {} crews, fastest {}s{}",
            format!("{}:", category.label).bright_white(),
            category.entries,
            format_seconds(category.fastest_seconds),
            winner
        );
    }

    if let Some(report_path) = &summary.report_path {
        println!(
            "  {} {} ({} lines)",
            "Report written:".bright_cyan(),
            report_path.display(),
            summary.report_lines
        );
    }

    match &summary.footage {
        FootageOutcome::Skipped { reason } => {
            println!("  {} skipped, {}", "Footage:".bright_cyan(), reason);
        }
        FootageOutcome::Completed(renames) => {
            let verb = if renames.dry_run { "would rename" } else { "renamed" };
            println!(
                "  {} {} {}, {} already done",
                "Footage:".bright_cyan(),
                verb,
                renames.renamed.to_string().bright_white(),
                renames.already_done
            );
            if renames.has_issues() {
                println!(
                    "  {} {}",
                    "Footage issues:".bright_red(),
                    renames.issues.len().to_string().bright_red().bold()
                );
                for issue in &renames.issues {
                    println!("    {}", issue);
                }
            }
        }
    }

    println!(
        "  {} {}ms",
        "Time elapsed:".bright_cyan(),
        summary.processing_time_ms.to_string().bright_white()
    );
    println!();
}

/// Generate JSON summary for machine consumption
fn generate_json_report(summary: &RunSummary) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(summary).context("Failed to serialize run summary")?;
    println!("{}", json);
    Ok(())
}
