//! Command-line argument definitions for the regatta formatter
//!
//! This module defines the complete CLI interface using the clap derive API.
//! Every path flag overrides the matching configuration file entry.

use crate::app::services::report_renderer::ReportOrder;
use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the regatta results formatter
///
/// Ranks a finished results file by category, writes the pipe-delimited
/// results report and moves captured footage into place.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "regatta-formatter",
    version,
    about = "Rank rowing regatta results and produce timing reports and footage names",
    long_about = "Reads a delimited regatta timing file, validates leg and total times, ranks \
                  every crew within its category and writes the fixed-format results report used \
                  by downstream caption tooling. Optionally renames captured race footage from a \
                  mapping file without ever overwriting existing files."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the regatta formatter
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Parse, rank, write the report and rename footage (main command)
    Process(ProcessArgs),
    /// Parse and rank only, printing the category summary
    Check(CheckArgs),
}

/// Arguments for the process command
#[derive(Debug, Clone, Default, Parser)]
pub struct ProcessArgs {
    /// Path to configuration file
    ///
    /// TOML configuration file naming the results, report and mapping files.
    /// If not specified, looks for ~/.config/regatta-formatter/config.toml
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Results file to read
    #[arg(
        short = 'r',
        long = "results",
        value_name = "FILE",
        help = "Results file to rank (overrides the configuration)"
    )]
    pub results: Option<PathBuf>,

    /// Report file to write
    #[arg(
        short = 't',
        long = "template",
        value_name = "FILE",
        help = "Report file to write (overrides the configuration)"
    )]
    pub template: Option<PathBuf>,

    /// Mapping file driving the footage renames
    #[arg(
        short = 'm',
        long = "mapping",
        value_name = "FILE",
        help = "Footage mapping file (overrides the configuration)"
    )]
    pub mapping: Option<PathBuf>,

    #[arg(
        long = "capture-dir",
        value_name = "DIR",
        help = "Directory holding captured footage"
    )]
    pub capture_dir: Option<PathBuf>,

    #[arg(
        long = "primary-dir",
        value_name = "DIR",
        help = "Directory renamed footage is moved into"
    )]
    pub primary_dir: Option<PathBuf>,

    /// Order of the report lines
    #[arg(
        long = "order",
        value_name = "ORDER",
        help = "Report line order: entry-number, input-order or category-rank"
    )]
    pub order: Option<ReportOrder>,

    /// Perform a dry run of the footage phase
    ///
    /// The report is still written; renames are only logged.
    #[arg(long = "dry-run", help = "Log footage renames without moving any file")]
    pub dry_run: bool,

    #[arg(long = "skip-footage", help = "Do not run the footage phase")]
    pub skip_footage: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,

    /// Output format for the run summary
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for the run summary"
    )]
    pub output_format: OutputFormat,
}

/// Arguments for the check command
#[derive(Debug, Clone, Default, Parser)]
pub struct CheckArgs {
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    #[arg(
        short = 'r',
        long = "results",
        value_name = "FILE",
        help = "Results file to check (overrides the configuration)"
    )]
    pub results: Option<PathBuf>,

    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

/// Output format options for the run summary
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    #[default]
    Human,
    /// JSON format for scripting
    Json,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Option<&Commands> {
        self.command.as_ref()
    }
}

impl ProcessArgs {
    /// Validate the process command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if let Some(config_file) = &self.config_file {
            if !config_file.is_file() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        if let Some(results) = &self.results {
            if !results.is_file() {
                return Err(Error::configuration(format!(
                    "Results file does not exist: {}",
                    results.display()
                )));
            }
        }

        for dir in [&self.capture_dir, &self.primary_dir].into_iter().flatten() {
            if dir.exists() && !dir.is_dir() {
                return Err(Error::configuration(format!(
                    "Not a directory: {}",
                    dir.display()
                )));
            }
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            log_level_for(self.verbose)
        }
    }

    /// Check if we should show progress bars (not in quiet mode or JSON output)
    pub fn show_progress(&self) -> bool {
        !self.quiet && self.output_format == OutputFormat::Human
    }
}

impl CheckArgs {
    /// Validate the check command arguments
    pub fn validate(&self) -> Result<()> {
        if let Some(config_file) = &self.config_file {
            if !config_file.is_file() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level_for(self.verbose)
    }
}

fn log_level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_process_command() {
        let args = Args::try_parse_from([
            "regatta-formatter",
            "process",
            "--results",
            "results.csv",
            "--order",
            "category-rank",
            "--dry-run",
            "-vv",
            "--output-format",
            "json",
        ])
        .unwrap();

        let Some(Commands::Process(process)) = args.get_command() else {
            panic!("expected process command");
        };
        assert_eq!(process.results, Some(PathBuf::from("results.csv")));
        assert_eq!(process.order, Some(ReportOrder::CategoryRank));
        assert!(process.dry_run);
        assert_eq!(process.verbose, 2);
        assert_eq!(process.output_format, OutputFormat::Json);
        assert!(!process.show_progress());
    }

    #[test]
    fn test_parse_check_command() {
        let args =
            Args::try_parse_from(["regatta-formatter", "check", "-c", "regatta.toml"]).unwrap();

        let Some(Commands::Check(check)) = args.get_command() else {
            panic!("expected check command");
        };
        assert_eq!(check.config_file, Some(PathBuf::from("regatta.toml")));
        assert_eq!(check.get_log_level(), "warn");
    }

    #[test]
    fn test_no_subcommand() {
        let args = Args::try_parse_from(["regatta-formatter"]).unwrap();
        assert!(args.get_command().is_none());
    }

    #[test]
    fn test_invalid_order_rejected() {
        let result = Args::try_parse_from(["regatta-formatter", "process", "--order", "random"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        let result = Args::try_parse_from(["regatta-formatter", "process", "-q", "-v"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_log_level() {
        let mut args = ProcessArgs::default();

        // Default level
        assert_eq!(args.get_log_level(), "warn");

        args.verbose = 1;
        assert_eq!(args.get_log_level(), "info");

        args.verbose = 2;
        assert_eq!(args.get_log_level(), "debug");

        args.verbose = 3;
        assert_eq!(args.get_log_level(), "trace");

        // Quiet mode
        args.quiet = true;
        assert_eq!(args.get_log_level(), "error");
        assert!(!args.show_progress());
    }

    #[test]
    fn test_process_args_validation() {
        let temp_dir = TempDir::new().unwrap();
        let results = temp_dir.path().join("results.csv");
        std::fs::write(&results, "").unwrap();

        let args = ProcessArgs {
            results: Some(results.clone()),
            capture_dir: Some(temp_dir.path().to_path_buf()),
            ..ProcessArgs::default()
        };
        assert!(args.validate().is_ok());

        let mut invalid_args = args.clone();
        invalid_args.results = Some(temp_dir.path().join("missing.csv"));
        assert!(invalid_args.validate().is_err());

        let mut invalid_args = args.clone();
        invalid_args.primary_dir = Some(results);
        assert!(invalid_args.validate().is_err());

        let mut invalid_args = args;
        invalid_args.config_file = Some(PathBuf::from("/nonexistent/config.toml"));
        assert!(invalid_args.validate().is_err());
    }
}
