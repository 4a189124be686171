//! Integration tests for the footage phase
//!
//! These tests build capture and primary directories in a scratch location
//! and drive the rename phase through the processing pipeline.

use regatta_formatter::Config;
use regatta_formatter::app::services::footage_mapper::{MappingIssue, RenameSummary};
use regatta_formatter::cli::commands::{FootageOutcome, ProcessOptions, process_results};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const RESULTS: &str = "1,Thames RC,A,8+,M,,,div4,00:02:30,00:02:31,00:05:01,\r\n\
                       2,Tideway Scullers,,8+,M,,,div4,00:02:30,00:02:35,00:05:05,\r\n\
                       3,Vesta RC,,8+,M,,,div4,00:02:28,00:02:30,00:04:58,\r\n";

const MAPPING: &str = "# leaf = number|club|crew|category|\n\
                       race_01 = 1|Thames RC|A|div4|150.0|151.0|301.0|2|3|1.010067\n\
                       race_02 = 2|Tideway Scullers||div4|\n\
                       race_03 = 3|Vesta RC||div4|\n\
                       garbage line\n";

struct Regatta {
    dir: TempDir,
}

impl Regatta {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("results.csv"), RESULTS).unwrap();
        std::fs::write(dir.path().join("mapping.txt"), MAPPING).unwrap();
        std::fs::create_dir_all(dir.path().join("capture")).unwrap();
        for leaf in ["race_01", "race_02"] {
            std::fs::write(
                dir.path().join("capture").join(format!("{}.mp4", leaf)),
                b"footage",
            )
            .unwrap();
        }
        Self { dir }
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }

    fn primary(&self, name: &str) -> PathBuf {
        self.path().join("primary").join(name)
    }

    fn config(&self) -> Config {
        let toml = r#"
[paths]
results_leafname = "results.csv"
template_leafname = "template.txt"
mapping_leafname = "mapping.txt"
capture_dir = "capture"
primary_dir = "primary"
"#;
        let config = Config::from_toml_str(toml)
            .unwrap()
            .with_base_dir(self.path());
        config.validate().unwrap();
        config
    }
}

fn renames(outcome: &FootageOutcome) -> &RenameSummary {
    match outcome {
        FootageOutcome::Completed(summary) => summary,
        other => panic!("footage phase did not run: {other:?}"),
    }
}

/// Test renaming footage after the report is written
///
/// Purpose: Validate destination names and the lenient handling of bad lines
/// Benefit: Confirms missing captures and garbage lines never abort the run
#[test]
fn test_footage_renamed_after_report() {
    let regatta = Regatta::new();
    let summary = process_results(&regatta.config(), &ProcessOptions::default()).unwrap();

    let footage = renames(&summary.footage);
    assert_eq!(footage.renamed, 2);
    assert_eq!(footage.already_done, 0);
    assert_eq!(footage.issues.len(), 2);
    assert!(
        footage
            .issues
            .contains(&MappingIssue::missing_capture_file(
                regatta.path().join("capture/race_03.mp4")
            ))
    );

    assert!(regatta.primary("1 Thames RC A (div4).mp4").is_file());
    assert!(regatta.primary("2 Tideway Scullers (div4).mp4").is_file());
    assert!(regatta.path().join("template.txt").is_file());
}

/// Test that re-running the footage phase changes nothing
///
/// Purpose: Validate idempotence of the rename phase
/// Benefit: A retried run after a partial failure is always safe
#[test]
fn test_second_run_performs_no_renames() {
    let regatta = Regatta::new();
    let config = regatta.config();
    process_results(&config, &ProcessOptions::default()).unwrap();

    // Drop the line whose capture was never present so the rerun is clean
    let clean_mapping: String = MAPPING
        .lines()
        .filter(|line| !line.starts_with("race_03") && !line.starts_with("garbage"))
        .map(|line| format!("{}\n", line))
        .collect();
    std::fs::write(regatta.path().join("mapping.txt"), clean_mapping).unwrap();

    let summary = process_results(&config, &ProcessOptions::default()).unwrap();
    let footage = renames(&summary.footage);
    assert_eq!(footage.renamed, 0);
    assert_eq!(footage.already_done, 2);
    assert!(footage.issues.is_empty());
}

/// Test the dry run leaves capture files in place
#[test]
fn test_dry_run_moves_nothing() {
    let regatta = Regatta::new();
    let options = ProcessOptions {
        dry_run: true,
        ..ProcessOptions::default()
    };

    let summary = process_results(&regatta.config(), &options).unwrap();
    let footage = renames(&summary.footage);
    assert!(footage.dry_run);
    assert_eq!(footage.renamed, 2);
    assert!(regatta.path().join("capture/race_01.mp4").is_file());
    assert!(!regatta.path().join("primary").exists());
}

/// Test a missing mapping file skips the phase without error
#[test]
fn test_missing_mapping_file_skips_phase() {
    let regatta = Regatta::new();
    std::fs::remove_file(regatta.path().join("mapping.txt")).unwrap();

    let summary = process_results(&regatta.config(), &ProcessOptions::default()).unwrap();
    assert!(matches!(summary.footage, FootageOutcome::Skipped { .. }));
    assert!(regatta.path().join("capture/race_01.mp4").is_file());
}

/// Test the skip flag bypasses a configured mapping
#[test]
fn test_skip_footage_option() {
    let regatta = Regatta::new();
    let options = ProcessOptions {
        skip_footage: true,
        ..ProcessOptions::default()
    };

    let summary = process_results(&regatta.config(), &options).unwrap();
    assert!(matches!(summary.footage, FootageOutcome::Skipped { .. }));
    assert!(!regatta.path().join("primary").exists());
}
