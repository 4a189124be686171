//! Tests for rename execution

use super::*;
use crate::app::services::footage_mapper::{
    FootageMapper, MappingIssue, RenameAction, execute, plan_renames,
};
use tempfile::TempDir;

struct FootageDirs {
    _root: TempDir,
    capture: std::path::PathBuf,
    primary: std::path::PathBuf,
}

fn footage_dirs() -> FootageDirs {
    let root = TempDir::new().unwrap();
    let capture = root.path().join("capture");
    let primary = root.path().join("primary");
    std::fs::create_dir_all(&capture).unwrap();
    std::fs::create_dir_all(&primary).unwrap();
    FootageDirs {
        _root: root,
        capture,
        primary,
    }
}

#[test]
fn test_execute_renames_files() {
    let dirs = footage_dirs();
    touch(&dirs.capture.join("race_01.mp4"));
    touch(&dirs.capture.join("race_02.mp4"));

    let plan = plan_renames(&create_test_mapping(), &dirs.capture, &dirs.primary, "mp4");
    let summary = execute(&plan.actions, false).unwrap();

    assert_eq!(summary.renamed, 2);
    assert_eq!(summary.already_done, 0);
    assert!(!summary.has_issues());
    assert!(dirs.primary.join("1 Thames RC A (div4).mp4").is_file());
    assert!(dirs.primary.join("2 Tideway Scullers (div4).mp4").is_file());
    assert!(!dirs.capture.join("race_01.mp4").exists());
}

#[test]
fn test_second_run_is_noop() {
    let dirs = footage_dirs();
    touch(&dirs.capture.join("race_01.mp4"));
    touch(&dirs.capture.join("race_02.mp4"));

    let plan = plan_renames(&create_test_mapping(), &dirs.capture, &dirs.primary, "mp4");
    let first = execute(&plan.actions, false).unwrap();
    assert_eq!(first.renamed, 2);

    let second = execute(&plan.actions, false).unwrap();
    assert_eq!(second.renamed, 0);
    assert_eq!(second.already_done, 2);
    assert!(second.issues.is_empty());
}

#[test]
fn test_missing_capture_file_is_skipped() {
    let dirs = footage_dirs();
    touch(&dirs.capture.join("race_02.mp4"));

    let plan = plan_renames(&create_test_mapping(), &dirs.capture, &dirs.primary, "mp4");
    let summary = execute(&plan.actions, false).unwrap();

    assert_eq!(summary.renamed, 1);
    assert_eq!(
        summary.issues,
        vec![MappingIssue::missing_capture_file(
            dirs.capture.join("race_01.mp4")
        )]
    );
}

#[test]
fn test_existing_destination_is_never_overwritten() {
    let dirs = footage_dirs();
    let source = dirs.capture.join("race_01.mp4");
    let destination = dirs.primary.join("1 Thames RC A (div4).mp4");
    touch(&source);
    std::fs::write(&destination, b"already edited").unwrap();

    let action = RenameAction {
        source: source.clone(),
        destination: destination.clone(),
    };
    let summary = execute(&[action], false).unwrap();

    assert_eq!(summary.already_done, 1);
    assert_eq!(summary.renamed, 0);
    assert!(source.exists());
    assert_eq!(std::fs::read(&destination).unwrap(), b"already edited");
}

#[test]
fn test_dry_run_leaves_files_alone() {
    let dirs = footage_dirs();
    touch(&dirs.capture.join("race_01.mp4"));

    let plan = plan_renames(&create_test_mapping(), &dirs.capture, &dirs.primary, "mp4");
    let summary = execute(&plan.actions, true).unwrap();

    assert!(summary.dry_run);
    assert_eq!(summary.renamed, 1);
    assert_eq!(summary.issues.len(), 1);
    assert!(dirs.capture.join("race_01.mp4").exists());
    assert!(!dirs.primary.join("1 Thames RC A (div4).mp4").exists());
}

#[test]
fn test_mapper_run_collects_all_issues() {
    let dirs = footage_dirs();
    touch(&dirs.capture.join("race_01.mp4"));
    let mapping_path = dirs.capture.join("mapping.txt");
    std::fs::write(&mapping_path, create_test_mapping()).unwrap();

    let summary = FootageMapper::new(&dirs.capture, &dirs.primary)
        .run(&mapping_path, false)
        .unwrap()
        .unwrap();

    assert_eq!(summary.renamed, 1);
    // One undecodable line from planning, one missing capture file from execution
    assert_eq!(summary.issues.len(), 2);
    assert!(matches!(summary.issues[0], MappingIssue::Unparsable { .. }));
    assert!(matches!(
        summary.issues[1],
        MappingIssue::MissingCaptureFile { .. }
    ));
}

#[test]
fn test_mapper_tolerates_invalid_utf8_mapping() {
    let dirs = footage_dirs();
    touch(&dirs.capture.join("race_01.mp4"));
    touch(&dirs.capture.join("race_02.mp4"));

    // Latin-1 club name on the second line
    let mut mapping = b"race_01 = 1|Thames RC|A|div4|\r\n".to_vec();
    mapping.extend_from_slice(b"race_02 = 2|Soci\xE9t\xE9 Nautique||div4|\r\n");
    let mapping_path = dirs.capture.join("mapping.txt");
    std::fs::write(&mapping_path, &mapping).unwrap();

    let summary = FootageMapper::new(&dirs.capture, &dirs.primary)
        .run(&mapping_path, false)
        .unwrap()
        .unwrap();

    assert_eq!(summary.renamed, 2);
    assert!(summary.issues.is_empty());
    assert!(dirs.primary.join("1 Thames RC A (div4).mp4").is_file());
    assert!(
        dirs.primary
            .join("2 Soci\u{FFFD}t\u{FFFD} Nautique (div4).mp4")
            .is_file()
    );
}

#[test]
fn test_mapper_skips_missing_mapping_file() {
    let dirs = footage_dirs();
    let result = FootageMapper::new(&dirs.capture, &dirs.primary)
        .run(&dirs.capture.join("absent.txt"), false)
        .unwrap();

    assert!(result.is_none());
}

#[test]
fn test_mapper_custom_extension() {
    let dirs = footage_dirs();
    touch(&dirs.capture.join("race_01.mov"));

    let mapper = FootageMapper::new(&dirs.capture, &dirs.primary).with_extension(".mov");
    let plan = mapper.plan("race_01 = 1|Thames RC|A|div4|");
    let summary = execute(&plan.actions, false).unwrap();

    assert_eq!(summary.renamed, 1);
    assert!(dirs.primary.join("1 Thames RC A (div4).mov").is_file());
}
