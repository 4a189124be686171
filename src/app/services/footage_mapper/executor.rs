//! Rename execution
//!
//! Renames never overwrite. A destination that is already present counts as
//! done, which makes a second run over the same mapping a no-op.

use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use tracing::{error, info};

use super::issues::MappingIssue;
use super::mapping::RenameAction;
use crate::{Error, Result};

/// Outcome of executing a rename plan
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenameSummary {
    /// Files moved (or that would have been moved in a dry run)
    pub renamed: usize,
    /// Actions whose destination was already present
    pub already_done: usize,
    /// Actions skipped because of a recoverable problem
    pub issues: Vec<MappingIssue>,
    pub dry_run: bool,
}

impl RenameSummary {
    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }
}

/// Execute planned renames
pub fn execute(actions: &[RenameAction], dry_run: bool) -> Result<RenameSummary> {
    execute_with_progress(actions, dry_run, None)
}

/// Execute planned renames, advancing `progress_bar` once per action
///
/// Recoverable problems are logged and collected in the summary. A rename the
/// filesystem refuses is fatal.
pub fn execute_with_progress(
    actions: &[RenameAction],
    dry_run: bool,
    progress_bar: Option<&ProgressBar>,
) -> Result<RenameSummary> {
    let mut summary = RenameSummary {
        dry_run,
        ..RenameSummary::default()
    };

    for action in actions {
        if let Some(pb) = progress_bar {
            pb.inc(1);
        }

        if action.destination.exists() {
            info!("Already renamed: {}", action.destination.display());
            summary.already_done += 1;
            continue;
        }

        if !action.source.is_file() {
            let issue = MappingIssue::missing_capture_file(&action.source);
            error!("{}", issue);
            summary.issues.push(issue);
            continue;
        }

        if dry_run {
            info!(
                "Would rename {} -> {}",
                action.source.display(),
                action.destination.display()
            );
            summary.renamed += 1;
            continue;
        }

        if let Some(parent) = action.destination.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    Error::io(
                        format!("Failed to create primary directory {}", parent.display()),
                        e,
                    )
                })?;
            }
        }

        info!(
            "{} -> {}",
            action.source.display(),
            action.destination.display()
        );
        std::fs::rename(&action.source, &action.destination).map_err(|e| {
            Error::io(
                format!(
                    "Failed to rename {} to {}",
                    action.source.display(),
                    action.destination.display()
                ),
                e,
            )
        })?;
        summary.renamed += 1;
    }

    if let Some(pb) = progress_bar {
        pb.finish_with_message(format!(
            "{} renamed, {} already done",
            summary.renamed, summary.already_done
        ));
    }

    Ok(summary)
}

/// Progress bar for a batch of renames
pub fn create_rename_progress_bar(total: usize) -> ProgressBar {
    let pb = ProgressBar::new(total as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
    {
        pb.set_style(style.progress_chars("#>-"));
    }
    pb.set_message("Renaming footage");
    pb
}
