//! Footage remapping for captured race videos
//!
//! After the report is written, captured videos can be moved into the primary
//! footage directory under names derived from a mapping file. This stage is
//! lenient: bad mapping lines and missing capture files are logged and
//! skipped, and a missing mapping file skips the stage altogether.
//!
//! # Architecture
//!
//! - [`mapping`] - Mapping line decoding and rename planning
//! - [`executor`] - Non-overwriting, idempotent rename execution
//! - [`issues`] - Recoverable problems collected along the way

pub mod executor;
pub mod issues;
pub mod mapping;

#[cfg(test)]
pub mod tests;

use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::constants::DEFAULT_VIDEO_EXTENSION;
use crate::{Error, Result};

// Re-export main types for easy access
pub use executor::{RenameSummary, create_rename_progress_bar, execute, execute_with_progress};
pub use issues::MappingIssue;
pub use mapping::{FootageMapping, MappingPlan, RenameAction, plan_renames};

/// Moves captured footage into the primary directory
#[derive(Debug, Clone)]
pub struct FootageMapper {
    capture_dir: PathBuf,
    primary_dir: PathBuf,
    extension: String,
    show_progress: bool,
}

impl FootageMapper {
    /// Create a mapper for the given capture and primary directories
    pub fn new(capture_dir: impl Into<PathBuf>, primary_dir: impl Into<PathBuf>) -> Self {
        Self {
            capture_dir: capture_dir.into(),
            primary_dir: primary_dir.into(),
            extension: DEFAULT_VIDEO_EXTENSION.to_string(),
            show_progress: false,
        }
    }

    /// Use a different video file extension (without the dot)
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into().trim_start_matches('.').to_string();
        self
    }

    /// Show a progress bar while renaming
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Plan renames from mapping text
    pub fn plan(&self, mapping_text: &str) -> MappingPlan {
        plan_renames(
            mapping_text,
            &self.capture_dir,
            &self.primary_dir,
            &self.extension,
        )
    }

    /// Plan and execute the renames listed in a mapping file
    ///
    /// Returns `Ok(None)` when the mapping file does not exist.
    pub fn run(&self, mapping_path: &Path, dry_run: bool) -> Result<Option<RenameSummary>> {
        if !mapping_path.exists() {
            info!(
                "Not generating primary footage because mapping file missing ({})",
                mapping_path.display()
            );
            return Ok(None);
        }

        let mapping_bytes = std::fs::read(mapping_path).map_err(|e| {
            Error::io(
                format!("Failed to read mapping file {}", mapping_path.display()),
                e,
            )
        })?;

        let mapping_text = String::from_utf8_lossy(&mapping_bytes);
        if let Cow::Owned(_) = mapping_text {
            warn!(
                "Mapping file {} is not valid UTF-8; invalid bytes were replaced",
                mapping_path.display()
            );
        }

        let plan = self.plan(&mapping_text);
        info!(
            "Mapping file {}: {} renames planned, {} lines skipped",
            mapping_path.display(),
            plan.actions.len(),
            plan.issues.len()
        );

        let progress_bar = self
            .show_progress
            .then(|| create_rename_progress_bar(plan.actions.len()));
        let mut summary = execute_with_progress(&plan.actions, dry_run, progress_bar.as_ref())?;

        let mut issues = plan.issues;
        issues.append(&mut summary.issues);
        summary.issues = issues;

        Ok(Some(summary))
    }
}
