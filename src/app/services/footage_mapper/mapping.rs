//! Mapping file decoding and rename planning
//!
//! A mapping line is a report line whose label has been replaced by the leaf
//! name of a captured video:
//!
//! ```text
//! race_07 = 12|Thames RC|A|div4|...
//! ```
//!
//! Only the first four pipe fields matter. Everything after them is ignored.

use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tracing::{debug, error};

use super::issues::MappingIssue;
use crate::constants::{MAPPING_COMMENT_PREFIX, MAPPING_LINE_PATTERN};

static MAPPING_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(MAPPING_LINE_PATTERN).expect("mapping line pattern is a valid regex")
});

/// One decoded mapping line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FootageMapping {
    /// 1-based line number in the mapping file
    pub line_number: usize,
    /// Capture leaf name without extension
    pub leaf: String,
    pub number: String,
    pub club: String,
    /// Crew designation, empty for single-crew clubs
    pub crew: String,
    pub category: String,
}

impl FootageMapping {
    /// Decode a single mapping line, `None` when it does not match
    pub fn parse(line_number: usize, line: &str) -> Option<Self> {
        let captures = MAPPING_REGEX.captures(line)?;
        let group = |index: usize| {
            captures
                .get(index)
                .map(|m| m.as_str().to_string())
                .unwrap_or_default()
        };

        Some(Self {
            line_number,
            leaf: group(1),
            number: group(2),
            club: group(3),
            crew: group(4),
            category: group(5),
        })
    }

    /// File name of the captured video
    pub fn source_name(&self, extension: &str) -> String {
        format!("{}.{}", self.leaf, extension)
    }

    /// File name the video is given in the primary directory
    pub fn destination_name(&self, extension: &str) -> String {
        if self.crew.is_empty() {
            format!(
                "{} {} ({}).{}",
                self.number, self.club, self.category, extension
            )
        } else {
            format!(
                "{} {} {} ({}).{}",
                self.number, self.club, self.crew, self.category, extension
            )
        }
    }
}

/// A single planned move from the capture to the primary directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameAction {
    pub source: PathBuf,
    pub destination: PathBuf,
}

/// Renames planned from a mapping file, plus the lines that were skipped
#[derive(Debug, Clone, Default)]
pub struct MappingPlan {
    pub actions: Vec<RenameAction>,
    pub issues: Vec<MappingIssue>,
}

impl MappingPlan {
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

/// Build the rename plan for a mapping file
///
/// Comment and blank lines are ignored. Undecodable lines and destinations
/// that would escape `primary_dir` are logged and recorded as issues. No
/// filesystem access happens here.
pub fn plan_renames(
    mapping_text: &str,
    capture_dir: &Path,
    primary_dir: &Path,
    extension: &str,
) -> MappingPlan {
    let mut plan = MappingPlan::default();

    for (index, line) in mapping_text.lines().enumerate() {
        let line_number = index + 1;
        if line.starts_with(MAPPING_COMMENT_PREFIX) || line.trim().is_empty() {
            continue;
        }

        let Some(mapping) = FootageMapping::parse(line_number, line) else {
            let issue = MappingIssue::unparsable(line_number, line);
            error!("{}", issue);
            plan.issues.push(issue);
            continue;
        };

        let destination_name = mapping.destination_name(extension);
        if is_unsafe_name(&destination_name) {
            let issue = MappingIssue::unsafe_destination(line_number, destination_name);
            error!("{}", issue);
            plan.issues.push(issue);
            continue;
        }

        let action = RenameAction {
            source: capture_dir.join(mapping.source_name(extension)),
            destination: primary_dir.join(destination_name),
        };
        debug!(
            "Planned {} -> {}",
            action.source.display(),
            action.destination.display()
        );
        plan.actions.push(action);
    }

    plan
}

fn is_unsafe_name(name: &str) -> bool {
    name.contains('/') || name.contains('\\') || name.contains(std::path::MAIN_SEPARATOR)
}
