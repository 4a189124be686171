//! Recoverable problems met while remapping footage
//!
//! None of these stop a run. Each one is logged at error level when found and
//! the affected mapping line is left alone.

use serde::Serialize;
use std::path::PathBuf;

/// A mapping line or rename that was skipped
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MappingIssue {
    /// Line does not look like `<leaf> = <number>|<club>|<crew>|<category>|`
    #[error("Undecodable mapping at line {line_number}: {line}")]
    Unparsable { line_number: usize, line: String },

    /// Computed destination name would leave the primary directory
    #[error("Unsafe destination name at line {line_number}: {name}")]
    UnsafeDestination { line_number: usize, name: String },

    /// Capture file named by the mapping is not there
    #[error("Missing file in mapping {}", path.display())]
    MissingCaptureFile { path: PathBuf },
}

impl MappingIssue {
    /// Create an unparsable line issue
    pub fn unparsable(line_number: usize, line: impl Into<String>) -> Self {
        Self::Unparsable {
            line_number,
            line: line.into(),
        }
    }

    /// Create an unsafe destination issue
    pub fn unsafe_destination(line_number: usize, name: impl Into<String>) -> Self {
        Self::UnsafeDestination {
            line_number,
            name: name.into(),
        }
    }

    /// Create a missing capture file issue
    pub fn missing_capture_file(path: impl Into<PathBuf>) -> Self {
        Self::MissingCaptureFile { path: path.into() }
    }
}
