//! Regatta Formatter Library
//!
//! A Rust library for turning a finished batch of rowing race timings into
//! category standings, a fixed-format results report, and renamed race footage.
//!
//! This library provides tools for:
//! - Parsing delimited timing files with automatic delimiter detection
//! - Validating leg/total consistency and entry number uniqueness
//! - Ranking entries within their category with a stable sort on total time
//! - Rendering the pipe-delimited, CRLF-terminated results report
//! - Renaming captured video files from a mapping file without overwriting

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod footage_mapper;
        pub mod report_renderer;
        pub mod results_parser;
        pub mod standings;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{CategoryStanding, Entry, EntryMap, EntryNumber, RankedEntry, Standings};
pub use config::Config;

/// Result type alias for the regatta formatter
pub type Result<T> = std::result::Result<T, Error>;

/// Fatal error types for results processing
///
/// Every variant aborts the run. Recoverable problems found while remapping
/// footage are reported through
/// [`MappingIssue`](app::services::footage_mapper::MappingIssue) instead.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV decoding error
    #[error("CSV parsing error: {message}")]
    CsvParsing {
        message: String,
        #[source]
        source: csv::Error,
    },

    /// No usable field delimiter could be detected
    #[error("Could not detect field delimiter: {message}")]
    DelimiterDetection { message: String },

    /// Entry number is not a positive base-10 integer
    #[error("Invalid entry number '{value}' at record {record}")]
    InvalidEntryNumber { record: usize, value: String },

    /// Entry number seen twice in one results file
    #[error("Duplicate crew number {number}")]
    DuplicateEntry { number: EntryNumber },

    /// Time field is not HH:MM:SS with every part in 00-59
    #[error("Cannot convert {field} '{value}' for crew {number} (expected HH:MM:SS, 00-59 each)")]
    TimeFormat {
        number: EntryNumber,
        field: String,
        value: String,
    },

    /// Finishing crew has no total time
    #[error("Crew {number} has no total time")]
    MissingTotalTime { number: EntryNumber },

    /// Leg times do not add up to the total time
    #[error("Bad time for crew {number}: {leg1}s + {leg2}s != {total}s")]
    TimeConsistency {
        number: EntryNumber,
        leg1: f64,
        leg2: f64,
        total: f64,
    },

    /// Only one of the two leg times was recorded
    #[error("Bad time for crew {number}: {missing} is empty but the other leg is set")]
    IncompleteSplits { number: EntryNumber, missing: String },

    /// Fractional time outside the plausibility window
    #[error("Bad fractional time {fraction:.6} for crew {number} (allowed {min}..={max})")]
    ImplausibleTime {
        number: EntryNumber,
        fraction: f64,
        min: f64,
        max: f64,
    },

    /// Category ordering is not sorted by total time
    #[error("Category '{category}' sorting fault {first} > {second} (order {order})")]
    SortingFault {
        category: String,
        first: String,
        second: String,
        order: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a CSV parsing error with context
    pub fn csv_parsing(message: impl Into<String>, source: csv::Error) -> Self {
        Self::CsvParsing {
            message: message.into(),
            source,
        }
    }

    /// Create a delimiter detection error
    pub fn delimiter_detection(message: impl Into<String>) -> Self {
        Self::DelimiterDetection {
            message: message.into(),
        }
    }

    /// Create an invalid entry number error
    pub fn invalid_entry_number(record: usize, value: impl Into<String>) -> Self {
        Self::InvalidEntryNumber {
            record,
            value: value.into(),
        }
    }

    /// Create a duplicate entry error
    pub fn duplicate_entry(number: EntryNumber) -> Self {
        Self::DuplicateEntry { number }
    }

    /// Create a time format error
    pub fn time_format(
        number: EntryNumber,
        field: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::TimeFormat {
            number,
            field: field.into(),
            value: value.into(),
        }
    }

    /// Create a missing total time error
    pub fn missing_total_time(number: EntryNumber) -> Self {
        Self::MissingTotalTime { number }
    }

    /// Create a time consistency error
    pub fn time_consistency(number: EntryNumber, leg1: f64, leg2: f64, total: f64) -> Self {
        Self::TimeConsistency {
            number,
            leg1,
            leg2,
            total,
        }
    }

    /// Create an incomplete splits error
    pub fn incomplete_splits(number: EntryNumber, missing: impl Into<String>) -> Self {
        Self::IncompleteSplits {
            number,
            missing: missing.into(),
        }
    }

    /// Create an implausible fractional time error
    pub fn implausible_time(number: EntryNumber, fraction: f64, min: f64, max: f64) -> Self {
        Self::ImplausibleTime {
            number,
            fraction,
            min,
            max,
        }
    }

    /// Create a sorting fault error
    pub fn sorting_fault(
        category: impl Into<String>,
        first: impl Into<String>,
        second: impl Into<String>,
        order: impl Into<String>,
    ) -> Self {
        Self::SortingFault {
            category: category.into(),
            first: first.into(),
            second: second.into(),
            order: order.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Whether the error came from inconsistent input data rather than the environment
    pub fn is_data_error(&self) -> bool {
        matches!(
            self,
            Error::DelimiterDetection { .. }
                | Error::InvalidEntryNumber { .. }
                | Error::DuplicateEntry { .. }
                | Error::TimeFormat { .. }
                | Error::MissingTotalTime { .. }
                | Error::TimeConsistency { .. }
                | Error::IncompleteSplits { .. }
                | Error::ImplausibleTime { .. }
                | Error::SortingFault { .. }
        )
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvParsing {
            message: "CSV parsing failed".to_string(),
            source: error,
        }
    }
}
