//! Application constants for the regatta formatter
//!
//! This module contains the results file schema, status sentinels, default
//! validation bounds, and report/footage formatting constants used throughout
//! the application.

// =============================================================================
// Results File Schema
// =============================================================================

/// Field names of a results record, in file order
pub mod fields {
    pub const NUMBER: &str = "number";
    pub const CLUBNAME: &str = "clubname";
    pub const CREWNAME: &str = "crewname";
    pub const BOATTYPE: &str = "boattype";
    pub const GENDER: &str = "gender";
    pub const AFFILIATION: &str = "affiliation";
    pub const STATUS: &str = "status";
    pub const CATEGORY: &str = "category";
    pub const LEG1TIME: &str = "leg1time";
    pub const LEG2TIME: &str = "leg2time";
    pub const TOTALTIME: &str = "totaltime";
    pub const ADJUSTEDTIME: &str = "adjustedtime";

    /// Positional schema of a results record (no header row in the file)
    pub const SCHEMA: [&str; 12] = [
        NUMBER,
        CLUBNAME,
        CREWNAME,
        BOATTYPE,
        GENDER,
        AFFILIATION,
        STATUS,
        CATEGORY,
        LEG1TIME,
        LEG2TIME,
        TOTALTIME,
        ADJUSTEDTIME,
    ];
}

/// Number of positional fields in a results record
pub const RECORD_FIELD_COUNT: usize = fields::SCHEMA.len();

/// Status values marking a crew without a recorded finish
pub mod status {
    /// Did not finish
    pub const DNF: &str = "DNF";

    /// Did not record a time
    pub const DNR: &str = "DNR";

    /// Did not start
    pub const DNS: &str = "DNS";

    /// All non-finish sentinels (compared case-sensitively after trimming)
    pub const NON_FINISH: &[&str] = &[DNF, DNR, DNS];
}

/// Check whether a raw field value is one of the non-finish sentinels
pub fn is_non_finish(value: &str) -> bool {
    status::NON_FINISH.contains(&value.trim())
}

// =============================================================================
// Delimiter Detection
// =============================================================================

/// Number of leading bytes inspected when sniffing the delimiter
pub const SNIFF_SAMPLE_BYTES: usize = 1024;

/// Candidate delimiters, in order of preference on ties
pub const CANDIDATE_DELIMITERS: &[u8] = b",\t;|";

// =============================================================================
// Time Handling
// =============================================================================

/// Time field pattern: HH:MM:SS with every component in 00-59
pub const TIME_PATTERN: &str = r"^([0-5][0-9]):([0-5][0-9]):([0-5][0-9])$";

pub const SECONDS_PER_HOUR: f64 = 3600.0;
pub const SECONDS_PER_MINUTE: f64 = 60.0;

// =============================================================================
// Validation Defaults
// =============================================================================

/// Lowest accepted fractional time (the category winner scores exactly this)
pub const DEFAULT_MIN_FRACTIONAL_TIME: f64 = 1.0;

/// Highest accepted fractional time
pub const DEFAULT_MAX_FRACTIONAL_TIME: f64 = 2.0;

// =============================================================================
// Report and Footage Constants
// =============================================================================

/// Label written before each report line
pub const DEFAULT_REPORT_LABEL: &str = "Comp ";

/// Report line terminator expected by downstream consumers
pub const REPORT_LINE_ENDING: &str = "\r\n";

/// Decimal places used for the fractional time column
pub const FRACTIONAL_TIME_PRECISION: usize = 6;

/// Extension of captured and renamed footage files
pub const DEFAULT_VIDEO_EXTENSION: &str = "mp4";

/// Mapping file comment marker
pub const MAPPING_COMMENT_PREFIX: &str = "#";

/// Mapping line pattern: `<leaf> = <number>|<f2>|<f3>|<f4 optional>|<f5>|`
pub const MAPPING_LINE_PATTERN: &str =
    r"^([0-9A-Za-z./_ ]+) = (\d+)\|([^|]+)\|([^|]*)\|([^|]+)\|";

// =============================================================================
// Configuration Locations
// =============================================================================

/// Directory name under the user configuration directory
pub const CONFIG_DIR_NAME: &str = "regatta-formatter";

/// Default configuration file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Logging target used for the default filter
pub const LOG_TARGET: &str = "regatta_formatter";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_finish_detection() {
        assert!(is_non_finish("DNF"));
        assert!(is_non_finish(" DNS "));
        assert!(is_non_finish("DNR\t"));
        assert!(!is_non_finish("dns"));
        assert!(!is_non_finish(""));
        assert!(!is_non_finish("00:10:00"));
    }

    #[test]
    fn test_schema_shape() {
        assert_eq!(RECORD_FIELD_COUNT, 12);
        assert_eq!(fields::SCHEMA[0], fields::NUMBER);
        assert_eq!(fields::SCHEMA[10], fields::TOTALTIME);
    }
}
