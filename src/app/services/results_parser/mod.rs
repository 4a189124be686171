//! Results file parser for regatta timing data
//!
//! This module turns the raw bytes of a finished results file into validated
//! [`Entry`](crate::app::models::Entry) values keyed by crew number. The file
//! has no header row; its field delimiter is detected from the content.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`parser`] - Core parsing orchestration and file handling
//! - [`sniffer`] - Field delimiter detection from a sample of the input
//! - [`record_parser`] - Positional record decoding and entry construction
//! - [`field_parsers`] - Entry number and `HH:MM:SS` time conversion
//! - [`stats`] - Parsing statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use regatta_formatter::app::services::results_parser::ResultsParser;
//!
//! # fn example() -> regatta_formatter::Result<()> {
//! let parser = ResultsParser::new();
//! let result = parser.parse(b"1,Club,Crew,8+,M,,,div4,00:02:30,00:02:31,00:05:01,\n")?;
//!
//! println!("Parsed {} entries from {} records",
//!          result.stats.entries_parsed,
//!          result.stats.total_records);
//! # Ok(())
//! # }
//! ```

pub mod field_parsers;
pub mod parser;
pub mod record_parser;
pub mod sniffer;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use parser::ResultsParser;
pub use record_parser::RawRecord;
pub use sniffer::sniff_delimiter;
pub use stats::{ParseResult, ParseStats};
