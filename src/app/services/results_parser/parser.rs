//! Core results parser implementation
//!
//! This module provides the main parser orchestration: reading the file,
//! detecting the delimiter, decoding records and accumulating the entry map.
//! The first invalid record aborts the whole parse.

use std::borrow::Cow;
use std::path::Path;
use tracing::{debug, info, warn};

use super::field_parsers::parse_entry_number;
use super::record_parser::{RawRecord, is_blank_record};
use super::sniffer::sniff_delimiter;
use super::stats::{ParseResult, ParseStats};
use crate::app::models::EntryMap;
use crate::{Error, Result};

/// Parser for regatta results files
///
/// This parser focuses on essential functionality:
/// - Delimiter detection from the file content (or a fixed override)
/// - Skipping crews marked DNF, DNR or DNS
/// - Fail-fast validation of numbers, times and leg sums
#[derive(Debug, Clone, Default)]
pub struct ResultsParser {
    delimiter: Option<u8>,
}

impl ResultsParser {
    /// Create a parser that sniffs the delimiter from each input
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a fixed delimiter instead of sniffing
    pub fn with_delimiter(mut self, delimiter: Option<u8>) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Read and parse a results file
    pub fn parse_file(&self, file_path: &Path) -> Result<ParseResult> {
        info!("Parsing results file: {}", file_path.display());

        let content = std::fs::read(file_path).map_err(|e| {
            Error::io(
                format!("Failed to read results file {}", file_path.display()),
                e,
            )
        })?;

        self.parse(&content)
    }

    /// Parse raw results bytes into validated entries
    pub fn parse(&self, content: &[u8]) -> Result<ParseResult> {
        let text = match String::from_utf8_lossy(content) {
            Cow::Borrowed(text) => Cow::Borrowed(text),
            Cow::Owned(text) => {
                warn!("Results file is not valid UTF-8; invalid bytes were replaced");
                Cow::Owned(text)
            }
        };

        let delimiter = match self.delimiter {
            Some(delimiter) => delimiter,
            None => sniff_delimiter(text.as_bytes())?,
        };
        debug!("Decoding records with delimiter {:?}", delimiter as char);

        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .delimiter(delimiter)
            .from_reader(text.as_bytes());

        let mut stats = ParseStats::new();
        let mut entries = EntryMap::new();

        for result in csv_reader.records() {
            let record = result.map_err(|e| {
                Error::csv_parsing(
                    format!("Failed to read record {}", stats.total_records + 1),
                    e,
                )
            })?;

            if is_blank_record(&record) {
                continue;
            }
            stats.total_records += 1;

            let raw = RawRecord::from_record(&record);

            if raw.is_non_finisher() {
                warn!("Skipping untimed crew {:?}", raw);
                stats.record_non_finisher(raw.number.clone());
                continue;
            }

            let number = parse_entry_number(&raw.number, stats.total_records)?;
            if entries.contains_key(&number) {
                return Err(Error::duplicate_entry(number));
            }

            let entry = raw.into_entry(number, entries.len())?;
            entries.insert(number, entry);
            stats.entries_parsed += 1;
        }

        let result = ParseResult {
            entries,
            stats,
            delimiter,
        };

        info!(
            "Categories: {}",
            result.categories().into_iter().collect::<Vec<_>>().join(", ")
        );
        info!(
            "Parsed {} entries from {} records ({} non-finishers skipped)",
            result.stats.entries_parsed, result.stats.total_records, result.stats.non_finishers
        );

        Ok(result)
    }
}
