//! Parsing statistics and result structures for results file processing
//!
//! This module provides types for tracking how many records were read,
//! accepted and skipped, and for handing the parsed entries downstream.

use crate::app::models::EntryMap;
use std::collections::BTreeSet;

/// Parsing result with entries and basic statistics
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Validated entries keyed by crew number
    pub entries: EntryMap,

    /// Basic parsing statistics
    pub stats: ParseStats,

    /// Field delimiter used to decode the file
    pub delimiter: u8,
}

impl ParseResult {
    /// Distinct category labels, sorted
    pub fn categories(&self) -> BTreeSet<&str> {
        self.entries
            .values()
            .map(|entry| entry.category.as_str())
            .collect()
    }
}

/// Simple parsing statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct ParseStats {
    /// Total number of non-blank records encountered
    pub total_records: usize,

    /// Number of entries accepted
    pub entries_parsed: usize,

    /// Number of records skipped as DNF/DNR/DNS
    pub non_finishers: usize,

    /// Crew numbers (as written) of the skipped records
    pub skipped_numbers: Vec<String>,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a skipped non-finishing crew
    pub fn record_non_finisher(&mut self, number: impl Into<String>) {
        self.non_finishers += 1;
        self.skipped_numbers.push(number.into());
    }
}
