//! Field parsing utilities for results records
//!
//! This module provides helper functions for converting the textual entry
//! number and `HH:MM:SS` time fields into typed values with proper error
//! handling.

use regex::Regex;
use std::sync::LazyLock;

use crate::app::models::EntryNumber;
use crate::constants::{SECONDS_PER_HOUR, SECONDS_PER_MINUTE, TIME_PATTERN};
use crate::{Error, Result};

static TIME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(TIME_PATTERN).expect("time pattern is a valid regex"));

/// Convert an `HH:MM:SS` string to seconds
///
/// Every component must be two digits in the range 00-59, hours included.
/// Returns `None` when the value does not match.
pub fn convert_time(value: &str) -> Option<f64> {
    let captures = TIME_REGEX.captures(value.trim())?;

    let component = |index: usize| -> f64 {
        captures
            .get(index)
            .and_then(|m| m.as_str().parse::<u32>().ok())
            .map(f64::from)
            .unwrap_or_default()
    };

    Some(SECONDS_PER_HOUR * component(1) + SECONDS_PER_MINUTE * component(2) + component(3))
}

/// Parse an optional time field; empty values stay unset
pub fn parse_optional_time(
    value: &str,
    number: EntryNumber,
    field_name: &str,
) -> Result<Option<f64>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    convert_time(trimmed)
        .map(Some)
        .ok_or_else(|| Error::time_format(number, field_name, trimmed))
}

/// Parse a crew number as a positive base-10 integer
///
/// `record` is the 1-based record index used in the error message.
pub fn parse_entry_number(value: &str, record: usize) -> Result<EntryNumber> {
    let trimmed = value.trim();

    match trimmed.parse::<EntryNumber>() {
        Ok(number) if number > 0 => Ok(number),
        _ => Err(Error::invalid_entry_number(record, trimmed)),
    }
}
