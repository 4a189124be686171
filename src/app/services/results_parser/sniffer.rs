//! Field delimiter detection
//!
//! Results files arrive comma, tab, semicolon or pipe separated depending on the
//! timing software that exported them. The delimiter is chosen by looking at
//! how consistently each candidate splits the lines of a leading sample.

use std::collections::BTreeMap;
use tracing::debug;

use crate::constants::{CANDIDATE_DELIMITERS, RECORD_FIELD_COUNT, SNIFF_SAMPLE_BYTES};
use crate::{Error, Result};

/// Score of one candidate delimiter over the sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CandidateScore {
    delimiter: u8,
    /// Most common per-line occurrence count
    modal_count: usize,
    /// Lines whose occurrence count equals the modal count
    consistent_lines: usize,
    /// Index in the preference list (lower wins ties)
    rank: usize,
}

impl CandidateScore {
    fn key(&self) -> (usize, bool, std::cmp::Reverse<usize>) {
        (
            self.consistent_lines,
            self.modal_count + 1 == RECORD_FIELD_COUNT,
            std::cmp::Reverse(self.rank),
        )
    }
}

/// Detect the field delimiter of a results file from its leading bytes
pub fn sniff_delimiter(content: &[u8]) -> Result<u8> {
    let sample = sample_complete_lines(content, SNIFF_SAMPLE_BYTES);

    let lines: Vec<&[u8]> = sample
        .split(|&byte| byte == b'\n')
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line))
        .filter(|line| !line.iter().all(|byte| byte.is_ascii_whitespace()))
        .collect();

    if lines.is_empty() {
        return Err(Error::delimiter_detection("input contains no data lines"));
    }

    let best = CANDIDATE_DELIMITERS
        .iter()
        .enumerate()
        .filter_map(|(rank, &delimiter)| {
            let counts: Vec<usize> = lines
                .iter()
                .map(|line| count_unquoted(line, delimiter))
                .collect();
            let modal_count = modal_count(&counts);
            if modal_count == 0 {
                return None;
            }
            let consistent_lines = counts.iter().filter(|&&c| c == modal_count).count();

            debug!(
                "Delimiter candidate {:?}: {} per line on {}/{} sample lines",
                delimiter as char,
                modal_count,
                consistent_lines,
                lines.len()
            );

            Some(CandidateScore {
                delimiter,
                modal_count,
                consistent_lines,
                rank,
            })
        })
        .max_by_key(CandidateScore::key)
        .ok_or_else(|| {
            Error::delimiter_detection(format!(
                "none of {:?} occurs in the first {} sample lines",
                CANDIDATE_DELIMITERS
                    .iter()
                    .map(|&b| b as char)
                    .collect::<String>(),
                lines.len()
            ))
        })?;

    debug!(
        "Detected delimiter {:?} ({} fields per record)",
        best.delimiter as char,
        best.modal_count + 1
    );
    Ok(best.delimiter)
}

/// Take up to `limit` bytes, dropping a trailing partial line when cut short
fn sample_complete_lines(content: &[u8], limit: usize) -> &[u8] {
    if content.len() <= limit {
        return content;
    }

    let sample = &content[..limit];
    match sample.iter().rposition(|&byte| byte == b'\n') {
        Some(end) => &sample[..end],
        None => sample,
    }
}

/// Count delimiter occurrences outside double-quoted sections
fn count_unquoted(line: &[u8], delimiter: u8) -> usize {
    let mut in_quotes = false;
    let mut count = 0;

    for &byte in line {
        if byte == b'"' {
            in_quotes = !in_quotes;
        } else if byte == delimiter && !in_quotes {
            count += 1;
        }
    }

    count
}

/// Most frequent value; the larger value wins a frequency tie
fn modal_count(counts: &[usize]) -> usize {
    let mut frequencies: BTreeMap<usize, usize> = BTreeMap::new();
    for &count in counts {
        *frequencies.entry(count).or_default() += 1;
    }

    frequencies
        .into_iter()
        .max_by_key(|&(value, frequency)| (frequency, value))
        .map(|(value, _)| value)
        .unwrap_or(0)
}
