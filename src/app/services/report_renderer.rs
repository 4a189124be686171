//! Results report rendering
//!
//! The report is consumed by downstream caption tooling, so its shape is fixed:
//! one line per entry, `<label> = ` followed by ten pipe-separated fields and a
//! CRLF terminator:
//!
//! ```text
//! Comp  = 1|Club|Crew|div4|150.0|151.0|301.0|2|3|1.010067
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use tracing::info;

use crate::app::models::{RankedEntry, Standings};
use crate::constants::{DEFAULT_REPORT_LABEL, FRACTIONAL_TIME_PRECISION, REPORT_LINE_ENDING};
use crate::{Error, Result};

/// Order in which report lines are emitted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportOrder {
    /// Ascending crew number
    #[default]
    EntryNumber,
    /// Order the crews appeared in the results file
    InputOrder,
    /// Category label, then finishing position
    CategoryRank,
}

impl FromStr for ReportOrder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "entry-number" | "number" => Ok(Self::EntryNumber),
            "input-order" | "input" => Ok(Self::InputOrder),
            "category-rank" | "rank" => Ok(Self::CategoryRank),
            other => Err(Error::configuration(format!(
                "Unknown report order '{}' (expected entry-number, input-order or category-rank)",
                other
            ))),
        }
    }
}

impl fmt::Display for ReportOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::EntryNumber => "entry-number",
            Self::InputOrder => "input-order",
            Self::CategoryRank => "category-rank",
        };
        f.write_str(name)
    }
}

/// Renderer for the fixed-format results report
#[derive(Debug, Clone)]
pub struct ReportRenderer {
    label: String,
}

impl Default for ReportRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_REPORT_LABEL)
    }
}

impl ReportRenderer {
    /// Create a renderer writing `label` before each line
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    /// Render every ranked entry in the requested order
    pub fn render(&self, standings: &Standings, order: ReportOrder) -> String {
        ordered_entries(standings, order)
            .into_iter()
            .map(|ranked| self.format_line(ranked))
            .collect()
    }

    /// Format one report line, terminator included
    pub fn format_line(&self, ranked: &RankedEntry) -> String {
        let entry = &ranked.entry;
        format!(
            "{} = {}|{}|{}|{}|{}|{}|{}|{}|{}|{:.precision$}{}",
            self.label,
            entry.number,
            entry.clubname,
            entry.crewname,
            entry.category,
            format_optional_seconds(entry.leg1),
            format_optional_seconds(entry.leg2),
            format_seconds(entry.total),
            ranked.position,
            ranked.num_entries,
            ranked.fractional_time,
            REPORT_LINE_ENDING,
            precision = FRACTIONAL_TIME_PRECISION,
        )
    }
}

fn ordered_entries(standings: &Standings, order: ReportOrder) -> Vec<&RankedEntry> {
    match order {
        ReportOrder::EntryNumber => standings.entries.values().collect(),
        ReportOrder::InputOrder => {
            let mut entries: Vec<&RankedEntry> = standings.entries.values().collect();
            entries.sort_by_key(|ranked| ranked.entry.input_index);
            entries
        }
        ReportOrder::CategoryRank => standings
            .categories
            .keys()
            .flat_map(|label| standings.category_results(label))
            .collect(),
    }
}

/// Format seconds the way the report has always shown them: `301.0`
pub fn format_seconds(seconds: f64) -> String {
    if seconds.fract() == 0.0 {
        format!("{:.1}", seconds)
    } else {
        format!("{}", seconds)
    }
}

fn format_optional_seconds(seconds: Option<f64>) -> String {
    seconds.map(format_seconds).unwrap_or_default()
}

/// Write a rendered report, creating the parent directory when needed
pub fn write_report(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|e| {
                Error::io(
                    format!("Failed to create report directory {}", parent.display()),
                    e,
                )
            })?;
        }
    }

    std::fs::write(path, content)
        .map_err(|e| Error::io(format!("Failed to write report {}", path.display()), e))?;

    info!(
        "Wrote {} report lines to {}",
        content.matches(REPORT_LINE_ENDING).count(),
        path.display()
    );
    Ok(())
}
