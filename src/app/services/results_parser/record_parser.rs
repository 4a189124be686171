//! Individual record parsing for results files
//!
//! This module maps a positional CSV record onto the fixed twelve-field schema
//! and turns finishing crews into validated entries.

use csv::StringRecord;

use super::field_parsers::parse_optional_time;
use crate::app::models::{Entry, EntryNumber};
use crate::constants::{fields, is_non_finish};
use crate::{Error, Result};

/// One line of the results file, fields trimmed but otherwise unconverted
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    pub number: String,
    pub clubname: String,
    pub crewname: String,
    pub boattype: String,
    pub gender: String,
    pub affiliation: String,
    pub status: String,
    pub category: String,
    pub leg1time: String,
    pub leg2time: String,
    pub totaltime: String,
    pub adjustedtime: String,
}

impl RawRecord {
    /// Decode a record positionally; missing trailing fields read as empty
    pub fn from_record(record: &StringRecord) -> Self {
        let field = |index: usize| record.get(index).unwrap_or_default().trim().to_string();

        Self {
            number: field(0),
            clubname: field(1),
            crewname: field(2),
            boattype: field(3),
            gender: field(4),
            affiliation: field(5),
            status: field(6),
            category: field(7),
            leg1time: field(8),
            leg2time: field(9),
            totaltime: field(10),
            adjustedtime: field(11),
        }
    }

    /// Whether the crew did not finish, start or record a time
    ///
    /// Timing exports put the sentinel in either the status or the total time
    /// column, so both are checked.
    pub fn is_non_finisher(&self) -> bool {
        is_non_finish(&self.status) || is_non_finish(&self.totaltime)
    }

    /// Convert to a validated entry
    ///
    /// The caller has already parsed and de-duplicated the entry number.
    pub fn into_entry(self, number: EntryNumber, input_index: usize) -> Result<Entry> {
        let leg1 = parse_optional_time(&self.leg1time, number, fields::LEG1TIME)?;
        let leg2 = parse_optional_time(&self.leg2time, number, fields::LEG2TIME)?;
        let total = parse_optional_time(&self.totaltime, number, fields::TOTALTIME)?
            .ok_or_else(|| Error::missing_total_time(number))?;

        let entry = Entry {
            number,
            clubname: self.clubname,
            crewname: self.crewname,
            boattype: self.boattype,
            gender: self.gender,
            affiliation: self.affiliation,
            status: self.status,
            category: self.category,
            leg1,
            leg2,
            total,
            adjusted_time: self.adjustedtime,
            input_index,
        };

        entry.validate()?;
        Ok(entry)
    }
}

/// Whether every field of a record is blank
pub fn is_blank_record(record: &StringRecord) -> bool {
    record.iter().all(|field| field.trim().is_empty())
}
