//! Tests for entry number and time field conversion

use crate::Error;
use crate::app::services::results_parser::field_parsers::{
    convert_time, parse_entry_number, parse_optional_time,
};

#[test]
fn test_convert_time_components() {
    assert_eq!(convert_time("00:00:00"), Some(0.0));
    assert_eq!(convert_time("00:05:01"), Some(301.0));
    assert_eq!(convert_time("01:02:03"), Some(3723.0));
    assert_eq!(convert_time("59:59:59"), Some(215_999.0));
}

#[test]
fn test_convert_time_trims_whitespace() {
    assert_eq!(convert_time(" 00:04:58 "), Some(298.0));
}

#[test]
fn test_convert_time_rejects_out_of_range_components() {
    assert_eq!(convert_time("99:00:00"), None);
    assert_eq!(convert_time("00:60:00"), None);
    assert_eq!(convert_time("00:00:60"), None);
}

#[test]
fn test_convert_time_rejects_malformed_values() {
    assert_eq!(convert_time("5:01"), None);
    assert_eq!(convert_time("0:05:01"), None);
    assert_eq!(convert_time("00:05:01.5"), None);
    assert_eq!(convert_time("00:05:01x"), None);
    assert_eq!(convert_time("DNF"), None);
}

#[test]
fn test_parse_optional_time_empty_is_unset() {
    assert_eq!(parse_optional_time("", 1, "leg1time").unwrap(), None);
    assert_eq!(parse_optional_time("   ", 1, "leg1time").unwrap(), None);
}

#[test]
fn test_parse_optional_time_reports_field() {
    let err = parse_optional_time("99:00:00", 12, "leg2time").unwrap_err();
    match err {
        Error::TimeFormat {
            number,
            field,
            value,
        } => {
            assert_eq!(number, 12);
            assert_eq!(field, "leg2time");
            assert_eq!(value, "99:00:00");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_parse_entry_number() {
    assert_eq!(parse_entry_number("42", 1).unwrap(), 42);
    assert_eq!(parse_entry_number(" 7 ", 1).unwrap(), 7);
    assert!(matches!(
        parse_entry_number("0", 3),
        Err(Error::InvalidEntryNumber { record: 3, .. })
    ));
    assert!(matches!(
        parse_entry_number("-1", 1),
        Err(Error::InvalidEntryNumber { .. })
    ));
    assert!(matches!(
        parse_entry_number("A12", 1),
        Err(Error::InvalidEntryNumber { .. })
    ));
}
