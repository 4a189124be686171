//! Test utilities and fixtures for results parser testing
//!
//! This module provides helper functions for building results file content
//! used across the parser test modules.

mod field_parsers_tests;

/// Build one results line with the given delimiter
pub fn results_line(
    delimiter: char,
    number: &str,
    category: &str,
    status: &str,
    leg1: &str,
    leg2: &str,
    total: &str,
) -> String {
    let crew = format!("Crew {}", number);
    let fields = [
        number,
        "Club",
        crew.as_str(),
        "8+",
        "M",
        "",
        status,
        category,
        leg1,
        leg2,
        total,
        "",
    ];
    fields.join(&delimiter.to_string())
}

/// Three div4 crews (301s, 305s, 298s) plus a DNS crew in another category
pub fn create_test_results() -> String {
    [
        results_line(',', "1", "div4", "", "00:02:30", "00:02:31", "00:05:01"),
        results_line(',', "2", "div4", "", "00:02:30", "00:02:35", "00:05:05"),
        results_line(',', "3", "div4", "", "00:02:28", "00:02:30", "00:04:58"),
        results_line(',', "4", "div3", "DNS", "", "", ""),
    ]
    .join("\r\n")
}
