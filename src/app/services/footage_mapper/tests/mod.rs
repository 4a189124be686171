//! Tests for the footage mapper

use std::path::Path;

pub mod executor_tests;

/// Mapping file with a comment, two crews and one undecodable line
pub fn create_test_mapping() -> String {
    [
        "# div4 footage",
        "race_01 = 1|Thames RC|A|div4|150.0|151.0|301.0|2|3|1.010067",
        "race_02 = 2|Tideway Scullers||div4|150.0|155.0|305.0|3|3|1.023490",
        "",
        "this line is not a mapping",
    ]
    .join("\r\n")
}

/// Create an empty capture file
pub fn touch(path: &Path) {
    std::fs::write(path, b"footage").unwrap();
}
