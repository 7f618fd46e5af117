//! Custom assertion helpers for integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::Path;
use std::process::Output;

/// The header line of every metrics file.
pub const HEADER_LINE: &str = "Mol.ID,len,npass,Accuracy,bcqual";

/// Reads a metrics file and returns its data lines, after checking the header.
///
/// # Panics
///
/// Panics if the file cannot be read, the header is wrong, or the file does not end in a
/// newline.
pub fn read_metrics_rows(path: &Path) -> Vec<String> {
    let content = fs::read_to_string(path).expect("Failed to read metrics file");
    assert!(content.ends_with('\n'), "Metrics file should end with a newline");

    let mut lines = content.lines();
    assert_eq!(lines.next(), Some(HEADER_LINE), "Metrics header mismatch");
    lines.map(str::to_string).collect()
}

/// Asserts that a process exited with `code`.
///
/// # Panics
///
/// Panics if the exit code differs.
pub fn assert_exit_code(output: &Output, code: i32) {
    assert_eq!(
        output.status.code(),
        Some(code),
        "Unexpected exit code. stderr:\n{}",
        String::from_utf8_lossy(&output.stderr)
    );
}
