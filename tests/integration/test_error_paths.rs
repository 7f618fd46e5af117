//! Integration tests for usage errors and unreadable input.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

use crate::helpers::assertions::{assert_exit_code, read_metrics_rows};
use crate::helpers::bam_generator::{hifi_read, write_bam};

fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_hifi-bam-metrics"))
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to run hifi-bam-metrics")
}

/// Files left in `dir` after a run.
fn dir_entries(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("Failed to read dir")
        .map(|entry| entry.expect("dir entry").file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn test_no_arguments_prints_usage_and_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output = run_in(temp_dir.path(), &[]);

    assert_exit_code(&output, 1);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage"), "{stderr}");
    assert!(output.stdout.is_empty());
}

#[test]
fn test_help_succeeds() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    for flag in ["-h", "--help"] {
        let output = run_in(temp_dir.path(), &[flag]);
        assert_exit_code(&output, 0);
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Usage"), "{stderr}");
        assert!(output.stdout.is_empty());
    }
}

#[test]
fn test_help_with_input_succeeds_without_running() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    write_bam(&temp_dir.path().join("x.bam"), &[hifi_read("m1/1/ccs", 10, 4, 0.99).build()]);

    let output = run_in(temp_dir.path(), &["-h", "x.bam"]);

    assert_exit_code(&output, 0);
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage"));
    assert_eq!(dir_entries(temp_dir.path()), vec!["x.bam"]);
}

#[test]
fn test_version_succeeds() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output = run_in(temp_dir.path(), &["--version"]);

    assert_exit_code(&output, 0);
    assert!(String::from_utf8_lossy(&output.stderr).contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_two_arguments_fail() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output = run_in(temp_dir.path(), &["a.bam", "b.bam"]);

    assert_exit_code(&output, 1);
    assert!(dir_entries(temp_dir.path()).is_empty());
}

#[test]
fn test_unknown_flag_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output = run_in(temp_dir.path(), &["--min-passes", "3", "a.bam"]);
    assert_exit_code(&output, 1);
}

#[test]
fn test_zero_threads_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    write_bam(&temp_dir.path().join("a.bam"), &[hifi_read("m1/1/ccs", 10, 4, 0.99).build()]);

    let output = run_in(temp_dir.path(), &["--threads", "0", "a.bam"]);
    assert_exit_code(&output, 1);
    assert_eq!(dir_entries(temp_dir.path()), vec!["a.bam"]);
}

#[test]
fn test_missing_input_creates_no_output() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output = run_in(temp_dir.path(), &["missing.bam"]);

    assert_exit_code(&output, 1);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("missing.bam"), "{stderr}");
    assert!(dir_entries(temp_dir.path()).is_empty());
}

#[test]
fn test_non_bam_input_creates_no_output() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(temp_dir.path().join("text.bam"), "this is not a BAM file\n")
        .expect("Failed to write file");

    let output = run_in(temp_dir.path(), &["text.bam"]);

    assert_exit_code(&output, 1);
    assert_eq!(dir_entries(temp_dir.path()), vec!["text.bam"]);
}

#[test]
fn test_unwritable_output_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    write_bam(&temp_dir.path().join("run.bam"), &[hifi_read("m1/1/ccs", 10, 4, 0.99).build()]);
    // A directory where the output file should go blocks its creation.
    fs::create_dir(temp_dir.path().join("run_hifi_metrics.txt")).expect("Failed to create dir");

    let output = run_in(temp_dir.path(), &["run.bam"]);

    assert_exit_code(&output, 1);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Cannot create output file"), "{stderr}");
}

#[test]
fn test_truncated_input_keeps_complete_rows() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let full_bam = temp_dir.path().join("full.bam");
    let records: Vec<_> = (0..5000)
        .map(|i| hifi_read(&format!("m1/{i}/ccs"), 400, 8, 0.995).build())
        .collect();
    write_bam(&full_bam, &records);

    let bytes = fs::read(&full_bam).expect("Failed to read BAM");
    fs::write(temp_dir.path().join("cut.bam"), &bytes[..bytes.len() / 2])
        .expect("Failed to write truncated BAM");

    let output = run_in(temp_dir.path(), &["cut.bam"]);
    assert_exit_code(&output, 1);

    let rows = read_metrics_rows(&temp_dir.path().join("cut_hifi_metrics.txt"));
    assert!(rows.len() < 5000);
    for (i, row) in rows.iter().enumerate() {
        assert_eq!(row, &format!("{i},400,8,0.995000,0"));
    }
}
