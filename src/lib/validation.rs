//! Input validation utilities
//!
//! This module provides validation functions for command-line parameters and
//! file paths with consistent error messages.
//!
//! All validation functions use structured error types from [`crate::errors`] to provide
//! rich contextual information when validation fails.

use crate::errors::{HifiMetricsError, Result};
use std::path::Path;

/// Validate that an input file exists and is not a directory
///
/// # Arguments
/// * `path` - Path to validate
/// * `description` - Human-readable description of the file (e.g., "BAM")
///
/// # Errors
/// Returns [`HifiMetricsError::InputOpen`] if the path does not exist or is a directory
///
/// # Example
/// ```
/// use hifi_bam_metrics_lib::validation::validate_file_exists;
///
/// let result = validate_file_exists("/nonexistent/file.bam", "BAM");
/// assert!(result.is_err());
/// ```
pub fn validate_file_exists<P: AsRef<Path>>(path: P, description: &str) -> Result<()> {
    let path_ref = path.as_ref();
    let reason = if !path_ref.exists() {
        "File does not exist"
    } else if path_ref.is_dir() {
        "Path is a directory"
    } else {
        return Ok(());
    };

    Err(HifiMetricsError::InputOpen {
        file_type: description.to_string(),
        path: path_ref.display().to_string(),
        reason: reason.to_string(),
    })
}

/// Validate a worker thread count
///
/// # Errors
/// Returns an error if `threads` is zero
///
/// # Example
/// ```
/// use hifi_bam_metrics_lib::validation::validate_threads;
///
/// assert!(validate_threads(1, "threads").is_ok());
/// assert!(validate_threads(0, "threads").is_err());
/// ```
pub fn validate_threads(threads: usize, name: &str) -> Result<()> {
    if threads == 0 {
        return Err(HifiMetricsError::InvalidParameter {
            parameter: name.to_string(),
            reason: "must be at least 1".to_string(),
        });
    }
    Ok(())
}
