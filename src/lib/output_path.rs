//! Naming of the metrics output file.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Suffix appended to the input stem to name the metrics file.
pub const METRICS_SUFFIX: &str = "_hifi_metrics.txt";

/// Extension stripped from the input name before the suffix is added.
pub const BAM_EXTENSION: &str = ".bam";

/// Derive the metrics file path for `input`.
///
/// Only the final path component is used, so the output lands in the current working
/// directory. A trailing `.bam` is replaced by [`METRICS_SUFFIX`]; any other name has
/// the suffix appended as-is.
///
/// # Example
/// ```
/// use std::path::{Path, PathBuf};
/// use hifi_bam_metrics_lib::output_path::metrics_output_path;
///
/// assert_eq!(
///     metrics_output_path(Path::new("/data/run1.bam")),
///     PathBuf::from("run1_hifi_metrics.txt")
/// );
/// ```
#[must_use]
pub fn metrics_output_path(input: &Path) -> PathBuf {
    let file_name = input.file_name().unwrap_or(input.as_os_str());
    let name = file_name.to_string_lossy();

    let stem = match name.strip_suffix(BAM_EXTENSION) {
        Some(stem) => OsString::from(stem),
        None => file_name.to_os_string(),
    };

    let mut output = stem;
    output.push(METRICS_SUFFIX);
    PathBuf::from(output)
}
