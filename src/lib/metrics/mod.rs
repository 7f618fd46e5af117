//! Per-read HiFi metrics and their output.
//!
//! This module provides:
//! - [`MetricsRow`] - one output row per retained read
//! - [`counts`] - skip reasons and the scanned/emitted accumulator
//! - [`writer`] - the streaming CSV sink
//!
//! # Traits
//!
//! - [`ProcessingMetrics`] - Common interface for input/output counts

pub mod counts;
pub mod writer;

use serde::{Serialize, Serializer};

pub use counts::{ExtractionCounts, SkipReason};
pub use writer::MetricsWriter;

/// Number of decimal places used for float metrics.
pub const FLOAT_PRECISION: usize = 6;

/// Column names of the metrics file, in output order.
pub const COLUMNS: [&str; 5] = ["Mol.ID", "len", "npass", "Accuracy", "bcqual"];

/// Formats a float value with the standard precision for metrics.
///
/// # Example
/// ```
/// use hifi_bam_metrics_lib::metrics::format_float;
/// assert_eq!(format_float(0.9), "0.900000");
/// assert_eq!(format_float(0.0), "0.000000");
/// ```
#[must_use]
pub fn format_float(value: f64) -> String {
    format!("{value:.FLOAT_PRECISION$}")
}

/// Serializes a read quality with [`FLOAT_PRECISION`] fractional digits.
///
/// The `f32` tag value is widened before formatting so that `0.995` prints as `0.995000`.
#[allow(clippy::trivially_copy_pass_by_ref)] // serde requires &T signature
fn serialize_read_quality<S>(value: &f32, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_float(f64::from(*value)))
}

/// Metrics extracted from a single primary HiFi read.
///
/// Rows are built by the extractor and written in input order; one row per input record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsRow {
    /// ZMW / molecule identifier from the read name, or `"unknown"`.
    #[serde(rename = "Mol.ID")]
    pub molecule_id: String,
    /// Number of bases in the read.
    #[serde(rename = "len")]
    pub read_length: u64,
    /// Number of full passes (`np` tag).
    #[serde(rename = "npass")]
    pub num_passes: u64,
    /// Predicted read accuracy (`rq` tag), within `[0, 1]`.
    #[serde(rename = "Accuracy", serialize_with = "serialize_read_quality")]
    pub read_quality: f32,
    /// Barcode quality (`bq` tag), 0 when the read is not barcoded.
    #[serde(rename = "bcqual")]
    pub barcode_quality: u64,
}

/// Common interface for metrics that track processing pipeline counts.
pub trait ProcessingMetrics {
    /// Total number of input records processed.
    fn total_input(&self) -> u64;

    /// Total number of output rows produced.
    fn total_output(&self) -> u64;

    /// Total number of records filtered out.
    fn total_filtered(&self) -> u64 {
        self.total_input().saturating_sub(self.total_output())
    }

    /// Processing efficiency as a percentage (output / input * 100).
    fn efficiency(&self) -> f64 {
        if self.total_input() == 0 {
            0.0
        } else {
            self.total_output() as f64 / self.total_input() as f64 * 100.0
        }
    }
}
