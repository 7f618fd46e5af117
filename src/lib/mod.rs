#![deny(unsafe_code)]
// Clippy lint configuration for CI
// These lints are allowed because:
// - cast_*: Counters and read lengths move between integer and float types
// - missing_*_doc: Documentation improvements tracked separately
#![allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::uninlined_format_args
)]

//! # hifi-bam-metrics - per-read metrics for PacBio HiFi BAM files
//!
//! This library reads the records of a HiFi (CCS) BAM file and reduces each primary
//! record to one row of quality-control metrics: molecule ID, read length, number of
//! passes, predicted accuracy and barcode quality.
//!
//! ## Overview
//!
//! ### Core Functionality
//!
//! - **[`bam_io`]** - Opening a BAM file and streaming its records
//! - **[`extractor`]** - Record filtering, molecule ID derivation and tag validation
//! - **[`sam`]** - PacBio tag definitions and typed tag access on records
//! - **[`metrics`]** - The metrics row, skip counts and the CSV writer
//!
//! ### Utilities
//!
//! - **[`output_path`]** - Naming of the metrics file
//! - **[`validation`]** - Input validation utilities for parameters and files
//! - **[`progress`]** - Progress tracking and logging
//! - **[`logging`]** - Number/duration formatting and the run summary
//! - **[`errors`]** - Structured error types
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::path::Path;
//! use hifi_bam_metrics_lib::bam_io::RecordSource;
//! use hifi_bam_metrics_lib::extractor::MetricsExtractor;
//! use hifi_bam_metrics_lib::metrics::MetricsWriter;
//! use hifi_bam_metrics_lib::output_path::metrics_output_path;
//!
//! # fn main() -> anyhow::Result<()> {
//! let input = Path::new("m64011.hifi_reads.bam");
//! let mut source = RecordSource::open(input, 1)?;
//! let mut writer = MetricsWriter::create(metrics_output_path(input))?;
//! let mut extractor = MetricsExtractor::new();
//!
//! writer.write_header()?;
//! for result in source.records() {
//!     if let Some(row) = extractor.evaluate(&result?) {
//!         writer.write_row(&row)?;
//!     }
//! }
//! writer.finish()?;
//! # Ok(())
//! # }
//! ```
//!
//! ### Progress Tracking
//!
//! ```
//! use hifi_bam_metrics_lib::progress::ProgressTracker;
//!
//! let mut tracker = ProgressTracker::new("Processed", "records").with_interval(100);
//! for _ in 0..1000 {
//!     tracker.record(1);
//! }
//! tracker.log_final();
//! ```

pub mod bam_io;
pub mod errors;
pub mod extractor;
pub mod logging;
pub mod metrics;
pub mod output_path;
pub mod progress;
pub mod sam;
pub mod validation;

pub use extractor::{Evaluation, MetricsExtractor};
pub use metrics::{ExtractionCounts, MetricsRow, SkipReason};
