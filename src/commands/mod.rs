//! CLI command implementations for hifi-bam-metrics.
//!
//! - [`metrics`] - Extract per-read HiFi metrics from a BAM file

pub mod command;
pub mod metrics;
