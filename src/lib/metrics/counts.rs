//! Skip reason tracking for records that produce no metrics row.
//!
//! Skipping is routine: secondary and supplementary alignments, and reads without
//! per-pass annotation, are expected in HiFi BAMs. Skips are only tallied here and
//! reported in the end-of-run summary.

use std::fmt;

use super::ProcessingMetrics;

/// Reasons why a record did not produce a metrics row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkipReason {
    /// Record has the secondary or supplementary flag set
    SecondaryOrSupplementary,
    /// Record lacks a usable `np` tag
    MissingNumPasses,
    /// Record lacks a usable `rq` tag
    MissingReadQuality,
}

impl SkipReason {
    /// All skip reasons, in the order they are evaluated.
    pub const ALL: [SkipReason; 3] =
        [Self::SecondaryOrSupplementary, Self::MissingNumPasses, Self::MissingReadQuality];

    /// Returns a human-readable description.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::SecondaryOrSupplementary => "secondary or supplementary alignment",
            Self::MissingNumPasses => "missing np tag",
            Self::MissingReadQuality => "missing rq tag",
        }
    }

    fn index(self) -> usize {
        match self {
            Self::SecondaryOrSupplementary => 0,
            Self::MissingNumPasses => 1,
            Self::MissingReadQuality => 2,
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Running totals of records scanned, rows emitted and records skipped.
///
/// Owned by the driver and updated once per record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionCounts {
    /// Records read from the input, including skipped ones.
    pub records_scanned: u64,
    /// Rows emitted.
    pub rows_emitted: u64,
    skipped: [u64; 3],
}

impl ExtractionCounts {
    /// Counts a record that produced a row.
    pub fn record_emitted(&mut self) {
        self.records_scanned += 1;
        self.rows_emitted += 1;
    }

    /// Counts a record that was skipped.
    pub fn record_skipped(&mut self, reason: SkipReason) {
        self.records_scanned += 1;
        self.skipped[reason.index()] += 1;
    }

    /// Number of records skipped for `reason`.
    #[must_use]
    pub fn skipped(&self, reason: SkipReason) -> u64 {
        self.skipped[reason.index()]
    }
}

impl ProcessingMetrics for ExtractionCounts {
    fn total_input(&self) -> u64 {
        self.records_scanned
    }

    fn total_output(&self) -> u64 {
        self.rows_emitted
    }

    fn total_filtered(&self) -> u64 {
        self.skipped.iter().sum()
    }
}
