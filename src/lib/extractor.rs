//! Per-record HiFi metrics extraction.
//!
//! Each record is evaluated independently, in this order:
//!
//! 1. Secondary and supplementary alignments are skipped.
//! 2. The molecule ID is taken from the read name (`<movie>/<zmw>/<suffix>`).
//! 3. Records without `np` or `rq` are skipped. A negative value counts as absent.
//! 4. `bq` defaults to 0 when absent or negative.
//! 5. `rq` is clamped into `[0, 1]`.
//! 6. The [`MetricsRow`] is assembled.
//!
//! Skipping is not an error; [`MetricsExtractor`] tallies skips in an [`ExtractionCounts`].

use noodles::sam::alignment::record::Flags;

use crate::metrics::{ExtractionCounts, MetricsRow, SkipReason};
use crate::sam::{BARCODE_QUALITY_TAG, HifiRecord, NUM_PASSES_TAG, READ_QUALITY_TAG};

/// Molecule ID used when the read name does not carry one.
pub const UNKNOWN_MOLECULE_ID: &str = "unknown";

/// Outcome of evaluating one record.
#[derive(Debug, Clone, PartialEq)]
pub enum Evaluation {
    /// The record produced a row.
    Emit(MetricsRow),
    /// The record was skipped.
    Skip(SkipReason),
}

/// Evaluates one record without side effects.
///
/// # Example
/// ```
/// use hifi_bam_metrics_lib::extractor::{Evaluation, evaluate};
/// use hifi_bam_metrics_lib::sam::builder::RecordBuilder;
///
/// let record = RecordBuilder::new()
///     .name("m12345/67890/ccs")
///     .sequence("ACGTACGT")
///     .tag("np", 5)
///     .tag("rq", 0.995f32)
///     .build();
///
/// let Evaluation::Emit(row) = evaluate(&record) else { panic!("record should be kept") };
/// assert_eq!(row.molecule_id, "67890");
/// assert_eq!(row.barcode_quality, 0);
/// ```
pub fn evaluate<R: HifiRecord>(record: &R) -> Evaluation {
    if record.flags().intersects(Flags::SECONDARY | Flags::SUPPLEMENTARY) {
        return Evaluation::Skip(SkipReason::SecondaryOrSupplementary);
    }

    let molecule_id = molecule_id(record.query_name());

    let Some(num_passes) = record.int_tag(NUM_PASSES_TAG).and_then(non_negative) else {
        return Evaluation::Skip(SkipReason::MissingNumPasses);
    };
    let Some(read_quality) = record.float_tag(READ_QUALITY_TAG).filter(|q| *q >= 0.0) else {
        return Evaluation::Skip(SkipReason::MissingReadQuality);
    };
    let barcode_quality = record.int_tag(BARCODE_QUALITY_TAG).and_then(non_negative).unwrap_or(0);

    Evaluation::Emit(MetricsRow {
        molecule_id,
        read_length: record.sequence_length() as u64,
        num_passes,
        read_quality: clamp_read_quality(read_quality),
        barcode_quality,
    })
}

/// Extracts the molecule ID: the text strictly between the first and second `/`.
///
/// Returns [`UNKNOWN_MOLECULE_ID`] when the name is absent, has fewer than two `/`,
/// or the text between them is empty.
///
/// # Example
/// ```
/// use hifi_bam_metrics_lib::extractor::molecule_id;
///
/// assert_eq!(molecule_id(Some(&b"m12345/67890/ccs"[..])), "67890");
/// assert_eq!(molecule_id(Some(&b"nobarcode"[..])), "unknown");
/// assert_eq!(molecule_id(None), "unknown");
/// ```
#[must_use]
pub fn molecule_id(query_name: Option<&[u8]>) -> String {
    let mut fields = query_name.unwrap_or_default().splitn(3, |&b| b == b'/');
    match (fields.next(), fields.next(), fields.next()) {
        (Some(_), Some(id), Some(_)) if !id.is_empty() => String::from_utf8_lossy(id).into_owned(),
        _ => UNKNOWN_MOLECULE_ID.to_string(),
    }
}

/// Clips a read quality into `[0, 1]`. `-0.0` comes back as `0.0`.
#[must_use]
pub fn clamp_read_quality(read_quality: f32) -> f32 {
    // Adding +0.0 turns -0.0 into +0.0 and leaves every other value unchanged.
    read_quality.clamp(0.0, 1.0) + 0.0
}

fn non_negative(value: i64) -> Option<u64> {
    u64::try_from(value).ok()
}

/// Evaluates records in sequence and keeps the running counts.
#[derive(Debug, Default)]
pub struct MetricsExtractor {
    counts: ExtractionCounts,
}

impl MetricsExtractor {
    /// Creates an extractor with zeroed counts.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluates one record, returning its row if it is kept.
    pub fn evaluate<R: HifiRecord>(&mut self, record: &R) -> Option<MetricsRow> {
        match evaluate(record) {
            Evaluation::Emit(row) => {
                self.counts.record_emitted();
                Some(row)
            }
            Evaluation::Skip(reason) => {
                self.counts.record_skipped(reason);
                None
            }
        }
    }

    /// Counts so far.
    #[must_use]
    pub fn counts(&self) -> &ExtractionCounts {
        &self.counts
    }

    /// Consumes the extractor, returning the final counts.
    #[must_use]
    pub fn into_counts(self) -> ExtractionCounts {
        self.counts
    }
}
