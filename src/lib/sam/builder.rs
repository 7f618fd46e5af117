//! Builder for creating test SAM/BAM records.
//!
//! A fluent API for constructing unmapped HiFi-style records with PacBio tags.
//!
//! ```rust
//! use hifi_bam_metrics_lib::sam::builder::RecordBuilder;
//!
//! let record = RecordBuilder::new()
//!     .name("m64011_190830_220126/42/ccs")
//!     .sequence("ACGTACGT")
//!     .tag("np", 8)
//!     .tag("rq", 0.999f32)
//!     .build();
//! ```

use noodles::sam::alignment::record::Flags;
use noodles::sam::alignment::record::data::field::Tag;
use noodles::sam::alignment::record_buf::data::field::Value as BufValue;
use noodles::sam::alignment::record_buf::{QualityScores, RecordBuf, Sequence};

/// Base quality given to every base when none are set.
pub const DEFAULT_BASE_QUALITY: u8 = 30;

/// Builder for individual records.
#[derive(Debug, Clone)]
pub struct RecordBuilder {
    name: Option<Vec<u8>>,
    flags: Flags,
    sequence: Vec<u8>,
    tags: Vec<(Tag, BufValue)>,
}

impl Default for RecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordBuilder {
    /// Creates a new builder for an unmapped, primary record.
    #[must_use]
    pub fn new() -> Self {
        Self {
            name: None,
            flags: Flags::UNMAPPED,
            sequence: Vec::new(),
            tags: Vec::new(),
        }
    }

    /// Sets the read name.
    #[must_use]
    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(name.as_bytes().to_vec());
        self
    }

    /// Sets the sequence. Every base gets [`DEFAULT_BASE_QUALITY`].
    #[must_use]
    pub fn sequence(mut self, seq: &str) -> Self {
        self.sequence = seq.as_bytes().to_vec();
        self
    }

    /// Sets the secondary alignment flag.
    #[must_use]
    pub fn secondary(mut self, secondary: bool) -> Self {
        self.flags.set(Flags::SECONDARY, secondary);
        self
    }

    /// Sets the supplementary alignment flag.
    #[must_use]
    pub fn supplementary(mut self, supplementary: bool) -> Self {
        self.flags.set(Flags::SUPPLEMENTARY, supplementary);
        self
    }

    /// Adds a SAM tag. Tags that are not exactly two characters are ignored.
    #[must_use]
    pub fn tag<V: Into<BufValue>>(mut self, tag: &str, value: V) -> Self {
        if let [a, b] = tag.as_bytes() {
            self.tags.push((Tag::new(*a, *b), value.into()));
        }
        self
    }

    /// Builds the `RecordBuf`.
    #[must_use]
    pub fn build(self) -> RecordBuf {
        let mut record = RecordBuf::default();

        if let Some(name) = self.name {
            *record.name_mut() = Some(name.into());
        }
        *record.flags_mut() = self.flags;

        let qualities = vec![DEFAULT_BASE_QUALITY; self.sequence.len()];
        *record.sequence_mut() = Sequence::from(self.sequence);
        *record.quality_scores_mut() = QualityScores::from(qualities);

        for (tag, value) in self.tags {
            record.data_mut().insert(tag, value);
        }

        record
    }
}
