//! SAM/BAM record access for HiFi metrics extraction.
//!
//! This module provides:
//! - The PacBio per-read tags used by the extractor ([`NUM_PASSES_TAG`],
//!   [`READ_QUALITY_TAG`], [`BARCODE_QUALITY_TAG`])
//! - [`HifiRecord`], a narrow view of an alignment record with typed, optional tag lookup
//! - Test utilities for building records ([`builder`])
//!
//! # Tag typing
//!
//! Integer lookups accept every BAM integer subtype (`c`, `C`, `s`, `S`, `i`, `I`).
//! Float lookups accept `f` and widen integer subtypes. Anything else (strings,
//! arrays, characters, undecodable data) is reported as absent.

pub mod builder;

use noodles::bam;
use noodles::sam::alignment::record::Flags;
use noodles::sam::alignment::record::data::field::{Tag, Value};
use noodles::sam::alignment::record_buf::RecordBuf;
use noodles::sam::alignment::record_buf::data::field::Value as BufValue;

/// Number of full passes used to build the CCS read.
pub const NUM_PASSES_TAG: Tag = Tag::new(b'n', b'p');

/// Predicted read accuracy of the CCS read.
pub const READ_QUALITY_TAG: Tag = Tag::new(b'r', b'q');

/// Barcode quality, present on demultiplexed reads.
pub const BARCODE_QUALITY_TAG: Tag = Tag::new(b'b', b'q');

/// The parts of an alignment record that metrics extraction reads.
///
/// Tag lookups return `None` when the tag is absent or not of a usable type; there are
/// no sentinel values.
pub trait HifiRecord {
    /// SAM flags of the record.
    fn flags(&self) -> Flags;

    /// Raw query name, `None` when the record has no name (`*`).
    fn query_name(&self) -> Option<&[u8]>;

    /// Number of bases in the record's sequence.
    fn sequence_length(&self) -> usize;

    /// Integer value of `tag`, if present.
    fn int_tag(&self, tag: Tag) -> Option<i64>;

    /// Floating point value of `tag`, if present.
    fn float_tag(&self, tag: Tag) -> Option<f32>;
}

impl HifiRecord for bam::Record {
    fn flags(&self) -> Flags {
        bam::Record::flags(self)
    }

    fn query_name(&self) -> Option<&[u8]> {
        bam::Record::name(self).map(|name| name.as_ref())
    }

    fn sequence_length(&self) -> usize {
        bam::Record::sequence(self).len()
    }

    fn int_tag(&self, tag: Tag) -> Option<i64> {
        self.data().get(&tag)?.ok()?.as_int()
    }

    fn float_tag(&self, tag: Tag) -> Option<f32> {
        match self.data().get(&tag)?.ok()? {
            Value::Float(v) => Some(v),
            value => value.as_int().map(|v| v as f32),
        }
    }
}

impl HifiRecord for RecordBuf {
    fn flags(&self) -> Flags {
        RecordBuf::flags(self)
    }

    fn query_name(&self) -> Option<&[u8]> {
        RecordBuf::name(self).map(|name| name.as_ref())
    }

    fn sequence_length(&self) -> usize {
        RecordBuf::sequence(self).len()
    }

    fn int_tag(&self, tag: Tag) -> Option<i64> {
        self.data().get(&tag).and_then(BufValue::as_int)
    }

    fn float_tag(&self, tag: Tag) -> Option<f32> {
        match self.data().get(&tag)? {
            BufValue::Float(v) => Some(*v),
            value => value.as_int().map(|v| v as f32),
        }
    }
}
