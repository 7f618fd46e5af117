//! Utilities for generating test BAM data programmatically.

#![allow(dead_code)]

use hifi_bam_metrics_lib::sam::builder::RecordBuilder;
use noodles::bam;
use noodles::sam::Header;
use noodles::sam::alignment::io::Write as AlignmentWrite;
use noodles::sam::alignment::record_buf::RecordBuf;
use noodles::sam::header::record::value::Map;
use noodles::sam::header::record::value::map::ReadGroup;
use std::fs::File;
use std::path::Path;

/// Creates a header like the one on PacBio HiFi reads: no reference sequences, one read group.
pub fn create_minimal_header() -> Header {
    Header::builder().add_read_group("hifi", Map::<ReadGroup>::default()).build()
}

/// Creates a primary HiFi read with `np` and `rq` set.
///
/// # Arguments
///
/// * `name` - Read name, usually `<movie>/<zmw>/ccs`
/// * `length` - Number of bases
/// * `num_passes` - Value of the `np` tag
/// * `read_quality` - Value of the `rq` tag
pub fn hifi_read(name: &str, length: usize, num_passes: i32, read_quality: f32) -> RecordBuilder {
    RecordBuilder::new()
        .name(name)
        .sequence(&"ACGT".repeat(length.div_ceil(4))[..length])
        .tag("np", num_passes)
        .tag("rq", read_quality)
}

/// Writes `records` to a BAM file at `path`.
///
/// # Panics
///
/// Panics if the file cannot be written.
pub fn write_bam(path: &Path, records: &[RecordBuf]) {
    let header = create_minimal_header();
    let mut writer = bam::io::Writer::new(File::create(path).expect("Failed to create BAM file"));

    writer.write_header(&header).expect("Failed to write header");
    for record in records {
        writer.write_alignment_record(&header, record).expect("Failed to write record");
    }
    writer.finish(&header).expect("Failed to finish BAM");
}
