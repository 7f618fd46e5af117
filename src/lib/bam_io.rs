//! BAM input.
//!
//! [`RecordSource`] opens a BAM file, parses its header up front and then yields records
//! lazily, one at a time, in file order.
//!
//! # Threading Model
//!
//! BAM files use BGZF compression, and block decompression can be spread over worker
//! threads:
//!
//! - **Single-threaded**: `threads=1` (lower overhead, good for small files)
//! - **Multi-threaded**: `threads>1` (higher throughput for large files)
//!
//! Either way records come out in the order they are stored.

use noodles::bam;
use noodles::bgzf::io::{MultithreadedReader, Reader as BgzfReader};
use noodles::sam::Header;
use std::fs::File;
use std::io::{self, BufRead, Read};
use std::num::NonZero;
use std::path::Path;

use crate::errors::{HifiMetricsError, Result};
use crate::validation::validate_file_exists;

/// Enum wrapping single-threaded and multi-threaded BGZF readers.
pub enum BgzfReaderEnum {
    /// Single-threaded BGZF reader
    SingleThreaded(BgzfReader<File>),
    /// Multi-threaded BGZF reader
    MultiThreaded(MultithreadedReader<File>),
}

impl Read for BgzfReaderEnum {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            BgzfReaderEnum::SingleThreaded(r) => r.read(buf),
            BgzfReaderEnum::MultiThreaded(r) => r.read(buf),
        }
    }
}

impl BufRead for BgzfReaderEnum {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        match self {
            BgzfReaderEnum::SingleThreaded(r) => r.fill_buf(),
            BgzfReaderEnum::MultiThreaded(r) => r.fill_buf(),
        }
    }

    fn consume(&mut self, amt: usize) {
        match self {
            BgzfReaderEnum::SingleThreaded(r) => r.consume(amt),
            BgzfReaderEnum::MultiThreaded(r) => r.consume(amt),
        }
    }
}

/// BAM reader over either BGZF reader.
pub type BamReaderAuto = bam::io::Reader<BgzfReaderEnum>;

/// An opened BAM file with its parsed header.
///
/// Dropping the source closes the file.
pub struct RecordSource {
    reader: BamReaderAuto,
    header: Header,
}

impl RecordSource {
    /// Open `path` and read its BAM header.
    ///
    /// # Arguments
    /// * `path` - Path to the input BAM file
    /// * `threads` - Number of threads for BGZF decompression (1 = single-threaded)
    ///
    /// # Errors
    /// Returns [`HifiMetricsError::InputOpen`] if the file does not exist, cannot be
    /// opened, or does not start with a valid BAM header.
    pub fn open<P: AsRef<Path>>(path: P, threads: usize) -> Result<Self> {
        let path_ref = path.as_ref();
        validate_file_exists(path_ref, "BAM")?;

        let input_error = |reason: String| HifiMetricsError::InputOpen {
            file_type: "BAM".to_string(),
            path: path_ref.display().to_string(),
            reason,
        };

        let file = File::open(path_ref).map_err(|e| input_error(e.to_string()))?;

        let bgzf_reader = match NonZero::new(threads).filter(|n| n.get() > 1) {
            Some(worker_count) => {
                BgzfReaderEnum::MultiThreaded(MultithreadedReader::with_worker_count(
                    worker_count,
                    file,
                ))
            }
            None => BgzfReaderEnum::SingleThreaded(BgzfReader::new(file)),
        };

        let mut reader = bam::io::Reader::from(bgzf_reader);
        let header = reader
            .read_header()
            .map_err(|e| input_error(format!("Failed to read BAM header: {e}")))?;

        Ok(Self { reader, header })
    }

    /// The parsed header.
    #[must_use]
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Lazily decode the remaining records in file order.
    ///
    /// Each item is either a record or the I/O error that stopped decoding.
    pub fn records(&mut self) -> impl Iterator<Item = io::Result<bam::Record>> + '_ {
        self.reader.records()
    }
}
