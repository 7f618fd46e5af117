//! Streaming writer for the comma-delimited metrics file.
//!
//! Rows are written as they are produced; nothing is buffered beyond the current line.
//! Output goes through a [`LineWriter`], so bytes reach the file only up to the last
//! complete line. A run that stops early leaves a file that is a valid prefix of the
//! complete output.

use anyhow::{Context, Result};
use csv::QuoteStyle;
use std::fs::File;
use std::io::LineWriter;
use std::path::{Path, PathBuf};

use super::{COLUMNS, MetricsRow};
use crate::errors::HifiMetricsError;

/// Writes the header line and one CSV line per [`MetricsRow`].
///
/// # Example
/// ```no_run
/// use hifi_bam_metrics_lib::metrics::{MetricsRow, MetricsWriter};
///
/// # fn main() -> anyhow::Result<()> {
/// let mut writer = MetricsWriter::create("run1_hifi_metrics.txt")?;
/// writer.write_header()?;
/// writer.write_row(&MetricsRow {
///     molecule_id: "67890".to_string(),
///     read_length: 15_000,
///     num_passes: 5,
///     read_quality: 0.995,
///     barcode_quality: 0,
/// })?;
/// let rows = writer.finish()?;
/// assert_eq!(rows, 1);
/// # Ok(())
/// # }
/// ```
pub struct MetricsWriter {
    inner: csv::Writer<LineWriter<File>>,
    path: PathBuf,
    header_written: bool,
    rows_written: u64,
}

impl MetricsWriter {
    /// Create (or truncate) the metrics file at `path`.
    ///
    /// # Errors
    /// Returns [`HifiMetricsError::OutputCreate`] if the file cannot be created
    pub fn create<P: AsRef<Path>>(path: P) -> crate::errors::Result<Self> {
        let path_ref = path.as_ref();
        let file = File::create(path_ref).map_err(|e| HifiMetricsError::OutputCreate {
            path: path_ref.display().to_string(),
            reason: e.to_string(),
        })?;

        let inner = csv::WriterBuilder::new()
            .has_headers(false)
            .quote_style(QuoteStyle::Never)
            .from_writer(LineWriter::new(file));

        Ok(Self { inner, path: path_ref.to_path_buf(), header_written: false, rows_written: 0 })
    }

    /// Write the fixed header line. Only the first call writes anything.
    pub fn write_header(&mut self) -> Result<()> {
        if self.header_written {
            return Ok(());
        }
        self.inner
            .write_record(COLUMNS)
            .with_context(|| format!("Failed to write header to: {}", self.path.display()))?;
        self.header_written = true;
        Ok(())
    }

    /// Write one row, preceded by the header if it has not been written yet.
    pub fn write_row(&mut self, row: &MetricsRow) -> Result<()> {
        self.write_header()?;
        self.inner
            .serialize(row)
            .with_context(|| format!("Failed to write metrics to: {}", self.path.display()))?;
        self.rows_written += 1;
        Ok(())
    }

    /// Number of rows written so far.
    #[must_use]
    pub fn rows_written(&self) -> u64 {
        self.rows_written
    }

    /// Flush everything to disk and return the number of rows written.
    ///
    /// A file with no rows still receives its header line.
    pub fn finish(mut self) -> Result<u64> {
        self.write_header()?;
        self.inner
            .flush()
            .with_context(|| format!("Failed to flush metrics to: {}", self.path.display()))?;
        Ok(self.rows_written)
    }
}
