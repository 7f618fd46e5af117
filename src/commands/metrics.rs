//! Extract per-read HiFi metrics from a BAM file.
//!
//! Streams the input once, writing one CSV line per primary record that carries both
//! `np` and `rq` to `<input stem>_hifi_metrics.txt` in the working directory.

use anyhow::{Context, Result};
use clap::Parser;
use hifi_bam_metrics_lib::bam_io::RecordSource;
use hifi_bam_metrics_lib::extractor::MetricsExtractor;
use hifi_bam_metrics_lib::logging::{OperationTimer, format_count, log_extraction_summary};
use hifi_bam_metrics_lib::metrics::MetricsWriter;
use hifi_bam_metrics_lib::output_path::metrics_output_path;
use hifi_bam_metrics_lib::progress::ProgressTracker;
use hifi_bam_metrics_lib::validation::validate_threads;
use log::info;
use std::path::PathBuf;

use super::command::Command;

/// Extracts per-read metrics from a PacBio HiFi BAM file.
#[derive(Parser, Debug)]
#[command(
    name = "hifi-bam-metrics",
    author,
    version,
    styles = crate::STYLES,
    arg_required_else_help = true,
    about = "Extract per-read metrics from a PacBio HiFi BAM file",
    long_about = r#"
Extract per-read quality-control metrics from a PacBio HiFi (CCS) BAM file.

Every record is read once, in file order. Secondary and supplementary alignments are skipped, as
are records without both the `np` (number of passes) and `rq` (read quality) tags. Each remaining
record produces one comma-separated line:

  Mol.ID,len,npass,Accuracy,bcqual

- **Mol.ID**: the text between the first and second `/` of the read name, or `unknown`
- **len**: read length in bases
- **npass**: the `np` tag
- **Accuracy**: the `rq` tag, clamped to [0, 1], with six decimal places
- **bcqual**: the `bq` tag, or 0 when absent

The output is written to the current directory. Its name is the input file name with a trailing
`.bam` replaced by `_hifi_metrics.txt` (or `_hifi_metrics.txt` appended for other names).
"#,
    after_help = r#"EXAMPLES:

  # Metrics for a single file, written to ./m64011.hifi_reads_hifi_metrics.txt
  hifi-bam-metrics /data/m64011.hifi_reads.bam

  # Many files at once, one process per file
  ls /data/*.bam | parallel -j 8 hifi-bam-metrics {}
"#
)]
pub struct HifiMetrics {
    /// Input HiFi BAM file
    #[arg(value_name = "INPUT_BAM")]
    pub input: PathBuf,

    /// Number of threads for BAM decompression
    #[arg(short = '@', short_alias = 't', long = "threads", default_value = "1", value_parser = parse_threads)]
    pub threads: usize,
}

/// Parse a worker count, rejecting zero.
fn parse_threads(s: &str) -> std::result::Result<usize, String> {
    let threads: usize = s.parse().map_err(|e: std::num::ParseIntError| e.to_string())?;
    validate_threads(threads, "threads").map_err(|e| e.to_string())?;
    Ok(threads)
}

impl Command for HifiMetrics {
    fn execute(&self) -> Result<()> {
        let output = metrics_output_path(&self.input);

        info!("Input: {}", self.input.display());
        info!("Output: {}", output.display());
        info!("Threads: {}", self.threads);

        let timer = OperationTimer::new("Extracting HiFi metrics");

        // The input must open cleanly before the output file is created.
        let mut source = RecordSource::open(&self.input, self.threads)?;
        info!("Read groups in header: {}", source.header().read_groups().len());
        let mut writer = MetricsWriter::create(&output)?;
        writer.write_header()?;

        let mut extractor = MetricsExtractor::new();
        let mut progress = ProgressTracker::new("Processed", "records");

        for result in source.records() {
            let record = result.with_context(|| {
                format!(
                    "Failed to read BAM record {} from: {}",
                    format_count(extractor.counts().records_scanned + 1),
                    self.input.display()
                )
            })?;

            if let Some(row) = extractor.evaluate(&record) {
                writer.write_row(&row)?;
            }
            progress.record(1);
        }
        progress.log_final();

        let rows_written = writer.finish()?;
        let counts = extractor.into_counts();
        debug_assert_eq!(rows_written, counts.rows_emitted);

        log_extraction_summary(&counts);
        timer.log_completion(counts.records_scanned);
        info!("Output saved to: {}", output.display());

        Ok(())
    }
}
