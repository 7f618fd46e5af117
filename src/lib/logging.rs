//! Enhanced logging utilities for formatted output.
//!
//! This module provides consistent, user-friendly logging utilities for counts,
//! rates, and the end-of-run extraction summary.

use std::time::{Duration, Instant};

use crate::metrics::{ExtractionCounts, ProcessingMetrics, SkipReason};

/// Formats a count with thousands separators.
///
/// # Examples
///
/// ```
/// use hifi_bam_metrics_lib::logging::format_count;
///
/// assert_eq!(format_count(1234567), "1,234,567");
/// assert_eq!(format_count(123), "123");
/// ```
#[must_use]
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i).is_multiple_of(3) {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Formats a percentage with specified decimal places.
///
/// # Examples
///
/// ```
/// use hifi_bam_metrics_lib::logging::format_percent;
///
/// assert_eq!(format_percent(0.9543, 2), "95.43%");
/// assert_eq!(format_percent(1.0, 0), "100%");
/// ```
#[must_use]
pub fn format_percent(value: f64, decimals: usize) -> String {
    format!("{:.decimals$}%", value * 100.0, decimals = decimals)
}

/// Formats a duration in human-readable form (e.g. "45s", "2m 15s", "1h 30m").
///
/// # Examples
///
/// ```
/// use hifi_bam_metrics_lib::logging::format_duration;
/// use std::time::Duration;
///
/// assert_eq!(format_duration(Duration::from_secs(135)), "2m 15s");
/// ```
#[must_use]
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    if secs < 60 {
        format!("{secs}s")
    } else if secs < 3600 {
        let mins = secs / 60;
        let remaining_secs = secs % 60;
        if remaining_secs == 0 { format!("{mins}m") } else { format!("{mins}m {remaining_secs}s") }
    } else {
        let hours = secs / 3600;
        let mins = (secs % 3600) / 60;
        if mins == 0 { format!("{hours}h") } else { format!("{hours}h {mins}m") }
    }
}

/// Formats a rate (items per second) with appropriate units.
///
/// # Examples
///
/// ```
/// use hifi_bam_metrics_lib::logging::format_rate;
/// use std::time::Duration;
///
/// assert_eq!(format_rate(1000, Duration::from_secs(1)), "1,000 reads/s");
/// assert_eq!(format_rate(30, Duration::from_secs(60)), "30.0 reads/min");
/// ```
#[must_use]
#[allow(clippy::cast_sign_loss)]
pub fn format_rate(count: u64, duration: Duration) -> String {
    let secs = duration.as_secs_f64();
    if secs < 0.001 {
        return format!("{} reads/s", format_count(count));
    }

    let rate = count as f64 / secs;
    if rate >= 1.0 {
        format!("{} reads/s", format_count(rate as u64))
    } else {
        let per_min = count as f64 / (secs / 60.0);
        format!("{per_min:.1} reads/min")
    }
}

/// Logs the end-of-run summary: records scanned, rows emitted, and why the rest were skipped.
///
/// # Examples
///
/// ```no_run
/// use hifi_bam_metrics_lib::logging::log_extraction_summary;
/// use hifi_bam_metrics_lib::metrics::ExtractionCounts;
///
/// log_extraction_summary(&ExtractionCounts::default());
/// ```
pub fn log_extraction_summary(counts: &ExtractionCounts) {
    log::info!(
        "Completed: Processed {} reads, extracted metrics for {} reads",
        format_count(counts.total_input()),
        format_count(counts.total_output())
    );

    if counts.total_input() > 0 {
        log::info!("  Emit rate: {}", format_percent(counts.efficiency() / 100.0, 2));
    }

    for reason in SkipReason::ALL {
        let skipped = counts.skipped(reason);
        if skipped > 0 {
            log::info!("  Skipped ({}): {}", reason.description(), format_count(skipped));
        }
    }
}

/// Operation timing and summary helper.
///
/// # Examples
///
/// ```no_run
/// use hifi_bam_metrics_lib::logging::OperationTimer;
///
/// let timer = OperationTimer::new("Extracting HiFi metrics");
/// // ... do work ...
/// timer.log_completion(10_000);
/// ```
pub struct OperationTimer {
    operation: String,
    start_time: Instant,
}

impl OperationTimer {
    /// Creates a new operation timer and logs the start.
    #[must_use]
    pub fn new(operation: &str) -> Self {
        log::info!("{operation} ...");
        Self { operation: operation.to_string(), start_time: Instant::now() }
    }

    /// Logs the completion with item count and rate.
    pub fn log_completion(&self, count: u64) {
        let duration = self.start_time.elapsed();
        log::info!(
            "{} completed: {} reads in {} ({})",
            self.operation,
            format_count(count),
            format_duration(duration),
            format_rate(count, duration)
        );
    }
}
