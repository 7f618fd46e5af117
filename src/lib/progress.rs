//! Progress tracking utilities
//!
//! This module provides a progress tracker for logging progress at regular intervals
//! while a single pass over the input BAM is in flight.

use log::info;

use crate::logging::format_count;

/// Number of scanned records between progress messages.
pub const DEFAULT_PROGRESS_INTERVAL: u64 = 100_000;

/// Progress tracker for logging progress at regular intervals.
///
/// Maintains an internal count and logs a progress message each time the count
/// crosses an interval boundary.
///
/// # Example
/// ```
/// use hifi_bam_metrics_lib::progress::ProgressTracker;
///
/// let mut tracker = ProgressTracker::new("Processed", "reads").with_interval(100);
///
/// for _ in 0..250 {
///     tracker.record(1);  // Logs at 100, 200
/// }
/// tracker.log_final();  // Logs "Processed 250 reads (complete)"
/// ```
#[derive(Debug)]
pub struct ProgressTracker {
    /// The logging interval - progress is logged when count crosses multiples of this.
    interval: u64,
    /// Message prefix for log output.
    message: String,
    /// What is being counted (e.g. "reads").
    unit: String,
    /// Items counted so far.
    count: u64,
}

impl ProgressTracker {
    /// Create a new progress tracker.
    ///
    /// The tracker starts with a count of 0 and an interval of
    /// [`DEFAULT_PROGRESS_INTERVAL`].
    #[must_use]
    pub fn new(message: impl Into<String>, unit: impl Into<String>) -> Self {
        Self {
            interval: DEFAULT_PROGRESS_INTERVAL,
            message: message.into(),
            unit: unit.into(),
            count: 0,
        }
    }

    /// Set the logging interval. An interval of zero is treated as one.
    #[must_use]
    pub fn with_interval(mut self, interval: u64) -> Self {
        self.interval = interval.max(1);
        self
    }

    /// Add to the count and log once per interval boundary crossed.
    ///
    /// Returns `true` if the new count lies exactly on an interval boundary.
    pub fn record(&mut self, additional: u64) -> bool {
        let prev = self.count;
        self.count += additional;

        for i in (prev / self.interval + 1)..=(self.count / self.interval) {
            info!("{} {} {}...", self.message, format_count(i * self.interval), self.unit);
        }

        self.is_on_interval()
    }

    /// Log the final count unless the last [`record`](Self::record) call already did.
    pub fn log_final(&self) {
        if self.count > 0 && !self.is_on_interval() {
            info!("{} {} {} (complete)", self.message, format_count(self.count), self.unit);
        }
    }

    /// The current count.
    #[must_use]
    pub fn count(&self) -> u64 {
        self.count
    }

    fn is_on_interval(&self) -> bool {
        self.count > 0 && self.count.is_multiple_of(self.interval)
    }
}
