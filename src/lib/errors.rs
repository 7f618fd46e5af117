//! Custom error types for hifi-bam-metrics operations.

use thiserror::Error;

/// Result type alias for hifi-bam-metrics operations
pub type Result<T> = std::result::Result<T, HifiMetricsError>;

/// Error type for hifi-bam-metrics operations
#[derive(Error, Debug)]
pub enum HifiMetricsError {
    /// Invalid parameter value provided
    #[error("Invalid parameter '{parameter}': {reason}")]
    InvalidParameter {
        /// The parameter name
        parameter: String,
        /// Explanation of why it's invalid
        reason: String,
    },

    /// The input BAM could not be opened or its header could not be parsed
    #[error("Cannot open {file_type} file '{path}': {reason}")]
    InputOpen {
        /// Type of file (e.g., "BAM")
        file_type: String,
        /// Path to the file
        path: String,
        /// Explanation of the problem
        reason: String,
    },

    /// The output metrics file could not be created
    #[error("Cannot create output file '{path}': {reason}")]
    OutputCreate {
        /// Path to the file
        path: String,
        /// Explanation of the problem
        reason: String,
    },
}
