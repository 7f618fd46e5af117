//! Integration tests for the hifi-bam-metrics binary.
//!
//! These tests run the compiled binary on generated BAM files and check the metrics file
//! it leaves in the working directory.

mod helpers;
mod test_error_paths;
