//! Command trait definition for the CLI.

use anyhow::Result;

/// Trait implemented by CLI commands.
///
/// Each command provides an `execute` method that runs the command's main logic.
pub trait Command {
    #[allow(clippy::missing_errors_doc)]
    fn execute(&self) -> Result<()>;
}
