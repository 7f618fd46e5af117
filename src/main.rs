#![deny(unsafe_code)]
pub mod commands;

use anyhow::Result;
use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::error::ErrorKind;
use commands::command::Command;
use commands::metrics::HifiMetrics;
use env_logger::Env;
use log::info;

/// Custom styles for CLI help output
pub const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let command = match HifiMetrics::try_parse() {
        Ok(command) => command,
        Err(e) => {
            // Help and usage always go to stderr; only an explicit help/version request succeeds.
            eprint!("{}", e.render());
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            std::process::exit(code);
        }
    };

    info!("Running hifi-bam-metrics version {}", env!("CARGO_PKG_VERSION"));
    command.execute()
}
