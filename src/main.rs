//! # autoclean command-line entry point
//!
//! ```bash
//! autoclean clean --file data.csv                 # writes data_cleaned.csv
//! autoclean clean --file data.csv --keep-nulls -o out.csv
//! autoclean summary --file data.csv --json
//! ```
//!
//! Set `RUST_LOG=debug` to see per-step detail on stderr.

#![expect(clippy::print_stdout, reason = "CLI reports go to stdout")]

mod cli;

use anyhow::Result;
use clap::Parser as _;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    let log_dir = if cli.log_to_file {
        Some(autoclean::logging::default_log_dir()?)
    } else {
        cli.log_dir.clone()
    };
    autoclean::logging::init(log_dir.as_deref())?;

    cli::run_command(cli.command)
}
