//! Evaluar CLI
//!
//! Periodic evaluation of an append-only prediction stream.
//!
//! # Usage
//!
//! ```bash
//! # Score the next batch and update the state file
//! evaluar cycle --config evaluar.yaml --state state.json
//!
//! # Keep scoring every 30 seconds
//! evaluar watch --config evaluar.yaml --state state.json --interval 30
//!
//! # Validate config
//! evaluar validate evaluar.yaml
//!
//! # Show running totals
//! evaluar status --state state.json
//! ```

use clap::Parser;
use evaluar::cli::{init_tracing, run_command, Cli, LogLevel};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(LogLevel::from_flags(cli.quiet, cli.verbose), cli.log_json);

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
