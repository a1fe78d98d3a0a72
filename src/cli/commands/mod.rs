//! CLI command implementations

mod cycle;
mod status;
mod validate;
mod watch;

#[cfg(test)]
mod tests;

use crate::cli::LogLevel;
use crate::config::{apply_overrides, load_config, validate_config, Cli, Command, EngineArgs};
use crate::engine::CycleEngine;

/// Execute a CLI command based on the parsed arguments
pub fn run_command(cli: Cli) -> Result<(), String> {
    // Configure output based on verbose/quiet flags
    let log_level = LogLevel::from_flags(cli.quiet, cli.verbose);

    match cli.command {
        Command::Cycle(args) => cycle::run_cycle(args, log_level),
        Command::Watch(args) => watch::run_watch(args, log_level),
        Command::Validate(args) => validate::run_validate(args, log_level),
        Command::Status(args) => status::run_status(args, log_level),
    }
}

/// Load the config named on the command line and build an engine from it
fn build_engine(args: &EngineArgs) -> Result<CycleEngine, String> {
    let mut config = load_config(&args.config).map_err(|e| format!("Config error: {e}"))?;
    apply_overrides(&mut config, args);
    validate_config(&config).map_err(|e| format!("Validation failed: {e}"))?;
    Ok(CycleEngine::new(config))
}
