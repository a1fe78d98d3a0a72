//! Watch command implementation

use std::thread;
use std::time::Duration;

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::WatchArgs;
use crate::storage::StateFile;

use super::build_engine;
use super::cycle::{advance, format_outcome};

pub fn run_watch(args: WatchArgs, level: LogLevel) -> Result<(), String> {
    let engine = build_engine(&args.engine)?;
    let state_file = StateFile::new(&args.engine.state);
    let interval = Duration::from_secs(args.interval);

    log(
        level,
        LogLevel::Normal,
        &format!(
            "Watching {} every {}s",
            engine.config().predictions.display(),
            args.interval
        ),
    );

    let mut cycles = 0usize;
    let mut failures = 0usize;
    loop {
        match advance(&engine, &state_file) {
            Ok(outcome) => {
                if outcome.is_evaluated() || level == LogLevel::Verbose {
                    log(level, LogLevel::Normal, &format_outcome(&outcome));
                }
            }
            Err(e) => {
                failures += 1;
                // State was not saved; the same batch is read on the next tick
                tracing::error!(error = %e, transient = e.is_transient(), "cycle failed");
            }
        }

        cycles += 1;
        if args.max_cycles.is_some_and(|max| cycles >= max) {
            break;
        }
        thread::sleep(interval);
    }

    log(
        level,
        LogLevel::Verbose,
        &format!("Stopped after {cycles} cycles ({failures} failed)"),
    );
    Ok(())
}
