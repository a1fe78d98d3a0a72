//! Cycle command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{CycleArgs, OutputFormat};
use crate::engine::{CycleEngine, CycleOutcome};
use crate::storage::StateFile;

use super::build_engine;

pub fn run_cycle(args: CycleArgs, level: LogLevel) -> Result<(), String> {
    let engine = build_engine(&args.engine)?;
    let state_file = StateFile::new(&args.engine.state);

    log(
        level,
        LogLevel::Verbose,
        &format!(
            "Evaluating {} against {}",
            engine.config().predictions.display(),
            engine.config().labels.display()
        ),
    );

    let outcome = advance(&engine, &state_file).map_err(|e| format!("Cycle failed: {e}"))?;
    print_outcome(&outcome, args.format, level)
}

/// Run one cycle from the persisted state and save the result.
///
/// The state file is only rewritten when the cycle succeeds.
pub(super) fn advance(engine: &CycleEngine, state_file: &StateFile) -> crate::Result<CycleOutcome> {
    let mut persisted = state_file.load()?;
    let outcome = engine.run_cycle(persisted.state.clone())?;
    persisted.record(&outcome);
    state_file.save(&persisted)?;
    Ok(outcome)
}

/// Format a cycle outcome for humans
pub fn format_outcome(outcome: &CycleOutcome) -> String {
    match outcome {
        CycleOutcome::Evaluated { report, .. } => report.to_string(),
        CycleOutcome::Skipped { state, reason } => {
            format!("Skipped: {reason} (cursor at {})", state.cursor)
        }
    }
}

/// Machine-readable cycle outcome
pub fn outcome_json(outcome: &CycleOutcome) -> serde_json::Value {
    match outcome {
        CycleOutcome::Evaluated { state, report } => serde_json::json!({
            "status": "evaluated",
            "cursor": state.cursor,
            "report": report,
        }),
        CycleOutcome::Skipped { state, reason } => serde_json::json!({
            "status": "skipped",
            "cursor": state.cursor,
            "skip": reason,
        }),
    }
}

fn print_outcome(
    outcome: &CycleOutcome,
    format: OutputFormat,
    level: LogLevel,
) -> Result<(), String> {
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&outcome_json(outcome))
                .map_err(|e| format!("Failed to serialize report: {e}"))?;
            println!("{json}");
        }
        OutputFormat::Text => log(level, LogLevel::Normal, &format_outcome(outcome)),
    }
    Ok(())
}
