//! Status command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{OutputFormat, StatusArgs};
use crate::storage::{PersistedState, StateFile};

/// Format persisted totals and their metrics as a string
pub fn format_status(persisted: &PersistedState) -> String {
    let totals = &persisted.state.totals;
    let mut lines = vec![
        format!("  Cursor: {}", persisted.state.cursor),
        format!(
            "  Totals: TP={} FP={} FN={} TN={} Total={}",
            totals.true_positive,
            totals.false_positive,
            totals.false_negative,
            totals.true_negative,
            totals.total
        ),
        format!("  Metrics: {}", persisted.metrics()),
    ];
    if let Some(updated_at) = persisted.updated_at {
        lines.push(format!("  Last evaluated: {}", updated_at.to_rfc3339()));
    }
    lines.join("\n")
}

pub fn run_status(args: StatusArgs, level: LogLevel) -> Result<(), String> {
    if !args.state.exists() {
        return Err(format!("State file not found: {}", args.state.display()));
    }

    let persisted = StateFile::new(&args.state)
        .load()
        .map_err(|e| format!("State error: {e}"))?;

    match args.format {
        OutputFormat::Json => {
            let result = serde_json::json!({
                "cursor": persisted.state.cursor,
                "totals": persisted.state.totals,
                "metrics": persisted.metrics(),
                "updatedAt": persisted.updated_at,
            });
            let json = serde_json::to_string_pretty(&result)
                .map_err(|e| format!("Failed to serialize status: {e}"))?;
            println!("{json}");
        }
        OutputFormat::Text => {
            log(
                level,
                LogLevel::Normal,
                &format!("State: {}", args.state.display()),
            );
            log(level, LogLevel::Normal, &format_status(&persisted));
        }
    }

    Ok(())
}
