//! Validate command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{load_config, validate_config, EngineConfig, ValidateArgs};

/// Format the configuration summary as a string
pub fn format_config_summary(config: &EngineConfig) -> String {
    let t = &config.thresholds;
    [
        format!("  Predictions: {}", config.predictions.display()),
        format!("  Labels: {}", config.labels.display()),
        format!("  Classes: {}", config.num_classes),
        format!("  Sentinel: {}", config.sentinel),
        format!("  Min batch size: {}", config.min_batch_size),
        format!("  Window size: {}", config.window_size),
        format!("  Class policy: {:?}", config.class_policy),
        format!("  Label window: {:?}", config.label_window),
        format!(
            "  Thresholds: precision>={} recall>={} f1_score>={} accuracy>={} error_rate<={}",
            t.min_precision, t.min_recall, t.min_f1_score, t.min_accuracy, t.max_error_rate
        ),
    ]
    .join("\n")
}

pub fn run_validate(args: ValidateArgs, level: LogLevel) -> Result<(), String> {
    log(
        level,
        LogLevel::Normal,
        &format!("Validating config: {}", args.config.display()),
    );

    let config = load_config(&args.config).map_err(|e| format!("Config error: {e}"))?;

    validate_config(&config).map_err(|e| format!("Validation failed: {e}"))?;

    log(level, LogLevel::Normal, "Configuration is valid");
    log(level, LogLevel::Verbose, &format_config_summary(&config));

    Ok(())
}
