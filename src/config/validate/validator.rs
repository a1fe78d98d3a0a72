//! Configuration validation logic

use super::error::ValidationError;
use crate::config::schema::EngineConfig;

/// Validate an engine configuration
///
/// Checks:
/// - Sizes are non-zero and a minimum batch fits in the window
/// - The sentinel cannot be confused with a class label
/// - Thresholds are ratios in `[0, 1]`
///
/// File existence is not checked here; a missing stream is an IO error of
/// the cycle that needs it.
pub fn validate_config(config: &EngineConfig) -> Result<(), ValidationError> {
    if config.num_classes == 0 {
        return Err(ValidationError::InvalidNumClasses(config.num_classes));
    }

    if config.min_batch_size == 0 {
        return Err(ValidationError::InvalidMinBatchSize(config.min_batch_size));
    }

    if config.window_size == 0 {
        return Err(ValidationError::InvalidWindowSize(config.window_size));
    }

    if config.min_batch_size as u64 > config.window_size {
        return Err(ValidationError::BatchExceedsWindow {
            min_batch_size: config.min_batch_size,
            window_size: config.window_size,
        });
    }

    let sentinel_is_class =
        usize::try_from(config.sentinel).is_ok_and(|s| s < config.num_classes);
    if sentinel_is_class {
        return Err(ValidationError::SentinelIsClass {
            sentinel: config.sentinel,
            num_classes: config.num_classes,
        });
    }

    let t = &config.thresholds;
    for (name, value) in [
        ("min_precision", t.min_precision),
        ("min_recall", t.min_recall),
        ("min_f1_score", t.min_f1_score),
        ("min_accuracy", t.min_accuracy),
        ("max_error_rate", t.max_error_rate),
    ] {
        if !(0.0..=1.0).contains(&value) {
            return Err(ValidationError::InvalidThreshold { name, value });
        }
    }

    Ok(())
}
