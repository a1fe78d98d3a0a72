//! Validation error types
//!
//! Defines all validation error variants for engine configuration.

/// Validation error type
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid num_classes: {0} (must be > 0)")]
    InvalidNumClasses(usize),

    #[error("Invalid min_batch_size: {0} (must be > 0)")]
    InvalidMinBatchSize(usize),

    #[error("Invalid window_size: {0} (must be > 0)")]
    InvalidWindowSize(u64),

    #[error("min_batch_size {min_batch_size} exceeds window_size {window_size}")]
    BatchExceedsWindow {
        min_batch_size: usize,
        window_size: u64,
    },

    #[error("Sentinel {sentinel} is a valid class in [0, {num_classes})")]
    SentinelIsClass { sentinel: i64, num_classes: usize },

    #[error("Invalid threshold {name}: {value} (must be in [0.0, 1.0])")]
    InvalidThreshold { name: &'static str, value: f64 },
}
