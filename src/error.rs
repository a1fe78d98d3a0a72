//! Error types with actionable diagnostics.
//!
//! Every variant that can stop a cycle says what went wrong and what to check
//! before the next invocation. Threshold breaches are not errors and never
//! appear here.

use std::path::PathBuf;

use crate::config::ValidationError;

/// Result type alias for evaluar operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort a cycle.
///
/// A failed cycle leaves the caller's cursor and totals untouched, so the
/// same batch is picked up again on the next invocation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A file was missing or unreadable.
    #[error("IO error: {context}\n  Cause: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// A line that should hold a class label does not parse as an integer.
    #[error("Invalid integer {content:?} in {} at {location}\n  → Each non-blank line must hold exactly one integer", path.display())]
    Parse {
        path: PathBuf,
        location: LineLocation,
        content: String,
    },

    /// Prediction and ground-truth sequences differ in length.
    #[error("Length mismatch: {predictions} predictions vs {truth} ground-truth labels\n  → Check that the label file covers the evaluated batch")]
    LengthMismatch { predictions: usize, truth: usize },

    /// A class label fell outside `[0, num_classes)` under the strict policy.
    #[error("Class label {value} at index {index} outside [0, {num_classes})\n  → Fix the label or switch class_policy to lenient")]
    ClassOutOfRange {
        index: usize,
        value: i64,
        num_classes: usize,
    },

    /// A running counter would overflow.
    #[error("Running totals overflowed\n  → Reset the persisted state")]
    CounterOverflow,

    /// Configuration could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration parsed but holds invalid values.
    #[error("Invalid configuration: {0}")]
    Validation(#[from] ValidationError),

    /// Persisted state could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl Error {
    /// Create an IO error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Whether the next cycle may succeed without operator action.
    ///
    /// IO failures are usually transient (the writer holds the file, the
    /// volume is remounting). Everything else needs the input or config fixed.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Io { .. })
    }
}

/// Where in a file a parse error occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineLocation {
    /// Byte offset of the start of the line (prediction stream).
    Offset(u64),
    /// 1-based line number (ground-truth file).
    Line(usize),
}

impl std::fmt::Display for LineLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Offset(offset) => write!(f, "byte offset {offset}"),
            Self::Line(line) => write!(f, "line {line}"),
        }
    }
}
