//! Model evaluation
//!
//! - `classification`: confusion matrix, count decomposition, running totals
//!   and derived metrics
//!
//! ## Example
//!
//! ```
//! use evaluar::eval::{ClassPolicy, ConfusionMatrix};
//!
//! let y_pred = vec![0, 1, 1, 2];
//! let y_true = vec![0, 1, 0, 2];
//! let cm = ConfusionMatrix::compute(&y_pred, &y_true, 3, ClassPolicy::Lenient)?;
//! let counts = cm.decompose(4)?;
//! println!("{}", counts.snapshot());
//! # Ok::<(), evaluar::Error>(())
//! ```

pub mod classification;

pub use classification::{
    BatchCounts, ClassBreakdown, ClassCounts, ClassPolicy, ClassStats, ConfusionCounts,
    ConfusionMatrix, Metric, MetricValue, MetricsSnapshot, RunningTotals,
};
