//! Classification metrics for incremental evaluation
//!
//! Provides:
//! - Confusion matrix computation over a fixed class count
//! - Aggregate and per-class TP/FP/FN/TN decomposition
//! - Running totals merged across cycles
//! - Precision, recall, F1, accuracy and error rate with explicit
//!   handling of zero denominators

mod breakdown;
mod confusion;
mod counts;
mod metric;
mod metrics;
mod policy;


pub use breakdown::{ClassBreakdown, ClassStats};
pub use confusion::ConfusionMatrix;
pub use counts::{BatchCounts, ClassCounts, ConfusionCounts, RunningTotals};
pub use metric::Metric;
pub use metrics::{MetricValue, MetricsSnapshot};
pub use policy::ClassPolicy;
