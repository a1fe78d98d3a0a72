//! Metric names

use serde::{Deserialize, Serialize};
use std::fmt;

/// Metrics derived from aggregate confusion counts
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// tp / (tp + fp)
    Precision,
    /// tp / (tp + fn)
    Recall,
    /// Harmonic mean of precision and recall
    F1Score,
    /// (tp + tn) / total
    Accuracy,
    /// (fp + fn) / total
    ErrorRate,
}

impl Metric {
    /// All metrics in report order
    pub const ALL: [Metric; 5] = [
        Metric::Precision,
        Metric::Recall,
        Metric::F1Score,
        Metric::Accuracy,
        Metric::ErrorRate,
    ];

    /// Whether higher values are better for this metric
    pub fn higher_is_better(&self) -> bool {
        !matches!(self, Metric::ErrorRate)
    }

    /// Get metric name as string
    pub fn name(&self) -> &'static str {
        match self {
            Metric::Precision => "precision",
            Metric::Recall => "recall",
            Metric::F1Score => "f1_score",
            Metric::Accuracy => "accuracy",
            Metric::ErrorRate => "error_rate",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
