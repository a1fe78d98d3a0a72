//! Fixed-threshold checks

use serde::{Deserialize, Serialize};

use super::alert::{Alert, AlertKind};
use crate::eval::{Metric, MetricValue, MetricsSnapshot};

/// Alert thresholds
///
/// Floors apply to precision, recall, F1 and accuracy; the ceiling applies to
/// error rate. Comparisons are strict, so a value equal to its threshold
/// does not alert.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    pub min_precision: f64,
    pub min_recall: f64,
    pub min_f1_score: f64,
    pub min_accuracy: f64,
    pub max_error_rate: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            min_precision: 0.8,
            min_recall: 0.8,
            min_f1_score: 0.8,
            min_accuracy: 0.8,
            max_error_rate: 0.2,
        }
    }
}

impl Thresholds {
    /// Threshold and breach direction for a metric
    pub fn limit(&self, metric: Metric) -> (f64, AlertKind) {
        match metric {
            Metric::Precision => (self.min_precision, AlertKind::Degraded),
            Metric::Recall => (self.min_recall, AlertKind::Degraded),
            Metric::F1Score => (self.min_f1_score, AlertKind::Degraded),
            Metric::Accuracy => (self.min_accuracy, AlertKind::Degraded),
            Metric::ErrorRate => (self.max_error_rate, AlertKind::Elevated),
        }
    }
}

/// Evaluates snapshots against thresholds
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ThresholdMonitor {
    thresholds: Thresholds,
}

impl ThresholdMonitor {
    /// Create a monitor with the given thresholds
    pub fn new(thresholds: Thresholds) -> Self {
        Self { thresholds }
    }

    /// Get the thresholds in use
    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    /// Check every metric independently.
    ///
    /// Undefined metrics are skipped.
    pub fn evaluate(&self, snapshot: &MetricsSnapshot) -> Vec<Alert> {
        snapshot
            .iter()
            .filter_map(|(metric, value)| self.check(metric, value))
            .collect()
    }

    fn check(&self, metric: Metric, value: MetricValue) -> Option<Alert> {
        let observed = value.value()?;
        let (threshold, kind) = self.thresholds.limit(metric);
        let breached = match kind {
            AlertKind::Degraded => observed < threshold,
            AlertKind::Elevated => observed > threshold,
        };
        breached.then_some(Alert {
            metric,
            kind,
            observed,
            threshold,
        })
    }
}
