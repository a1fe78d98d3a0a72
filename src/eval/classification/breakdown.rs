//! Per-class accuracy and error rate for one batch

use std::fmt;

use serde::{Deserialize, Serialize};

use super::counts::ClassCounts;
use super::metrics::MetricValue;

/// Statistics for a single class
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassStats {
    pub class: usize,
    pub true_positive: u64,
    pub false_positive: u64,
    pub false_negative: u64,
    /// tp / (tp + fp + fn)
    pub accuracy: MetricValue,
    /// (fp + fn) / (tp + fp + fn)
    pub error_rate: MetricValue,
}

/// Per-class statistics for every configured class
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassBreakdown {
    pub classes: Vec<ClassStats>,
}

impl ClassBreakdown {
    /// Compute from per-class buckets. Classes with no observations get
    /// undefined accuracy and error rate.
    pub fn from_counts(counts: &ClassCounts) -> Self {
        let bucket = |v: &[u64], i: usize| v.get(i).copied().unwrap_or(0);
        let classes = (0..counts.n_classes())
            .map(|class| {
                let tp = bucket(&counts.true_positive, class);
                let fp = bucket(&counts.false_positive, class);
                let fn_ = bucket(&counts.false_negative, class);
                let seen = (tp + fp + fn_) as f64;
                let (accuracy, error_rate) = if seen == 0.0 {
                    (MetricValue::Undefined, MetricValue::Undefined)
                } else {
                    (
                        MetricValue::Defined(tp as f64 / seen),
                        MetricValue::Defined((fp + fn_) as f64 / seen),
                    )
                };
                ClassStats {
                    class,
                    true_positive: tp,
                    false_positive: fp,
                    false_negative: fn_,
                    accuracy,
                    error_rate,
                }
            })
            .collect();
        Self { classes }
    }
}

impl fmt::Display for ClassBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:>8} {:>8} {:>8} {:>8} {:>10} {:>10}",
            "class", "tp", "fp", "fn", "accuracy", "error"
        )?;
        for s in &self.classes {
            writeln!(
                f,
                "{:>8} {:>8} {:>8} {:>8} {:>10} {:>10}",
                s.class,
                s.true_positive,
                s.false_positive,
                s.false_negative,
                short(s.accuracy),
                short(s.error_rate)
            )?;
        }
        Ok(())
    }
}

fn short(value: MetricValue) -> String {
    match value {
        MetricValue::Defined(v) => format!("{v:.4}"),
        MetricValue::Undefined => "-".to_string(),
    }
}
