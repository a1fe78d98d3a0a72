//! Derived metrics with explicit undefined results

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::metric::Metric;

/// A ratio that may have had a zero denominator
///
/// `Undefined` replaces the NaN or infinity a bare division would produce.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MetricValue {
    /// Computed at full `f64` precision
    Defined(f64),
    /// The denominator was zero
    Undefined,
}

impl MetricValue {
    fn ratio(numerator: f64, denominator: f64) -> Self {
        if denominator == 0.0 {
            Self::Undefined
        } else {
            Self::Defined(numerator / denominator)
        }
    }

    /// The value, if defined
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Defined(v) => Some(*v),
            Self::Undefined => None,
        }
    }

    /// Whether a value was computed
    pub fn is_defined(&self) -> bool {
        matches!(self, Self::Defined(_))
    }
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // f64 Display is the shortest string that round-trips
            Self::Defined(v) => write!(f, "{v}"),
            Self::Undefined => f.write_str("undefined"),
        }
    }
}

impl Serialize for MetricValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Accepts the string form written by `Serialize` as well as a bare number.
impl<'de> Deserialize<'de> for MetricValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum NumberOrString {
            Number(f64),
            Str(String),
        }

        match NumberOrString::deserialize(deserializer)? {
            NumberOrString::Number(v) => Ok(Self::Defined(v)),
            NumberOrString::Str(s) if s == "undefined" => Ok(Self::Undefined),
            NumberOrString::Str(s) => s.parse().map(Self::Defined).map_err(|_| {
                serde::de::Error::custom(format!("expected a number or 'undefined', got '{s}'"))
            }),
        }
    }
}

/// Precision, recall, F1, accuracy and error rate from aggregate counts
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSnapshot {
    pub precision: MetricValue,
    pub recall: MetricValue,
    pub f1_score: MetricValue,
    pub accuracy: MetricValue,
    pub error_rate: MetricValue,
}

impl MetricsSnapshot {
    /// Derive all five metrics.
    ///
    /// Undefined results:
    /// - precision when `tp + fp == 0`
    /// - recall when `tp + fn == 0`
    /// - F1 when precision or recall is undefined or both are zero
    /// - accuracy and error rate when `total == 0`
    ///
    /// With a negative `tn` accuracy and error rate can leave `[0, 1]`.
    pub fn derive(tp: u64, fp: u64, fn_: u64, tn: i64, total: u64) -> Self {
        let (tp, fp, fn_, tn, total) = (tp as f64, fp as f64, fn_ as f64, tn as f64, total as f64);

        let precision = MetricValue::ratio(tp, tp + fp);
        let recall = MetricValue::ratio(tp, tp + fn_);
        let f1_score = match (precision, recall) {
            (MetricValue::Defined(p), MetricValue::Defined(r)) => {
                MetricValue::ratio(2.0 * p * r, p + r)
            }
            _ => MetricValue::Undefined,
        };

        Self {
            precision,
            recall,
            f1_score,
            accuracy: MetricValue::ratio(tp + tn, total),
            error_rate: MetricValue::ratio(fp + fn_, total),
        }
    }

    /// Look up one metric
    pub fn get(&self, metric: Metric) -> MetricValue {
        match metric {
            Metric::Precision => self.precision,
            Metric::Recall => self.recall,
            Metric::F1Score => self.f1_score,
            Metric::Accuracy => self.accuracy,
            Metric::ErrorRate => self.error_rate,
        }
    }

    /// All metrics in report order
    pub fn iter(&self) -> impl Iterator<Item = (Metric, MetricValue)> + '_ {
        Metric::ALL.into_iter().map(move |m| (m, self.get(m)))
    }

    /// Metrics that could not be computed
    pub fn undefined(&self) -> Vec<Metric> {
        self.iter()
            .filter(|(_, v)| !v.is_defined())
            .map(|(m, _)| m)
            .collect()
    }
}

impl fmt::Display for MetricsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (metric, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{metric}={value}")?;
        }
        Ok(())
    }
}
