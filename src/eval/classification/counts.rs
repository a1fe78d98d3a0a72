//! Aggregate confusion counts and their accumulation across cycles

use serde::{Deserialize, Serialize};

use super::metrics::MetricsSnapshot;
use crate::error::{Error, Result};

/// Per-class TP/FP/FN buckets, indexed by class
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassCounts {
    pub true_positive: Vec<u64>,
    pub false_positive: Vec<u64>,
    pub false_negative: Vec<u64>,
}

impl ClassCounts {
    /// Buckets for `n_classes` classes, all zero
    pub fn zeroed(n_classes: usize) -> Self {
        Self {
            true_positive: vec![0; n_classes],
            false_positive: vec![0; n_classes],
            false_negative: vec![0; n_classes],
        }
    }

    /// Number of classes tracked
    pub fn n_classes(&self) -> usize {
        self.true_positive
            .len()
            .max(self.false_positive.len())
            .max(self.false_negative.len())
    }

    fn merge(&self, other: &Self) -> Result<Self> {
        Ok(Self {
            true_positive: add_buckets(&self.true_positive, &other.true_positive)?,
            false_positive: add_buckets(&self.false_positive, &other.false_positive)?,
            false_negative: add_buckets(&self.false_negative, &other.false_negative)?,
        })
    }
}

/// Element-wise sum; the shorter side is treated as zero-extended.
fn add_buckets(a: &[u64], b: &[u64]) -> Result<Vec<u64>> {
    let len = a.len().max(b.len());
    (0..len)
        .map(|i| {
            let x = a.get(i).copied().unwrap_or(0);
            let y = b.get(i).copied().unwrap_or(0);
            x.checked_add(y).ok_or(Error::CounterOverflow)
        })
        .collect()
}

/// Aggregate confusion counts
///
/// The same shape serves a single batch decomposition and the lifetime
/// running totals the caller persists between cycles.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfusionCounts {
    pub true_positive: u64,
    pub false_positive: u64,
    pub false_negative: u64,
    /// Negative when a batch holds more classified pairs than the window
    pub true_negative: i64,
    pub total: u64,
    #[serde(default)]
    pub per_class: ClassCounts,
}

/// Counts from one evaluated batch
pub type BatchCounts = ConfusionCounts;

/// Lifetime counts accumulated across cycles
pub type RunningTotals = ConfusionCounts;

impl ConfusionCounts {
    /// Element-wise sum of two count sets.
    ///
    /// Pure, commutative and associative. Fails instead of wrapping if any
    /// counter would overflow.
    pub fn merge(&self, other: &Self) -> Result<Self> {
        let add = |a: u64, b: u64| a.checked_add(b).ok_or(Error::CounterOverflow);
        Ok(Self {
            true_positive: add(self.true_positive, other.true_positive)?,
            false_positive: add(self.false_positive, other.false_positive)?,
            false_negative: add(self.false_negative, other.false_negative)?,
            true_negative: self
                .true_negative
                .checked_add(other.true_negative)
                .ok_or(Error::CounterOverflow)?,
            total: add(self.total, other.total)?,
            per_class: self.per_class.merge(&other.per_class)?,
        })
    }

    /// Whether nothing has been accumulated yet
    pub fn is_empty(&self) -> bool {
        self.total == 0
            && self.true_positive == 0
            && self.false_positive == 0
            && self.false_negative == 0
            && self.true_negative == 0
    }

    /// Metrics derived from the aggregate counters
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot::derive(
            self.true_positive,
            self.false_positive,
            self.false_negative,
            self.true_negative,
            self.total,
        )
    }
}
