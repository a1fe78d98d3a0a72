//! Confusion matrix for a fixed number of classes

use std::fmt;

use super::counts::{ClassCounts, ConfusionCounts};
use super::policy::ClassPolicy;
use crate::error::{Error, Result};

/// Confusion matrix for multi-class classification
///
/// Element [i][j] represents count of samples with true label i predicted as j
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfusionMatrix {
    /// The matrix data: matrix[true_label][predicted_label] = count
    matrix: Vec<Vec<u64>>,
    /// Number of classes
    n_classes: usize,
    /// Pairs skipped because a value was outside `[0, n_classes)`
    dropped: usize,
}

impl ConfusionMatrix {
    /// Create an empty confusion matrix with given number of classes
    pub fn new(n_classes: usize) -> Self {
        Self {
            matrix: vec![vec![0; n_classes]; n_classes],
            n_classes,
            dropped: 0,
        }
    }

    /// Build a matrix from predictions and ground truth of equal length.
    ///
    /// Pairs with either value outside `[0, n_classes)` are dropped under
    /// `ClassPolicy::Lenient` and rejected under `ClassPolicy::Strict`.
    pub fn compute(
        y_pred: &[i64],
        y_true: &[i64],
        n_classes: usize,
        policy: ClassPolicy,
    ) -> Result<Self> {
        if y_pred.len() != y_true.len() {
            return Err(Error::LengthMismatch {
                predictions: y_pred.len(),
                truth: y_true.len(),
            });
        }

        let mut cm = Self::new(n_classes);

        for (index, (&pred, &true_label)) in y_pred.iter().zip(y_true.iter()).enumerate() {
            match (class_index(true_label, n_classes), class_index(pred, n_classes)) {
                (Some(t), Some(p)) => cm.matrix[t][p] += 1,
                (t, _) => {
                    if policy == ClassPolicy::Strict {
                        let value = if t.is_none() { true_label } else { pred };
                        return Err(Error::ClassOutOfRange {
                            index,
                            value,
                            num_classes: n_classes,
                        });
                    }
                    cm.dropped += 1;
                }
            }
        }

        if cm.dropped > 0 {
            tracing::debug!(dropped = cm.dropped, n_classes, "skipped out-of-range pairs");
        }

        Ok(cm)
    }

    /// Get the raw matrix
    pub fn matrix(&self) -> &Vec<Vec<u64>> {
        &self.matrix
    }

    /// Get number of classes
    pub fn n_classes(&self) -> usize {
        self.n_classes
    }

    /// Get element at [true_label][predicted_label]
    pub fn get(&self, true_label: usize, predicted_label: usize) -> u64 {
        self.matrix[true_label][predicted_label]
    }

    /// Pairs skipped by the lenient policy
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Sum over every cell (pairs actually counted)
    pub fn cells_sum(&self) -> u64 {
        self.matrix.iter().flatten().sum()
    }

    /// Sum over the diagonal (correct predictions)
    pub fn diagonal_sum(&self) -> u64 {
        (0..self.n_classes).map(|i| self.matrix[i][i]).sum()
    }

    /// Decompose into aggregate and per-class counts against a nominal window.
    ///
    /// For each class pair `i < j` the lower cell `[j][i]` counts as a false
    /// positive attributed to class `j` and the upper cell `[i][j]` as a
    /// false negative attributed to class `i`. `total` is `window_size`
    /// rather than the observed count, and true negatives are whatever the
    /// window leaves over. A batch larger than the window leaves a negative
    /// `true_negative`.
    pub fn decompose(&self, window_size: u64) -> Result<ConfusionCounts> {
        let n = self.n_classes;
        let mut per_class = ClassCounts::zeroed(n);
        let mut tp = 0u64;
        let mut fp = 0u64;
        let mut fn_ = 0u64;

        for i in 0..n {
            tp += self.matrix[i][i];
            per_class.true_positive[i] += self.matrix[i][i];
            for j in (i + 1)..n {
                fp += self.matrix[j][i];
                per_class.false_positive[j] += self.matrix[j][i];
                fn_ += self.matrix[i][j];
                per_class.false_negative[i] += self.matrix[i][j];
            }
        }

        let observed = i64::try_from(tp + fp + fn_).map_err(|_| Error::CounterOverflow)?;
        let window = i64::try_from(window_size).map_err(|_| Error::CounterOverflow)?;
        let tn = window - observed;
        if tn < 0 {
            tracing::warn!(
                observed,
                window_size,
                true_negative = tn,
                "batch exceeds window_size; true negatives are negative"
            );
        }

        Ok(ConfusionCounts {
            true_positive: tp,
            false_positive: fp,
            false_negative: fn_,
            true_negative: tn,
            total: window_size,
            per_class,
        })
    }
}

fn class_index(value: i64, n_classes: usize) -> Option<usize> {
    usize::try_from(value).ok().filter(|&v| v < n_classes)
}

impl fmt::Display for ConfusionMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Confusion Matrix:")?;

        // Header
        write!(f, "      ")?;
        for j in 0..self.n_classes {
            write!(f, "Pred {j} ")?;
        }
        writeln!(f)?;

        // Rows
        for i in 0..self.n_classes {
            write!(f, "True {i}")?;
            for j in 0..self.n_classes {
                write!(f, "{:>6} ", self.matrix[i][j])?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
