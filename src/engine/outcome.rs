//! Cycle results

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::state::CycleState;
use crate::eval::{BatchCounts, ClassBreakdown, MetricsSnapshot};
use crate::monitor::Alert;

/// Why a cycle did not evaluate anything
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "reason")]
pub enum SkipReason {
    /// No sentinel after the cursor yet
    Pending { scanned: usize },
    /// A batch ended but was shorter than the minimum; it has been skipped
    TooSmall { size: usize, min_batch_size: usize },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending { scanned } => {
                write!(f, "batch incomplete ({scanned} predictions, no sentinel yet)")
            }
            Self::TooSmall {
                size,
                min_batch_size,
            } => write!(
                f,
                "batch of {size} predictions below minimum {min_batch_size}; skipped"
            ),
        }
    }
}

/// Everything computed in an evaluated cycle
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleReport {
    pub evaluated_at: DateTime<Utc>,
    pub duration_ms: f64,
    /// Cursor before and after the batch
    pub cursor_from: u64,
    pub cursor_to: u64,
    /// Predictions in the batch, including dropped ones
    pub batch_size: usize,
    /// Pairs skipped for out-of-range class labels
    pub dropped: usize,
    /// Counts for this batch alone
    pub batch: BatchCounts,
    pub batch_metrics: MetricsSnapshot,
    pub batch_alerts: Vec<Alert>,
    pub per_class: ClassBreakdown,
    /// Metrics over the merged running totals
    pub metrics: MetricsSnapshot,
    pub alerts: Vec<Alert>,
}

impl CycleReport {
    /// Whether either snapshot breached a threshold
    pub fn has_alerts(&self) -> bool {
        !self.alerts.is_empty() || !self.batch_alerts.is_empty()
    }
}

impl fmt::Display for CycleReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Evaluated {} predictions at {} ({:.1} ms)",
            self.batch_size,
            self.evaluated_at.to_rfc3339(),
            self.duration_ms
        )?;
        writeln!(f, "  Cursor: {} -> {}", self.cursor_from, self.cursor_to)?;
        if self.dropped > 0 {
            writeln!(f, "  Dropped (out of range): {}", self.dropped)?;
        }
        writeln!(
            f,
            "  Batch: TP={} FP={} FN={} TN={} Total={}",
            self.batch.true_positive,
            self.batch.false_positive,
            self.batch.false_negative,
            self.batch.true_negative,
            self.batch.total
        )?;
        writeln!(f, "  Batch metrics: {}", self.batch_metrics)?;
        writeln!(f, "  Running metrics: {}", self.metrics)?;
        writeln!(f)?;
        write!(f, "{}", self.per_class)?;
        for alert in self.batch_alerts.iter() {
            writeln!(f, "  ALERT (batch): {alert}")?;
        }
        for alert in self.alerts.iter() {
            writeln!(f, "  ALERT: {alert}")?;
        }
        Ok(())
    }
}

/// Result of one cycle
#[derive(Clone, Debug, PartialEq)]
pub enum CycleOutcome {
    /// A batch was scored and merged
    Evaluated {
        state: CycleState,
        report: Box<CycleReport>,
    },
    /// Nothing was scored; totals are unchanged
    Skipped {
        state: CycleState,
        reason: SkipReason,
    },
}

impl CycleOutcome {
    /// State to persist for the next cycle
    pub fn state(&self) -> &CycleState {
        match self {
            Self::Evaluated { state, .. } | Self::Skipped { state, .. } => state,
        }
    }

    /// Take the state to persist
    pub fn into_state(self) -> CycleState {
        match self {
            Self::Evaluated { state, .. } | Self::Skipped { state, .. } => state,
        }
    }

    /// The report, if a batch was evaluated
    pub fn report(&self) -> Option<&CycleReport> {
        match self {
            Self::Evaluated { report, .. } => Some(report),
            Self::Skipped { .. } => None,
        }
    }

    /// Whether a batch was evaluated
    pub fn is_evaluated(&self) -> bool {
        matches!(self, Self::Evaluated { .. })
    }
}
