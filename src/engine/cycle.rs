//! Cycle driver

use std::time::Instant;

use chrono::Utc;

use super::outcome::{CycleOutcome, CycleReport, SkipReason};
use super::state::CycleState;
use crate::config::EngineConfig;
use crate::error::Result;
use crate::eval::{ClassBreakdown, ConfusionMatrix, MetricsSnapshot};
use crate::monitor::{Alert, ThresholdMonitor};
use crate::stream::{load_all, read_batch, BatchStatus};

/// Runs evaluation cycles for one prediction stream
#[derive(Clone, Debug)]
pub struct CycleEngine {
    config: EngineConfig,
    monitor: ThresholdMonitor,
}

impl CycleEngine {
    /// Create an engine for a validated configuration
    pub fn new(config: EngineConfig) -> Self {
        let monitor = ThresholdMonitor::new(config.thresholds);
        Self { config, monitor }
    }

    /// Get the configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run one cycle from `state`.
    ///
    /// On error the caller should keep its previous state: nothing returned
    /// from a failed cycle is meant to be persisted, so the same batch is
    /// read again next time.
    pub fn run_cycle(&self, state: CycleState) -> Result<CycleOutcome> {
        let cfg = &self.config;
        let started = Instant::now();

        let read = read_batch(&cfg.predictions, state.cursor, cfg.sentinel, cfg.min_batch_size)?;

        match read.status {
            BatchStatus::Pending => {
                return Ok(CycleOutcome::Skipped {
                    state,
                    reason: SkipReason::Pending {
                        scanned: read.scanned,
                    },
                });
            }
            BatchStatus::TooSmall => {
                tracing::info!(
                    size = read.scanned,
                    min_batch_size = cfg.min_batch_size,
                    cursor = read.next_offset,
                    "batch below minimum size skipped"
                );
                return Ok(CycleOutcome::Skipped {
                    state: CycleState {
                        cursor: read.next_offset,
                        totals: state.totals,
                    },
                    reason: SkipReason::TooSmall {
                        size: read.scanned,
                        min_batch_size: cfg.min_batch_size,
                    },
                });
            }
            BatchStatus::Ready => {}
        }

        let labels = load_all(&cfg.labels)?;
        let truth = cfg.label_window.select(&labels, read.batch.len())?;

        let cm = ConfusionMatrix::compute(&read.batch, truth, cfg.num_classes, cfg.class_policy)?;
        let batch = cm.decompose(cfg.window_size)?;
        let totals = state.totals.merge(&batch)?;

        let batch_metrics = batch.snapshot();
        let per_class = ClassBreakdown::from_counts(&batch.per_class);
        let metrics = totals.snapshot();

        let batch_alerts = self.monitor.evaluate(&batch_metrics);
        let alerts = self.monitor.evaluate(&metrics);

        log_snapshot("batch", &batch_metrics, &batch_alerts);
        log_snapshot("running", &metrics, &alerts);
        for class in &per_class.classes {
            tracing::debug!(
                class = class.class,
                accuracy = %class.accuracy,
                error_rate = %class.error_rate,
                "per-class batch metrics"
            );
        }

        let duration_ms = started.elapsed().as_secs_f64() * 1000.0;
        tracing::info!(
            tp = totals.true_positive,
            fp = totals.false_positive,
            fn_ = totals.false_negative,
            tn = totals.true_negative,
            total = totals.total,
            batch_size = read.batch.len(),
            cursor = read.next_offset,
            duration_ms,
            "cycle evaluated"
        );

        let report = CycleReport {
            evaluated_at: Utc::now(),
            duration_ms,
            cursor_from: state.cursor,
            cursor_to: read.next_offset,
            batch_size: read.batch.len(),
            dropped: cm.dropped(),
            batch,
            batch_metrics,
            batch_alerts,
            per_class,
            metrics,
            alerts,
        };

        Ok(CycleOutcome::Evaluated {
            state: CycleState {
                cursor: read.next_offset,
                totals,
            },
            report: Box::new(report),
        })
    }
}

fn log_snapshot(scope: &str, snapshot: &MetricsSnapshot, alerts: &[Alert]) {
    tracing::info!(
        scope,
        precision = %snapshot.precision,
        recall = %snapshot.recall,
        f1_score = %snapshot.f1_score,
        accuracy = %snapshot.accuracy,
        error_rate = %snapshot.error_rate,
        "metrics"
    );
    let undefined = snapshot.undefined();
    if !undefined.is_empty() {
        tracing::warn!(scope, ?undefined, "metrics undefined (zero denominator)");
    }
    for alert in alerts {
        tracing::warn!(
            scope,
            metric = %alert.metric,
            observed = alert.observed,
            threshold = alert.threshold,
            "{alert}"
        );
    }
}
