//! YAML schema for the evaluation engine

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::eval::ClassPolicy;
use crate::monitor::Thresholds;
use crate::stream::LabelWindow;

fn default_num_classes() -> usize {
    10
}

fn default_sentinel() -> i64 {
    -1
}

fn default_min_batch_size() -> usize {
    10_000
}

fn default_window_size() -> u64 {
    10_000
}

/// Complete engine configuration
///
/// Only the two file paths are required; everything else defaults to the
/// MNIST evaluation setup (10 classes, batches of 10 000, sentinel `-1`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Append-only prediction stream
    pub predictions: PathBuf,

    /// Ground-truth label file
    pub labels: PathBuf,

    /// Number of classes; labels outside `[0, num_classes)` fall under `class_policy`
    #[serde(default = "default_num_classes")]
    pub num_classes: usize,

    /// Value marking the end of a batch in the prediction stream
    #[serde(default = "default_sentinel")]
    pub sentinel: i64,

    /// Batches shorter than this are skipped
    #[serde(default = "default_min_batch_size")]
    pub min_batch_size: usize,

    /// Nominal evaluation window used as `total` in every decomposition
    #[serde(default = "default_window_size")]
    pub window_size: u64,

    /// Handling of out-of-range class labels
    #[serde(default)]
    pub class_policy: ClassPolicy,

    /// Which ground-truth labels pair with a batch
    #[serde(default)]
    pub label_window: LabelWindow,

    /// Alert thresholds
    #[serde(default)]
    pub thresholds: Thresholds,
}

impl EngineConfig {
    /// Configuration with default settings for the given files
    pub fn new(predictions: impl Into<PathBuf>, labels: impl Into<PathBuf>) -> Self {
        Self {
            predictions: predictions.into(),
            labels: labels.into(),
            num_classes: default_num_classes(),
            sentinel: default_sentinel(),
            min_batch_size: default_min_batch_size(),
            window_size: default_window_size(),
            class_policy: ClassPolicy::default(),
            label_window: LabelWindow::default(),
            thresholds: Thresholds::default(),
        }
    }
}
