//! JSON state file

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::engine::{CycleOutcome, CycleState};
use crate::error::{Error, Result};
use crate::eval::MetricsSnapshot;

/// Contents of the state file
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedState {
    #[serde(flatten)]
    pub state: CycleState,
    /// Running metrics from the last evaluated cycle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_metrics: Option<MetricsSnapshot>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl PersistedState {
    /// Fold a cycle outcome into the persisted state
    pub fn record(&mut self, outcome: &CycleOutcome) {
        self.state = outcome.state().clone();
        if let Some(report) = outcome.report() {
            self.last_metrics = Some(report.metrics);
            self.updated_at = Some(report.evaluated_at);
        }
    }

    /// Metrics derived from the persisted totals
    pub fn metrics(&self) -> MetricsSnapshot {
        self.state.totals.snapshot()
    }
}

/// State file on disk
#[derive(Clone, Debug)]
pub struct StateFile {
    path: PathBuf,
}

impl StateFile {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the state, or a fresh one if the file does not exist yet
    pub fn load(&self) -> Result<PersistedState> {
        if !self.path.exists() {
            tracing::info!(path = %self.path.display(), "no state file, starting from offset 0");
            return Ok(PersistedState::default());
        }
        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            Error::io(format!("Failed to read state file {}", self.path.display()), e)
        })?;
        serde_json::from_str(&content)
            .map_err(|e| Error::Serialization(format!("{}: {e}", self.path.display())))
    }

    /// Write the state.
    ///
    /// Writes a sibling temp file and renames it over the target so a crash
    /// never leaves a truncated state file.
    pub fn save(&self, state: &PersistedState) -> Result<()> {
        let json = serde_json::to_string_pretty(state)
            .map_err(|e| Error::Serialization(e.to_string()))?;

        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, json)
            .map_err(|e| Error::io(format!("Failed to write {}", tmp.display()), e))?;
        std::fs::rename(&tmp, &self.path).map_err(|e| {
            Error::io(format!("Failed to replace state file {}", self.path.display()), e)
        })?;

        tracing::debug!(
            path = %self.path.display(),
            cursor = state.state.cursor,
            "state saved"
        );
        Ok(())
    }
}
