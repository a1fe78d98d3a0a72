//! Caller-owned cycle state

use serde::{Deserialize, Serialize};

use crate::eval::RunningTotals;

/// Cursor and running totals carried between cycles
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleState {
    /// Byte offset of the first unconsumed line in the prediction stream
    pub cursor: u64,
    /// Lifetime counts
    #[serde(default)]
    pub totals: RunningTotals,
}

impl CycleState {
    /// State for a stream that has not been read yet
    pub fn new() -> Self {
        Self::default()
    }
}
