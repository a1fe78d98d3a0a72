//! Alert types

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::eval::Metric;

/// Direction of a threshold breach
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    /// A higher-is-better metric fell below its floor
    Degraded,
    /// A lower-is-better metric rose above its ceiling
    Elevated,
}

/// A single threshold breach
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub metric: Metric,
    pub kind: AlertKind,
    pub observed: f64,
    pub threshold: f64,
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            AlertKind::Degraded => write!(
                f,
                "{} degraded: {} < {}",
                self.metric, self.observed, self.threshold
            ),
            AlertKind::Elevated => write!(
                f,
                "{} elevated: {} > {}",
                self.metric, self.observed, self.threshold
            ),
        }
    }
}
