//! Threshold monitoring for metric snapshots
//!
//! Stateless checks that turn a `MetricsSnapshot` into zero or more alerts.
//! Alerts are observational; they never fail a cycle.

mod alert;
mod thresholds;


pub use alert::{Alert, AlertKind};
pub use thresholds::{ThresholdMonitor, Thresholds};
