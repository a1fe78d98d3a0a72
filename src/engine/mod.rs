//! Evaluation cycles
//!
//! One cycle reads the next sentinel-terminated batch from the prediction
//! stream, scores it against the ground truth, merges the counts into the
//! caller's running totals and checks the resulting metrics against the
//! alert thresholds.
//!
//! The engine keeps no state between cycles. The caller passes a
//! `CycleState` in and persists the one that comes back.

mod cycle;
mod outcome;
mod state;


pub use cycle::CycleEngine;
pub use outcome::{CycleOutcome, CycleReport, SkipReason};
pub use state::CycleState;
