//! Evaluar: incremental confusion-matrix metrics for prediction streams
//!
//! A model appends predicted class labels to a file, one per line, and
//! closes each batch with a sentinel. Every evaluation cycle picks up the
//! next complete batch, scores it against the ground-truth labels and folds
//! the result into running totals.
//!
//! # Architecture
//!
//! - `stream`: batch extraction from the prediction stream and label loading
//! - `eval`: confusion matrix, TP/FP/FN/TN decomposition and derived metrics
//! - `monitor`: threshold checks producing alerts
//! - `engine`: one evaluation cycle, start to finish
//! - `storage`: JSON state file for the CLI
//! - `config` / `cli`: YAML configuration and the `evaluar` binary
//!
//! # Example
//!
//! ```no_run
//! use evaluar::config::load_config;
//! use evaluar::engine::{CycleEngine, CycleState};
//!
//! let engine = CycleEngine::new(load_config("evaluar.yaml")?);
//! let outcome = engine.run_cycle(CycleState::new())?;
//! if let Some(report) = outcome.report() {
//!     println!("{}", report.metrics);
//! }
//! # Ok::<(), evaluar::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod monitor;
pub mod storage;
pub mod stream;

pub use error::{Error, Result};
