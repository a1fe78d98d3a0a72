//! Core CLI types - Cli, Command, and argument structs

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::types::OutputFormat;
use crate::config::EngineConfig;

/// Evaluar: incremental confusion-matrix metrics for prediction streams
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "evaluar")]
#[command(author = "PAIML")]
#[command(version)]
#[command(
    about = "Incremental precision/recall/F1 tracking over an append-only prediction stream"
)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Run one evaluation cycle and persist the updated state
    Cycle(CycleArgs),

    /// Run evaluation cycles on a fixed interval
    Watch(WatchArgs),

    /// Validate a configuration file
    Validate(ValidateArgs),

    /// Show persisted totals and the metrics derived from them
    Status(StatusArgs),
}

/// Arguments shared by commands that run cycles
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct EngineArgs {
    /// Path to YAML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    pub config: PathBuf,

    /// Path to the JSON state file (created if missing)
    #[arg(short, long, value_name = "STATE")]
    pub state: PathBuf,

    /// Override the prediction stream path
    #[arg(long)]
    pub predictions: Option<PathBuf>,

    /// Override the ground-truth label path
    #[arg(long)]
    pub labels: Option<PathBuf>,
}

/// Arguments for the cycle command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct CycleArgs {
    #[command(flatten)]
    pub engine: EngineArgs,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the watch command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct WatchArgs {
    #[command(flatten)]
    pub engine: EngineArgs,

    /// Seconds between cycles
    #[arg(long, default_value = "60")]
    pub interval: u64,

    /// Stop after this many cycles (runs forever when absent)
    #[arg(long)]
    pub max_cycles: Option<usize>,
}

/// Arguments for the validate command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ValidateArgs {
    /// Path to YAML configuration file
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,
}

/// Arguments for the status command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct StatusArgs {
    /// Path to the JSON state file
    #[arg(short, long, value_name = "STATE")]
    pub state: PathBuf,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Parse command line arguments
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}

/// Apply command-line path overrides to a loaded configuration
pub fn apply_overrides(config: &mut EngineConfig, args: &EngineArgs) {
    if let Some(predictions) = &args.predictions {
        config.predictions.clone_from(predictions);
    }
    if let Some(labels) = &args.labels {
        config.labels.clone_from(labels);
    }
}
