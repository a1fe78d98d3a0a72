//! Engine configuration
//!
//! - `schema`: YAML-backed `EngineConfig`
//! - `validate`: consistency checks run on every load
//! - `cli`: command-line arguments for the `evaluar` binary

pub mod cli;
mod loader;
mod schema;
mod validate;

pub use cli::{
    apply_overrides, parse_args, Cli, Command, CycleArgs, EngineArgs, OutputFormat, StatusArgs,
    ValidateArgs, WatchArgs,
};
pub use loader::{load_config, parse_config};
pub use schema::EngineConfig;
pub use validate::{validate_config, ValidationError};
