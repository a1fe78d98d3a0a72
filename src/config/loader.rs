//! Loading engine configuration from YAML

use std::fs;
use std::path::Path;

use super::schema::EngineConfig;
use super::validate::validate_config;
use crate::error::{Error, Result};

/// Load, parse and validate an engine configuration file
///
/// # Example
///
/// ```no_run
/// use evaluar::config::load_config;
///
/// let config = load_config("evaluar.yaml")?;
/// println!("{} classes", config.num_classes);
/// # Ok::<(), evaluar::Error>(())
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<EngineConfig> {
    let path = path.as_ref();
    let yaml = fs::read_to_string(path).map_err(|e| {
        Error::Config(format!("Failed to read config file {}: {e}", path.display()))
    })?;
    parse_config(&yaml)
}

/// Parse and validate a configuration from a YAML string
pub fn parse_config(yaml: &str) -> Result<EngineConfig> {
    let config: EngineConfig = serde_yaml::from_str(yaml)
        .map_err(|e| Error::Config(format!("Failed to parse YAML config: {e}")))?;
    validate_config(&config)?;
    Ok(config)
}
