//! Configuration validation
//!
//! Validates engine configuration for consistency before a cycle runs.

mod error;
mod validator;


pub use error::ValidationError;
pub use validator::validate_config;
