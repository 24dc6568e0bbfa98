//! Descriptor loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::AppDescriptor;
use crate::config::validation::{validate_descriptor, ValidationError};

/// Error type for descriptor loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate a deployment descriptor from a TOML file.
pub fn load_descriptor(path: &Path) -> Result<AppDescriptor, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_descriptor(&content)
}

/// Parse and validate descriptor content.
pub fn parse_descriptor(content: &str) -> Result<AppDescriptor, ConfigError> {
    let descriptor: AppDescriptor = toml::from_str(content)?;

    let errors = validate_descriptor(&descriptor);
    if !errors.is_empty() {
        return Err(ConfigError::Validation(errors));
    }

    Ok(descriptor)
}
