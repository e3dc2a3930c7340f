//! Error types for simulation operations.
//!
//! The engine has a single fatal error category, [`SimulationError::InvalidConfiguration`],
//! raised before any derived structure is computed. It carries every violated
//! constraint of the input set so the caller can correct all of them in one pass.
//!
//! Results that are mathematically valid but operationally meaningless are not
//! errors; see [`crate::engine::Advisory`].
//!
//! [`ConfigError`] covers the configuration-file layer around the engine.
//!
//! # Example
//!
//! ```rust
//! use mvsim::errors::{ConfigViolation, SimulationError};
//!
//! let err = SimulationError::from(ConfigViolation::new(
//!     "overlap_factor",
//!     "must be at least 1",
//!     "0",
//! ));
//! assert!(err.is_invalid_configuration());
//! assert!(err.to_string().contains("overlap_factor"));
//! ```

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// A single broken input constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigViolation {
    /// Name of the offending `SimulationInputs` field.
    pub field: &'static str,
    /// Human-readable rule the value broke.
    pub rule: String,
    /// The offending value as supplied.
    pub value: String,
}

impl ConfigViolation {
    pub fn new(field: &'static str, rule: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field,
            rule: rule.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for ConfigViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} (got {})", self.field, self.rule, self.value)
    }
}

/// Main error type for the simulation engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    /// One or more inputs lie outside their documented domain.
    #[error("Invalid configuration: {}", format_violations(.violations))]
    InvalidConfiguration { violations: Vec<ConfigViolation> },
}

impl SimulationError {
    pub fn invalid(violations: Vec<ConfigViolation>) -> Self {
        Self::InvalidConfiguration { violations }
    }

    pub fn is_invalid_configuration(&self) -> bool {
        matches!(self, Self::InvalidConfiguration { .. })
    }

    /// Violated constraints carried by this error.
    pub fn violations(&self) -> &[ConfigViolation] {
        match self {
            Self::InvalidConfiguration { violations } => violations,
        }
    }

    /// Whether the error names `field` among its violations.
    pub fn mentions_field(&self, field: &str) -> bool {
        self.violations().iter().any(|v| v.field == field)
    }
}

impl From<ConfigViolation> for SimulationError {
    fn from(violation: ConfigViolation) -> Self {
        Self::invalid(vec![violation])
    }
}

/// Errors raised while locating or parsing a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An explicitly requested configuration file does not exist
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The file extension does not map to a supported format
    #[error("Unsupported configuration format for {} (expected .yaml, .yml or .toml)", .0.display())]
    UnsupportedFormat(PathBuf),

    /// File system errors while reading the configuration
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML syntax or schema errors
    #[error("Failed to parse YAML configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// TOML syntax or schema errors
    #[error("Failed to parse TOML configuration: {0}")]
    Toml(#[from] toml::de::Error),
}

fn format_violations(violations: &[ConfigViolation]) -> String {
    match violations {
        [] => "no details".to_string(),
        [single] => single.to_string(),
        many => many
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; "),
    }
}
