use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::config::{resolve_config, validate_config, ConfigSource};
use crate::errors::ConfigViolation;

/// Result of checking one configuration.
#[derive(Debug)]
pub struct ValidationOutcome {
    pub source: ConfigSource,
    pub violations: Vec<ConfigViolation>,
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    fn source_label(&self) -> String {
        match &self.source {
            ConfigSource::File(path) => path.display().to_string(),
            ConfigSource::Defaults => "built-in defaults".to_string(),
        }
    }
}

pub fn check_configuration(path: Option<&Path>) -> Result<ValidationOutcome> {
    let (config, source) = resolve_config(path).context("Failed to load configuration")?;
    let violations = match validate_config(&config) {
        stillwater::Validation::Success(()) => Vec::new(),
        stillwater::Validation::Failure(errors) => errors.into_iter().collect(),
    };
    Ok(ValidationOutcome { source, violations })
}

pub fn validate_configuration(path: Option<PathBuf>) -> Result<()> {
    let outcome = check_configuration(path.as_deref())?;

    if outcome.is_valid() {
        println!("Configuration OK: {}", outcome.source_label());
        return Ok(());
    }

    eprintln!(
        "Configuration {} has {} problem(s):",
        outcome.source_label(),
        outcome.violations.len()
    );
    for violation in &outcome.violations {
        eprintln!("  - {violation}");
    }
    anyhow::bail!("Validation failed")
}
