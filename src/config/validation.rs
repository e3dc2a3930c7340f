//! Validation with error accumulation for configuration.
//!
//! A configuration is valid when the input snapshot it produces is valid and
//! the calendar assumptions are usable as divisors/multipliers. Every
//! violation is collected so users see all issues in a single run.

use super::SimulatorConfig;
use crate::core::validation::from_checks;
use crate::core::{combine_validations, run_validation, validate_inputs, InputValidation};
use crate::engine::validate_run_settings;
use crate::errors::SimulationError;
use stillwater::Validation;

/// Validate an entire config, accumulating ALL errors.
///
/// # Example
///
/// ```rust
/// use mvsim::config::{validate_config, SimulatorConfig};
///
/// let validation = validate_config(&SimulatorConfig::default());
/// assert!(validation.is_success());
/// ```
pub fn validate_config(config: &SimulatorConfig) -> InputValidation<()> {
    // An unusable horizon is reported on its own; the remaining fields are
    // still checked against a one-month placeholder.
    let (inputs, horizon) = match config.implementation.horizon_months() {
        Ok(months) => (config.inputs_with_horizon(months), Validation::Success(())),
        Err(violation) => (config.inputs_with_horizon(1), from_checks([Some(violation)])),
    };
    combine_validations(vec![
        validate_inputs(&inputs),
        horizon,
        validate_assumptions(config),
    ])
}

/// Validate config with the engine's fail-fast `Result` API.
pub fn validate_config_result(config: &SimulatorConfig) -> Result<(), SimulationError> {
    run_validation(validate_config(config))
}

/// Calendar assumptions are used as multipliers and must be positive.
pub fn validate_assumptions(config: &SimulatorConfig) -> InputValidation<()> {
    validate_run_settings(&config.roi_assumptions(), config.payback_target_months())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::core::AssumptionsConfig;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config_result(&SimulatorConfig::default()).is_ok());
    }

    #[test]
    fn test_input_and_assumption_errors_are_combined() {
        let mut config = SimulatorConfig::default();
        config.implementation.overlap_factor = 0;
        config.assumptions = AssumptionsConfig {
            months_per_year: 0.0,
            ..AssumptionsConfig::default()
        };

        let err = validate_config_result(&config).unwrap_err();
        let fields: Vec<_> = err.violations().iter().map(|v| v.field).collect();
        assert_eq!(fields, vec!["overlap_factor", "months_per_year"]);
    }

    #[test]
    fn test_overflowing_horizon_reported_with_other_violations() {
        let mut config = SimulatorConfig::default();
        config.implementation.time_horizon = u32::MAX;
        config.implementation.num_cameras = 0;

        let err = validate_config_result(&config).unwrap_err();
        let fields: Vec<_> = err.violations().iter().map(|v| v.field).collect();
        assert_eq!(fields, vec!["num_cameras", "time_horizon"]);
    }

    #[test]
    fn test_zero_year_horizon_is_rejected() {
        let mut config = SimulatorConfig::default();
        config.implementation.time_horizon = 0;
        let err = validate_config_result(&config).unwrap_err();
        assert!(err.mentions_field("time_horizon_months"));
    }
}
