//! Domain validation for [`SimulationInputs`].
//!
//! Every field is checked independently and all violations are accumulated
//! with stillwater's `Validation`, so a single run reports everything that is
//! wrong with an input set. [`run_validation`] converts the accumulated result
//! into the fail-fast `Result` the engine uses at its boundary.

use stillwater::{NonEmptyVec, Validation};

use super::SimulationInputs;
use crate::errors::{ConfigViolation, SimulationError};

/// Validation result accumulating every violated input constraint.
pub type InputValidation<T> = Validation<T, NonEmptyVec<ConfigViolation>>;

/// Validate an input set, accumulating ALL violations.
///
/// # Example
///
/// ```rust
/// use mvsim::core::{validate_inputs, SimulationInputs};
///
/// let inputs = SimulationInputs::default();
/// assert!(validate_inputs(&inputs).is_success());
/// ```
pub fn validate_inputs(inputs: &SimulationInputs) -> InputValidation<()> {
    let checks = [
        // Process
        percentage("defect_rate_pct", inputs.defect_rate_pct),
        positive("production_rate_per_hour", inputs.production_rate_per_hour),
        positive("hours_per_day", inputs.hours_per_day),
        positive("production_days_per_year", inputs.production_days_per_year),
        percentage(
            "current_inspection_detection_rate_pct",
            inputs.current_inspection_detection_rate_pct,
        ),
        // Tolerances
        percentage("max_fp_rate_pct", inputs.max_fp_rate_pct),
        percentage("max_fn_rate_pct", inputs.max_fn_rate_pct),
        // Costs
        non_negative("cost_per_false_positive", inputs.cost_per_false_positive),
        non_negative("cost_per_false_negative", inputs.cost_per_false_negative),
        // Implementation
        at_least_one("num_cameras", inputs.num_cameras),
        at_least_one("overlap_factor", inputs.overlap_factor),
        non_negative("system_cost", inputs.system_cost),
        non_negative("recurring_cost_per_year", inputs.recurring_cost_per_year),
        at_least_one("time_horizon_months", inputs.time_horizon_months),
        // Current model performance
        percentage("current_precision_pct", inputs.current_precision_pct),
        percentage("current_recall_pct", inputs.current_recall_pct),
    ];

    from_checks(checks)
}

/// Validate an input set, failing fast with every violation attached.
pub fn check_inputs(inputs: &SimulationInputs) -> Result<(), SimulationError> {
    run_validation(validate_inputs(inputs))
}

/// Convert an accumulated validation into the engine's `Result`.
pub fn run_validation<T>(validation: InputValidation<T>) -> Result<T, SimulationError> {
    match validation {
        Validation::Success(value) => Ok(value),
        Validation::Failure(errors) => {
            Err(SimulationError::invalid(errors.into_iter().collect()))
        }
    }
}

/// Combine several validations, keeping every violation in order.
pub fn combine_validations(validations: Vec<InputValidation<()>>) -> InputValidation<()> {
    let violations: Vec<ConfigViolation> = validations
        .into_iter()
        .flat_map(|v| match v {
            Validation::Success(()) => Vec::new(),
            Validation::Failure(errors) => errors.into_iter().collect::<Vec<_>>(),
        })
        .collect();

    accumulate(violations)
}

/// Lift a list of independent checks into a validation.
pub fn from_checks<I>(checks: I) -> InputValidation<()>
where
    I: IntoIterator<Item = Option<ConfigViolation>>,
{
    accumulate(checks.into_iter().flatten().collect())
}

fn accumulate(violations: Vec<ConfigViolation>) -> InputValidation<()> {
    let mut violations = violations.into_iter();
    match violations.next() {
        Some(first) => Validation::Failure(NonEmptyVec::new(first, violations.collect())),
        None => Validation::Success(()),
    }
}

/// Reject zero for an integer field that is used as a count or divisor.
pub(crate) fn at_least_one(field: &'static str, value: u32) -> Option<ConfigViolation> {
    (value < 1).then(|| ConfigViolation::new(field, "must be at least 1", value.to_string()))
}

fn finite(field: &'static str, value: f64) -> Option<ConfigViolation> {
    (!value.is_finite())
        .then(|| ConfigViolation::new(field, "must be a finite number", value.to_string()))
}

fn percentage(field: &'static str, value: f64) -> Option<ConfigViolation> {
    finite(field, value).or_else(|| {
        (!(0.0..=100.0).contains(&value))
            .then(|| ConfigViolation::new(field, "must be within [0, 100]", value.to_string()))
    })
}

fn non_negative(field: &'static str, value: f64) -> Option<ConfigViolation> {
    finite(field, value).or_else(|| {
        (value < 0.0)
            .then(|| ConfigViolation::new(field, "must not be negative", value.to_string()))
    })
}

pub(crate) fn positive(field: &'static str, value: f64) -> Option<ConfigViolation> {
    finite(field, value).or_else(|| {
        (value <= 0.0)
            .then(|| ConfigViolation::new(field, "must be greater than 0", value.to_string()))
    })
}
