use serde::{Deserialize, Serialize};

use crate::core::SimulationInputs;
use crate::engine::{RoiAssumptions, DEFAULT_PAYBACK_TARGET_MONTHS};
use crate::errors::{ConfigViolation, SimulationError};

/// Root configuration structure for mvsim
///
/// Groups follow the layout customers already fill in: the process being
/// inspected, their tolerances, the proposed implementation and the current
/// model's measured performance. Missing groups or keys fall back to the
/// built-in defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SimulatorConfig {
    /// Customer's process overview
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Customer's tolerances and per-error costs
    #[serde(default)]
    pub expectations: ExpectationsConfig,

    /// Proposed deployment
    #[serde(default)]
    pub implementation: ImplementationConfig,

    /// Measured performance of the current model
    #[serde(default)]
    pub current_performance: CurrentPerformanceConfig,

    /// Calendar simplifications and payback target
    #[serde(default)]
    pub assumptions: AssumptionsConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationConfig {
    #[serde(rename = "type")]
    pub application_type: String,
    pub process_description: String,
    /// Percentage of produced parts that are defective
    pub current_defect_rate: f64,
    /// Parts per hour
    pub production_rate: f64,
    /// Detection rate of the existing manual inspection, in percent
    pub current_inspection_rate: f64,
    pub hours_per_day: f64,
    pub production_days_per_year: f64,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            application_type: "Surface defect inspection".to_string(),
            process_description: "Visual inspection of machined parts at end of line".to_string(),
            current_defect_rate: 2.0,
            production_rate: 100.0,
            current_inspection_rate: 0.0,
            hours_per_day: 18.0,
            production_days_per_year: 250.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpectationsConfig {
    pub max_fp_rate: f64,
    pub max_fn_rate: f64,
    pub cost_impact_fp: f64,
    pub cost_impact_fn: f64,
}

impl Default for ExpectationsConfig {
    fn default() -> Self {
        Self {
            max_fp_rate: 1.0,
            max_fn_rate: 5.0,
            cost_impact_fp: 2.0,
            cost_impact_fn: 50.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImplementationConfig {
    pub system_cost: f64,
    pub num_cameras: u32,
    /// Number of cameras covering the same inspection point
    pub overlap_factor: u32,
    /// Recurring cost per year
    pub recurring_cost: f64,
    /// Horizon in years
    pub time_horizon: u32,
    /// Horizon in months; takes precedence over `time_horizon`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_horizon_months: Option<u32>,
}

impl Default for ImplementationConfig {
    fn default() -> Self {
        Self {
            system_cost: 10_000.0,
            num_cameras: 4,
            overlap_factor: 1,
            recurring_cost: 1_200.0,
            time_horizon: 3,
            time_horizon_months: None,
        }
    }
}

impl ImplementationConfig {
    /// Horizon in months; a year count too large to express in months is a
    /// `time_horizon` violation.
    pub fn horizon_months(&self) -> Result<u32, ConfigViolation> {
        match self.time_horizon_months {
            Some(months) => Ok(months),
            None => self.time_horizon.checked_mul(12).ok_or_else(|| {
                ConfigViolation::new(
                    "time_horizon",
                    "is too large to express in months",
                    self.time_horizon.to_string(),
                )
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrentPerformanceConfig {
    pub current_precision: f64,
    pub current_recall: f64,
    /// Images the current model was evaluated on; informational only
    pub num_images: u32,
}

impl Default for CurrentPerformanceConfig {
    fn default() -> Self {
        Self {
            current_precision: 95.0,
            current_recall: 90.0,
            num_images: 1_000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssumptionsConfig {
    pub days_per_month: f64,
    pub months_per_year: f64,
    pub payback_target_months: u32,
}

impl Default for AssumptionsConfig {
    fn default() -> Self {
        let roi = RoiAssumptions::default();
        Self {
            days_per_month: roi.days_per_month,
            months_per_year: roi.months_per_year,
            payback_target_months: DEFAULT_PAYBACK_TARGET_MONTHS,
        }
    }
}

/// Descriptive fields carried into reports but never used numerically.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApplicationProfile {
    pub application_type: String,
    pub process_description: String,
    pub num_images: u32,
}

impl SimulatorConfig {
    /// Numeric snapshot consumed by the engine.
    pub fn to_inputs(&self) -> Result<SimulationInputs, SimulationError> {
        let months = self.implementation.horizon_months()?;
        Ok(self.inputs_with_horizon(months))
    }

    pub(crate) fn inputs_with_horizon(&self, time_horizon_months: u32) -> SimulationInputs {
        let app = &self.application;
        let exp = &self.expectations;
        let imp = &self.implementation;
        let perf = &self.current_performance;

        SimulationInputs {
            defect_rate_pct: app.current_defect_rate,
            production_rate_per_hour: app.production_rate,
            hours_per_day: app.hours_per_day,
            production_days_per_year: app.production_days_per_year,
            current_inspection_detection_rate_pct: app.current_inspection_rate,
            max_fp_rate_pct: exp.max_fp_rate,
            max_fn_rate_pct: exp.max_fn_rate,
            cost_per_false_positive: exp.cost_impact_fp,
            cost_per_false_negative: exp.cost_impact_fn,
            num_cameras: imp.num_cameras,
            overlap_factor: imp.overlap_factor,
            system_cost: imp.system_cost,
            recurring_cost_per_year: imp.recurring_cost,
            time_horizon_months,
            current_precision_pct: perf.current_precision,
            current_recall_pct: perf.current_recall,
        }
    }

    pub fn roi_assumptions(&self) -> RoiAssumptions {
        RoiAssumptions {
            days_per_month: self.assumptions.days_per_month,
            months_per_year: self.assumptions.months_per_year,
        }
    }

    pub fn payback_target_months(&self) -> u32 {
        self.assumptions.payback_target_months
    }

    pub fn profile(&self) -> ApplicationProfile {
        ApplicationProfile {
            application_type: self.application.application_type.clone(),
            process_description: self.application.process_description.clone(),
            num_images: self.current_performance.num_images,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horizon_years_convert_to_months() {
        let imp = ImplementationConfig {
            time_horizon: 2,
            ..ImplementationConfig::default()
        };
        assert_eq!(imp.horizon_months(), Ok(24));
    }

    #[test]
    fn test_explicit_months_take_precedence() {
        let imp = ImplementationConfig {
            time_horizon: 2,
            time_horizon_months: Some(7),
            ..ImplementationConfig::default()
        };
        assert_eq!(imp.horizon_months(), Ok(7));
    }

    #[test]
    fn test_overflowing_year_horizon_is_reported() {
        let mut config = SimulatorConfig::default();
        config.implementation.time_horizon = u32::MAX / 6;

        let err = config.to_inputs().unwrap_err();
        assert!(err.mentions_field("time_horizon"));
        assert_eq!(err.violations().len(), 1);

        config.implementation.time_horizon_months = Some(12);
        assert_eq!(config.to_inputs().unwrap().time_horizon_months, 12);
    }

    #[test]
    fn test_default_config_maps_to_valid_inputs() {
        let inputs = SimulatorConfig::default().to_inputs().unwrap();
        assert!(crate::core::check_inputs(&inputs).is_ok());
        assert_eq!(inputs.time_horizon_months, 36);
        assert_eq!(inputs.hours_per_day, 18.0);
        assert_eq!(inputs.current_inspection_detection_rate_pct, 0.0);
    }

    #[test]
    fn test_default_assumptions_match_engine_defaults() {
        let config = SimulatorConfig::default();
        assert_eq!(config.roi_assumptions(), RoiAssumptions::default());
        assert_eq!(config.payback_target_months(), 18);
    }
}
