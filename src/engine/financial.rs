use serde::Serialize;

use crate::core::SimulationInputs;

/// Daily cost exposure with and without the automated inspection system.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FinancialImpact {
    pub daily_production: f64,
    pub expected_defects: f64,

    // With the system
    pub false_positive_count: f64,
    pub false_negative_count: f64,
    pub cost_of_false_positives: f64,
    pub cost_of_false_negatives: f64,
    pub daily_cost_with_system: f64,

    // Manual baseline
    pub caught_defects: f64,
    pub uncaught_defects: f64,
    pub daily_cost_without_system: f64,
}

impl FinancialImpact {
    /// Daily delta between the manual baseline and the automated system.
    pub fn daily_savings(&self) -> f64 {
        self.daily_cost_without_system - self.daily_cost_with_system
    }

    /// Savings over a production year.
    pub fn annual_savings(&self, production_days_per_year: f64) -> f64 {
        self.daily_savings() * production_days_per_year
    }
}

/// Estimates per-day costs of inspection errors.
///
/// False-positive cost is subtracted from false-negative cost when computing
/// the with-system figure: a rejected good part is treated as recovered value
/// rather than an added loss. This mirrors the established cost model of the
/// tool and is kept as-is.
#[derive(Clone, Copy, Debug, Default)]
pub struct FinancialImpactEstimator;

impl FinancialImpactEstimator {
    pub fn new() -> Self {
        Self
    }

    #[allow(clippy::too_many_arguments)]
    pub fn compute(
        &self,
        defect_rate_pct: f64,
        production_rate_per_hour: f64,
        hours_per_day: f64,
        max_fp_rate_pct: f64,
        max_fn_rate_pct: f64,
        cost_fp: f64,
        cost_fn: f64,
        current_inspection_rate_pct: f64,
    ) -> FinancialImpact {
        let daily_production = production_rate_per_hour * hours_per_day;
        let expected_defects = defect_rate_pct / 100.0 * daily_production;

        let false_positive_count = max_fp_rate_pct / 100.0 * daily_production;
        let false_negative_count = max_fn_rate_pct / 100.0 * expected_defects;
        let cost_of_false_positives = false_positive_count * cost_fp;
        let cost_of_false_negatives = false_negative_count * cost_fn;
        let daily_cost_with_system = cost_of_false_negatives - cost_of_false_positives;

        let caught_defects = expected_defects * current_inspection_rate_pct / 100.0;
        let uncaught_defects = expected_defects - caught_defects;
        let daily_cost_without_system = uncaught_defects * cost_fn;

        FinancialImpact {
            daily_production,
            expected_defects,
            false_positive_count,
            false_negative_count,
            cost_of_false_positives,
            cost_of_false_negatives,
            daily_cost_with_system,
            caught_defects,
            uncaught_defects,
            daily_cost_without_system,
        }
    }

    /// Run [`compute`](Self::compute) with the relevant fields of an input set.
    pub fn estimate(&self, inputs: &SimulationInputs) -> FinancialImpact {
        self.compute(
            inputs.defect_rate_pct,
            inputs.production_rate_per_hour,
            inputs.hours_per_day,
            inputs.max_fp_rate_pct,
            inputs.max_fn_rate_pct,
            inputs.cost_per_false_positive,
            inputs.cost_per_false_negative,
            inputs.current_inspection_detection_rate_pct,
        )
    }
}
