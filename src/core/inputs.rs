use serde::{Deserialize, Serialize};

/// Immutable snapshot of every numeric input a simulation run needs.
///
/// Percentages are expressed on a 0–100 scale. The snapshot is constructed
/// once per run (from a config file, CLI overrides, or directly) and never
/// mutated by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationInputs {
    // Process
    pub defect_rate_pct: f64,
    pub production_rate_per_hour: f64,
    pub hours_per_day: f64,
    pub production_days_per_year: f64,
    pub current_inspection_detection_rate_pct: f64,

    // Tolerances
    pub max_fp_rate_pct: f64,
    pub max_fn_rate_pct: f64,

    // Costs
    pub cost_per_false_positive: f64,
    pub cost_per_false_negative: f64,

    // Implementation
    pub num_cameras: u32,
    pub overlap_factor: u32,
    pub system_cost: f64,
    pub recurring_cost_per_year: f64,
    pub time_horizon_months: u32,

    // Current model performance
    pub current_precision_pct: f64,
    pub current_recall_pct: f64,
}

impl Default for SimulationInputs {
    fn default() -> Self {
        Self {
            defect_rate_pct: 2.0,
            production_rate_per_hour: 100.0,
            hours_per_day: 18.0,
            production_days_per_year: 250.0,
            current_inspection_detection_rate_pct: 70.0,
            max_fp_rate_pct: 1.0,
            max_fn_rate_pct: 5.0,
            cost_per_false_positive: 2.0,
            cost_per_false_negative: 50.0,
            num_cameras: 4,
            overlap_factor: 2,
            system_cost: 10_000.0,
            recurring_cost_per_year: 1_200.0,
            time_horizon_months: 36,
            current_precision_pct: 95.0,
            current_recall_pct: 90.0,
        }
    }
}

impl SimulationInputs {
    /// Units produced per day.
    pub fn daily_production(&self) -> f64 {
        self.production_rate_per_hour * self.hours_per_day
    }

    /// Whether more cameras overlap on one point than are installed.
    ///
    /// Not an error: the engine still computes a result, but the adjusted
    /// camera count drops below one.
    pub fn overlap_exceeds_cameras(&self) -> bool {
        self.overlap_factor > self.num_cameras
    }
}
