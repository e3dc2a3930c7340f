// Test utility module for mvsim integration tests
#![allow(dead_code)]

use mvsim::SimulationInputs;

/// Line producing 1,800 parts a day at a 2% defect rate, two cameras fully
/// overlapping, three month horizon.
pub fn reference_inputs() -> SimulationInputs {
    SimulationInputs {
        defect_rate_pct: 2.0,
        production_rate_per_hour: 100.0,
        hours_per_day: 18.0,
        production_days_per_year: 250.0,
        current_inspection_detection_rate_pct: 70.0,
        max_fp_rate_pct: 1.0,
        max_fn_rate_pct: 5.0,
        cost_per_false_positive: 2.0,
        cost_per_false_negative: 50.0,
        num_cameras: 2,
        overlap_factor: 2,
        system_cost: 10_000.0,
        recurring_cost_per_year: 1_200.0,
        time_horizon_months: 3,
        current_precision_pct: 97.0,
        current_recall_pct: 80.0,
    }
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}

pub fn assert_all_close(actual: &[f64], expected: &[f64]) {
    assert_eq!(actual.len(), expected.len(), "length mismatch");
    for (a, e) in actual.iter().zip(expected) {
        assert_close(*a, *e);
    }
}
