use serde::Serialize;

use crate::core::validation::at_least_one;
use crate::errors::SimulationError;

/// Per-camera accuracy a deployment needs to meet the system-level tolerances.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CameraRequirement {
    pub required_precision_pct: f64,
    pub required_recall_pct: f64,
}

/// Derives per-camera precision/recall from system tolerances and overlap.
///
/// False positives are treated as independent per view and unaffected by
/// overlap, so the system FP tolerance maps 1:1 onto each camera. False
/// negatives compound: a defect escapes only if every independent inspection
/// point misses it, so the per-camera miss rate is the `adjusted_cameras`-th
/// root of the system miss rate.
#[derive(Clone, Copy, Debug, Default)]
pub struct CameraRequirementCalculator;

impl CameraRequirementCalculator {
    pub fn new() -> Self {
        Self
    }

    pub fn compute(
        &self,
        max_fp_rate_pct: f64,
        max_fn_rate_pct: f64,
        num_cameras: u32,
        overlap_factor: u32,
    ) -> Result<CameraRequirement, SimulationError> {
        let adjusted_cameras = adjusted_cameras(num_cameras, overlap_factor)?;

        let camera_fp_rate = max_fp_rate_pct / 100.0;
        let camera_fn_rate = 1.0 - (1.0 - max_fn_rate_pct / 100.0).powf(1.0 / adjusted_cameras);

        log::debug!(
            "camera requirement: adjusted_cameras={adjusted_cameras:.4} fp_rate={camera_fp_rate:.6} fn_rate={camera_fn_rate:.6}"
        );

        Ok(CameraRequirement {
            required_precision_pct: 100.0 - camera_fp_rate * 100.0,
            required_recall_pct: 100.0 - camera_fn_rate * 100.0,
        })
    }
}

/// Number of statistically independent inspection points once redundant
/// coverage is divided out.
pub fn adjusted_cameras(num_cameras: u32, overlap_factor: u32) -> Result<f64, SimulationError> {
    let violations: Vec<_> = [
        at_least_one("num_cameras", num_cameras),
        at_least_one("overlap_factor", overlap_factor),
    ]
    .into_iter()
    .flatten()
    .collect();

    if !violations.is_empty() {
        return Err(SimulationError::invalid(violations));
    }

    Ok(f64::from(num_cameras) / f64::from(overlap_factor))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_single_independent_point_maps_directly() {
        let req = CameraRequirementCalculator::new()
            .compute(1.0, 5.0, 2, 2)
            .unwrap();
        assert!((req.required_precision_pct - 99.0).abs() < EPSILON);
        assert!((req.required_recall_pct - 95.0).abs() < EPSILON);
    }

    #[test]
    fn test_more_independent_points_relax_recall() {
        // 4 cameras, no overlap: (1 - 0.05)^(1/4) = 0.987258...
        let req = CameraRequirementCalculator::new()
            .compute(1.0, 5.0, 4, 1)
            .unwrap();
        let expected = 100.0 - (1.0 - 0.95_f64.powf(0.25)) * 100.0;
        assert!((req.required_recall_pct - expected).abs() < EPSILON);
        assert!(req.required_recall_pct > 95.0);
    }

    #[test]
    fn test_precision_ignores_overlap() {
        let calc = CameraRequirementCalculator::new();
        let a = calc.compute(3.0, 5.0, 6, 1).unwrap();
        let b = calc.compute(3.0, 5.0, 6, 3).unwrap();
        assert_eq!(a.required_precision_pct, b.required_precision_pct);
    }

    #[test]
    fn test_full_fn_tolerance_is_degenerate_but_valid() {
        let req = CameraRequirementCalculator::new()
            .compute(0.0, 100.0, 3, 1)
            .unwrap();
        assert_eq!(req.required_recall_pct, 0.0);
        assert_eq!(req.required_precision_pct, 100.0);
    }

    #[test]
    fn test_zero_fn_tolerance_requires_perfect_recall() {
        let req = CameraRequirementCalculator::new()
            .compute(1.0, 0.0, 3, 1)
            .unwrap();
        assert_eq!(req.required_recall_pct, 100.0);
    }

    #[test]
    fn test_zero_overlap_is_invalid_configuration() {
        for max_fn in [0.0, 5.0, 50.0, 100.0] {
            let err = CameraRequirementCalculator::new()
                .compute(1.0, max_fn, 5, 0)
                .unwrap_err();
            assert!(err.is_invalid_configuration());
            assert!(err.mentions_field("overlap_factor"));
        }
    }

    #[test]
    fn test_zero_cameras_is_invalid_configuration() {
        let err = adjusted_cameras(0, 1).unwrap_err();
        assert!(err.mentions_field("num_cameras"));
        assert!(!err.mentions_field("overlap_factor"));
    }

    #[test]
    fn test_adjusted_cameras_below_one_when_overlap_exceeds_cameras() {
        assert_eq!(adjusted_cameras(2, 4).unwrap(), 0.5);
    }
}
