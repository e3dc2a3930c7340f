use serde::Serialize;
use std::fmt;

use super::{CameraRequirement, FinancialImpact, GapAnalysis, RoiTimeline};

/// Everything one simulation run produces.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SimulationResult {
    pub camera_requirement: CameraRequirement,
    pub effective_recall_pct: f64,
    pub financial_impact: FinancialImpact,
    pub daily_savings: f64,
    pub annual_savings: f64,
    pub roi_timeline: RoiTimeline,
    pub breakeven_month: Option<u32>,
    pub payback: PaybackAssessment,
    pub cost_comparison: CostComparison,
    pub gap_analysis: GapAnalysis,
    pub advisories: Vec<Advisory>,
}

impl SimulationResult {
    pub fn has_advisories(&self) -> bool {
        !self.advisories.is_empty()
    }
}

/// Whether ROI turns positive before the customer's payback target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PaybackAssessment {
    pub target_months: u32,
    pub breakeven_month: Option<u32>,
    pub meets_target: bool,
}

impl PaybackAssessment {
    pub fn summary(&self) -> String {
        if self.meets_target {
            format!(
                "ROI turns positive within {} months; the customer's payback expectation is met.",
                self.target_months
            )
        } else {
            format!(
                "ROI does not turn positive within {} months; the customer may not be fully satisfied.",
                self.target_months
            )
        }
    }
}

/// Month-indexed cumulative cost curves for the manual baseline and the
/// deployed system.
///
/// `with_system[m]` is the cumulative deployment cost at month `m` plus one
/// month of residual error cost.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CostComparison {
    pub without_system: Vec<f64>,
    pub with_system: Vec<f64>,
}

/// Results that are valid but operationally questionable.
///
/// Advisories never abort a run; callers decide how to present them.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Advisory {
    /// A zero false-negative tolerance forces 100% per-camera recall.
    PerfectRecallRequired,
    /// A zero false-positive tolerance forces 100% per-camera precision.
    PerfectPrecisionRequired,
    /// More cameras overlap on one point than are installed.
    OverlapExceedsCameras {
        num_cameras: u32,
        overlap_factor: u32,
    },
    /// The system costs more per day than the manual baseline.
    NegativeDailySavings { daily_savings: f64 },
    /// ROI never turns positive within the horizon.
    NoBreakevenWithinHorizon { time_horizon_months: u32 },
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PerfectRecallRequired => {
                write!(f, "a 0% false-negative tolerance requires 100% recall per camera")
            }
            Self::PerfectPrecisionRequired => write!(
                f,
                "a 0% false-positive tolerance requires 100% precision per camera"
            ),
            Self::OverlapExceedsCameras {
                num_cameras,
                overlap_factor,
            } => write!(
                f,
                "overlap factor {overlap_factor} exceeds the {num_cameras} installed cameras"
            ),
            Self::NegativeDailySavings { daily_savings } => write!(
                f,
                "the system costs {:.2} more per day than the manual baseline",
                -daily_savings
            ),
            Self::NoBreakevenWithinHorizon {
                time_horizon_months,
            } => write!(
                f,
                "ROI does not turn positive within the {time_horizon_months}-month horizon"
            ),
        }
    }
}
