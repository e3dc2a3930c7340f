//! Quantitative calculation engine.
//!
//! Four stateless components composed into a linear pipeline:
//!
//! - [`CameraRequirementCalculator`]: per-camera precision/recall from
//!   system-level tolerances and camera overlap
//! - [`OverlapRecallProjector`]: effective recall of overlapping views
//! - [`FinancialImpactEstimator`]: daily cost with and without the system
//! - [`RoiProjector`]: cumulative cost/savings/ROI per month
//!
//! [`GapAnalyzer`] compares the derived requirement against the current model.
//!
//! Inputs and the simulator's calendar assumptions are validated up front; an
//! invalid set produces [`SimulationError::InvalidConfiguration`] listing
//! every violation, and no partial result.
//!
//! # Example
//!
//! ```rust
//! use mvsim::core::SimulationInputs;
//! use mvsim::engine::run_simulation;
//!
//! let result = run_simulation(&SimulationInputs::default()).unwrap();
//! assert_eq!(result.roi_timeline.len(), 37);
//! assert_eq!(result.roi_timeline.cumulative_cost[0], 10_000.0);
//! ```

pub mod camera;
pub mod financial;
pub mod gap;
pub mod models;
pub mod overlap;
pub mod roi;


pub use camera::{adjusted_cameras, CameraRequirement, CameraRequirementCalculator};
pub use financial::{FinancialImpact, FinancialImpactEstimator};
pub use gap::{GapAnalysis, GapAnalyzer, ImprovementArea};
pub use models::{Advisory, CostComparison, PaybackAssessment, SimulationResult};
pub use overlap::OverlapRecallProjector;
pub use roi::{RoiAssumptions, RoiProjector, RoiTimeline};

use crate::core::validation::{at_least_one, from_checks, positive};
use crate::core::{
    combine_validations, run_validation, validate_inputs, InputValidation, SimulationInputs,
};
use crate::errors::SimulationError;

/// Default payback expectation, in months.
pub const DEFAULT_PAYBACK_TARGET_MONTHS: u32 = 18;

/// Runs the full pipeline over one input snapshot.
#[derive(Clone, Debug)]
pub struct Simulator {
    camera_calculator: CameraRequirementCalculator,
    overlap_projector: OverlapRecallProjector,
    financial_estimator: FinancialImpactEstimator,
    roi_projector: RoiProjector,
    gap_analyzer: GapAnalyzer,
    payback_target_months: u32,
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new()
    }
}

impl Simulator {
    pub fn new() -> Self {
        Self {
            camera_calculator: CameraRequirementCalculator::new(),
            overlap_projector: OverlapRecallProjector::new(),
            financial_estimator: FinancialImpactEstimator::new(),
            roi_projector: RoiProjector::new(),
            gap_analyzer: GapAnalyzer::new(),
            payback_target_months: DEFAULT_PAYBACK_TARGET_MONTHS,
        }
    }

    pub fn with_assumptions(mut self, assumptions: RoiAssumptions) -> Self {
        self.roi_projector = RoiProjector::with_assumptions(assumptions);
        self
    }

    pub fn with_payback_target(mut self, months: u32) -> Self {
        self.payback_target_months = months;
        self
    }

    pub fn assumptions(&self) -> RoiAssumptions {
        self.roi_projector.assumptions()
    }

    pub fn run(&self, inputs: &SimulationInputs) -> Result<SimulationResult, SimulationError> {
        run_validation(combine_validations(vec![
            validate_inputs(inputs),
            validate_run_settings(&self.assumptions(), self.payback_target_months),
        ]))?;

        let camera_requirement = self.camera_calculator.compute(
            inputs.max_fp_rate_pct,
            inputs.max_fn_rate_pct,
            inputs.num_cameras,
            inputs.overlap_factor,
        )?;
        let effective_recall_pct = self
            .overlap_projector
            .compute(inputs.current_recall_pct, inputs.overlap_factor);

        let financial_impact = self.financial_estimator.estimate(inputs);
        let daily_savings = financial_impact.daily_savings();
        let annual_savings = financial_impact.annual_savings(inputs.production_days_per_year);

        let roi_timeline = self.roi_projector.compute(
            inputs.system_cost,
            inputs.recurring_cost_per_year,
            daily_savings,
            inputs.time_horizon_months,
        );
        let breakeven_month = roi_timeline.breakeven_month();
        let payback = PaybackAssessment {
            target_months: self.payback_target_months,
            breakeven_month,
            meets_target: roi_timeline.pays_back_before(self.payback_target_months),
        };
        let cost_comparison = self.cost_comparison(&financial_impact, &roi_timeline);

        let gap_analysis = self.gap_analyzer.analyze(
            &camera_requirement,
            inputs.current_precision_pct,
            effective_recall_pct,
        );

        log::debug!(
            "simulation: required_precision={:.4} required_recall={:.4} effective_recall={:.4} daily_savings={:.2} breakeven={:?}",
            camera_requirement.required_precision_pct,
            camera_requirement.required_recall_pct,
            effective_recall_pct,
            daily_savings,
            breakeven_month,
        );

        let advisories = collect_advisories(inputs, daily_savings, breakeven_month);
        for advisory in &advisories {
            log::warn!("{advisory}");
        }

        Ok(SimulationResult {
            camera_requirement,
            effective_recall_pct,
            financial_impact,
            daily_savings,
            annual_savings,
            roi_timeline,
            breakeven_month,
            payback,
            cost_comparison,
            gap_analysis,
            advisories,
        })
    }

    fn cost_comparison(&self, impact: &FinancialImpact, timeline: &RoiTimeline) -> CostComparison {
        let days_per_month = self.assumptions().days_per_month;
        let residual_month = impact.daily_cost_with_system * days_per_month;

        CostComparison {
            without_system: timeline
                .months()
                .map(|m| impact.daily_cost_without_system * days_per_month * f64::from(m))
                .collect(),
            with_system: timeline
                .cumulative_cost
                .iter()
                .map(|cost| cost + residual_month)
                .collect(),
        }
    }
}

/// Check the calendar assumptions and payback target a run is configured with.
///
/// Both calendar figures act as divisors or multipliers of the timeline and
/// must be positive.
pub fn validate_run_settings(
    assumptions: &RoiAssumptions,
    payback_target_months: u32,
) -> InputValidation<()> {
    from_checks([
        positive("days_per_month", assumptions.days_per_month),
        positive("months_per_year", assumptions.months_per_year),
        at_least_one("payback_target_months", payback_target_months),
    ])
}

/// Run one simulation with the default assumptions.
pub fn run_simulation(inputs: &SimulationInputs) -> Result<SimulationResult, SimulationError> {
    Simulator::new().run(inputs)
}

fn collect_advisories(
    inputs: &SimulationInputs,
    daily_savings: f64,
    breakeven_month: Option<u32>,
) -> Vec<Advisory> {
    let mut advisories = Vec::new();

    if inputs.max_fn_rate_pct == 0.0 {
        advisories.push(Advisory::PerfectRecallRequired);
    }
    if inputs.max_fp_rate_pct == 0.0 {
        advisories.push(Advisory::PerfectPrecisionRequired);
    }
    if inputs.overlap_exceeds_cameras() {
        advisories.push(Advisory::OverlapExceedsCameras {
            num_cameras: inputs.num_cameras,
            overlap_factor: inputs.overlap_factor,
        });
    }
    if daily_savings < 0.0 {
        advisories.push(Advisory::NegativeDailySavings { daily_savings });
    }
    if breakeven_month.is_none() {
        advisories.push(Advisory::NoBreakevenWithinHorizon {
            time_horizon_months: inputs.time_horizon_months,
        });
    }

    advisories
}
