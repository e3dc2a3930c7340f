use serde::{Deserialize, Serialize};

/// Calendar simplifications used when expanding daily savings into months.
///
/// The defaults (30-day months, 12-month years) are the established model;
/// override them only when a customer's accounting requires it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoiAssumptions {
    pub days_per_month: f64,
    pub months_per_year: f64,
}

impl Default for RoiAssumptions {
    fn default() -> Self {
        Self {
            days_per_month: 30.0,
            months_per_year: 12.0,
        }
    }
}

/// Month-indexed cumulative cost, savings and ROI.
///
/// Index 0 is the moment of deployment. All three sequences have the same
/// length, `time_horizon_months + 1`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RoiTimeline {
    pub cumulative_cost: Vec<f64>,
    pub cumulative_savings: Vec<f64>,
    pub roi: Vec<f64>,
}

impl RoiTimeline {
    pub fn len(&self) -> usize {
        self.roi.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roi.is_empty()
    }

    /// Month indices covered by the timeline.
    pub fn months(&self) -> impl Iterator<Item = u32> {
        0..self.len() as u32
    }

    /// First month at which ROI becomes strictly positive.
    pub fn breakeven_month(&self) -> Option<u32> {
        self.roi.iter().position(|&r| r > 0.0).map(|m| m as u32)
    }

    /// ROI at the end of the horizon.
    pub fn final_roi(&self) -> Option<f64> {
        self.roi.last().copied()
    }

    /// Whether ROI turns positive at some month strictly before `target_months`.
    pub fn pays_back_before(&self, target_months: u32) -> bool {
        self.breakeven_month().is_some_and(|m| m < target_months)
    }
}

/// Projects a single daily-savings figure into a cumulative ROI timeline.
#[derive(Clone, Copy, Debug, Default)]
pub struct RoiProjector {
    assumptions: RoiAssumptions,
}

impl RoiProjector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_assumptions(assumptions: RoiAssumptions) -> Self {
        Self { assumptions }
    }

    pub fn assumptions(&self) -> RoiAssumptions {
        self.assumptions
    }

    pub fn compute(
        &self,
        system_cost: f64,
        recurring_cost_per_year: f64,
        daily_savings: f64,
        time_horizon_months: u32,
    ) -> RoiTimeline {
        let monthly_recurring_cost = recurring_cost_per_year / self.assumptions.months_per_year;
        let monthly_savings = daily_savings * self.assumptions.days_per_month;

        let cumulative_cost: Vec<f64> = (0..=time_horizon_months)
            .map(|m| system_cost + monthly_recurring_cost * f64::from(m))
            .collect();
        let cumulative_savings: Vec<f64> = (0..=time_horizon_months)
            .map(|m| monthly_savings * f64::from(m))
            .collect();
        let roi = cumulative_savings
            .iter()
            .zip(&cumulative_cost)
            .map(|(savings, cost)| savings - cost)
            .collect();

        RoiTimeline {
            cumulative_cost,
            cumulative_savings,
            roi,
        }
    }
}
