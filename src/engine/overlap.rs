/// Effective recall of `overlap_factor` independent views of the same point.
///
/// A defect escapes only when every view misses it, so the combined miss rate
/// is the single-view miss rate raised to the overlap factor.
#[derive(Clone, Copy, Debug, Default)]
pub struct OverlapRecallProjector;

impl OverlapRecallProjector {
    pub fn new() -> Self {
        Self
    }

    pub fn compute(&self, current_recall_pct: f64, overlap_factor: u32) -> f64 {
        if overlap_factor == 1 {
            return current_recall_pct;
        }

        let fn_rate = 1.0 - current_recall_pct / 100.0;
        let effective_fn_rate = fn_rate.powf(f64::from(overlap_factor));
        (1.0 - effective_fn_rate) * 100.0
    }
}
