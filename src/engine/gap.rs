use serde::Serialize;

use super::camera::CameraRequirement;

/// Shortfall of the current model against the derived camera requirement.
///
/// A positive gap means the current model does not meet the requirement.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct GapAnalysis {
    pub precision_gap: f64,
    pub recall_gap: f64,
}

impl GapAnalysis {
    pub fn precision_short(&self) -> bool {
        self.precision_gap > 0.0
    }

    pub fn recall_short(&self) -> bool {
        self.recall_gap > 0.0
    }

    /// Improvement areas that apply, precision first.
    pub fn improvement_areas(&self) -> Vec<ImprovementArea> {
        let mut areas = Vec::with_capacity(2);
        if self.precision_short() {
            areas.push(ImprovementArea::Precision);
        }
        if self.recall_short() {
            areas.push(ImprovementArea::Recall);
        }
        areas
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct GapAnalyzer;

impl GapAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze(
        &self,
        requirement: &CameraRequirement,
        current_precision_pct: f64,
        effective_recall_pct: f64,
    ) -> GapAnalysis {
        GapAnalysis {
            precision_gap: requirement.required_precision_pct - current_precision_pct,
            recall_gap: requirement.required_recall_pct - effective_recall_pct,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ImprovementArea {
    Precision,
    Recall,
}

const PRECISION_SUGGESTIONS: &[&str] = &[
    "Increase the quality of training data by removing mislabeled images.",
    "Use data augmentation techniques to enhance the dataset.",
    "Implement advanced algorithms and second stage result filtering techniques.",
    "Reduce the class imbalance by adding more samples of the minority class.",
];

const RECALL_SUGGESTIONS: &[&str] = &[
    "Increase the variety of training data to cover more scenarios.",
    "Improve the labeling accuracy of the training data.",
    "Consider adding overlapping cameras to improve effective recall.",
    "Research using ensemble methods to improve recall.",
    "Adjust the decision threshold to favor recall over precision, if appropriate.",
];

impl ImprovementArea {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Precision => "Suggestions to Improve Precision",
            Self::Recall => "Suggestions to Improve Recall",
        }
    }

    pub fn suggestions(&self) -> &'static [&'static str] {
        match self {
            Self::Precision => PRECISION_SUGGESTIONS,
            Self::Recall => RECALL_SUGGESTIONS,
        }
    }
}
