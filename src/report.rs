//! Report assembled from one simulation run, ready for any output writer.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::ApplicationProfile;
use crate::core::SimulationInputs;
use crate::engine::{RoiAssumptions, SimulationResult};

#[derive(Debug, Clone, Serialize)]
pub struct ReportMetadata {
    pub tool_version: String,
    pub generated_at: DateTime<Utc>,
    /// Configuration file the inputs came from, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_path: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SimulationReport {
    pub metadata: ReportMetadata,
    pub application: ApplicationProfile,
    pub inputs: SimulationInputs,
    pub assumptions: RoiAssumptions,
    pub result: SimulationResult,
}

impl SimulationReport {
    pub fn new(
        application: ApplicationProfile,
        inputs: SimulationInputs,
        assumptions: RoiAssumptions,
        result: SimulationResult,
    ) -> Self {
        Self {
            metadata: ReportMetadata {
                tool_version: env!("CARGO_PKG_VERSION").to_string(),
                generated_at: Utc::now(),
                config_path: None,
            },
            application,
            inputs,
            assumptions,
            result,
        }
    }

    pub fn with_config_path(mut self, path: impl Into<String>) -> Self {
        self.metadata.config_path = Some(path.into());
        self
    }
}
