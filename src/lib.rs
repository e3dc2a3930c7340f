//! mvsim: machine vision inspection simulator.
//!
//! Given a production line's defect rate, throughput, error tolerances and
//! costs, plus a proposed multi-camera deployment, the engine derives the
//! precision and recall each camera must reach, the daily financial impact of
//! deploying, a month-by-month ROI timeline and the gap between the current
//! model and the requirement.
//!
//! ```rust
//! use mvsim::{run_simulation, SimulationInputs};
//!
//! let inputs = SimulationInputs {
//!     time_horizon_months: 12,
//!     ..SimulationInputs::default()
//! };
//! let result = run_simulation(&inputs).unwrap();
//! assert_eq!(result.roi_timeline.len(), 13);
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod engine;
pub mod errors;
pub mod formatting;
pub mod io;
pub mod report;

pub use crate::config::{resolve_config, validate_config, SimulatorConfig};
pub use crate::core::{validate_inputs, SimulationInputs};
pub use crate::engine::{
    run_simulation, Advisory, CameraRequirement, CostComparison, FinancialImpact, GapAnalysis,
    PaybackAssessment, RoiAssumptions, RoiTimeline, SimulationResult, Simulator,
};
pub use crate::errors::{ConfigError, ConfigViolation, SimulationError};
pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
pub use crate::report::SimulationReport;
