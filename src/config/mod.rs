//! Configuration file support.
//!
//! Default simulation values are sourced from a YAML or TOML file grouped as
//! `application`, `expectations`, `implementation` and `current_performance`,
//! with an optional `assumptions` group. The engine never reads files; this
//! module turns a file into a [`SimulationInputs`](crate::core::SimulationInputs)
//! snapshot.

pub mod core;
pub mod loader;
pub mod validation;

pub use self::core::{
    ApplicationConfig, ApplicationProfile, AssumptionsConfig, CurrentPerformanceConfig,
    ExpectationsConfig, ImplementationConfig, SimulatorConfig,
};
pub use loader::{
    directory_ancestors, discover_config_from, load_config_from_path, parse_config,
    resolve_config, ConfigFormat, ConfigSource, CONFIG_FILE_NAMES,
};
pub use validation::{validate_assumptions, validate_config, validate_config_result};
