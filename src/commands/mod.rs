//! CLI command implementations for mvsim.
//!
//! Available commands:
//! - **simulate**: Run one simulation and write the report
//! - **validate**: Check a configuration file, listing every violation
//! - **init**: Write a documented default configuration file
//! - **formulas**: Print the formula reference

pub mod formulas;
pub mod init;
pub mod simulate;
pub mod validate;

pub use formulas::{formula_reference, print_formulas};
pub use init::{default_config_template, init_config};
pub use simulate::{build_report, simulate, SimulateConfig};
pub use validate::{check_configuration, validate_configuration, ValidationOutcome};
