//! Input model shared by the engine and the outer layers.

pub mod inputs;
pub mod validation;

pub use inputs::SimulationInputs;
pub use validation::{
    check_inputs, combine_validations, run_validation, validate_inputs, InputValidation,
};
