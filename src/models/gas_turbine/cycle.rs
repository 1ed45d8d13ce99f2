//! Types and ideal-gas relations shared by the cycle models.

mod error;
mod gas;
mod parameters;
mod results;

pub use error::{InvalidCycleParameters, ParseParameterError};
pub use gas::{gas_constant, reference_temperature};
pub use parameters::{CycleParameters, Parameter, Validation};
pub use results::{CycleResult, WorkBreakdown};

pub(super) use gas::{
    compression_temperature_ratio, cp_from_gamma, entropy_change, expansion_temperature_ratio,
    mean_cp,
};
