//! Simple ideal-gas Brayton cycle.
//!
//! One compressor, a combustor with an optional pressure loss, and one
//! turbine. The computational core is in the internal `core` module;
//! [`BraytonCycle`] adapts it to [`twine_core::Model`].

mod core;

pub use self::core::{BRAYTON_STATES, BraytonResult, evaluate};

use log::{debug, warn};
use twine_core::Model;

use super::cycle::{CycleParameters, InvalidCycleParameters, Validation};

/// [`Model`] adapter for the simple Brayton cycle.
///
/// ```
/// use twine_core::Model;
/// use twine_gas_turbine::models::gas_turbine::{CycleParameters, brayton::BraytonCycle};
///
/// let result = BraytonCycle::new().call(&CycleParameters::default()).unwrap();
/// assert_eq!(result.temperature_trace().len(), 5);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BraytonCycle {
    /// Whether inputs are checked before evaluation.
    pub validation: Validation,
}

impl BraytonCycle {
    /// Creates a permissive model that evaluates any input.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a model that rejects non-physical parameters.
    #[must_use]
    pub fn strict() -> Self {
        Self::new().with_validation(Validation::Strict)
    }

    /// Sets how inputs are checked before evaluation.
    #[must_use]
    pub fn with_validation(mut self, validation: Validation) -> Self {
        self.validation = validation;
        self
    }
}

impl Model for BraytonCycle {
    type Input = CycleParameters;
    type Output = BraytonResult;
    type Error = InvalidCycleParameters;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        if self.validation == Validation::Strict {
            input.validate().inspect_err(|err| debug!("brayton: {err}"))?;
        }

        let result = evaluate(input);
        if !result.is_finite() {
            warn!("brayton: non-finite result for {input:?}");
        }
        Ok(result)
    }
}
