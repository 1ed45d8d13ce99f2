//! Intercooled ideal-gas Brayton cycle.
//!
//! Two compressor stages with equal pressure ratios and an isobaric
//! intercooler between them, followed by the same combustor and turbine as
//! the [simple cycle](super::brayton). Intercooler performance is set by
//! [`IntercoolerEffectiveness`], which defaults to an ideal intercooler.
//!
//! The computational core is in the internal `core` module;
//! [`IntercooledCycle`] adapts it to [`twine_core::Model`].
//!
//! Recuperation is not modeled.

mod core;

pub use self::core::{INTERCOOLED_STATES, IntercooledResult, evaluate};

use std::ops::Deref;

use log::{debug, warn};
use twine_core::Model;

use crate::support::constraint::{Constrained, ConstraintResult, UnitInterval};

use super::cycle::{CycleParameters, InvalidCycleParameters, Validation};

/// How close the intercooler brings the flow to the compressor inlet temperature.
///
/// The intercooler outlet is `T_in − ε·(T_in − T_ref)`, so `1` cools fully
/// back to `T_ref` and `0` leaves the flow untouched.
/// The effectiveness must be in the interval [0, 1] and defaults to `1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntercoolerEffectiveness(Constrained<f64, UnitInterval>);

impl IntercoolerEffectiveness {
    /// Create an [`IntercoolerEffectiveness`] from a scalar value.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value lies outside the interval [0, 1].
    pub fn new(value: f64) -> ConstraintResult<Self> {
        Ok(Self(UnitInterval::new(value)?))
    }

    /// An ideal intercooler that returns the flow to the inlet temperature.
    #[must_use]
    pub fn ideal() -> Self {
        Self(UnitInterval::one())
    }

    /// An intercooler that removes no heat.
    #[must_use]
    pub fn none() -> Self {
        Self(UnitInterval::zero())
    }

}

impl Default for IntercoolerEffectiveness {
    fn default() -> Self {
        Self::ideal()
    }
}

impl Deref for IntercoolerEffectiveness {
    type Target = f64;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

/// [`Model`] adapter for the intercooled cycle.
///
/// ```
/// use twine_core::Model;
/// use twine_gas_turbine::models::gas_turbine::{
///     CycleParameters,
///     intercooled::{IntercooledCycle, IntercoolerEffectiveness},
/// };
///
/// let model = IntercooledCycle::new()
///     .with_intercooler_effectiveness(IntercoolerEffectiveness::new(0.5).unwrap());
/// let result = model.call(&CycleParameters::default()).unwrap();
/// assert_eq!(result.temperature_trace().len(), 7);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct IntercooledCycle {
    /// Intercooler effectiveness between the two compressor stages.
    pub intercooler_effectiveness: IntercoolerEffectiveness,

    /// Whether inputs are checked before evaluation.
    pub validation: Validation,
}

impl IntercooledCycle {
    /// Creates a permissive model with an ideal intercooler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a model with an ideal intercooler that rejects non-physical parameters.
    #[must_use]
    pub fn strict() -> Self {
        Self::new().with_validation(Validation::Strict)
    }

    /// Sets the intercooler effectiveness.
    ///
    /// Sweeping the effectiveness means building one model per value:
    ///
    /// ```
    /// use twine_core::Model;
    /// use twine_gas_turbine::models::gas_turbine::{
    ///     CycleParameters,
    ///     intercooled::{IntercooledCycle, IntercoolerEffectiveness},
    ///     sweep::linspace,
    /// };
    ///
    /// let params = CycleParameters::default();
    /// let work: Vec<f64> = linspace(0.0, 1.0, 5)
    ///     .into_iter()
    ///     .map(|value| {
    ///         let effectiveness = IntercoolerEffectiveness::new(value).unwrap();
    ///         let model = IntercooledCycle::new().with_intercooler_effectiveness(effectiveness);
    ///         model.call(&params).unwrap().specific_work
    ///     })
    ///     .collect();
    ///
    /// assert!(work.windows(2).all(|w| w[1] > w[0]));
    /// ```
    #[must_use]
    pub fn with_intercooler_effectiveness(
        mut self,
        effectiveness: IntercoolerEffectiveness,
    ) -> Self {
        self.intercooler_effectiveness = effectiveness;
        self
    }

    /// Sets how inputs are checked before evaluation.
    #[must_use]
    pub fn with_validation(mut self, validation: Validation) -> Self {
        self.validation = validation;
        self
    }
}

impl Model for IntercooledCycle {
    type Input = CycleParameters;
    type Output = IntercooledResult;
    type Error = InvalidCycleParameters;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        if self.validation == Validation::Strict {
            input
                .validate()
                .inspect_err(|err| debug!("intercooled: {err}"))?;
        }

        let result = evaluate(input, self.intercooler_effectiveness);
        if !result.is_finite() {
            warn!("intercooled: non-finite result for {input:?}");
        }
        Ok(result)
    }
}
