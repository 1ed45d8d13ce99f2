//! Results types for cycle evaluation.

use uom::si::{
    f64::ThermodynamicTemperature, specific_heat_capacity::joule_per_kilogram_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::support::units::{SpecificEnthalpy, SpecificEntropy};

/// Performance and state trace of one evaluated cycle.
///
/// State arrays follow the cycle from the compressor inlet (index 0, state 2)
/// through each leg, and the last entry repeats the compressor inlet so the
/// trace draws a closed loop on a T-s diagram.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CycleResult<const N: usize> {
    /// Net work non-dimensionalized by `cp_c·T_ref`.
    pub specific_work: f64,

    /// Net work divided by heat input.
    ///
    /// Not clamped, so degenerate inputs may yield values outside `[0, 1]`.
    pub efficiency: f64,

    /// Stagnation temperature at each state.
    pub temperature: [ThermodynamicTemperature; N],

    /// Entropy at each state, relative to the compressor inlet.
    pub entropy: [SpecificEntropy; N],

    /// Dimensional work and heat terms behind the headline numbers.
    pub work: WorkBreakdown,
}

/// Per-unit-mass energy terms of a cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkBreakdown {
    /// Work extracted by the turbine.
    pub turbine: SpecificEnthalpy,

    /// Work absorbed by compression, summed over all stages.
    pub compressor: SpecificEnthalpy,

    /// Turbine work minus compressor work.
    pub net: SpecificEnthalpy,

    /// Heat added in the combustor.
    pub heat_input: SpecificEnthalpy,
}

impl<const N: usize> CycleResult<N> {
    /// Temperature trace in kelvin.
    #[must_use]
    pub fn temperature_trace(&self) -> [f64; N] {
        self.temperature.map(|t| t.get::<kelvin>())
    }

    /// Entropy trace in J/(kg·K).
    #[must_use]
    pub fn entropy_trace(&self) -> [f64; N] {
        self.entropy.map(|s| s.get::<joule_per_kilogram_kelvin>())
    }

    /// `(entropy, temperature)` pairs in J/(kg·K) and K, ready for a T-s plot.
    #[must_use]
    pub fn ts_points(&self) -> [(f64, f64); N] {
        let s = self.entropy_trace();
        let t = self.temperature_trace();
        std::array::from_fn(|i| (s[i], t[i]))
    }

    /// Returns `true` if the scalar outputs and every trace entry are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.specific_work.is_finite()
            && self.efficiency.is_finite()
            && self.temperature_trace().iter().all(|t| t.is_finite())
            && self.entropy_trace().iter().all(|s| s.is_finite())
    }
}
