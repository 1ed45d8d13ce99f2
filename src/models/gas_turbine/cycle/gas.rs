//! Calorically perfect gas relations for a single cycle leg.
//!
//! Every relation here is closed-form and unchecked. Non-physical inputs
//! (e.g., `γ ≤ 1` or a non-positive pressure ratio) produce non-finite values
//! rather than errors.

use uom::si::{
    f64::{SpecificHeatCapacity, ThermodynamicTemperature},
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::support::units::{SpecificEntropy, SpecificGasConstant};

/// Specific gas constant used by both cycles, `287 J/(kg·K)`.
#[must_use]
pub fn gas_constant() -> SpecificGasConstant {
    SpecificGasConstant::new::<joule_per_kilogram_kelvin>(287.0)
}

/// Compressor inlet temperature and entropy reference, `293.15 K`.
#[must_use]
pub fn reference_temperature() -> ThermodynamicTemperature {
    ThermodynamicTemperature::new::<kelvin>(293.15)
}

/// Computes `cp = R·γ/(γ−1)`.
#[must_use]
pub(crate) fn cp_from_gamma(gamma: f64) -> SpecificHeatCapacity {
    gas_constant() * (gamma / (gamma - 1.0))
}

/// Arithmetic mean of two heat capacities.
#[must_use]
pub(crate) fn mean_cp(a: SpecificHeatCapacity, b: SpecificHeatCapacity) -> SpecificHeatCapacity {
    (a + b) / 2.0
}

/// Outlet-to-inlet temperature ratio across a compressor.
///
/// Computes `PR^((γ−1)/(γ·η))`, where `η` is the polytropic efficiency.
#[must_use]
pub(crate) fn compression_temperature_ratio(
    pressure_ratio: f64,
    gamma: f64,
    efficiency: f64,
) -> f64 {
    pressure_ratio.powf((gamma - 1.0) / (gamma * efficiency))
}

/// Outlet-to-inlet temperature ratio across a turbine.
///
/// Computes `(1/PR)^(((γ−1)/γ)·η)`, where `PR` is the inlet-to-outlet
/// pressure ratio and `η` is the polytropic efficiency.
#[must_use]
pub(crate) fn expansion_temperature_ratio(
    pressure_ratio: f64,
    gamma: f64,
    efficiency: f64,
) -> f64 {
    (1.0 / pressure_ratio).powf(((gamma - 1.0) / gamma) * efficiency)
}

/// Entropy change across a leg with `Δs = cp·ln(T_out⁄T_in) − R·ln(p_out⁄p_in)`.
///
/// `pressure_ratio` is `p_out⁄p_in`, so compression (`> 1`) lowers entropy
/// and expansion (`< 1`) raises it. Pass `1.0` for an isobaric leg.
#[must_use]
pub(crate) fn entropy_change(
    cp: SpecificHeatCapacity,
    t_in: ThermodynamicTemperature,
    t_out: ThermodynamicTemperature,
    pressure_ratio: f64,
) -> SpecificEntropy {
    cp * (t_out / t_in).ln() - gas_constant() * pressure_ratio.ln()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn cp_for_diatomic_gas() {
        let cp = cp_from_gamma(1.4).get::<joule_per_kilogram_kelvin>();
        assert_relative_eq!(cp, 1004.5, epsilon = 1e-9);
    }

    #[test]
    fn mean_of_equal_heat_capacities_is_unchanged() {
        let cp = cp_from_gamma(1.33);
        assert_relative_eq!(
            mean_cp(cp, cp).get::<joule_per_kilogram_kelvin>(),
            cp.get::<joule_per_kilogram_kelvin>(),
        );
    }

    #[test]
    fn lossless_compression_and_expansion_are_reciprocal() {
        let up = compression_temperature_ratio(16.0, 1.4, 1.0);
        let down = expansion_temperature_ratio(16.0, 1.4, 1.0);
        assert_relative_eq!(up * down, 1.0, epsilon = 1e-12);
        assert_relative_eq!(up, 16.0_f64.powf(0.4 / 1.4), epsilon = 1e-12);
    }

    #[test]
    fn polytropic_losses_heat_the_flow() {
        let ideal_up = compression_temperature_ratio(16.0, 1.4, 1.0);
        let lossy_up = compression_temperature_ratio(16.0, 1.4, 0.85);
        assert!(lossy_up > ideal_up);

        let ideal_down = expansion_temperature_ratio(16.0, 1.4, 1.0);
        let lossy_down = expansion_temperature_ratio(16.0, 1.4, 0.85);
        assert!(lossy_down > ideal_down);
    }

    #[test]
    fn isentropic_compression_has_no_entropy_change() {
        let cp = cp_from_gamma(1.4);
        let t_in = reference_temperature();
        let t_out = t_in * compression_temperature_ratio(8.0, 1.4, 1.0);

        let ds = entropy_change(cp, t_in, t_out, 8.0).get::<joule_per_kilogram_kelvin>();
        assert_relative_eq!(ds, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn isobaric_heating_raises_entropy() {
        let cp = cp_from_gamma(1.4);
        let t_in = reference_temperature();
        let t_out = ThermodynamicTemperature::new::<kelvin>(600.0);

        let ds = entropy_change(cp, t_in, t_out, 1.0).get::<joule_per_kilogram_kelvin>();
        assert_relative_eq!(ds, 1004.5 * (600.0_f64 / 293.15).ln(), epsilon = 1e-9);
    }

    #[test]
    fn non_physical_gamma_is_not_finite() {
        assert!(!cp_from_gamma(1.0).get::<joule_per_kilogram_kelvin>().is_finite());
    }
}
