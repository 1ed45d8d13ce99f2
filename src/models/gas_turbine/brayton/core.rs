//! Closed-form evaluation of the simple ideal-gas Brayton cycle.
//!
//! States: 2 compressor inlet, 3 compressor outlet, 4 turbine inlet,
//! 5 turbine outlet.

use uom::{
    ConstZero,
    si::{f64::ThermodynamicTemperature, ratio::ratio},
};

use crate::models::gas_turbine::cycle::{
    CycleParameters, CycleResult, WorkBreakdown, compression_temperature_ratio, cp_from_gamma,
    entropy_change, expansion_temperature_ratio, mean_cp, reference_temperature,
};
use crate::support::units::{SpecificEntropy, TemperatureDifference};

/// Number of trace points for the Brayton cycle (four states plus closure).
pub const BRAYTON_STATES: usize = 5;

/// Result of a Brayton cycle evaluation.
pub type BraytonResult = CycleResult<BRAYTON_STATES>;

/// Evaluates the Brayton cycle for `params`.
///
/// Performs no validation: non-physical inputs propagate to non-finite outputs.
#[must_use]
pub fn evaluate(params: &CycleParameters) -> BraytonResult {
    let CycleParameters {
        pressure_ratio,
        temperature_ratio,
        gamma_compressor,
        gamma_turbine,
        compressor_efficiency,
        turbine_efficiency,
        combustor_pressure_ratio,
    } = *params;

    let t_2 = reference_temperature();
    let cp_c = cp_from_gamma(gamma_compressor);
    let cp_t = cp_from_gamma(gamma_turbine);
    let cp_mean = mean_cp(cp_c, cp_t);

    // Compressor.
    let t_3 = t_2
        * compression_temperature_ratio(pressure_ratio, gamma_compressor, compressor_efficiency);

    // Combustor outlet is fixed by the temperature ratio, not an energy balance.
    let t_4: ThermodynamicTemperature = t_2 * temperature_ratio;

    // Turbine expands across the pressure ratio left after combustor losses.
    let turbine_pressure_ratio = pressure_ratio * combustor_pressure_ratio;
    let t_5 = t_4
        * expansion_temperature_ratio(turbine_pressure_ratio, gamma_turbine, turbine_efficiency);

    let turbine = cp_t * t_4.minus(t_5);
    let compressor = cp_c * t_3.minus(t_2);
    let net = turbine - compressor;
    let heat_input = cp_mean * t_4.minus(t_3);

    let s_2 = SpecificEntropy::ZERO;
    let s_3 = s_2 + entropy_change(cp_c, t_2, t_3, pressure_ratio);
    let s_4 = s_3 + entropy_change(cp_mean, t_3, t_4, combustor_pressure_ratio);
    let s_5 = s_4 + entropy_change(cp_t, t_4, t_5, 1.0 / turbine_pressure_ratio);

    CycleResult {
        specific_work: (net / (cp_c * t_2)).get::<ratio>(),
        efficiency: (net / heat_input).get::<ratio>(),
        temperature: [t_2, t_3, t_4, t_5, t_2],
        entropy: [s_2, s_3, s_4, s_5, s_2],
        work: WorkBreakdown {
            turbine,
            compressor,
            net,
            heat_input,
        },
    }
}
