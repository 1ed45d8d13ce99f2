//! Closed-form evaluation of the intercooled ideal-gas Brayton cycle.
//!
//! States: 2 inlet, 3 first-stage outlet, 4 intercooler outlet,
//! 5 second-stage outlet, 6 turbine inlet, 7 turbine outlet.

use uom::{
    ConstZero,
    si::{f64::ThermodynamicTemperature, ratio::ratio},
};

use crate::models::gas_turbine::cycle::{
    CycleParameters, CycleResult, WorkBreakdown, compression_temperature_ratio, cp_from_gamma,
    entropy_change, expansion_temperature_ratio, mean_cp, reference_temperature,
};
use crate::support::units::{SpecificEntropy, TemperatureDifference};

use super::IntercoolerEffectiveness;

/// Number of trace points for the intercooled cycle (six states plus closure).
pub const INTERCOOLED_STATES: usize = 7;

/// Result of an intercooled cycle evaluation.
pub type IntercooledResult = CycleResult<INTERCOOLED_STATES>;

/// Evaluates the intercooled cycle for `params`.
///
/// The overall pressure ratio is split evenly between the two compressor
/// stages (`√PR` each). The intercooler cools isobarically toward the
/// compressor inlet temperature according to `intercooler`.
///
/// Performs no validation: non-physical inputs propagate to non-finite outputs.
#[must_use]
pub fn evaluate(
    params: &CycleParameters,
    intercooler: IntercoolerEffectiveness,
) -> IntercooledResult {
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

    let stage_pressure_ratio = pressure_ratio.sqrt();
    let stage_temperature_ratio = compression_temperature_ratio(
        stage_pressure_ratio,
        gamma_compressor,
        compressor_efficiency,
    );

    // Low-pressure stage.
    let t_3 = t_2 * stage_temperature_ratio;

    // Intercooler.
    let t_4 = cool_toward(t_3, t_2, *intercooler);

    // High-pressure stage.
    let t_5 = t_4 * stage_temperature_ratio;

    let t_6: ThermodynamicTemperature = t_2 * temperature_ratio;

    let turbine_pressure_ratio = pressure_ratio * combustor_pressure_ratio;
    let t_7 = t_6
        * expansion_temperature_ratio(turbine_pressure_ratio, gamma_turbine, turbine_efficiency);

    let turbine = cp_t * t_6.minus(t_7);
    let compressor = cp_c * t_3.minus(t_2) + cp_c * t_5.minus(t_4);
    let net = turbine - compressor;

    // Measure heat input from the turbine exit when it is hotter than the
    // high-pressure compressor exit.
    let heat_input_start = if t_7 > t_5 { t_7 } else { t_5 };
    let heat_input = mean_cp(cp_c, cp_t) * t_6.minus(heat_input_start);

    let s_2 = SpecificEntropy::ZERO;
    let s_3 = s_2 + entropy_change(cp_c, t_2, t_3, stage_pressure_ratio);
    let s_4 = s_3 + entropy_change(cp_c, t_3, t_4, 1.0);
    let s_5 = s_4 + entropy_change(cp_c, t_4, t_5, stage_pressure_ratio);
    let s_6 = s_5 + entropy_change(cp_t, t_5, t_6, 1.0);
    let s_7 = s_6 + entropy_change(cp_t, t_6, t_7, 1.0 / turbine_pressure_ratio);

    CycleResult {
        specific_work: (net / (cp_c * t_2)).get::<ratio>(),
        efficiency: (net / heat_input).get::<ratio>(),
        temperature: [t_2, t_3, t_4, t_5, t_6, t_7, t_2],
        entropy: [s_2, s_3, s_4, s_5, s_6, s_7, s_2],
        work: WorkBreakdown {
            turbine,
            compressor,
            net,
            heat_input,
        },
    }
}

/// Returns `t_hot − effectiveness·(t_hot − t_cold)`.
fn cool_toward(
    t_hot: ThermodynamicTemperature,
    t_cold: ThermodynamicTemperature,
    effectiveness: f64,
) -> ThermodynamicTemperature {
    t_hot - t_hot.minus(t_cold) * effectiveness
}
