use std::{fmt, str::FromStr};

use crate::support::constraint::{
    Constraint, ConstraintError, StrictlyPositive, UnitIntervalLowerOpen,
};

use super::error::{InvalidCycleParameters, ParseParameterError};

/// Inputs shared by every gas turbine cycle model.
///
/// All values are dimensionless. The record is immutable per evaluation:
/// models borrow it, and [`CycleParameters::with`] returns a modified copy
/// rather than mutating in place.
///
/// No validation happens at construction. Use [`CycleParameters::validate`]
/// (or a model in [`Validation::Strict`] mode) to reject non-physical inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CycleParameters {
    /// Overall compressor pressure ratio, `PR`.
    pub pressure_ratio: f64,

    /// Turbine inlet to compressor inlet temperature ratio, `TR`.
    pub temperature_ratio: f64,

    /// Specific heat ratio on the compression legs, `γ_c`.
    pub gamma_compressor: f64,

    /// Specific heat ratio on the expansion leg, `γ_t`.
    pub gamma_turbine: f64,

    /// Compressor polytropic efficiency, `η_c`.
    pub compressor_efficiency: f64,

    /// Turbine polytropic efficiency, `η_t`.
    pub turbine_efficiency: f64,

    /// Combustion chamber outlet-to-inlet pressure ratio, `PR_cc`.
    pub combustor_pressure_ratio: f64,
}

impl Default for CycleParameters {
    /// The reference scenario: `PR = 32`, `TR = 6`, `γ = 1.4`, lossless components.
    fn default() -> Self {
        Self {
            pressure_ratio: 32.0,
            temperature_ratio: 6.0,
            gamma_compressor: 1.4,
            gamma_turbine: 1.4,
            compressor_efficiency: 1.0,
            turbine_efficiency: 1.0,
            combustor_pressure_ratio: 1.0,
        }
    }
}

impl CycleParameters {
    /// Returns a copy with `parameter` set to `value`.
    #[must_use]
    pub fn with(mut self, parameter: Parameter, value: f64) -> Self {
        *parameter.field_mut(&mut self) = value;
        self
    }

    /// Checks that every parameter is physically admissible.
    ///
    /// Pressure ratios and the temperature ratio must be strictly positive,
    /// each `γ` must exceed one, and each polytropic efficiency must lie in `(0, 1]`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidCycleParameters`] naming the first offending parameter,
    /// checked in [`Parameter::ALL`] order.
    pub fn validate(&self) -> Result<(), InvalidCycleParameters> {
        Parameter::ALL.into_iter().try_for_each(|parameter| {
            let value = parameter.get(self);
            parameter
                .check(value)
                .map_err(|reason| InvalidCycleParameters {
                    parameter,
                    value,
                    reason,
                })
        })
    }
}

/// Selects one field of [`CycleParameters`].
///
/// Used by [`sweep`](crate::models::gas_turbine::sweep::sweep) to choose the
/// varied input. The legacy short keys (`"PR"`, `"gam_c"`, ...) are available
/// through [`Parameter::key`], [`fmt::Display`], and [`FromStr`].
///
/// Intercooler effectiveness is a model setting rather than a cycle
/// parameter. Vary it by building one model per value with
/// [`IntercooledCycle::with_intercooler_effectiveness`].
///
/// ```
/// use twine_gas_turbine::models::gas_turbine::{CycleParameters, Parameter};
///
/// let p: Parameter = "etap_c".parse().unwrap();
/// assert_eq!(p, Parameter::CompressorEfficiency);
///
/// let params = CycleParameters::default().with(p, 0.9);
/// assert_eq!(p.get(&params), 0.9);
/// ```
///
/// [`IntercooledCycle::with_intercooler_effectiveness`]:
///     crate::models::gas_turbine::intercooled::IntercooledCycle::with_intercooler_effectiveness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parameter {
    /// Overall compressor pressure ratio, `"PR"`.
    PressureRatio,
    /// Turbine inlet over compressor inlet temperature, `"TR"`.
    TemperatureRatio,
    /// Compression-side ratio of specific heats, `"gam_c"`.
    GammaCompressor,
    /// Expansion-side ratio of specific heats, `"gam_t"`.
    GammaTurbine,
    /// Compressor polytropic efficiency, `"etap_c"`.
    CompressorEfficiency,
    /// Turbine polytropic efficiency, `"etap_t"`.
    TurbineEfficiency,
    /// Combustor outlet over inlet pressure, `"PR_cc"`.
    CombustorPressureRatio,
}

impl Parameter {
    /// Every parameter, in declaration order.
    pub const ALL: [Parameter; 7] = [
        Parameter::PressureRatio,
        Parameter::TemperatureRatio,
        Parameter::GammaCompressor,
        Parameter::GammaTurbine,
        Parameter::CompressorEfficiency,
        Parameter::TurbineEfficiency,
        Parameter::CombustorPressureRatio,
    ];

    /// Reads this parameter from `params`.
    #[must_use]
    pub fn get(self, params: &CycleParameters) -> f64 {
        match self {
            Parameter::PressureRatio => params.pressure_ratio,
            Parameter::TemperatureRatio => params.temperature_ratio,
            Parameter::GammaCompressor => params.gamma_compressor,
            Parameter::GammaTurbine => params.gamma_turbine,
            Parameter::CompressorEfficiency => params.compressor_efficiency,
            Parameter::TurbineEfficiency => params.turbine_efficiency,
            Parameter::CombustorPressureRatio => params.combustor_pressure_ratio,
        }
    }

    /// The short key used by the original parameter tables.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Parameter::PressureRatio => "PR",
            Parameter::TemperatureRatio => "TR",
            Parameter::GammaCompressor => "gam_c",
            Parameter::GammaTurbine => "gam_t",
            Parameter::CompressorEfficiency => "etap_c",
            Parameter::TurbineEfficiency => "etap_t",
            Parameter::CombustorPressureRatio => "PR_cc",
        }
    }

    fn field_mut(self, params: &mut CycleParameters) -> &mut f64 {
        match self {
            Parameter::PressureRatio => &mut params.pressure_ratio,
            Parameter::TemperatureRatio => &mut params.temperature_ratio,
            Parameter::GammaCompressor => &mut params.gamma_compressor,
            Parameter::GammaTurbine => &mut params.gamma_turbine,
            Parameter::CompressorEfficiency => &mut params.compressor_efficiency,
            Parameter::TurbineEfficiency => &mut params.turbine_efficiency,
            Parameter::CombustorPressureRatio => &mut params.combustor_pressure_ratio,
        }
    }

    fn check(self, value: f64) -> Result<(), ConstraintError> {
        match self {
            Parameter::PressureRatio
            | Parameter::TemperatureRatio
            | Parameter::CombustorPressureRatio => StrictlyPositive::check(&value),
            // γ > 1 keeps cp = R·γ/(γ−1) finite and positive.
            Parameter::GammaCompressor | Parameter::GammaTurbine => {
                StrictlyPositive::check(&(value - 1.0)).map_err(|err| match err {
                    ConstraintError::NotANumber => err,
                    _ => ConstraintError::BelowMinimum,
                })
            }
            Parameter::CompressorEfficiency | Parameter::TurbineEfficiency => {
                UnitIntervalLowerOpen::check(&value)
            }
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Parameter {
    type Err = ParseParameterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Parameter::ALL
            .into_iter()
            .find(|parameter| parameter.key() == s)
            .ok_or_else(|| ParseParameterError { key: s.to_owned() })
    }
}

/// How a model adapter treats its input parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Validation {
    /// Evaluate any input. Non-physical parameters yield non-finite outputs.
    #[default]
    Permissive,

    /// Reject non-physical parameters with [`InvalidCycleParameters`] before evaluating.
    Strict,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_reference_scenario() {
        let params = CycleParameters::default();
        assert_eq!(params.pressure_ratio, 32.0);
        assert_eq!(params.temperature_ratio, 6.0);
        assert_eq!(params.gamma_compressor, 1.4);
        assert_eq!(params.gamma_turbine, 1.4);
        assert_eq!(params.compressor_efficiency, 1.0);
        assert_eq!(params.turbine_efficiency, 1.0);
        assert_eq!(params.combustor_pressure_ratio, 1.0);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn with_changes_only_the_selected_field() {
        let baseline = CycleParameters::default();

        for parameter in Parameter::ALL {
            let changed = baseline.with(parameter, 0.5);
            assert_eq!(parameter.get(&changed), 0.5);

            for other in Parameter::ALL.into_iter().filter(|p| *p != parameter) {
                assert_eq!(other.get(&changed), other.get(&baseline));
            }
        }
    }

    #[test]
    fn keys_round_trip() {
        for parameter in Parameter::ALL {
            assert_eq!(parameter.key().parse::<Parameter>(), Ok(parameter));
            assert_eq!(parameter.to_string(), parameter.key());
        }
    }

    #[test]
    fn unknown_key_is_rejected() {
        let err = "eta_ic".parse::<Parameter>().unwrap_err();
        assert_eq!(err.key, "eta_ic");
    }

    #[test]
    fn validate_rejects_non_positive_pressure_ratio() {
        let params = CycleParameters::default().with(Parameter::PressureRatio, 0.0);
        let err = params.validate().unwrap_err();

        assert_eq!(err.parameter, Parameter::PressureRatio);
        assert_eq!(err.reason, ConstraintError::Zero);
    }

    #[test]
    fn validate_rejects_negative_temperature_ratio() {
        let params = CycleParameters::default().with(Parameter::TemperatureRatio, -2.0);
        let err = params.validate().unwrap_err();

        assert_eq!(err.parameter, Parameter::TemperatureRatio);
        assert_eq!(err.value, -2.0);
        assert_eq!(err.reason, ConstraintError::Negative);
    }

    #[test]
    fn validate_rejects_gamma_of_one() {
        let params = CycleParameters::default().with(Parameter::GammaTurbine, 1.0);
        let err = params.validate().unwrap_err();

        assert_eq!(err.parameter, Parameter::GammaTurbine);
        assert_eq!(err.reason, ConstraintError::BelowMinimum);
    }

    #[test]
    fn validate_rejects_efficiency_outside_unit_interval() {
        let params = CycleParameters::default().with(Parameter::CompressorEfficiency, 1.2);
        assert_eq!(
            params.validate().unwrap_err().reason,
            ConstraintError::AboveMaximum
        );

        let params = CycleParameters::default().with(Parameter::TurbineEfficiency, 0.0);
        assert_eq!(
            params.validate().unwrap_err().reason,
            ConstraintError::BelowMinimum
        );
    }

    #[test]
    fn validate_rejects_nan() {
        let params = CycleParameters::default().with(Parameter::GammaCompressor, f64::NAN);
        assert_eq!(
            params.validate().unwrap_err().reason,
            ConstraintError::NotANumber
        );
    }

    #[test]
    fn validate_reports_first_offender() {
        let params = CycleParameters::default()
            .with(Parameter::CombustorPressureRatio, -1.0)
            .with(Parameter::TemperatureRatio, 0.0);

        assert_eq!(
            params.validate().unwrap_err().parameter,
            Parameter::TemperatureRatio
        );
    }
}
