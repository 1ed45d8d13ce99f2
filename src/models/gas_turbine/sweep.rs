//! One-at-a-time parameter sweeps over a cycle model.
//!
//! A sweep evaluates a model repeatedly, substituting one [`Parameter`] of a
//! baseline [`CycleParameters`] record with each sample value in turn.
//! The baseline is only borrowed; every sample is evaluated on a fresh copy,
//! so the caller's record is unchanged however the sweep ends.

use log::{debug, trace};
use twine_core::Model;

use super::cycle::{CycleParameters, CycleResult, Parameter};

/// Specific work and efficiency series from a [`sweep`].
///
/// All series share the order and length of [`Sweep::values`].
#[derive(Debug, Clone, PartialEq)]
pub struct Sweep {
    /// The parameter that was varied.
    pub parameter: Parameter,

    /// Sample values, in evaluation order.
    pub values: Vec<f64>,

    /// Non-dimensional specific work at each sample.
    pub specific_work: Vec<f64>,

    /// Thermal efficiency at each sample.
    pub efficiency: Vec<f64>,
}

impl Sweep {
    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if no samples were evaluated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates `(value, specific_work, efficiency)` triples in sample order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        self.values
            .iter()
            .zip(&self.specific_work)
            .zip(&self.efficiency)
            .map(|((&x, &w), &eta)| (x, w, eta))
    }
}

/// Evaluates `model` once per entry of `values`, varying `parameter` from `baseline`.
///
/// When `parameter` is [`Parameter::PressureRatio`] the varied record is the
/// only source of the pressure ratio, so the model always sees a consistent value.
///
/// # Errors
///
/// Returns the first error produced by `model`. Samples after the failing one
/// are not evaluated.
///
/// # Example
///
/// ```
/// use twine_gas_turbine::models::gas_turbine::{
///     CycleParameters, Parameter, intercooled::IntercooledCycle, sweep::{linspace, sweep},
/// };
///
/// let baseline = CycleParameters::default();
/// let values = linspace(0.65, 1.0, 8);
/// let trend = sweep(&IntercooledCycle::new(), &baseline, Parameter::CompressorEfficiency, &values)
///     .unwrap();
///
/// assert_eq!(trend.len(), 8);
/// assert!(trend.efficiency[7] > trend.efficiency[0]);
/// assert_eq!(baseline, CycleParameters::default());
/// ```
pub fn sweep<M, const N: usize>(
    model: &M,
    baseline: &CycleParameters,
    parameter: Parameter,
    values: &[f64],
) -> Result<Sweep, M::Error>
where
    M: Model<Input = CycleParameters, Output = CycleResult<N>>,
{
    debug!(
        "sweeping {parameter} over {} values from baseline {baseline:?}",
        values.len()
    );

    let mut specific_work = Vec::with_capacity(values.len());
    let mut efficiency = Vec::with_capacity(values.len());

    for &value in values {
        let result = model.call(&baseline.with(parameter, value))?;
        trace!(
            "{parameter} = {value}: specific work {}, efficiency {}",
            result.specific_work, result.efficiency
        );
        specific_work.push(result.specific_work);
        efficiency.push(result.efficiency);
    }

    debug!("sweep of {parameter} complete");

    Ok(Sweep {
        parameter,
        values: values.to_vec(),
        specific_work,
        efficiency,
    })
}

/// Returns `n` evenly spaced values from `start` to `end`, inclusive.
///
/// Returns an empty vector for `n = 0` and `[start]` for `n = 1`.
///
/// ```
/// use twine_gas_turbine::models::gas_turbine::sweep::linspace;
///
/// assert_eq!(linspace(1.0, 2.0, 5), vec![1.0, 1.25, 1.5, 1.75, 2.0]);
/// ```
#[must_use]
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::Cell;

    use approx::assert_relative_eq;
    use uom::{
        ConstZero,
        si::{f64::ThermodynamicTemperature, thermodynamic_temperature::kelvin},
    };

    use crate::models::gas_turbine::{
        InvalidCycleParameters, Validation, WorkBreakdown,
        brayton::{self, BraytonCycle},
        intercooled::IntercooledCycle,
    };
    use crate::support::constraint::ConstraintError;
    use crate::support::units::{SpecificEnthalpy, SpecificEntropy};

    #[test]
    fn pressure_ratio_sweep_leaves_baseline_untouched() {
        let baseline = CycleParameters::default();

        let trend = sweep(
            &BraytonCycle::new(),
            &baseline,
            Parameter::PressureRatio,
            &[5.0, 10.0, 15.0],
        )
        .unwrap();

        assert_eq!(baseline, CycleParameters::default());
        assert_eq!(baseline.pressure_ratio, 32.0);
        assert_eq!(trend.parameter, Parameter::PressureRatio);
        assert_eq!(trend.values, vec![5.0, 10.0, 15.0]);
    }

    #[test]
    fn series_match_pointwise_evaluation() {
        let baseline = CycleParameters::default();
        let values = [5.0, 10.0, 15.0];

        let trend = sweep(&BraytonCycle::new(), &baseline, Parameter::PressureRatio, &values)
            .unwrap();

        for (x, w, eta) in trend.iter() {
            let expected = brayton::evaluate(&baseline.with(Parameter::PressureRatio, x));
            assert_relative_eq!(w, expected.specific_work);
            assert_relative_eq!(eta, expected.efficiency);
        }
        assert!(trend.efficiency.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn every_parameter_can_be_swept() {
        let baseline = CycleParameters::default();

        for parameter in Parameter::ALL {
            let trend = sweep(&IntercooledCycle::new(), &baseline, parameter, &[0.9, 0.95])
                .unwrap();
            assert_eq!(trend.len(), 2);
        }
        assert_eq!(baseline, CycleParameters::default());
    }

    #[test]
    fn temperature_ratio_sweep_raises_specific_work() {
        let trend = sweep(
            &IntercooledCycle::new(),
            &CycleParameters::default(),
            Parameter::TemperatureRatio,
            &linspace(3.0, 5.0, 10),
        )
        .unwrap();

        assert!(trend.specific_work.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn empty_values_give_empty_sweep() {
        let trend = sweep(
            &BraytonCycle::new(),
            &CycleParameters::default(),
            Parameter::TemperatureRatio,
            &[],
        )
        .unwrap();

        assert!(trend.is_empty());
        assert!(trend.specific_work.is_empty());
        assert!(trend.efficiency.is_empty());
    }

    #[test]
    fn strict_model_error_stops_the_sweep() {
        let baseline = CycleParameters::default();
        let model = BraytonCycle::new().with_validation(Validation::Strict);

        let err = sweep(&model, &baseline, Parameter::PressureRatio, &[5.0, -1.0, 10.0])
            .unwrap_err();

        assert_eq!(err.parameter, Parameter::PressureRatio);
        assert_eq!(err.value, -1.0);
        assert_eq!(err.reason, ConstraintError::Negative);
        assert_eq!(baseline, CycleParameters::default());
    }

    /// Records how many times it was called and fails on a chosen input value.
    struct Flaky {
        fail_at: f64,
        calls: Cell<usize>,
    }

    impl Model for Flaky {
        type Input = CycleParameters;
        type Output = CycleResult<1>;
        type Error = InvalidCycleParameters;

        fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
            self.calls.set(self.calls.get() + 1);
            if input.temperature_ratio == self.fail_at {
                return Err(InvalidCycleParameters {
                    parameter: Parameter::TemperatureRatio,
                    value: input.temperature_ratio,
                    reason: ConstraintError::AboveMaximum,
                });
            }
            Ok(CycleResult {
                specific_work: input.temperature_ratio,
                efficiency: 0.0,
                temperature: [ThermodynamicTemperature::new::<kelvin>(293.15)],
                entropy: [SpecificEntropy::ZERO],
                work: WorkBreakdown {
                    turbine: SpecificEnthalpy::ZERO,
                    compressor: SpecificEnthalpy::ZERO,
                    net: SpecificEnthalpy::ZERO,
                    heat_input: SpecificEnthalpy::ZERO,
                },
            })
        }
    }

    #[test]
    fn samples_after_a_failure_are_skipped() {
        let model = Flaky {
            fail_at: 4.0,
            calls: Cell::new(0),
        };
        let baseline = CycleParameters::default();

        let result = sweep(&model, &baseline, Parameter::TemperatureRatio, &[3.0, 4.0, 5.0]);

        assert!(result.is_err());
        assert_eq!(model.calls.get(), 2);
        assert_eq!(baseline.temperature_ratio, 6.0);
    }

    #[test]
    fn samples_are_evaluated_in_order() {
        let model = Flaky {
            fail_at: f64::NAN,
            calls: Cell::new(0),
        };

        let trend = sweep(
            &model,
            &CycleParameters::default(),
            Parameter::TemperatureRatio,
            &[7.0, 3.0, 5.0],
        )
        .unwrap();

        assert_eq!(trend.specific_work, vec![7.0, 3.0, 5.0]);
        assert_eq!(model.calls.get(), 3);
    }

    #[test]
    fn linspace_edges() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(3.0, 9.0, 1), vec![3.0]);
        assert_eq!(linspace(3.0, 9.0, 2), vec![3.0, 9.0]);

        let grid = linspace(1.0, 40.0, 50);
        assert_eq!(grid.len(), 50);
        assert_eq!(grid[0], 1.0);
        assert_eq!(grid[49], 40.0);
        assert_relative_eq!(grid[1] - grid[0], 39.0 / 49.0, epsilon = 1e-12);
    }
}
