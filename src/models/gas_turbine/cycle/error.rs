use thiserror::Error;

use crate::support::constraint::ConstraintError;

use super::Parameter;

/// A cycle parameter is outside its physically admissible range.
///
/// Returned by [`CycleParameters::validate`](super::CycleParameters::validate)
/// and by model adapters running in [`Validation::Strict`](super::Validation::Strict) mode.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("invalid cycle parameter {parameter} = {value}: {reason}")]
pub struct InvalidCycleParameters {
    /// The offending parameter.
    pub parameter: Parameter,

    /// The rejected value.
    pub value: f64,

    /// Which constraint the value violated.
    pub reason: ConstraintError,
}

/// A string did not name a known [`Parameter`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown cycle parameter key: {key:?}")]
pub struct ParseParameterError {
    /// The unrecognized key.
    pub key: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_names_parameter_and_value() {
        let err = InvalidCycleParameters {
            parameter: Parameter::PressureRatio,
            value: -3.0,
            reason: ConstraintError::Negative,
        };

        assert_eq!(
            err.to_string(),
            "invalid cycle parameter PR = -3: value must not be negative"
        );
    }
}
