//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for every dimensional quantity (temperatures,
//! heat capacities, entropies, per-unit-mass work). This module adds the
//! thermodynamic quantity aliases that [`uom`] lacks and a helper for taking
//! temperature differences.
//!
//! ## Temperature differences
//!
//! Subtracting two absolute temperatures should give a temperature interval,
//! which is what [`TemperatureDifference::minus`] returns:
//!
//! ```
//! use uom::si::f64::ThermodynamicTemperature;
//! use uom::si::thermodynamic_temperature::kelvin;
//! use uom::si::temperature_interval::kelvin as delta_kelvin;
//! use twine_gas_turbine::support::units::TemperatureDifference;
//!
//! let t_turbine_in = ThermodynamicTemperature::new::<kelvin>(1758.9);
//! let t_turbine_out = ThermodynamicTemperature::new::<kelvin>(653.4);
//! let drop = t_turbine_in.minus(t_turbine_out);
//! assert!((drop.get::<delta_kelvin>() - 1105.5).abs() < 1e-9);
//! ```

mod quantities;
mod temperature_difference;

pub use quantities::{SpecificEnthalpy, SpecificEntropy, SpecificGasConstant};
pub use temperature_difference::TemperatureDifference;
