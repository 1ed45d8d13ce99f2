//! Thermodynamic quantity aliases.
//!
//! Each alias shares its dimension with an existing [`uom`] quantity, so
//! values interoperate freely (e.g., a `SpecificHeatCapacity` times a
//! `TemperatureInterval` is a [`SpecificEnthalpy`]). The aliases document
//! intent at API boundaries.

use uom::{
    si::{ISQ, Quantity, SI},
    typenum::{N1, N2, P2, Z0},
};

/// Specific gas constant, J/kg·K in SI.
pub type SpecificGasConstant = Quantity<ISQ<P2, Z0, N2, Z0, N1, Z0, Z0>, SI<f64>, f64>;

/// Specific enthalpy, and specific work or heat per unit mass, J/kg in SI.
pub type SpecificEnthalpy = Quantity<ISQ<P2, Z0, N2, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Specific entropy, J/kg·K in SI.
pub type SpecificEntropy = Quantity<ISQ<P2, Z0, N2, Z0, N1, Z0, Z0>, SI<f64>, f64>;
