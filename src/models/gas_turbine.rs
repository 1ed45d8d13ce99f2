//! Ideal-gas gas turbine cycle models.
//!
//! Two cycles are provided, both evaluated in a single closed-form pass:
//!
//! - [`brayton`]: single compressor, combustor, single turbine.
//! - [`intercooled`]: two equal-pressure-ratio compressor stages with an
//!   isobaric intercooler between them.
//!
//! Both take a [`CycleParameters`] record and return a [`CycleResult`] holding
//! the non-dimensional specific work, the thermal efficiency, and the
//! temperature/entropy trace around the closed cycle.
//! [`sweep`] varies one [`Parameter`] at a time across either model.
//!
//! # Assumptions
//!
//! - Calorically perfect gas with `R = 287 J/(kg·K)` and `cp = R·γ/(γ−1)`,
//!   with separate γ for the compression and expansion legs.
//! - Compressor inlet fixed at `T_ref = 293.15 K`, which is also the entropy
//!   reference (`s = 0`).
//! - Turbine inlet fixed by the temperature ratio, `T_ref·TR`.
//! - Component losses are polytropic efficiencies applied in the exponent.
//!
//! # State numbering
//!
//! Trace index 0 is state 2 (compressor inlet). Each following index is the
//! next state around the cycle, and the last index repeats state 2 to close
//! the T-s loop.

pub mod brayton;
pub mod intercooled;
pub mod sweep;

mod cycle;

pub use cycle::{
    CycleParameters, CycleResult, InvalidCycleParameters, Parameter, ParseParameterError,
    Validation, WorkBreakdown, gas_constant, reference_temperature,
};
