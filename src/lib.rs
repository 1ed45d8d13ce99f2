//! # Twine Gas Turbine
//!
//! Closed-form ideal-gas gas turbine cycle models for
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! ## Crate layout
//!
//! - [`models`]: Cycle evaluators exposed as [`twine_core::Model`] implementations,
//!   plus a parameter sweep harness.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Quick start
//!
//! ```
//! use twine_core::Model;
//! use twine_gas_turbine::models::gas_turbine::{
//!     CycleParameters, Parameter, brayton::BraytonCycle, sweep::sweep,
//! };
//!
//! let params = CycleParameters::default();
//! let result = BraytonCycle::new().call(&params).unwrap();
//! assert!(result.efficiency > 0.6);
//!
//! let values = [5.0, 10.0];
//! let trend = sweep(&BraytonCycle::new(), &params, Parameter::PressureRatio, &values).unwrap();
//! assert_eq!(trend.efficiency.len(), 2);
//! ```
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//! Domain-specific helpers (e.g., ideal-gas leg relations) stay private to
//! their domain module until another domain needs them.

pub mod models;
pub mod support;
