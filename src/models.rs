//! Public Twine models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Organization
//!
//! Models are organized into domain-specific submodules. Currently the only
//! domain is [`gas_turbine`], which holds the ideal-gas cycle evaluators.
//!
//! # Model structure
//!
//! Each model lives in its own module and contains an internal `core` submodule
//! where the actual computation lives. The `core` evaluator is re-exported as a
//! plain function for callers that don't need the [`twine_core::Model`] trait.
//!
//! The [`twine_core::Model`] implementation is a thin adapter that
//! delegates to the model-specific core and optionally validates inputs first.

pub mod gas_turbine;
