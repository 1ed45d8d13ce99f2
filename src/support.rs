//! Supporting utilities used by models.
//!
//! - [`constraint`]: Typed numeric constraints used for validation.
//! - [`units`]: [`uom`] quantity aliases and temperature-difference helpers.

pub mod constraint;
pub mod units;
