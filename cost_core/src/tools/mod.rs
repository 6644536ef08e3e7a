//! # Quick Calculators
//!
//! Small standalone site calculators. Each follows the same pattern:
//!
//! - `*Input` - input parameters (JSON-serializable)
//! - `*Result` - calculation results (JSON-serializable)
//! - `calculate(&input) -> CostResult<*Result>` - pure calculation function
//!
//! Unlike the estimation engine these validate their input and return
//! [`CostError::InvalidInput`](crate::errors::CostError::InvalidInput) for
//! missing (zero), negative or non-finite required values.
//!
//! ## Available Calculators
//!
//! - [`area`] - plane figure areas
//! - [`paint`] - paint volume and cost
//! - [`flooring`] - tile counts including skirting and wastage
//! - [`water_tank`] - tank capacity in liters
//! - [`earthwork`] - excavation volumes, labor days and cost
//! - [`ac_capacity`] - room cooling load in tons
//! - [`material_weight`] - weight of a block of material
//! - [`plumbing`] - fixture units, supply pipe size and rough cost

pub mod ac_capacity;
pub mod area;
pub mod earthwork;
pub mod flooring;
pub mod material_weight;
pub mod paint;
pub mod plumbing;
pub mod water_tank;

use crate::errors::{CostError, CostResult};

/// Reject zero, negative and non-finite values for a required field.
pub(crate) fn require_positive(field: &str, value: f64) -> CostResult<()> {
    if !value.is_finite() {
        return Err(CostError::invalid_input(field, value.to_string(), "Value must be a finite number"));
    }
    if value <= 0.0 {
        return Err(CostError::invalid_input(field, value.to_string(), "Value must be positive"));
    }
    Ok(())
}

/// Reject negative and non-finite values for an optional field.
pub(crate) fn require_non_negative(field: &str, value: f64) -> CostResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(CostError::invalid_input(field, value.to_string(), "Value must be zero or positive"));
    }
    Ok(())
}
