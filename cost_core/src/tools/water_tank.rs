//! # Water Tank Calculator
//!
//! Capacity of a rectangular or cylindrical tank from its dimensions in feet.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use super::require_positive;
use crate::errors::CostResult;
use crate::units::{CuFt, Feet, Liters, SqFt};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "lowercase")]
pub enum TankInput {
    Rectangular { length_ft: f64, width_ft: f64, height_ft: f64 },
    Cylindrical { diameter_ft: f64, height_ft: f64 },
}

impl TankInput {
    pub fn validate(&self) -> CostResult<()> {
        match *self {
            TankInput::Rectangular { length_ft, width_ft, height_ft } => {
                require_positive("length_ft", length_ft)?;
                require_positive("width_ft", width_ft)?;
                require_positive("height_ft", height_ft)
            }
            TankInput::Cylindrical { diameter_ft, height_ft } => {
                require_positive("diameter_ft", diameter_ft)?;
                require_positive("height_ft", height_ft)
            }
        }
    }

    /// Internal volume
    pub fn volume(&self) -> CuFt {
        match *self {
            TankInput::Rectangular { length_ft, width_ft, height_ft } => {
                Feet(length_ft) * Feet(width_ft) * Feet(height_ft)
            }
            TankInput::Cylindrical { diameter_ft, height_ft } => {
                let radius = diameter_ft / 2.0;
                SqFt(PI * radius * radius) * Feet(height_ft)
            }
        }
    }
}

/// Tank capacity in liters.
pub fn calculate(input: &TankInput) -> CostResult<Liters> {
    input.validate()?;
    Ok(input.volume().into())
}
