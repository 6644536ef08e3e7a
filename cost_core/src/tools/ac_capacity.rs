//! # AC Capacity Calculator
//!
//! Rough cooling load for a room in summer conditions.
//!
//! BTU/h = 20 × room volume + 400 × occupants + 150 × (peak °C − 24)
//!       + 10% of the volume load for sun exposure. Tons = BTU/h / 12000.

use serde::{Deserialize, Serialize};

use super::require_positive;
use crate::errors::{CostError, CostResult};
use crate::units::{Feet, SqFt};

const BTU_PER_CUFT: f64 = 20.0;
const BTU_PER_PERSON: f64 = 400.0;
const BTU_PER_DEGREE_ABOVE_BASE: f64 = 150.0;
const BASE_TEMPERATURE_C: f64 = 24.0;
const SUN_EXPOSURE_SHARE: f64 = 0.1;

/// BTU/h per ton of refrigeration
pub const BTU_PER_TON: f64 = 12000.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcCapacityInput {
    pub length_ft: f64,
    pub width_ft: f64,
    pub height_ft: f64,
    pub occupants: u32,
    /// Peak summer temperature (°C)
    pub max_temperature_c: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcCapacityResult {
    pub btu_per_hour: f64,
    pub tons: f64,
}

impl AcCapacityInput {
    pub fn validate(&self) -> CostResult<()> {
        require_positive("length_ft", self.length_ft)?;
        require_positive("width_ft", self.width_ft)?;
        require_positive("height_ft", self.height_ft)?;
        if self.occupants == 0 {
            return Err(CostError::invalid_input("occupants", "0", "At least one occupant required"));
        }
        require_positive("max_temperature_c", self.max_temperature_c)
    }
}

pub fn calculate(input: &AcCapacityInput) -> CostResult<AcCapacityResult> {
    input.validate()?;

    let floor: SqFt = Feet(input.length_ft) * Feet(input.width_ft);
    let volume = floor * Feet(input.height_ft);

    let volume_load = volume.0 * BTU_PER_CUFT;
    let people_load = f64::from(input.occupants) * BTU_PER_PERSON;
    let heat_load = (input.max_temperature_c - BASE_TEMPERATURE_C).max(0.0) * BTU_PER_DEGREE_ABOVE_BASE;
    let sun_load = volume_load * SUN_EXPOSURE_SHARE;

    let btu_per_hour = volume_load + people_load + heat_load + sun_load;
    Ok(AcCapacityResult {
        btu_per_hour,
        tons: btu_per_hour / BTU_PER_TON,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bedroom_in_summer() {
        let input = AcCapacityInput {
            length_ft: 12.0,
            width_ft: 12.0,
            height_ft: 10.0,
            occupants: 2,
            max_temperature_c: 44.0,
        };
        let result = calculate(&input).unwrap();
        // 28800 + 800 + 3000 + 2880
        assert!((result.btu_per_hour - 35_480.0).abs() < 1e-6);
        assert!((result.tons - 2.9567).abs() < 1e-3);
    }

    #[test]
    fn test_mild_climate_adds_no_heat_load() {
        let input = AcCapacityInput {
            length_ft: 10.0,
            width_ft: 10.0,
            height_ft: 10.0,
            occupants: 1,
            max_temperature_c: 20.0,
        };
        let result = calculate(&input).unwrap();
        assert!((result.btu_per_hour - 22_400.0).abs() < 1e-6);
    }

    #[test]
    fn test_no_occupants_rejected() {
        let input = AcCapacityInput {
            length_ft: 10.0,
            width_ft: 10.0,
            height_ft: 10.0,
            occupants: 0,
            max_temperature_c: 35.0,
        };
        assert!(calculate(&input).is_err());
    }
}
