//! # Earthwork Calculator
//!
//! Excavation volume, bulked and compacted volumes, labor days and a rough
//! cost for a rectangular pit. Dimensions are in meters.
//!
//! Cost = labor days × daily wage + volume × equipment rate
//!      + loose volume × disposal rate

use serde::{Deserialize, Serialize};

use super::require_positive;
use crate::errors::CostResult;

/// Daily wage of one excavation worker
pub const LABOR_COST_PER_DAY: f64 = 1500.0;

/// Equipment cost per cubic meter excavated
pub const EQUIPMENT_COST_PER_M3: f64 = 200.0;

/// Disposal cost per cubic meter of loose spoil
pub const DISPOSAL_COST_PER_M3: f64 = 150.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SoilType {
    Loose,
    #[default]
    Normal,
    Hard,
    Rock,
}

/// Bulking and compaction behavior of a soil.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SoilFactors {
    pub name: &'static str,
    /// Loose volume per bank volume
    pub swell_factor: f64,
    /// Compacted volume per bank volume
    pub shrinkage_factor: f64,
    /// Cubic meters per worker-day
    pub excavation_rate_m3_per_day: f64,
}

impl SoilType {
    pub fn factors(&self) -> SoilFactors {
        match self {
            SoilType::Loose => SoilFactors {
                name: "Loose Soil",
                swell_factor: 1.25,
                shrinkage_factor: 0.9,
                excavation_rate_m3_per_day: 5.0,
            },
            SoilType::Normal => SoilFactors {
                name: "Normal Soil",
                swell_factor: 1.3,
                shrinkage_factor: 0.85,
                excavation_rate_m3_per_day: 4.0,
            },
            SoilType::Hard => SoilFactors {
                name: "Hard Soil",
                swell_factor: 1.35,
                shrinkage_factor: 0.8,
                excavation_rate_m3_per_day: 3.0,
            },
            SoilType::Rock => SoilFactors {
                name: "Rocky Soil",
                swell_factor: 1.5,
                shrinkage_factor: 0.75,
                excavation_rate_m3_per_day: 1.5,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EarthworkInput {
    pub length_m: f64,
    pub width_m: f64,
    pub depth_m: f64,
    #[serde(default)]
    pub soil: SoilType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EarthworkResult {
    /// Bank (in-place) volume
    pub volume_m3: f64,
    pub loose_volume_m3: f64,
    pub compacted_volume_m3: f64,
    pub labor_days: f64,
    pub estimated_cost: f64,
}

impl EarthworkInput {
    pub fn validate(&self) -> CostResult<()> {
        require_positive("length_m", self.length_m)?;
        require_positive("width_m", self.width_m)?;
        require_positive("depth_m", self.depth_m)
    }
}

pub fn calculate(input: &EarthworkInput) -> CostResult<EarthworkResult> {
    input.validate()?;
    let soil = input.soil.factors();

    let volume = input.length_m * input.width_m * input.depth_m;
    let loose = volume * soil.swell_factor;
    let labor_days = (volume / soil.excavation_rate_m3_per_day).ceil();

    Ok(EarthworkResult {
        volume_m3: volume,
        loose_volume_m3: loose,
        compacted_volume_m3: volume * soil.shrinkage_factor,
        labor_days,
        estimated_cost: labor_days * LABOR_COST_PER_DAY
            + volume * EQUIPMENT_COST_PER_M3
            + loose * DISPOSAL_COST_PER_M3,
    })
}
