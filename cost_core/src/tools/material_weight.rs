//! # Material Weight Calculator
//!
//! Weight of a rectangular block of a common building material. Dimensions
//! in meters, densities in kg/m³.

use serde::{Deserialize, Serialize};

use super::require_positive;
use crate::errors::CostResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildingMaterial {
    Concrete,
    Steel,
    Brick,
    Wood,
    Glass,
    Aluminum,
    Sand,
    Gravel,
    Cement,
    Marble,
}

impl BuildingMaterial {
    pub const ALL: [BuildingMaterial; 10] = [
        BuildingMaterial::Concrete,
        BuildingMaterial::Steel,
        BuildingMaterial::Brick,
        BuildingMaterial::Wood,
        BuildingMaterial::Glass,
        BuildingMaterial::Aluminum,
        BuildingMaterial::Sand,
        BuildingMaterial::Gravel,
        BuildingMaterial::Cement,
        BuildingMaterial::Marble,
    ];

    /// Density in kg/m³
    pub fn density(&self) -> f64 {
        match self {
            BuildingMaterial::Concrete => 2400.0,
            BuildingMaterial::Steel => 7850.0,
            BuildingMaterial::Brick => 1800.0,
            BuildingMaterial::Wood => 700.0,
            BuildingMaterial::Glass => 2500.0,
            BuildingMaterial::Aluminum => 2700.0,
            BuildingMaterial::Sand => 1600.0,
            BuildingMaterial::Gravel => 1680.0,
            BuildingMaterial::Cement => 1440.0,
            BuildingMaterial::Marble => 2700.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialWeightInput {
    pub material: BuildingMaterial,
    pub length_m: f64,
    pub width_m: f64,
    pub height_m: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialWeightResult {
    pub volume_m3: f64,
    pub weight_kg: f64,
}

impl MaterialWeightInput {
    pub fn validate(&self) -> CostResult<()> {
        require_positive("length_m", self.length_m)?;
        require_positive("width_m", self.width_m)?;
        require_positive("height_m", self.height_m)
    }
}

pub fn calculate(input: &MaterialWeightInput) -> CostResult<MaterialWeightResult> {
    input.validate()?;
    let volume = input.length_m * input.width_m * input.height_m;
    Ok(MaterialWeightResult {
        volume_m3: volume,
        weight_kg: volume * input.material.density(),
    })
}
