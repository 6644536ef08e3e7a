//! # Paint Calculator
//!
//! Liters of paint and their cost for a given wall area. Both results are
//! rounded up: paint is bought by the liter.

use serde::{Deserialize, Serialize};

use super::require_positive;
use crate::errors::{CostError, CostResult};

/// Allowed number of coats
pub const MAX_COATS: u32 = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaintInput {
    /// Total wall area (sq ft)
    pub wall_area_sqft: f64,

    /// Coverage of one liter for one coat (sq ft)
    pub coverage_sqft_per_liter: f64,

    pub cost_per_liter: f64,

    /// 1 to 3
    pub coats: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaintResult {
    pub liters: f64,
    pub cost: f64,
}

impl PaintInput {
    pub fn validate(&self) -> CostResult<()> {
        require_positive("wall_area_sqft", self.wall_area_sqft)?;
        require_positive("coverage_sqft_per_liter", self.coverage_sqft_per_liter)?;
        require_positive("cost_per_liter", self.cost_per_liter)?;
        if !(1..=MAX_COATS).contains(&self.coats) {
            return Err(CostError::invalid_input(
                "coats",
                self.coats.to_string(),
                "Coats must be between 1 and 3",
            ));
        }
        Ok(())
    }
}

pub fn calculate(input: &PaintInput) -> CostResult<PaintResult> {
    input.validate()?;
    let liters = input.wall_area_sqft * f64::from(input.coats) / input.coverage_sqft_per_liter;
    Ok(PaintResult {
        liters: liters.ceil(),
        cost: (liters * input.cost_per_liter).ceil(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(coats: u32) -> PaintInput {
        PaintInput {
            wall_area_sqft: 1000.0,
            coverage_sqft_per_liter: 120.0,
            cost_per_liter: 850.0,
            coats,
        }
    }

    #[test]
    fn test_two_coats() {
        let result = calculate(&input(2)).unwrap();
        // 2000 / 120 = 16.67 L
        assert_eq!(result.liters, 17.0);
        assert_eq!(result.cost, 14167.0);
    }

    #[test]
    fn test_coats_out_of_range() {
        assert!(calculate(&input(0)).is_err());
        assert!(calculate(&input(4)).is_err());
    }
}
