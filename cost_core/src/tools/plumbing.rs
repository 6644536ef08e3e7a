//! # Plumbing Calculator
//!
//! Sums water supply fixture units (WSFU) and drainage fixture units (DFU)
//! for a list of fixtures, recommends a main supply pipe size and gives a
//! rough cost per supply unit.

use serde::{Deserialize, Serialize};

use crate::errors::CostResult;

/// Rough installed cost per water supply fixture unit
pub const COST_PER_SUPPLY_UNIT: f64 = 1000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Fixture {
    BathroomGroup,
    Bathtub,
    Shower,
    KitchenSink,
    Lavatory,
    Toilet,
    WashingMachine,
    Dishwasher,
}

impl Fixture {
    pub fn name(&self) -> &'static str {
        match self {
            Fixture::BathroomGroup => "Bathroom Group (Full)",
            Fixture::Bathtub => "Bathtub",
            Fixture::Shower => "Shower",
            Fixture::KitchenSink => "Kitchen Sink",
            Fixture::Lavatory => "Lavatory (Bathroom Sink)",
            Fixture::Toilet => "Toilet (Flush Tank)",
            Fixture::WashingMachine => "Washing Machine",
            Fixture::Dishwasher => "Dishwasher",
        }
    }

    /// (WSFU, DFU) per fixture
    pub fn units(&self) -> (f64, f64) {
        match self {
            Fixture::BathroomGroup => (6.0, 6.0),
            Fixture::Bathtub => (4.0, 2.0),
            Fixture::Shower => (2.0, 2.0),
            Fixture::KitchenSink => (1.5, 2.0),
            Fixture::Lavatory => (1.0, 1.0),
            Fixture::Toilet => (2.5, 3.0),
            Fixture::WashingMachine => (4.0, 2.0),
            Fixture::Dishwasher => (1.5, 2.0),
        }
    }
}

/// A fixture and how many of it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FixtureCount {
    pub fixture: Fixture,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlumbingResult {
    pub water_supply_units: f64,
    pub drainage_units: f64,
    pub recommended_pipe_size: String,
    pub estimated_cost: f64,
}

/// Main supply pipe size for a WSFU total.
pub fn pipe_size(water_supply_units: f64) -> &'static str {
    if water_supply_units > 100.0 {
        "1 1/4 inch"
    } else if water_supply_units > 40.0 {
        "1 inch"
    } else if water_supply_units > 20.0 {
        "3/4 inch"
    } else {
        "1/2 inch"
    }
}

/// An empty fixture list is valid and yields zero units.
pub fn calculate(fixtures: &[FixtureCount]) -> CostResult<PlumbingResult> {
    let (supply, drainage) = fixtures.iter().fold((0.0, 0.0), |(ws, dfu), item| {
        let (w, d) = item.fixture.units();
        let qty = f64::from(item.quantity);
        (ws + w * qty, dfu + d * qty)
    });

    Ok(PlumbingResult {
        water_supply_units: supply,
        drainage_units: drainage,
        recommended_pipe_size: pipe_size(supply).to_string(),
        estimated_cost: supply * COST_PER_SUPPLY_UNIT,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_bathroom_house() {
        let fixtures = [
            FixtureCount { fixture: Fixture::BathroomGroup, quantity: 2 },
            FixtureCount { fixture: Fixture::KitchenSink, quantity: 1 },
            FixtureCount { fixture: Fixture::WashingMachine, quantity: 1 },
        ];
        let result = calculate(&fixtures).unwrap();
        assert_eq!(result.water_supply_units, 17.5);
        assert_eq!(result.drainage_units, 16.0);
        assert_eq!(result.recommended_pipe_size, "1/2 inch");
        assert_eq!(result.estimated_cost, 17_500.0);
    }

    #[test]
    fn test_pipe_size_steps() {
        assert_eq!(pipe_size(20.0), "1/2 inch");
        assert_eq!(pipe_size(20.5), "3/4 inch");
        assert_eq!(pipe_size(41.0), "1 inch");
        assert_eq!(pipe_size(101.0), "1 1/4 inch");
    }

    #[test]
    fn test_empty_list() {
        let result = calculate(&[]).unwrap();
        assert_eq!(result.water_supply_units, 0.0);
        assert_eq!(result.estimated_cost, 0.0);
    }
}
