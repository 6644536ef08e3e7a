//! # Flooring Calculator
//!
//! Tile count for a rectangular room, with optional skirting and a 10%
//! wastage allowance.
//!
//! - floor area = length × width − door width × 0.5 (door swing strip)
//! - tiles = ceil(floor area / tile area)
//! - skirting run = perimeter − door width, tiles = ceil(run / tile length)
//! - extra = ceil(tiles × 10%)

use serde::{Deserialize, Serialize};

use super::{require_non_negative, require_positive};
use crate::errors::CostResult;
use crate::units::{Feet, Inches, SqFt};

/// Depth of the strip lost at the door opening (ft)
const DOOR_STRIP_FT: f64 = 0.5;

/// Wastage allowance for cuts and breakage
pub const WASTAGE_RATIO: f64 = 0.1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlooringInput {
    pub room_length_ft: f64,
    pub room_width_ft: f64,

    /// Door opening width (ft), 0 if none
    #[serde(default)]
    pub door_width_ft: f64,

    /// Count skirting tiles along the walls
    #[serde(default)]
    pub skirting: bool,

    pub tile_length_in: f64,
    pub tile_width_in: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlooringResult {
    pub tiles: f64,
    pub skirting_tiles: f64,
    pub extra_tiles: f64,
}

impl FlooringResult {
    /// Everything to order
    pub fn total_tiles(&self) -> f64 {
        self.tiles + self.skirting_tiles + self.extra_tiles
    }
}

impl FlooringInput {
    pub fn validate(&self) -> CostResult<()> {
        require_positive("room_length_ft", self.room_length_ft)?;
        require_positive("room_width_ft", self.room_width_ft)?;
        require_non_negative("door_width_ft", self.door_width_ft)?;
        require_positive("tile_length_in", self.tile_length_in)?;
        require_positive("tile_width_in", self.tile_width_in)
    }

    /// Area of one tile
    pub fn tile_area(&self) -> SqFt {
        let length: Feet = Inches(self.tile_length_in).into();
        let width: Feet = Inches(self.tile_width_in).into();
        length * width
    }
}

pub fn calculate(input: &FlooringInput) -> CostResult<FlooringResult> {
    input.validate()?;

    let floor_area = input.room_length_ft * input.room_width_ft - input.door_width_ft * DOOR_STRIP_FT;
    let tiles = (floor_area.max(0.0) / input.tile_area().0).ceil();

    let skirting_tiles = if input.skirting {
        let run = 2.0 * (input.room_length_ft + input.room_width_ft) - input.door_width_ft;
        let tile_length: Feet = Inches(input.tile_length_in).into();
        (run.max(0.0) / tile_length.0).ceil()
    } else {
        0.0
    };

    Ok(FlooringResult {
        tiles,
        skirting_tiles,
        extra_tiles: (tiles * WASTAGE_RATIO).ceil(),
    })
}
