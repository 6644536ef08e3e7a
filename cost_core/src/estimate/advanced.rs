//! # Advanced Mode
//!
//! Dimension and component driven estimate.
//!
//! - total area = length × width × floors
//! - total = baseline + windows + doors + kitchens + water tanks + parking
//! - material / labor are shares of the total (not the baseline)
//! - timeline = ceil(total area / `laborProductivityPerDay` / 30), at least 1
//!
//! Foundation, walls, electrical, plumbing, flooring, painting and plastering
//! are priced for the breakdown only. Painting and plastering are priced on
//! wall area, taken as 2.5 × floor area.

use std::collections::BTreeMap;

use crate::catalog::{AssumptionsCatalog, CatalogKey};
use crate::spec::{lenient, AdvancedSpec};
use crate::units::{Feet, SqFt};

use super::{CostCategory, DetailedEstimate, EstimateMode, MaterialQuantities};

/// Wall area per unit of floor area
pub const WALL_TO_FLOOR_AREA_RATIO: f64 = 2.5;

/// Working days per month for the timeline
pub const WORKING_DAYS_PER_MONTH: f64 = 30.0;

/// Covered area across all floors.
pub fn total_area(spec: &AdvancedSpec) -> SqFt {
    let length = Feet(lenient::clamp_non_negative(spec.length_ft));
    let width = Feet(lenient::clamp_non_negative(spec.width_ft));
    length * width * f64::from(spec.floors.max(1))
}

/// Months needed at the catalog's productivity rate, at least one.
pub fn timeline_months(total_area: SqFt, catalog: &AssumptionsCatalog) -> u32 {
    let days = total_area.0 / catalog.get(CatalogKey::LaborProductivityPerDay);
    let months = (days / WORKING_DAYS_PER_MONTH).ceil();
    if months.is_finite() {
        months.clamp(1.0, u32::MAX as f64) as u32
    } else {
        1
    }
}

/// Unrounded Advanced estimate; rounding and validation happen in `finish`.
pub(super) fn calculate(spec: &AdvancedSpec, catalog: &AssumptionsCatalog) -> DetailedEstimate {
    let total_area = total_area(spec);
    let area = total_area.0;
    let materials = MaterialQuantities::for_area(total_area, catalog);

    let each = |count: u32, key: CatalogKey| f64::from(count) * catalog.get(key);

    let windows = each(spec.windows, CatalogKey::WindowCost);
    let doors = each(spec.doors, CatalogKey::DoorCost);
    let kitchens = each(spec.kitchens, CatalogKey::KitchenBaseCost);
    let water_tanks = each(spec.tanks, CatalogKey::WaterTankCost);
    let parking = if spec.parking {
        catalog.get(CatalogKey::ParkingCost)
    } else {
        0.0
    };

    let breakdown = BTreeMap::from([
        (CostCategory::Foundation, area * catalog.get(CatalogKey::FoundationCostPerSqFt)),
        (CostCategory::Walls, materials.bricks * catalog.get(CatalogKey::BrickPrice)),
        (CostCategory::Electrical, area * catalog.get(CatalogKey::ElectricalCostPerSqFt)),
        (CostCategory::Plumbing, area * catalog.get(CatalogKey::PlumbingCostPerSqFt)),
        (CostCategory::Flooring, area * catalog.get(CatalogKey::FlooringCostPerSqFt)),
        (
            CostCategory::Painting,
            area * catalog.get(CatalogKey::PaintingCostPerSqFt) * WALL_TO_FLOOR_AREA_RATIO,
        ),
        (
            CostCategory::Plastering,
            area * catalog.get(CatalogKey::PlasteringCostPerSqFt) * WALL_TO_FLOOR_AREA_RATIO,
        ),
        (CostCategory::Windows, windows),
        (CostCategory::Doors, doors),
        (CostCategory::Kitchens, kitchens),
        (CostCategory::WaterTanks, water_tanks),
        (CostCategory::Parking, parking),
    ]);

    let base_cost = area * catalog.get(CatalogKey::PricePerSqFt);
    let total_cost = base_cost + windows + doors + kitchens + water_tanks + parking;

    DetailedEstimate {
        mode: EstimateMode::Advanced,
        total_area_sqft: area,
        base_cost,
        total_cost,
        material_cost: total_cost * catalog.get(CatalogKey::MaterialCostFactor),
        labor_cost: total_cost * catalog.get(CatalogKey::LaborCostFactor),
        timeline_months: timeline_months(total_area, catalog),
        breakdown,
        materials,
    }
}
