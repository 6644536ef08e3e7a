//! # Basic Mode
//!
//! Plot-size driven estimate.
//!
//! 1. plot area = plot size (sq yd) × 9
//! 2. built-up area = plot area × `builtUpAreaFactor` up to and including
//!    3600 sq ft (400 sq yd), × `largePlotFactor` above it
//! 3. total area = built-up area × floors
//! 4. baseline = total area × `pricePerSqFt`
//! 5. material / labor = baseline × `materialCostFactor` / `laborCostFactor`
//! 6. total = baseline + foundation (basement only) + `parkingCost` (garage only)
//!
//! Foundation, electrical and plumbing are always reported in the breakdown;
//! electrical and plumbing never feed the total.

use std::collections::BTreeMap;

use crate::catalog::{AssumptionsCatalog, CatalogKey};
use crate::spec::{lenient, BasicSpec, DEFAULT_TIMELINE_MONTHS};
use crate::units::{SqFt, SqYd};

use super::{CostCategory, DetailedEstimate, EstimateMode, MaterialQuantities};

/// Plots up to this size (inclusive) use the higher built-up factor
pub const LARGE_PLOT_THRESHOLD_SQFT: f64 = 3600.0;

/// Intermediate areas of a Basic estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BasicAreas {
    /// Whole plot
    pub plot_area: SqFt,
    /// Constructible area of one floor
    pub built_up_area: SqFt,
    /// Built-up area across all floors
    pub total_area: SqFt,
}

/// Derive plot, built-up and total areas.
pub fn areas(spec: &BasicSpec, catalog: &AssumptionsCatalog) -> BasicAreas {
    let plot_area: SqFt = SqYd(lenient::clamp_non_negative(spec.plot_size_sqyd)).into();
    let factor = if plot_area.0 <= LARGE_PLOT_THRESHOLD_SQFT {
        catalog.get(CatalogKey::BuiltUpAreaFactor)
    } else {
        catalog.get(CatalogKey::LargePlotFactor)
    };
    let built_up_area = plot_area * factor;
    BasicAreas {
        plot_area,
        built_up_area,
        total_area: built_up_area * f64::from(spec.floors.max(1)),
    }
}

/// Unrounded Basic estimate; rounding and validation happen in `finish`.
pub(super) fn calculate(spec: &BasicSpec, catalog: &AssumptionsCatalog) -> DetailedEstimate {
    let total_area = areas(spec, catalog).total_area;

    let base_cost = total_area.0 * catalog.get(CatalogKey::PricePerSqFt);
    let material_cost = base_cost * catalog.get(CatalogKey::MaterialCostFactor);
    let labor_cost = base_cost * catalog.get(CatalogKey::LaborCostFactor);

    let foundation = total_area.0 * catalog.get(CatalogKey::FoundationCostPerSqFt);
    let electrical = total_area.0 * catalog.get(CatalogKey::ElectricalCostPerSqFt);
    let plumbing = total_area.0 * catalog.get(CatalogKey::PlumbingCostPerSqFt);

    let mut total_cost = base_cost;
    if spec.basement {
        total_cost += foundation;
    }
    if spec.garage {
        total_cost += catalog.get(CatalogKey::ParkingCost);
    }

    let timeline_months = match spec.timeline_months {
        0 => DEFAULT_TIMELINE_MONTHS,
        months => months,
    };

    DetailedEstimate {
        mode: EstimateMode::Basic,
        total_area_sqft: total_area.0,
        base_cost,
        total_cost,
        material_cost,
        labor_cost,
        timeline_months,
        breakdown: BTreeMap::from([
            (CostCategory::Foundation, foundation),
            (CostCategory::Electrical, electrical),
            (CostCategory::Plumbing, plumbing),
        ]),
        materials: MaterialQuantities::for_area(total_area, catalog),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimate::estimate;
    use crate::spec::ProjectSpecification;

    fn run(spec: BasicSpec, catalog: &AssumptionsCatalog) -> DetailedEstimate {
        estimate(&ProjectSpecification::Basic(spec), catalog).unwrap()
    }

    #[test]
    fn test_default_catalog_scenario() {
        let catalog = AssumptionsCatalog::new();
        let spec = BasicSpec::new(120.0);

        let a = areas(&spec, &catalog);
        assert_eq!(a.plot_area, SqFt(1080.0));
        assert_eq!(a.built_up_area, SqFt(810.0));
        assert_eq!(a.total_area, SqFt(810.0));

        let result = run(spec, &catalog);
        assert_eq!(result.total_area_sqft, 810.0);
        assert_eq!(result.base_cost, 2_025_000.0);
        assert_eq!(result.material_cost, 1_417_500.0);
        assert_eq!(result.labor_cost, 607_500.0);
        assert_eq!(result.total_cost, 2_025_000.0);
        assert_eq!(result.timeline_months, 12);

        assert_eq!(result.category(CostCategory::Foundation), Some(405_000.0));
        assert_eq!(result.category(CostCategory::Electrical), Some(243_000.0));
        assert_eq!(result.category(CostCategory::Plumbing), Some(162_000.0));
        assert_eq!(result.breakdown.len(), 3);

        assert_eq!(result.materials.bricks, 6480.0);
        assert_eq!(result.materials.cement, 324.0);
        assert_eq!(result.materials.steel, 5.67);
        assert_eq!(result.materials.sand, 1458.0);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let catalog = AssumptionsCatalog::new();

        let at = areas(&BasicSpec::new(400.0), &catalog);
        assert_eq!(at.plot_area, SqFt(3600.0));
        assert_eq!(at.built_up_area, SqFt(2700.0));

        let above = areas(&BasicSpec::new(400.1), &catalog);
        assert!((above.built_up_area.0 - 3600.9 * 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_floors_never_decrease_area_or_cost() {
        let catalog = AssumptionsCatalog::new();
        let mut previous: Option<DetailedEstimate> = None;
        for floors in 1..=6 {
            let result = run(BasicSpec::new(250.0).with_floors(floors).with_garage(true), &catalog);
            if let Some(prev) = &previous {
                assert!(result.total_area_sqft >= prev.total_area_sqft);
                assert!(result.total_cost >= prev.total_cost);
            }
            previous = Some(result);
        }
    }

    #[test]
    fn test_basement_adds_foundation_only() {
        let catalog = AssumptionsCatalog::new();
        let plain = run(BasicSpec::new(120.0), &catalog);
        let with_basement = run(BasicSpec::new(120.0).with_basement(true), &catalog);

        assert_eq!(with_basement.total_cost, plain.total_cost + 405_000.0);
        // Shares stay fractions of the baseline
        assert_eq!(with_basement.material_cost, plain.material_cost);
        assert_eq!(with_basement.labor_cost, plain.labor_cost);
    }

    #[test]
    fn test_garage_adds_parking_cost() {
        let catalog = AssumptionsCatalog::new().with(CatalogKey::ParkingCost, 180_000.0);
        let result = run(BasicSpec::new(120.0).with_garage(true), &catalog);
        assert_eq!(result.total_cost, 2_025_000.0 + 180_000.0);
        assert_eq!(result.category(CostCategory::Parking), None);
    }

    #[test]
    fn test_timeline_passes_through() {
        let mut spec = BasicSpec::new(120.0);
        spec.set_timeline(18);
        let result = run(spec, &AssumptionsCatalog::new());
        assert_eq!(result.timeline_months, 18);
    }

    #[test]
    fn test_custom_factors() {
        let catalog = AssumptionsCatalog::new()
            .with(CatalogKey::BuiltUpAreaFactor, 0.6)
            .with(CatalogKey::MaterialCostFactor, 0.65)
            .with(CatalogKey::LaborCostFactor, 0.35);
        let result = run(BasicSpec::new(100.0), &catalog);
        assert_eq!(result.total_area_sqft, 540.0);
        assert_eq!(result.base_cost, 1_350_000.0);
        assert_eq!(result.material_cost, 877_500.0);
        assert_eq!(result.labor_cost, 472_500.0);
    }

    #[test]
    fn test_empty_plot_yields_zero_estimate() {
        let result = run(BasicSpec::default(), &AssumptionsCatalog::new());
        assert_eq!(result.total_area_sqft, 0.0);
        assert_eq!(result.total_cost, 0.0);
        assert_eq!(result.materials, MaterialQuantities::default());
        assert!(result.breakdown.values().all(|v| *v == 0.0));
    }
}
