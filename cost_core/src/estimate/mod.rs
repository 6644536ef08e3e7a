//! # Cost Estimation
//!
//! Turns a [`ProjectSpecification`] and an [`AssumptionsCatalog`] into an
//! itemized [`DetailedEstimate`]. The calculation is a pure function of its
//! two inputs: no I/O, no shared state, same inputs give bit-identical output.
//!
//! The two modes price differently:
//!
//! - **Basic** ([`basic`]): total = baseline + foundation (if basement) +
//!   parking (if garage). Material and labor are shares of the baseline.
//!   Foundation, electrical and plumbing appear in the breakdown regardless.
//! - **Advanced** ([`advanced`]): total = baseline + windows + doors + kitchens
//!   + water tanks + parking. Material and labor are shares of the total.
//!   Foundation, walls, electrical, plumbing, flooring, painting and
//!   plastering are reported in the breakdown but are not added to the total.
//!
//! The asymmetry between the two totals is kept as-is; both behaviors are
//! covered by tests.
//!
//! ## Example
//!
//! ```rust
//! use cost_core::catalog::AssumptionsCatalog;
//! use cost_core::estimate::estimate;
//! use cost_core::spec::{BasicSpec, ProjectSpecification};
//!
//! let spec = ProjectSpecification::Basic(BasicSpec::new(120.0));
//! let result = estimate(&spec, &AssumptionsCatalog::new()).unwrap();
//!
//! assert_eq!(result.total_area_sqft, 810.0);
//! assert_eq!(result.total_cost, 2_025_000.0);
//! assert_eq!(result.material_cost, 1_417_500.0);
//! assert_eq!(result.labor_cost, 607_500.0);
//! ```

pub mod advanced;
pub mod basic;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::catalog::{AssumptionsCatalog, CatalogKey};
use crate::errors::{CostError, CostResult};
use crate::spec::ProjectSpecification;
use crate::units::{ceil_count, round2, SqFt};

/// Compute a detailed estimate.
///
/// Never fails on bad or missing numbers: those degrade to zero (or the
/// documented minimum) and missing catalog keys resolve to defaults. The only
/// error is [`CostError::CalculationFailed`], raised when the arithmetic
/// overflows to a non-finite value. No partial estimate is returned.
pub fn estimate(spec: &ProjectSpecification, catalog: &AssumptionsCatalog) -> CostResult<DetailedEstimate> {
    let raw = match spec {
        ProjectSpecification::Basic(basic) => basic::calculate(basic, catalog),
        ProjectSpecification::Advanced(advanced) => advanced::calculate(advanced, catalog),
    };

    match raw.finish() {
        Ok(result) => {
            debug!(
                mode = spec.mode(),
                total_area_sqft = result.total_area_sqft,
                total_cost = result.total_cost,
                timeline_months = result.timeline_months,
                "estimate computed"
            );
            Ok(result)
        }
        Err(err) => {
            warn!(mode = spec.mode(), error = %err, "estimate failed");
            Err(err)
        }
    }
}

/// Which pricing rules produced an estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EstimateMode {
    Basic,
    Advanced,
}

impl EstimateMode {
    pub fn name(&self) -> &'static str {
        match self {
            EstimateMode::Basic => "basic",
            EstimateMode::Advanced => "advanced",
        }
    }
}

/// Named cost components shown in the breakdown.
///
/// Declaration order is the display order; the derived `Ord` relies on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CostCategory {
    Foundation,
    Walls,
    Electrical,
    Plumbing,
    Flooring,
    Painting,
    Plastering,
    Windows,
    Doors,
    Kitchens,
    WaterTanks,
    Parking,
}

impl CostCategory {
    /// All categories in display order
    pub const ALL: [CostCategory; 12] = [
        CostCategory::Foundation,
        CostCategory::Walls,
        CostCategory::Electrical,
        CostCategory::Plumbing,
        CostCategory::Flooring,
        CostCategory::Painting,
        CostCategory::Plastering,
        CostCategory::Windows,
        CostCategory::Doors,
        CostCategory::Kitchens,
        CostCategory::WaterTanks,
        CostCategory::Parking,
    ];

    /// Machine key (matches the JSON form)
    pub fn key(&self) -> &'static str {
        match self {
            CostCategory::Foundation => "foundation",
            CostCategory::Walls => "walls",
            CostCategory::Electrical => "electrical",
            CostCategory::Plumbing => "plumbing",
            CostCategory::Flooring => "flooring",
            CostCategory::Painting => "painting",
            CostCategory::Plastering => "plastering",
            CostCategory::Windows => "windows",
            CostCategory::Doors => "doors",
            CostCategory::Kitchens => "kitchens",
            CostCategory::WaterTanks => "waterTanks",
            CostCategory::Parking => "parking",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            CostCategory::Foundation => "Foundation",
            CostCategory::Walls => "Walls",
            CostCategory::Electrical => "Electrical",
            CostCategory::Plumbing => "Plumbing",
            CostCategory::Flooring => "Flooring",
            CostCategory::Painting => "Painting",
            CostCategory::Plastering => "Plastering",
            CostCategory::Windows => "Windows",
            CostCategory::Doors => "Doors",
            CostCategory::Kitchens => "Kitchens",
            CostCategory::WaterTanks => "Water Tanks",
            CostCategory::Parking => "Parking",
        }
    }
}

/// Bulk material quantities for the whole building.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MaterialQuantities {
    /// Bricks (pieces)
    pub bricks: f64,
    /// Cement (bags)
    pub cement: f64,
    /// Steel (tons)
    pub steel: f64,
    /// Sand (cubic feet)
    pub sand: f64,
}

impl MaterialQuantities {
    /// Unrounded quantities for a covered area. Linear in `total_area`.
    pub fn for_area(total_area: SqFt, catalog: &AssumptionsCatalog) -> Self {
        let cement = total_area.0 * catalog.get(CatalogKey::CementBagsPerSqFt);
        MaterialQuantities {
            bricks: total_area.0 * catalog.get(CatalogKey::BricksPerSqFt),
            cement,
            steel: total_area.0 * catalog.get(CatalogKey::SteelPerSqFt),
            sand: cement * catalog.get(CatalogKey::SandPerBag),
        }
    }

    /// Whole bricks, bags and cubic feet rounded up; steel to 0.01 ton.
    pub fn rounded(&self) -> Self {
        MaterialQuantities {
            bricks: ceil_count(self.bricks),
            cement: ceil_count(self.cement),
            steel: round2(self.steel),
            sand: ceil_count(self.sand),
        }
    }

    fn all_finite(&self) -> bool {
        [self.bricks, self.cement, self.steel, self.sand]
            .iter()
            .all(|v| v.is_finite())
    }
}

/// The itemized result of an estimate.
///
/// ## JSON Example
///
/// ```json
/// {
///   "mode": "basic",
///   "total_area_sqft": 810.0,
///   "base_cost": 2025000.0,
///   "total_cost": 2025000.0,
///   "material_cost": 1417500.0,
///   "labor_cost": 607500.0,
///   "timeline_months": 12,
///   "breakdown": { "foundation": 405000.0, "electrical": 243000.0, "plumbing": 162000.0 },
///   "materials": { "bricks": 6480.0, "cement": 324.0, "steel": 5.67, "sand": 1458.0 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailedEstimate {
    pub mode: EstimateMode,

    /// Covered area across all floors (sq ft)
    pub total_area_sqft: f64,

    /// Covered area times the base rate
    pub base_cost: f64,

    pub total_cost: f64,

    pub material_cost: f64,

    pub labor_cost: f64,

    pub timeline_months: u32,

    /// Per-category amounts. Sparse: only categories the mode computes.
    pub breakdown: BTreeMap<CostCategory, f64>,

    pub materials: MaterialQuantities,
}

impl DetailedEstimate {
    /// Amount for a category, if the mode computed it
    pub fn category(&self, category: CostCategory) -> Option<f64> {
        self.breakdown.get(&category).copied()
    }

    /// Sum of all breakdown amounts (generally not equal to `total_cost`)
    pub fn breakdown_sum(&self) -> f64 {
        round2(self.breakdown.values().sum())
    }

    /// Round and validate a freshly computed estimate.
    ///
    /// Validation runs on the rounded values, which are the ones returned.
    fn finish(self) -> CostResult<DetailedEstimate> {
        let rounded = DetailedEstimate {
            mode: self.mode,
            total_area_sqft: round2(self.total_area_sqft),
            base_cost: round2(self.base_cost),
            total_cost: round2(self.total_cost),
            material_cost: round2(self.material_cost),
            labor_cost: round2(self.labor_cost),
            timeline_months: self.timeline_months,
            breakdown: self
                .breakdown
                .into_iter()
                .map(|(category, amount)| (category, round2(amount)))
                .collect(),
            materials: self.materials.rounded(),
        };
        rounded.check_finite()?;
        Ok(rounded)
    }

    fn check_finite(&self) -> CostResult<()> {
        let scalars = [
            ("total_area_sqft", self.total_area_sqft),
            ("base_cost", self.base_cost),
            ("total_cost", self.total_cost),
            ("material_cost", self.material_cost),
            ("labor_cost", self.labor_cost),
        ];
        if let Some((field, value)) = scalars.iter().find(|(_, v)| !v.is_finite()) {
            return Err(CostError::calculation_failed(
                self.mode.name(),
                format!("{} is not finite ({})", field, value),
            ));
        }
        if let Some((category, value)) = self.breakdown.iter().find(|(_, v)| !v.is_finite()) {
            return Err(CostError::calculation_failed(
                self.mode.name(),
                format!("{} cost is not finite ({})", category.key(), value),
            ));
        }
        if !self.materials.all_finite() {
            return Err(CostError::calculation_failed(
                self.mode.name(),
                "material quantities are not finite",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::{AdvancedSpec, BasicSpec};

    fn basic(plot_sqyd: f64) -> ProjectSpecification {
        ProjectSpecification::Basic(BasicSpec::new(plot_sqyd))
    }

    #[test]
    fn test_determinism_and_idempotence() {
        let catalog = AssumptionsCatalog::new().with(CatalogKey::PricePerSqFt, 2731.37);
        let spec = ProjectSpecification::Advanced(AdvancedSpec {
            doors: 7,
            windows: 11,
            tanks: 2,
            parking: true,
            ..AdvancedSpec::new(37.3, 28.9)
        });

        let first = estimate(&spec, &catalog).unwrap();
        for _ in 0..10 {
            let again = estimate(&spec, &catalog).unwrap();
            assert_eq!(first, again);
            assert_eq!(first.total_cost.to_bits(), again.total_cost.to_bits());
        }
    }

    #[test]
    fn test_materials_scale_linearly() {
        let catalog = AssumptionsCatalog::new();
        let single = MaterialQuantities::for_area(SqFt(500.0), &catalog);
        let triple = MaterialQuantities::for_area(SqFt(1500.0), &catalog);

        assert!((triple.bricks - 3.0 * single.bricks).abs() < 1e-6);
        assert!((triple.cement - 3.0 * single.cement).abs() < 1e-6);
        assert!((triple.steel - 3.0 * single.steel).abs() < 1e-9);
        assert!((triple.sand - 3.0 * single.sand).abs() < 1e-6);
    }

    #[test]
    fn test_material_rounding() {
        let raw = MaterialQuantities {
            bricks: 6480.2,
            cement: 324.000_000_000_000_06,
            steel: 5.674,
            sand: 1457.1,
        };
        let rounded = raw.rounded();
        assert_eq!(rounded.bricks, 6481.0);
        assert_eq!(rounded.cement, 324.0);
        assert_eq!(rounded.steel, 5.67);
        assert_eq!(rounded.sand, 1458.0);
    }

    #[test]
    fn test_overflow_is_calculation_failure() {
        let catalog = AssumptionsCatalog::new().with(CatalogKey::PricePerSqFt, f64::MAX);
        let err = estimate(&basic(120.0), &catalog).unwrap_err();
        assert_eq!(err.error_code(), "CALCULATION_FAILED");
        assert!(err.is_calculation_fault());
    }

    #[test]
    fn test_huge_finite_rates_round_to_finite_output() {
        let catalog = AssumptionsCatalog::new().with(CatalogKey::PricePerSqFt, 1e305);
        let result = estimate(&basic(120.0), &catalog).unwrap();
        assert!(result.base_cost.is_finite());
        assert!(result.total_cost.is_finite());
        assert!(result.material_cost.is_finite());
        assert!((result.total_cost / 8.1e307 - 1.0).abs() < 1e-12);

        let catalog = AssumptionsCatalog::new().with(CatalogKey::BricksPerSqFt, 1e300);
        let result = estimate(&basic(120.0), &catalog).unwrap();
        assert!(result.materials.bricks.is_finite());
        let json = serde_json::to_string(&result).unwrap();
        assert!(!json.contains("null"));
    }

    #[test]
    fn test_non_finite_spec_fields_degrade() {
        let spec = ProjectSpecification::Basic(BasicSpec {
            plot_size_sqyd: f64::NAN,
            floors: 0,
            timeline_months: 0,
            ..BasicSpec::default()
        });
        let result = estimate(&spec, &AssumptionsCatalog::new()).unwrap();
        assert_eq!(result.total_area_sqft, 0.0);
        assert_eq!(result.total_cost, 0.0);
        assert_eq!(result.timeline_months, 12);
    }

    #[test]
    fn test_category_order_and_keys() {
        let mut sorted = CostCategory::ALL;
        sorted.sort();
        assert_eq!(sorted, CostCategory::ALL);

        for category in CostCategory::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.key()));
        }
    }

    #[test]
    fn test_breakdown_sum_differs_from_total() {
        let result = estimate(&basic(120.0), &AssumptionsCatalog::new()).unwrap();
        assert_eq!(result.breakdown_sum(), 810_000.0);
        assert_eq!(result.total_cost, 2_025_000.0);
        assert_eq!(result.category(CostCategory::Walls), None);
    }

    #[test]
    fn test_estimate_serialization() {
        let result = estimate(&basic(120.0), &AssumptionsCatalog::new()).unwrap();
        let json = serde_json::to_string_pretty(&result).unwrap();
        assert!(json.contains("\"mode\": \"basic\""));
        assert!(json.contains("\"foundation\""));
        assert!(json.contains("\"total_area_sqft\""));

        let roundtrip: DetailedEstimate = serde_json::from_str(&json).unwrap();
        assert_eq!(result, roundtrip);
    }
}
