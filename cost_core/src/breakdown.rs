//! # Breakdown Series
//!
//! Chart-ready projections of a [`DetailedEstimate`]:
//!
//! - [`category_series`] - one point per cost category with a positive
//!   amount, in the fixed category order (never sorted by value)
//! - [`split_series`] - exactly two points, material then labor, present even
//!   when zero
//!
//! Each point carries a stable color so charts stay consistent between runs.
//!
//! ```rust
//! use cost_core::breakdown::{category_series, split_series};
//! use cost_core::catalog::AssumptionsCatalog;
//! use cost_core::estimate::estimate;
//! use cost_core::spec::{BasicSpec, ProjectSpecification};
//!
//! let spec = ProjectSpecification::Basic(BasicSpec::new(120.0));
//! let result = estimate(&spec, &AssumptionsCatalog::new()).unwrap();
//!
//! let keys: Vec<_> = category_series(&result).iter().map(|p| p.key).collect();
//! assert_eq!(keys, ["foundation", "electrical", "plumbing"]);
//! assert_eq!(split_series(&result).len(), 2);
//! ```

use serde::Serialize;

use crate::estimate::{CostCategory, DetailedEstimate};

pub const MATERIALS_KEY: &str = "materials";
pub const LABOR_KEY: &str = "labor";

/// A single labelled amount in a chart series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    /// Stable machine key
    pub key: &'static str,
    pub label: &'static str,
    pub amount: f64,
    /// Hex color, stable per key
    pub color: &'static str,
}

impl CostCategory {
    /// Chart color for this category
    pub fn color(&self) -> &'static str {
        match self {
            CostCategory::Foundation => "#3b82f6",
            CostCategory::Walls => "#10b981",
            CostCategory::Electrical => "#f59e0b",
            CostCategory::Plumbing => "#06b6d4",
            CostCategory::Flooring => "#8b5cf6",
            CostCategory::Painting => "#ef4444",
            CostCategory::Plastering => "#f97316",
            CostCategory::Windows => "#0ea5e9",
            CostCategory::Doors => "#6366f1",
            CostCategory::Kitchens => "#f43f5e",
            CostCategory::WaterTanks => "#14b8a6",
            CostCategory::Parking => "#6b7280",
        }
    }
}

/// Positive-amount categories in display order.
pub fn category_series(estimate: &DetailedEstimate) -> Vec<SeriesPoint> {
    CostCategory::ALL
        .iter()
        .filter_map(|category| {
            let amount = estimate.category(*category).unwrap_or(0.0);
            (amount > 0.0).then(|| SeriesPoint {
                key: category.key(),
                label: category.label(),
                amount,
                color: category.color(),
            })
        })
        .collect()
}

/// Material and labor shares, in that order.
pub fn split_series(estimate: &DetailedEstimate) -> [SeriesPoint; 2] {
    [
        SeriesPoint {
            key: MATERIALS_KEY,
            label: "Material Cost",
            amount: estimate.material_cost,
            color: "#8b5cf6",
        },
        SeriesPoint {
            key: LABOR_KEY,
            label: "Labor Cost",
            amount: estimate.labor_cost,
            color: "#2563eb",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::AssumptionsCatalog;
    use crate::estimate::estimate;
    use crate::spec::{AdvancedSpec, BasicSpec, ProjectSpecification};

    #[test]
    fn test_advanced_series_filters_zero_components() {
        let spec = AdvancedSpec {
            doors: 3,
            parking: true,
            ..AdvancedSpec::new(40.0, 30.0)
        };
        let result = estimate(&ProjectSpecification::Advanced(spec), &AssumptionsCatalog::new()).unwrap();
        let series = category_series(&result);

        let keys: Vec<_> = series.iter().map(|p| p.key).collect();
        assert_eq!(
            keys,
            [
                "foundation",
                "walls",
                "electrical",
                "plumbing",
                "flooring",
                "painting",
                "plastering",
                "doors",
                "parking"
            ]
        );
        assert!(series.iter().all(|p| p.amount > 0.0));
        assert_eq!(series[7].label, "Doors");
        assert_eq!(series[7].amount, 24_000.0);
    }

    #[test]
    fn test_series_keeps_category_order_not_value_order() {
        let spec = AdvancedSpec {
            kitchens: 40,
            ..AdvancedSpec::new(10.0, 10.0)
        };
        let result = estimate(&ProjectSpecification::Advanced(spec), &AssumptionsCatalog::new()).unwrap();
        let series = category_series(&result);
        assert_eq!(series.first().map(|p| p.key), Some("foundation"));
        assert_eq!(series.last().map(|p| p.key), Some("kitchens"));
        assert!(series.last().unwrap().amount > series[0].amount);
    }

    #[test]
    fn test_empty_estimate_has_empty_categories_but_full_split() {
        let result = estimate(&ProjectSpecification::Basic(BasicSpec::default()), &AssumptionsCatalog::new()).unwrap();
        assert!(category_series(&result).is_empty());

        let split = split_series(&result);
        assert_eq!(split[0].key, MATERIALS_KEY);
        assert_eq!(split[1].key, LABOR_KEY);
        assert_eq!(split[0].amount, 0.0);
        assert_eq!(split[1].amount, 0.0);
    }

    #[test]
    fn test_split_matches_estimate() {
        let result = estimate(&ProjectSpecification::Basic(BasicSpec::new(120.0)), &AssumptionsCatalog::new()).unwrap();
        let [material, labor] = split_series(&result);
        assert_eq!(material.amount, 1_417_500.0);
        assert_eq!(labor.amount, 607_500.0);
        assert_eq!(material.label, "Material Cost");
    }

    #[test]
    fn test_colors_are_distinct() {
        let mut colors: Vec<_> = CostCategory::ALL.iter().map(|c| c.color()).collect();
        colors.sort_unstable();
        colors.dedup();
        assert_eq!(colors.len(), CostCategory::ALL.len());
    }
}
