//! # Assumptions Catalog
//!
//! Named unit-cost and ratio parameters plus the location and quality factor
//! tables. The catalog is owned by the settings side of the application and
//! handed to the engine as a read-only snapshot.
//!
//! Every key has exactly one documented default, declared once in the
//! [`CatalogKey`] table. Lookups go through [`AssumptionsCatalog::get`], which
//! falls back to that default whenever the stored value is missing,
//! non-finite, or not strictly positive. A catalog can therefore carry any
//! subset of keys (or none) and the engine still runs.
//!
//! ## JSON Representation
//!
//! The persisted form is a flat JSON object with camelCase keys. Unknown keys
//! are ignored and a nested `"assumptions"` object is read as if its entries
//! were top-level, so both older and newer settings files load.
//!
//! ```rust
//! use cost_core::catalog::{AssumptionsCatalog, CatalogKey};
//!
//! let catalog = AssumptionsCatalog::from_json(r#"{
//!     "pricePerSqFt": 3000,
//!     "someFutureKey": "ignored",
//!     "assumptions": { "bricksPerSqFt": 9 }
//! }"#).unwrap();
//!
//! assert_eq!(catalog.get(CatalogKey::PricePerSqFt), 3000.0);
//! assert_eq!(catalog.get(CatalogKey::BricksPerSqFt), 9.0);
//! assert_eq!(catalog.get(CatalogKey::DoorCost), 8000.0); // default
//! ```

pub mod store;

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::trace;

use crate::errors::{CostError, CostResult};
use crate::spec::{LocationType, QualityLevel};

pub use store::{CatalogSnapshot, CatalogStore};

/// Catalog with every key explicitly set to its default.
pub static DEFAULT_CATALOG: Lazy<AssumptionsCatalog> = Lazy::new(AssumptionsCatalog::with_defaults);

/// JSON key of the location factor table
pub const LOCATION_FACTORS_KEY: &str = "locationFactors";

/// JSON key of the quality factor table
pub const QUALITY_FACTORS_KEY: &str = "qualityFactors";

/// Nested settings object read as top-level keys
const NESTED_ASSUMPTIONS_KEY: &str = "assumptions";

macro_rules! catalog_keys {
    ($( $(#[$doc:meta])* $variant:ident => $name:literal = $default:expr; )*) => {
        /// Recognized numeric catalog parameters.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub enum CatalogKey {
            $( $(#[$doc])* $variant, )*
        }

        impl CatalogKey {
            /// All keys in declaration order
            pub const ALL: &'static [CatalogKey] = &[$( CatalogKey::$variant, )*];

            /// JSON key name
            pub fn name(self) -> &'static str {
                match self {
                    $( CatalogKey::$variant => $name, )*
                }
            }

            /// Documented default used when the catalog omits the key
            pub fn default_value(self) -> f64 {
                match self {
                    $( CatalogKey::$variant => $default, )*
                }
            }

            /// Look up a key by its JSON name
            pub fn from_name(name: &str) -> Option<CatalogKey> {
                match name {
                    $( $name => Some(CatalogKey::$variant), )*
                    _ => None,
                }
            }
        }
    };
}

catalog_keys! {
    // Pricing
    /// Base construction rate per sq ft of covered area
    PricePerSqFt => "pricePerSqFt" = 2500.0;
    ElectricalCostPerSqFt => "electricalCostPerSqFt" = 300.0;
    PlumbingCostPerSqFt => "plumbingCostPerSqFt" = 200.0;
    /// Price per brick, used for the walls category
    BrickPrice => "brickPrice" = 30.0;
    LaborCostPerDay => "laborCostPerDay" = 1500.0;
    /// Per 50 kg bag
    CementPrice => "cementPrice" = 1200.0;
    /// Per ton
    SteelPrice => "steelPrice" = 250000.0;
    SandPrice => "sandPrice" = 5000.0;

    // Area and cost split
    /// Built-up share of plots up to 3600 sq ft
    BuiltUpAreaFactor => "builtUpAreaFactor" = 0.75;
    /// Built-up share of plots above 3600 sq ft
    LargePlotFactor => "largePlotFactor" = 0.5;
    MaterialCostFactor => "materialCostFactor" = 0.7;
    LaborCostFactor => "laborCostFactor" = 0.3;

    // Material ratios
    BricksPerSqFt => "bricksPerSqFt" = 8.0;
    CementBagsPerSqFt => "cementBagsPerSqFt" = 0.4;
    /// Tons of steel per sq ft
    SteelPerSqFt => "steelPerSqFt" = 0.007;
    /// Cubic feet of sand per cement bag
    SandPerBag => "sandPerBag" = 4.5;
    MortarPerBrick => "mortarPerBrick" = 0.001;
    /// Sq ft completed per day
    LaborProductivityPerDay => "laborProductivityPerDay" = 100.0;

    // Component unit costs
    FoundationCostPerSqFt => "foundationCostPerSqFt" = 500.0;
    FlooringCostPerSqFt => "flooringCostPerSqFt" = 150.0;
    PaintingCostPerSqFt => "paintingCostPerSqFt" = 15.0;
    PlasteringCostPerSqFt => "plasteringCostPerSqFt" = 30.0;
    WindowCost => "windowCost" = 10000.0;
    DoorCost => "doorCost" = 8000.0;
    KitchenBaseCost => "kitchenBaseCost" = 50000.0;
    WaterTankCost => "waterTankCost" = 40000.0;
    ParkingCost => "parkingCost" = 150000.0;

    // Extras carried by the settings screen
    FullEscapePremium => "fullEscapePremium" = 0.1;
    BasementCost => "basementCost" = 200000.0;
    GarageCost => "garageCost" = 150000.0;
    TimelineBaseCost => "timelineBaseCost" = 50000.0;
    TimelineFactorPerMonth => "timelineFactorPerMonth" = 0.02;
}

impl LocationType {
    /// Documented default location factor
    pub fn default_factor(self) -> f64 {
        match self {
            LocationType::Urban => 1.2,
            LocationType::Suburban => 1.0,
            LocationType::Rural => 0.8,
        }
    }
}

impl QualityLevel {
    /// Documented default quality factor
    pub fn default_factor(self) -> f64 {
        match self {
            QualityLevel::Standard => 1.0,
            QualityLevel::Premium => 1.3,
            QualityLevel::Luxury => 1.6,
        }
    }
}

/// A stored value is honored only if it is finite and strictly positive.
fn usable(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Sparse catalog of assumptions.
///
/// Only explicitly stored values are kept; everything else resolves to the
/// documented default at lookup time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct AssumptionsCatalog {
    values: BTreeMap<CatalogKey, f64>,
    location_factors: BTreeMap<LocationType, f64>,
    quality_factors: BTreeMap<QualityLevel, f64>,
}

impl AssumptionsCatalog {
    /// Empty catalog: every lookup yields its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog with every key explicitly populated with its default.
    pub fn with_defaults() -> Self {
        AssumptionsCatalog {
            values: CatalogKey::ALL.iter().map(|k| (*k, k.default_value())).collect(),
            location_factors: LocationType::ALL.iter().map(|l| (*l, l.default_factor())).collect(),
            quality_factors: QualityLevel::ALL.iter().map(|q| (*q, q.default_factor())).collect(),
        }
    }

    /// Parse a catalog from JSON text.
    ///
    /// Any JSON object is accepted; only text that is not a JSON object is
    /// rejected.
    pub fn from_json(text: &str) -> CostResult<Self> {
        serde_json::from_str(text).map_err(|e| CostError::invalid_catalog(e.to_string()))
    }

    /// Serialize the stored (sparse) values to pretty JSON.
    pub fn to_json(&self) -> CostResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Resolve a key: the stored value if usable, else its default.
    pub fn get(&self, key: CatalogKey) -> f64 {
        match self.values.get(&key) {
            Some(&value) if usable(value) => value,
            stored => {
                trace!(key = key.name(), ?stored, "catalog key defaulted");
                key.default_value()
            }
        }
    }

    /// The stored value, if any, without defaulting.
    pub fn explicit(&self, key: CatalogKey) -> Option<f64> {
        self.values.get(&key).copied()
    }

    /// Resolve a location factor.
    pub fn location_factor(&self, location: LocationType) -> f64 {
        match self.location_factors.get(&location) {
            Some(&value) if usable(value) => value,
            _ => location.default_factor(),
        }
    }

    /// Resolve a quality factor.
    pub fn quality_factor(&self, quality: QualityLevel) -> f64 {
        match self.quality_factors.get(&quality) {
            Some(&value) if usable(value) => value,
            _ => quality.default_factor(),
        }
    }

    pub fn set(&mut self, key: CatalogKey, value: f64) {
        self.values.insert(key, value);
    }

    pub fn remove(&mut self, key: CatalogKey) -> Option<f64> {
        self.values.remove(&key)
    }

    pub fn set_location_factor(&mut self, location: LocationType, value: f64) {
        self.location_factors.insert(location, value);
    }

    pub fn set_quality_factor(&mut self, quality: QualityLevel, value: f64) {
        self.quality_factors.insert(quality, value);
    }

    /// Builder-style `set`
    pub fn with(mut self, key: CatalogKey, value: f64) -> Self {
        self.set(key, value);
        self
    }

    /// Number of explicitly stored entries (keys and factor table entries)
    pub fn len(&self) -> usize {
        self.values.len() + self.location_factors.len() + self.quality_factors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Overlay every entry present in `patch` onto this catalog.
    ///
    /// Factor tables merge per entry, so a patch that only sets
    /// `locationFactors.rural` leaves urban and suburban as they were.
    pub fn merge(&mut self, patch: &AssumptionsCatalog) {
        self.values.extend(patch.values.iter().map(|(k, v)| (*k, *v)));
        self.location_factors
            .extend(patch.location_factors.iter().map(|(k, v)| (*k, *v)));
        self.quality_factors
            .extend(patch.quality_factors.iter().map(|(k, v)| (*k, *v)));
    }

    /// Fully-populated copy holding the effective value of every key.
    pub fn resolved(&self) -> AssumptionsCatalog {
        AssumptionsCatalog {
            values: CatalogKey::ALL.iter().map(|k| (*k, self.get(*k))).collect(),
            location_factors: LocationType::ALL
                .iter()
                .map(|l| (*l, self.location_factor(*l)))
                .collect(),
            quality_factors: QualityLevel::ALL
                .iter()
                .map(|q| (*q, self.quality_factor(*q)))
                .collect(),
        }
    }

    /// Effective values as (name, value) pairs in declaration order.
    pub fn effective_values(&self) -> Vec<(&'static str, f64)> {
        CatalogKey::ALL.iter().map(|k| (k.name(), self.get(*k))).collect()
    }

    fn read_object(&mut self, object: Map<String, Value>) {
        for (name, value) in object {
            if name == NESTED_ASSUMPTIONS_KEY {
                if let Value::Object(nested) = value {
                    self.read_object(nested);
                }
                continue;
            }
            if name == LOCATION_FACTORS_KEY {
                read_factor_table(value, &mut self.location_factors, LocationType::from_name);
                continue;
            }
            if name == QUALITY_FACTORS_KEY {
                read_factor_table(value, &mut self.quality_factors, QualityLevel::from_name);
                continue;
            }
            match (CatalogKey::from_name(&name), number(&value)) {
                (Some(key), Some(number)) => {
                    self.values.insert(key, number);
                }
                (Some(key), None) => trace!(key = key.name(), "non-numeric catalog value ignored"),
                (None, _) => trace!(key = %name, "unrecognized catalog key ignored"),
            }
        }
    }
}

fn number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn read_factor_table<K: Ord>(value: Value, table: &mut BTreeMap<K, f64>, parse: fn(&str) -> Option<K>) {
    let Value::Object(entries) = value else {
        return;
    };
    for (name, value) in entries {
        if let (Some(key), Some(number)) = (parse(&name), number(&value)) {
            table.insert(key, number);
        }
    }
}

impl From<Map<String, Value>> for AssumptionsCatalog {
    fn from(object: Map<String, Value>) -> Self {
        let mut catalog = AssumptionsCatalog::new();
        catalog.read_object(object);
        catalog
    }
}

impl From<AssumptionsCatalog> for Map<String, Value> {
    fn from(catalog: AssumptionsCatalog) -> Self {
        let mut object = Map::new();
        for (key, value) in &catalog.values {
            object.insert(key.name().to_string(), Value::from(*value));
        }
        if !catalog.location_factors.is_empty() {
            let table = catalog
                .location_factors
                .iter()
                .map(|(k, v)| (k.name().to_string(), Value::from(*v)))
                .collect();
            object.insert(LOCATION_FACTORS_KEY.to_string(), Value::Object(table));
        }
        if !catalog.quality_factors.is_empty() {
            let table = catalog
                .quality_factors
                .iter()
                .map(|(k, v)| (k.name().to_string(), Value::from(*v)))
                .collect();
            object.insert(QUALITY_FACTORS_KEY.to_string(), Value::Object(table));
        }
        object
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_defaults() {
        let catalog = AssumptionsCatalog::new();
        let expected = [
            (CatalogKey::BuiltUpAreaFactor, 0.75),
            (CatalogKey::LargePlotFactor, 0.5),
            (CatalogKey::MaterialCostFactor, 0.7),
            (CatalogKey::LaborCostFactor, 0.3),
            (CatalogKey::BricksPerSqFt, 8.0),
            (CatalogKey::CementBagsPerSqFt, 0.4),
            (CatalogKey::SteelPerSqFt, 0.007),
            (CatalogKey::SandPerBag, 4.5),
            (CatalogKey::FoundationCostPerSqFt, 500.0),
            (CatalogKey::FlooringCostPerSqFt, 150.0),
            (CatalogKey::PaintingCostPerSqFt, 15.0),
            (CatalogKey::PlasteringCostPerSqFt, 30.0),
            (CatalogKey::WindowCost, 10000.0),
            (CatalogKey::DoorCost, 8000.0),
            (CatalogKey::KitchenBaseCost, 50000.0),
            (CatalogKey::WaterTankCost, 40000.0),
            (CatalogKey::ParkingCost, 150000.0),
            (CatalogKey::LaborProductivityPerDay, 100.0),
            (CatalogKey::PricePerSqFt, 2500.0),
            (CatalogKey::ElectricalCostPerSqFt, 300.0),
            (CatalogKey::PlumbingCostPerSqFt, 200.0),
            (CatalogKey::BrickPrice, 30.0),
        ];
        for (key, value) in expected {
            assert_eq!(catalog.get(key), value, "default for {}", key.name());
        }
        assert_eq!(catalog.location_factor(LocationType::Urban), 1.2);
        assert_eq!(catalog.quality_factor(QualityLevel::Luxury), 1.6);
    }

    #[test]
    fn test_unusable_values_fall_back() {
        let mut catalog = AssumptionsCatalog::new();
        catalog.set(CatalogKey::PricePerSqFt, 0.0);
        catalog.set(CatalogKey::DoorCost, f64::NAN);
        catalog.set(CatalogKey::WindowCost, -10.0);
        catalog.set(CatalogKey::BrickPrice, 35.0);

        assert_eq!(catalog.get(CatalogKey::PricePerSqFt), 2500.0);
        assert_eq!(catalog.get(CatalogKey::DoorCost), 8000.0);
        assert_eq!(catalog.get(CatalogKey::WindowCost), 10000.0);
        assert_eq!(catalog.get(CatalogKey::BrickPrice), 35.0);
        assert_eq!(catalog.explicit(CatalogKey::PricePerSqFt), Some(0.0));
    }

    #[test]
    fn test_key_names_roundtrip() {
        for key in CatalogKey::ALL {
            assert_eq!(CatalogKey::from_name(key.name()), Some(*key));
            let json = serde_json::to_string(key).unwrap();
            assert_eq!(json, format!("\"{}\"", key.name()));
        }
    }

    #[test]
    fn test_schema_drift_tolerated() {
        let json = r#"{
            "siteName": "Construction Calculator Pro",
            "pricePerSqFt": "2800",
            "brickPrice": "expensive",
            "newerKey": { "nested": true },
            "assumptions": {
                "steelPerSqFt": 0.008,
                "locationFactors": { "rural": 0.7, "island": 2.0 },
                "qualityFactors": { "premium": "1.4" }
            }
        }"#;
        let catalog = AssumptionsCatalog::from_json(json).unwrap();
        assert_eq!(catalog.get(CatalogKey::PricePerSqFt), 2800.0);
        assert_eq!(catalog.get(CatalogKey::BrickPrice), 30.0);
        assert_eq!(catalog.get(CatalogKey::SteelPerSqFt), 0.008);
        assert_eq!(catalog.location_factor(LocationType::Rural), 0.7);
        assert_eq!(catalog.location_factor(LocationType::Urban), 1.2);
        assert_eq!(catalog.quality_factor(QualityLevel::Premium), 1.4);
    }

    #[test]
    fn test_non_object_rejected() {
        let err = AssumptionsCatalog::from_json("[1, 2, 3]").unwrap_err();
        assert_eq!(err.error_code(), "INVALID_CATALOG");
        assert!(AssumptionsCatalog::from_json("{}").unwrap().is_empty());
    }

    #[test]
    fn test_merge_overlays_entries() {
        let mut base = AssumptionsCatalog::new().with(CatalogKey::DoorCost, 9000.0);
        base.set_location_factor(LocationType::Urban, 1.5);

        let mut patch = AssumptionsCatalog::new().with(CatalogKey::WindowCost, 12000.0);
        patch.set_location_factor(LocationType::Rural, 0.6);

        base.merge(&patch);
        assert_eq!(base.get(CatalogKey::DoorCost), 9000.0);
        assert_eq!(base.get(CatalogKey::WindowCost), 12000.0);
        assert_eq!(base.location_factor(LocationType::Urban), 1.5);
        assert_eq!(base.location_factor(LocationType::Rural), 0.6);
    }

    #[test]
    fn test_resolved_matches_default_catalog() {
        assert_eq!(AssumptionsCatalog::new().resolved(), *DEFAULT_CATALOG);
        assert_eq!(DEFAULT_CATALOG.len(), CatalogKey::ALL.len() + 6);
    }

    #[test]
    fn test_json_roundtrip() {
        let mut catalog = AssumptionsCatalog::new().with(CatalogKey::ParkingCost, 175000.0);
        catalog.set_quality_factor(QualityLevel::Standard, 1.1);
        let json = catalog.to_json().unwrap();
        assert!(json.contains("\"parkingCost\""));
        assert!(json.contains("\"qualityFactors\""));
        assert!(!json.contains("\"locationFactors\""));

        let roundtrip = AssumptionsCatalog::from_json(&json).unwrap();
        assert_eq!(catalog, roundtrip);
    }
}
