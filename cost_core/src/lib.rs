//! # cost_core - Construction Cost Estimation Engine
//!
//! `cost_core` is the computational heart of Buildcost. It converts a small
//! project specification plus a configurable catalog of unit-cost assumptions
//! into an itemized cost and material estimate.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: `estimate` is a pure function of (spec, catalog)
//! - **Degrade, don't fail**: bad numbers become zero, missing catalog keys
//!   become documented defaults
//! - **JSON-First**: inputs and outputs implement Serialize/Deserialize
//! - **Snapshot configuration**: the catalog is passed in explicitly and
//!   replaced copy-on-write, never mutated under a reader
//!
//! ## Quick Start
//!
//! ```rust
//! use cost_core::{estimate, AssumptionsCatalog, AdvancedSpec, ProjectSpecification};
//! use cost_core::breakdown::category_series;
//!
//! let spec = ProjectSpecification::Advanced(AdvancedSpec::new(40.0, 30.0));
//! let result = estimate(&spec, &AssumptionsCatalog::new()).unwrap();
//!
//! assert_eq!(result.total_area_sqft, 1200.0);
//! assert_eq!(result.total_cost, 3_000_000.0);
//! assert_eq!(result.timeline_months, 1);
//!
//! for point in category_series(&result) {
//!     println!("{:<12} {:>12.2}", point.label, point.amount);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`spec`] - Project specification (Basic / Advanced)
//! - [`catalog`] - Assumptions catalog, key defaults, copy-on-write store
//! - [`estimate`] - The estimation engine and its result types
//! - [`breakdown`] - Chart-ready category and material/labor series
//! - [`tools`] - Standalone site calculators (paint, tiles, tanks, ...)
//! - [`units`] - Type-safe unit wrappers and rounding helpers
//! - [`errors`] - Structured error types

pub mod breakdown;
pub mod catalog;
pub mod errors;
pub mod estimate;
pub mod spec;
pub mod tools;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use catalog::{AssumptionsCatalog, CatalogKey, CatalogStore};
pub use errors::{CostError, CostResult};
pub use estimate::{estimate, CostCategory, DetailedEstimate, MaterialQuantities};
pub use spec::{AdvancedSpec, BasicSpec, ProjectSpecification};
