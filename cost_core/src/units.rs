//! # Unit Types
//!
//! Type-safe wrappers for the handful of units the estimator works in.
//! Plain `f64` newtypes so JSON stays clean (just numbers).
//!
//! ## Units
//!
//! - Length: feet (ft), inches (in)
//! - Area: square yards (sq yd, plot sizes), square feet (sq ft, built area)
//! - Volume: cubic feet (cu ft), liters (L)
//!
//! ## Example
//!
//! ```rust
//! use cost_core::units::{SqFt, SqYd};
//!
//! let plot = SqYd(120.0);
//! let area: SqFt = plot.into();
//! assert_eq!(area.0, 1080.0);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul};

/// Square feet per square yard
pub const SQFT_PER_SQYD: f64 = 9.0;

/// Liters per cubic foot
pub const LITERS_PER_CUFT: f64 = 28.317;

// ============================================================================
// Length Units
// ============================================================================

/// Length in feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feet(pub f64);

/// Length in inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inches(pub f64);

impl From<Inches> for Feet {
    fn from(inches: Inches) -> Self {
        Feet(inches.0 / 12.0)
    }
}

// ============================================================================
// Area Units
// ============================================================================

/// Area in square yards
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqYd(pub f64);

/// Area in square feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqFt(pub f64);

impl From<SqYd> for SqFt {
    fn from(sqyd: SqYd) -> Self {
        SqFt(sqyd.0 * SQFT_PER_SQYD)
    }
}

impl Mul<Feet> for Feet {
    type Output = SqFt;
    fn mul(self, rhs: Feet) -> SqFt {
        SqFt(self.0 * rhs.0)
    }
}

// ============================================================================
// Volume Units
// ============================================================================

/// Volume in cubic feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CuFt(pub f64);

/// Volume in liters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Liters(pub f64);

impl From<CuFt> for Liters {
    fn from(cuft: CuFt) -> Self {
        Liters(cuft.0 * LITERS_PER_CUFT)
    }
}

impl Mul<Feet> for SqFt {
    type Output = CuFt;
    fn mul(self, rhs: Feet) -> CuFt {
        CuFt(self.0 * rhs.0)
    }
}

impl Add for SqFt {
    type Output = SqFt;
    fn add(self, rhs: SqFt) -> SqFt {
        SqFt(self.0 + rhs.0)
    }
}

/// Scale an area, e.g. by a built-up factor or a floor count
impl Mul<f64> for SqFt {
    type Output = SqFt;
    fn mul(self, rhs: f64) -> SqFt {
        SqFt(self.0 * rhs)
    }
}

// ============================================================================
// Rounding
// ============================================================================

/// Round to `places` decimals, half away from zero.
///
/// Values too large to scale are returned unchanged; above 2^52 every f64
/// is already a whole number.
pub fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    let scaled = value * scale;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / scale
}

/// Round a currency or area figure to 2 decimals.
pub fn round2(value: f64) -> f64 {
    round_to(value, 2)
}

/// Round a physical count up to whole units.
///
/// Float noise below 1e-6 is trimmed first so that e.g. `324.00000000000006`
/// bags stays 324 rather than becoming 325.
pub fn ceil_count(value: f64) -> f64 {
    round_to(value, 6).ceil()
}
