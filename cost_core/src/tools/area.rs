//! # Area Calculator
//!
//! Area of common plane figures, in the square of whatever length unit the
//! dimensions use.
//!
//! ```rust
//! use cost_core::tools::area::{calculate, Shape};
//!
//! let area = calculate(&Shape::Trapezoid { base1: 10.0, base2: 6.0, height: 4.0 }).unwrap();
//! assert_eq!(area, 32.0);
//! ```

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use super::require_positive;
use crate::errors::CostResult;

/// Plane figure with its dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "lowercase")]
pub enum Shape {
    Rectangle { length: f64, width: f64 },
    Triangle { base: f64, height: f64 },
    Circle { radius: f64 },
    Trapezoid { base1: f64, base2: f64, height: f64 },
}

impl Shape {
    pub fn validate(&self) -> CostResult<()> {
        match *self {
            Shape::Rectangle { length, width } => {
                require_positive("length", length)?;
                require_positive("width", width)
            }
            Shape::Triangle { base, height } => {
                require_positive("base", base)?;
                require_positive("height", height)
            }
            Shape::Circle { radius } => require_positive("radius", radius),
            Shape::Trapezoid { base1, base2, height } => {
                require_positive("base1", base1)?;
                require_positive("base2", base2)?;
                require_positive("height", height)
            }
        }
    }
}

/// Area of the shape.
pub fn calculate(shape: &Shape) -> CostResult<f64> {
    shape.validate()?;
    Ok(match *shape {
        Shape::Rectangle { length, width } => length * width,
        Shape::Triangle { base, height } => base * height / 2.0,
        Shape::Circle { radius } => PI * radius * radius,
        Shape::Trapezoid { base1, base2, height } => (base1 + base2) * height / 2.0,
    })
}
