//! # Project Specification
//!
//! The user's description of what is being built, in one of two modes:
//!
//! - [`BasicSpec`] - plot size plus a few yes/no extras; area is derived from
//!   the plot using the built-up area factors
//! - [`AdvancedSpec`] - explicit footprint in feet plus itemized openings,
//!   kitchens, tanks and parking
//!
//! Specs are edited live, one field at a time, by an input form. Every numeric
//! field therefore degrades instead of failing: unparsable, empty or
//! non-finite values become 0, negatives clamp to 0, and `floors` (and the
//! Basic `timeline_months`) never drop below their documented minimum.
//!
//! ## JSON Example
//!
//! ```json
//! { "mode": "basic", "plot_size_sqyd": 120, "floors": 2, "garage": true }
//! ```
//!
//! ```rust
//! use cost_core::spec::ProjectSpecification;
//!
//! let spec: ProjectSpecification = serde_json::from_str(
//!     r#"{ "mode": "basic", "plot_size_sqyd": "120", "floors": 0 }"#,
//! ).unwrap();
//!
//! let ProjectSpecification::Basic(basic) = spec else { unreachable!() };
//! assert_eq!(basic.plot_size_sqyd, 120.0);
//! assert_eq!(basic.floors, 1);
//! assert_eq!(basic.timeline_months, 12);
//! ```

use serde::{Deserialize, Serialize};

use crate::units::{Feet, SqFt};

/// Timeline used by Basic mode when none (or zero) is given
pub const DEFAULT_TIMELINE_MONTHS: u32 = 12;

/// Tagged union of the two estimation modes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum ProjectSpecification {
    /// Plot-size driven estimate
    Basic(BasicSpec),
    /// Dimension and component driven estimate
    Advanced(AdvancedSpec),
}

impl ProjectSpecification {
    /// Mode name as used in the JSON tag
    pub fn mode(&self) -> &'static str {
        match self {
            ProjectSpecification::Basic(_) => "basic",
            ProjectSpecification::Advanced(_) => "advanced",
        }
    }
}

impl Default for ProjectSpecification {
    fn default() -> Self {
        ProjectSpecification::Basic(BasicSpec::default())
    }
}

impl From<BasicSpec> for ProjectSpecification {
    fn from(spec: BasicSpec) -> Self {
        ProjectSpecification::Basic(spec)
    }
}

impl From<AdvancedSpec> for ProjectSpecification {
    fn from(spec: AdvancedSpec) -> Self {
        ProjectSpecification::Advanced(spec)
    }
}

// ============================================================================
// Basic mode
// ============================================================================

/// Basic mode input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BasicSpec {
    /// Plot size in square yards
    #[serde(alias = "plotSize", deserialize_with = "lenient::non_negative")]
    pub plot_size_sqyd: f64,

    /// Number of floors (minimum 1)
    #[serde(deserialize_with = "lenient::at_least_one")]
    pub floors: u32,

    /// Finish quality
    pub quality: QualityLevel,

    #[serde(deserialize_with = "lenient::count")]
    pub bathrooms: u32,

    #[serde(deserialize_with = "lenient::count")]
    pub bedrooms: u32,

    /// Site location class
    #[serde(alias = "locationType")]
    pub location_type: LocationType,

    /// Planned construction timeline in months (minimum 1)
    #[serde(alias = "timeline", deserialize_with = "lenient::timeline_months")]
    pub timeline_months: u32,

    /// Include a basement (adds foundation cost to the total)
    pub basement: bool,

    /// Include a garage (adds parking cost to the total)
    pub garage: bool,
}

impl Default for BasicSpec {
    fn default() -> Self {
        BasicSpec {
            plot_size_sqyd: 0.0,
            floors: 1,
            quality: QualityLevel::Standard,
            bathrooms: 0,
            bedrooms: 0,
            location_type: LocationType::Urban,
            timeline_months: DEFAULT_TIMELINE_MONTHS,
            basement: false,
            garage: false,
        }
    }
}

impl BasicSpec {
    /// Create a spec for a plot of the given size with form defaults elsewhere.
    pub fn new(plot_size_sqyd: f64) -> Self {
        let mut spec = BasicSpec::default();
        spec.set_plot_size(plot_size_sqyd);
        spec
    }

    pub fn set_plot_size(&mut self, sqyd: f64) {
        self.plot_size_sqyd = lenient::clamp_non_negative(sqyd);
    }

    pub fn set_floors(&mut self, floors: i64) {
        self.floors = lenient::clamp_at_least_one(floors);
    }

    pub fn set_bathrooms(&mut self, bathrooms: i64) {
        self.bathrooms = lenient::clamp_count(bathrooms);
    }

    pub fn set_bedrooms(&mut self, bedrooms: i64) {
        self.bedrooms = lenient::clamp_count(bedrooms);
    }

    pub fn set_timeline(&mut self, months: i64) {
        self.timeline_months = lenient::clamp_timeline(months as f64);
    }

    /// Builder-style floors
    pub fn with_floors(mut self, floors: i64) -> Self {
        self.set_floors(floors);
        self
    }

    /// Builder-style basement flag
    pub fn with_basement(mut self, basement: bool) -> Self {
        self.basement = basement;
        self
    }

    /// Builder-style garage flag
    pub fn with_garage(mut self, garage: bool) -> Self {
        self.garage = garage;
        self
    }
}

// ============================================================================
// Advanced mode
// ============================================================================

/// Advanced mode input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvancedSpec {
    /// Building length in feet
    #[serde(alias = "length", deserialize_with = "lenient::non_negative")]
    pub length_ft: f64,

    /// Building width in feet
    #[serde(alias = "width", deserialize_with = "lenient::non_negative")]
    pub width_ft: f64,

    /// Number of floors (minimum 1)
    #[serde(deserialize_with = "lenient::at_least_one")]
    pub floors: u32,

    #[serde(deserialize_with = "lenient::count")]
    pub doors: u32,

    #[serde(deserialize_with = "lenient::count")]
    pub windows: u32,

    #[serde(deserialize_with = "lenient::count")]
    pub kitchens: u32,

    #[serde(deserialize_with = "lenient::count")]
    pub lounges: u32,

    /// Water tanks
    #[serde(deserialize_with = "lenient::count")]
    pub tanks: u32,

    /// Room layout, in entry order
    pub rooms: Vec<Room>,

    /// Include a parking space
    pub parking: bool,

    /// Full-escape house layout
    #[serde(alias = "isFullEscape")]
    pub is_full_escape: bool,

    #[serde(alias = "flooringType")]
    pub flooring_type: FlooringType,

    #[serde(alias = "paintType")]
    pub paint_type: PaintType,

    #[serde(alias = "plasterType")]
    pub plaster_type: PlasterType,

    /// Crew size (minimum 1)
    #[serde(alias = "laborCount", deserialize_with = "lenient::at_least_one")]
    pub labor_count: u32,
}

impl Default for AdvancedSpec {
    fn default() -> Self {
        AdvancedSpec {
            length_ft: 0.0,
            width_ft: 0.0,
            floors: 1,
            doors: 0,
            windows: 0,
            kitchens: 0,
            lounges: 0,
            tanks: 0,
            rooms: Vec::new(),
            parking: false,
            is_full_escape: false,
            flooring_type: FlooringType::Standard,
            paint_type: PaintType::Standard,
            plaster_type: PlasterType::Standard,
            labor_count: 1,
        }
    }
}

impl AdvancedSpec {
    /// Create a spec with the given footprint and form defaults elsewhere.
    pub fn new(length_ft: f64, width_ft: f64) -> Self {
        let mut spec = AdvancedSpec::default();
        spec.set_length(length_ft);
        spec.set_width(width_ft);
        spec
    }

    pub fn set_length(&mut self, feet: f64) {
        self.length_ft = lenient::clamp_non_negative(feet);
    }

    pub fn set_width(&mut self, feet: f64) {
        self.width_ft = lenient::clamp_non_negative(feet);
    }

    pub fn set_floors(&mut self, floors: i64) {
        self.floors = lenient::clamp_at_least_one(floors);
    }

    pub fn set_labor_count(&mut self, workers: i64) {
        self.labor_count = lenient::clamp_at_least_one(workers);
    }

    /// Footprint of a single floor
    pub fn footprint(&self) -> SqFt {
        Feet(self.length_ft) * Feet(self.width_ft)
    }

    /// Sum of the listed room areas. Informational only; the estimate works
    /// from the overall footprint.
    pub fn rooms_area(&self) -> SqFt {
        self.rooms
            .iter()
            .fold(SqFt(0.0), |total, room| total + room.area())
    }

    /// Builder-style floors
    pub fn with_floors(mut self, floors: i64) -> Self {
        self.set_floors(floors);
        self
    }

    /// Builder-style room
    pub fn with_room(mut self, room: Room) -> Self {
        self.rooms.push(room);
        self
    }
}

/// A room in the Advanced layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Room {
    #[serde(alias = "length", deserialize_with = "lenient::non_negative")]
    pub length_ft: f64,

    #[serde(alias = "width", deserialize_with = "lenient::non_negative")]
    pub width_ft: f64,

    #[serde(rename = "type")]
    pub room_type: RoomType,
}

impl Default for Room {
    fn default() -> Self {
        Room {
            length_ft: 0.0,
            width_ft: 0.0,
            room_type: RoomType::Bedroom,
        }
    }
}

impl Room {
    pub fn new(length_ft: f64, width_ft: f64, room_type: RoomType) -> Self {
        Room {
            length_ft: lenient::clamp_non_negative(length_ft),
            width_ft: lenient::clamp_non_negative(width_ft),
            room_type,
        }
    }

    pub fn area(&self) -> SqFt {
        Feet(self.length_ft) * Feet(self.width_ft)
    }
}

// ============================================================================
// Choice enums
// ============================================================================

/// Finish quality level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityLevel {
    #[default]
    Standard,
    Premium,
    Luxury,
}

impl QualityLevel {
    pub const ALL: [QualityLevel; 3] = [QualityLevel::Standard, QualityLevel::Premium, QualityLevel::Luxury];

    pub fn name(&self) -> &'static str {
        match self {
            QualityLevel::Standard => "standard",
            QualityLevel::Premium => "premium",
            QualityLevel::Luxury => "luxury",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        QualityLevel::ALL.into_iter().find(|q| q.name() == name)
    }
}

/// Site location class
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationType {
    #[default]
    Urban,
    Suburban,
    Rural,
}

impl LocationType {
    pub const ALL: [LocationType; 3] = [LocationType::Urban, LocationType::Suburban, LocationType::Rural];

    pub fn name(&self) -> &'static str {
        match self {
            LocationType::Urban => "urban",
            LocationType::Suburban => "suburban",
            LocationType::Rural => "rural",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        LocationType::ALL.into_iter().find(|l| l.name() == name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlooringType {
    #[default]
    Standard,
    Premium,
    Marble,
    Wooden,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaintType {
    #[default]
    Standard,
    Premium,
    Luxury,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlasterType {
    #[default]
    Standard,
    Premium,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomType {
    #[default]
    Bedroom,
    Bathroom,
    Study,
    #[serde(other)]
    Other,
}

// ============================================================================
// Lenient numeric coercion
// ============================================================================

/// Serde helpers that turn whatever the input form produced into a usable
/// number. Accepts numbers, numeric strings, empty strings and null.
pub(crate) mod lenient {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    use super::DEFAULT_TIMELINE_MONTHS;

    /// Raw numeric reading; anything unusable is 0.
    pub fn coerce(value: &Value) -> f64 {
        let raw = match value {
            Value::Number(n) => n.as_f64().unwrap_or(0.0),
            Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
            _ => 0.0,
        };
        if raw.is_finite() {
            raw
        } else {
            0.0
        }
    }

    pub fn clamp_non_negative(value: f64) -> f64 {
        if value.is_finite() && value > 0.0 {
            value
        } else {
            0.0
        }
    }

    pub fn clamp_count(value: i64) -> u32 {
        value.clamp(0, u32::MAX as i64) as u32
    }

    pub fn clamp_at_least_one(value: i64) -> u32 {
        value.clamp(1, u32::MAX as i64) as u32
    }

    /// Zero or invalid means "not given" and falls back to 12 months.
    pub fn clamp_timeline(value: f64) -> u32 {
        if !value.is_finite() || value.trunc() == 0.0 {
            return DEFAULT_TIMELINE_MONTHS;
        }
        clamp_at_least_one(value.trunc() as i64)
    }

    fn truncated(value: f64) -> i64 {
        value.trunc().clamp(i64::MIN as f64, i64::MAX as f64) as i64
    }

    pub fn non_negative<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(clamp_non_negative(coerce(&value)))
    }

    pub fn count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(clamp_count(truncated(coerce(&value))))
    }

    pub fn at_least_one<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(clamp_at_least_one(truncated(coerce(&value))))
    }

    pub fn timeline_months<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(clamp_timeline(coerce(&value)))
    }
}
