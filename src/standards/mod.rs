//! Biometric photo measurement standards.
//!
//! Each [`PhotoCategory`] maps to one immutable [`MeasurementStandard`].
//! All values are millimeters on the printed 35 × 45 mm portrait.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::PassfotoError;

/// A closed range of millimeter values.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct MmRange {
    pub min: f64,
    pub max: f64,
}

impl MmRange {
    /// Creates a new range.
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Midpoint of the range.
    #[inline]
    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    /// Width of the range.
    #[inline]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Returns true if `value` lies within the range, bounds included.
    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }

    /// Returns true if `other` lies entirely within this range.
    #[inline]
    pub fn encloses(&self, other: &MmRange) -> bool {
        self.min <= other.min && other.max <= self.max
    }

    /// Distance from `value` to the nearest point of the range (zero inside).
    pub fn distance_to(&self, value: f64) -> f64 {
        if value < self.min {
            self.min - value
        } else if value > self.max {
            value - self.max
        } else {
            0.0
        }
    }
}

impl fmt::Display for MmRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}] mm", self.min, self.max)
    }
}

/// Acceptable measurement bounds for one photo category.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct MeasurementStandard {
    /// Chin to top of head.
    pub chin_to_head: MmRange,
    /// The preferred sub-range of `chin_to_head`.
    pub chin_to_head_ideal: MmRange,
    /// Top of the printed portrait down to the eye line.
    pub top_to_eyes: MmRange,
    /// Left edge of the printed portrait to the nose.
    pub left_to_nose: MmRange,
}

const ADULT: MeasurementStandard = MeasurementStandard {
    chin_to_head: MmRange::new(27.0, 40.0),
    chin_to_head_ideal: MmRange::new(32.0, 36.0),
    top_to_eyes: MmRange::new(13.0, 23.0),
    left_to_nose: MmRange::new(15.5, 19.5),
};

const CHILD: MeasurementStandard = MeasurementStandard {
    chin_to_head: MmRange::new(17.0, 38.0),
    chin_to_head_ideal: MmRange::new(22.0, 36.0),
    top_to_eyes: MmRange::new(13.0, 27.0),
    left_to_nose: MmRange::new(15.5, 19.5),
};

/// The kind of portrait being produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PhotoCategory {
    #[default]
    Adult,
    Child,
}

impl PhotoCategory {
    /// All categories, in table order.
    pub const ALL: [PhotoCategory; 2] = [PhotoCategory::Adult, PhotoCategory::Child];

    /// Returns the measurement standard for this category.
    pub fn standard(self) -> &'static MeasurementStandard {
        match self {
            PhotoCategory::Adult => &ADULT,
            PhotoCategory::Child => &CHILD,
        }
    }

    /// The lowercase name used on the command line and in config files.
    pub fn as_str(self) -> &'static str {
        match self {
            PhotoCategory::Adult => "adult",
            PhotoCategory::Child => "child",
        }
    }
}

impl fmt::Display for PhotoCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PhotoCategory {
    type Err = PassfotoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PhotoCategory::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| PassfotoError::InvalidCategory(s.to_string()))
    }
}

impl<'de> serde::Deserialize<'de> for PhotoCategory {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}
