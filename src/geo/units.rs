//! Unit-tagged lengths and the millimeter/pixel conversion.
//!
//! Lengths entered by the user carry an explicit unit. Unknown units are
//! rejected when the [`Length`] is built, so conversion itself never fails.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use super::vector::Vector2d;
use crate::error::PassfotoError;

/// Millimeters per inch.
pub const MM_PER_INCH: f64 = 25.4;

/// A supported length unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    #[default]
    Millimeters,
    Centimeters,
    Inches,
}

impl LengthUnit {
    /// How many millimeters one unit spans.
    pub fn mm_per_unit(self) -> f64 {
        match self {
            LengthUnit::Millimeters => 1.0,
            LengthUnit::Centimeters => 10.0,
            LengthUnit::Inches => MM_PER_INCH,
        }
    }

    /// The suffix used when formatting.
    pub fn suffix(self) -> &'static str {
        match self {
            LengthUnit::Millimeters => "mm",
            LengthUnit::Centimeters => "cm",
            LengthUnit::Inches => "in",
        }
    }
}

impl FromStr for LengthUnit {
    type Err = PassfotoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "mm" => Ok(LengthUnit::Millimeters),
            "cm" => Ok(LengthUnit::Centimeters),
            "in" | "inch" | "\"" => Ok(LengthUnit::Inches),
            other => Err(PassfotoError::UnsupportedUnit(other.to_string())),
        }
    }
}

/// A physical length with an explicit unit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Length {
    value: f64,
    unit: LengthUnit,
}

impl Length {
    /// Creates a length, rejecting non-finite values.
    pub fn new(value: f64, unit: LengthUnit) -> Result<Self, PassfotoError> {
        if !value.is_finite() {
            return Err(PassfotoError::InvalidLength(format!(
                "{} is not a finite number",
                value
            )));
        }
        Ok(Self { value, unit })
    }

    /// Creates a length in millimeters.
    pub fn mm(value: f64) -> Result<Self, PassfotoError> {
        Self::new(value, LengthUnit::Millimeters)
    }

    /// Returns the length in millimeters.
    #[inline]
    pub fn to_mm(&self) -> f64 {
        self.value * self.unit.mm_per_unit()
    }

    /// Returns the unit the length was given in.
    #[inline]
    pub fn unit(&self) -> LengthUnit {
        self.unit
    }
}

impl FromStr for Length {
    type Err = PassfotoError;

    /// Parses `"35"`, `"35mm"`, `"3.5 cm"` or `"4in"`. A bare number is millimeters.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let split = s
            .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == '-' || c == '+'))
            .unwrap_or(s.len());
        let (number, unit) = s.split_at(split);
        let value: f64 = number
            .parse()
            .map_err(|_| PassfotoError::InvalidLength(format!("'{}' is not a length", s)))?;
        Length::new(value, unit.parse()?)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit.suffix())
    }
}

impl Serialize for Length {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Length {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum LengthRepr {
            Number(f64),
            Text(String),
        }
        let length = match LengthRepr::deserialize(deserializer)? {
            LengthRepr::Number(value) => Length::mm(value),
            LengthRepr::Text(text) => text.parse(),
        };
        length.map_err(serde::de::Error::custom)
    }
}

/// Output resolution in pixels per 25.4 mm.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Resolution(f64);

impl Resolution {
    /// Creates a resolution, rejecting zero, negative and non-finite values.
    pub fn new(pixels_per_inch: f64) -> Result<Self, PassfotoError> {
        if !(pixels_per_inch.is_finite() && pixels_per_inch > 0.0) {
            return Err(PassfotoError::InvalidLength(format!(
                "resolution must be positive, got {}",
                pixels_per_inch
            )));
        }
        Ok(Self(pixels_per_inch))
    }

    /// Pixels per 25.4 mm.
    #[inline]
    pub fn pixels_per_inch(&self) -> f64 {
        self.0
    }

    /// Converts millimeters to pixels: `px = mm / 25.4 * resolution`.
    #[inline]
    pub fn to_px(&self, mm: f64) -> f64 {
        mm / MM_PER_INCH * self.0
    }

    /// Converts a millimeter vector to pixels.
    #[inline]
    pub fn vec_to_px(&self, mm: Vector2d) -> Vector2d {
        Vector2d::new(self.to_px(mm.x), self.to_px(mm.y))
    }

    /// Converts pixels back to millimeters.
    #[inline]
    pub fn to_mm(&self, px: f64) -> f64 {
        px / self.0 * MM_PER_INCH
    }
}

impl Default for Resolution {
    fn default() -> Self {
        Self(300.0)
    }
}

impl TryFrom<f64> for Resolution {
    type Error = PassfotoError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Resolution::new(value)
    }
}

impl From<Resolution> for f64 {
    fn from(resolution: Resolution) -> f64 {
        resolution.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lengths() {
        assert_eq!("35".parse::<Length>().unwrap().to_mm(), 35.0);
        assert_eq!("35mm".parse::<Length>().unwrap().to_mm(), 35.0);
        assert_eq!("3.5 cm".parse::<Length>().unwrap().to_mm(), 35.0);
        assert_eq!("4in".parse::<Length>().unwrap().to_mm(), 101.6);
        assert_eq!("4in".parse::<Length>().unwrap().unit(), LengthUnit::Inches);
    }

    #[test]
    fn test_unsupported_unit_rejected_at_parse() {
        let err = "12pt".parse::<Length>().unwrap_err();
        assert!(matches!(err, PassfotoError::UnsupportedUnit(ref u) if u == "pt"));
    }

    #[test]
    fn test_garbage_length_rejected() {
        assert!(matches!(
            "mm".parse::<Length>(),
            Err(PassfotoError::InvalidLength(_))
        ));
        assert!(Length::mm(f64::NAN).is_err());
    }

    #[test]
    fn test_resolution_conversion() {
        let res = Resolution::new(300.0).unwrap();
        assert!((res.to_px(25.4) - 300.0).abs() < 1e-9);
        assert!((res.to_mm(300.0) - 25.4).abs() < 1e-9);
        assert_eq!(
            res.vec_to_px(Vector2d::new(25.4, 50.8)),
            Vector2d::new(300.0, 600.0)
        );
    }

    #[test]
    fn test_resolution_must_be_positive() {
        assert!(Resolution::new(0.0).is_err());
        assert!(Resolution::new(-72.0).is_err());
        assert!(Resolution::new(f64::INFINITY).is_err());
    }

    #[test]
    fn test_length_deserializes_from_number_or_string() {
        let from_number: Length = serde_json::from_str("12.5").unwrap();
        assert_eq!(from_number.to_mm(), 12.5);
        let from_text: Length = serde_json::from_str("\"1cm\"").unwrap();
        assert_eq!(from_text.to_mm(), 10.0);
        assert!(serde_json::from_str::<Length>("\"1furlong\"").is_err());
    }
}
