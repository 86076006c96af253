//! Two-dimensional vector arithmetic.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A 2D point or displacement.
///
/// The unit (millimeters or device pixels) is decided by the caller; the
/// type itself does not track it. Image coordinates follow the raster
/// convention where Y grows downward.
#[derive(Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector2d {
    pub x: f64,
    pub y: f64,
}

impl Vector2d {
    /// Creates a new vector.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Creates a vector with both components set to `value`.
    #[inline]
    pub const fn splat(value: f64) -> Self {
        Self { x: value, y: value }
    }

    /// Component-wise division.
    #[inline]
    pub fn comp_div(self, other: Vector2d) -> Vector2d {
        Vector2d::new(self.x / other.x, self.y / other.y)
    }

    /// Dot product.
    #[inline]
    pub fn dot(self, other: Vector2d) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Euclidean length.
    #[inline]
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Returns the unit vector pointing in the same direction.
    ///
    /// Returns `None` for the zero vector and for non-finite input.
    pub fn normalized(self) -> Option<Vector2d> {
        let len = self.length();
        if len == 0.0 || !len.is_finite() {
            return None;
        }
        Some(self / len)
    }

    /// Returns the vector rotated by 90°.
    ///
    /// Without `flip_y` the result is `(y, -x)`. With `flip_y` the result is
    /// `(-y, x)`, which is the orientation that points from the eye line
    /// toward the top of the head in a Y-down image when applied to
    /// `left_eye - right_eye`.
    #[inline]
    pub fn perpendicular(self, flip_y: bool) -> Vector2d {
        if flip_y {
            Vector2d::new(-self.y, self.x)
        } else {
            Vector2d::new(self.y, -self.x)
        }
    }

    /// Signed angle to the positive X axis, in radians within `(-π, π]`.
    pub fn angle(self) -> f64 {
        let angle = self.y.atan2(self.x);
        if angle <= -std::f64::consts::PI {
            std::f64::consts::PI
        } else {
            angle
        }
    }

    /// Returns true if both components are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vector2d {
    type Output = Vector2d;

    #[inline]
    fn add(self, rhs: Vector2d) -> Vector2d {
        Vector2d::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector2d {
    type Output = Vector2d;

    #[inline]
    fn sub(self, rhs: Vector2d) -> Vector2d {
        Vector2d::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Vector2d {
    type Output = Vector2d;

    #[inline]
    fn neg(self) -> Vector2d {
        Vector2d::new(-self.x, -self.y)
    }
}

impl Mul<f64> for Vector2d {
    type Output = Vector2d;

    #[inline]
    fn mul(self, rhs: f64) -> Vector2d {
        Vector2d::new(self.x * rhs, self.y * rhs)
    }
}

impl Mul<Vector2d> for f64 {
    type Output = Vector2d;

    #[inline]
    fn mul(self, rhs: Vector2d) -> Vector2d {
        rhs * self
    }
}

impl Div<f64> for Vector2d {
    type Output = Vector2d;

    #[inline]
    fn div(self, rhs: f64) -> Vector2d {
        Vector2d::new(self.x / rhs, self.y / rhs)
    }
}

impl From<[f64; 2]> for Vector2d {
    fn from([x, y]: [f64; 2]) -> Self {
        Vector2d::new(x, y)
    }
}

impl fmt::Debug for Vector2d {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Vector2d").field(&self.x).field(&self.y).finish()
    }
}

impl fmt::Display for Vector2d {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}
