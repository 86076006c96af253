//! Axis-aligned rectangles.

use serde::Serialize;

use super::vector::Vector2d;

/// An axis-aligned rectangle given by its top-left corner and its size.
///
/// Like the rest of the geometry types this carries no unit; callers keep
/// millimeter and pixel boxes apart.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize)]
pub struct Box2d {
    pub base: Vector2d,
    pub dimensions: Vector2d,
}

impl Box2d {
    /// Creates a new box. Negative dimensions are clamped to zero.
    #[inline]
    pub fn new(base: Vector2d, dimensions: Vector2d) -> Self {
        Self {
            base,
            dimensions: Vector2d::new(dimensions.x.max(0.0), dimensions.y.max(0.0)),
        }
    }

    /// Returns the bottom-right corner.
    #[inline]
    pub fn upper(&self) -> Vector2d {
        self.base + self.dimensions
    }

    /// Returns the width of the box.
    #[inline]
    pub fn width(&self) -> f64 {
        self.dimensions.x
    }

    /// Returns the height of the box.
    #[inline]
    pub fn height(&self) -> f64 {
        self.dimensions.y
    }

    /// Returns true if `p` lies inside the box or on its edge.
    pub fn contains(&self, p: Vector2d) -> bool {
        let upper = self.upper();
        p.x >= self.base.x && p.y >= self.base.y && p.x <= upper.x && p.y <= upper.y
    }
}
