//! 2D affine transforms.

use serde::Serialize;
use std::fmt;
use std::ops::Mul;

use super::vector::Vector2d;

/// A 2D affine map: `p' = L·p + t`.
///
/// With `L = [[a, b], [c, d]]` and `t = (tx, ty)`:
///
/// ```text
/// x' = a·x + b·y + tx
/// y' = c·x + d·y + ty
/// ```
///
/// Composition follows matrix convention: `lhs * rhs` applies `rhs` first,
/// then `lhs`. [`AffineTransform::then`] reads left to right instead.
#[derive(Clone, Copy, PartialEq, Serialize)]
pub struct AffineTransform {
    a: f64,
    b: f64,
    c: f64,
    d: f64,
    tx: f64,
    ty: f64,
}

impl AffineTransform {
    /// The identity transform.
    pub const IDENTITY: AffineTransform = AffineTransform {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        tx: 0.0,
        ty: 0.0,
    };

    /// Uniform scale about the origin.
    pub fn scale(factor: f64) -> Self {
        Self {
            a: factor,
            d: factor,
            ..Self::IDENTITY
        }
    }

    /// Rotation about the origin by `radians`.
    ///
    /// Positive angles turn +X toward +Y. In a Y-down image that is a
    /// clockwise turn on screen.
    pub fn rotate(radians: f64) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self {
            a: cos,
            b: -sin,
            c: sin,
            d: cos,
            tx: 0.0,
            ty: 0.0,
        }
    }

    /// Pure translation.
    pub fn translate(offset: Vector2d) -> Self {
        Self {
            tx: offset.x,
            ty: offset.y,
            ..Self::IDENTITY
        }
    }

    /// Maps a point.
    #[inline]
    pub fn apply(&self, p: Vector2d) -> Vector2d {
        Vector2d::new(
            self.a * p.x + self.b * p.y + self.tx,
            self.c * p.x + self.d * p.y + self.ty,
        )
    }

    /// Returns the transform that applies `self` and then `next`.
    #[inline]
    pub fn then(self, next: AffineTransform) -> AffineTransform {
        next * self
    }

    /// Determinant of the linear part.
    #[inline]
    pub fn determinant(&self) -> f64 {
        self.a * self.d - self.b * self.c
    }

    /// Returns the inverse transform, or `None` if the linear part is singular.
    pub fn inverse(&self) -> Option<AffineTransform> {
        let det = self.determinant();
        if det == 0.0 || !det.is_finite() {
            return None;
        }
        let a = self.d / det;
        let b = -self.b / det;
        let c = -self.c / det;
        let d = self.a / det;
        Some(AffineTransform {
            a,
            b,
            c,
            d,
            tx: -(a * self.tx + b * self.ty),
            ty: -(c * self.tx + d * self.ty),
        })
    }

    /// Coefficients in ImageMagick `-affine sx,rx,ry,sy,tx,ty` order.
    pub fn as_magick_affine(&self) -> [f64; 6] {
        [self.a, self.c, self.b, self.d, self.tx, self.ty]
    }
}

impl Default for AffineTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for AffineTransform {
    type Output = AffineTransform;

    fn mul(self, rhs: AffineTransform) -> AffineTransform {
        AffineTransform {
            a: self.a * rhs.a + self.b * rhs.c,
            b: self.a * rhs.b + self.b * rhs.d,
            c: self.c * rhs.a + self.d * rhs.c,
            d: self.c * rhs.b + self.d * rhs.d,
            tx: self.a * rhs.tx + self.b * rhs.ty + self.tx,
            ty: self.c * rhs.tx + self.d * rhs.ty + self.ty,
        }
    }
}

impl fmt::Debug for AffineTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AffineTransform")
            .field("a", &self.a)
            .field("b", &self.b)
            .field("c", &self.c)
            .field("d", &self.d)
            .field("tx", &self.tx)
            .field("ty", &self.ty)
            .finish()
    }
}
