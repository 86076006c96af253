//! Plane geometry for photo layout.
//!
//! Points, displacements, affine maps and rectangles are all plain `f64`
//! value types. Whether a value is in millimeters or device pixels is
//! decided where it is produced; [`Resolution`] is the only bridge between
//! the two.

mod affine;
mod rect;
mod units;
mod vector;

pub use affine::AffineTransform;
pub use rect::Box2d;
pub use units::{Length, LengthUnit, Resolution, MM_PER_INCH};
pub use vector::Vector2d;
