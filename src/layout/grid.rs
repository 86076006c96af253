//! Even-spaced grid packing of outlined images on the canvas.

use log::debug;
use serde::Serialize;

use crate::geo::Vector2d;

/// Extra room reserved per image beyond the raw tiling bound.
pub const GRID_SAFETY_FACTOR: f64 = 1.02;

/// How many instances fit on the canvas and where they go.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GridLayout {
    pub count_x: usize,
    pub count_y: usize,
    /// Gap between neighbours and at the canvas edges, in millimeters.
    pub spacing: Vector2d,
    /// Slot origins in millimeters, row-major from the top left.
    pub slots: Vec<Vector2d>,
}

impl GridLayout {
    /// Total number of slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if nothing fits on the canvas.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// Count and spacing along one axis.
fn pack_axis(canvas: f64, outlined: f64) -> (usize, f64) {
    let count = if outlined > 0.0 {
        // `as` saturates: negative or NaN ratios give zero
        (canvas / (GRID_SAFETY_FACTOR * outlined)).floor() as usize
    } else {
        0
    };
    let spacing = (canvas - count as f64 * outlined) / (count as f64 + 1.0);
    (count, spacing)
}

/// Packs as many outlined images as fit on the canvas, evenly spaced.
///
/// `count + 1` equal gaps per axis (leading, between and trailing) center
/// the grid. A canvas smaller than one image yields an empty layout, which
/// is not an error.
pub fn pack_grid(canvas_mm: Vector2d, outlined_mm: Vector2d) -> GridLayout {
    let (count_x, spacing_x) = pack_axis(canvas_mm.x, outlined_mm.x);
    let (count_y, spacing_y) = pack_axis(canvas_mm.y, outlined_mm.y);
    debug!(
        "Placing {} images ({} x {}) of outlined size {:.1}mm x {:.1}mm.",
        count_x * count_y,
        count_x,
        count_y,
        outlined_mm.x,
        outlined_mm.y
    );
    debug!("Spacing in mm: X = {:.1} mm Y = {:.1} mm", spacing_x, spacing_y);

    let slots = (0..count_y)
        .flat_map(|y| (0..count_x).map(move |x| (x, y)))
        .map(|(x, y)| {
            Vector2d::new(
                x as f64 * outlined_mm.x + (x + 1) as f64 * spacing_x,
                y as f64 * outlined_mm.y + (y + 1) as f64 * spacing_y,
            )
        })
        .collect();

    GridLayout {
        count_x,
        count_y,
        spacing: Vector2d::new(spacing_x, spacing_y),
        slots,
    }
}
