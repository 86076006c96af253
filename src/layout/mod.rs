//! Print layout: scale solving, transform composition and grid packing.
//!
//! Everything here is pure arithmetic over the resolved face geometry and
//! the read-only [`LayoutConfig`]. A [`LayoutPlan`] is computed fresh for
//! every run and nothing in it is persisted.

mod grid;
mod plan;
mod scale;
mod transform;

pub use grid::{pack_grid, GridLayout, GRID_SAFETY_FACTOR};
pub use plan::{plan_layout, LayoutPlan, Placement};
pub use scale::{solve_scale, ScaleSolution};
pub use transform::{compose, normalizing_steps, TransformStep};

use serde::{Deserialize, Serialize};

use crate::error::PassfotoError;
use crate::geo::{Resolution, Vector2d};
use crate::standards::{MeasurementStandard, PhotoCategory};

/// Size of the printed portrait, in millimeters.
pub const PORTRAIT_MM: Vector2d = Vector2d::new(35.0, 45.0);

/// Largest accepted canvas side, in millimeters (ten meters).
pub const MAX_CANVAS_MM: f64 = 10_000.0;

/// Layout settings shared by every placement of a run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Output resolution.
    pub resolution: Resolution,
    /// Canvas (sheet) size in millimeters.
    pub canvas_mm: Vector2d,
    /// White border around each portrait, in millimeters.
    pub border_mm: f64,
    /// Cut-line margin around each bordered portrait, in millimeters.
    pub line_mm: f64,
    /// Which measurement standard to lay out against.
    pub category: PhotoCategory,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            resolution: Resolution::default(),
            canvas_mm: Vector2d::new(150.0, 100.0),
            border_mm: 2.0,
            line_mm: 3.0,
            category: PhotoCategory::Adult,
        }
    }
}

impl LayoutConfig {
    /// Checks that all sizes are finite and in range.
    pub fn validate(&self) -> Result<(), PassfotoError> {
        if !(self.canvas_mm.is_finite() && self.canvas_mm.x > 0.0 && self.canvas_mm.y > 0.0) {
            return Err(PassfotoError::InvalidLength(format!(
                "canvas must be positive, got {} x {} mm",
                self.canvas_mm.x, self.canvas_mm.y
            )));
        }
        if self.canvas_mm.x > MAX_CANVAS_MM || self.canvas_mm.y > MAX_CANVAS_MM {
            return Err(PassfotoError::InvalidLength(format!(
                "canvas must be at most {} mm per side, got {} x {} mm",
                MAX_CANVAS_MM, self.canvas_mm.x, self.canvas_mm.y
            )));
        }
        for (name, value) in [("border", self.border_mm), ("cut line", self.line_mm)] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(PassfotoError::InvalidLength(format!(
                    "{} must be zero or positive, got {} mm",
                    name, value
                )));
            }
        }
        Ok(())
    }

    /// The measurement standard for the configured category.
    #[inline]
    pub fn standard(&self) -> &'static MeasurementStandard {
        self.category.standard()
    }

    /// Portrait, bordered and outlined sizes for this configuration.
    pub fn dimensions(&self) -> PrintDimensions {
        PrintDimensions::new(self.border_mm, self.line_mm)
    }
}

/// The nested footprints of one printed instance, in millimeters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PrintDimensions {
    /// The portrait itself.
    pub image_mm: Vector2d,
    /// Portrait plus border on every side.
    pub bordered_mm: Vector2d,
    /// Bordered portrait plus cut-line margin on every side.
    pub outlined_mm: Vector2d,
}

impl PrintDimensions {
    /// Builds the footprints around the fixed 35 × 45 mm portrait.
    pub fn new(border_mm: f64, line_mm: f64) -> Self {
        let image_mm = PORTRAIT_MM;
        let bordered_mm = image_mm + 2.0 * Vector2d::splat(border_mm);
        let outlined_mm = bordered_mm + 2.0 * Vector2d::splat(line_mm);
        Self {
            image_mm,
            bordered_mm,
            outlined_mm,
        }
    }
}
