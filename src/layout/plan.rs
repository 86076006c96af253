//! Full layout planning for one run.

use std::fmt;

use log::trace;
use serde::Serialize;

use super::grid::{pack_grid, GridLayout};
use super::scale::{solve_scale, ScaleSolution};
use super::transform::{compose, normalizing_steps};
use super::{LayoutConfig, PrintDimensions};
use crate::error::PassfotoError;
use crate::face::{resolve, ResolvedGeometry};
use crate::geo::{AffineTransform, Box2d, Vector2d};
use crate::input::Landmarks;

/// One portrait instance on the canvas.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Placement {
    /// Position in the grid, row-major.
    pub index: usize,
    /// Top-left of the outlined footprint, in millimeters.
    pub slot_mm: Vector2d,
    /// Source photo to canvas pixels.
    pub transform: AffineTransform,
    /// The bordered image area on the canvas, in pixels.
    pub crop_px: Box2d,
}

impl Placement {
    /// Top-left of the bordered image, in millimeters.
    pub fn bordered_origin_mm(&self, config: &LayoutConfig) -> Vector2d {
        self.slot_mm + Vector2d::splat(config.line_mm)
    }

    /// Top-left of the portrait itself, in millimeters.
    pub fn portrait_origin_mm(&self, config: &LayoutConfig) -> Vector2d {
        self.slot_mm + Vector2d::splat(config.line_mm + config.border_mm)
    }
}

/// Everything computed for a run before any drawing happens.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LayoutPlan {
    pub config: LayoutConfig,
    pub dimensions: PrintDimensions,
    pub geometry: ResolvedGeometry,
    pub scale: ScaleSolution,
    pub grid: GridLayout,
    pub placements: Vec<Placement>,
    /// Canvas size in pixels.
    pub canvas_px: Vector2d,
}

/// Computes the layout for a run.
///
/// Geometry and configuration errors surface here, before any renderer
/// command exists, so a doomed run never produces partial output.
pub fn plan_layout(
    landmarks: &Landmarks,
    config: &LayoutConfig,
) -> Result<LayoutPlan, PassfotoError> {
    config.validate()?;
    let geometry = resolve(landmarks)?;
    let scale = solve_scale(&geometry, config.standard(), config.resolution)?;
    let dimensions = config.dimensions();
    let grid = pack_grid(config.canvas_mm, dimensions.outlined_mm);

    let resolution = config.resolution;
    let bordered_px = resolution.vec_to_px(dimensions.bordered_mm);
    let border_px = resolution.to_px(config.border_mm);

    let placements = grid
        .slots
        .iter()
        .enumerate()
        .map(|(index, &slot_mm)| {
            trace!(
                "Placing image at {:.1}mm / {:.1}mm",
                slot_mm.x,
                slot_mm.y
            );
            let slot_px = resolution.vec_to_px(slot_mm + Vector2d::splat(config.line_mm));
            let steps = normalizing_steps(&geometry, &scale, bordered_px, border_px, slot_px);
            Placement {
                index,
                slot_mm,
                transform: compose(&steps),
                crop_px: Box2d::new(slot_px, bordered_px),
            }
        })
        .collect();

    Ok(LayoutPlan {
        config: config.clone(),
        dimensions,
        geometry,
        scale,
        grid,
        placements,
        canvas_px: resolution.vec_to_px(config.canvas_mm),
    })
}

impl fmt::Display for LayoutPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let config = &self.config;
        let dims = &self.dimensions;
        writeln!(f, "Category:   {}", config.category)?;
        writeln!(
            f,
            "Canvas:     {:.1} x {:.1} mm ({:.0} x {:.0} px at {} px/in)",
            config.canvas_mm.x,
            config.canvas_mm.y,
            self.canvas_px.x,
            self.canvas_px.y,
            config.resolution.pixels_per_inch()
        )?;
        writeln!(
            f,
            "Image:      {:.1} x {:.1} mm, bordered {:.1} x {:.1} mm, outlined {:.1} x {:.1} mm",
            dims.image_mm.x,
            dims.image_mm.y,
            dims.bordered_mm.x,
            dims.bordered_mm.y,
            dims.outlined_mm.x,
            dims.outlined_mm.y
        )?;
        writeln!(
            f,
            "Face:       eyes at {}, rotation {:.3} deg, top {}, chin {}",
            self.geometry.eye_center,
            self.geometry.rotation_degrees(),
            self.geometry.top,
            self.geometry.chin
        )?;
        writeln!(
            f,
            "Scale:      {:.4} (allowed {:.4} to {:.4})",
            self.scale.scale, self.scale.scale_min, self.scale.scale_max
        )?;
        writeln!(
            f,
            "Grid:       {} x {} = {} image(s)",
            self.grid.count_x,
            self.grid.count_y,
            self.placements.len()
        )?;
        for placement in &self.placements {
            writeln!(
                f,
                "  #{} at {:.1} / {:.1} mm",
                placement.index, placement.slot_mm.x, placement.slot_mm.y
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::Resolution;

    fn landmarks() -> Landmarks {
        Landmarks {
            left_eye: Vector2d::new(120.0, 150.0),
            right_eye: Vector2d::new(180.0, 156.0),
            nose: Vector2d::new(152.0, 185.0),
            head_y: 40.0,
            chin_y: 250.0,
            image_size: (300, 400),
            recorded_size: None,
        }
    }

    fn config() -> LayoutConfig {
        LayoutConfig {
            resolution: Resolution::new(300.0).unwrap(),
            canvas_mm: Vector2d::new(150.0, 100.0),
            border_mm: 2.0,
            line_mm: 3.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_placement_count_and_order() {
        let plan = plan_layout(&landmarks(), &config()).unwrap();
        // outlined 45 x 55 mm: 150 / 45.9 -> 3, 100 / 56.1 -> 1
        assert_eq!((plan.grid.count_x, plan.grid.count_y), (3, 1));
        assert_eq!(plan.placements.len(), 3);
        assert!(plan.placements[0].slot_mm.x < plan.placements[1].slot_mm.x);
        assert_eq!(plan.placements[2].index, 2);
    }

    #[test]
    fn test_nose_centered_and_eyes_aligned_in_each_slot() {
        let config = config();
        let plan = plan_layout(&landmarks(), &config).unwrap();
        let res = config.resolution;

        for placement in &plan.placements {
            let crop = placement.crop_px;
            let nose = placement.transform.apply(plan.geometry.nose);
            assert!((nose.x - (crop.base.x + crop.width() / 2.0)).abs() < 1e-6);

            let left = placement.transform.apply(plan.geometry.left_eye);
            let right = placement.transform.apply(plan.geometry.right_eye);
            let eye_line_mm = config.border_mm + config.standard().top_to_eyes.midpoint();
            assert!((left.y - (crop.base.y + res.to_px(eye_line_mm))).abs() < 1e-6);
            assert!((left.y - right.y).abs() < 1e-6);
        }
    }

    #[test]
    fn test_head_scaled_to_ideal_size() {
        let config = config();
        let plan = plan_layout(&landmarks(), &config).unwrap();
        let t = plan.placements[0].transform;
        let head_px = (t.apply(plan.geometry.chin) - t.apply(plan.geometry.top)).length();
        let head_mm = config.resolution.to_mm(head_px);
        assert!((head_mm - 34.0).abs() < 1e-6);
    }

    #[test]
    fn test_tiny_canvas_is_empty_not_an_error() {
        let config = LayoutConfig {
            canvas_mm: Vector2d::new(60.0, 40.0),
            border_mm: 0.5,
            line_mm: 0.5,
            ..config()
        };
        let plan = plan_layout(&landmarks(), &config).unwrap();
        assert!(plan.placements.is_empty());
        assert_eq!(plan.grid.count_x, 1);
    }

    #[test]
    fn test_degenerate_geometry_fails_before_layout() {
        let mut landmarks = landmarks();
        landmarks.right_eye = Vector2d::new(120.0, 300.0);
        assert!(matches!(
            plan_layout(&landmarks, &config()),
            Err(PassfotoError::DegenerateGeometry(_))
        ));
    }
}
