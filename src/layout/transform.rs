//! The normalizing transform, built as a fold over explicit steps.

use serde::Serialize;

use super::scale::ScaleSolution;
use crate::face::ResolvedGeometry;
use crate::geo::{AffineTransform, Vector2d};

/// One step of the source-to-canvas transform.
///
/// Steps run in order, each one after the transform accumulated so far.
/// Anchored steps measure their anchor through that accumulated transform,
/// so centering sees the already scaled and rotated position.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub enum TransformStep {
    /// Uniform scale about the origin.
    Scale(f64),
    /// Rotation about the origin, in radians.
    Rotate(f64),
    /// Shift horizontally so `anchor` lands on `target_x`.
    CenterHorizontally { anchor: Vector2d, target_x: f64 },
    /// Shift vertically so `anchor` lands on `target_y`.
    AlignVertically { anchor: Vector2d, target_y: f64 },
    /// Fixed translation.
    Translate(Vector2d),
}

impl TransformStep {
    /// Returns this step as an affine map, given the transform so far.
    fn to_affine(self, current: &AffineTransform) -> AffineTransform {
        match self {
            TransformStep::Scale(factor) => AffineTransform::scale(factor),
            TransformStep::Rotate(radians) => AffineTransform::rotate(radians),
            TransformStep::CenterHorizontally { anchor, target_x } => {
                let at = current.apply(anchor);
                AffineTransform::translate(Vector2d::new(target_x - at.x, 0.0))
            }
            TransformStep::AlignVertically { anchor, target_y } => {
                let at = current.apply(anchor);
                AffineTransform::translate(Vector2d::new(0.0, target_y - at.y))
            }
            TransformStep::Translate(offset) => AffineTransform::translate(offset),
        }
    }
}

/// Composes steps left to right into one transform.
pub fn compose(steps: &[TransformStep]) -> AffineTransform {
    steps
        .iter()
        .fold(AffineTransform::IDENTITY, |current, step| {
            current.then(step.to_affine(&current))
        })
}

/// The five steps that take the source photo onto one canvas slot.
///
/// 1. scale by the chosen factor,
/// 2. rotate the eye line level,
/// 3. put the nose on the vertical center line of the bordered image,
/// 4. put the left eye at `border_px + top_to_eyes_px` from the bordered top,
/// 5. move to the bordered image origin of the slot, `slot_px`.
pub fn normalizing_steps(
    geometry: &ResolvedGeometry,
    scale: &ScaleSolution,
    bordered_px: Vector2d,
    border_px: f64,
    slot_px: Vector2d,
) -> [TransformStep; 5] {
    [
        TransformStep::Scale(scale.scale),
        TransformStep::Rotate(-geometry.rotation_angle),
        TransformStep::CenterHorizontally {
            anchor: geometry.nose,
            target_x: bordered_px.x / 2.0,
        },
        TransformStep::AlignVertically {
            anchor: geometry.left_eye,
            target_y: border_px + scale.top_to_eyes_px,
        },
        TransformStep::Translate(slot_px),
    ]
}
