//! Scale factor selection against the chin-to-head standard.

use log::{debug, trace};
use serde::Serialize;

use crate::error::PassfotoError;
use crate::face::ResolvedGeometry;
use crate::geo::Resolution;
use crate::standards::MeasurementStandard;

/// The chosen scale and the band it was chosen from.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ScaleSolution {
    /// The scale applied to the source image.
    pub scale: f64,
    /// Scale that maps the head to the minimum legal size.
    pub scale_min: f64,
    /// Scale that maps the head to the maximum legal size.
    pub scale_max: f64,
    /// Scale that maps the head to the middle of the ideal range.
    pub scale_ideal: f64,
    /// Distance from the top of the portrait down to the eye line, in pixels.
    pub top_to_eyes_px: f64,
}

/// Chooses the source-to-print scale factor.
///
/// The ideal scale puts the chin-to-head distance at the middle of the
/// ideal range; it is then clamped into the band that keeps the head within
/// the outer legal range.
///
/// # Errors
/// Returns [`PassfotoError::DegenerateGeometry`] if top and chin coincide.
pub fn solve_scale(
    geometry: &ResolvedGeometry,
    standard: &MeasurementStandard,
    resolution: Resolution,
) -> Result<ScaleSolution, PassfotoError> {
    let chin_to_head_orig_px = geometry.chin_to_head_px();
    if !(chin_to_head_orig_px > 0.0 && chin_to_head_orig_px.is_finite()) {
        return Err(PassfotoError::DegenerateGeometry(format!(
            "top of head {} and chin {} coincide",
            geometry.top, geometry.chin
        )));
    }

    let chin_to_head_min_px = resolution.to_px(standard.chin_to_head.min);
    let chin_to_head_max_px = resolution.to_px(standard.chin_to_head.max);
    let chin_to_head_ideal_px = resolution.to_px(standard.chin_to_head_ideal.midpoint());

    let scale_min = chin_to_head_min_px / chin_to_head_orig_px;
    let scale_max = chin_to_head_max_px / chin_to_head_orig_px;
    let scale_ideal = chin_to_head_ideal_px / chin_to_head_orig_px;
    trace!(
        "Scaling between {:.3} and {:.3}, ideally {:.3}",
        scale_min,
        scale_max,
        scale_ideal
    );

    let scale = if scale_ideal < scale_min {
        scale_min
    } else if scale_ideal > scale_max {
        scale_max
    } else {
        scale_ideal
    };
    debug!("Chosen scaling factor: {:.3}", scale);

    Ok(ScaleSolution {
        scale,
        scale_min,
        scale_max,
        scale_ideal,
        top_to_eyes_px: resolution.to_px(standard.top_to_eyes.midpoint()),
    })
}
