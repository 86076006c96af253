//! Face geometry resolution.
//!
//! Turns raw landmarks into the frame the layout solver works in: the eye
//! line angle, a unit up-vector perpendicular to the eye line, and the top
//! of head and chin anchor points on that up-vector.

use log::{debug, warn};
use serde::Serialize;

use crate::error::PassfotoError;
use crate::geo::Vector2d;
use crate::input::Landmarks;

/// Landmark geometry in the source image, resolved once per run.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ResolvedGeometry {
    pub left_eye: Vector2d,
    pub right_eye: Vector2d,
    pub nose: Vector2d,
    /// Midpoint between the eyes.
    pub eye_center: Vector2d,
    /// Unit vector perpendicular to the eye line, toward the top of the head.
    pub up_vector: Vector2d,
    /// Where the up-vector ray through `eye_center` meets `y = head_y`.
    pub top: Vector2d,
    /// Where the up-vector ray through `eye_center` meets `y = chin_y`.
    pub chin: Vector2d,
    /// Angle of `right_eye - left_eye`, in radians within `(-π, π]`.
    pub rotation_angle: f64,
}

impl ResolvedGeometry {
    /// Distance from chin to top of head in source pixels.
    #[inline]
    pub fn chin_to_head_px(&self) -> f64 {
        (self.top - self.chin).length()
    }

    /// Eye line rotation in degrees.
    #[inline]
    pub fn rotation_degrees(&self) -> f64 {
        self.rotation_angle.to_degrees()
    }
}

/// Resolves landmarks into the normalized face frame.
///
/// # Errors
/// Returns [`PassfotoError::DegenerateGeometry`] when the eyes coincide or
/// the eye line is vertical, since no up-vector ray then crosses the
/// horizontal head and chin lines.
pub fn resolve(landmarks: &Landmarks) -> Result<ResolvedGeometry, PassfotoError> {
    let left_eye = landmarks.left_eye;
    let right_eye = landmarks.right_eye;

    if !(left_eye.is_finite()
        && right_eye.is_finite()
        && landmarks.nose.is_finite()
        && landmarks.head_y.is_finite()
        && landmarks.chin_y.is_finite())
    {
        return Err(PassfotoError::DegenerateGeometry(
            "landmark coordinates must be finite".into(),
        ));
    }

    let eye_center = (left_eye + right_eye) / 2.0;
    let up_vector = (left_eye - right_eye)
        .perpendicular(true)
        .normalized()
        .ok_or_else(|| {
            PassfotoError::DegenerateGeometry(format!(
                "left and right eye coincide at {}",
                left_eye
            ))
        })?;

    if up_vector.y == 0.0 {
        return Err(PassfotoError::DegenerateGeometry(format!(
            "eye line from {} to {} is vertical",
            left_eye, right_eye
        )));
    }

    let on_ray = |target_y: f64| {
        let mu = (target_y - eye_center.y) / up_vector.y;
        eye_center + mu * up_vector
    };
    let top = on_ray(landmarks.head_y);
    let chin = on_ray(landmarks.chin_y);
    let rotation_angle = (right_eye - left_eye).angle();

    let geometry = ResolvedGeometry {
        left_eye,
        right_eye,
        nose: landmarks.nose,
        eye_center,
        up_vector,
        top,
        chin,
        rotation_angle,
    };

    debug!("Known geometry:");
    debug!("    Left eye  : {}", geometry.left_eye);
    debug!("    Right eye : {}", geometry.right_eye);
    debug!("    Nose      : {}", geometry.nose);
    debug!("Computed geometry:");
    debug!("    Eye center: {}", geometry.eye_center);
    debug!("    Top       : {}", geometry.top);
    debug!("    Chin      : {}", geometry.chin);
    debug!("    Rotation  : {:.2}°", geometry.rotation_degrees());

    Ok(geometry)
}

/// A mismatch between the recorded and the measured source image size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct DimensionDrift {
    pub recorded: (u32, u32),
    pub actual: (u32, u32),
}

/// Compares the recorded image size with the measured one.
///
/// Drift is reported, never fatal: the landmarks are taken as authoritative
/// for the image on disk.
pub fn detect_drift(landmarks: &Landmarks) -> Option<DimensionDrift> {
    let recorded = landmarks.recorded_size?;
    if recorded == landmarks.image_size {
        return None;
    }

    let drift = DimensionDrift {
        recorded,
        actual: landmarks.image_size,
    };
    warn!(
        "Image geometry has changed. Classified image is supposed to be {} x {}, but actual image has {} x {} pixels.",
        recorded.0, recorded.1, drift.actual.0, drift.actual.1
    );
    Some(drift)
}
