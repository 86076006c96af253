//! Serde model of the landmark document and the resolved landmark record.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::geo::Vector2d;

/// A landmark document as stored on disk.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PhotoDocument {
    /// The source photo.
    pub image: SourceImage,

    /// Points of interest on the source photo, in pixels.
    pub pois: Pois,
}

/// Reference to the source raster image.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SourceImage {
    /// Path of the image. Relative paths are resolved against the document.
    pub filename: PathBuf,

    /// Image size `[width, height]` the landmarks were recorded against.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry: Option<[u32; 2]>,
}

/// Landmark coordinates in source image pixels.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pois {
    pub left_eye: [f64; 2],
    pub right_eye: [f64; 2],
    pub nose: [f64; 2],
    /// Y of the horizontal line touching the top of the head.
    pub head_y: f64,
    /// Y of the horizontal line touching the chin.
    pub chin_y: f64,
}

/// Landmarks ready for geometry resolution.
///
/// Couples the document's points of interest with the measured size of the
/// image actually on disk.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Landmarks {
    pub left_eye: Vector2d,
    pub right_eye: Vector2d,
    pub nose: Vector2d,
    pub head_y: f64,
    pub chin_y: f64,
    /// Measured `(width, height)` of the source image.
    pub image_size: (u32, u32),
    /// Size recorded in the document, if any.
    pub recorded_size: Option<(u32, u32)>,
}

impl Landmarks {
    /// Builds landmarks from a document and the measured image size.
    pub fn from_document(document: &PhotoDocument, image_size: (u32, u32)) -> Self {
        let pois = &document.pois;
        Self {
            left_eye: pois.left_eye.into(),
            right_eye: pois.right_eye.into(),
            nose: pois.nose.into(),
            head_y: pois.head_y,
            chin_y: pois.chin_y,
            image_size,
            recorded_size: document.image.geometry.map(|[w, h]| (w, h)),
        }
    }
}
