//! Source image probing.

use std::path::Path;

use log::debug;

use super::io_json::read_photo_json;
use super::model::{Landmarks, PhotoDocument};
use crate::error::PassfotoError;

/// Reads `(width, height)` from the image header without decoding pixels.
pub fn probe_image_size(path: &Path) -> Result<(u32, u32), PassfotoError> {
    let size = imagesize::size(path).map_err(|source| PassfotoError::ImageProbe {
        path: path.to_path_buf(),
        source,
    })?;

    let width: u32 = size.width.try_into().map_err(|_| {
        PassfotoError::InvalidLength(format!("image width {} does not fit in u32", size.width))
    })?;
    let height: u32 = size.height.try_into().map_err(|_| {
        PassfotoError::InvalidLength(format!(
            "image height {} does not fit in u32",
            size.height
        ))
    })?;

    Ok((width, height))
}

/// Reads a landmark document and measures the image it points at.
pub fn load_landmarks(path: &Path) -> Result<(PhotoDocument, Landmarks), PassfotoError> {
    let document = read_photo_json(path)?;
    let image_size = probe_image_size(&document.image.filename)?;
    debug!(
        "Source image {} is {} x {} pixels",
        document.image.filename.display(),
        image_size.0,
        image_size.1
    );
    let landmarks = Landmarks::from_document(&document, image_size);
    Ok((document, landmarks))
}
