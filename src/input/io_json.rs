//! JSON reading for landmark documents.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use super::model::PhotoDocument;
use crate::error::PassfotoError;

/// Reads a landmark document from a JSON file.
///
/// A relative `image.filename` is rewritten to be relative to the
/// directory holding the JSON file, so documents can sit next to their
/// photos and be used from any working directory.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
pub fn read_photo_json(path: &Path) -> Result<PhotoDocument, PassfotoError> {
    let file = File::open(path).map_err(PassfotoError::Io)?;
    let reader = BufReader::new(file);

    let mut document: PhotoDocument =
        serde_json::from_reader(reader).map_err(|source| PassfotoError::InputJsonParse {
            path: path.to_path_buf(),
            source,
        })?;

    if document.image.filename.is_relative() {
        if let Some(parent) = path.parent() {
            document.image.filename = parent.join(&document.image.filename);
        }
    }

    Ok(document)
}

/// Parses a landmark document from a JSON string.
///
/// Useful for testing without file I/O. Paths are left untouched.
pub fn from_json_str(json: &str) -> Result<PhotoDocument, serde_json::Error> {
    serde_json::from_str(json)
}

/// Parses a landmark document from raw bytes.
pub fn from_json_slice(bytes: &[u8]) -> Result<PhotoDocument, serde_json::Error> {
    serde_json::from_slice(bytes)
}

/// Writes a landmark document to a pretty-printed JSON string.
pub fn to_json_string(document: &PhotoDocument) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(document)
}
