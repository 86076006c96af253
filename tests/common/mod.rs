#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

const FILE_HEADER_LEN: u32 = 14;
const INFO_HEADER_LEN: u32 = 40;

/// An all-black 24-bit BMP of the given size. Only the header matters to
/// the size probe; the pixel rows are zero-filled.
pub fn bmp_bytes(width: u32, height: u32) -> Vec<u8> {
    let pixel_offset = FILE_HEADER_LEN + INFO_HEADER_LEN;
    // rows are padded to four bytes
    let row_len = (width * 3).div_ceil(4) * 4;
    let file_len = pixel_offset + row_len * height;

    let mut bytes = Vec::with_capacity(file_len as usize);
    // BITMAPFILEHEADER
    bytes.extend_from_slice(b"BM");
    bytes.extend_from_slice(&file_len.to_le_bytes());
    bytes.extend_from_slice(&[0; 4]);
    bytes.extend_from_slice(&pixel_offset.to_le_bytes());
    // BITMAPINFOHEADER
    bytes.extend_from_slice(&INFO_HEADER_LEN.to_le_bytes());
    bytes.extend_from_slice(&(width as i32).to_le_bytes());
    bytes.extend_from_slice(&(height as i32).to_le_bytes());
    bytes.extend_from_slice(&1u16.to_le_bytes()); // planes
    bytes.extend_from_slice(&24u16.to_le_bytes()); // bits per pixel
    bytes.extend_from_slice(&[0; 4]); // no compression
    bytes.extend_from_slice(&(row_len * height).to_le_bytes());
    bytes.extend_from_slice(&11811u32.to_le_bytes()); // 300 dpi in px/m
    bytes.extend_from_slice(&11811u32.to_le_bytes());
    bytes.extend_from_slice(&[0; 8]); // palette counts

    bytes.resize(file_len as usize, 0);
    bytes
}

pub fn write_bmp(path: &Path, width: u32, height: u32) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dir");
    }
    fs::write(path, bmp_bytes(width, height)).expect("write bmp file");
}

/// Writes `face.bmp` (300 x 400) and a `face.json` landmark document
/// pointing at it into `dir`, returning the JSON path.
///
/// The left eye, nose and head/chin lines are fixed; `right_eye` and the
/// recorded `geometry` vary per test.
pub fn write_portrait(dir: &Path, right_eye: [f64; 2], geometry: Option<[u32; 2]>) -> PathBuf {
    write_bmp(&dir.join("face.bmp"), 300, 400);

    let mut image = serde_json::json!({ "filename": "face.bmp" });
    if let Some(geometry) = geometry {
        image["geometry"] = serde_json::json!(geometry);
    }
    let document = serde_json::json!({
        "image": image,
        "pois": {
            "left_eye": [120.0, 150.0],
            "right_eye": right_eye,
            "nose": [150.0, 180.0],
            "head_y": 40.0,
            "chin_y": 250.0
        }
    });

    let path = dir.join("face.json");
    fs::write(&path, document.to_string()).expect("write landmark json");
    path
}
