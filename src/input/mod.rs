//! Landmark input documents.
//!
//! A photo document names a source raster image and the points of interest
//! located on it:
//!
//! ```json
//! {
//!   "image": { "filename": "portrait.jpg", "geometry": [600, 800] },
//!   "pois": {
//!     "left_eye": [120, 150],
//!     "right_eye": [180, 150],
//!     "nose": [150, 180],
//!     "head_y": 40,
//!     "chin_y": 250
//!   }
//! }
//! ```
//!
//! `geometry` is the size the landmarks were recorded against. It is
//! optional and only used to warn when the image on disk has changed.

mod image;
pub mod io_json;
mod model;

pub use image::{load_landmarks, probe_image_size};
pub use model::{Landmarks, PhotoDocument, Pois, SourceImage};
