//! Renderer contract: abstract drawing commands and their backends.
//!
//! The layout engine never touches pixels. It describes the output as a
//! [`RenderJob`], an ordered list of [`DrawCommand`]s in absolute canvas
//! pixels, and hands it to a [`Renderer`].

mod check;
pub mod draw;
mod magick;
mod sheet;

pub use check::landmark_check_job;
pub use magick::{magick_args, MagickRenderer, Renderer};
pub use sheet::{cut_marks, sheet_job, validation_overlay, CutMark, Tick};

use serde::Serialize;
use std::borrow::Cow;
use std::fmt;
use std::path::PathBuf;

use crate::geo::{AffineTransform, Box2d, Vector2d};

/// A color as understood by the backend: `#rrggbb[aa]` or a color name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Color(Cow<'static, str>);

impl Color {
    pub const BLACK: Color = Color::named("#000000");
    pub const WHITE: Color = Color::named("#ffffff");
    pub const RED: Color = Color::named("#ff0000");
    pub const GREEN: Color = Color::named("#00ff00");
    pub const YELLOW: Color = Color::named("#ffff00");
    pub const MAGENTA: Color = Color::named("#ff00ff");
    pub const GREY: Color = Color::named("#cccccc");
    /// Red at 25% opacity, for measurement bands.
    pub const TRANSLUCENT_RED: Color = Color::named("#ff000040");

    /// A color from a static name or hex string.
    pub const fn named(name: &'static str) -> Self {
        Color(Cow::Borrowed(name))
    }

    /// The color string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One drawing operation, in absolute canvas pixels.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    Circle {
        center: Vector2d,
        radius: f64,
        stroke: Option<Color>,
        fill: Option<Color>,
        stroke_width: f64,
    },
    Line {
        from: Vector2d,
        to: Vector2d,
        stroke: Color,
        stroke_width: f64,
    },
    Rectangle {
        rect: Box2d,
        stroke: Option<Color>,
        fill: Option<Color>,
        stroke_width: f64,
    },
    Text {
        position: Vector2d,
        text: String,
        color: Color,
        font_size: f64,
    },
    /// Transform `source` onto the canvas and keep only `crop`.
    Composite {
        source: PathBuf,
        transform: AffineTransform,
        crop: Box2d,
    },
}

/// What the commands are drawn on.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Background {
    /// A fresh canvas of `size_px` filled with `color`.
    Blank { size_px: Vector2d, color: Color },
    /// An existing image.
    Source { path: PathBuf },
}

/// A complete, ordered description of one output image.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RenderJob {
    pub background: Background,
    pub commands: Vec<DrawCommand>,
}

impl RenderJob {
    /// Number of composite commands in the job.
    pub fn composite_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Composite { .. }))
            .count()
    }
}
