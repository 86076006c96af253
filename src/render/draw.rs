//! Stateless helpers that build [`DrawCommand`]s.

use std::path::Path;

use super::{Color, DrawCommand};
use crate::geo::{AffineTransform, Box2d, Vector2d};

/// Default stroke width in pixels.
pub const STROKE_WIDTH: f64 = 1.0;

pub fn circle(
    center: Vector2d,
    radius: f64,
    stroke: Option<Color>,
    fill: Option<Color>,
) -> DrawCommand {
    DrawCommand::Circle {
        center,
        radius,
        stroke,
        fill,
        stroke_width: STROKE_WIDTH,
    }
}

pub fn line(from: Vector2d, to: Vector2d, stroke: Color) -> DrawCommand {
    DrawCommand::Line {
        from,
        to,
        stroke,
        stroke_width: STROKE_WIDTH,
    }
}

/// A line from `from` to `from + rel`.
pub fn relline(from: Vector2d, rel: Vector2d, stroke: Color) -> DrawCommand {
    line(from, from + rel, stroke)
}

/// A line with arrow heads at both ends.
///
/// Degenerates to the bare line when both ends coincide.
pub fn arrow(p1: Vector2d, p2: Vector2d, stroke: Color, tip_size: f64) -> Vec<DrawCommand> {
    let shaft = line(p1, p2, stroke.clone());
    let (Some(direct), Some(perp)) = (
        (p1 - p2).normalized(),
        (p1 - p2).perpendicular(false).normalized(),
    ) else {
        return vec![shaft];
    };

    let side = perp * tip_size;
    let back = direct * tip_size;
    vec![
        shaft,
        relline(p1, side - back, stroke.clone()),
        relline(p1, -side - back, stroke.clone()),
        relline(p2, side + back, stroke.clone()),
        relline(p2, -side + back, stroke),
    ]
}

pub fn rectangle(rect: Box2d, stroke: Option<Color>, fill: Option<Color>) -> DrawCommand {
    DrawCommand::Rectangle {
        rect,
        stroke,
        fill,
        stroke_width: STROKE_WIDTH,
    }
}

pub fn text(
    position: Vector2d,
    text: impl Into<String>,
    color: Color,
    font_size: f64,
) -> DrawCommand {
    DrawCommand::Text {
        position,
        text: text.into(),
        color,
        font_size,
    }
}

pub fn composite(source: &Path, transform: AffineTransform, crop: Box2d) -> DrawCommand {
    DrawCommand::Composite {
        source: source.to_path_buf(),
        transform,
        crop,
    }
}
