//! Landmark check image: the resolved points drawn over the source photo.

use std::path::Path;

use super::draw;
use super::{Background, Color, DrawCommand, RenderJob};
use crate::face::ResolvedGeometry;
use crate::geo::Vector2d;

const POINT_RADIUS: f64 = 8.0;

fn point(center: Vector2d, color: Color) -> DrawCommand {
    draw::circle(center, POINT_RADIUS, Some(color), None)
}

/// Rings eyes, nose, top of head and chin on the source image, then draws
/// the eye line and the up-vector line between chin and top.
///
/// The rings are unfilled so the landmark pixel itself stays visible.
pub fn landmark_check_job(geometry: &ResolvedGeometry, source: &Path) -> RenderJob {
    let commands = vec![
        point(geometry.left_eye, Color::YELLOW),
        point(geometry.right_eye, Color::YELLOW),
        point(geometry.nose, Color::GREEN),
        point(geometry.top, Color::RED),
        point(geometry.chin, Color::MAGENTA),
        draw::line(geometry.left_eye, geometry.right_eye, Color::WHITE),
        draw::line(geometry.top, geometry.chin, Color::WHITE),
    ];

    RenderJob {
        background: Background::Source {
            path: source.to_path_buf(),
        },
        commands,
    }
}
