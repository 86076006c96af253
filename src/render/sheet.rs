//! Print sheet composition: portraits, cut marks and the check overlay.

use std::path::Path;

use super::draw;
use super::{Background, Color, DrawCommand, RenderJob};
use crate::compliance::{measure_placement, HeadSizeClass};
use crate::geo::{Box2d, Vector2d};
use crate::layout::{LayoutPlan, Placement};

/// One straight tick of a cut mark, in millimeters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tick {
    pub start: Vector2d,
    pub delta: Vector2d,
}

impl Tick {
    fn new(start: Vector2d, delta: Vector2d) -> Self {
        Self { start, delta }
    }
}

/// A cut mark: a horizontal and a vertical tick in the cut-line margin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CutMark {
    pub ticks: [Tick; 2],
}

/// The eight cut marks around one slot, in millimeters.
///
/// The first four sit on the corners of the bordered image and point
/// outward. The last four line up with the corners of the portrait inside
/// the border, projected onto the margin.
pub fn cut_marks(
    slot_mm: Vector2d,
    outlined_mm: Vector2d,
    line_mm: f64,
    border_mm: f64,
) -> [CutMark; 8] {
    let p = slot_mm;
    let l = line_mm;
    let b = border_mm;
    let o = outlined_mm;
    let left = Vector2d::new(-l, 0.0);
    let right = Vector2d::new(l, 0.0);
    let up = Vector2d::new(0.0, -l);
    let down = Vector2d::new(0.0, l);
    let corner = |at: Vector2d, h: Vector2d, v: Vector2d| CutMark {
        ticks: [Tick::new(at, h), Tick::new(at, v)],
    };
    let edge = |h_at: Vector2d, h: Vector2d, v_at: Vector2d, v: Vector2d| CutMark {
        ticks: [Tick::new(h_at, h), Tick::new(v_at, v)],
    };

    [
        // bordered image corners
        corner(p + Vector2d::new(l, l), left, up),
        corner(p + Vector2d::new(l, o.y - l), left, down),
        corner(p + Vector2d::new(o.x - l, l), right, up),
        corner(p + o - Vector2d::new(l, l), right, down),
        // portrait corners
        edge(
            p + Vector2d::new(l, l + b),
            left,
            p + Vector2d::new(l + b, l),
            up,
        ),
        edge(
            p + Vector2d::new(l, o.y - l - b),
            left,
            p + Vector2d::new(l + b, o.y - l),
            down,
        ),
        edge(
            p + Vector2d::new(o.x - l, l + b),
            right,
            p + Vector2d::new(o.x - l - b, l),
            up,
        ),
        edge(
            p + o - Vector2d::new(l, l + b),
            right,
            p + o - Vector2d::new(l + b, l),
            down,
        ),
    ]
}

/// Measurement overlay for one placement: bands, head lines and a label.
pub fn validation_overlay(plan: &LayoutPlan, placement: &Placement) -> Vec<DrawCommand> {
    let config = &plan.config;
    let res = config.resolution;
    let standard = config.standard();
    let image_mm = plan.dimensions.image_mm;
    let image_pos = placement.portrait_origin_mm(config);
    let image_pos_px = res.vec_to_px(image_pos);

    let mut cmds = Vec::new();

    // Rectangles: portrait outline, eye band, nose band
    cmds.push(draw::rectangle(
        Box2d::new(image_pos_px, res.vec_to_px(image_mm)),
        Some(Color::WHITE),
        None,
    ));
    let eyes = standard.top_to_eyes;
    cmds.push(draw::rectangle(
        Box2d::new(
            res.vec_to_px(image_pos + Vector2d::new(0.0, eyes.min)),
            res.vec_to_px(Vector2d::new(image_mm.x, eyes.span())),
        ),
        None,
        Some(Color::TRANSLUCENT_RED),
    ));
    let nose = standard.left_to_nose;
    cmds.push(draw::rectangle(
        Box2d::new(
            res.vec_to_px(image_pos + Vector2d::new(nose.min, eyes.min)),
            res.vec_to_px(Vector2d::new(nose.span(), image_mm.y - eyes.min)),
        ),
        None,
        Some(Color::TRANSLUCENT_RED),
    ));

    // Lines: chin, top of head, and an arrow between them
    let chin = placement.transform.apply(plan.geometry.chin);
    let top = placement.transform.apply(plan.geometry.top);
    let width_px = Vector2d::new(res.to_px(image_mm.x), 0.0);
    cmds.push(draw::relline(
        Vector2d::new(image_pos_px.x, chin.y),
        width_px,
        Color::RED,
    ));
    cmds.push(draw::relline(
        Vector2d::new(image_pos_px.x, top.y),
        width_px,
        Color::RED,
    ));
    let space = res.to_px(1.0);
    cmds.extend(draw::arrow(
        Vector2d::new(image_pos_px.x + space, chin.y),
        Vector2d::new(image_pos_px.x + space, top.y),
        Color::GREY,
        8.0,
    ));

    // Text: measured size and verdict
    let head = measure_placement(plan, placement);
    let color = match head.class {
        HeadSizeClass::Compliant => Color::named("green"),
        HeadSizeClass::Borderline => Color::named("yellow"),
        HeadSizeClass::NonCompliant => Color::named("red"),
    };
    cmds.push(draw::text(
        res.vec_to_px(image_pos + Vector2d::new(0.0, -1.0)),
        format!(
            "Head-to-chin: {:.1} mm ({})",
            head.size_mm,
            head.class.label()
        ),
        color,
        16.0,
    ));

    cmds
}

/// Builds the full print sheet for a plan.
///
/// Every placement gets one composite of the source photo and its cut
/// marks. With `overlay`, the canvas turns yellow and every placement also
/// gets its measurement overlay.
pub fn sheet_job(plan: &LayoutPlan, source: &Path, overlay: bool) -> RenderJob {
    let config = &plan.config;
    let res = config.resolution;
    let background = Background::Blank {
        size_px: plan.canvas_px,
        color: if overlay {
            Color::named("yellow")
        } else {
            Color::named("white")
        },
    };

    let mut commands = Vec::new();
    for placement in &plan.placements {
        commands.push(draw::composite(
            source,
            placement.transform,
            placement.crop_px,
        ));

        for mark in cut_marks(
            placement.slot_mm,
            plan.dimensions.outlined_mm,
            config.line_mm,
            config.border_mm,
        ) {
            for tick in mark.ticks {
                commands.push(draw::line(
                    res.vec_to_px(tick.start),
                    res.vec_to_px(tick.start + tick.delta),
                    Color::BLACK,
                ));
            }
        }

        if overlay {
            commands.extend(validation_overlay(plan, placement));
        }
    }

    RenderJob {
        background,
        commands,
    }
}
