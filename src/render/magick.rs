//! ImageMagick backend.
//!
//! Translates a [`RenderJob`] into a single `convert` invocation. Each draw
//! command sets every setting it draws with: shapes set stroke, fill and
//! stroke width, lines set stroke and stroke width, and text sets fill with
//! the stroke turned off.

use std::path::Path;
use std::process::Command;

use log::{debug, trace};

use super::{Background, Color, DrawCommand, RenderJob};
use crate::error::PassfotoError;

/// Anything that can turn a [`RenderJob`] into an image file.
pub trait Renderer {
    fn render(&self, job: &RenderJob, output: &Path) -> Result<(), PassfotoError>;
}

/// Renders by running ImageMagick's `convert` (or a compatible program).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MagickRenderer {
    program: String,
}

impl Default for MagickRenderer {
    fn default() -> Self {
        Self::new("convert")
    }
}

impl MagickRenderer {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// The full command line for `job`, quoted for display.
    pub fn command_line(&self, job: &RenderJob, output: &Path) -> String {
        std::iter::once(self.program.clone())
            .chain(magick_args(job, output))
            .map(|arg| shell_quote(&arg))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Renderer for MagickRenderer {
    fn render(&self, job: &RenderJob, output: &Path) -> Result<(), PassfotoError> {
        let args = magick_args(job, output);
        debug!(
            "Running {} with {} draw command(s)",
            self.program,
            job.commands.len()
        );
        trace!("{} {:?}", self.program, args);

        let status = Command::new(&self.program)
            .args(&args)
            .status()
            .map_err(|source| PassfotoError::RenderSpawn {
                program: self.program.clone(),
                source,
            })?;

        if !status.success() {
            return Err(PassfotoError::RenderFailed {
                program: self.program.clone(),
                status: status.to_string(),
            });
        }
        Ok(())
    }
}

fn shell_quote(arg: &str) -> String {
    let plain = !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_.,:/+=#%@".contains(c));
    if plain {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', r"'\''"))
    }
}

fn color_or_none(color: &Option<Color>) -> String {
    color
        .as_ref()
        .map_or_else(|| "none".to_string(), |c| c.to_string())
}

fn push_command(args: &mut Vec<String>, cmd: &DrawCommand) {
    match cmd {
        DrawCommand::Circle {
            center,
            radius,
            stroke,
            fill,
            stroke_width,
        } => {
            args.extend([
                "-stroke".to_string(),
                color_or_none(stroke),
                "-fill".to_string(),
                color_or_none(fill),
                "-strokewidth".to_string(),
                stroke_width.to_string(),
                "-draw".to_string(),
                format!(
                    "circle {:.6},{:.6} {:.6},{:.6}",
                    center.x,
                    center.y,
                    center.x + radius,
                    center.y
                ),
            ]);
        }
        DrawCommand::Line {
            from,
            to,
            stroke,
            stroke_width,
        } => {
            args.extend([
                "-stroke".to_string(),
                stroke.to_string(),
                "-strokewidth".to_string(),
                stroke_width.to_string(),
                "-draw".to_string(),
                format!("line {:.6},{:.6} {:.6},{:.6}", from.x, from.y, to.x, to.y),
            ]);
        }
        DrawCommand::Rectangle {
            rect,
            stroke,
            fill,
            stroke_width,
        } => {
            let upper = rect.upper();
            args.extend([
                "-stroke".to_string(),
                color_or_none(stroke),
                "-strokewidth".to_string(),
                stroke_width.to_string(),
                "-fill".to_string(),
                color_or_none(fill),
                "-draw".to_string(),
                format!(
                    "rectangle {:.6},{:.6} {:.6},{:.6}",
                    rect.base.x, rect.base.y, upper.x, upper.y
                ),
            ]);
        }
        DrawCommand::Text {
            position,
            text,
            color,
            font_size,
        } => {
            args.extend([
                "-stroke".to_string(),
                "none".to_string(),
                "-fill".to_string(),
                color.to_string(),
                "-pointsize".to_string(),
                font_size.to_string(),
                "-draw".to_string(),
                format!(
                    "text {:.6},{:.6} '{}'",
                    position.x,
                    position.y,
                    text.replace('\\', r"\\").replace('\'', r"\'")
                ),
            ]);
        }
        DrawCommand::Composite {
            source,
            transform,
            crop,
        } => {
            let [sx, rx, ry, sy, tx, ty] = transform.as_magick_affine();
            args.extend([
                "(".to_string(),
                source.display().to_string(),
                "-virtual-pixel".to_string(),
                "Transparent".to_string(),
                "-affine".to_string(),
                format!(
                    "{:.6},{:.6},{:.6},{:.6},{:.6},{:.6}",
                    sx, rx, ry, sy, tx, ty
                ),
                "-transform".to_string(),
                "-crop".to_string(),
                format!(
                    "{:.0}x{:.0}+{:.0}+{:.0}",
                    crop.width(),
                    crop.height(),
                    crop.base.x,
                    crop.base.y
                ),
                ")".to_string(),
                "-flatten".to_string(),
            ]);
        }
    }
}

/// Builds the `convert` argument list for `job`, ending with `output`.
pub fn magick_args(job: &RenderJob, output: &Path) -> Vec<String> {
    let mut args = Vec::new();
    match &job.background {
        Background::Blank { size_px, color } => {
            args.push("-size".to_string());
            args.push(format!("{:.0}x{:.0}", size_px.x, size_px.y));
            args.push(format!("xc:{}", color));
        }
        Background::Source { path } => args.push(path.display().to_string()),
    }
    for cmd in &job.commands {
        push_command(&mut args, cmd);
    }
    args.push(output.display().to_string());
    args
}
