//! Layered configuration.
//!
//! A [`LayoutConfig`] is assembled from three layers, later ones winning:
//! built-in defaults, an optional YAML file, and command-line flags.
//!
//! ```yaml
//! category: child
//! resolution: 600
//! canvas_width: 6in
//! canvas_height: 4in
//! border: 2mm
//! line: 0.3cm
//! ```

use std::fs;
use std::path::Path;

use log::debug;
use serde::Deserialize;

use crate::error::PassfotoError;
use crate::geo::{Length, Resolution, Vector2d};
use crate::layout::LayoutConfig;
use crate::standards::PhotoCategory;

/// One configuration layer. Every field is optional; unset fields fall
/// through to the layer below.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub category: Option<PhotoCategory>,
    pub resolution: Option<Resolution>,
    pub canvas_width: Option<Length>,
    pub canvas_height: Option<Length>,
    pub border: Option<Length>,
    pub line: Option<Length>,
}

impl ConfigFile {
    /// Stacks `upper` on top of `self`.
    pub fn overlay(self, upper: ConfigFile) -> ConfigFile {
        ConfigFile {
            category: upper.category.or(self.category),
            resolution: upper.resolution.or(self.resolution),
            canvas_width: upper.canvas_width.or(self.canvas_width),
            canvas_height: upper.canvas_height.or(self.canvas_height),
            border: upper.border.or(self.border),
            line: upper.line.or(self.line),
        }
    }

    /// Applies this layer over the defaults and validates the result.
    pub fn into_layout_config(self) -> Result<LayoutConfig, PassfotoError> {
        let defaults = LayoutConfig::default();
        let config = LayoutConfig {
            resolution: self.resolution.unwrap_or(defaults.resolution),
            canvas_mm: Vector2d::new(
                self.canvas_width
                    .map_or(defaults.canvas_mm.x, |l| l.to_mm()),
                self.canvas_height
                    .map_or(defaults.canvas_mm.y, |l| l.to_mm()),
            ),
            border_mm: self.border.map_or(defaults.border_mm, |l| l.to_mm()),
            line_mm: self.line.map_or(defaults.line_mm, |l| l.to_mm()),
            category: self.category.unwrap_or(defaults.category),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Parses a configuration layer from YAML text.
pub fn from_yaml_str(yaml: &str) -> Result<ConfigFile, serde_yaml::Error> {
    // an empty document is an empty layer
    if yaml.trim().is_empty() {
        return Ok(ConfigFile::default());
    }
    serde_yaml::from_str(yaml)
}

/// Reads a configuration layer from a YAML file.
pub fn read_config_file(path: &Path) -> Result<ConfigFile, PassfotoError> {
    let data = fs::read_to_string(path)?;
    let file = from_yaml_str(&data).map_err(|source| PassfotoError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Loaded config from {}: {:?}", path.display(), file);
    Ok(file)
}

/// Builds the run configuration: defaults, then `file` if given, then `cli`.
pub fn load_layout_config(
    file: Option<&Path>,
    cli: ConfigFile,
) -> Result<LayoutConfig, PassfotoError> {
    let base = match file {
        Some(path) => read_config_file(path)?,
        None => ConfigFile::default(),
    };
    base.overlay(cli).into_layout_config()
}
