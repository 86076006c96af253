use std::path::PathBuf;
use thiserror::Error;

use crate::compliance::ComplianceReport;

/// The main error type for passfoto operations.
#[derive(Debug, Error)]
pub enum PassfotoError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse landmark JSON from {path}: {source}")]
    InputJsonParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Failed to read image dimensions from {path}: {source}")]
    ImageProbe {
        path: PathBuf,
        #[source]
        source: imagesize::ImageError,
    },

    #[error("Degenerate face geometry: {0}")]
    DegenerateGeometry(String),

    #[error("Unknown photo category '{0}' (supported: adult, child)")]
    InvalidCategory(String),

    #[error("Unsupported length unit '{0}' (supported: mm, cm, in)")]
    UnsupportedUnit(String),

    #[error("Invalid length: {0}")]
    InvalidLength(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Failed to start renderer '{program}': {source}")]
    RenderSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Renderer '{program}' failed: {status}")]
    RenderFailed { program: String, status: String },

    #[error("Compliance check failed with {error_count} error(s) and {warning_count} warning(s)")]
    ComplianceFailed {
        error_count: usize,
        warning_count: usize,
        report: ComplianceReport,
    },
}
