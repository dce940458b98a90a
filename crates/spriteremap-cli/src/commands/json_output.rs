//! JSON output types for machine-readable CLI output (`--json`).

use serde::Serialize;
use spriteremap_core::{DocumentSummary, RemapError, RemapReport};

/// Stable error codes for `--json` output.
pub mod error_codes {
    /// Input file could not be read
    pub const INPUT: &str = "REMAP_001";
    /// Input content malformed or wrongly shaped
    pub const PARSE: &str = "REMAP_002";
    /// Destination could not be written
    pub const OUTPUT: &str = "REMAP_003";
    /// Document could not be rendered
    pub const RENDER: &str = "REMAP_004";
    /// Sprite sheet grid with a zero dimension
    pub const SPRITE_SHEET: &str = "REMAP_005";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "REMAP_002")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// File the error refers to (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl JsonError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            file: None,
        }
    }

    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}

impl From<&RemapError> for JsonError {
    fn from(err: &RemapError) -> Self {
        let (code, file) = match err {
            RemapError::Input { path, .. } => (error_codes::INPUT, Some(path)),
            RemapError::Parse { path, .. } => (error_codes::PARSE, Some(path)),
            RemapError::Output { path, .. } => (error_codes::OUTPUT, Some(path)),
            RemapError::Render { .. } => (error_codes::RENDER, None),
            RemapError::InvalidSpriteSheet { .. } => (error_codes::SPRITE_SHEET, None),
        };
        let error = JsonError::new(code, err.to_string());
        match file {
            Some(path) => error.with_file(path.display().to_string()),
            None => error,
        }
    }
}

/// JSON output for the `remap` command.
#[derive(Debug, Clone, Serialize)]
pub struct RemapOutput {
    pub success: bool,
    pub errors: Vec<JsonError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<RemapReport>,
}

impl RemapOutput {
    pub fn success(report: RemapReport) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            report: Some(report),
        }
    }

    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            errors,
            report: None,
        }
    }
}

/// Pixel size of one sprite sheet cell.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct CellSize {
    pub width: u32,
    pub height: u32,
}

/// JSON output for the `inspect` command.
#[derive(Debug, Clone, Serialize)]
pub struct InspectOutput {
    pub success: bool,
    pub errors: Vec<JsonError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<DocumentSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cell_size: Option<CellSize>,
}

impl InspectOutput {
    pub fn success(summary: DocumentSummary, cell_size: Option<CellSize>) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            summary: Some(summary),
            cell_size,
        }
    }

    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            errors,
            summary: None,
            cell_size: None,
        }
    }
}
