//! Error types for loading, remapping, and writing animation documents.

use std::path::PathBuf;

use thiserror::Error;

use crate::output::OutputFormat;

/// Top-level error type for remap operations.
///
/// Every variant is fatal to a run; nothing is retried.
#[derive(Debug, Error)]
pub enum RemapError {
    /// The input resource could not be opened or read.
    #[error("failed to read '{}': {source}", .path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input content is malformed or has an unexpected shape.
    #[error("failed to parse '{}': {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    /// The destination could not be created or written.
    #[error("failed to write '{}': {source}", .path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document could not be rendered in the requested format.
    #[error("failed to render {format} output: {message}")]
    Render {
        format: OutputFormat,
        message: String,
    },

    /// A sprite sheet grid with zero columns or rows.
    #[error("invalid sprite sheet grid {columns}x{rows}")]
    InvalidSpriteSheet { columns: u32, rows: u32 },
}

impl RemapError {
    /// Creates a parse error for the given path.
    pub fn parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        RemapError::Parse {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Returns the short kind name used in machine-readable reports.
    pub fn kind(&self) -> &'static str {
        match self {
            RemapError::Input { .. } => "input",
            RemapError::Parse { .. } => "parse",
            RemapError::Output { .. } => "output",
            RemapError::Render { .. } => "render",
            RemapError::InvalidSpriteSheet { .. } => "invalid_sprite_sheet",
        }
    }
}

/// Result alias for remap operations.
pub type Result<T> = std::result::Result<T, RemapError>;
