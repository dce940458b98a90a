//! End-to-end remap run: load, transform, serialize.

use std::io::Write;
use std::path::PathBuf;

use serde::Serialize;
use tracing::info;

use crate::error::{RemapError, Result};
use crate::load::load;
use crate::model::{DocumentSummary, SpriteSheetInfo};
use crate::output::{render, serialize, OutputFormat, OutputProfile};
use crate::schema::SchemaVariant;
use crate::transform::{transform, TransformOptions};

/// Input file name used when none is given.
pub const DEFAULT_INPUT: &str = "animations.json";

/// Where the rendered document goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    File(PathBuf),
    Stdout,
}

impl Destination {
    /// Parses a CLI path argument; `-` selects stdout.
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            Destination::Stdout
        } else {
            Destination::File(PathBuf::from(arg))
        }
    }
}

impl std::fmt::Display for Destination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Destination::File(path) => write!(f, "{}", path.display()),
            Destination::Stdout => write!(f, "-"),
        }
    }
}

/// Settings for a single remap run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemapConfig {
    pub input: PathBuf,
    /// Defaults to the profile's output file.
    pub output: Option<Destination>,
    pub profile: OutputProfile,
    /// Overrides the profile's format.
    pub format: Option<OutputFormat>,
    pub schema: SchemaVariant,
    /// Overrides the profile's sprite sheet block.
    pub sprite_sheet: Option<SpriteSheetInfo>,
}

impl Default for RemapConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: None,
            profile: OutputProfile::DEFAULT,
            format: None,
            schema: SchemaVariant::default(),
            sprite_sheet: None,
        }
    }
}

impl RemapConfig {
    pub fn format(&self) -> OutputFormat {
        self.format.unwrap_or_else(|| self.profile.format())
    }

    pub fn sprite_sheet(&self) -> Option<SpriteSheetInfo> {
        self.sprite_sheet.or_else(|| self.profile.sprite_sheet())
    }

    pub fn destination(&self) -> Destination {
        self.output
            .clone()
            .unwrap_or_else(|| Destination::File(PathBuf::from(self.profile.default_output())))
    }
}

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemapReport {
    pub input: String,
    pub output: String,
    pub profile: OutputProfile,
    pub format: OutputFormat,
    pub schema: SchemaVariant,
    pub summary: DocumentSummary,
}

/// Runs the whole pipeline. Any failing stage aborts the run.
pub fn remap(config: &RemapConfig) -> Result<RemapReport> {
    let format = config.format();
    let destination = config.destination();

    info!(input = %config.input.display(), schema = %config.schema, "loading animations");
    let records = load(&config.input, config.schema)?;

    let options = TransformOptions {
        sprite_sheet: config.sprite_sheet(),
    };
    let document = transform(&records, &options);
    let summary = document.summary();
    info!(
        idle = summary.idle_animations,
        action = summary.action_animations,
        "remapped animations"
    );

    match &destination {
        Destination::File(path) => serialize(&document, path, format)?,
        Destination::Stdout => write_stdout(&render(&document, format)?)?,
    }
    info!(output = %destination, %format, "wrote document");

    Ok(RemapReport {
        input: config.input.display().to_string(),
        output: destination.to_string(),
        profile: config.profile,
        format,
        schema: config.schema,
        summary,
    })
}

fn write_stdout(content: &str) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(content.as_bytes())
        .and_then(|_| stdout.flush())
        .map_err(|source| RemapError::Output {
            path: PathBuf::from("-"),
            source,
        })
}
