//! Output formats, profiles, and document serialization.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{RemapError, Result};
use crate::model::{OutputDocument, SpriteSheetInfo};

/// Grid of the bundled assistant sprite sheet.
pub const DEFAULT_SPRITE_SHEET: SpriteSheetInfo = SpriteSheetInfo {
    columns: 27,
    rows: 34,
};

/// Markup format of the emitted document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Yaml,
}

impl OutputFormat {
    /// Returns the canonical file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
        }
    }

    /// Guesses the format from a path's extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(OutputFormat::Json),
            "yaml" | "yml" => Some(OutputFormat::Yaml),
            _ => None,
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "json" => Ok(OutputFormat::Json),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            other => Err(format!("unknown format '{}' (expected json or yaml)", other)),
        }
    }
}

/// A fixed output shape: format plus optional sprite sheet block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputProfile {
    /// Plain JSON, no sprite sheet metadata.
    Json,
    /// YAML animation config with the sprite sheet grid attached.
    Yaml,
}

impl OutputProfile {
    pub const DEFAULT: OutputProfile = OutputProfile::Json;

    pub fn format(&self) -> OutputFormat {
        match self {
            OutputProfile::Json => OutputFormat::Json,
            OutputProfile::Yaml => OutputFormat::Yaml,
        }
    }

    pub fn sprite_sheet(&self) -> Option<SpriteSheetInfo> {
        match self {
            OutputProfile::Json => None,
            OutputProfile::Yaml => Some(DEFAULT_SPRITE_SHEET),
        }
    }

    /// Output file name used when none is given.
    pub fn default_output(&self) -> &'static str {
        match self {
            OutputProfile::Json => "animations_.json",
            OutputProfile::Yaml => "config.yaml",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputProfile::Json => "json",
            OutputProfile::Yaml => "yaml",
        }
    }
}

impl Default for OutputProfile {
    fn default() -> Self {
        OutputProfile::DEFAULT
    }
}

impl std::fmt::Display for OutputProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for OutputProfile {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "json" => Ok(OutputProfile::Json),
            "yaml" => Ok(OutputProfile::Yaml),
            other => Err(format!("unknown profile '{}' (expected json or yaml)", other)),
        }
    }
}

/// Renders the document in memory. JSON uses a 2-space indent; both formats
/// end with a newline.
pub fn render(document: &OutputDocument, format: OutputFormat) -> Result<String> {
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(document)
            .map(|mut s| {
                s.push('\n');
                s
            })
            .map_err(|e| e.to_string()),
        OutputFormat::Yaml => serde_yaml::to_string(document).map_err(|e| e.to_string()),
    };
    rendered.map_err(|message| RemapError::Render { format, message })
}

/// Renders the document and writes it to `destination`, creating parent
/// directories as needed. A failed write may leave a partial file behind.
pub fn serialize(document: &OutputDocument, destination: &Path, format: OutputFormat) -> Result<()> {
    let content = render(document, format)?;

    let output_err = |source: std::io::Error| RemapError::Output {
        path: destination.to_path_buf(),
        source,
    };

    if let Some(parent) = destination.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(output_err)?;
        }
    }
    fs::write(destination, &content).map_err(output_err)?;

    debug!(path = %destination.display(), %format, bytes = content.len(), "wrote document");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, NormalizedAnimation, NormalizedFrame};
    use pretty_assertions::assert_eq;
    use serde_json::{json, Map};

    fn sample() -> OutputDocument {
        let mut extra = Map::new();
        extra.insert("loop".to_string(), json!(true));

        let mut doc = OutputDocument::default();
        doc.push(
            Category::Idle,
            NormalizedAnimation {
                name: "Walk".to_string(),
                frames: vec![NormalizedFrame {
                    duration: 5,
                    column: 1,
                    row: 0,
                }],
                extra,
            },
        );
        doc
    }

    #[test]
    fn test_render_json_field_order() {
        let rendered = render(&sample(), OutputFormat::Json).unwrap();
        let expected = r#"{
  "idle": [
    {
      "name": "Walk",
      "frames": [
        {
          "duration": 5,
          "column": 1,
          "row": 0
        }
      ],
      "loop": true
    }
  ],
  "action": []
}
"#;
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_render_yaml_with_sprite_sheet() {
        let mut doc = sample();
        doc.sprite_sheet_info = Some(DEFAULT_SPRITE_SHEET);

        let rendered = render(&doc, OutputFormat::Yaml).unwrap();
        let expected = "\
idle:
- name: Walk
  frames:
  - duration: 5
    column: 1
    row: 0
  loop: true
action: []
sprite_sheet_info:
  columns: 27
  rows: 34
";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_render_empty_json() {
        let rendered = render(&OutputDocument::default(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value, json!({"idle": [], "action": []}));
    }

    #[test]
    fn test_serialize_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/out/config.yaml");

        serialize(&sample(), &path, OutputFormat::Yaml).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("idle:\n- name: Walk\n"));
    }

    #[test]
    fn test_serialize_unwritable_destination() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be overwritten as a file.
        let err = serialize(&sample(), dir.path(), OutputFormat::Json).unwrap_err();
        assert_eq!(err.kind(), "output");
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(OutputFormat::from_path(Path::new("a.json")), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::from_path(Path::new("a.YML")), Some(OutputFormat::Yaml));
        assert_eq!(OutputFormat::from_path(Path::new("a.toml")), None);
        assert_eq!(OutputFormat::from_path(Path::new("noext")), None);
    }

    #[test]
    fn test_profiles() {
        assert_eq!(OutputProfile::default(), OutputProfile::Json);
        assert_eq!(OutputProfile::Json.sprite_sheet(), None);
        assert_eq!(OutputProfile::Yaml.format(), OutputFormat::Yaml);
        assert_eq!(
            OutputProfile::Yaml.sprite_sheet(),
            Some(SpriteSheetInfo::new(27, 34))
        );
    }
}
