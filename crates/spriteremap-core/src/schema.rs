//! Field-name mapping between input schema variants and semantic fields.
//!
//! Capitalization and abbreviation differences (`Name` vs `name`, `dur` vs
//! `duration`) are resolved here and nowhere else.

use serde::{Deserialize, Serialize};

/// Input key names for each semantic field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldMap {
    pub name: &'static str,
    pub frames: &'static str,
    pub duration: &'static str,
    pub column: &'static str,
    pub row: &'static str,
}

impl FieldMap {
    /// Keys used by exported `animations.json` sources.
    pub const SOURCE: FieldMap = FieldMap {
        name: "Name",
        frames: "Frames",
        duration: "dur",
        column: "col",
        row: "row",
    };

    /// Keys used by remapped output.
    pub const CANONICAL: FieldMap = FieldMap {
        name: "name",
        frames: "frames",
        duration: "duration",
        column: "column",
        row: "row",
    };

    /// Returns true if `key` is one of the record-level keys consumed by the
    /// transform (as opposed to a pass-through field).
    pub fn is_record_key(&self, key: &str) -> bool {
        key == self.name || key == self.frames
    }
}

/// Selects which [`FieldMap`] the loader applies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaVariant {
    /// `Name` / `Frames` / `dur` / `col` / `row`.
    #[default]
    Source,
    /// `name` / `frames` / `duration` / `column` / `row`.
    Canonical,
}

impl SchemaVariant {
    pub fn field_map(&self) -> &'static FieldMap {
        match self {
            SchemaVariant::Source => &FieldMap::SOURCE,
            SchemaVariant::Canonical => &FieldMap::CANONICAL,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaVariant::Source => "source",
            SchemaVariant::Canonical => "canonical",
        }
    }
}

impl std::fmt::Display for SchemaVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SchemaVariant {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "source" => Ok(SchemaVariant::Source),
            "canonical" => Ok(SchemaVariant::Canonical),
            other => Err(format!(
                "unknown schema '{}' (expected source or canonical)",
                other
            )),
        }
    }
}
