//! Animation record and output document types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{RemapError, Result};

/// Partition key for output grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Looping background animation, played while nothing is happening.
    Idle,
    /// Any animation that is not idle.
    Action,
}

impl Category {
    /// Returns the document key for this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Idle => "idle",
            Category::Action => "action",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A frame as read from the input, with every attribute optional.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawFrame {
    /// Display time of the frame.
    pub duration: Option<i64>,
    /// Sprite sheet column.
    pub column: Option<i64>,
    /// Sprite sheet row.
    pub row: Option<i64>,
}

impl RawFrame {
    /// Creates a raw frame with every attribute present.
    pub fn new(duration: i64, column: i64, row: i64) -> Self {
        Self {
            duration: Some(duration),
            column: Some(column),
            row: Some(row),
        }
    }
}

impl From<NormalizedFrame> for RawFrame {
    fn from(frame: NormalizedFrame) -> Self {
        RawFrame::new(frame.duration, frame.column, frame.row)
    }
}

/// An animation as read from the input.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationRecord {
    /// Original name, marker included.
    pub name: String,
    /// Frames in playback order.
    pub frames: Vec<RawFrame>,
    /// Record fields other than name and frames, in input order.
    pub extra: Map<String, Value>,
}

impl AnimationRecord {
    /// Creates a record with no pass-through fields.
    pub fn new(name: impl Into<String>, frames: Vec<RawFrame>) -> Self {
        Self {
            name: name.into(),
            frames,
            extra: Map::new(),
        }
    }
}

/// A frame with every attribute resolved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NormalizedFrame {
    pub duration: i64,
    pub column: i64,
    pub row: i64,
}

/// An animation in the output document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedAnimation {
    /// Name with the idle marker removed.
    pub name: String,
    /// Normalized frames in playback order.
    pub frames: Vec<NormalizedFrame>,
    /// Pass-through record fields, serialized after `frames`.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl NormalizedAnimation {
    /// Sum of all frame durations, saturating at the `i64` bounds.
    pub fn total_duration(&self) -> i64 {
        self.frames
            .iter()
            .fold(0i64, |total, f| total.saturating_add(f.duration))
    }
}

/// Grid layout of the sprite sheet the animations index into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpriteSheetInfo {
    pub columns: u32,
    pub rows: u32,
}

impl SpriteSheetInfo {
    /// Creates sprite sheet metadata for a `columns` x `rows` grid.
    pub fn new(columns: u32, rows: u32) -> Self {
        Self { columns, rows }
    }

    /// Returns the `(width, height)` of a single cell for a sheet image of the
    /// given pixel size.
    ///
    /// Remainder pixels at the right and bottom edges are ignored.
    pub fn cell_size(&self, sheet_width: u32, sheet_height: u32) -> Result<(u32, u32)> {
        if self.columns == 0 || self.rows == 0 {
            return Err(RemapError::InvalidSpriteSheet {
                columns: self.columns,
                rows: self.rows,
            });
        }
        Ok((sheet_width / self.columns, sheet_height / self.rows))
    }
}

/// The remapped document: animations grouped by category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputDocument {
    #[serde(default)]
    pub idle: Vec<NormalizedAnimation>,
    #[serde(default)]
    pub action: Vec<NormalizedAnimation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sprite_sheet_info: Option<SpriteSheetInfo>,
}

impl OutputDocument {
    /// Appends an animation to the end of the given category.
    pub fn push(&mut self, category: Category, animation: NormalizedAnimation) {
        match category {
            Category::Idle => self.idle.push(animation),
            Category::Action => self.action.push(animation),
        }
    }

    /// Returns the animations of one category.
    pub fn category(&self, category: Category) -> &[NormalizedAnimation] {
        match category {
            Category::Idle => &self.idle,
            Category::Action => &self.action,
        }
    }

    /// Total number of animations across both categories.
    pub fn len(&self) -> usize {
        self.idle.len() + self.action.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Computes counts and totals over the document.
    pub fn summary(&self) -> DocumentSummary {
        let all = || self.idle.iter().chain(self.action.iter());
        DocumentSummary {
            idle_animations: self.idle.len(),
            action_animations: self.action.len(),
            total_frames: all().map(|a| a.frames.len()).sum(),
            total_duration: all()
                .map(NormalizedAnimation::total_duration)
                .fold(0i64, i64::saturating_add),
            sprite_sheet_info: self.sprite_sheet_info,
        }
    }
}

/// Counts and totals over an [`OutputDocument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DocumentSummary {
    pub idle_animations: usize,
    pub action_animations: usize,
    pub total_frames: usize,
    pub total_duration: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sprite_sheet_info: Option<SpriteSheetInfo>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn animation(name: &str, durations: &[i64]) -> NormalizedAnimation {
        NormalizedAnimation {
            name: name.to_string(),
            frames: durations
                .iter()
                .map(|&duration| NormalizedFrame {
                    duration,
                    column: 0,
                    row: 0,
                })
                .collect(),
            extra: Map::new(),
        }
    }

    #[test]
    fn test_push_routes_by_category() {
        let mut doc = OutputDocument::default();
        doc.push(Category::Idle, animation("Blink", &[100]));
        doc.push(Category::Action, animation("Wave", &[50, 50]));
        doc.push(Category::Idle, animation("Look", &[]));

        let idle: Vec<_> = doc.category(Category::Idle).iter().map(|a| &a.name).collect();
        assert_eq!(idle, vec!["Blink", "Look"]);
        assert_eq!(doc.category(Category::Action).len(), 1);
        assert_eq!(doc.len(), 3);
    }

    #[test]
    fn test_summary_totals() {
        let mut doc = OutputDocument::default();
        doc.push(Category::Idle, animation("Blink", &[100, 200]));
        doc.push(Category::Action, animation("Wave", &[50, -10, 0]));
        doc.sprite_sheet_info = Some(SpriteSheetInfo::new(27, 34));

        let summary = doc.summary();
        assert_eq!(
            summary,
            DocumentSummary {
                idle_animations: 1,
                action_animations: 1,
                total_frames: 5,
                total_duration: 340,
                sprite_sheet_info: Some(SpriteSheetInfo::new(27, 34)),
            }
        );
    }

    #[test]
    fn test_duration_totals_saturate() {
        assert_eq!(animation("Long", &[i64::MAX, 1]).total_duration(), i64::MAX);
        assert_eq!(animation("Back", &[i64::MIN, -1]).total_duration(), i64::MIN);

        let mut doc = OutputDocument::default();
        doc.push(Category::Idle, animation("Rest", &[i64::MAX]));
        doc.push(Category::Action, animation("Long", &[i64::MAX, 1]));
        let summary = doc.summary();
        assert_eq!(summary.total_duration, i64::MAX);
        assert_eq!(summary.total_frames, 3);
    }

    #[test]
    fn test_cell_size_divides_sheet() {
        let sheet = SpriteSheetInfo::new(27, 34);
        assert_eq!(sheet.cell_size(3348, 3162).unwrap(), (124, 93));
        // Remainders are dropped.
        assert_eq!(sheet.cell_size(3350, 3163).unwrap(), (124, 93));
    }

    #[test]
    fn test_cell_size_rejects_empty_grid() {
        let err = SpriteSheetInfo::new(0, 34).cell_size(100, 100).unwrap_err();
        assert!(matches!(
            err,
            RemapError::InvalidSpriteSheet {
                columns: 0,
                rows: 34
            }
        ));
    }

    #[test]
    fn test_normalized_frame_converts_back_to_raw() {
        let frame = NormalizedFrame {
            duration: 5,
            column: -1,
            row: 2,
        };
        assert_eq!(RawFrame::from(frame), RawFrame::new(5, -1, 2));
    }

    #[test]
    fn test_category_display() {
        assert_eq!(Category::Idle.to_string(), "idle");
        assert_eq!(Category::Action.to_string(), "action");
    }
}
