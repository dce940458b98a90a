//! Idle/action partitioning and per-record normalization.

use tracing::debug;

use crate::model::{
    AnimationRecord, Category, NormalizedAnimation, NormalizedFrame, OutputDocument, RawFrame,
    SpriteSheetInfo,
};

/// Substring that marks an animation as idle. Removed from output names.
pub const IDLE_MARKER: &str = "Idle";

/// Output-shape options that do not depend on the input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransformOptions {
    /// Attached verbatim as `sprite_sheet_info` when set.
    pub sprite_sheet: Option<SpriteSheetInfo>,
}

/// Returns [`Category::Idle`] iff the marker occurs anywhere in the name.
pub fn classify(record: &AnimationRecord) -> Category {
    if record.name.contains(IDLE_MARKER) {
        Category::Idle
    } else {
        Category::Action
    }
}

/// Resolves missing frame attributes to 0. Values are not range-checked.
pub fn normalize_frame(raw: &RawFrame) -> NormalizedFrame {
    NormalizedFrame {
        duration: raw.duration.unwrap_or(0),
        column: raw.column.unwrap_or(0),
        row: raw.row.unwrap_or(0),
    }
}

/// Removes every literal occurrence of [`IDLE_MARKER`] in a single pass.
///
/// Removal can join the surrounding text into a new marker
/// (`"IIdledle"` becomes `"Idle"`); that result is not stripped again.
pub fn normalize_name(name: &str) -> String {
    name.replace(IDLE_MARKER, "")
}

/// Builds a fresh output animation from a borrowed record.
pub fn normalize_record(record: &AnimationRecord) -> NormalizedAnimation {
    NormalizedAnimation {
        name: normalize_name(&record.name),
        frames: record.frames.iter().map(normalize_frame).collect(),
        extra: record.extra.clone(),
    }
}

/// Partitions records into idle and action animations, preserving input order
/// within each category.
pub fn transform(records: &[AnimationRecord], options: &TransformOptions) -> OutputDocument {
    let mut document = OutputDocument {
        sprite_sheet_info: options.sprite_sheet,
        ..OutputDocument::default()
    };

    for record in records {
        // Classify on the original name; normalization removes the marker.
        let category = classify(record);
        let animation = normalize_record(record);
        debug!(
            name = %record.name,
            normalized = %animation.name,
            %category,
            frames = animation.frames.len(),
            "classified animation"
        );
        document.push(category, animation);
    }

    document
}
