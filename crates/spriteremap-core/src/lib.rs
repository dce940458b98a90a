//! Sprite animation remapping library.
//!
//! Turns an exported list of sprite animations into a document grouped into
//! `idle` and `action` categories, with every frame normalized to a
//! `{duration, column, row}` shape.
//!
//! # Overview
//!
//! The pipeline is load → transform → serialize:
//!
//! - [`load()`]: reads the input list, mapping schema-specific field names
//!   through a [`FieldMap`]
//! - [`transform()`]: classifies each record on the `Idle` marker, strips the
//!   marker from the name, and defaults missing frame attributes to 0
//! - [`serialize`]: writes the document as JSON or YAML
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//! use spriteremap_core::{parse_records, render, transform, OutputFormat, SchemaVariant, TransformOptions};
//!
//! let input = r#"[{"Name": "IdleWalk", "Frames": [{"dur": 5, "col": 1}]}]"#;
//! let records = parse_records(Path::new("animations.json"), input, SchemaVariant::Source).unwrap();
//! let document = transform(&records, &TransformOptions::default());
//!
//! assert_eq!(document.idle[0].name, "Walk");
//! assert_eq!(document.idle[0].frames[0].row, 0);
//!
//! let json = render(&document, OutputFormat::Json).unwrap();
//! assert!(json.contains("\"duration\": 5"));
//! ```
//!
//! # Modules
//!
//! - [`error`]: the [`RemapError`] type
//! - [`model`]: input records and output document types
//! - [`schema`]: field-name tables for input schema variants
//! - [`load`](mod@load): input and document loading
//! - [`transform`](mod@transform): classification and normalization
//! - [`output`]: formats, profiles, and serialization
//! - [`pipeline`]: the end-to-end [`remap`] run

pub mod error;
pub mod load;
pub mod model;
pub mod output;
pub mod pipeline;
pub mod schema;
pub mod transform;

// Re-export commonly used types at the crate root
pub use error::{RemapError, Result};
pub use load::{load, parse_records, read_document};
pub use model::{
    AnimationRecord, Category, DocumentSummary, NormalizedAnimation, NormalizedFrame,
    OutputDocument, RawFrame, SpriteSheetInfo,
};
pub use output::{render, serialize, OutputFormat, OutputProfile, DEFAULT_SPRITE_SHEET};
pub use pipeline::{remap, Destination, RemapConfig, RemapReport, DEFAULT_INPUT};
pub use schema::{FieldMap, SchemaVariant};
pub use transform::{
    classify, normalize_frame, normalize_name, normalize_record, transform, TransformOptions,
    IDLE_MARKER,
};
