//! Loading animation records and previously remapped documents.

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{RemapError, Result};
use crate::model::{AnimationRecord, OutputDocument, RawFrame};
use crate::output::OutputFormat;
use crate::schema::{FieldMap, SchemaVariant};

/// Reads and parses the animation list at `source`.
///
/// The whole file is read into memory before parsing; records are returned in
/// input order.
pub fn load(source: &Path, schema: SchemaVariant) -> Result<Vec<AnimationRecord>> {
    let content = read(source)?;
    parse_records(source, &content, schema)
}

/// Parses an animation list from `content`. `path` is only used for errors.
pub fn parse_records(
    path: &Path,
    content: &str,
    schema: SchemaVariant,
) -> Result<Vec<AnimationRecord>> {
    let value: Value = serde_json::from_str(content)
        .map_err(|e| RemapError::parse(path, format!("invalid JSON: {}", e)))?;

    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(RemapError::parse(
                path,
                format!("expected a list at the top level, found {}", describe(&other)),
            ))
        }
    };

    let fields = schema.field_map();
    let records = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| record_from_value(index, item, fields))
        .collect::<std::result::Result<Vec<_>, String>>()
        .map_err(|message| RemapError::parse(path, message))?;

    debug!(count = records.len(), %schema, "parsed animation records");
    Ok(records)
}

/// Reads a remapped document back, choosing JSON or YAML by extension.
pub fn read_document(path: &Path) -> Result<OutputDocument> {
    let format = OutputFormat::from_path(path).ok_or_else(|| {
        RemapError::parse(
            path,
            "cannot tell document format from extension (expected .json, .yaml or .yml)",
        )
    })?;
    let content = read(path)?;

    match format {
        OutputFormat::Json => serde_json::from_str(&content)
            .map_err(|e| RemapError::parse(path, format!("invalid document: {}", e))),
        OutputFormat::Yaml => serde_yaml::from_str(&content)
            .map_err(|e| RemapError::parse(path, format!("invalid document: {}", e))),
    }
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| RemapError::Input {
        path: path.to_path_buf(),
        source,
    })
}

fn record_from_value(
    index: usize,
    value: Value,
    fields: &FieldMap,
) -> std::result::Result<AnimationRecord, String> {
    let at = format!("[{}]", index);
    let mut object = match value {
        Value::Object(object) => object,
        other => return Err(format!("{}: expected an object, found {}", at, describe(&other))),
    };

    let name = match object.shift_remove(fields.name) {
        Some(Value::String(name)) => name,
        Some(other) => {
            return Err(format!(
                "{}.{}: expected a string, found {}",
                at,
                fields.name,
                describe(&other)
            ))
        }
        None => return Err(format!("{}: missing field '{}'", at, fields.name)),
    };

    let frames = match object.shift_remove(fields.frames) {
        Some(Value::Array(frames)) => frames,
        Some(other) => {
            return Err(format!(
                "{}.{}: expected a list, found {}",
                at,
                fields.frames,
                describe(&other)
            ))
        }
        None => return Err(format!("{}: missing field '{}'", at, fields.frames)),
    };

    let frames = frames
        .iter()
        .enumerate()
        .map(|(i, frame)| {
            let frame_at = format!("{}.{}[{}]", at, fields.frames, i);
            frame_from_value(&frame_at, frame, fields)
        })
        .collect::<std::result::Result<Vec<_>, String>>()?;

    // Pass-through keys are flattened beside the output's own `name`/`frames`.
    if let Some(key) = object.keys().find(|k| FieldMap::CANONICAL.is_record_key(k)) {
        return Err(format!(
            "{}.{}: field collides with the remapped '{}' field",
            at, key, key
        ));
    }

    // shift_remove keeps the remaining pass-through fields in input order.
    Ok(AnimationRecord {
        name,
        frames,
        extra: object,
    })
}

fn frame_from_value(
    at: &str,
    value: &Value,
    fields: &FieldMap,
) -> std::result::Result<RawFrame, String> {
    let object = value
        .as_object()
        .ok_or_else(|| format!("{}: expected an object, found {}", at, describe(value)))?;

    let ignored: Vec<&String> = object
        .keys()
        .filter(|k| {
            let k = k.as_str();
            k != fields.duration && k != fields.column && k != fields.row
        })
        .collect();
    if !ignored.is_empty() {
        debug!(frame = at, ?ignored, "dropping unknown frame fields");
    }

    Ok(RawFrame {
        duration: frame_field(at, object, fields.duration)?,
        column: frame_field(at, object, fields.column)?,
        row: frame_field(at, object, fields.row)?,
    })
}

/// Missing and `null` attributes are both treated as absent.
///
/// Integral floats (`5.0`) are accepted as integers; fractional values are
/// rejected.
fn frame_field(
    at: &str,
    frame: &Map<String, Value>,
    key: &str,
) -> std::result::Result<Option<i64>, String> {
    match frame.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => as_integer(value).map(Some).ok_or_else(|| {
            format!(
                "{}.{}: expected an integer, found {}",
                at,
                key,
                describe(value)
            )
        }),
    }
}

fn as_integer(value: &Value) -> Option<i64> {
    if let Some(n) = value.as_i64() {
        return Some(n);
    }
    // 2^63 as f64; anything at or above it is out of range.
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    value
        .as_f64()
        .filter(|f| f.fract() == 0.0 && *f >= -LIMIT && *f < LIMIT)
        .map(|f| f as i64)
}

fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(_) => "a boolean".to_string(),
        Value::Number(n) => format!("the number {}", n),
        Value::String(_) => "a string".to_string(),
        Value::Array(_) => "a list".to_string(),
        Value::Object(_) => "an object".to_string(),
    }
}
