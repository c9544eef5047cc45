//! Conversion of JSON objects into filterable rows.
//!
//! Row values are always strings by the time a filter sees them. JSON numbers
//! and booleans are stringified, `null` leaves the cell out.

use rowfilter_rs::{normalize_key, Row, RowKey};
use serde_json::{Map, Value};

use super::{CommandError, Result};

/// A row read from input: its normalized key and its cells.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyedRow {
    /// Normalized row key.
    pub key: RowKey,
    /// Cells by `"family:qualifier"`.
    pub cells: Row,
}

/// Converts a JSON object into cells. `key_column`, if given, is skipped.
pub fn cells_from_object(
    object: &Map<String, Value>,
    key_column: Option<&str>,
    line: usize,
) -> Result<Row> {
    let mut cells = Row::with_capacity(object.len());

    for (column, value) in object {
        if Some(column.as_str()) == key_column {
            continue;
        }
        if let Some(text) = scalar_to_string(value) {
            cells.insert(column.clone(), text);
        } else if !value.is_null() {
            return Err(CommandError::invalid_row(
                line,
                format!("column '{column}' must hold a string, number or boolean"),
            ));
        }
    }

    Ok(cells)
}

/// Parses one JSON object as a bare row (no key column).
pub fn parse_row(text: &str) -> Result<Row> {
    let value: Value = serde_json::from_str(text)?;
    let Value::Object(object) = value else {
        return Err(CommandError::invalid_row(1, "expected a JSON object"));
    };
    cells_from_object(&object, None, 1)
}

/// Parses one JSON-lines record into a keyed row.
pub fn parse_keyed_row(text: &str, key_column: &str, line: usize) -> Result<KeyedRow> {
    let value: Value = serde_json::from_str(text)
        .map_err(|e| CommandError::invalid_row(line, e.to_string()))?;
    let Value::Object(object) = value else {
        return Err(CommandError::invalid_row(line, "expected a JSON object"));
    };

    let key = object
        .get(key_column)
        .and_then(scalar_to_string)
        .map(normalize_key)
        .ok_or_else(|| {
            CommandError::invalid_row(line, format!("missing row key field '{key_column}'"))
        })?;

    Ok(KeyedRow {
        key,
        cells: cells_from_object(&object, Some(key_column), line)?,
    })
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
