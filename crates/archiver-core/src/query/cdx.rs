//! CDX JSON shaping: header row + positional rows into records.

use serde_json::Value;
use std::collections::BTreeMap;

use super::SnapshotRecord;
use crate::error::ArchiverError;

/// Parse a CDX `output=json` body into records, newest first, at most `max_count`.
///
/// The first row names the columns; later rows are zipped against it. Rows
/// arrive oldest first. A body that is blank, not JSON, or decodes to an
/// empty value (`null`, `false`, `0`, `""`, `"0"`, `[]`, `{}`) means no captures.
pub fn parse_cdx(body: &[u8], max_count: usize) -> Result<Vec<SnapshotRecord>, ArchiverError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }

    let value: Value = match serde_json::from_slice(body) {
        Ok(v) => v,
        Err(e) => {
            tracing::debug!("CDX body is not JSON, treating as no captures: {}", e);
            return Ok(Vec::new());
        }
    };
    if is_empty_value(&value) {
        return Ok(Vec::new());
    }
    let rows = match value {
        Value::Array(rows) => rows,
        other => {
            return Err(ArchiverError::MalformedResponse(format!(
                "expected array of rows, got {}",
                other
            )))
        }
    };

    let mut rows = rows.into_iter();
    let columns: Vec<String> = match rows.next() {
        None => return Ok(Vec::new()),
        Some(Value::Array(cells)) => cells.iter().map(cell_text).collect(),
        Some(other) => {
            return Err(ArchiverError::MalformedResponse(format!(
                "header row is not an array: {}",
                other
            )))
        }
    };

    let data: Vec<Value> = rows.collect();
    data.into_iter()
        .rev()
        .take(max_count)
        .map(|row| keyed_record(&columns, row))
        .collect()
}

fn keyed_record(columns: &[String], row: Value) -> Result<SnapshotRecord, ArchiverError> {
    let Value::Array(cells) = row else {
        return Err(ArchiverError::MalformedResponse(format!(
            "row is not an array: {}",
            row
        )));
    };

    let mut fields: BTreeMap<String, String> = columns
        .iter()
        .zip(cells.iter())
        .map(|(name, cell)| (name.clone(), cell_text(cell)))
        .collect();

    let timestamp = take_required(&mut fields, "timestamp")?;
    let original = take_required(&mut fields, "original")?;
    Ok(SnapshotRecord {
        timestamp,
        original,
        extra: fields,
    })
}

fn take_required(fields: &mut BTreeMap<String, String>, name: &str) -> Result<String, ArchiverError> {
    fields
        .remove(name)
        .ok_or_else(|| ArchiverError::MalformedResponse(format!("row has no `{}` column", name)))
}

/// Values the index uses to say "nothing here".
fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty() || s == "0",
        Value::Array(a) => a.is_empty(),
        Value::Object(m) => m.is_empty(),
    }
}

/// CDX cells are strings; anything else is kept as its JSON text.
fn cell_text(cell: &Value) -> String {
    match cell {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
