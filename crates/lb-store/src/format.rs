//! The table file format.
//!
//! A table file is a JSON object mapping table names to arrays of entries:
//!
//! ```json
//! {
//!   "Heroes": [
//!     { "nome": "Aragorn", "peso": 10 },
//!     { "nome": "Frodo" }
//!   ],
//!   "Adventures": [
//!     { "nome": "LIST_REF:Heroes", "peso": 1 },
//!     { "nome": "Secret mission", "peso": 3 }
//!   ]
//! }
//! ```
//!
//! Older saves stored plain strings instead of objects; those are read as
//! unweighted entries.

use lb_core::{Entry, Table, TableCollection};
use serde_json::Value;
use tracing::warn;

use crate::error::{StoreError, StoreResult};

/// Parse a whole table file or import payload.
///
/// Rejects a top level that is not an object, any table that is not an
/// array, and any entry that is neither a string nor an entry object.
/// Entries with a blank name are dropped.
pub fn parse_collection(json: &str) -> StoreResult<TableCollection> {
    let value: Value = serde_json::from_str(json)?;
    let map = match value {
        Value::Object(map) => map,
        other => {
            return Err(StoreError::MalformedImportPayload(format!(
                "expected an object of tables, found {}",
                kind_of(&other)
            )));
        }
    };

    let mut tables = TableCollection::new();
    for (name, entries) in map {
        let table = parse_table(&name, entries)?;
        tables.insert(name, table);
    }
    Ok(tables)
}

/// Parse a single table's entries from a JSON array.
pub fn parse_entries(json: &str) -> StoreResult<Vec<Entry>> {
    let value: Value = serde_json::from_str(json)?;
    let table = parse_table("entries", value)?;
    Ok(table.entries().to_vec())
}

/// Serialize a collection in the table file format.
pub fn to_json_pretty(tables: &TableCollection) -> StoreResult<String> {
    Ok(serde_json::to_string_pretty(tables)?)
}

fn parse_table(name: &str, value: Value) -> StoreResult<Table> {
    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(StoreError::MalformedImportPayload(format!(
                "\"{name}\" must be an array of entries, found {}",
                kind_of(&other)
            )));
        }
    };

    let mut entries = Vec::with_capacity(items.len());
    for item in items {
        let entry = match item {
            Value::String(s) => Entry::leaf(s),
            obj @ Value::Object(_) => serde_json::from_value::<Entry>(obj).map_err(|e| {
                StoreError::MalformedImportPayload(format!("invalid entry in \"{name}\": {e}"))
            })?,
            other => {
                return Err(StoreError::MalformedImportPayload(format!(
                    "invalid entry in \"{name}\": expected an object or string, found {}",
                    kind_of(&other)
                )));
            }
        };
        if entry.is_blank() {
            warn!(table = name, "skipping entry with blank name");
            continue;
        }
        entries.push(entry);
    }
    Ok(Table::new(entries))
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
