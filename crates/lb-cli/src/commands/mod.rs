pub mod check;
pub mod create;
pub mod defaults;
pub mod delete;
pub mod draw;
pub mod edit;
pub mod export;
pub mod import;
pub mod list;
pub mod show;

use std::path::Path;

use lb_core::TableCollection;
use lb_store::Store;

/// Load the current tables, turning store errors into a message.
fn load(store: &Store) -> Result<TableCollection, String> {
    store
        .load()
        .map_err(|e| format!("cannot load tables from {}: {e}", store.path().display()))
}

/// Persist the new collection.
fn save(store: &Store, tables: &TableCollection) -> Result<(), String> {
    store.save(tables).map_err(|e| e.to_string())
}

/// Read a file, or stdin when the path is `-`.
fn read_input(path: &Path) -> Result<String, String> {
    if path.as_os_str() == "-" {
        std::io::read_to_string(std::io::stdin()).map_err(|e| format!("cannot read stdin: {e}"))
    } else {
        std::fs::read_to_string(path).map_err(|e| format!("cannot read {}: {e}", path.display()))
    }
}

/// Look up a table or fail with a uniform message.
fn require<'a>(tables: &'a TableCollection, name: &str) -> Result<&'a lb_core::Table, String> {
    tables
        .get(name)
        .ok_or_else(|| format!("table not found: \"{name}\""))
}
