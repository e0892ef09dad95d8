use std::path::Path;

use lb_core::parse_entry_lines;
use lb_store::{Store, parse_entries};

pub fn run(
    store: &Store,
    name: &str,
    file: Option<&Path>,
    json: Option<&Path>,
) -> Result<(), String> {
    let tables = super::load(store)?;

    let entries = match (file, json) {
        (_, Some(path)) => parse_entries(&super::read_input(path)?).map_err(|e| e.to_string())?,
        (Some(path), None) => parse_entry_lines(&super::read_input(path)?),
        (None, None) => return Err("nothing to save: pass --file or --json".into()),
    };

    let count = entries.len();
    // A missing reference target blocks the save; nothing is written.
    let tables = tables
        .replace_entries(name, entries)
        .map_err(|e| format!("cannot save \"{name}\": {e}"))?;
    super::save(store, &tables)?;

    println!("  Saved '{name}' with {count} entries.");
    Ok(())
}
