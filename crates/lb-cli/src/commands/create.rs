use std::path::Path;

use lb_core::{Entry, parse_entry_lines};
use lb_store::Store;

pub fn run(
    store: &Store,
    name: &str,
    entries: &[String],
    file: Option<&Path>,
) -> Result<(), String> {
    let tables = super::load(store)?;

    let mut new_entries: Vec<Entry> = entries
        .iter()
        .map(|e| e.trim())
        .filter(|e| !e.is_empty())
        .map(Entry::leaf)
        .collect();
    if let Some(path) = file {
        new_entries.extend(parse_entry_lines(&super::read_input(path)?));
    }

    let count = new_entries.len();
    let tables = tables
        .create_table(name, new_entries)
        .map_err(|e| e.to_string())?;
    super::save(store, &tables)?;

    println!("  Created table '{}' with {count} entries.", name.trim());
    Ok(())
}
