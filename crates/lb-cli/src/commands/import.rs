use std::path::Path;

use lb_store::{Store, parse_collection};

pub fn run(store: &Store, file: &Path) -> Result<(), String> {
    let payload = super::read_input(file)?;
    // Validate the payload before touching the store.
    let imported = parse_collection(&payload).map_err(|e| format!("cannot import: {e}"))?;

    let tables = super::load(store)?;
    let replaced = imported.names().filter(|n| tables.contains(n)).count();
    let merged = tables.merge(&imported);
    super::save(store, &merged)?;

    println!(
        "  Imported {} tables ({} new, {} replaced).",
        imported.len(),
        imported.len() - replaced,
        replaced
    );
    Ok(())
}
