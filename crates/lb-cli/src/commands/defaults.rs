use lb_store::{Store, default_tables};

pub fn run(store: &Store) -> Result<(), String> {
    let tables = super::load(store)?;
    let filled = tables.with_missing(&default_tables());
    let added = filled.len() - tables.len();

    if added == 0 {
        println!("  All starter tables are present.");
        return Ok(());
    }

    super::save(store, &filled)?;
    println!("  Restored {added} starter table(s).");
    Ok(())
}
