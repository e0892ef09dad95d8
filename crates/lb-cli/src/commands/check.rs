use lb_core::dangling_references;
use lb_store::Store;

pub fn run(store: &Store) -> Result<(), String> {
    let tables = super::load(store)?;
    let dangling = dangling_references(&tables);

    if dangling.is_empty() {
        println!("  All references resolve.");
        println!("  {} tables", tables.len());
        return Ok(());
    }

    for (table, target) in &dangling {
        eprintln!("  '{table}' references missing table '{target}'");
    }
    Err(format!("{} dangling reference(s)", dangling.len()))
}
