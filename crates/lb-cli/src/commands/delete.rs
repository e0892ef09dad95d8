use colored::Colorize;
use lb_core::find_referencing_tables;
use lb_store::Store;

pub fn run(store: &Store, name: &str, yes: bool) -> Result<(), String> {
    let tables = super::load(store)?;
    super::require(&tables, name)?;

    let referencing = find_referencing_tables(name, &tables);
    if !referencing.is_empty() {
        println!(
            "  {} '{name}' is referenced by {} other table(s): {}",
            "warning:".yellow().bold(),
            referencing.len(),
            referencing.join(", ")
        );
        if !yes {
            return Err(
                "deleting it removes those references; re-run with --yes to proceed".into(),
            );
        }
    }

    let tables = tables.delete_table(name).map_err(|e| e.to_string())?;
    super::save(store, &tables)?;

    println!("  Deleted table '{name}'.");
    if !referencing.is_empty() {
        println!("  Removed references from: {}", referencing.join(", "));
    }
    Ok(())
}
