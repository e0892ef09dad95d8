use comfy_table::{ContentArrangement, Table};
use lb_store::Store;

pub fn run(store: &Store) -> Result<(), String> {
    let tables = super::load(store)?;

    if tables.is_empty() {
        println!("  No tables yet. Create one with `lb create <name>`.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Name", "Entries", "References"]);

    for (name, t) in tables.iter() {
        let refs: Vec<&str> = t.reference_targets().collect();
        let refs = if refs.is_empty() {
            "-".to_string()
        } else {
            refs.join(", ")
        };
        table.add_row(vec![name.to_string(), t.len().to_string(), refs]);
    }

    println!("{table}");
    println!();
    println!("  {} tables", tables.len());

    Ok(())
}
