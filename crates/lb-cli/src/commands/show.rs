use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use lb_core::probabilities;
use lb_store::Store;

pub fn run(store: &Store, name: &str) -> Result<(), String> {
    let tables = super::load(store)?;
    let t = super::require(&tables, name)?;

    println!("  {}", name.bold());
    println!();

    if t.is_empty() {
        println!("  (empty, nothing to draw)");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Entry", "Weight", "Chance"]);

    for (entry, p) in t.entries().iter().zip(probabilities(t.entries())) {
        let label = match entry.reference_target() {
            Some(target) => format!("-> {target}"),
            None => entry.name.clone(),
        };
        table.add_row(vec![
            label,
            format!("{}", entry.effective_weight()),
            format!("{:.1}%", p * 100.0),
        ]);
    }

    println!("{table}");
    Ok(())
}
