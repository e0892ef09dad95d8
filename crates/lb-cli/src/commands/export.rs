use std::path::Path;

use lb_store::{Store, to_json_pretty};

pub fn run(store: &Store, output: Option<&Path>) -> Result<(), String> {
    let tables = super::load(store)?;
    let content = to_json_pretty(&tables).map_err(|e| format!("JSON serialization error: {e}"))?;

    if let Some(path) = output {
        std::fs::write(path, &content)
            .map_err(|e| format!("cannot write to {}: {e}", path.display()))?;
        println!("  Exported {} tables to {}", tables.len(), path.display());
    } else {
        println!("{content}");
    }

    Ok(())
}
