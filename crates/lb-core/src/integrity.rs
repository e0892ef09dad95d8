//! Reference checks and cascading removal across a collection.

use crate::collection::TableCollection;
use crate::entry::Entry;
use crate::error::ValidationError;

/// Check that every reference in `entries` points at `own_table_name` or at
/// a table in `tables`.
///
/// Self-references pass here; they are only rejected as cycles when drawn.
/// Stops at the first missing target, in entry order.
pub fn validate_references(
    entries: &[Entry],
    tables: &TableCollection,
    own_table_name: &str,
) -> Result<(), ValidationError> {
    let missing = entries
        .iter()
        .filter_map(Entry::reference_target)
        .find(|target| *target != own_table_name && !tables.contains(target));

    match missing {
        Some(target) => Err(ValidationError::InvalidReference {
            missing_target: target.to_string(),
        }),
        None => Ok(()),
    }
}

/// Names of the tables (other than `target_name` itself) holding at least one
/// reference to `target_name`, in collection order.
pub fn find_referencing_tables(target_name: &str, tables: &TableCollection) -> Vec<String> {
    tables
        .iter()
        .filter(|(name, table)| *name != target_name && table.references(target_name))
        .map(|(name, _)| name.to_string())
        .collect()
}

/// A new collection without `target_name`, and without any reference to it in
/// the remaining tables. Other entries keep their order.
///
/// Running it again for the same target changes nothing.
pub fn cascade_remove_references(target_name: &str, tables: &TableCollection) -> TableCollection {
    let referencing = find_referencing_tables(target_name, tables);
    tables
        .iter()
        .filter(|(name, _)| *name != target_name)
        .map(|(name, table)| {
            let table = if referencing.iter().any(|r| r == name) {
                table.without_references_to(target_name)
            } else {
                table.clone()
            };
            (name.to_string(), table)
        })
        .collect()
}

/// Every `(table, missing target)` pair across the collection.
pub fn dangling_references(tables: &TableCollection) -> Vec<(String, String)> {
    tables
        .iter()
        .flat_map(|(name, table)| {
            table
                .reference_targets()
                .filter(|target| !tables.contains(target))
                .map(move |target| (name.to_string(), target.to_string()))
        })
        .collect()
}
