//! Entries, tables, and the `LIST_REF:` reference convention.

use serde::{Deserialize, Serialize};

/// Prefix marking an entry as a reference to another table.
///
/// Matching is exact and case-sensitive; everything after the colon (trimmed)
/// is the target table name.
pub const REFERENCE_PREFIX: &str = "LIST_REF:";

/// One element of a table: either a drawable result or a reference to
/// another table.
///
/// Serializes as `{ "nome": ..., "peso": ... }`, the field names used by
/// existing saved and shared table files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Display name, or `LIST_REF:<table>` for a reference entry.
    #[serde(rename = "nome")]
    pub name: String,
    /// Relative weight. Missing or non-positive weights count as 1.
    #[serde(rename = "peso", default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

impl Entry {
    /// Create an unweighted leaf entry.
    pub fn leaf(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            weight: None,
        }
    }

    /// Create an unweighted reference to the named table.
    pub fn reference(target: &str) -> Self {
        Self::leaf(format!("{REFERENCE_PREFIX}{target}"))
    }

    /// Set the weight.
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    /// Whether this entry redirects the draw to another table.
    pub fn is_reference(&self) -> bool {
        self.name.starts_with(REFERENCE_PREFIX)
    }

    /// The target table name of a reference entry, or `None` for a leaf.
    pub fn reference_target(&self) -> Option<&str> {
        self.name.strip_prefix(REFERENCE_PREFIX).map(str::trim)
    }

    /// Whether this entry references `table`.
    pub fn references(&self, table: &str) -> bool {
        self.reference_target() == Some(table)
    }

    /// Whether the name is empty after trimming. Blank entries are never
    /// drawn.
    pub fn is_blank(&self) -> bool {
        self.name.trim().is_empty()
    }

    /// Weight used for selection: the stored weight if it is a positive
    /// finite number, otherwise 1.
    pub fn effective_weight(&self) -> f64 {
        match self.weight {
            Some(w) if w.is_finite() && w > 0.0 => w,
            _ => 1.0,
        }
    }
}

/// An ordered sequence of entries. The table's name is its key in a
/// [`TableCollection`](crate::TableCollection).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Table {
    entries: Vec<Entry>,
}

impl Table {
    /// Create a table from its entries.
    pub fn new(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    /// All entries in stored order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Entries a draw can land on, skipping blank ones.
    pub fn drawable(&self) -> impl Iterator<Item = &Entry> + Clone {
        self.entries.iter().filter(|e| !e.is_blank())
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Target names of every reference entry, in entry order.
    pub fn reference_targets(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().filter_map(Entry::reference_target)
    }

    /// Whether any entry references `table`.
    pub fn references(&self, table: &str) -> bool {
        self.entries.iter().any(|e| e.references(table))
    }

    /// A copy of this table without the entries that reference `table`.
    pub fn without_references_to(&self, table: &str) -> Self {
        self.entries
            .iter()
            .filter(|e| !e.references(table))
            .cloned()
            .collect()
    }
}

impl FromIterator<Entry> for Table {
    fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl From<Vec<Entry>> for Table {
    fn from(entries: Vec<Entry>) -> Self {
        Self::new(entries)
    }
}

/// Parse the bulk editor format: one entry per line, trimmed, blank lines
/// skipped. Every entry is unweighted.
pub fn parse_entry_lines(text: &str) -> Vec<Entry> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(Entry::leaf)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_detection() {
        assert!(Entry::leaf("LIST_REF:Monsters").is_reference());
        assert!(!Entry::leaf("Goblin").is_reference());
        // prefix is case-sensitive
        assert!(!Entry::leaf("list_ref:Monsters").is_reference());
        assert!(!Entry::leaf(" LIST_REF:Monsters").is_reference());
    }

    #[test]
    fn reference_target_is_trimmed() {
        let e = Entry::leaf("LIST_REF:  Ranged Weapons  ");
        assert_eq!(e.reference_target(), Some("Ranged Weapons"));
        assert!(e.references("Ranged Weapons"));
        assert_eq!(Entry::leaf("Dagger").reference_target(), None);
    }

    #[test]
    fn reference_constructor() {
        let e = Entry::reference("Treasure");
        assert_eq!(e.name, "LIST_REF:Treasure");
        assert_eq!(e.reference_target(), Some("Treasure"));
    }

    #[test]
    fn drawable_skips_blank_entries() {
        let table = Table::new(vec![Entry::leaf(" "), Entry::leaf("a"), Entry::leaf("")]);
        assert!(Entry::leaf(" \t").is_blank());
        assert!(!Entry::reference("A").is_blank());
        let names: Vec<&str> = table.drawable().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["a"]);
    }

    #[test]
    fn effective_weight_defaults() {
        assert_eq!(Entry::leaf("a").effective_weight(), 1.0);
        assert_eq!(Entry::leaf("a").with_weight(0.0).effective_weight(), 1.0);
        assert_eq!(Entry::leaf("a").with_weight(-3.0).effective_weight(), 1.0);
        assert_eq!(Entry::leaf("a").with_weight(f64::NAN).effective_weight(), 1.0);
        assert_eq!(
            Entry::leaf("a").with_weight(f64::INFINITY).effective_weight(),
            1.0
        );
        assert_eq!(Entry::leaf("a").with_weight(2.5).effective_weight(), 2.5);
    }

    #[test]
    fn serde_field_names() {
        let e = Entry::leaf("Aragorn").with_weight(10.0);
        let json = serde_json::to_string(&e).unwrap();
        assert_eq!(json, r#"{"nome":"Aragorn","peso":10.0}"#);

        let unweighted = serde_json::to_string(&Entry::leaf("Frodo")).unwrap();
        assert_eq!(unweighted, r#"{"nome":"Frodo"}"#);

        let parsed: Entry = serde_json::from_str(r#"{"nome":"Gandalf"}"#).unwrap();
        assert_eq!(parsed, Entry::leaf("Gandalf"));
    }

    #[test]
    fn table_without_references() {
        let table = Table::new(vec![
            Entry::reference("B"),
            Entry::leaf("x"),
            Entry::leaf("LIST_REF: B "),
            Entry::reference("C"),
        ]);
        let stripped = table.without_references_to("B");
        assert_eq!(
            stripped.entries(),
            &[Entry::leaf("x"), Entry::reference("C")]
        );
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn reference_targets_in_order() {
        let table = Table::new(vec![
            Entry::reference("B"),
            Entry::leaf("x"),
            Entry::reference("A"),
        ]);
        let targets: Vec<_> = table.reference_targets().collect();
        assert_eq!(targets, vec!["B", "A"]);
    }

    #[test]
    fn entry_lines() {
        let entries = parse_entry_lines("Long sword\n\n  LIST_REF:Monsters \n   \nDragon\n");
        assert_eq!(
            entries,
            vec![
                Entry::leaf("Long sword"),
                Entry::leaf("LIST_REF:Monsters"),
                Entry::leaf("Dragon"),
            ]
        );
    }
}
