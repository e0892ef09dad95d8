//! The set of named tables and the edits that keep its references intact.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::entry::{Entry, Table};
use crate::error::{CollectionError, CollectionResult};
use crate::integrity::{cascade_remove_references, validate_references};

/// Every table the user owns, keyed by case-sensitive name.
///
/// Names iterate in sorted order. Edit operations never touch `self`; they
/// return a new collection that the caller adopts (and persists) as a whole.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TableCollection {
    tables: BTreeMap<String, Table>,
}

impl TableCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a table by exact name.
    pub fn get(&self, name: &str) -> Option<&Table> {
        self.tables.get(name)
    }

    /// Whether a table with this exact name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.tables.contains_key(name)
    }

    /// Table names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    /// `(name, table)` pairs in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Table)> {
        self.tables.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of tables.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Whether the collection has no tables.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Add or replace a table while building a collection.
    pub fn insert(&mut self, name: impl Into<String>, table: impl Into<Table>) {
        self.tables.insert(name.into(), table.into());
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with_table(mut self, name: impl Into<String>, table: impl Into<Table>) -> Self {
        self.insert(name, table);
        self
    }

    // -----------------------------------------------------------------------
    // Edits
    // -----------------------------------------------------------------------

    /// Add a new table. The name is trimmed and must be non-empty and unused;
    /// references in `entries` must resolve (a reference to the new table
    /// itself is allowed).
    pub fn create_table(&self, name: &str, entries: Vec<Entry>) -> CollectionResult<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CollectionError::EmptyName);
        }
        if self.contains(name) {
            return Err(CollectionError::DuplicateName(name.to_string()));
        }
        validate_references(&entries, self, name)?;
        Ok(self.clone().with_table(name, entries))
    }

    /// Replace every entry of an existing table, rejecting references to
    /// tables that do not exist.
    pub fn replace_entries(&self, name: &str, entries: Vec<Entry>) -> CollectionResult<Self> {
        if !self.contains(name) {
            return Err(CollectionError::UnknownTable(name.to_string()));
        }
        validate_references(&entries, self, name)?;
        Ok(self.clone().with_table(name, entries))
    }

    /// Remove a table and strip references to it from every other table.
    pub fn delete_table(&self, name: &str) -> CollectionResult<Self> {
        if !self.contains(name) {
            return Err(CollectionError::UnknownTable(name.to_string()));
        }
        Ok(cascade_remove_references(name, self))
    }

    /// Overlay `imported` on this collection: imported tables replace tables
    /// with the same name, all others are kept.
    pub fn merge(&self, imported: &Self) -> Self {
        let mut merged = self.clone();
        for (name, table) in imported.iter() {
            merged.insert(name, table.clone());
        }
        merged
    }

    /// Add each table from `defaults` whose name is not already taken.
    pub fn with_missing(&self, defaults: &Self) -> Self {
        let mut filled = self.clone();
        for (name, table) in defaults.iter() {
            if !filled.contains(name) {
                filled.insert(name, table.clone());
            }
        }
        filled
    }
}

impl FromIterator<(String, Table)> for TableCollection {
    fn from_iter<I: IntoIterator<Item = (String, Table)>>(iter: I) -> Self {
        Self {
            tables: iter.into_iter().collect(),
        }
    }
}
