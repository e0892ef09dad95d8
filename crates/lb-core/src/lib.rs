//! Core types for Losbuch: weighted tables, reference resolution, and
//! referential integrity.
//!
//! A [`TableCollection`] maps table names to [`Table`]s of weighted
//! [`Entry`]s. An entry named `LIST_REF:<name>` points at another table, and
//! [`resolve`] follows those references until it lands on a plain entry. All
//! operations take the collection as an immutable snapshot; edits return a new
//! collection.

/// Table collections and pure edit operations on them.
pub mod collection;
/// Draw configuration (seed and depth bound).
pub mod config;
/// Entries, tables, and the `LIST_REF:` reference convention.
pub mod entry;
/// Error types used throughout the crate.
pub mod error;
/// Reference validation, reverse lookups, and cascading deletes.
pub mod integrity;
/// Transitive resolution of a draw across tables.
pub mod resolve;
/// Weighted random selection within a single table.
pub mod select;

/// Re-export collection types.
pub use collection::TableCollection;
/// Re-export draw configuration.
pub use config::DrawConfig;
/// Re-export entry types.
pub use entry::{Entry, REFERENCE_PREFIX, Table, parse_entry_lines};
/// Re-export error types.
pub use error::{CollectionError, CollectionResult, DrawError, ValidationError};
/// Re-export integrity checks.
pub use integrity::{
    cascade_remove_references, dangling_references, find_referencing_tables, validate_references,
};
/// Re-export the resolver.
pub use resolve::{Draw, MAX_DEPTH, resolve, resolve_bounded};
/// Re-export the selector.
pub use select::{probabilities, select_weighted};
