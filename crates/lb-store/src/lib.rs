//! Persistence and import boundary for Losbuch.
//!
//! Reads and writes the table file format (a JSON object of table name to
//! `[{ "nome": ..., "peso": ... }]` arrays), validates import payloads before
//! they reach the core, and ships the starter tables a new store begins with.

pub mod defaults;
pub mod error;
pub mod format;
pub mod store;

pub use defaults::default_tables;
pub use error::{StoreError, StoreResult};
pub use format::{parse_collection, parse_entries, to_json_pretty};
pub use store::Store;
