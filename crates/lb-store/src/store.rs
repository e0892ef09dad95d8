//! File-backed table storage.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use lb_core::TableCollection;
use tracing::{debug, info};

use crate::defaults::default_tables;
use crate::error::{StoreError, StoreResult};
use crate::format::{parse_collection, to_json_pretty};

/// A JSON table file on disk.
///
/// The store hands out whole-collection snapshots and takes whole collections
/// back; it never edits tables itself.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    /// Use the table file at `path`. Nothing is read until [`load`](Self::load).
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the table file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the table file exists yet.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Read the current collection.
    ///
    /// A missing file yields the default tables. A file that cannot be parsed
    /// is an error, so it is never silently overwritten.
    pub fn load(&self) -> StoreResult<TableCollection> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = %self.path.display(), "no table file yet, starting from defaults");
                return Ok(default_tables());
            }
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let tables = parse_collection(&content)?;
        debug!(path = %self.path.display(), tables = tables.len(), "loaded tables");
        Ok(tables)
    }

    /// Replace the table file with `tables`.
    ///
    /// Writes to a sibling temporary file first and renames it into place.
    pub fn save(&self, tables: &TableCollection) -> StoreResult<()> {
        let json = to_json_pretty(tables)?;
        let tmp = self.path.with_extension("json.tmp");

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(&tmp, json).map_err(|source| StoreError::Io {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, &self.path).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;

        debug!(path = %self.path.display(), tables = tables.len(), "saved tables");
        Ok(())
    }
}
