//! Drawing from a table and following `LIST_REF:` references.

use tracing::debug;

use crate::collection::TableCollection;
use crate::entry::Entry;
use crate::error::DrawError;
use crate::select::select_weighted;

/// Maximum number of tables visited in one draw, counting the starting table.
pub const MAX_DEPTH: usize = 10;

/// A successful draw.
#[derive(Debug, Clone, PartialEq)]
pub struct Draw<'a> {
    /// Tables visited, from the requested table to the one owning `item`.
    pub path: Vec<String>,
    /// The drawn leaf entry, borrowed from the collection.
    pub item: &'a Entry,
}

impl Draw<'_> {
    /// The table the item was drawn from.
    pub fn table(&self) -> &str {
        self.path.last().map_or("", String::as_str)
    }

    /// Render as `Start -> Next -> item`.
    pub fn trace(&self) -> String {
        let mut out = self.path.join(" -> ");
        out.push_str(" -> ");
        out.push_str(&self.item.name);
        out
    }
}

/// Draw from `table_name`, following references with a depth bound of
/// [`MAX_DEPTH`].
///
/// `next` supplies uniform values in `[0, 1)`, one per visited table.
pub fn resolve<'a, F>(
    table_name: &str,
    tables: &'a TableCollection,
    next: F,
) -> Result<Draw<'a>, DrawError>
where
    F: FnMut() -> f64,
{
    resolve_bounded(table_name, tables, MAX_DEPTH, next)
}

/// Draw from `table_name`, visiting at most `max_depth` tables.
///
/// The visited path doubles as the cycle check: a reference to any table
/// already on it fails with [`DrawError::CycleDetected`], which includes a
/// table referencing itself. Blank entries are skipped on every hop, so a
/// table holding only blank entries counts as empty. A `max_depth` of 0
/// fails every draw with [`DrawError::MaxDepthExceeded`].
pub fn resolve_bounded<'a, F>(
    table_name: &str,
    tables: &'a TableCollection,
    max_depth: usize,
    mut next: F,
) -> Result<Draw<'a>, DrawError>
where
    F: FnMut() -> f64,
{
    let mut path = vec![table_name.to_string()];
    let mut current = tables.get(table_name);
    let mut depth = max_depth;

    while depth > 0 {
        let Some(winner) = current.and_then(|t| select_weighted(t.drawable(), &mut next)) else {
            return Err(DrawError::EmptyOrMissingTable(last_visited(&path)));
        };

        let Some(target) = winner.reference_target() else {
            debug!(table = %last_visited(&path), item = %winner.name, "drew entry");
            return Ok(Draw { path, item: winner });
        };

        if !tables.contains(target) {
            return Err(DrawError::TableNotFound(target.to_string()));
        }
        if path.iter().any(|visited| visited == target) {
            return Err(DrawError::CycleDetected(target.to_string()));
        }

        debug!(from = %last_visited(&path), to = target, "following table reference");
        path.push(target.to_string());
        current = tables.get(target);
        depth -= 1;
    }

    Err(DrawError::MaxDepthExceeded)
}

fn last_visited(path: &[String]) -> String {
    path.last().cloned().unwrap_or_default()
}
