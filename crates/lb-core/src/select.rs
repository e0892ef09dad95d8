//! Weighted selection over a table's entries.

use crate::entry::Entry;

/// Pick one entry with probability proportional to its weight.
///
/// `next` must return a uniform value in `[0, 1)`; it is called exactly once
/// for a non-empty input. Entries are walked in order and the first one whose
/// running weight exceeds `next() * total` wins. If rounding leaves nothing
/// selected, the last entry is returned. Returns `None` only for empty input.
///
/// Weights are divided by the largest one before summing, so a table of huge
/// finite weights keeps a finite total.
pub fn select_weighted<'e, I, F>(entries: I, mut next: F) -> Option<&'e Entry>
where
    I: IntoIterator<Item = &'e Entry>,
    I::IntoIter: Clone,
    F: FnMut() -> f64,
{
    let entries = entries.into_iter();
    let scale = largest_weight(entries.clone())?;
    let total: f64 = entries.clone().map(|e| e.effective_weight() / scale).sum();
    let target = next() * total;

    let mut cumulative = 0.0;
    let mut last = None;
    for entry in entries {
        cumulative += entry.effective_weight() / scale;
        if cumulative > target {
            return Some(entry);
        }
        last = Some(entry);
    }
    last
}

/// Each entry's share of the table's total weight, in entry order.
pub fn probabilities(entries: &[Entry]) -> Vec<f64> {
    let Some(scale) = largest_weight(entries) else {
        return Vec::new();
    };
    let total: f64 = entries.iter().map(|e| e.effective_weight() / scale).sum();
    entries
        .iter()
        .map(|e| e.effective_weight() / scale / total)
        .collect()
}

fn largest_weight<'e>(entries: impl IntoIterator<Item = &'e Entry>) -> Option<f64> {
    entries.into_iter().map(Entry::effective_weight).reduce(f64::max)
}
