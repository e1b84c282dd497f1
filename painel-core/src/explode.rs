//! Expansion of multi-value item cells ("morango, chocolate") into atomic items.

use crate::aggregate::normalize_key;

/// One atomic item taken from a composite cell, with its share of the row value.
#[derive(Debug, Clone, PartialEq)]
pub struct ExplodedItem {
    /// Normalized (trimmed, upper-cased) item name.
    pub item: String,
    /// Share of the source row's value attributed to this item.
    pub value: f64,
    /// Occurrence tally; always one per exploded entry.
    pub count: u64,
    /// Index of the source row in its table.
    pub source_row: usize,
}

/// Split a composite cell into normalized, non-empty item names.
#[must_use]
pub fn split_items(text: &str, separator: char) -> Vec<String> {
    text.split(separator)
        .map(normalize_key)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Explode one row into its atomic items, dividing `value` evenly across them.
///
/// The shares of one row always add back up to `value`: the last item takes whatever
/// floating-point residue the even split leaves behind. A cell without items yields
/// no entries.
#[must_use]
pub fn explode(value: f64, text: &str, separator: char, source_row: usize) -> Vec<ExplodedItem> {
    let items = split_items(text, separator);
    let n = items.len();
    if n == 0 {
        return Vec::new();
    }
    #[allow(clippy::cast_precision_loss)]
    let share = value / n as f64;
    let mut attributed = 0.0;
    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
            let v = if i + 1 == n { value - attributed } else { share };
            attributed += v;
            ExplodedItem {
                item,
                value: v,
                count: 1,
                source_row,
            }
        })
        .collect()
}
