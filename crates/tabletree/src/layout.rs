//! Horizontal/vertical layout selection for key/value tables.
//!
//! A set of key/value pairs is laid out either horizontally (one row of keys
//! above one row of values) or vertically (one `key | value` row per pair).
//! The choice compares a conservative width estimate against the terminal
//! width. The estimate is a heuristic, not a measurement of the rendered
//! table, and is kept exactly as below so output stays stable:
//!
//! ```text
//! w[i]     = max(width(keys[i]), width(values[i]))
//! required = sum(w) + 2*N + (N + 1) + 2*depth
//! ```
//!
//! `2*N` is the padding around each cell, `N + 1` the column delimiters, and
//! `2*depth` the extra padding per enclosing table.

use crate::tabular::display_width;

/// Orientation of a key/value table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Two rows: all keys, then all values. N columns.
    Horizontal,
    /// One row per pair: key, value. Two columns.
    Vertical,
}

/// Estimates the width a horizontal table of these pairs needs at `depth`.
///
/// Only the first `min(keys.len(), values.len())` pairs are counted; callers
/// check that the lists have equal length.
///
/// # Example
///
/// ```
/// use tabletree::min_width;
///
/// // max(4, 4) + 2 + 2 + 0
/// assert_eq!(min_width(&["Name"], &["web1"], 0), 8);
/// ```
pub fn min_width<K: AsRef<str>, V: AsRef<str>>(keys: &[K], values: &[V], depth: usize) -> usize {
    let count = keys.len().min(values.len());
    let words: usize = keys
        .iter()
        .zip(values)
        .map(|(k, v)| display_width(k.as_ref()).max(display_width(v.as_ref())))
        .sum();
    let paddings = count * 2;
    let delimiters = count + 1;
    words + paddings + delimiters + depth * 2
}

/// Chooses the layout for a key/value table.
///
/// A `stacked` table always keeps its keys above its values, whatever the
/// width. Otherwise the table turns vertical only when the estimate exceeds
/// the terminal width.
pub fn select_layout(required_width: usize, terminal_width: usize, stacked: bool) -> Layout {
    if !stacked && required_width > terminal_width {
        Layout::Vertical
    } else {
        Layout::Horizontal
    }
}
