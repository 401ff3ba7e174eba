//! Utility functions for display-width measurement, padding and wrapping.
//!
//! Widths are terminal columns, not bytes: CJK characters count as two
//! columns and ANSI escape codes count as zero.

use console::{measure_text_width, pad_str, Alignment};

/// Returns the display width of a string.
///
/// # Example
///
/// ```rust
/// use tabletree::tabular::display_width;
///
/// assert_eq!(display_width("hello"), 5);
/// assert_eq!(display_width("日本"), 4);
/// ```
pub fn display_width(s: &str) -> usize {
    measure_text_width(s)
}

/// Pads a string on the right (left-aligns) to reach the target width.
///
/// ```rust
/// use tabletree::tabular::pad_right;
///
/// assert_eq!(pad_right("42", 5), "42   ");
/// assert_eq!(pad_right("hello", 3), "hello");
/// ```
pub fn pad_right(s: &str, width: usize) -> String {
    pad_str(s, width, Alignment::Left, None).into_owned()
}

/// Pads a string on both sides (centers) to reach the target width.
///
/// When the remaining space is odd, the extra space goes on the right.
///
/// ```rust
/// use tabletree::tabular::pad_center;
///
/// assert_eq!(pad_center("hi", 6), "  hi  ");
/// assert_eq!(pad_center("hi", 5), " hi  ");
/// ```
pub fn pad_center(s: &str, width: usize) -> String {
    pad_str(s, width, Alignment::Center, None).into_owned()
}

/// Word-wraps a single line to the given display width.
///
/// Lines that already fit are returned unchanged. Otherwise words are packed
/// greedily, separated by single spaces. A word wider than `width` is kept
/// whole on its own line rather than split.
///
/// ```rust
/// use tabletree::tabular::wrap;
///
/// assert_eq!(wrap("hello world foo bar", 11), vec!["hello world", "foo bar"]);
/// assert_eq!(wrap("short", 30), vec!["short"]);
/// ```
pub fn wrap(line: &str, width: usize) -> Vec<String> {
    if display_width(line) <= width {
        return vec![line.to_string()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in line.split_whitespace() {
        let word_width = display_width(word);
        if current.is_empty() {
            current.push_str(word);
            current_width = word_width;
        } else if current_width + 1 + word_width <= width {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + word_width;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_width = word_width;
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Tab stop interval used when expanding tabs in cell text.
pub(crate) const TAB_WIDTH: usize = 4;

/// Prepares one line of cell text for measuring.
///
/// Drops a trailing carriage return left over from `\r\n` line endings and
/// expands tabs to the next multiple of [`TAB_WIDTH`] columns.
pub(crate) fn normalize_line(line: &str) -> String {
    let line = line.strip_suffix('\r').unwrap_or(line);
    if !line.contains('\t') {
        return line.to_string();
    }

    let mut out = String::new();
    let mut column = 0;
    for (i, segment) in line.split('\t').enumerate() {
        if i > 0 {
            let spaces = TAB_WIDTH - column % TAB_WIDTH;
            out.extend(std::iter::repeat(' ').take(spaces));
            column += spaces;
        }
        out.push_str(segment);
        column += display_width(segment);
    }
    out
}
