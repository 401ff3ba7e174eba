//! Bordered table rendering with multi-line cells.
//!
//! A [`Table`] collects rows of string cells and renders them inside a box
//! border. Column widths come from the content: each column is as wide as the
//! widest line of any of its cells. Cells may contain newlines (including a
//! whole rendered sub-table); a row is as tall as its tallest cell.
//!
//! # Example
//!
//! ```rust
//! use tabletree::tabular::{Align, BorderStyle, Table};
//!
//! let table = Table::new()
//!     .border(BorderStyle::Ascii)
//!     .align(Align::Left)
//!     .row(["Name", "web1"])
//!     .row(["CPU", "2"]);
//!
//! assert_eq!(
//!     table.render(),
//!     "+------+------+\n\
//!      | Name | web1 |\n\
//!      +------+------+\n\
//!      | CPU  | 2    |\n\
//!      +------+------+"
//! );
//! ```

use super::types::{Align, BorderStyle};
use super::util::{display_width, normalize_line, pad_center, pad_right, wrap};

/// Default line width at which wrapping tables break cell text.
pub const DEFAULT_WRAP_WIDTH: usize = 30;

/// A decorated table with borders and optional row lines.
#[derive(Clone, Debug)]
pub struct Table {
    rows: Vec<Vec<String>>,
    border: BorderStyle,
    align: Align,
    /// Maximum line width before cell text is word-wrapped.
    wrap_width: Option<usize>,
    /// Whether to draw a rule between data rows.
    row_separator: bool,
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

impl Table {
    /// Create an empty table with ASCII borders, left alignment, no
    /// wrapping and row lines enabled.
    pub fn new() -> Self {
        Table {
            rows: Vec::new(),
            border: BorderStyle::Ascii,
            align: Align::Left,
            wrap_width: None,
            row_separator: true,
        }
    }

    /// Set the border style.
    pub fn border(mut self, border: BorderStyle) -> Self {
        self.border = border;
        self
    }

    /// Set the cell alignment.
    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// Word-wrap cell lines wider than `width`, or disable wrapping with `None`.
    pub fn wrap(mut self, width: Option<usize>) -> Self {
        self.wrap_width = width;
        self
    }

    /// Enable or disable rules between data rows.
    pub fn row_separator(mut self, enable: bool) -> Self {
        self.row_separator = enable;
        self
    }

    /// Append a row, builder style.
    pub fn row<S: Into<String>, I: IntoIterator<Item = S>>(mut self, cells: I) -> Self {
        self.push_row(cells);
        self
    }

    /// Append a row.
    pub fn push_row<S: Into<String>, I: IntoIterator<Item = S>>(&mut self, cells: I) {
        self.rows.push(cells.into_iter().map(Into::into).collect());
    }

    /// Number of columns: the length of the longest row.
    pub fn num_columns(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Render the complete table.
    ///
    /// The result has no trailing newline. A table without rows renders as
    /// the empty string.
    pub fn render(&self) -> String {
        if self.rows.is_empty() {
            return String::new();
        }

        let cells = self.cell_lines();
        let widths = column_widths(&cells, self.num_columns());

        let mut output = Vec::new();
        output.push(self.horizontal_line(&widths, LineType::Top));
        for (i, row) in cells.iter().enumerate() {
            if i > 0 && self.row_separator {
                output.push(self.horizontal_line(&widths, LineType::Middle));
            }
            self.push_row_lines(&mut output, row, &widths);
        }
        output.push(self.horizontal_line(&widths, LineType::Bottom));

        output.join("\n")
    }

    /// Split every cell into display lines, wrapping when enabled.
    ///
    /// Short rows are filled with empty cells up to the column count.
    fn cell_lines(&self) -> Vec<Vec<Vec<String>>> {
        let columns = self.num_columns();
        self.rows
            .iter()
            .map(|row| {
                (0..columns)
                    .map(|i| {
                        let cell = row.get(i).map(String::as_str).unwrap_or("");
                        let lines = cell.split('\n').map(normalize_line);
                        match self.wrap_width {
                            Some(width) => lines.flat_map(|l| wrap(&l, width)).collect(),
                            None => lines.collect(),
                        }
                    })
                    .collect()
            })
            .collect()
    }

    fn push_row_lines(&self, output: &mut Vec<String>, row: &[Vec<String>], widths: &[usize]) {
        let vertical = self.border.chars().vertical;
        let height = row.iter().map(Vec::len).max().unwrap_or(1);

        for line_index in 0..height {
            let mut line = String::new();
            line.push(vertical);
            for (cell, &width) in row.iter().zip(widths) {
                let text = cell.get(line_index).map(String::as_str).unwrap_or("");
                line.push(' ');
                line.push_str(&self.pad(text, width));
                line.push(' ');
                line.push(vertical);
            }
            output.push(line);
        }
    }

    fn pad(&self, text: &str, width: usize) -> String {
        match self.align {
            Align::Left => pad_right(text, width),
            Align::Center => pad_center(text, width),
        }
    }

    /// Generate a horizontal rule (top, middle, or bottom) with junctions at
    /// column boundaries.
    fn horizontal_line(&self, widths: &[usize], line_type: LineType) -> String {
        let chars = self.border.chars();
        let [left, joint, right] = match line_type {
            LineType::Top => chars.top,
            LineType::Middle => chars.middle,
            LineType::Bottom => chars.bottom,
        };

        let mut line = String::new();
        line.push(left);
        for (i, &width) in widths.iter().enumerate() {
            if i > 0 {
                line.push(joint);
            }
            // One column of padding on each side of the content.
            line.extend(std::iter::repeat(chars.horizontal).take(width + 2));
        }
        line.push(right);
        line
    }
}

fn column_widths(cells: &[Vec<Vec<String>>], columns: usize) -> Vec<usize> {
    (0..columns)
        .map(|i| {
            cells
                .iter()
                .filter_map(|row| row.get(i))
                .flat_map(|lines| lines.iter().map(|l| display_width(l)))
                .max()
                .unwrap_or(0)
        })
        .collect()
}

/// Type of horizontal line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LineType {
    Top,
    Middle,
    Bottom,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crlf_and_tabs_keep_columns_aligned() {
        let table = Table::new().row(["x\r\ny", "t\tt"]);
        assert_eq!(
            table.render(),
            "+---+-------+\n\
             | x | t   t |\n\
             | y |       |\n\
             +---+-------+"
        );
    }

    #[test]
    fn empty_table_renders_nothing() {
        assert_eq!(Table::new().render(), "");
    }

    #[test]
    fn single_cell_table() {
        let table = Table::new().row(["abc"]);
        assert_eq!(table.render(), "+-----+\n| abc |\n+-----+");
    }

    #[test]
    fn junctions_at_column_boundaries() {
        let table = Table::new().row(["a", "bb", "ccc"]);
        let lines: Vec<String> = table.render().lines().map(String::from).collect();
        assert_eq!(lines[0], "+---+----+-----+");
        assert_eq!(lines[1], "| a | bb | ccc |");
    }

    #[test]
    fn center_alignment() {
        let table = Table::new().align(Align::Center).row(["env"]).row(["prod"]);
        assert_eq!(
            table.render(),
            "+------+\n| env  |\n+------+\n| prod |\n+------+"
        );
    }

    #[test]
    fn multi_line_cells_pad_short_cells_at_bottom() {
        let table = Table::new().row(["key", "line one\nline two"]);
        let output = table.render();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1], "| key | line one |");
        assert_eq!(lines[2], "|     | line two |");
    }

    #[test]
    fn row_separator_between_rows_only() {
        let table = Table::new().row(["A"]).row(["B"]).row(["C"]);
        let output = table.render();
        let rules = output.lines().filter(|l| l.starts_with('+')).count();
        // top, two separators, bottom
        assert_eq!(rules, 4);
    }

    #[test]
    fn row_separator_disabled() {
        let table = Table::new().row_separator(false).row(["A"]).row(["B"]);
        assert_eq!(table.render().lines().count(), 4);
    }

    #[test]
    fn wrapping_breaks_long_lines() {
        let table = Table::new()
            .wrap(Some(10))
            .row(["one two three four"]);
        let output = table.render();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[1], "| one two    |");
        assert_eq!(lines[2], "| three four |");
    }

    #[test]
    fn wrapping_disabled_keeps_long_lines() {
        let table = Table::new().row(["one two three four"]);
        assert_eq!(table.render().lines().count(), 3);
    }

    #[test]
    fn ragged_rows_are_filled() {
        let table = Table::new().row(["a", "b"]).row(["c"]);
        assert_eq!(table.num_columns(), 2);
        let output = table.render();
        assert!(output.contains("| c |   |"));
    }

    #[test]
    fn light_border_characters() {
        let table = Table::new().border(BorderStyle::Light).row(["x", "y"]).row(["z", "w"]);
        let output = table.render();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "┌───┬───┐");
        assert_eq!(lines[1], "│ x │ y │");
        assert_eq!(lines[2], "├───┼───┤");
        assert_eq!(lines[4], "└───┴───┘");
    }

    #[test]
    fn wide_characters_measured_by_display_width() {
        let table = Table::new().row(["日本"]).row(["ab"]);
        let output = table.render();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "+------+");
        assert_eq!(lines[3], "| ab   |");
    }

    #[test]
    fn nested_table_as_cell() {
        let inner = Table::new().row(["x"]).render();
        let outer = Table::new().row([inner]);
        assert_eq!(
            outer.render(),
            "+-------+\n| +---+ |\n| | x | |\n| +---+ |\n+-------+"
        );
    }
}
