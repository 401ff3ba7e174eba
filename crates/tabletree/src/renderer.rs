//! Recursive rendering of model trees into nested tables.
//!
//! [`TableRenderer`] walks a [`Node`] and dispatches on its kind:
//!
//! - the absent value renders as the empty string, other scalars as their
//!   text;
//! - a sequence renders each element at the same depth and joins the results
//!   with newlines, keeping element order;
//! - a mapping renders as a table.
//!
//! A mapping whose values are all scalars becomes one flat key/value table,
//! horizontal or vertical depending on the terminal width (see
//! [`crate::layout`]). A mapping with structured values becomes an outer
//! single-column table: the scalar entries share the first row, and every
//! structured entry gets a row of its own holding a small table with the key
//! above the entry's rendering. Keys are visited in lexicographic order.
//!
//! # Example
//!
//! ```rust
//! use tabletree::{Node, TableRenderer};
//! use serde_json::json;
//!
//! let model = Node::from(json!({"Name": "web1", "CPU": 2}));
//! let output = TableRenderer::new().render_with_width(&model, 80).unwrap();
//!
//! assert_eq!(
//!     output,
//!     "+-----+------+\n\
//!      | CPU | Name |\n\
//!      +-----+------+\n\
//!      |  2  | web1 |\n\
//!      +-----+------+"
//! );
//! ```

use std::collections::BTreeMap;

use crate::error::{RenderError, Result};
use crate::layout::{min_width, select_layout, Layout};
use crate::node::Node;
use crate::tabular::{Align, BorderStyle, Table, DEFAULT_WRAP_WIDTH};
use crate::terminal::terminal_width;

/// Default nesting limit for mappings and sequences.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Renders model trees as bordered, nested text tables.
///
/// The renderer holds configuration only. Each call is independent, so one
/// renderer can be shared freely, including across threads.
#[derive(Clone, Debug)]
pub struct TableRenderer {
    border: BorderStyle,
    wrap_width: usize,
    max_depth: Option<usize>,
    /// Fixed terminal width; `None` queries the terminal on every render.
    width: Option<usize>,
}

impl Default for TableRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TableRenderer {
    /// Create a renderer with ASCII borders, 30-column wrapping, the default
    /// depth limit, and terminal width detection.
    pub fn new() -> Self {
        TableRenderer {
            border: BorderStyle::Ascii,
            wrap_width: DEFAULT_WRAP_WIDTH,
            max_depth: Some(DEFAULT_MAX_DEPTH),
            width: None,
        }
    }

    /// Set the border style.
    pub fn border(mut self, border: BorderStyle) -> Self {
        self.border = border;
        self
    }

    /// Set the line width at which wrapping tables break cell text.
    pub fn wrap_width(mut self, width: usize) -> Self {
        self.wrap_width = width;
        self
    }

    /// Set the nesting limit, or `None` for no limit.
    pub fn max_depth(mut self, limit: Option<usize>) -> Self {
        self.max_depth = limit;
        self
    }

    /// Use a fixed terminal width instead of querying the terminal.
    pub fn width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    /// Render a model, using the configured width or the current terminal
    /// width.
    pub fn render(&self, model: &Node) -> Result<String> {
        let width = self.width.unwrap_or_else(terminal_width);
        self.render_with_width(model, width)
    }

    /// Render a model against an explicit terminal width.
    pub fn render_with_width(&self, model: &Node, terminal_width: usize) -> Result<String> {
        RenderPass {
            config: self,
            terminal_width,
        }
        .node(model, 0, 0)
    }
}

/// Render a model with the default renderer against an explicit width.
pub fn render_table(model: &Node, terminal_width: usize) -> Result<String> {
    TableRenderer::new().render_with_width(model, terminal_width)
}

/// One top-level render call: the configuration plus the width budget.
struct RenderPass<'a> {
    config: &'a TableRenderer,
    terminal_width: usize,
}

impl RenderPass<'_> {
    /// Render one node.
    ///
    /// `depth` is the table nesting level fed to the width estimate; sequence
    /// elements share their parent's. `nesting` counts every enclosing
    /// mapping and sequence and is what the depth limit checks.
    fn node(&self, node: &Node, depth: usize, nesting: usize) -> Result<String> {
        match node {
            Node::Absent => Ok(String::new()),
            Node::Scalar(scalar) => Ok(scalar.to_string()),
            Node::Sequence(items) => {
                self.check_depth(nesting)?;
                let rendered = items
                    .iter()
                    .map(|item| self.node(item, depth, nesting + 1))
                    .collect::<Result<Vec<_>>>()?;
                Ok(rendered.join("\n"))
            }
            Node::Mapping(map) => {
                self.check_depth(nesting)?;
                self.mapping(map, depth, nesting)
            }
        }
    }

    fn check_depth(&self, nesting: usize) -> Result<()> {
        match self.config.max_depth {
            Some(limit) if nesting > limit => Err(RenderError::DepthLimitExceeded { limit }),
            _ => Ok(()),
        }
    }

    fn mapping(&self, map: &BTreeMap<String, Node>, depth: usize, nesting: usize) -> Result<String> {
        if map.is_empty() {
            return Ok(String::new());
        }

        let mut keys = Vec::new();
        let mut values = Vec::new();
        let mut nested = Vec::new();
        // BTreeMap iteration is in lexicographic key order.
        for (key, value) in map {
            let rendered = self.node(value, depth + 1, nesting + 1)?;
            if value.is_structured() {
                nested.push((key.as_str(), rendered));
            } else {
                keys.push(key.as_str());
                values.push(rendered);
            }
        }

        if nested.is_empty() {
            return self.inner_table(&keys, &values, depth, true, false);
        }

        let mut outer = self.table(Align::Left, false);
        if !keys.is_empty() {
            outer.push_row([self.inner_table(&keys, &values, depth + 1, true, false)?]);
        }
        for (key, rendered) in nested {
            outer.push_row([self.inner_table(&[key], &[rendered], depth + 1, false, true)?]);
        }
        Ok(outer.render())
    }

    /// Lay out parallel key/value lists as one table.
    ///
    /// Wrapping tables are centered; non-wrapping ones are left-aligned. A
    /// `stacked` table keeps its keys above its values at any width.
    fn inner_table<K: AsRef<str>, V: AsRef<str>>(
        &self,
        keys: &[K],
        values: &[V],
        depth: usize,
        autowrap: bool,
        stacked: bool,
    ) -> Result<String> {
        if keys.len() != values.len() {
            return Err(RenderError::Internal(format!(
                "{} keys but {} values in one table",
                keys.len(),
                values.len()
            )));
        }

        let align = if autowrap { Align::Center } else { Align::Left };
        let mut table = self.table(align, autowrap);
        let required = min_width(keys, values, depth);
        match select_layout(required, self.terminal_width, stacked) {
            Layout::Horizontal => {
                table.push_row(keys.iter().map(|k| k.as_ref()));
                table.push_row(values.iter().map(|v| v.as_ref()));
            }
            Layout::Vertical => {
                for (key, value) in keys.iter().zip(values) {
                    table.push_row([key.as_ref(), value.as_ref()]);
                }
            }
        }
        Ok(table.render())
    }

    fn table(&self, align: Align, autowrap: bool) -> Table {
        Table::new()
            .border(self.config.border)
            .align(align)
            .wrap(autowrap.then_some(self.config.wrap_width))
            .row_separator(true)
    }
}
