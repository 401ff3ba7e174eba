//! # tabletree - Nested Tables for Terminal Output
//!
//! `tabletree` renders a tree of mappings, sequences and scalars as bordered
//! text tables. Scalar entries of a mapping share one key/value table;
//! structured entries are rendered recursively and nested as sub-tables. Each
//! key/value table is laid out horizontally (keys above values) when it fits
//! the terminal and vertically (one pair per row) when it does not.
//!
//! ## Core Concepts
//!
//! - [`Node`]: the model tree (mapping, sequence, scalar, or absent)
//! - [`TableRenderer`]: renders a model; configured with a builder
//! - [`Layout`] and [`min_width`]: the horizontal/vertical decision
//! - [`tabular::Table`]: the bordered table decorator
//! - [`OutputFormat`] / [`Formatter`]: table, JSON or YAML output
//!
//! ## Quick Start
//!
//! ```rust
//! use tabletree::{Node, TableRenderer};
//! use serde_json::json;
//!
//! let model = Node::from(json!({"Name": "web1", "Tags": {"env": "prod"}}));
//! let output = TableRenderer::new().render_with_width(&model, 80).unwrap();
//!
//! assert_eq!(
//!     output,
//!     "+--------------+\n\
//!      | +------+     |\n\
//!      | | Name |     |\n\
//!      | +------+     |\n\
//!      | | web1 |     |\n\
//!      | +------+     |\n\
//!      +--------------+\n\
//!      | +----------+ |\n\
//!      | | Tags     | |\n\
//!      | +----------+ |\n\
//!      | | +------+ | |\n\
//!      | | | env  | | |\n\
//!      | | +------+ | |\n\
//!      | | | prod | | |\n\
//!      | | +------+ | |\n\
//!      | +----------+ |\n\
//!      +--------------+"
//! );
//! ```
//!
//! ## Terminal Width
//!
//! [`TableRenderer::render`] queries the terminal width on every call (see
//! [`terminal_width`]). Use [`TableRenderer::render_with_width`] or
//! [`TableRenderer::width`] to render against a fixed budget.

mod error;
mod format;
pub mod layout;
mod node;
mod renderer;
pub mod tabular;
mod terminal;

pub use error::{RenderError, Result};
pub use format::{Formatter, JsonFormatter, OutputFormat, TableFormatter, YamlFormatter};
pub use layout::{min_width, select_layout, Layout};
pub use node::{Node, NodeKind, Scalar};
pub use renderer::{render_table, TableRenderer, DEFAULT_MAX_DEPTH};
pub use terminal::{terminal_width, DEFAULT_TERMINAL_WIDTH};
