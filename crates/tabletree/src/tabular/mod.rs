//! Unicode-aware bordered tables for terminal output.
//!
//! This module provides the [`Table`] decorator the renderer lays its
//! key/value tables out with, plus the width and padding helpers it relies
//! on. Widths are measured in terminal columns, so CJK characters count as
//! two columns and ANSI escape codes count as none.
//!
//! ## Border Styles
//!
//! - [`BorderStyle::Ascii`] - `+`, `-`, `|` (default)
//! - [`BorderStyle::Light`] - `┌─┬─┐`
//! - [`BorderStyle::Heavy`] - `┏━┳━┓`
//! - [`BorderStyle::Double`] - `╔═╦═╗`
//! - [`BorderStyle::Rounded`] - `╭─┬─╮`
//!
//! ## Utility Functions
//!
//! ```rust
//! use tabletree::tabular::{display_width, pad_right, wrap};
//!
//! let padded = pad_right("web1", 6);
//! assert_eq!(display_width(&padded), 6);
//!
//! let lines = wrap("hello world foo bar", 11);
//! assert_eq!(lines, vec!["hello world", "foo bar"]);
//! ```

mod decorator;
mod types;
mod util;

pub use decorator::{Table, DEFAULT_WRAP_WIDTH};
pub use types::{Align, BorderStyle};
pub use util::{display_width, pad_center, pad_right, wrap};
