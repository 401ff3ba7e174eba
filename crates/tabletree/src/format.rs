//! Output formats for a rendered model.
//!
//! A [`Formatter`] turns a model into the text written to the user. The
//! table formatter is the interesting one; JSON and YAML emit the model as
//! structured data for scripting.
//!
//! # Example
//!
//! ```rust
//! use tabletree::{Node, OutputFormat, TableRenderer};
//! use serde_json::json;
//!
//! let format: OutputFormat = "json".parse().unwrap();
//! let formatter = format.formatter(TableRenderer::new());
//! let output = formatter.format_output(&Node::from(json!({"a": 1}))).unwrap();
//! assert_eq!(output, "{\n  \"a\": 1\n}");
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::{RenderError, Result};
use crate::node::Node;
use crate::renderer::TableRenderer;

/// Turns a model into output text.
pub trait Formatter {
    fn format_output(&self, model: &Node) -> Result<String>;
}

/// Nested bordered tables.
#[derive(Clone, Debug, Default)]
pub struct TableFormatter {
    renderer: TableRenderer,
}

impl TableFormatter {
    pub fn new(renderer: TableRenderer) -> Self {
        TableFormatter { renderer }
    }
}

impl Formatter for TableFormatter {
    fn format_output(&self, model: &Node) -> Result<String> {
        self.renderer.render(model)
    }
}

/// Pretty-printed JSON.
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format_output(&self, model: &Node) -> Result<String> {
        Ok(serde_json::to_string_pretty(model)?)
    }
}

/// YAML, without the trailing newline.
#[derive(Clone, Copy, Debug, Default)]
pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn format_output(&self, model: &Node) -> Result<String> {
        let yaml = serde_yaml::to_string(model)?;
        Ok(yaml.trim_end_matches('\n').to_string())
    }
}

/// The available output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Yaml,
}

impl OutputFormat {
    /// Returns the formatter for this format. Only `Table` uses `renderer`.
    pub fn formatter(self, renderer: TableRenderer) -> Box<dyn Formatter> {
        match self {
            OutputFormat::Table => Box::new(TableFormatter::new(renderer)),
            OutputFormat::Json => Box::new(JsonFormatter),
            OutputFormat::Yaml => Box::new(YamlFormatter),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            _ => Err(RenderError::UnknownFormat(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Table => "table",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
        };
        f.write_str(name)
    }
}
