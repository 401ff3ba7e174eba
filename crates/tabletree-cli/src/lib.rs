//! Command-line front end for `tabletree`.
//!
//! Reads a JSON or YAML document from a file or standard input, converts it
//! into a [`Node`] and prints it with the selected output format.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tabletree::tabular::BorderStyle;
use tabletree::{Node, OutputFormat, TableRenderer, DEFAULT_MAX_DEPTH};
use tracing::debug;

/// Print JSON or YAML documents as nested terminal tables
#[derive(Debug, Parser)]
#[command(name = "tabletree", version, about)]
pub struct Cli {
    /// Document to render; reads standard input when omitted or "-"
    pub file: Option<PathBuf>,

    /// Input format; guessed from the file extension when omitted
    #[arg(short, long, value_enum)]
    pub input: Option<InputFormat>,

    /// Output format: table, json or yaml
    #[arg(short, long, default_value = "table", env = "TABLETREE_OUTPUT")]
    pub output: OutputFormat,

    /// Terminal width budget; detected from the terminal when omitted
    #[arg(short, long, env = "TABLETREE_WIDTH")]
    pub width: Option<usize>,

    /// Border style for tables
    #[arg(short, long, value_enum, default_value = "ascii", env = "TABLETREE_BORDER")]
    pub border: BorderArg,

    /// Maximum nesting depth; 0 disables the limit
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    Json,
    Yaml,
}

impl InputFormat {
    /// Guesses the format from a file extension. Anything that is not
    /// `.yaml`/`.yml` is read as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                InputFormat::Yaml
            }
            _ => InputFormat::Json,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BorderArg {
    Ascii,
    Light,
    Heavy,
    Double,
    Rounded,
}

impl From<BorderArg> for BorderStyle {
    fn from(arg: BorderArg) -> Self {
        match arg {
            BorderArg::Ascii => BorderStyle::Ascii,
            BorderArg::Light => BorderStyle::Light,
            BorderArg::Heavy => BorderStyle::Heavy,
            BorderArg::Double => BorderStyle::Double,
            BorderArg::Rounded => BorderStyle::Rounded,
        }
    }
}

impl Cli {
    /// Log filter directive for the requested verbosity.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }

    fn source(&self) -> Option<&Path> {
        self.file.as_deref().filter(|p| *p != Path::new("-"))
    }

    fn input_format(&self) -> InputFormat {
        self.input
            .or_else(|| self.source().map(InputFormat::from_path))
            .unwrap_or(InputFormat::Json)
    }

    fn renderer(&self) -> TableRenderer {
        let limit = (self.max_depth > 0).then_some(self.max_depth);
        let renderer = TableRenderer::new()
            .border(self.border.into())
            .max_depth(limit);
        match self.width {
            Some(width) => renderer.width(width),
            None => renderer,
        }
    }
}

/// Parses a document into a model.
pub fn parse_model(text: &str, format: InputFormat) -> Result<Node> {
    match format {
        InputFormat::Json => {
            let value: serde_json::Value =
                serde_json::from_str(text).context("failed to parse JSON input")?;
            Ok(Node::from(value))
        }
        InputFormat::Yaml => {
            let value: serde_yaml::Value =
                serde_yaml::from_str(text).context("failed to parse YAML input")?;
            Ok(Node::try_from(value)?)
        }
    }
}

fn read_source(source: Option<&Path>) -> Result<String> {
    match source {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read standard input")?;
            Ok(text)
        }
    }
}

/// Loads the document and returns the formatted output.
pub fn run(cli: &Cli) -> Result<String> {
    let format = cli.input_format();
    debug!(source = ?cli.source(), ?format, "loading model");
    let text = read_source(cli.source())?;
    let model = parse_model(&text, format)?;

    debug!(output = %cli.output, width = ?cli.width, kind = %model.kind(), "formatting model");
    let formatter = cli.output.formatter(cli.renderer());
    let output = formatter
        .format_output(&model)
        .with_context(|| format!("failed to format output as {}", cli.output))?;
    Ok(output)
}
