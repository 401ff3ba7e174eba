//! Error types for model conversion and table rendering.
//!
//! Every fallible operation in this crate returns [`RenderError`]. Errors are
//! terminal: a failing nested render aborts the whole call and no partial
//! output is produced.

use thiserror::Error;

/// Errors that can occur while building or rendering a model.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A value that is neither a mapping, a sequence, a scalar, nor absent.
    #[error("invalid node kind at {path}: {kind} is not a mapping, sequence or scalar")]
    InvalidNodeKind { path: String, kind: String },

    /// The model nests deeper than the renderer's configured limit.
    #[error("model nesting exceeds the depth limit of {limit}")]
    DepthLimitExceeded { limit: usize },

    /// An internal invariant was violated while laying out a table.
    #[error("internal render error: {0}")]
    Internal(String),

    /// Converting the model to or from a serde data format failed.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// The requested output format name is not known.
    #[error("unknown output format '{0}' (expected table, json or yaml)")]
    UnknownFormat(String),
}

impl From<serde_json::Error> for RenderError {
    fn from(err: serde_json::Error) -> Self {
        RenderError::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for RenderError {
    fn from(err: serde_yaml::Error) -> Self {
        RenderError::Serialization(err.to_string())
    }
}

/// Result type for rendering operations.
pub type Result<T> = std::result::Result<T, RenderError>;
