//! The model tree handed to the renderer.
//!
//! A [`Node`] is one of three kinds: a mapping from string keys to nodes, a
//! sequence of nodes, or a [`Scalar`]. The absent value (JSON `null`, YAML
//! `~`, Rust `None`) is its own variant so it can render as an empty cell.
//!
//! Mappings are stored in a [`BTreeMap`], so iterating a mapping always
//! yields its keys in ascending byte-wise lexicographic order.
//!
//! # Example
//!
//! ```
//! use tabletree::{Node, NodeKind};
//! use serde_json::json;
//!
//! let node = Node::from(json!({"Name": "web1", "Tags": {"env": "prod"}}));
//! assert_eq!(node.kind(), NodeKind::Mapping);
//! ```

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

use crate::error::{RenderError, Result};

/// A leaf value of the model.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    Bool(bool),
    Integer(i64),
    Unsigned(u64),
    Float(f64),
    Text(String),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(b) => write!(f, "{}", b),
            Scalar::Integer(n) => write!(f, "{}", n),
            Scalar::Unsigned(n) => write!(f, "{}", n),
            Scalar::Float(n) => write!(f, "{}", n),
            Scalar::Text(s) => f.write_str(s),
        }
    }
}

/// One node of the model tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Node {
    /// String keys to child nodes, iterated in lexicographic key order.
    Mapping(BTreeMap<String, Node>),
    /// Child nodes in their original order.
    Sequence(Vec<Node>),
    /// A leaf value.
    Scalar(Scalar),
    /// The absent value. Renders as an empty string.
    Absent,
}

/// The kind of a [`Node`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Mapping,
    Sequence,
    Scalar,
    Absent,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeKind::Mapping => "mapping",
            NodeKind::Sequence => "sequence",
            NodeKind::Scalar => "scalar",
            NodeKind::Absent => "absent",
        };
        f.write_str(name)
    }
}

impl Node {
    /// Builds a mapping node from `(key, value)` pairs.
    ///
    /// Later pairs replace earlier ones with the same key.
    pub fn mapping<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Node)>,
    {
        Node::Mapping(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Builds a sequence node.
    pub fn sequence<I: IntoIterator<Item = Node>>(items: I) -> Self {
        Node::Sequence(items.into_iter().collect())
    }

    /// Builds a text scalar.
    pub fn text(s: impl Into<String>) -> Self {
        Node::Scalar(Scalar::Text(s.into()))
    }

    /// Converts any serializable value into a model tree.
    ///
    /// The value goes through [`serde_json::Value`], so map keys must
    /// serialize as strings.
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        Ok(serde_json::to_value(value)?.into())
    }

    /// Returns the kind of this node.
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Mapping(_) => NodeKind::Mapping,
            Node::Sequence(_) => NodeKind::Sequence,
            Node::Scalar(_) => NodeKind::Scalar,
            Node::Absent => NodeKind::Absent,
        }
    }

    /// Returns `true` for mappings and sequences.
    pub fn is_structured(&self) -> bool {
        matches!(self, Node::Mapping(_) | Node::Sequence(_))
    }
}

impl From<serde_json::Value> for Node {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => Node::Absent,
            Value::Bool(b) => Node::Scalar(Scalar::Bool(b)),
            Value::Number(n) => Node::Scalar(number_scalar(
                n.as_i64(),
                n.as_u64(),
                n.as_f64(),
                || n.to_string(),
            )),
            Value::String(s) => Node::Scalar(Scalar::Text(s)),
            Value::Array(items) => Node::Sequence(items.into_iter().map(Node::from).collect()),
            Value::Object(map) => {
                Node::Mapping(map.into_iter().map(|(k, v)| (k, Node::from(v))).collect())
            }
        }
    }
}

impl TryFrom<serde_yaml::Value> for Node {
    type Error = RenderError;

    /// Converts a YAML document into a model tree.
    ///
    /// Fails with [`RenderError::InvalidNodeKind`] on tagged values and on
    /// mapping keys that are themselves mappings, sequences or tagged values.
    fn try_from(value: serde_yaml::Value) -> Result<Self> {
        from_yaml(value, "$")
    }
}

fn from_yaml(value: serde_yaml::Value, path: &str) -> Result<Node> {
    use serde_yaml::Value;

    match value {
        Value::Null => Ok(Node::Absent),
        Value::Bool(b) => Ok(Node::Scalar(Scalar::Bool(b))),
        Value::Number(n) => Ok(Node::Scalar(number_scalar(
            n.as_i64(),
            n.as_u64(),
            n.as_f64(),
            || n.to_string(),
        ))),
        Value::String(s) => Ok(Node::Scalar(Scalar::Text(s))),
        Value::Sequence(items) => items
            .into_iter()
            .enumerate()
            .map(|(i, item)| from_yaml(item, &format!("{}[{}]", path, i)))
            .collect::<Result<Vec<_>>>()
            .map(Node::Sequence),
        Value::Mapping(map) => {
            let mut entries = BTreeMap::new();
            for (key, item) in map {
                let key = yaml_key(key, path)?;
                let child = from_yaml(item, &format!("{}.{}", path, key))?;
                entries.insert(key, child);
            }
            Ok(Node::Mapping(entries))
        }
        Value::Tagged(tagged) => Err(RenderError::InvalidNodeKind {
            path: path.to_string(),
            kind: format!("tagged value {}", tagged.tag),
        }),
    }
}

fn yaml_key(key: serde_yaml::Value, path: &str) -> Result<String> {
    use serde_yaml::Value;

    let kind = match key {
        Value::String(s) => return Ok(s),
        Value::Number(n) => return Ok(n.to_string()),
        Value::Bool(b) => return Ok(b.to_string()),
        Value::Null => return Ok(String::new()),
        Value::Sequence(_) => "sequence used as a mapping key",
        Value::Mapping(_) => "mapping used as a mapping key",
        Value::Tagged(_) => "tagged value used as a mapping key",
    };
    Err(RenderError::InvalidNodeKind {
        path: path.to_string(),
        kind: kind.to_string(),
    })
}

// Prefer the exact integer representations; a number that fits none of them
// keeps its source text.
fn number_scalar(
    signed: Option<i64>,
    unsigned: Option<u64>,
    float: Option<f64>,
    text: impl FnOnce() -> String,
) -> Scalar {
    if let Some(n) = signed {
        Scalar::Integer(n)
    } else if let Some(n) = unsigned {
        Scalar::Unsigned(n)
    } else if let Some(n) = float {
        Scalar::Float(n)
    } else {
        Scalar::Text(text())
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Node::text(s)
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Node::text(s)
    }
}

impl From<bool> for Node {
    fn from(b: bool) -> Self {
        Node::Scalar(Scalar::Bool(b))
    }
}

impl From<i64> for Node {
    fn from(n: i64) -> Self {
        Node::Scalar(Scalar::Integer(n))
    }
}

impl From<u64> for Node {
    fn from(n: u64) -> Self {
        Node::Scalar(Scalar::Unsigned(n))
    }
}

impl From<f64> for Node {
    fn from(n: f64) -> Self {
        Node::Scalar(Scalar::Float(n))
    }
}

impl<T: Into<Node>> From<Option<T>> for Node {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Node::Absent)
    }
}

impl From<Vec<Node>> for Node {
    fn from(items: Vec<Node>) -> Self {
        Node::Sequence(items)
    }
}

impl From<BTreeMap<String, Node>> for Node {
    fn from(map: BTreeMap<String, Node>) -> Self {
        Node::Mapping(map)
    }
}
