//! Nested color trees and the flattener.
//!
//! A palette is written as a tree of named colors. Flattening joins the path
//! to every leaf with dashes, so `{ primary: { light: "#fff" } }` becomes
//! `primary-light`. A `DEFAULT` key inside a branch names the branch itself:
//!
//! ```rust
//! use mode_aware_colors::{flatten, ColorNode};
//! use serde_json::json;
//!
//! let tree = ColorNode::try_from(json!({
//!     "gray": { "DEFAULT": "#888", "100": "#f5f5f5" },
//! })).unwrap();
//!
//! let flat = flatten(Some(&tree));
//! let names: Vec<_> = flat.keys().map(String::as_str).collect();
//! assert_eq!(names, ["gray", "gray-100"]);
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};

/// Reserved key that aliases its parent branch.
pub const DEFAULT_KEY: &str = "DEFAULT";

/// A node in a nested color palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ColorNode {
    /// A color value, e.g. `#ff6b35` or `rgb(0 0 0 / 50%)`.
    Leaf(String),
    /// Named children, in declaration order.
    Branch(IndexMap<String, ColorNode>),
}

impl ColorNode {
    /// Builds a branch from `(name, node)` pairs.
    pub fn branch<K, I>(children: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, ColorNode)>,
    {
        ColorNode::Branch(children.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Builds a leaf.
    pub fn leaf(value: impl Into<String>) -> Self {
        ColorNode::Leaf(value.into())
    }

    fn from_value(value: Value, path: &str) -> Result<Self> {
        match value {
            Value::String(s) => Ok(ColorNode::Leaf(s)),
            Value::Object(map) => {
                let mut children = IndexMap::with_capacity(map.len());
                for (key, child) in map {
                    let child_path = join_path(path, &key);
                    children.insert(key, ColorNode::from_value(child, &child_path)?);
                }
                Ok(ColorNode::Branch(children))
            }
            other => Err(Error::MalformedLeaf {
                path: path.to_string(),
                found: value_kind(&other),
            }),
        }
    }
}

impl TryFrom<Value> for ColorNode {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        ColorNode::from_value(value, "")
    }
}

impl From<&str> for ColorNode {
    fn from(value: &str) -> Self {
        ColorNode::Leaf(value.to_string())
    }
}

impl From<String> for ColorNode {
    fn from(value: String) -> Self {
        ColorNode::Leaf(value)
    }
}

impl<'de> Deserialize<'de> for ColorNode {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        ColorNode::try_from(value).map_err(serde::de::Error::custom)
    }
}

/// Flat mapping from dash-joined color names to leaf values, in depth-first
/// declaration order.
pub type FlatColors = IndexMap<String, String>;

/// Flattens a color tree into dash-joined names.
///
/// An absent tree flattens to nothing; a bare leaf flattens to a single
/// `DEFAULT` entry. Each branch is flattened on its own first, and a child
/// name that comes out as exactly `DEFAULT` takes the branch's name, so
/// `{ a: { DEFAULT: { DEFAULT: c } } }` yields `a` while
/// `{ a: { DEFAULT: { x: c } } }` yields `a-DEFAULT-x`. When two paths
/// collapse to the same name the later one wins, keeping the position of the
/// first.
pub fn flatten(node: Option<&ColorNode>) -> FlatColors {
    match node {
        None => FlatColors::new(),
        Some(ColorNode::Leaf(value)) => {
            let mut flat = FlatColors::new();
            flat.insert(DEFAULT_KEY.to_string(), value.clone());
            flat
        }
        Some(ColorNode::Branch(children)) => flatten_branch(children),
    }
}

fn flatten_branch(children: &IndexMap<String, ColorNode>) -> FlatColors {
    let mut flat = FlatColors::new();
    for (key, child) in children {
        match child {
            ColorNode::Leaf(value) => {
                flat.insert(key.clone(), value.clone());
            }
            ColorNode::Branch(grandchildren) => {
                for (name, value) in flatten_branch(grandchildren) {
                    let joined = if name == DEFAULT_KEY {
                        key.clone()
                    } else {
                        format!("{}-{}", key, name)
                    };
                    flat.insert(joined, value);
                }
            }
        }
    }
    flat
}

fn join_path(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else if key == DEFAULT_KEY {
        parent.to_string()
    } else {
        format!("{}-{}", parent, key)
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
