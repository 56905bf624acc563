//! Tagged value helpers.
//!
//! A tagged leaf is the `{"type": ..., "value": ...}` wrapper used to keep a
//! scalar's source-format type after a generic JSON decode. Arrays are
//! leaves too: an `array` leaf wraps a JSON array of further leaves.

use std::fmt;

use serde_json::{Map, Value};

use crate::classify::is_tagged_leaf;

/// Recognized `type` tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeafType {
    String,
    Integer,
    Float,
    Bool,
    Datetime,
    Array,
}

impl LeafType {
    pub const ALL: [LeafType; 6] = [
        LeafType::String,
        LeafType::Integer,
        LeafType::Float,
        LeafType::Bool,
        LeafType::Datetime,
        LeafType::Array,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            LeafType::String => "string",
            LeafType::Integer => "integer",
            LeafType::Float => "float",
            LeafType::Bool => "bool",
            LeafType::Datetime => "datetime",
            LeafType::Array => "array",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|ty| ty.as_str() == tag)
    }
}

impl fmt::Display for LeafType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Borrowed view of a tagged leaf's two entries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaggedLeaf<'a> {
    pub ty: &'a Value,
    pub value: &'a Value,
}

impl<'a> TaggedLeaf<'a> {
    /// Returns the leaf view when `table` is a tagged leaf.
    pub fn view(table: &'a Map<String, Value>) -> Option<Self> {
        if !is_tagged_leaf(table) {
            return None;
        }
        Some(Self {
            ty: table.get("type")?,
            value: table.get("value")?,
        })
    }
}

/// Builds `{"type": ty, "value": value}`.
pub fn tagged(ty: LeafType, value: Value) -> Value {
    let mut map = Map::with_capacity(2);
    map.insert("type".to_string(), Value::String(ty.as_str().to_string()));
    map.insert("value".to_string(), value);
    Value::Object(map)
}

/// Coarse JSON shape of a node, used to describe unexpected nodes in
/// diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Null,
    Bool,
    Number,
    String,
    Array,
    Table,
}

impl Shape {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Shape::Null,
            Value::Bool(_) => Shape::Bool,
            Value::Number(_) => Shape::Number,
            Value::String(_) => Shape::String,
            Value::Array(_) => Shape::Array,
            Value::Object(_) => Shape::Table,
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Shape::Null => "null",
            Shape::Bool => "a bool",
            Shape::Number => "a number",
            Shape::String => "a string",
            Shape::Array => "an array",
            Shape::Table => "a table",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn leaf_type_tags_round_trip() {
        for ty in LeafType::ALL {
            assert_eq!(LeafType::from_tag(ty.as_str()), Some(ty));
        }
        assert_eq!(LeafType::from_tag("datetime-local"), None);
        assert_eq!(LeafType::from_tag("Float"), None);
    }

    #[test]
    fn tagged_builds_two_key_table() {
        let v = tagged(LeafType::Integer, json!("42"));
        assert_eq!(v, json!({"type": "integer", "value": "42"}));
    }

    #[test]
    fn view_requires_exact_keys() {
        let leaf = json!({"type": "bool", "value": "true"});
        let view = TaggedLeaf::view(leaf.as_object().unwrap()).unwrap();
        assert_eq!(view.ty, &json!("bool"));
        assert_eq!(view.value, &json!("true"));

        let table = json!({"type": "bool", "value": "true", "x": 1});
        assert!(TaggedLeaf::view(table.as_object().unwrap()).is_none());
    }

    #[test]
    fn shape_names() {
        assert_eq!(Shape::of(&json!(null)).to_string(), "null");
        assert_eq!(Shape::of(&json!(true)).to_string(), "a bool");
        assert_eq!(Shape::of(&json!(1.5)).to_string(), "a number");
        assert_eq!(Shape::of(&json!("s")).to_string(), "a string");
        assert_eq!(Shape::of(&json!([])).to_string(), "an array");
        assert_eq!(Shape::of(&json!({})).to_string(), "a table");
    }
}
