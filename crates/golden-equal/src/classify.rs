//! Tagged-leaf detection for decoded tables.

use serde_json::{Map, Value};

/// Returns `true` when `table` is a tagged leaf: it has exactly two entries
/// and their keys are `type` and `value`.
///
/// The contents of either entry are not inspected here. A table with the
/// right keys but a non-string `type` is still a leaf, and is rejected later
/// by the leaf comparator with a diagnostic attributed to the right side.
pub fn is_tagged_leaf(table: &Map<String, Value>) -> bool {
    table.len() == 2 && table.contains_key("type") && table.contains_key("value")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn table(v: Value) -> Map<String, Value> {
        match v {
            Value::Object(map) => map,
            _ => panic!("not a table"),
        }
    }

    #[test]
    fn two_tag_keys_is_leaf() {
        assert!(is_tagged_leaf(&table(json!({"type": "string", "value": "x"}))));
        assert!(is_tagged_leaf(&table(json!({"value": "x", "type": "string"}))));
    }

    #[test]
    fn tag_value_contents_are_not_inspected() {
        assert!(is_tagged_leaf(&table(json!({"type": 7, "value": null}))));
        assert!(is_tagged_leaf(&table(json!({"type": "array", "value": []}))));
    }

    #[test]
    fn extra_key_is_table() {
        assert!(!is_tagged_leaf(&table(
            json!({"type": "string", "value": "x", "comment": "y"})
        )));
    }

    #[test]
    fn missing_key_is_table() {
        assert!(!is_tagged_leaf(&table(json!({"type": "string"}))));
        assert!(!is_tagged_leaf(&table(json!({"value": "x"}))));
        assert!(!is_tagged_leaf(&table(json!({}))));
    }

    #[test]
    fn two_other_keys_is_table() {
        assert!(!is_tagged_leaf(&table(json!({"type": "string", "val": "x"}))));
        assert!(!is_tagged_leaf(&table(json!({"kind": "string", "value": "x"}))));
    }
}
