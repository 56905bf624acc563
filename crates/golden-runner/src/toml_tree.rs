//! Conversion of decoded TOML documents into tagged JSON trees.
//!
//! Both sides of an encoder test are TOML, so both go through this
//! conversion and meet in the same comparator as decoder tests.

use golden_equal::{tagged, LeafType};
use serde_json::{Map, Value};

/// Converts a TOML value into its tagged JSON form.
///
/// Arrays made only of tables stay plain JSON arrays of tables; every other
/// array becomes an `array` leaf.
pub fn toml_to_tagged(value: &toml::Value) -> Value {
    match value {
        toml::Value::String(s) => tagged(LeafType::String, Value::String(s.clone())),
        toml::Value::Integer(i) => tagged(LeafType::Integer, Value::String(i.to_string())),
        toml::Value::Float(f) => tagged(LeafType::Float, Value::String(float_text(*f))),
        toml::Value::Boolean(b) => tagged(LeafType::Bool, Value::String(b.to_string())),
        toml::Value::Datetime(dt) => tagged(LeafType::Datetime, Value::String(dt.to_string())),
        toml::Value::Array(items) => {
            let converted: Vec<Value> = items.iter().map(toml_to_tagged).collect();
            if !items.is_empty() && items.iter().all(toml::Value::is_table) {
                Value::Array(converted)
            } else {
                tagged(LeafType::Array, Value::Array(converted))
            }
        }
        toml::Value::Table(table) => table_to_tagged(table),
    }
}

/// Converts a whole TOML document (a root table).
pub fn table_to_tagged(table: &toml::Table) -> Value {
    let map: Map<String, Value> = table
        .iter()
        .map(|(k, v)| (k.clone(), toml_to_tagged(v)))
        .collect();
    Value::Object(map)
}

fn float_text(f: f64) -> String {
    if f.is_nan() {
        "nan".to_string()
    } else if f == f64::INFINITY {
        "inf".to_string()
    } else if f == f64::NEG_INFINITY {
        "-inf".to_string()
    } else {
        format!("{f:?}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn convert(src: &str) -> Value {
        let table: toml::Table = src.parse().unwrap();
        table_to_tagged(&table)
    }

    #[test]
    fn scalars_become_leaves() {
        let v = convert(
            r#"
            s = "x"
            i = -7
            f = 2.5
            b = true
            d = 1979-05-27T07:32:00Z
            "#,
        );
        assert_eq!(
            v,
            json!({
                "s": {"type": "string", "value": "x"},
                "i": {"type": "integer", "value": "-7"},
                "f": {"type": "float", "value": "2.5"},
                "b": {"type": "bool", "value": "true"},
                "d": {"type": "datetime", "value": "1979-05-27T07:32:00Z"},
            })
        );
    }

    #[test]
    fn special_floats_spelled_out() {
        let v = convert("a = nan\nb = inf\nc = -inf\nd = 1.0");
        assert_eq!(v["a"]["value"], json!("nan"));
        assert_eq!(v["b"]["value"], json!("inf"));
        assert_eq!(v["c"]["value"], json!("-inf"));
        assert_eq!(v["d"]["value"], json!("1.0"));
    }

    #[test]
    fn arrays_of_values_are_leaves() {
        let v = convert("a = [1, [\"x\"]]\ne = []");
        assert_eq!(
            v,
            json!({
                "a": {"type": "array", "value": [
                    {"type": "integer", "value": "1"},
                    {"type": "array", "value": [{"type": "string", "value": "x"}]},
                ]},
                "e": {"type": "array", "value": []},
            })
        );
    }

    #[test]
    fn arrays_of_tables_stay_plain() {
        let v = convert("[[p]]\nn = 1\n[[p]]\nn = 2\n[t]\nk = \"v\"");
        assert_eq!(
            v,
            json!({
                "p": [
                    {"n": {"type": "integer", "value": "1"}},
                    {"n": {"type": "integer", "value": "2"}},
                ],
                "t": {"k": {"type": "string", "value": "v"}},
            })
        );
    }
}
