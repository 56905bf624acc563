//! Structural comparison of an expected tree against a test tree.
//!
//! The expected side always decides which path a node pair takes; the test
//! side is only ever validated against it. Every comparator returns on the
//! first divergence.

use serde_json::{Map, Value};

use crate::error::Divergence;
use crate::path::KeyPath;
use crate::tagged::{LeafType, Shape, TaggedLeaf};

/// Compares two whole trees from the root.
pub fn compare(expected: &Value, test: &Value) -> Result<(), Divergence> {
    compare_at(expected, test, &KeyPath::root())
}

/// Dispatches a node pair on the shape of the expected node.
pub fn compare_at(expected: &Value, test: &Value, path: &KeyPath) -> Result<(), Divergence> {
    match expected {
        Value::Object(table) => compare_tables(table, test, path),
        Value::Array(_) => compare_arrays(expected, test, path),
        other => Err(Divergence::ExpectedMalformed {
            path: path.clone(),
            found: Shape::of(other),
        }),
    }
}

/// Compares a node pair whose expected side is a table: either two tagged
/// leaves, or two untagged tables with identical key sets.
pub fn compare_tables(
    expected: &Map<String, Value>,
    test: &Value,
    path: &KeyPath,
) -> Result<(), Divergence> {
    let Value::Object(test) = test else {
        return Err(Divergence::NotATable {
            path: path.clone(),
            found: Shape::of(test),
        });
    };

    match (TaggedLeaf::view(expected), TaggedLeaf::view(test)) {
        (Some(e), Some(t)) => return compare_leaves(e, t, path),
        (Some(_), None) => {
            return Err(Divergence::ExpectedValueGotTable { path: path.clone() })
        }
        (None, Some(_)) => {
            return Err(Divergence::ExpectedTableGotValue { path: path.clone() })
        }
        (None, None) => {}
    }

    if let Some(key) = expected.keys().find(|k| !test.contains_key(*k)) {
        return Err(Divergence::MissingInParserOutput {
            path: path.join(key),
        });
    }
    if let Some(key) = test.keys().find(|k| !expected.contains_key(*k)) {
        return Err(Divergence::MissingInExpected {
            path: path.join(key),
        });
    }

    for (key, e) in expected {
        // Key sets are equal at this point.
        if let Some(t) = test.get(key) {
            compare_at(e, t, &path.join(key))?;
        }
    }
    Ok(())
}

/// Compares two sequences element by element, in order.
///
/// Lengths are checked before any element is looked at. Elements do not
/// extend the key path.
pub fn compare_arrays(expected: &Value, test: &Value, path: &KeyPath) -> Result<(), Divergence> {
    let Value::Array(expected) = expected else {
        return Err(Divergence::ExpectedNotArray {
            path: path.clone(),
            found: Shape::of(expected),
        });
    };
    let Value::Array(test) = test else {
        return Err(Divergence::ParserNotArray {
            path: path.clone(),
            found: Shape::of(test),
        });
    };

    if expected.len() != test.len() {
        return Err(Divergence::LengthMismatch {
            path: path.clone(),
            expected: expected.len(),
            got: test.len(),
        });
    }
    for (e, t) in expected.iter().zip(test) {
        compare_at(e, t, path)?;
    }
    Ok(())
}

/// Compares two tagged leaves: type tag first, then value.
pub fn compare_leaves(
    expected: TaggedLeaf<'_>,
    test: TaggedLeaf<'_>,
    path: &KeyPath,
) -> Result<(), Divergence> {
    let Value::String(etype) = expected.ty else {
        return Err(Divergence::ExpectedTagNotString {
            path: path.clone(),
            found: Shape::of(expected.ty),
        });
    };
    let Value::String(ttype) = test.ty else {
        return Err(Divergence::ParserTagNotString {
            path: path.clone(),
            found: Shape::of(test.ty),
        });
    };
    if etype != ttype {
        return Err(Divergence::TypeMismatch {
            path: path.clone(),
            expected: etype.clone(),
            got: ttype.clone(),
        });
    }

    match LeafType::from_tag(etype) {
        Some(LeafType::Array) => compare_arrays(expected.value, test.value, path),
        Some(LeafType::Float) => {
            let Value::String(e) = expected.value else {
                return Err(Divergence::ExpectedFloatNotString {
                    path: path.clone(),
                    found: Shape::of(expected.value),
                });
            };
            let Value::String(t) = test.value else {
                return Err(Divergence::ParserFloatNotString {
                    path: path.clone(),
                    found: Shape::of(test.value),
                });
            };
            compare_floats(e, t, path)
        }
        _ => {
            if expected.value != test.value {
                let (expected, got) = literals(expected.value, test.value);
                return Err(Divergence::ValueMismatch {
                    path: path.clone(),
                    expected,
                    got,
                });
            }
            Ok(())
        }
    }
}

/// Compares two textual floats by parsed value, with no tolerance.
///
/// `1.0` and `1.00` are equal; `1.0` and `1.0000001` are not. NaN never
/// equals anything, itself included.
pub fn compare_floats(expected: &str, test: &str, path: &KeyPath) -> Result<(), Divergence> {
    let Some(e) = parse_float(expected) else {
        return Err(Divergence::ExpectedFloatUnreadable {
            path: path.clone(),
            text: expected.to_string(),
        });
    };
    let Some(t) = parse_float(test) else {
        return Err(Divergence::ParserFloatUnreadable {
            path: path.clone(),
            text: test.to_string(),
        });
    };

    if e == t {
        return Ok(());
    }
    Err(Divergence::ValueMismatch {
        path: path.clone(),
        expected: expected.to_string(),
        got: test.to_string(),
    })
}

/// Surrounding whitespace is not accepted.
fn parse_float(text: &str) -> Option<f64> {
    text.parse::<f64>().ok()
}

/// Renders two mismatched leaf values for a diagnostic. Two strings are shown
/// by their contents; otherwise both sides are shown as compact JSON so that
/// `"1"` and `1` stay distinguishable.
fn literals(expected: &Value, test: &Value) -> (String, String) {
    match (expected, test) {
        (Value::String(e), Value::String(t)) => (e.clone(), t.clone()),
        (e, t) => (e.to_string(), t.to_string()),
    }
}
