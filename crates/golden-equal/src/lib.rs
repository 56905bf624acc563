//! golden-equal - structural equivalence for tagged JSON value trees.
//!
//! A data-format parser under test emits its decoded document as a JSON tree
//! in which every scalar is wrapped as `{"type": ..., "value": ...}` so that
//! types a plain JSON tree would collapse (strings, datetimes, integers) stay
//! distinguishable. This crate compares that tree against a hand-authored
//! golden fixture and reports the first divergence with a dotted key path.
//!
//! ```
//! use golden_equal::{compare, Fault};
//! use serde_json::json;
//!
//! let expected = json!({"a": {"type": "integer", "value": "1"}});
//! let test = json!({"a": {"type": "integer", "value": "2"}});
//!
//! let err = compare(&expected, &test).unwrap_err();
//! assert_eq!(err.path().as_str(), "a");
//! assert_eq!(err.fault(), Fault::Mismatch);
//! ```

mod classify;
mod compare;
mod error;
mod path;
mod report;
mod tagged;

pub use classify::is_tagged_leaf;
pub use compare::{
    compare, compare_arrays, compare_at, compare_floats, compare_leaves, compare_tables,
};
pub use error::{Divergence, Fault};
pub use path::KeyPath;
pub use report::{compare_case, CaseReport, Expectation, Verdict};
pub use tagged::{tagged, LeafType, Shape, TaggedLeaf};
