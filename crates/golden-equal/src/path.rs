//! Dotted key paths into a value tree.

use std::fmt;

/// Dotted path of table keys from the root to the node being compared.
///
/// The root path is empty. [`KeyPath::join`] never mutates the receiver, so
/// sibling branches of a recursive walk each extend their own copy.
///
/// Examples:
/// - `root()` -> `""`
/// - `root().join("a").join("b")` -> `"a.b"`
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct KeyPath(String);

impl KeyPath {
    pub fn root() -> Self {
        Self(String::new())
    }

    /// Returns a new path with `key` appended.
    pub fn join(&self, key: &str) -> Self {
        if self.0.is_empty() {
            return Self(key.to_string());
        }
        let mut joined = String::with_capacity(self.0.len() + key.len() + 1);
        joined.push_str(&self.0);
        joined.push('.');
        joined.push_str(key);
        Self(joined)
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for KeyPath {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_is_empty() {
        let root = KeyPath::root();
        assert!(root.is_root());
        assert_eq!(root.as_str(), "");
        assert_eq!(root.to_string(), "");
    }

    #[test]
    fn join_matrix() {
        let root = KeyPath::root();
        assert_eq!(root.join("a").as_str(), "a");
        assert_eq!(root.join("a").join("b").join("c").as_str(), "a.b.c");
        // Keys are not escaped; dotted keys stay readable as written.
        assert_eq!(root.join("a.b").join("c").as_str(), "a.b.c");
        assert_eq!(root.join("").join("x").as_str(), "x");
    }

    #[test]
    fn join_leaves_receiver_untouched() {
        let parent = KeyPath::root().join("table");
        let left = parent.join("left");
        let right = parent.join("right");
        assert_eq!(parent.as_str(), "table");
        assert_eq!(left.as_str(), "table.left");
        assert_eq!(right.as_str(), "table.right");
    }
}
