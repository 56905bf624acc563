//! Divergence diagnostics.

use thiserror::Error;

use crate::path::KeyPath;
use crate::tagged::Shape;

/// Which side of a comparison is to blame for a divergence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    /// The expected tree breaks the tagged value contract.
    Fixture,
    /// The tree produced by the system under test breaks the contract.
    Parser,
    /// Both trees are well formed but disagree.
    Mismatch,
}

/// First point at which two trees stop being equivalent.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum Divergence {
    #[error(
        "BUG in test case. Key '{path}' in expected output should be a table or an array of \
         tables, but it is {found}."
    )]
    ExpectedMalformed { path: KeyPath, found: Shape },

    #[error("Type mismatch for key '{path}'. Expected table but got {found}.")]
    NotATable { path: KeyPath, found: Shape },

    #[error("Key '{path}' is supposed to be a value, but the parser reports it as a table.")]
    ExpectedValueGotTable { path: KeyPath },

    #[error("Key '{path}' is supposed to be a table, but the parser reports it as a value.")]
    ExpectedTableGotValue { path: KeyPath },

    #[error("Could not find key '{path}' in parser output.")]
    MissingInParserOutput { path: KeyPath },

    #[error("Could not find key '{path}' in expected output.")]
    MissingInExpected { path: KeyPath },

    #[error("BUG in test case. 'value' for key '{path}' should be an array, but it is {found}.")]
    ExpectedNotArray { path: KeyPath, found: Shape },

    #[error(
        "Malformed parser output. 'value' for key '{path}' should be an array, but it is {found}."
    )]
    ParserNotArray { path: KeyPath, found: Shape },

    #[error(
        "Array lengths differ for key '{path}'. Expected a length of {expected} but got {got}."
    )]
    LengthMismatch {
        path: KeyPath,
        expected: usize,
        got: usize,
    },

    #[error("BUG in test case. 'type' for key '{path}' should be a string, but it is {found}.")]
    ExpectedTagNotString { path: KeyPath, found: Shape },

    #[error(
        "Malformed parser output. 'type' for key '{path}' should be a string, but it is {found}."
    )]
    ParserTagNotString { path: KeyPath, found: Shape },

    #[error("Type mismatch for key '{path}'. Expected {expected} but got {got}.")]
    TypeMismatch {
        path: KeyPath,
        expected: String,
        got: String,
    },

    #[error("BUG in test case. 'value' for key '{path}' should be a string, but it is {found}.")]
    ExpectedFloatNotString { path: KeyPath, found: Shape },

    #[error(
        "Malformed parser output. 'value' for key '{path}' should be a string, but it is {found}."
    )]
    ParserFloatNotString { path: KeyPath, found: Shape },

    #[error("BUG in test case. Could not read '{text}' as a float value for key '{path}'.")]
    ExpectedFloatUnreadable { path: KeyPath, text: String },

    #[error("Malformed parser output. Could not read '{text}' as a float value for key '{path}'.")]
    ParserFloatUnreadable { path: KeyPath, text: String },

    #[error(
        "Values for key '{path}' don't match. Expected a value of '{expected}' but got '{got}'."
    )]
    ValueMismatch {
        path: KeyPath,
        expected: String,
        got: String,
    },
}

impl Divergence {
    pub fn path(&self) -> &KeyPath {
        match self {
            Divergence::ExpectedMalformed { path, .. }
            | Divergence::NotATable { path, .. }
            | Divergence::ExpectedValueGotTable { path }
            | Divergence::ExpectedTableGotValue { path }
            | Divergence::MissingInParserOutput { path }
            | Divergence::MissingInExpected { path }
            | Divergence::ExpectedNotArray { path, .. }
            | Divergence::ParserNotArray { path, .. }
            | Divergence::LengthMismatch { path, .. }
            | Divergence::ExpectedTagNotString { path, .. }
            | Divergence::ParserTagNotString { path, .. }
            | Divergence::TypeMismatch { path, .. }
            | Divergence::ExpectedFloatNotString { path, .. }
            | Divergence::ParserFloatNotString { path, .. }
            | Divergence::ExpectedFloatUnreadable { path, .. }
            | Divergence::ParserFloatUnreadable { path, .. }
            | Divergence::ValueMismatch { path, .. } => path,
        }
    }

    pub fn fault(&self) -> Fault {
        match self {
            Divergence::ExpectedMalformed { .. }
            | Divergence::ExpectedNotArray { .. }
            | Divergence::ExpectedTagNotString { .. }
            | Divergence::ExpectedFloatNotString { .. }
            | Divergence::ExpectedFloatUnreadable { .. } => Fault::Fixture,
            Divergence::ParserNotArray { .. }
            | Divergence::ParserTagNotString { .. }
            | Divergence::ParserFloatNotString { .. }
            | Divergence::ParserFloatUnreadable { .. } => Fault::Parser,
            Divergence::NotATable { .. }
            | Divergence::ExpectedValueGotTable { .. }
            | Divergence::ExpectedTableGotValue { .. }
            | Divergence::MissingInParserOutput { .. }
            | Divergence::MissingInExpected { .. }
            | Divergence::LengthMismatch { .. }
            | Divergence::TypeMismatch { .. }
            | Divergence::ValueMismatch { .. } => Fault::Mismatch,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_path() {
        let err = Divergence::MissingInParserOutput {
            path: KeyPath::from("a.b"),
        };
        assert_eq!(err.to_string(), "Could not find key 'a.b' in parser output.");

        let err = Divergence::LengthMismatch {
            path: KeyPath::from("arr"),
            expected: 2,
            got: 3,
        };
        assert_eq!(
            err.to_string(),
            "Array lengths differ for key 'arr'. Expected a length of 2 but got 3."
        );
    }

    #[test]
    fn fault_attribution() {
        let path = KeyPath::root();
        let fixture = Divergence::ExpectedFloatUnreadable {
            path: path.clone(),
            text: "x".into(),
        };
        assert_eq!(fixture.fault(), Fault::Fixture);
        assert!(fixture.to_string().starts_with("BUG in test case."));

        let parser = Divergence::ParserNotArray {
            path: path.clone(),
            found: Shape::String,
        };
        assert_eq!(parser.fault(), Fault::Parser);
        assert!(parser.to_string().starts_with("Malformed parser output."));

        let mismatch = Divergence::TypeMismatch {
            path,
            expected: "integer".into(),
            got: "string".into(),
        };
        assert_eq!(mismatch.fault(), Fault::Mismatch);
    }
}
