//! Per-case verdicts and their text rendering.

use std::fmt;

use serde_json::Value;

use crate::compare::compare;
use crate::error::Divergence;
use crate::path::KeyPath;

/// Whether a test case's input is supposed to be accepted by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Expectation {
    Valid,
    Invalid,
}

impl fmt::Display for Expectation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Expectation::Valid => "valid",
            Expectation::Invalid => "invalid",
        })
    }
}

/// Outcome of one test case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Passed,
    /// The system under test produced the wrong answer.
    Failed { key: KeyPath, message: String },
    /// The case could not be run at all.
    Errored(String),
}

impl Verdict {
    pub fn is_passed(&self) -> bool {
        matches!(self, Self::Passed)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    pub fn is_errored(&self) -> bool {
        matches!(self, Self::Errored(_))
    }
}

impl From<Divergence> for Verdict {
    fn from(err: Divergence) -> Self {
        Verdict::Failed {
            key: err.path().clone(),
            message: err.to_string(),
        }
    }
}

/// Named verdict for one test case, rendered as:
///
/// ```text
/// Test: <name> (<valid|invalid>)
///
/// PASSED.
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseReport {
    pub name: String,
    pub expectation: Expectation,
    pub verdict: Verdict,
}

impl CaseReport {
    pub fn new(name: impl Into<String>, expectation: Expectation, verdict: Verdict) -> Self {
        Self {
            name: name.into(),
            expectation,
            verdict,
        }
    }

    pub fn passed(name: impl Into<String>, expectation: Expectation) -> Self {
        Self::new(name, expectation, Verdict::Passed)
    }

    /// Failure not tied to a key, e.g. an invalid input that was accepted.
    pub fn failed(
        name: impl Into<String>,
        expectation: Expectation,
        message: impl Into<String>,
    ) -> Self {
        Self::new(
            name,
            expectation,
            Verdict::Failed {
                key: KeyPath::root(),
                message: message.into(),
            },
        )
    }

    pub fn errored(
        name: impl Into<String>,
        expectation: Expectation,
        message: impl Into<String>,
    ) -> Self {
        Self::new(name, expectation, Verdict::Errored(message.into()))
    }

    pub fn from_comparison(
        name: impl Into<String>,
        expectation: Expectation,
        outcome: Result<(), Divergence>,
    ) -> Self {
        let verdict = match outcome {
            Ok(()) => Verdict::Passed,
            Err(err) => err.into(),
        };
        Self::new(name, expectation, verdict)
    }
}

impl fmt::Display for CaseReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Test: {} ({})\n\n", self.name, self.expectation)?;
        match &self.verdict {
            Verdict::Passed => f.write_str("PASSED."),
            Verdict::Failed { message, .. } => f.write_str(message),
            Verdict::Errored(message) => write!(f, "Error running test: {message}"),
        }
    }
}

/// Compares the decoded output of a valid case against its fixture.
pub fn compare_case(name: impl Into<String>, expected: &Value, test: &Value) -> CaseReport {
    CaseReport::from_comparison(name, Expectation::Valid, compare(expected, test))
}
