//! Aggregated results of a suite run.

use std::fmt;

use golden_equal::{CaseReport, Verdict};
use serde::Serialize;

#[derive(Debug, Clone, Default)]
pub struct Summary {
    pub reports: Vec<CaseReport>,
    pub passed: usize,
    pub failed: usize,
    pub errored: usize,
}

impl Summary {
    pub fn push(&mut self, report: CaseReport) {
        match report.verdict {
            Verdict::Passed => self.passed += 1,
            Verdict::Failed { .. } => self.failed += 1,
            Verdict::Errored(_) => self.errored += 1,
        }
        self.reports.push(report);
    }

    pub fn is_success(&self) -> bool {
        self.failed == 0 && self.errored == 0
    }

    /// Machine-readable form of the run.
    pub fn to_json(&self) -> serde_json::Result<String> {
        let records: Vec<Record<'_>> = self.reports.iter().map(Record::from).collect();
        serde_json::to_string_pretty(&SummaryRecord {
            passed: self.passed,
            failed: self.failed,
            errored: self.errored,
            cases: records,
        })
    }
}

impl FromIterator<CaseReport> for Summary {
    fn from_iter<I: IntoIterator<Item = CaseReport>>(iter: I) -> Self {
        let mut summary = Summary::default();
        for report in iter {
            summary.push(report);
        }
        summary
    }
}

/// Prints every non-passing case, then a one-line tally.
impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for report in self.reports.iter().filter(|r| !r.verdict.is_passed()) {
            write!(f, "{report}\n\n")?;
        }
        write!(
            f,
            "{} passed, {} failed, {} errored",
            self.passed, self.failed, self.errored
        )
    }
}

#[derive(Serialize)]
struct SummaryRecord<'a> {
    passed: usize,
    failed: usize,
    errored: usize,
    cases: Vec<Record<'a>>,
}

#[derive(Serialize)]
struct Record<'a> {
    name: &'a str,
    expectation: String,
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    key: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'a str>,
}

impl<'a> From<&'a CaseReport> for Record<'a> {
    fn from(report: &'a CaseReport) -> Self {
        let (status, key, message) = match &report.verdict {
            Verdict::Passed => ("passed", None, None),
            Verdict::Failed { key, message } => {
                ("failed", Some(key.as_str()), Some(message.as_str()))
            }
            Verdict::Errored(message) => ("errored", None, Some(message.as_str())),
        };
        Self {
            name: &report.name,
            expectation: report.expectation.to_string(),
            status,
            key,
            message,
        }
    }
}
