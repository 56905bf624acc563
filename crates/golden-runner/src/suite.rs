//! Test-suite layout and case execution.
//!
//! A suite directory holds `valid/` and `invalid/` subdirectories. In decoder
//! mode each valid case is `<name>.toml` (fed to the parser) next to
//! `<name>.json` (the golden tagged tree). Encoder mode swaps the two.

use std::fs;
use std::path::{Path, PathBuf};

use golden_equal::{compare, CaseReport, Expectation};
use regex::Regex;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::error::RunnerError;
use crate::loader::{decode_json_output, decode_toml_output, load_json, load_toml};
use crate::process::ParserCommand;
use crate::summary::Summary;

/// Direction of the system under test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// TOML in, tagged JSON out.
    #[default]
    Decoder,
    /// Tagged JSON in, TOML out.
    Encoder,
}

impl Mode {
    pub fn input_extension(self) -> &'static str {
        match self {
            Mode::Decoder => "toml",
            Mode::Encoder => "json",
        }
    }

    pub fn gold_extension(self) -> &'static str {
        match self {
            Mode::Decoder => "json",
            Mode::Encoder => "toml",
        }
    }

    fn load_gold(self, path: &Path) -> Result<Value, RunnerError> {
        match self {
            Mode::Decoder => load_json(path),
            Mode::Encoder => load_toml(path),
        }
    }

    fn decode_output(self, stdout: &[u8]) -> Result<Value, RunnerError> {
        match self {
            Mode::Decoder => decode_json_output(stdout),
            Mode::Encoder => decode_toml_output(stdout),
        }
    }
}

/// One discovered case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    pub name: String,
    pub expectation: Expectation,
    pub input: PathBuf,
}

#[derive(Debug, Clone)]
pub struct Suite {
    root: PathBuf,
    mode: Mode,
}

impl Suite {
    pub fn new(root: impl Into<PathBuf>, mode: Mode) -> Self {
        Self {
            root: root.into(),
            mode,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn valid_dir(&self) -> PathBuf {
        self.root.join("valid")
    }

    pub fn invalid_dir(&self) -> PathBuf {
        self.root.join("invalid")
    }

    /// Path of the golden file for a valid case.
    pub fn gold_path(&self, name: &str) -> PathBuf {
        self.valid_dir()
            .join(format!("{name}.{}", self.mode.gold_extension()))
    }

    /// Lists valid then invalid cases, each group sorted by name.
    ///
    /// A missing `valid/` or `invalid/` directory contributes no cases.
    pub fn discover(&self, filter: Option<&Regex>) -> Result<Vec<TestCase>, RunnerError> {
        let mut cases = Vec::new();
        for (dir, expectation) in [
            (self.valid_dir(), Expectation::Valid),
            (self.invalid_dir(), Expectation::Invalid),
        ] {
            let mut found = self.list_inputs(&dir, expectation)?;
            if let Some(filter) = filter {
                found.retain(|case| filter.is_match(&case.name));
            }
            found.sort_by(|a, b| a.name.cmp(&b.name));
            cases.extend(found);
        }
        info!(
            root = %self.root.display(),
            cases = cases.len(),
            "discovered test cases"
        );
        Ok(cases)
    }

    fn list_inputs(
        &self,
        dir: &Path,
        expectation: Expectation,
    ) -> Result<Vec<TestCase>, RunnerError> {
        if !dir.is_dir() {
            debug!(dir = %dir.display(), "suite directory missing");
            return Ok(Vec::new());
        }
        let entries = fs::read_dir(dir)
            .map_err(|err| RunnerError::io(format!("listing {}", dir.display()), err))?;

        let mut cases = Vec::new();
        for entry in entries {
            let path = entry
                .map_err(|err| RunnerError::io(format!("listing {}", dir.display()), err))?
                .path();
            if path.extension().and_then(|e| e.to_str()) != Some(self.mode.input_extension()) {
                continue;
            }
            let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            cases.push(TestCase {
                name: name.to_string(),
                expectation,
                input: path.clone(),
            });
        }
        Ok(cases)
    }

    pub fn run(&self, parser: &ParserCommand, case: &TestCase) -> CaseReport {
        debug!(name = %case.name, expectation = %case.expectation, "running case");
        let report = match case.expectation {
            Expectation::Valid => self.run_valid(parser, case),
            Expectation::Invalid => self.run_invalid(parser, case),
        };
        if report.verdict.is_errored() {
            warn!(name = %case.name, "case errored");
        }
        report
    }

    /// An invalid case passes when the system under test exits non-zero.
    pub fn run_invalid(&self, parser: &ParserCommand, case: &TestCase) -> CaseReport {
        let name = case.name.as_str();
        match parser.run(&case.input) {
            Err(err) => CaseReport::errored(name, Expectation::Invalid, err.to_string()),
            Ok(out) if !out.success => CaseReport::passed(name, Expectation::Invalid),
            Ok(_) => CaseReport::failed(
                name,
                Expectation::Invalid,
                "Expected an error, but no error was reported.",
            ),
        }
    }

    /// A valid case passes when the decoded output matches the golden file.
    pub fn run_valid(&self, parser: &ParserCommand, case: &TestCase) -> CaseReport {
        let name = case.name.as_str();
        let out = match parser.run(&case.input) {
            Ok(out) => out,
            Err(err) => return CaseReport::errored(name, Expectation::Valid, err.to_string()),
        };

        if !out.success {
            if !out.stderr.is_empty() {
                return CaseReport::failed(name, Expectation::Valid, out.stderr_text());
            }
            if !out.stdout.is_empty() {
                return CaseReport::failed(name, Expectation::Valid, out.stdout_text());
            }
            let status = match out.code {
                Some(code) => format!("exit status {code}"),
                None => "terminated by signal".to_string(),
            };
            return CaseReport::errored(
                name,
                Expectation::Valid,
                format!("{} failed with {status} and no output.", parser.program()),
            );
        }
        if out.stdout.is_empty() {
            return CaseReport::errored(
                name,
                Expectation::Valid,
                "Parser does not satisfy interface. stdout is empty, but the process \
                 exited successfully.",
            );
        }

        let expected = match self.mode.load_gold(&self.gold_path(name)) {
            Ok(v) => v,
            Err(err) => return CaseReport::errored(name, Expectation::Valid, err.to_string()),
        };
        let test = match self.mode.decode_output(&out.stdout) {
            Ok(v) => v,
            Err(err) => return CaseReport::errored(name, Expectation::Valid, err.to_string()),
        };
        CaseReport::from_comparison(name, Expectation::Valid, compare(&expected, &test))
    }

    /// Runs every case in order and tallies the verdicts.
    pub fn run_all(&self, parser: &ParserCommand, cases: &[TestCase]) -> Summary {
        let summary: Summary = cases.iter().map(|case| self.run(parser, case)).collect();
        info!(
            passed = summary.passed,
            failed = summary.failed,
            errored = summary.errored,
            "suite finished"
        );
        summary
    }
}
