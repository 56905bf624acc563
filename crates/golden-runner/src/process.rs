//! Invocation of the parser or encoder under test.

use std::fs::File;
use std::path::Path;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::error::RunnerError;

/// Captured result of one run of the system under test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserOutput {
    pub success: bool,
    pub code: Option<i32>,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl ParserOutput {
    pub fn stdout_text(&self) -> String {
        String::from_utf8_lossy(&self.stdout).into_owned()
    }

    pub fn stderr_text(&self) -> String {
        String::from_utf8_lossy(&self.stderr).into_owned()
    }
}

/// Program plus leading arguments used to run the system under test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserCommand {
    program: String,
    args: Vec<String>,
}

impl ParserCommand {
    /// Builds a command from `argv`; the first element is the program.
    pub fn from_argv(argv: &[String]) -> Result<Self, RunnerError> {
        let (program, args) = argv
            .split_first()
            .ok_or_else(|| RunnerError::Config("no parser command given".to_string()))?;
        Ok(Self {
            program: program.clone(),
            args: args.to_vec(),
        })
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Runs the command with `input` on stdin and captures both streams.
    ///
    /// A non-zero exit is reported in the returned output, not as an error.
    pub fn run(&self, input: &Path) -> Result<ParserOutput, RunnerError> {
        let stdin = File::open(input)
            .map_err(|err| RunnerError::io(format!("opening {}", input.display()), err))?;

        debug!(program = %self.program, input = %input.display(), "running parser");
        let output = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::from(stdin))
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|source| RunnerError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        debug!(
            program = %self.program,
            status = ?output.status.code(),
            stdout_len = output.stdout.len(),
            stderr_len = output.stderr.len(),
            "parser exited"
        );
        Ok(ParserOutput {
            success: output.status.success(),
            code: output.status.code(),
            stdout: output.stdout,
            stderr: output.stderr,
        })
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::fs;

    fn argv(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_argv_is_config_error() {
        assert!(matches!(
            ParserCommand::from_argv(&[]),
            Err(RunnerError::Config(_))
        ));
    }

    #[test]
    fn captures_stdout_from_stdin() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.toml");
        fs::write(&input, "hello").unwrap();

        let cmd = ParserCommand::from_argv(&argv(&["cat"])).unwrap();
        let out = cmd.run(&input).unwrap();
        assert!(out.success);
        assert_eq!(out.stdout_text(), "hello");
        assert!(out.stderr.is_empty());
    }

    #[test]
    fn non_zero_exit_is_data() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.toml");
        fs::write(&input, "").unwrap();

        let cmd = ParserCommand::from_argv(&argv(&["sh", "-c", "echo bad >&2; exit 3"])).unwrap();
        let out = cmd.run(&input).unwrap();
        assert!(!out.success);
        assert_eq!(out.code, Some(3));
        assert_eq!(out.stderr_text(), "bad\n");
    }

    #[test]
    fn missing_program_is_spawn_error() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.toml");
        fs::write(&input, "").unwrap();

        let argv = argv(&["definitely-not-a-real-parser-binary"]);
        let cmd = ParserCommand::from_argv(&argv).unwrap();
        assert!(matches!(cmd.run(&input), Err(RunnerError::Spawn { .. })));
    }
}
