//! Fixture and output decoders.
//!
//! Fixtures are read from disk; outputs of the system under test arrive as
//! captured stdout bytes. Both end up as tagged JSON trees.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde_json::Value;

use crate::error::RunnerError;
use crate::toml_tree::table_to_tagged;

/// Loads an expected JSON tree.
pub fn load_json(path: &Path) -> Result<Value, RunnerError> {
    let text = read_fixture(path, "JSON")?;
    serde_json::from_str(&text).map_err(|err| {
        RunnerError::Decode(format!(
            "Could not decode expected JSON output at {}: {err}",
            path.display()
        ))
    })
}

/// Loads an expected TOML document and converts it to a tagged tree.
pub fn load_toml(path: &Path) -> Result<Value, RunnerError> {
    let text = read_fixture(path, "TOML")?;
    let table: toml::Table = text.parse().map_err(|err| {
        RunnerError::Decode(format!(
            "Could not decode expected TOML output at {}: {err}",
            path.display()
        ))
    })?;
    Ok(table_to_tagged(&table))
}

/// Decodes the JSON a parser wrote to stdout.
pub fn decode_json_output(stdout: &[u8]) -> Result<Value, RunnerError> {
    serde_json::from_slice(stdout).map_err(|err| {
        RunnerError::Decode(format!("Could not decode JSON output from parser: {err}"))
    })
}

/// Decodes the TOML an encoder wrote to stdout.
pub fn decode_toml_output(stdout: &[u8]) -> Result<Value, RunnerError> {
    let text = std::str::from_utf8(stdout).map_err(|err| {
        RunnerError::Decode(format!("Could not decode TOML output from encoder: {err}"))
    })?;
    let table: toml::Table = text.parse().map_err(|err| {
        RunnerError::Decode(format!("Could not decode TOML output from encoder: {err}"))
    })?;
    Ok(table_to_tagged(&table))
}

fn read_fixture(path: &Path, format: &'static str) -> Result<String, RunnerError> {
    fs::read_to_string(path).map_err(|err| match err.kind() {
        ErrorKind::NotFound => RunnerError::NotFound {
            format,
            path: path.to_path_buf(),
        },
        _ => RunnerError::io(format!("reading {}", path.display()), err),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;

    #[test]
    fn load_json_fixture() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.json");
        fs::write(&path, r#"{"a": {"type": "string", "value": "x"}}"#).unwrap();
        assert_eq!(
            load_json(&path).unwrap(),
            json!({"a": {"type": "string", "value": "x"}})
        );
    }

    #[test]
    fn missing_fixture_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");
        let err = load_json(&path).unwrap_err();
        assert!(matches!(err, RunnerError::NotFound { format: "JSON", .. }));
        assert!(err.to_string().starts_with("Could not find expected JSON output at"));
    }

    #[test]
    fn broken_fixture_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "a = = 1").unwrap();
        let err = load_toml(&path).unwrap_err();
        assert!(err
            .to_string()
            .starts_with("Could not decode expected TOML output at"));
    }

    #[test]
    fn toml_fixture_is_tagged() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.toml");
        fs::write(&path, "answer = 42\n").unwrap();
        assert_eq!(
            load_toml(&path).unwrap(),
            json!({"answer": {"type": "integer", "value": "42"}})
        );
    }

    #[test]
    fn output_decoders() {
        assert_eq!(decode_json_output(b"{}").unwrap(), json!({}));
        assert!(decode_json_output(b"{")
            .unwrap_err()
            .to_string()
            .starts_with("Could not decode JSON output from parser"));
        assert_eq!(
            decode_toml_output(b"b = false").unwrap(),
            json!({"b": {"type": "bool", "value": "false"}})
        );
        assert!(decode_toml_output(&[0xff, 0xfe]).is_err());
    }
}
