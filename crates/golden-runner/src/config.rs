//! Command-line flags, optional config file, and their resolution.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use regex::Regex;
use serde::Deserialize;

use crate::error::RunnerError;
use crate::process::ParserCommand;
use crate::suite::Mode;

const DEFAULT_SUITE: &str = "tests";

#[derive(Debug, Parser)]
#[command(name = "golden-test")]
#[command(version)]
#[command(about = "Check a parser or encoder against a golden fixture suite", long_about = None)]
pub struct Cli {
    /// Suite directory containing valid/ and invalid/
    #[arg(long, value_name = "DIR")]
    pub suite: Option<PathBuf>,

    /// Test an encoder (tagged JSON in, TOML out) instead of a decoder
    #[arg(long)]
    pub encoder: bool,

    /// Test a decoder, overriding `encoder = true` in the config file
    #[arg(long, conflicts_with = "encoder")]
    pub decoder: bool,

    /// Only run cases whose name matches this regular expression
    #[arg(long, value_name = "REGEX")]
    pub run: Option<String>,

    /// TOML config file providing defaults for the flags above
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print the summary as JSON
    #[arg(long)]
    pub json: bool,

    /// Log suite progress to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Parser command and its arguments
    #[arg(last = true, value_name = "PARSER")]
    pub parser: Vec<String>,
}

/// Contents of a config file. Every key is optional.
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub parser: Option<Vec<String>>,
    pub suite: Option<PathBuf>,
    pub encoder: Option<bool>,
    pub run: Option<String>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self, RunnerError> {
        let text = fs::read_to_string(path)
            .map_err(|err| RunnerError::io(format!("reading {}", path.display()), err))?;
        toml::from_str(&text)
            .map_err(|err| RunnerError::Config(format!("{}: {err}", path.display())))
    }
}

/// Fully resolved settings for one run.
#[derive(Debug)]
pub struct RunnerConfig {
    pub parser: ParserCommand,
    pub suite: PathBuf,
    pub mode: Mode,
    pub filter: Option<Regex>,
    pub json: bool,
}

impl RunnerConfig {
    /// Merges flags over the config file named by `--config`, if any.
    pub fn from_cli(cli: Cli) -> Result<Self, RunnerError> {
        let file = match &cli.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };
        Self::merge(cli, file)
    }

    /// Flags win over file values; the file wins over built-in defaults.
    pub fn merge(cli: Cli, file: FileConfig) -> Result<Self, RunnerError> {
        let argv = if cli.parser.is_empty() {
            file.parser.unwrap_or_default()
        } else {
            cli.parser
        };
        if argv.is_empty() {
            return Err(RunnerError::Config(
                "no parser command given (pass it after `--` or set `parser` in the config file)"
                    .to_string(),
            ));
        }

        let mode = if cli.encoder {
            Mode::Encoder
        } else if cli.decoder {
            Mode::Decoder
        } else if file.encoder.unwrap_or(false) {
            Mode::Encoder
        } else {
            Mode::Decoder
        };
        let filter = cli
            .run
            .or(file.run)
            .map(|pattern| Regex::new(&pattern))
            .transpose()?;

        Ok(Self {
            parser: ParserCommand::from_argv(&argv)?,
            suite: cli
                .suite
                .or(file.suite)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_SUITE)),
            mode,
            filter,
            json: cli.json,
        })
    }
}
