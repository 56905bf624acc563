//! golden-runner - drives a parser or encoder under test through a golden
//! fixture suite and checks every output with [`golden_equal`].
//!
//! The system under test reads one document on stdin and writes its decoded
//! form on stdout, exiting non-zero when the input is rejected.

pub mod config;
pub mod error;
pub mod loader;
pub mod process;
pub mod suite;
pub mod summary;
pub mod toml_tree;

pub use config::{Cli, FileConfig, RunnerConfig};
pub use error::RunnerError;
pub use process::{ParserCommand, ParserOutput};
pub use suite::{Mode, Suite, TestCase};
pub use summary::Summary;
pub use toml_tree::{table_to_tagged, toml_to_tagged};

/// Discovers and runs the configured suite.
pub fn run(config: &RunnerConfig) -> Result<Summary, RunnerError> {
    let suite = Suite::new(config.suite.clone(), config.mode);
    let cases = suite.discover(config.filter.as_ref())?;
    Ok(suite.run_all(&config.parser, &cases))
}
