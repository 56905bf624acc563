//! golden-test CLI
//!
//! Exit status: 0 when every case passed, 1 when any case failed or errored,
//! 2 when the run could not start.

use std::io;

use clap::Parser;
use golden_runner::{run, Cli, RunnerConfig};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let exit_code = match RunnerConfig::from_cli(cli).and_then(|config| {
        let summary = run(&config)?;
        Ok((config.json, summary))
    }) {
        Ok((json, summary)) => {
            if json {
                match summary.to_json() {
                    Ok(text) => println!("{text}"),
                    Err(err) => {
                        eprintln!("error: {err}");
                        std::process::exit(2);
                    }
                }
            } else {
                println!("{summary}");
            }
            if summary.is_success() {
                0
            } else {
                1
            }
        }
        Err(err) => {
            eprintln!("error: {err}");
            2
        }
    };

    std::process::exit(exit_code);
}

fn init_logging(verbose: bool) {
    let default = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}
