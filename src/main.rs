mod cli;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use filemeta::analyze_file;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if err.use_stderr() => {
            eprintln!("{}", cli::usage_error_line(&err));
            return ExitCode::FAILURE;
        }
        Err(err) => {
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
    };

    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Analyzes and renders before anything reaches stdout, so a failure
/// prints no partial metadata.
fn run(cli: &Cli) -> Result<String> {
    let record = match analyze_file(&cli.path) {
        Ok(record) => record,
        Err(err) if err.is_not_found() => return Err(err.into()),
        Err(err) => {
            return Err(err).with_context(|| format!("failed to analyze {}", cli.path.display()));
        }
    };

    cli::render(&record, cli.format).context("failed to render metadata")
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
