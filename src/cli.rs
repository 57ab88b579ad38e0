use std::fmt::Write as _;
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{ArgAction, CommandFactory, Parser, ValueEnum};
use filemeta::MetadataRecord;

pub const BANNER_OPEN: &str = "----------METADATA----------";
pub const BANNER_CLOSE: &str = "----------------------------";

#[derive(Parser, Debug)]
#[command(name = "filemeta")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Identify a file's format from its magic bytes and print its header metadata", long_about = None)]
pub struct Cli {
    /// File to analyze
    pub path: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Condenses a clap usage error into a single diagnostic line.
pub fn usage_error_line(err: &clap::Error) -> String {
    let usage = Cli::command().render_usage().to_string();
    let reason = match err.kind() {
        ErrorKind::MissingRequiredArgument => "error: missing required argument <PATH>".to_string(),
        _ => err
            .render()
            .to_string()
            .lines()
            .next()
            .unwrap_or("error: invalid arguments")
            .trim_end_matches(':')
            .to_string(),
    };
    format!("{reason}; {}", usage.trim())
}

pub fn render(record: &MetadataRecord, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(record)),
        OutputFormat::Json => render_json(record),
    }
}

pub fn render_text(record: &MetadataRecord) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{BANNER_OPEN}");
    for (key, value) in record.iter() {
        let _ = writeln!(out, "{key} : {value}");
    }
    let _ = writeln!(out, "{BANNER_CLOSE}");
    out
}

pub fn render_json(record: &MetadataRecord) -> serde_json::Result<String> {
    let mut out = serde_json::to_string_pretty(record)?;
    out.push('\n');
    Ok(out)
}
