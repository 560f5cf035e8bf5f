//! md-to-godoc - Generate Go package documentation from a README.
//!
//! Reads a markdown file (usually `README.md`), renders it as a Go package
//! doc comment and writes `doc.go` next to it. Meant to be run from
//! `//go:generate md-to-godoc`.

mod convert;
mod error;
mod fs;
mod license;
mod output;
mod package;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use convert::ConvertArgs;
use output::Output;

/// md-to-godoc - Render a markdown README as a Go doc.go file.
#[derive(Parser)]
#[command(name = "md-to-godoc", version, about)]
struct Cli {
    #[command(flatten)]
    args: ConvertArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.args.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.args.execute(&output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output.error(&format!("Error: {err}"));
            ExitCode::FAILURE
        }
    }
}
