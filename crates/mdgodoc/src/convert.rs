//! Markdown to `doc.go` conversion command.

use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use clap::Args;
use mdgodoc_config::{CliSettings, Config};
use mdgodoc_renderer::GodocRenderer;

use crate::error::CliError;
use crate::fs::atomic_write;
use crate::license::read_license_header;
use crate::output::Output;
use crate::package::resolve_package;

/// Arguments for the conversion.
#[derive(Args)]
pub(crate) struct ConvertArgs {
    /// Path to configuration file (default: auto-discover md-to-godoc.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Markdown file to read (default: README.md).
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// File to write (default: doc.go next to the input).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write to stdout instead of a file.
    #[arg(long)]
    stdout: bool,

    /// Read from stdin instead of a file.
    #[arg(long)]
    stdin: bool,

    /// Package name (default: inferred from the input's directory).
    #[arg(long, env = "MD_TO_GODOC_PKG")]
    pkg: Option<String>,

    /// Add the license header (default: enabled).
    #[arg(long)]
    license: Option<bool>,

    /// Do not add the license header.
    #[arg(long, conflicts_with = "license")]
    no_license: bool,

    /// File to read the license header from (default: LICENSE.txt).
    #[arg(long)]
    license_file: Option<PathBuf>,

    /// Render badges (links whose only content is an image).
    #[arg(long)]
    badges: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl ConvertArgs {
    /// Execute the conversion.
    ///
    /// The document is rendered completely before anything is written, and
    /// the file is replaced in one rename, so a failed run leaves an existing
    /// `doc.go` untouched.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let license_enabled = self.resolve_license_enabled();

        let cli_settings = CliSettings {
            input: self.input,
            output: self.output,
            package: self.pkg,
            license_enabled,
            license_file: self.license_file,
            badges: self.badges.then_some(true),
        };

        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        if let Some(path) = &config.config_path {
            tracing::info!(path = %path.display(), "Loaded configuration");
        }

        let markdown = if self.stdin {
            read_stdin()?
        } else {
            read_input(&config.docs_resolved.input)?
        };

        let package = resolve_package(&config)?;
        let renderer = GodocRenderer::new(package, !config.render.badges);
        let body = renderer.render_markdown(&markdown)?;

        let mut document = read_license_header(&config.license_resolved)?
            .map(String::into_bytes)
            .unwrap_or_default();
        document.extend_from_slice(&body);

        if self.stdout {
            return write_stdout(&document);
        }

        let path = config.docs_resolved.output_path();
        atomic_write(&path, &document).map_err(|source| CliError::Write {
            path: path.clone(),
            source,
        })?;
        output.success(&format!("Wrote {}", path.display()));
        Ok(())
    }

    /// Resolve `license_enabled` from --license/--no-license flags.
    fn resolve_license_enabled(&self) -> Option<bool> {
        self.no_license.then_some(false).or(self.license)
    }
}

fn read_input(path: &Path) -> Result<String, CliError> {
    tracing::info!(path = %path.display(), "Reading markdown");
    let bytes = std::fs::read(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn read_stdin() -> Result<String, CliError> {
    tracing::info!("Reading markdown from stdin");
    let mut bytes = Vec::new();
    io::stdin().lock().read_to_end(&mut bytes)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn write_stdout(document: &[u8]) -> Result<(), CliError> {
    let mut handle = io::stdout().lock();
    match handle.write_all(document).and_then(|()| handle.flush()) {
        Err(err) if !should_ignore_pipe_error(&err) => Err(err.into()),
        _ => Ok(()),
    }
}

fn should_ignore_pipe_error(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        io::ErrorKind::BrokenPipe | io::ErrorKind::WouldBlock
    )
}
