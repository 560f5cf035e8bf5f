//! CLI error types.

use std::path::PathBuf;

use mdgodoc_config::ConfigError;
use mdgodoc_renderer::RenderError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Render(#[from] RenderError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("could not read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid package name {name:?}: {reason}")]
    PackageName { name: String, reason: &'static str },

    #[error("could not infer package name for {dir}: {message}")]
    PackageInference { dir: String, message: String },
}
