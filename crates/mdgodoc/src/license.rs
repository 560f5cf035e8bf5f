//! License header written above the package comment.

use mdgodoc_config::LicenseConfig;

use crate::error::CliError;

/// Read the license header, if enabled and the license file exists.
pub(crate) fn read_license_header(config: &LicenseConfig) -> Result<Option<String>, CliError> {
    if !config.enabled {
        return Ok(None);
    }
    if !config.file.exists() {
        tracing::debug!(path = %config.file.display(), "No license file, skipping header");
        return Ok(None);
    }

    let text = std::fs::read_to_string(&config.file).map_err(|source| CliError::Read {
        path: config.file.clone(),
        source,
    })?;
    tracing::info!(path = %config.file.display(), "Adding license header");
    Ok(Some(license_header(&text)))
}

/// Turn license text into line comments followed by a blank line.
///
/// Empty lines become a bare `//` so the header has no trailing whitespace.
pub(crate) fn license_header(text: &str) -> String {
    let mut header = String::with_capacity(text.len() + 64);
    for line in text.lines() {
        header.push_str("//");
        if !line.is_empty() {
            header.push(' ');
            header.push_str(line);
        }
        header.push('\n');
    }
    header.push('\n');
    header
}
