//! Environment variable and home directory expansion for config values.

use std::env::VarError;

use crate::ConfigError;

/// Expand `${VAR}` and `${VAR:-default}` references.
///
/// Unset variables without a default are an error naming `field`. Strings
/// without `${` are returned as-is, so a bare `$` never triggers a lookup.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(value, |var| std::env::var(var).map(Some))
        .map(std::borrow::Cow::into_owned)
        .map_err(|e: shellexpand::LookupError<VarError>| ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{}}} not set", e.var_name),
        })
}

/// Expand a path value: environment references first, then a leading `~`.
pub(crate) fn expand_path(value: &str, field: &str) -> Result<String, ConfigError> {
    let expanded = expand_env(value, field)?;
    Ok(shellexpand::tilde(&expanded).into_owned())
}
