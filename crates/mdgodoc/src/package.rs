//! Go package name resolution.

use std::path::{Component, Path};
use std::process::Command;

use mdgodoc_config::Config;

use crate::error::CliError;

/// Go keywords, which are never valid package names.
const GO_KEYWORDS: [&str; 25] = [
    "break",
    "case",
    "chan",
    "const",
    "continue",
    "default",
    "defer",
    "else",
    "fallthrough",
    "for",
    "func",
    "go",
    "goto",
    "if",
    "import",
    "interface",
    "map",
    "package",
    "range",
    "return",
    "select",
    "struct",
    "switch",
    "type",
    "var",
];

/// Resolve the package name: the configured one, else ask the Go tool
/// about the input's directory.
pub(crate) fn resolve_package(config: &Config) -> Result<String, CliError> {
    let name = match &config.package.name {
        Some(name) => name.clone(),
        None => infer_package(&config.package.go_command, &config.docs_resolved.input)?,
    };
    validate_package_name(&name)?;
    Ok(name)
}

/// Run `go list -f {{.Name}}` on the directory containing `input`.
fn infer_package(go_command: &str, input: &Path) -> Result<String, CliError> {
    let dir = package_dir(input);
    tracing::info!(go_command, dir = %dir, "Inferring package name");

    let output = Command::new(go_command)
        .args(["list", "-f", "{{.Name}}"])
        .arg(&dir)
        .output()
        .map_err(|e| CliError::PackageInference {
            dir: dir.clone(),
            message: format!("failed to run {go_command}: {e}"),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(CliError::PackageInference {
            dir,
            message: format!("{go_command} list {}: {}", output.status, stderr.trim()),
        });
    }

    let name = String::from_utf8_lossy(&output.stdout).trim_end().to_owned();
    if name.is_empty() {
        return Err(CliError::PackageInference {
            dir,
            message: format!("{go_command} list printed no package name"),
        });
    }

    tracing::debug!(package = %name, "Inferred package name");
    Ok(name)
}

/// Directory argument for `go list`.
///
/// Relative directories get a `./` prefix, otherwise the Go tool reads them
/// as import paths.
fn package_dir(input: &Path) -> String {
    let dir = input
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or(Path::new("."));

    match dir.components().next() {
        Some(Component::Normal(_)) => format!("./{}", dir.display()),
        _ => dir.display().to_string(),
    }
}

/// Check that `name` can appear in a `package` clause.
pub(crate) fn validate_package_name(name: &str) -> Result<(), CliError> {
    let invalid = |reason| CliError::PackageName {
        name: name.to_owned(),
        reason,
    };

    let mut chars = name.chars();
    match chars.next() {
        None => return Err(invalid("name is empty")),
        Some(first) if !(first.is_alphabetic() || first == '_') => {
            return Err(invalid("must start with a letter or underscore"));
        }
        Some(_) => {}
    }
    if !chars.all(|c| c.is_alphanumeric() || c == '_') {
        return Err(invalid("must contain only letters, digits and underscores"));
    }
    if name == "_" {
        return Err(invalid("blank identifier is not a package name"));
    }
    if GO_KEYWORDS.contains(&name) {
        return Err(invalid("is a Go keyword"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use mdgodoc_config::CliSettings;
    use pretty_assertions::assert_eq;

    use super::*;

    fn config_with(settings: &CliSettings, go_command: &str) -> Config {
        let mut config = Config::default();
        config.package.go_command = go_command.to_owned();
        config.package.name.clone_from(&settings.package);
        if let Some(input) = &settings.input {
            config.docs_resolved.input.clone_from(input);
        }
        config
    }

    #[test]
    fn test_package_dir_current_directory() {
        assert_eq!(package_dir(Path::new("README.md")), ".");
        assert_eq!(package_dir(Path::new("./README.md")), ".");
    }

    #[test]
    fn test_package_dir_relative_gets_prefix() {
        assert_eq!(package_dir(Path::new("render/README.md")), "./render");
        assert_eq!(package_dir(Path::new("a/b/README.md")), "./a/b");
    }

    #[test]
    fn test_package_dir_dotted_paths_unchanged() {
        assert_eq!(package_dir(Path::new("./render/README.md")), "./render");
        assert_eq!(package_dir(Path::new("../lib/README.md")), "../lib");
    }

    #[test]
    fn test_package_dir_absolute() {
        assert_eq!(
            package_dir(Path::new("/src/widgets/README.md")),
            "/src/widgets"
        );
    }

    #[test]
    fn test_valid_package_names() {
        for name in ["widgets", "main", "_internal", "v2", "http2curl", "café"] {
            assert!(
                validate_package_name(name).is_ok(),
                "{name} should be valid"
            );
        }
    }

    #[test]
    fn test_invalid_package_names() {
        for name in ["", "2fast", "my-pkg", "my pkg", "pkg.v2", "_"] {
            assert!(
                matches!(
                    validate_package_name(name),
                    Err(CliError::PackageName { .. })
                ),
                "{name:?} should be invalid"
            );
        }
    }

    #[test]
    fn test_keywords_rejected() {
        let err = validate_package_name("func").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid package name \"func\": is a Go keyword"
        );
        assert!(validate_package_name("package").is_err());
        assert!(validate_package_name("go").is_err());
    }

    #[test]
    fn test_explicit_name_skips_go_list() {
        let settings = CliSettings {
            package: Some("widgets".to_owned()),
            ..Default::default()
        };
        let config = config_with(&settings, "/nonexistent/go");
        assert_eq!(resolve_package(&config).unwrap(), "widgets");
    }

    #[test]
    fn test_explicit_name_is_validated() {
        let settings = CliSettings {
            package: Some("my-pkg".to_owned()),
            ..Default::default()
        };
        let config = config_with(&settings, "go");
        assert!(matches!(
            resolve_package(&config),
            Err(CliError::PackageName { .. })
        ));
    }

    #[test]
    fn test_missing_go_command() {
        let settings = CliSettings {
            input: Some(PathBuf::from("render/README.md")),
            ..Default::default()
        };
        let config = config_with(&settings, "/nonexistent/go");
        let err = resolve_package(&config).unwrap_err();
        assert!(matches!(err, CliError::PackageInference { .. }));
        assert!(err.to_string().contains("./render"));
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_go_command() {
        let config = config_with(&CliSettings::default(), "false");
        let err = resolve_package(&config).unwrap_err();
        assert!(matches!(err, CliError::PackageInference { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_silent_go_command() {
        let config = config_with(&CliSettings::default(), "true");
        let err = resolve_package(&config).unwrap_err();
        assert!(err.to_string().contains("printed no package name"));
    }

    #[cfg(unix)]
    #[test]
    fn test_inferred_name_is_validated() {
        // `echo` prints its arguments, which is not an identifier.
        let config = config_with(&CliSettings::default(), "echo");
        let err = resolve_package(&config).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid package name \"list -f {{.Name}} .\": \
             must contain only letters, digits and underscores"
        );
    }
}
