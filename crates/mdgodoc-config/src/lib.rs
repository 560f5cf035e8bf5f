//! Configuration management for md-to-godoc.
//!
//! Parses `md-to-godoc.toml` with serde and provides auto-discovery of the
//! file in parent directories. Every setting has a default, so running
//! without a config file behaves like the plain command line tool.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Path values additionally expand a leading `~`.
//!
//! Expanded fields:
//! - `docs.input`
//! - `docs.output`
//! - `package.name`
//! - `package.go_command`
//! - `license.file`

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override markdown input path.
    pub input: Option<PathBuf>,
    /// Override Go output path.
    pub output: Option<PathBuf>,
    /// Override package name.
    pub package: Option<String>,
    /// Override license header flag.
    pub license_enabled: Option<bool>,
    /// Override license file path.
    pub license_file: Option<PathBuf>,
    /// Override badge rendering flag.
    pub badges: Option<bool>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "md-to-godoc.toml";

/// Markdown file read when nothing else is configured.
pub const DEFAULT_INPUT: &str = "README.md";

/// Go file written next to the input when no output is configured.
pub const DEFAULT_OUTPUT: &str = "doc.go";

/// License file read for the header when nothing else is configured.
pub const DEFAULT_LICENSE_FILE: &str = "LICENSE.txt";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Input/output configuration (paths are relative strings from TOML).
    #[serde(default)]
    docs: DocsConfigRaw,
    /// Package naming configuration.
    pub package: PackageConfig,
    /// License header configuration (paths are relative strings from TOML).
    #[serde(default)]
    license: LicenseConfigRaw,
    /// Rendering options.
    pub render: RenderConfig,

    /// Resolved input/output configuration (set after loading).
    #[serde(skip)]
    pub docs_resolved: DocsConfig,
    /// Resolved license configuration (set after loading).
    #[serde(skip)]
    pub license_resolved: LicenseConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new(""))
    }
}

/// Raw docs configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct DocsConfigRaw {
    input: Option<String>,
    output: Option<String>,
}

/// Resolved input/output configuration.
#[derive(Debug, Default)]
pub struct DocsConfig {
    /// Markdown file to convert.
    pub input: PathBuf,
    /// Explicit output file, if any.
    pub output: Option<PathBuf>,
}

impl DocsConfig {
    /// Path of the Go file to write.
    ///
    /// Without an explicit output, `doc.go` goes into the input's directory.
    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        match &self.output {
            Some(output) => output.clone(),
            None => self
                .input
                .parent()
                .unwrap_or(Path::new(""))
                .join(DEFAULT_OUTPUT),
        }
    }
}

/// Package naming configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PackageConfig {
    /// Package name. Inferred from the input directory when unset.
    pub name: Option<String>,
    /// Go tool used to infer the package name.
    pub go_command: String,
}

impl Default for PackageConfig {
    fn default() -> Self {
        Self {
            name: None,
            go_command: "go".to_owned(),
        }
    }
}

/// Raw license configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct LicenseConfigRaw {
    enabled: Option<bool>,
    file: Option<String>,
}

/// Resolved license header configuration.
#[derive(Debug)]
pub struct LicenseConfig {
    /// Whether to prepend the license header.
    pub enabled: bool,
    /// File the header is read from. A missing file means no header.
    pub file: PathBuf,
}

impl Default for LicenseConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            file: PathBuf::from(DEFAULT_LICENSE_FILE),
        }
    }
}

/// Rendering options.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Render badge links (links whose only content is an image).
    pub badges: bool,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`package.name`").
        field: String,
        /// Error message (e.g., "${`PKG`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `md-to-godoc.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(input) = &settings.input {
            self.docs_resolved.input.clone_from(input);
        }
        if let Some(output) = &settings.output {
            self.docs_resolved.output = Some(output.clone());
        }
        if let Some(package) = &settings.package {
            self.package.name = Some(package.clone());
        }
        if let Some(enabled) = settings.license_enabled {
            self.license_resolved.enabled = enabled;
        }
        if let Some(file) = &settings.license_file {
            self.license_resolved.file.clone_from(file);
        }
        if let Some(badges) = settings.badges {
            self.render.badges = badges;
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            docs: DocsConfigRaw::default(),
            package: PackageConfig::default(),
            license: LicenseConfigRaw::default(),
            render: RenderConfig::default(),
            docs_resolved: DocsConfig {
                input: base.join(DEFAULT_INPUT),
                output: None,
            },
            license_resolved: LicenseConfig {
                enabled: true,
                file: base.join(DEFAULT_LICENSE_FILE),
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(name) = &self.package.name {
            require_non_empty(name, "package.name")?;
        }
        require_non_empty(&self.package.go_command, "package.go_command")?;
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref input) = self.docs.input {
            self.docs.input = Some(expand::expand_path(input, "docs.input")?);
        }
        if let Some(ref output) = self.docs.output {
            self.docs.output = Some(expand::expand_path(output, "docs.output")?);
        }
        if let Some(ref name) = self.package.name {
            self.package.name = Some(expand::expand_env(name, "package.name")?);
        }
        self.package.go_command =
            expand::expand_env(&self.package.go_command, "package.go_command")?;
        if let Some(ref file) = self.license.file {
            self.license.file = Some(expand::expand_path(file, "license.file")?);
        }
        Ok(())
    }

    /// Resolve relative paths against the config file's directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let resolve = |path: Option<&str>, default: &str| config_dir.join(path.unwrap_or(default));

        self.docs_resolved = DocsConfig {
            input: resolve(self.docs.input.as_deref(), DEFAULT_INPUT),
            output: self.docs.output.as_deref().map(|output| config_dir.join(output)),
        };

        self.license_resolved = LicenseConfig {
            enabled: self.license.enabled.unwrap_or(true),
            file: resolve(self.license.file.as_deref(), DEFAULT_LICENSE_FILE),
        };
    }
}
