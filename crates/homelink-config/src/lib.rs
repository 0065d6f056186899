//! Configuration management for homelink.
//!
//! Parses `homelink.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! Two values drive the helpers:
//!
//! - `home.route` - named route of the project home page. When absent, the
//!   helpers render nothing.
//! - `home.label` - project-wide default link label, `"Home"` when omitted.
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `home.route`
//! - `home.label`

mod expand;

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "homelink.toml";

/// Label used when `home.label` is not configured.
const DEFAULT_LABEL: &str = "Home";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Home page configuration.
    pub home: HomeConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Home page configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct HomeConfig {
    /// Named route of the project home page.
    ///
    /// `None` disables the helpers entirely: they render empty output.
    pub route: Option<String>,
    /// Default label for home links and breadcrumbs.
    pub label: String,
}

impl Default for HomeConfig {
    fn default() -> Self {
        Self {
            route: None,
            label: DEFAULT_LABEL.to_owned(),
        }
    }
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
        /// Config field path (e.g., "`home.route`").
        field: String,
        /// Error message (e.g., "${`HOME_ROUTE`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `homelink.toml` in current directory and
    /// parents, falling back to defaults when no file is found.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse configuration from a TOML string.
    ///
    /// Applies environment variable expansion and validation, but performs
    /// no file I/O. Useful for hosts that embed their config elsewhere.
    ///
    /// # Errors
    ///
    /// Returns error if parsing, expansion, or validation fails.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(content)?;
        config.expand_env_vars()?;
        config.validate()?;
        Ok(config)
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

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml(&content)?;
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file or string.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // An empty route name is a configuration mistake, not "feature off";
        // leaving the key out entirely is how the helpers are disabled
        if let Some(ref route) = self.home.route {
            require_non_empty(route, "home.route")?;
        }
        require_non_empty(&self.home.label, "home.label")?;
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref route) = self.home.route {
            self.home.route = Some(expand::expand_env(route, "home.route")?);
        }
        self.home.label = expand::expand_env(&self.home.label, "home.label")?;
        Ok(())
    }
}
