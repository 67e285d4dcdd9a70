//! Configuration file loading.
//!
//! Loads dirward configuration from TOML files at XDG-compliant
//! locations.

use crate::config::types::DirwardConfig;
use std::fmt;
use std::path::{Path, PathBuf};

/// Default configuration file name for project-local config.
const LOCAL_CONFIG_NAME: &str = "dirward.toml";

/// Default configuration file name within the XDG config directory.
const XDG_CONFIG_NAME: &str = "config.toml";

/// Application name for XDG directory lookup.
const APP_NAME: &str = "dirward";

/// Error returned when configuration loading fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The file could not be read.
    ReadFailed {
        /// The configuration file path.
        path: PathBuf,
        /// The underlying error text.
        reason: String,
    },
    /// The content was not valid configuration.
    ParseFailed {
        /// The source being parsed, for messages.
        source_name: String,
        /// The parse error text.
        reason: String,
    },
}

impl ConfigError {
    /// Returns true if this is a parse failure.
    #[must_use]
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::ParseFailed { .. })
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReadFailed { path, reason } => {
                write!(
                    f,
                    "failed to read config file '{}': {}",
                    path.display(),
                    reason
                )
            }
            Self::ParseFailed {
                source_name,
                reason,
            } => {
                write!(f, "failed to parse {}: {}", source_name, reason)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Loads configuration from the default search paths.
///
/// Search order:
/// 1. `./dirward.toml` (project-local)
/// 2. `~/.config/dirward/config.toml` (XDG config)
///
/// Returns the default configuration if no config file is found.
///
/// # Errors
///
/// Returns an error if a config file exists but cannot be read or parsed.
pub fn load() -> Result<DirwardConfig, ConfigError> {
    let local_path = PathBuf::from(LOCAL_CONFIG_NAME);
    if local_path.exists() {
        return from_path(&local_path);
    }

    if let Some(config_dir) = dirs::config_dir() {
        let xdg_path = config_dir.join(APP_NAME).join(XDG_CONFIG_NAME);
        if xdg_path.exists() {
            return from_path(&xdg_path);
        }
    }

    Ok(DirwardConfig::default())
}

/// Loads configuration from a specific file path.
///
/// # Errors
///
/// Returns an error if the file cannot be read, contains invalid TOML,
/// or doesn't match the expected schema.
pub fn from_path(path: &Path) -> Result<DirwardConfig, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    toml::from_str(&contents).map_err(|e| ConfigError::ParseFailed {
        source_name: format!("'{}'", path.display()),
        reason: e.to_string(),
    })
}

/// Parses configuration from a TOML string.
///
/// # Errors
///
/// Returns an error if the TOML is invalid or doesn't match the schema.
pub fn from_str(toml_str: &str) -> Result<DirwardConfig, ConfigError> {
    toml::from_str(toml_str).map_err(|e| ConfigError::ParseFailed {
        source_name: "config".to_string(),
        reason: e.to_string(),
    })
}

/// Returns the paths that would be searched for configuration files.
///
/// Useful for diagnostics and user guidance.
#[must_use]
pub fn search_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(LOCAL_CONFIG_NAME)];

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join(APP_NAME).join(XDG_CONFIG_NAME));
    }

    paths
}

/// Returns the XDG config directory for dirward, `~/.config/dirward` on
/// most systems.
#[must_use]
pub fn xdg_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join(APP_NAME))
}
