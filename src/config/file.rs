//! Configuration file loading
//!
//! Handles loading configuration from TOML or JSON files. Strict loading
//! ([`ConfigFile::load`]) returns errors; lenient loading
//! ([`ConfigFile::load_or_default`]) never fails and records where the
//! effective configuration came from.

use crate::config::Config;
use crate::error::{AppError, ConfigError};

use serde::Serialize;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Serialization format of a config file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    /// Pick the format from a file extension, defaulting to TOML
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Toml,
        }
    }
}

/// Where the effective configuration came from
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConfigOrigin {
    /// Loaded from this file
    File { path: PathBuf },
    /// No config file was found; built-in defaults
    Defaults,
    /// A config file was found but could not be used; built-in defaults
    Fallback { path: PathBuf, reason: String },
}

impl ConfigOrigin {
    /// Whether built-in defaults are in effect
    pub fn is_default(&self) -> bool {
        !matches!(self, Self::File { .. })
    }
}

impl fmt::Display for ConfigOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File { path } => write!(f, "{}", path.display()),
            Self::Defaults => write!(f, "built-in defaults (no config file found)"),
            Self::Fallback { path, reason } => write!(
                f,
                "built-in defaults ({} unusable: {})",
                path.display(),
                reason
            ),
        }
    }
}

/// A configuration together with its origin
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedConfig {
    pub config: Config,
    pub origin: ConfigOrigin,
}

/// Configuration file handler
pub struct ConfigFile;

impl ConfigFile {
    /// Load and validate configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let path = path.as_ref();

        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ConfigError::FileNotFound(path.display().to_string()),
            _ => ConfigError::Unreadable {
                path: path.display().to_string(),
                source: e,
            },
        })?;

        Self::parse(&content, ConfigFormat::from_path(path))
    }

    /// Parse and validate configuration text
    pub fn parse(content: &str, format: ConfigFormat) -> Result<Config, ConfigError> {
        let config: Config = match format {
            ConfigFormat::Toml => toml::from_str(content)?,
            ConfigFormat::Json => serde_json::from_str(content)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Load configuration, falling back to built-in defaults on any failure
    ///
    /// With no explicit path, the default locations are searched in order.
    /// A fallback is logged as a warning, never returned as an error.
    pub fn load_or_default(path: Option<&Path>) -> LoadedConfig {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match Self::find_default() {
                Some(p) => p,
                None => {
                    log::warn!("No configuration file found, using default thresholds");
                    return LoadedConfig {
                        config: Config::default(),
                        origin: ConfigOrigin::Defaults,
                    };
                }
            },
        };

        match Self::load(&path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                LoadedConfig {
                    config,
                    origin: ConfigOrigin::File { path },
                }
            }
            Err(e) => {
                log::warn!(
                    "Could not use {} ({}), using default thresholds",
                    path.display(),
                    e
                );
                LoadedConfig {
                    config: Config::default(),
                    origin: ConfigOrigin::Fallback {
                        path,
                        reason: e.to_string(),
                    },
                }
            }
        }
    }

    /// First existing file among the default locations
    pub fn find_default() -> Option<PathBuf> {
        Self::default_paths().into_iter().find(|p| p.exists())
    }

    /// Get default configuration file paths, highest priority first
    pub fn default_paths() -> Vec<PathBuf> {
        let mut paths = vec![
            PathBuf::from("config/config.json"),
            PathBuf::from("sysalert.toml"),
        ];

        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("sysalert").join("config.toml"));
        }

        paths.push(PathBuf::from("/etc/sysalert/config.toml"));

        paths
    }

    /// Path used by `config init` when none is given
    pub fn default_write_path() -> PathBuf {
        dirs::config_dir()
            .map(|dir| dir.join("sysalert").join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("sysalert.toml"))
    }

    /// Save configuration to a file, in the format implied by its extension
    pub fn save<P: AsRef<Path>>(config: &Config, path: P) -> Result<(), AppError> {
        let path = path.as_ref();
        let contents = match ConfigFormat::from_path(path) {
            ConfigFormat::Toml => toml::to_string_pretty(config)
                .map_err(|e| ConfigError::ParseError(format!("Failed to serialize: {}", e)))?,
            ConfigFormat::Json => serde_json::to_string_pretty(config).map_err(ConfigError::from)?,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, contents)?;

        Ok(())
    }
}
