//! Server settings loaded from `strokerisk.toml` in the app directory.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::app_dirs::{self, AppDirs};

pub use crate::app_dirs::{CONFIG_FILE_NAME, MODEL_FILE_NAME};

/// Environment variable overriding `bind_addr`.
pub const BIND_ENV: &str = "STROKERISK_BIND";
/// Environment variable overriding `model_path`.
pub const MODEL_ENV: &str = "STROKERISK_MODEL";

/// Errors that may occur while loading server configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a config file.
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to parse TOML config.
    #[error("Invalid config at {path}: {source}")]
    ParseToml {
        path: PathBuf,
        source: toml::de::Error,
    },
    /// A bind address from the environment or CLI did not parse.
    #[error("Invalid bind address {value:?}: {source}")]
    BindAddr {
        value: String,
        source: std::net::AddrParseError,
    },
    /// No usable config directory found.
    #[error("No suitable config directory found: {0}")]
    AppDir(#[from] app_dirs::AppDirError),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Classifier artifact; `None` resolves to `<app_root>/models/model_stroke.json`.
    pub model_path: Option<PathBuf>,
    /// Refuse to start when the model is missing or its schema lacks a
    /// direct measurement column.
    pub strict_schema: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 5000)),
            model_path: None,
            strict_schema: false,
        }
    }
}

impl ServerConfig {
    /// Parse settings from a TOML file; a missing file yields defaults.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::ParseToml {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply `STROKERISK_BIND` / `STROKERISK_MODEL` overrides.
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        if let Ok(value) = std::env::var(BIND_ENV) {
            self.set_bind_addr(&value)?;
        }
        if let Ok(value) = std::env::var(MODEL_ENV) {
            self.model_path = Some(PathBuf::from(value));
        }
        Ok(())
    }

    pub fn set_bind_addr(&mut self, value: &str) -> Result<(), ConfigError> {
        self.bind_addr = value.parse().map_err(|source| ConfigError::BindAddr {
            value: value.to_string(),
            source,
        })?;
        Ok(())
    }

    /// Resolve the model artifact path, defaulting into the app directory.
    pub fn resolved_model_path(&self) -> Result<PathBuf, ConfigError> {
        match &self.model_path {
            Some(path) => Ok(path.clone()),
            None => Ok(AppDirs::resolve()?.default_model_path()?),
        }
    }
}

/// Resolve the configuration file path inside the app directory.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    Ok(AppDirs::resolve()?.config_file())
}

/// Load settings from the app directory (or `path`) and apply env overrides.
pub fn load_or_default(path: Option<&Path>) -> Result<ServerConfig, ConfigError> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => config_path()?,
    };
    let mut config = ServerConfig::load_from_path(&path)?;
    config.apply_env()?;
    tracing::debug!("Loaded server config from {}", path.display());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let config = ServerConfig::load_from_path(&dir.path().join(CONFIG_FILE_NAME)).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.bind_addr.port(), 5000);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(
            &path,
            "model_path = \"/srv/models/model_stroke.json\"\nstrict_schema = true\n",
        )
        .unwrap();
        let config = ServerConfig::load_from_path(&path).unwrap();
        assert!(config.strict_schema);
        assert_eq!(config.bind_addr, ServerConfig::default().bind_addr);
        assert_eq!(
            config.resolved_model_path().unwrap(),
            PathBuf::from("/srv/models/model_stroke.json")
        );
    }

    #[test]
    fn malformed_file_is_reported() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "bind_addr = 12").unwrap();
        assert!(matches!(
            ServerConfig::load_from_path(&path),
            Err(ConfigError::ParseToml { .. })
        ));
    }

    #[test]
    fn bind_addr_override_validates() {
        let mut config = ServerConfig::default();
        config.set_bind_addr("0.0.0.0:8080").unwrap();
        assert_eq!(config.bind_addr.port(), 8080);
        assert!(matches!(
            config.set_bind_addr("localhost"),
            Err(ConfigError::BindAddr { .. })
        ));
    }
}
