//! Layout of the `.strokerisk` application directory.
//!
//! ```text
//! <config_dir>/.strokerisk/
//!     strokerisk.toml
//!     models/model_stroke.json
//!     logs/strokerisk_<timestamp>.log
//! ```
//!
//! `<config_dir>` is the OS config directory unless `STROKERISK_CONFIG_HOME`
//! points elsewhere.

use std::path::{Path, PathBuf};

use directories::BaseDirs;
use thiserror::Error;

/// Name of the application directory that lives under the config base.
pub const APP_DIR_NAME: &str = ".strokerisk";
/// Environment variable overriding the config base directory.
pub const CONFIG_HOME_ENV: &str = "STROKERISK_CONFIG_HOME";

pub const CONFIG_FILE_NAME: &str = "strokerisk.toml";
pub const MODEL_FILE_NAME: &str = "model_stroke.json";

#[derive(Debug, Error)]
pub enum AppDirError {
    #[error("No config directory available; set {CONFIG_HOME_ENV}")]
    NoBaseDir,
    #[error("Failed to create {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Resolved application root. Subdirectories are created on first use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppDirs {
    root: PathBuf,
}

impl AppDirs {
    /// Resolve the root from `STROKERISK_CONFIG_HOME` or the OS config dir.
    pub fn resolve() -> Result<Self, AppDirError> {
        let base = match std::env::var_os(CONFIG_HOME_ENV) {
            Some(path) => PathBuf::from(path),
            None => BaseDirs::new()
                .map(|dirs| dirs.config_dir().to_path_buf())
                .ok_or(AppDirError::NoBaseDir)?,
        };
        Ok(Self::under(&base))
    }

    /// Root placed directly under `base`.
    pub fn under(base: &Path) -> Self {
        Self {
            root: base.join(APP_DIR_NAME),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Settings file; it may not exist.
    pub fn config_file(&self) -> PathBuf {
        self.root.join(CONFIG_FILE_NAME)
    }

    /// Classifier artifact used when the settings name none.
    pub fn default_model_path(&self) -> Result<PathBuf, AppDirError> {
        Ok(create(self.root.join("models"))?.join(MODEL_FILE_NAME))
    }

    pub fn logs_dir(&self) -> Result<PathBuf, AppDirError> {
        create(self.root.join("logs"))
    }
}

fn create(path: PathBuf) -> Result<PathBuf, AppDirError> {
    match std::fs::create_dir_all(&path) {
        Ok(()) => Ok(path),
        Err(source) => Err(AppDirError::CreateDir { path, source }),
    }
}
