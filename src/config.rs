//! Application configuration.
//!
//! All tunable parameters for the Dog Walker CLI.  Values come from an
//! optional JSON file and can be overridden by command-line flags.

use std::path::{Path, PathBuf};

use chrono::format::{Item, StrftimeItems};
use log::info;
use serde::{Deserialize, Serialize};

pub const DEFAULT_STORE_PATH: &str = "dogs.json";
pub const DEFAULT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Core application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// JSON file backing the durable record store.
    pub store_path: PathBuf,
    /// Colour dog names by care status.
    pub color: bool,
    /// Create the demo dogs when the store starts out empty.
    pub seed_when_empty: bool,
    /// strftime pattern for walk/feed timestamps.
    pub time_format: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from(DEFAULT_STORE_PATH),
            color: true,
            seed_when_empty: true,
            time_format: DEFAULT_TIME_FORMAT.to_owned(),
        }
    }
}

/// Errors from loading or validating configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// The file exists but could not be read.
    Io(String),
    /// The file is not valid JSON for [`AppConfig`].
    Corrupted(String),
    /// A field failed validation.
    ValidationFailed(&'static str),
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "config I/O error: {}", msg),
            Self::Corrupted(msg) => write!(f, "config corrupted: {}", msg),
            Self::ValidationFailed(msg) => write!(f, "validation failed: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

impl AppConfig {
    /// Load from `path`, falling back to defaults when the file is absent.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!("Config: {} not found, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => return Err(ConfigError::Io(e.to_string())),
        };
        let cfg: Self =
            serde_json::from_str(&text).map_err(|e| ConfigError::Corrupted(e.to_string()))?;
        cfg.validate()?;
        info!("Config: loaded {}", path.display());
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.store_path.as_os_str().is_empty() {
            return Err(ConfigError::ValidationFailed("store_path must not be empty"));
        }
        if self.time_format.trim().is_empty() {
            return Err(ConfigError::ValidationFailed("time_format must not be empty"));
        }
        if StrftimeItems::new(&self.time_format).any(|item| matches!(item, Item::Error)) {
            return Err(ConfigError::ValidationFailed("time_format is not a valid strftime pattern"));
        }
        Ok(())
    }
}
