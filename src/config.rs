//! TOML configuration.
//!
//! Looked up at `DSA_COMPANION_CONFIG` or `<config dir>/dsa-companion/config.toml`.
//! A missing file means defaults; a broken one is an error.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::store::EditPolicy;

pub const APP_NAME: &str = "dsa-companion";
const CONFIG_FILE: &str = "config.toml";
const LOG_FILE: &str = "dsa-companion.log";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub dark_mode: bool,
    pub edit_policy: EditPolicy,
    pub sample_topics: bool,
    pub note_topics: Vec<String>,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dark_mode: true,
            edit_policy: EditPolicy::default(),
            sample_topics: true,
            note_topics: [
                "Arrays",
                "Linked Lists",
                "Stacks & Queues",
                "Trees",
                "Graphs",
                "Dynamic Programming",
                "Sorting & Searching",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            log_file: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }

    pub fn log_path(&self) -> PathBuf {
        self.log_file.clone().unwrap_or_else(|| {
            dirs::data_local_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(APP_NAME)
                .join(LOG_FILE)
        })
    }
}

pub fn config_path() -> PathBuf {
    if let Ok(path) = std::env::var("DSA_COMPANION_CONFIG") {
        return PathBuf::from(path);
    }

    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
        .join(CONFIG_FILE)
}
