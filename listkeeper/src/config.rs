//! Application configuration.
//!
//! Every field has a default, so an empty JSON object (or no file at all) is a
//! valid configuration.
//!
//! ```json
//! {
//!   "data_dir": "/home/me/.local/share/listkeeper",
//!   "storage_file": "lists.json",
//!   "save_debounce_ms": 250,
//!   "log_filter": "listkeeper=debug",
//!   "cloud": { "endpoint": "https://lists.example.com/api", "user_id": "me" }
//! }
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

fn default_timeout_secs() -> u64 {
    10
}

/// Connection settings for the cloud sync endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloudConfig {
    /// Base URL, without the `/users/...` suffix.
    pub endpoint: String,
    pub user_id: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding the storage file.
    pub data_dir: PathBuf,

    /// File name of the persisted document inside `data_dir`.
    pub storage_file: String,

    /// Quiet period before a changed snapshot is written. Rapid edits only
    /// produce one write.
    pub save_debounce_ms: u64,

    /// `tracing_subscriber::EnvFilter` directive.
    pub log_filter: String,

    /// Cloud sync is disabled when absent.
    pub cloud: Option<CloudConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            storage_file: "lists.json".to_string(),
            save_debounce_ms: 250,
            log_filter: "info".to_string(),
            cloud: None,
        }
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("listkeeper")
}

impl Config {
    /// Read a configuration file.
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read, is not valid JSON, or fails
    /// [`Config::validate`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = ?path, "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&contents)
            .map_err(|e| Error::Config(format!("failed to parse {}: {e}", path.display())))?;
        config.validate()?;

        tracing::debug!(
            path = ?path,
            cloud = config.cloud.is_some(),
            "config loaded"
        );
        Ok(config)
    }

    /// Check values that serde cannot.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] describing the first problem found.
    pub fn validate(&self) -> Result<()> {
        if self.storage_file.trim().is_empty() {
            return Err(Error::Config("storage_file must not be empty".into()));
        }
        if let Some(cloud) = &self.cloud {
            if !(cloud.endpoint.starts_with("http://") || cloud.endpoint.starts_with("https://")) {
                return Err(Error::Config(format!(
                    "cloud endpoint must be an http(s) URL, got {:?}",
                    cloud.endpoint
                )));
            }
            if cloud.user_id.trim().is_empty() {
                return Err(Error::Config("cloud user_id must not be empty".into()));
            }
        }
        Ok(())
    }

    pub fn storage_path(&self) -> PathBuf {
        self.data_dir.join(&self.storage_file)
    }

    pub fn save_debounce(&self) -> Duration {
        Duration::from_millis(self.save_debounce_ms)
    }
}
