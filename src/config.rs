//! Configuration for the task list core.
//!
//! Every field has a default, so an empty file (or no file at all) yields a
//! working configuration.

use crate::task::adapters::http::{DEFAULT_SEED_URL, DEFAULT_TIMEOUT};
use cap_std::fs_utf8::Dir;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// File name looked up by [`TaskListConfig::load`] callers by convention.
pub const CONFIG_FILE_NAME: &str = "tasklist.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskListConfig {
    /// First-run seeding settings.
    pub seed: SeedConfig,
    /// Durable storage settings.
    pub storage: StorageConfig,
    /// Log output settings.
    pub logging: LoggingConfig,
}

/// Where seed records come from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedSourceKind {
    /// Download from [`SeedConfig::url`].
    #[default]
    Remote,
    /// Read `todos.json` from [`SeedConfig::bundle_dir`].
    Bundle,
}

/// First-run seeding configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    /// Which seed source to use.
    pub source: SeedSourceKind,
    /// Remote seed URL.
    pub url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// Directory holding the bundled `todos.json`.
    pub bundle_dir: Option<String>,
}

impl SeedConfig {
    /// Returns the request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            source: SeedSourceKind::Remote,
            url: DEFAULT_SEED_URL.to_owned(),
            timeout_secs: DEFAULT_TIMEOUT.as_secs(),
            bundle_dir: None,
        }
    }
}

/// Durable storage configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Path of the `SQLite` database file.
    pub database_path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_path: "tasks.sqlite3".to_owned(),
        }
    }
}

/// Log output configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_owned(),
        }
    }
}

/// Errors raised while loading or saving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config file {name}: {source}")]
    Read {
        /// File name inside the config directory.
        name: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file could not be written.
    #[error("failed to write config file {name}: {source}")]
    Write {
        /// File name inside the config directory.
        name: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The contents are not valid configuration TOML.
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration could not be rendered as TOML.
    #[error("failed to serialise config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

impl TaskListConfig {
    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the text is not valid
    /// configuration.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Renders the configuration as TOML.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Serialize`] when rendering fails.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Loads `name` from `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] when the file cannot be read or
    /// [`ConfigError::Parse`] when its contents are invalid.
    pub fn load(dir: &Dir, name: &str) -> Result<Self, ConfigError> {
        let text = dir.read_to_string(name).map_err(|source| ConfigError::Read {
            name: name.to_owned(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Loads `name` from `dir`, falling back to defaults when it is absent.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for any failure other than a missing file.
    pub fn load_or_default(dir: &Dir, name: &str) -> Result<Self, ConfigError> {
        match Self::load(dir, name) {
            Err(ConfigError::Read { source, .. })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Writes the configuration to `name` inside `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Serialize`] or [`ConfigError::Write`].
    pub fn save(&self, dir: &Dir, name: &str) -> Result<(), ConfigError> {
        let text = self.to_toml_string()?;
        dir.write(name, text).map_err(|source| ConfigError::Write {
            name: name.to_owned(),
            source,
        })
    }
}
