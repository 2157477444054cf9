//! Configuration loading and typed config structures for the Saturn colony
//! simulation.
//!
//! The canonical configuration lives in `saturn-config.yaml` at the project
//! root. This module defines strongly-typed structs that mirror the YAML
//! structure, and provides a loader that reads it. Every section and field
//! is optional; missing values fall back to the defaults below.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Environment variable that overrides `persistence.save_path`.
pub const SAVE_PATH_ENV: &str = "SATURN_SAVE_PATH";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level simulation configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SimulationConfig {
    /// World-level settings.
    #[serde(default)]
    pub world: WorldConfig,

    /// Tick and day timing.
    #[serde(default)]
    pub time: TimeConfig,

    /// Save file settings.
    #[serde(default)]
    pub persistence: PersistenceConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl SimulationConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// `SATURN_SAVE_PATH` overrides `persistence.save_path` when set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let mut config = Self::parse_yaml(&contents)?;
        config.persistence.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let mut config = Self::parse_yaml(yaml)?;
        config.persistence.apply_env_overrides();
        Ok(config)
    }

    fn parse_yaml(yaml: &str) -> Result<Self, ConfigError> {
        // An empty document deserializes as null rather than an empty map.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yml::from_str(yaml)?)
    }
}

/// World-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct WorldConfig {
    /// Random seed for reproducible runs. Unset means seeded from entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Tick and day timing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TimeConfig {
    /// Real-time milliseconds between ticks.
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,

    /// Real-time milliseconds per in-game day.
    #[serde(default = "default_day_length_ms")]
    pub day_length_ms: u64,

    /// Seconds between autosaves.
    #[serde(default = "default_autosave_interval_secs")]
    pub autosave_interval_secs: u64,
}

impl Default for TimeConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: default_tick_interval_ms(),
            day_length_ms: default_day_length_ms(),
            autosave_interval_secs: default_autosave_interval_secs(),
        }
    }
}

/// Save file configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PersistenceConfig {
    /// Path of the JSON save file.
    #[serde(default = "default_save_path")]
    pub save_path: PathBuf,

    /// Whether the runner saves on the autosave interval.
    #[serde(default = "default_true")]
    pub autosave: bool,
}

impl PersistenceConfig {
    /// Override the save path with `SATURN_SAVE_PATH` when set.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var(SAVE_PATH_ENV) {
            self.save_path = PathBuf::from(val);
        }
    }
}

impl Default for PersistenceConfig {
    fn default() -> Self {
        Self {
            save_path: default_save_path(),
            autosave: true,
        }
    }
}

/// Output format for the tracing subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable output.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Subscriber output format.
    #[serde(default)]
    pub format: LogFormat,

    /// Entries kept in the in-game journal.
    #[serde(default = "default_journal_capacity")]
    pub journal_capacity: usize,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
            journal_capacity: default_journal_capacity(),
        }
    }
}

const fn default_tick_interval_ms() -> u64 {
    100
}

const fn default_day_length_ms() -> u64 {
    crate::clock::DEFAULT_DAY_LENGTH_MS
}

const fn default_autosave_interval_secs() -> u64 {
    30
}

fn default_save_path() -> PathBuf {
    PathBuf::from("saturn-save.json")
}

const fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_owned()
}

const fn default_journal_capacity() -> usize {
    saturn_types::journal::DEFAULT_JOURNAL_CAPACITY
}
