//! TOML-based application configuration.
//!
//! Stores scheduler defaults:
//! - Snooze offset and per-alarm snooze budget
//! - Trigger polling cadence
//!
//! Configuration is stored at `~/.config/reveille/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::config_dir;

/// Snooze behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnoozeConfig {
    /// Minutes added to the current time when an alarm is snoozed.
    #[serde(default = "default_snooze_minutes")]
    pub minutes: u32,
    /// Snoozes granted to each alarm at registration.
    #[serde(default = "default_snooze_budget")]
    pub budget: u32,
}

/// Trigger polling cadence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickConfig {
    #[serde(default = "default_period_secs")]
    pub period_secs: u64,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/reveille/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub snooze: SnoozeConfig,
    #[serde(default)]
    pub tick: TickConfig,
}

// Default functions
fn default_snooze_minutes() -> u32 {
    5
}
fn default_snooze_budget() -> u32 {
    3
}
fn default_period_secs() -> u64 {
    1
}

impl Default for SnoozeConfig {
    fn default() -> Self {
        Self {
            minutes: default_snooze_minutes(),
            budget: default_snooze_budget(),
        }
    }
}

impl Default for TickConfig {
    fn default() -> Self {
        Self {
            period_secs: default_period_secs(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            snooze: SnoozeConfig::default(),
            tick: TickConfig::default(),
        }
    }
}

impl Config {
    fn path() -> Result<PathBuf, Box<dyn std::error::Error>> {
        Ok(config_dir()?.join("config.toml"))
    }

    /// Load from disk or return default.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        Self::load_from(&Self::path()?)
    }

    /// Load from an explicit path. A missing file yields the defaults,
    /// which are written back to that path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be parsed, or if
    /// the default config cannot be written.
    pub fn load_from(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let cfg: Config = toml::from_str(&content)?;
                Ok(cfg)
            }
            Err(_) => {
                let cfg = Self::default();
                cfg.save_to(path)?;
                Ok(cfg)
            }
        }
    }

    /// Persist to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.save_to(&Self::path()?)
    }

    /// Persist to an explicit path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written.
    pub fn save_to(&self, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load from disk, returning default on error.
    /// This is a convenience method that never fails.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = Config::default();
        assert_eq!(cfg.snooze.minutes, 5);
        assert_eq!(cfg.snooze.budget, 3);
        assert_eq!(cfg.tick.period_secs, 1);
    }

    #[test]
    fn default_config_roundtrip() {
        let cfg = Config::default();
        let toml_str = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn partial_file_falls_back_to_field_defaults() {
        let parsed: Config = toml::from_str("[snooze]\nminutes = 10\n").unwrap();
        assert_eq!(parsed.snooze.minutes, 10);
        assert_eq!(parsed.snooze.budget, 3);
        assert_eq!(parsed.tick.period_secs, 1);
    }

    #[test]
    fn load_from_missing_file_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg, Config::default());
        assert!(path.exists());
    }

    #[test]
    fn save_to_load_from_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut cfg = Config::default();
        cfg.snooze.minutes = 10;
        cfg.snooze.budget = 1;
        cfg.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, cfg);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "snooze = \"not a table\"").unwrap();

        assert!(Config::load_from(&path).is_err());
    }
}
