//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! Gallery behavior that the markup does not declare lives here: whether
//! closing the overlay keeps the last shown index, and how long a content
//! load may run before it is reported as failed.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedLightbox";

/// Default bound on a single content load, in seconds.
pub const DEFAULT_LOAD_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Whether `close()` keeps the last shown index so a later re-open
    /// resumes there. `false` resets the selection on close.
    #[serde(default)]
    pub retain_index_on_close: Option<bool>,
    /// Seconds before an outstanding load is reported as failed.
    /// `Some(0)` disables the bound.
    #[serde(default)]
    pub load_timeout_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            retain_index_on_close: Some(true),
            load_timeout_secs: Some(DEFAULT_LOAD_TIMEOUT_SECS),
        }
    }
}

impl Config {
    /// Effective index-retention policy.
    pub fn retains_index(&self) -> bool {
        self.retain_index_on_close.unwrap_or(true)
    }

    /// Effective load bound. `None` means unbounded.
    pub fn load_timeout(&self) -> Option<std::time::Duration> {
        match self
            .load_timeout_secs
            .unwrap_or(DEFAULT_LOAD_TIMEOUT_SECS)
        {
            0 => None,
            secs => Some(std::time::Duration::from_secs(secs)),
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            retain_index_on_close: Some(false),
            load_timeout_secs: Some(5),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.retain_index_on_close, Some(false));
        assert_eq!(loaded.load_timeout_secs, Some(5));
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert!(loaded.retain_index_on_close.is_none());
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("deep").join("path").join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn default_config_retains_index_and_bounds_loads() {
        let config = Config::default();
        assert!(config.retains_index());
        assert_eq!(
            config.load_timeout(),
            Some(std::time::Duration::from_secs(DEFAULT_LOAD_TIMEOUT_SECS))
        );
    }

    #[test]
    fn zero_timeout_disables_the_bound() {
        let config = Config {
            retain_index_on_close: None,
            load_timeout_secs: Some(0),
        };
        assert_eq!(config.load_timeout(), None);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config = Config {
            retain_index_on_close: None,
            load_timeout_secs: None,
        };
        assert!(config.retains_index());
        assert_eq!(
            config.load_timeout(),
            Some(std::time::Duration::from_secs(DEFAULT_LOAD_TIMEOUT_SECS))
        );
    }
}
