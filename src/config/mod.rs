// SPDX-License-Identifier: MPL-2.0
//! This module handles the library's configuration, loaded from a
//! `settings.toml` file next to the preference store.
//!
//! # Configuration Sections
//!
//! - `[general]` - Fallback language
//! - `[resources]` - Where string tables live and which table is the default
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `LOCALIZABLE_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use localizable::config::{self, Config};
//!
//! let (mut config, _warning) = config::load();
//! config.general.fallback_language = "fr".to_string();
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::{Error, Result};
use crate::paths;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// Language adopted when no preferred platform locale is packaged.
    #[serde(default = "default_fallback_language")]
    pub fallback_language: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            fallback_language: default_fallback_language(),
        }
    }
}

/// Resource location settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResourcesConfig {
    /// Directory holding one sub-directory per language.
    /// The embedded tables are used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,

    /// Table consulted by lookups that name no table.
    #[serde(default = "default_table")]
    pub default_table: String,
}

impl Default for ResourcesConfig {
    fn default() -> Self {
        Self {
            directory: None,
            default_table: default_table(),
        }
    }
}

/// Library configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub resources: ResourcesConfig,
}

fn default_fallback_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

fn default_table() -> String {
    DEFAULT_TABLE.to_string()
}

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "using default settings");
                    return (Config::default(), Some(err.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}
