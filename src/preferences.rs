// SPDX-License-Identifier: MPL-2.0
//! Key-value preference storage for the selected language.
//!
//! Only one entry is ever written by this crate ([`CURRENT_LANGUAGE_KEY`]), but
//! the stores are plain string maps so an application may share the file.
//!
//! [`CURRENT_LANGUAGE_KEY`]: crate::config::CURRENT_LANGUAGE_KEY

use crate::config::PREFERENCES_FILE;
use crate::error::{Error, Result};
use crate::paths;
use std::cell::OnceCell;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// A string key-value store that survives restarts.
pub trait PreferenceStore {
    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-process store. Nothing is persisted.
#[derive(Debug, Default, Clone)]
pub struct MemoryPreferenceStore {
    entries: HashMap<String, String>,
    writes: usize,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful `set` calls so far.
    pub fn write_count(&self) -> usize {
        self.writes
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}

/// Preferences kept in a flat TOML file.
///
/// The file is read on the first lookup, not at construction. A missing
/// or unreadable file reads as an empty store, but an existing file that
/// does not parse is never overwritten.
#[derive(Debug)]
pub struct TomlPreferenceStore {
    path: PathBuf,
    entries: OnceCell<toml::Table>,
}

impl TomlPreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            entries: OnceCell::new(),
        }
    }

    /// Store at `preferences.toml` in the resolved config directory.
    pub fn open_default() -> Option<Self> {
        Self::open_with_override(None)
    }

    /// Store at `preferences.toml` in `base_dir`, or the resolved config directory.
    pub fn open_with_override(base_dir: Option<PathBuf>) -> Option<Self> {
        paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
            path.push(PREFERENCES_FILE);
            Self::new(path)
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn entries(&self) -> &toml::Table {
        self.entries.get_or_init(|| match read_table(&self.path) {
            Ok(table) => table,
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "ignoring unreadable preferences");
                toml::Table::new()
            }
        })
    }
}

fn read_table(path: &Path) -> Result<toml::Table> {
    if !path.exists() {
        return Ok(toml::Table::new());
    }
    let content = fs::read_to_string(path)?;
    let table: toml::Table = toml::from_str(&content)?;
    Ok(table)
}

impl PreferenceStore for TomlPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries()
            .get(key)
            .and_then(toml::Value::as_str)
            .map(str::to_string)
    }

    /// Writes through to the file. An existing file that does not parse is
    /// left untouched and the write fails, so shared entries are never lost.
    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut table = read_table(&self.path)?;
        table.insert(key.to_string(), toml::Value::String(value.to_string()));

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(&table).map_err(Error::from)?;
        fs::write(&self.path, content)?;

        self.entries = OnceCell::from(table);
        Ok(())
    }
}
