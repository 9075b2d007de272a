// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for localization settings.
//!
//! This module serves as the single source of truth for the fixed names and
//! fallbacks used across the crate.

// ==========================================================================
// Language Defaults
// ==========================================================================

/// Language used when no preferred platform locale is packaged.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Name of the synthetic bundle holding development-language strings.
pub const BASE_BUNDLE: &str = "Base";

// ==========================================================================
// Persistence Defaults
// ==========================================================================

/// Preference key under which the selected language is stored.
pub const CURRENT_LANGUAGE_KEY: &str = "CurrentLanguageKey";

/// File name of the preference store inside the config directory.
pub const PREFERENCES_FILE: &str = "preferences.toml";

// ==========================================================================
// Resource Defaults
// ==========================================================================

/// String table consulted when a lookup names no table.
pub const DEFAULT_TABLE: &str = "Localizable";

/// Extension of string table files.
pub const TABLE_EXTENSION: &str = "ftl";

/// Optional suffix on bundle directory names (`fr.lproj`).
pub const BUNDLE_DIR_SUFFIX: &str = ".lproj";

/// Message id prefix for language display names (`language-name-fr`).
pub const LANGUAGE_NAME_PREFIX: &str = "language-name-";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_language_is_english() {
        assert_eq!(DEFAULT_LANGUAGE, "en");
    }

    #[test]
    fn table_names_are_nonempty() {
        assert!(!DEFAULT_TABLE.is_empty());
        assert!(!TABLE_EXTENSION.starts_with('.'));
        assert!(BUNDLE_DIR_SUFFIX.starts_with('.'));
    }
}
