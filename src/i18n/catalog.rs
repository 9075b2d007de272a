// SPDX-License-Identifier: MPL-2.0
//! The set of resource bundles packaged with the application.
//!
//! # Layout
//!
//! ```text
//! <root>/
//!   Localizable.ftl          main bundle
//!   Base/Localizable.ftl     Base bundle
//!   en/Localizable.ftl       one directory per language
//!   fr.lproj/Localizable.ftl `.lproj` suffix is accepted
//! ```
//!
//! Each `<Table>.ftl` file becomes the string table `<Table>`.

use super::bundle::{BundleKind, ResourceBundle};
use crate::config::{BASE_BUNDLE, BUNDLE_DIR_SUFFIX, TABLE_EXTENSION};
use crate::error::{ResourceError, Result};
use rust_embed::RustEmbed;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Name reported by the main bundle.
pub const MAIN_BUNDLE: &str = "main";

#[derive(Debug)]
pub struct ResourceCatalog {
    main: ResourceBundle,
    base: Option<ResourceBundle>,
    languages: BTreeMap<String, ResourceBundle>,
}

impl Default for ResourceCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl ResourceCatalog {
    /// An empty catalog: no languages, no `Base`, an empty main bundle.
    pub fn new() -> Self {
        Self {
            main: ResourceBundle::new(MAIN_BUNDLE, BundleKind::Main),
            base: None,
            languages: BTreeMap::new(),
        }
    }

    /// Loads every bundle found under `root`.
    ///
    /// Directories whose name is neither `Base` nor a language identifier are
    /// skipped, as are directories holding no `.ftl` table (`images/` parses
    /// as a language tag) and files that are not string tables.
    pub fn from_dir(root: &Path) -> Result<Self> {
        let mut catalog = Self::new();

        let mut entries = fs::read_dir(root)?.collect::<std::io::Result<Vec<_>>>()?;
        entries.sort_by_key(|entry| entry.file_name());

        for entry in entries {
            let path = entry.path();
            if path.is_dir() {
                let Some(dir_name) = path.file_name().and_then(|n| n.to_str()) else {
                    continue;
                };
                let language = dir_name.strip_suffix(BUNDLE_DIR_SUFFIX).unwrap_or(dir_name);
                if !is_bundle_name(language) {
                    tracing::debug!(dir = %path.display(), "skipping non-language directory");
                    continue;
                }
                let tables = read_tables(&path)?;
                if tables.is_empty() {
                    tracing::debug!(dir = %path.display(), "skipping directory without string tables");
                    continue;
                }
                for (table, source) in tables {
                    catalog.add_table(language, &table, source)?;
                }
            } else if let Some(table) = table_name(&path) {
                let source = fs::read_to_string(&path)?;
                catalog.add_main_table(&table, source)?;
            }
        }

        tracing::debug!(
            root = %root.display(),
            languages = ?catalog.available_languages(false),
            "loaded resource catalog"
        );
        Ok(catalog)
    }

    /// Loads the tables compiled into the binary from `assets/i18n/`.
    pub fn embedded() -> Result<Self> {
        let mut catalog = Self::new();

        let mut files: Vec<String> = Asset::iter().map(|file| file.to_string()).collect();
        files.sort();

        for file in files {
            let Some(content) = Asset::get(&file) else {
                continue;
            };
            let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
            match file.split_once('/') {
                Some((dir_name, rest)) => {
                    let language = dir_name.strip_suffix(BUNDLE_DIR_SUFFIX).unwrap_or(dir_name);
                    let Some(table) = table_name(Path::new(rest)) else {
                        continue;
                    };
                    if is_bundle_name(language) && !rest.contains('/') {
                        catalog.add_table(language, &table, source)?;
                    }
                }
                None => {
                    if let Some(table) = table_name(Path::new(&file)) {
                        catalog.add_main_table(&table, source)?;
                    }
                }
            }
        }
        Ok(catalog)
    }

    /// Adds a string table to the bundle for `language` (or `Base`),
    /// creating the bundle if needed.
    pub fn add_table(&mut self, language: &str, table: &str, source: impl Into<String>) -> Result<()> {
        self.ensure_bundle(language)?.add_table(table, source.into())
    }

    /// Adds a string table to the main bundle.
    pub fn add_main_table(&mut self, table: &str, source: impl Into<String>) -> Result<()> {
        self.main.add_table(table, source.into())
    }

    fn ensure_bundle(&mut self, language: &str) -> Result<&mut ResourceBundle> {
        if language == BASE_BUNDLE {
            return Ok(self
                .base
                .get_or_insert_with(|| ResourceBundle::new(BASE_BUNDLE, BundleKind::Base)));
        }
        if !is_bundle_name(language) {
            return Err(ResourceError::InvalidLanguage(language.to_string()).into());
        }
        Ok(self
            .languages
            .entry(language.to_string())
            .or_insert_with(|| ResourceBundle::new(language, BundleKind::Language)))
    }

    /// Packaged language identifiers, sorted, with `Base` last when present.
    pub fn available_languages(&self, exclude_base: bool) -> Vec<String> {
        let mut languages: Vec<String> = self.languages.keys().cloned().collect();
        if self.base.is_some() && !exclude_base {
            languages.push(BASE_BUNDLE.to_string());
        }
        languages
    }

    /// Whether `language` names a packaged bundle (`Base` included).
    pub fn contains(&self, language: &str) -> bool {
        self.bundle(language).is_some()
    }

    /// The bundle for `language`, or the `Base` bundle for `"Base"`.
    pub fn bundle(&self, language: &str) -> Option<&ResourceBundle> {
        if language == BASE_BUNDLE {
            return self.base.as_ref();
        }
        self.languages.get(language)
    }

    pub fn base(&self) -> Option<&ResourceBundle> {
        self.base.as_ref()
    }

    pub fn main(&self) -> &ResourceBundle {
        &self.main
    }
}

fn is_bundle_name(name: &str) -> bool {
    name == BASE_BUNDLE || name.parse::<LanguageIdentifier>().is_ok()
}

/// Table name for a `.ftl` file, `None` for anything else.
fn table_name(path: &Path) -> Option<String> {
    if path.extension().and_then(|e| e.to_str()) != Some(TABLE_EXTENSION) {
        return None;
    }
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(str::to_string)
}

fn read_tables(dir: &Path) -> Result<Vec<(String, String)>> {
    let mut tables = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        if let Some(table) = table_name(&path) {
            tables.push((table, fs::read_to_string(&path)?));
        }
    }
    tables.sort();
    Ok(tables)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn available_languages_sorted_with_base_last() {
        let mut catalog = ResourceCatalog::new();
        catalog.add_table("fr", "Localizable", "hello = Bonjour\n").unwrap();
        catalog.add_table("Base", "Localizable", "hello = Hello\n").unwrap();
        catalog.add_table("en", "Localizable", "hello = Hello\n").unwrap();

        assert_eq!(catalog.available_languages(false), vec!["en", "fr", "Base"]);
        assert_eq!(catalog.available_languages(true), vec!["en", "fr"]);
    }

    #[test]
    fn base_absent_is_never_listed() {
        let mut catalog = ResourceCatalog::new();
        catalog.add_table("en", "Localizable", "hello = Hello\n").unwrap();
        assert_eq!(catalog.available_languages(false), vec!["en"]);
        assert!(catalog.base().is_none());
    }

    #[test]
    fn invalid_language_is_rejected() {
        let mut catalog = ResourceCatalog::new();
        let err = catalog
            .add_table("not a language", "Localizable", "hello = Hi\n")
            .unwrap_err();
        assert!(matches!(err, Error::Resource(ResourceError::InvalidLanguage(_))));
    }

    #[test]
    fn from_dir_reads_layout() {
        let dir = tempdir().expect("failed to create temp dir");
        let root = dir.path();
        fs::create_dir_all(root.join("Base")).unwrap();
        fs::create_dir_all(root.join("fr.lproj")).unwrap();
        fs::create_dir_all(root.join("de")).unwrap();
        fs::create_dir_all(root.join("@assets")).unwrap();
        fs::write(root.join("Localizable.ftl"), "hello = main hello\n").unwrap();
        fs::write(root.join("README.md"), "not a table").unwrap();
        fs::write(root.join("Base").join("Localizable.ftl"), "hello = Hello\n").unwrap();
        fs::write(root.join("fr.lproj").join("Localizable.ftl"), "hello = Bonjour\n").unwrap();
        fs::write(root.join("fr.lproj").join("Errors.ftl"), "oops = Oups\n").unwrap();
        fs::write(root.join("de").join("Localizable.ftl"), "hello = Hallo\n").unwrap();

        let catalog = ResourceCatalog::from_dir(root).expect("catalog should load");

        assert_eq!(catalog.available_languages(false), vec!["de", "fr", "Base"]);
        let fr = catalog.bundle("fr").expect("fr bundle");
        assert_eq!(fr.localized("hello", "Localizable"), "Bonjour");
        assert_eq!(fr.localized("oops", "Errors"), "Oups");
        assert_eq!(catalog.main().localized("hello", "Localizable"), "main hello");
        assert!(!catalog.contains("@assets"));
    }

    #[test]
    fn from_dir_skips_directories_without_tables() {
        let dir = tempdir().expect("failed to create temp dir");
        let root = dir.path();
        fs::create_dir_all(root.join("en")).unwrap();
        fs::create_dir_all(root.join("images")).unwrap();
        fs::create_dir_all(root.join("fonts")).unwrap();
        fs::write(root.join("en").join("Localizable.ftl"), "hello = Hello\n").unwrap();
        fs::write(root.join("images").join("logo.png"), [0u8; 4]).unwrap();

        let catalog = ResourceCatalog::from_dir(root).expect("catalog should load");

        assert_eq!(catalog.available_languages(false), vec!["en"]);
        assert!(!catalog.contains("images"));
        assert!(!catalog.contains("fonts"));
    }

    #[test]
    fn from_dir_propagates_parse_errors() {
        let dir = tempdir().expect("failed to create temp dir");
        fs::create_dir_all(dir.path().join("en")).unwrap();
        fs::write(dir.path().join("en").join("Localizable.ftl"), "= broken\n").unwrap();

        let err = ResourceCatalog::from_dir(dir.path()).unwrap_err();
        assert!(matches!(err, Error::Resource(ResourceError::Parse { .. })));
    }

    #[test]
    fn from_dir_missing_root_is_io_error() {
        let dir = tempdir().expect("failed to create temp dir");
        let err = ResourceCatalog::from_dir(&dir.path().join("absent")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn embedded_catalog_ships_english_and_base() {
        let catalog = ResourceCatalog::embedded().expect("embedded tables are valid");
        let languages = catalog.available_languages(false);
        assert!(languages.contains(&"en".to_string()));
        assert_eq!(languages.last().map(String::as_str), Some("Base"));
    }

    #[test]
    fn every_embedded_language_names_every_other() {
        let catalog = ResourceCatalog::embedded().expect("embedded tables are valid");
        let languages = catalog.available_languages(true);
        for language in &languages {
            let bundle = catalog.bundle(language).expect("listed bundle exists");
            for other in &languages {
                let id = format!("language-name-{}", other);
                assert!(
                    bundle.localized_string(&id, "Localizable").is_some(),
                    "{} is missing {}",
                    language,
                    id
                );
            }
        }
    }
}
