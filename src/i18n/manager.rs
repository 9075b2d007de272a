// SPDX-License-Identifier: MPL-2.0
//! The localization manager: the single authority for which language is
//! selected and which bundle answers lookups.
//!
//! The manager is an ordinary value owned by the application's composition
//! root. Selection changes take `&mut self`, so callers on several threads
//! must already serialize access to reach it.

use super::bundle::ResourceBundle;
use super::catalog::ResourceCatalog;
use super::events::{LanguageChanged, Observers, SubscriptionId};
use super::locale::{self, LocaleSource, SystemLocales};
use super::lookup::LookupChain;
use crate::config::{Config, CURRENT_LANGUAGE_KEY, DEFAULT_LANGUAGE, DEFAULT_TABLE, LANGUAGE_NAME_PREFIX};
use crate::error::Result;
use crate::preferences::{MemoryPreferenceStore, PreferenceStore};
use std::cell::OnceCell;
use std::fmt;
use std::sync::mpsc::Receiver;

pub struct LocalizationManager<S: PreferenceStore = MemoryPreferenceStore> {
    catalog: ResourceCatalog,
    store: S,
    locales: Box<dyn LocaleSource>,
    fallback_language: String,
    default_table: String,
    // Stored preference, read from `store` on first access.
    selected: OnceCell<Option<String>>,
    observers: Observers,
}

impl<S: PreferenceStore> LocalizationManager<S> {
    /// Creates a manager over `catalog`, persisting the selection in `store`
    /// and reading preferred locales from the operating system.
    pub fn new(catalog: ResourceCatalog, store: S) -> Self {
        Self {
            catalog,
            store,
            locales: Box::new(SystemLocales),
            fallback_language: DEFAULT_LANGUAGE.to_string(),
            default_table: DEFAULT_TABLE.to_string(),
            selected: OnceCell::new(),
            observers: Observers::new(),
        }
    }

    /// Creates a manager from settings: resources come from
    /// `resources.directory` when set, otherwise from the embedded tables.
    pub fn from_config(config: &Config, store: S) -> Result<Self> {
        let catalog = match &config.resources.directory {
            Some(dir) => ResourceCatalog::from_dir(dir)?,
            None => ResourceCatalog::embedded()?,
        };
        Ok(Self::new(catalog, store)
            .with_fallback_language(&config.general.fallback_language)
            .with_default_table(&config.resources.default_table))
    }

    pub fn with_locale_source(mut self, source: impl LocaleSource + 'static) -> Self {
        self.locales = Box::new(source);
        self
    }

    pub fn with_fallback_language(mut self, language: &str) -> Self {
        self.fallback_language = language.to_string();
        self
    }

    pub fn with_default_table(mut self, table: &str) -> Self {
        self.default_table = table.to_string();
        self
    }

    pub fn catalog(&self) -> &ResourceCatalog {
        &self.catalog
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Packaged languages; `exclude_base` drops the `Base` entry.
    pub fn available_languages(&self, exclude_base: bool) -> Vec<String> {
        self.catalog.available_languages(exclude_base)
    }

    /// First preferred platform locale that is packaged, else the fallback
    /// language (`en` unless configured otherwise).
    pub fn default_language(&self) -> String {
        let preferred = self.locales.preferred_locales();
        let available = self.available_languages(false);
        locale::negotiate(&preferred, &available)
            .map(str::to_string)
            .unwrap_or_else(|| self.fallback_language.clone())
    }

    /// The stored language if it is still packaged, otherwise the default.
    /// Never writes.
    pub fn current_language(&self) -> String {
        let stored = self
            .selected
            .get_or_init(|| self.store.get(CURRENT_LANGUAGE_KEY));
        match stored {
            Some(language) if self.catalog.contains(language) => language.clone(),
            Some(language) => {
                tracing::debug!(%language, "stored language is not packaged, using default");
                self.default_language()
            }
            None => self.default_language(),
        }
    }

    /// Selects `language`, or the default language when it is not packaged.
    ///
    /// Persists and notifies only when the selection actually changes. A
    /// failed write is logged; the in-memory selection still changes.
    pub fn set_current_language(&mut self, language: &str) {
        let selected = if self.catalog.contains(language) {
            language.to_string()
        } else {
            let fallback = self.default_language();
            tracing::warn!(
                requested = %language,
                fallback = %fallback,
                "language is not available, using default"
            );
            fallback
        };

        if selected == self.current_language() {
            return;
        }

        if let Err(err) = self.store.set(CURRENT_LANGUAGE_KEY, &selected) {
            tracing::warn!(language = %selected, error = %err, "failed to persist language");
        }
        self.selected = OnceCell::from(Some(selected.clone()));

        tracing::debug!(language = %selected, event = LanguageChanged::NAME, "language changed");
        self.observers.notify();
    }

    pub fn reset_current_language_to_default(&mut self) {
        let default = self.default_language();
        self.set_current_language(&default);
    }

    /// Name of `language` written in the current language, or an empty
    /// string when neither the current bundle nor `Base` provides one.
    pub fn display_name_for_language(&self, language: &str) -> String {
        let id = format!("{}{}", LANGUAGE_NAME_PREFIX, language);
        let current = self.current_language();
        LookupChain::new()
            .with(self.catalog.bundle(&current))
            .with(self.catalog.base())
            .resolve(&id, &self.default_table)
            .unwrap_or_default()
    }

    /// Bundle for the current language, else `Base`, else the main bundle.
    pub fn current_bundle(&self) -> &ResourceBundle {
        self.lookup_chain().first().unwrap_or(self.catalog.main())
    }

    /// Bundles consulted by [`localized`](Self::localized), in order:
    /// current language, `Base`, main.
    pub fn lookup_chain(&self) -> LookupChain<'_> {
        let current = self.current_language();
        LookupChain::new()
            .with(self.catalog.bundle(&current))
            .with(self.catalog.base())
            .with(Some(self.catalog.main()))
    }

    /// Translates `key` through the lookup chain; returns `key` on a miss.
    pub fn localized(&self, key: &str) -> String {
        self.lookup_chain().localized(key, &self.default_table)
    }

    /// Translates `key` in an explicit table and bundle, ignoring the
    /// selected language. `None` means the default table or the main bundle.
    pub fn localized_in(&self, key: &str, table: Option<&str>, bundle: Option<&ResourceBundle>) -> String {
        let bundle = bundle.unwrap_or(self.catalog.main());
        bundle.localized(key, table.unwrap_or(&self.default_table))
    }

    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(LanguageChanged) + 'static,
    {
        self.observers.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    pub fn subscribe_channel(&mut self) -> Receiver<LanguageChanged> {
        self.observers.subscribe_channel()
    }
}

impl<S: PreferenceStore + fmt::Debug> fmt::Debug for LocalizationManager<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocalizationManager")
            .field("catalog", &self.catalog)
            .field("store", &self.store)
            .field("fallback_language", &self.fallback_language)
            .field("default_table", &self.default_table)
            .field("observers", &self.observers)
            .finish_non_exhaustive()
    }
}
