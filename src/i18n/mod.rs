// SPDX-License-Identifier: MPL-2.0
//! Language selection and string lookup.
//!
//! This module decides which packaged language answers lookups and turns
//! keys into translated strings using Fluent string tables.
//!
//! # Features
//!
//! - Language selection persisted in a preference store
//! - Default language negotiated from the operating system's locale list
//! - Bundle fallback: selected language, then `Base`, then the main bundle
//! - `languageChanged` notification for observers and channels
//! - Missing translations return the key unchanged
//!
//! # Examples
//!
//! ```no_run
//! use localizable::i18n::{Localized, LocalizationManager, ResourceCatalog};
//! use localizable::preferences::TomlPreferenceStore;
//!
//! let catalog = ResourceCatalog::embedded().expect("embedded tables are valid");
//! let store = TomlPreferenceStore::open_default().expect("config dir");
//! let mut manager = LocalizationManager::new(catalog, store);
//!
//! let changes = manager.subscribe_channel();
//! manager.set_current_language("fr");
//! if changes.try_recv().is_ok() {
//!     println!("{}", "global-cooling".localized(&manager));
//! }
//! ```

pub mod bundle;
pub mod catalog;
pub mod events;
pub mod locale;
pub mod localized;
pub mod lookup;
pub mod manager;

pub use bundle::{BundleKind, ResourceBundle};
pub use catalog::ResourceCatalog;
pub use events::{LanguageChanged, SubscriptionId, LANGUAGE_CHANGED};
pub use locale::{FixedLocales, LocaleSource, SystemLocales};
pub use localized::Localized;
pub use lookup::LookupChain;
pub use manager::LocalizationManager;
