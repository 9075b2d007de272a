// SPDX-License-Identifier: MPL-2.0
//! A resource bundle: the string tables packaged for one language.

use crate::error::{ResourceError, Result};
use fluent_bundle::{FluentBundle, FluentResource};
use std::collections::HashMap;
use std::fmt;
use unic_langid::LanguageIdentifier;

/// Which slot of the catalog a bundle occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BundleKind {
    /// Tables for one language identifier.
    Language,
    /// The synthetic `Base` bundle.
    Base,
    /// Tables packaged at the resource root, used when nothing else exists.
    Main,
}

/// Named string tables for one language.
pub struct ResourceBundle {
    name: String,
    kind: BundleKind,
    locale: LanguageIdentifier,
    tables: HashMap<String, FluentBundle<FluentResource>>,
}

impl ResourceBundle {
    pub fn new(name: impl Into<String>, kind: BundleKind) -> Self {
        let name = name.into();
        let locale = name.parse().unwrap_or_default();
        Self {
            name,
            kind,
            locale,
            tables: HashMap::new(),
        }
    }

    /// Bundle name: the language identifier, `Base`, or `main`.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> BundleKind {
        self.kind
    }

    pub fn has_table(&self, table: &str) -> bool {
        self.tables.contains_key(table)
    }

    pub fn table_names(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    /// Parses `source` as Fluent and adds its messages to `table`.
    ///
    /// Adding to an existing table merges; redefining a message is an error.
    pub fn add_table(&mut self, table: &str, source: String) -> Result<()> {
        let qualified = format!("{}/{}", self.name, table);
        let resource = FluentResource::try_new(source).map_err(|(_, errors)| ResourceError::Parse {
            table: qualified.clone(),
            message: join_errors(&errors),
        })?;

        let locale = self.locale.clone();
        let bundle = self.tables.entry(table.to_string()).or_insert_with(|| {
            let mut bundle = FluentBundle::new(vec![locale]);
            bundle.set_use_isolating(false);
            bundle
        });

        bundle.add_resource(resource).map_err(|errors| ResourceError::Conflict {
            table: qualified,
            message: join_errors(&errors),
        })?;
        Ok(())
    }

    /// Looks `key` up in `table`. `None` when the table or message is
    /// missing, or when the message does not format cleanly.
    ///
    /// Keys are Fluent message identifiers (`[a-zA-Z][a-zA-Z0-9_-]*`, e.g.
    /// `global-cooling`); any other text, such as `Global cooling`, can never
    /// match and comes back unchanged from [`localized`](Self::localized).
    pub fn localized_string(&self, key: &str, table: &str) -> Option<String> {
        let bundle = self.tables.get(table)?;
        let message = bundle.get_message(key)?;
        let pattern = message.value()?;
        let mut errors = vec![];
        let value = bundle.format_pattern(pattern, None, &mut errors);
        if errors.is_empty() {
            Some(value.into_owned())
        } else {
            None
        }
    }

    /// Like [`localized_string`](Self::localized_string), returning `key`
    /// itself on a miss.
    pub fn localized(&self, key: &str, table: &str) -> String {
        self.localized_string(key, table)
            .unwrap_or_else(|| key.to_string())
    }
}

fn join_errors<E: fmt::Display>(errors: &[E]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl fmt::Debug for ResourceBundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tables: Vec<&str> = self.table_names().collect();
        tables.sort_unstable();
        f.debug_struct("ResourceBundle")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("tables", &tables)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn french() -> ResourceBundle {
        let mut bundle = ResourceBundle::new("fr", BundleKind::Language);
        bundle
            .add_table("Localizable", "global-cooling = Refroidissement global\n".to_string())
            .expect("valid ftl");
        bundle
    }

    #[test]
    fn lookup_returns_translation() {
        let bundle = french();
        assert_eq!(
            bundle.localized_string("global-cooling", "Localizable").as_deref(),
            Some("Refroidissement global")
        );
    }

    #[test]
    fn missing_key_returns_key() {
        let bundle = french();
        assert_eq!(bundle.localized("Global cooling", "Localizable"), "Global cooling");
        assert_eq!(bundle.localized("missing-key", "Localizable"), "missing-key");
    }

    #[test]
    fn missing_table_returns_none() {
        let bundle = french();
        assert!(bundle.localized_string("global-cooling", "Other").is_none());
    }

    #[test]
    fn tables_are_independent() {
        let mut bundle = french();
        bundle
            .add_table("Errors", "global-cooling = autre\n".to_string())
            .expect("separate tables may reuse ids");
        assert_eq!(bundle.localized("global-cooling", "Errors"), "autre");
        assert_eq!(bundle.localized("global-cooling", "Localizable"), "Refroidissement global");
    }

    #[test]
    fn invalid_ftl_is_a_parse_error() {
        let mut bundle = ResourceBundle::new("fr", BundleKind::Language);
        let err = bundle
            .add_table("Localizable", "= no id\n".to_string())
            .unwrap_err();
        assert!(matches!(err, Error::Resource(ResourceError::Parse { .. })));
    }

    #[test]
    fn redefinition_is_a_conflict() {
        let mut bundle = french();
        let err = bundle
            .add_table("Localizable", "global-cooling = encore\n".to_string())
            .unwrap_err();
        assert!(matches!(err, Error::Resource(ResourceError::Conflict { .. })));
    }

    #[test]
    fn message_without_value_is_a_miss() {
        let mut bundle = ResourceBundle::new("en", BundleKind::Language);
        bundle
            .add_table("Localizable", "only-attr =\n    .title = Title\n".to_string())
            .expect("valid ftl");
        assert_eq!(bundle.localized("only-attr", "Localizable"), "only-attr");
    }

    #[test]
    fn base_bundle_keeps_its_name() {
        let bundle = ResourceBundle::new("Base", BundleKind::Base);
        assert_eq!(bundle.kind(), BundleKind::Base);
        assert_eq!(bundle.name(), "Base");
    }
}
