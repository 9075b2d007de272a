// SPDX-License-Identifier: MPL-2.0
//! Layered string lookup: an ordered list of bundles tried in turn, with the
//! literal key as the last resort.

use super::bundle::ResourceBundle;

#[derive(Debug, Default, Clone)]
pub struct LookupChain<'a> {
    sources: Vec<&'a ResourceBundle>,
}

impl<'a> LookupChain<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `bundle` unless it is already in the chain.
    pub fn push(&mut self, bundle: &'a ResourceBundle) {
        if !self.sources.iter().any(|existing| std::ptr::eq(*existing, bundle)) {
            self.sources.push(bundle);
        }
    }

    pub fn with(mut self, bundle: Option<&'a ResourceBundle>) -> Self {
        if let Some(bundle) = bundle {
            self.push(bundle);
        }
        self
    }

    /// The bundle consulted first.
    pub fn first(&self) -> Option<&'a ResourceBundle> {
        self.sources.first().copied()
    }

    pub fn sources(&self) -> &[&'a ResourceBundle] {
        &self.sources
    }

    /// First translation of `key` in `table` along the chain.
    pub fn resolve(&self, key: &str, table: &str) -> Option<String> {
        self.sources
            .iter()
            .find_map(|bundle| bundle.localized_string(key, table))
    }

    /// Like [`resolve`](Self::resolve), returning `key` on a miss.
    pub fn localized(&self, key: &str, table: &str) -> String {
        self.resolve(key, table).unwrap_or_else(|| key.to_string())
    }
}
