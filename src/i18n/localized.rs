// SPDX-License-Identifier: MPL-2.0
//! `"key".localized(&manager)` sugar over the manager's lookups.

use super::bundle::ResourceBundle;
use super::manager::LocalizationManager;
use crate::preferences::PreferenceStore;

pub trait Localized {
    /// Translation in the manager's current language, or `self` on a miss.
    fn localized<S: PreferenceStore>(&self, manager: &LocalizationManager<S>) -> String;

    /// Translation from an explicit table and bundle, or `self` on a miss.
    fn localized_in<S: PreferenceStore>(
        &self,
        manager: &LocalizationManager<S>,
        table: Option<&str>,
        bundle: Option<&ResourceBundle>,
    ) -> String;
}

impl Localized for str {
    fn localized<S: PreferenceStore>(&self, manager: &LocalizationManager<S>) -> String {
        manager.localized(self)
    }

    fn localized_in<S: PreferenceStore>(
        &self,
        manager: &LocalizationManager<S>,
        table: Option<&str>,
        bundle: Option<&ResourceBundle>,
    ) -> String {
        manager.localized_in(self, table, bundle)
    }
}
