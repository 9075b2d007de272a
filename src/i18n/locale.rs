// SPDX-License-Identifier: MPL-2.0
//! Platform locale preferences and matching them against packaged languages.

use crate::config::BASE_BUNDLE;
use unic_langid::LanguageIdentifier;

/// Supplies the user's preferred locales, most preferred first.
pub trait LocaleSource {
    fn preferred_locales(&self) -> Vec<String>;
}

/// Reads the operating system's locale list.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLocales;

impl LocaleSource for SystemLocales {
    fn preferred_locales(&self) -> Vec<String> {
        sys_locale::get_locales().collect()
    }
}

/// A fixed preference list.
#[derive(Debug, Default, Clone)]
pub struct FixedLocales(pub Vec<String>);

impl FixedLocales {
    pub fn new<I, S>(locales: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(locales.into_iter().map(Into::into).collect())
    }
}

impl LocaleSource for FixedLocales {
    fn preferred_locales(&self) -> Vec<String> {
        self.0.clone()
    }
}

/// Returns the first preferred locale that a packaged language satisfies.
///
/// For each preferred locale in order, an exact match wins (`fr-CA` picks
/// `fr-CA`), then a match on the primary language (`fr-CA` picks `fr`).
/// A primary-language match never crosses scripts when both tags name one
/// (`zh-Hant` does not pick `zh-Hans`). `Base` never matches.
pub fn negotiate<'a>(preferred: &[String], available: &'a [String]) -> Option<&'a str> {
    let candidates: Vec<(&'a str, Option<LanguageIdentifier>)> = available
        .iter()
        .filter(|language| language.as_str() != BASE_BUNDLE)
        .map(|language| (language.as_str(), language.parse().ok()))
        .collect();

    for wanted in preferred {
        let parsed: Option<LanguageIdentifier> = wanted.parse().ok();

        let exact = candidates.iter().find(|(code, id)| {
            *code == wanted.as_str() || (parsed.is_some() && id.is_some() && *id == parsed)
        });
        if let Some((code, _)) = exact {
            return Some(*code);
        }

        let Some(parsed) = parsed else {
            continue;
        };
        let same_language = candidates.iter().find(|(_, id)| {
            id.as_ref().is_some_and(|id| {
                id.language == parsed.language
                    && (id.script.is_none() || parsed.script.is_none() || id.script == parsed.script)
            })
        });
        if let Some((code, _)) = same_language {
            return Some(*code);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn exact_match_is_found() {
        let available = strings(&["en", "fr", "Base"]);
        assert_eq!(negotiate(&strings(&["fr"]), &available), Some("fr"));
    }

    #[test]
    fn no_match_returns_none() {
        let available = strings(&["en", "de", "Base"]);
        assert_eq!(negotiate(&strings(&["fr"]), &available), None);
    }

    #[test]
    fn preference_order_wins_over_available_order() {
        let available = strings(&["de", "en", "fr"]);
        assert_eq!(negotiate(&strings(&["fr", "en"]), &available), Some("fr"));
    }

    #[test]
    fn later_preference_used_when_first_unavailable() {
        let available = strings(&["de", "en"]);
        assert_eq!(negotiate(&strings(&["ja", "de"]), &available), Some("de"));
    }

    #[test]
    fn region_falls_back_to_primary_language() {
        let available = strings(&["en", "fr"]);
        assert_eq!(negotiate(&strings(&["fr-CA"]), &available), Some("fr"));
    }

    #[test]
    fn exact_region_preferred_over_primary_language() {
        let available = strings(&["pt", "pt-BR"]);
        assert_eq!(negotiate(&strings(&["pt-BR"]), &available), Some("pt-BR"));
    }

    #[test]
    fn primary_language_match_respects_script() {
        let available = strings(&["en", "zh-Hans"]);
        assert_eq!(negotiate(&strings(&["zh-Hant-TW"]), &available), None);
        assert_eq!(negotiate(&strings(&["zh-Hans-CN"]), &available), Some("zh-Hans"));
        assert_eq!(negotiate(&strings(&["zh"]), &available), Some("zh-Hans"));

        let with_both = strings(&["zh-Hans", "zh-Hant"]);
        assert_eq!(negotiate(&strings(&["zh-Hant-HK"]), &with_both), Some("zh-Hant"));
    }

    #[test]
    fn case_and_separator_are_normalized() {
        let available = strings(&["en-US"]);
        assert_eq!(negotiate(&strings(&["en_us"]), &available), Some("en-US"));
    }

    #[test]
    fn base_never_matches() {
        let available = strings(&["Base"]);
        assert_eq!(negotiate(&strings(&["Base"]), &available), None);
    }

    #[test]
    fn empty_preferences_return_none() {
        let available = strings(&["en"]);
        assert_eq!(negotiate(&[], &available), None);
    }

    #[test]
    fn fixed_locales_report_their_list() {
        let source = FixedLocales::new(["fr", "en"]);
        assert_eq!(source.preferred_locales(), strings(&["fr", "en"]));
    }
}
