//! Theme and language preferences.

use serde::{Deserialize, Serialize};

use super::platform::Host;
use super::storage::KeyValueStore;
use crate::config::{LANGUAGE_KEY, THEME_KEY};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// Stored value wins; anything missing or unrecognised falls back to the
    /// system colour-scheme preference.
    pub fn resolve(stored: Option<&str>, system_prefers_dark: bool) -> Self {
        match stored.and_then(Theme::parse) {
            Some(theme) => theme,
            None if system_prefers_dark => Theme::Dark,
            None => Theme::Light,
        }
    }

    /// Modifier class for page roots (`theme-light` / `theme-dark`).
    pub fn css_class(self) -> &'static str {
        match self {
            Theme::Light => "theme-light",
            Theme::Dark => "theme-dark",
        }
    }
}

/// Display languages, in toggle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "si")]
    Sinhala,
    #[serde(rename = "ta")]
    Tamil,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::English, Language::Sinhala, Language::Tamil];

    /// Code persisted under the `language` key.
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Sinhala => "si",
            Language::Tamil => "ta",
        }
    }

    /// Fluent locale folder under `i18n/`.
    pub fn locale(self) -> &'static str {
        match self {
            Language::English => "en-US",
            Language::Sinhala => "si-LK",
            Language::Tamil => "ta-LK",
        }
    }

    /// Short label shown on the navbar toggle.
    pub fn badge(self) -> &'static str {
        match self {
            Language::English => "EN",
            Language::Sinhala => "සි",
            Language::Tamil => "த",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "en" => Some(Language::English),
            "si" => Some(Language::Sinhala),
            "ta" => Some(Language::Tamil),
            _ => None,
        }
    }

    pub fn next(self) -> Self {
        match self {
            Language::English => Language::Sinhala,
            Language::Sinhala => Language::Tamil,
            Language::Tamil => Language::English,
        }
    }

    pub fn resolve(stored: Option<&str>) -> Self {
        stored.and_then(Language::parse).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Preferences {
    pub theme: Theme,
    pub language: Language,
}

impl Preferences {
    /// Derive the current preferences from storage and the system theme.
    ///
    /// Pages call this before their first paint as well, so they never render
    /// with defaults that the broadcaster is about to overwrite.
    pub fn load(store: &dyn KeyValueStore, host: &dyn Host) -> Self {
        // Only consult the host when storage has nothing usable.
        let theme = match store.get(THEME_KEY).as_deref().and_then(Theme::parse) {
            Some(theme) => theme,
            None => Theme::resolve(None, host.prefers_dark()),
        };
        let language = Language::resolve(store.get(LANGUAGE_KEY).as_deref());
        Self { theme, language }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::platform::testing::RecordingHost;
    use crate::core::storage::MemoryStore;

    #[test]
    fn theme_toggle_is_an_involution() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_ne!(theme.toggled(), theme);
            assert_eq!(theme.toggled().toggled(), theme);
        }
    }

    #[test]
    fn theme_resolution_prefers_stored_value() {
        assert_eq!(Theme::resolve(Some("light"), true), Theme::Light);
        assert_eq!(Theme::resolve(Some("dark"), false), Theme::Dark);
        assert_eq!(Theme::resolve(None, true), Theme::Dark);
        assert_eq!(Theme::resolve(None, false), Theme::Light);
        assert_eq!(Theme::resolve(Some("sepia"), true), Theme::Dark);
    }

    #[test]
    fn language_cycle_visits_every_language() {
        for start in Language::ALL {
            let mut seen = vec![start];
            let mut current = start;
            for _ in 0..2 {
                current = current.next();
                seen.push(current);
            }
            seen.sort_by_key(|l| l.code());
            seen.dedup();
            assert_eq!(seen.len(), 3);
            assert_eq!(current.next(), start);
        }
    }

    #[test]
    fn language_codes_parse_back() {
        for language in Language::ALL {
            assert_eq!(Language::parse(language.code()), Some(language));
        }
        assert_eq!(Language::resolve(Some("fr")), Language::English);
        assert_eq!(Language::resolve(None), Language::English);
    }

    #[test]
    fn load_reads_store_then_system_preference() {
        let host = RecordingHost::with_dark_preference(true);

        let empty = MemoryStore::new();
        let prefs = Preferences::load(&empty, &host);
        assert_eq!(prefs.theme, Theme::Dark);
        assert_eq!(prefs.language, Language::English);

        let stored = MemoryStore::with_entries([("theme", "light"), ("language", "ta")]);
        let prefs = Preferences::load(&stored, &host);
        assert_eq!(prefs.theme, Theme::Light);
        assert_eq!(prefs.language, Language::Tamil);
    }
}
