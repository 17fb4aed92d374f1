//! Internationalization (i18n) support for `ceylonmine-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (language selection + asset loading)
//! - `fluent` (message formatting)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/ceylonmine-ui.ftl   (fallback/reference)
//!   si-LK/ceylonmine-ui.ftl   (Sinhala)
//!   ta-LK/ceylonmine-ui.ftl   (Tamil)
//! ```
//!
//! Unlike a locale-negotiating app, the active language is a user preference
//! persisted by the navbar (`core::prefs::Language`), so `init()` always
//! starts from the fallback and the shell calls `apply()` with the stored
//! preference before the first render.
//!
//! Usage in a component:
//! ```ignore
//! use crate::t;
//! let home_label = t!("nav-home");
//! ```
//!
//! NOTE: The hyphenated filename `ceylonmine-ui.ftl` is canonical across all locales.
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::LanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

use crate::core::prefs::Language;

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Ergonomic translation macro.
/// Examples:
///     t!("nav-home")
///     t!("footer-rights", year = 2025)
///
/// This expands to `fl!(&*LOADER, ...)` keeping callsites short while
/// ensuring all lookups route through the shared loader.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent "domain" (matches the crate / the fallback FTL filename).
const DOMAIN: &str = "ceylonmine-ui";

const FALLBACK: &str = "en-US";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Global language loader used with the `fl!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = FALLBACK
        .parse()
        .expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Initialize i18n with the fallback locale (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let fallback = LOADER.fallback_language().clone();
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &[fallback]) {
            tracing::error!("[i18n] failed loading fallback bundle: {err}");
        }
    });
}

/// Switch language at runtime. If `tag` cannot be parsed it is ignored (Ok returned).
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let lang: LanguageIdentifier = match tag.parse() {
        Ok(l) => l,
        Err(_) => return Ok(()), // Silently ignore invalid tags.
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang]).map(|_| ())
}

/// Make `language` the active bundle. Failures keep the previous bundle.
pub fn apply(language: Language) {
    init();
    match set_language(language.locale()) {
        Ok(()) => tracing::debug!("[i18n] active locale {}", language.locale()),
        Err(err) => tracing::warn!("[i18n] could not switch to {}: {err}", language.locale()),
    }
}

/// Serializes tests that switch the global loader's active bundle.
#[cfg(test)]
pub(crate) fn test_lock() -> std::sync::MutexGuard<'static, ()> {
    static LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
    LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// List available (embedded) language identifiers.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fl;

    #[test]
    fn every_language_has_an_embedded_bundle() {
        let available = available_languages();
        for language in Language::ALL {
            assert!(
                available.iter().any(|l| l == language.locale()),
                "missing bundle for {}",
                language.locale()
            );
        }
    }

    #[test]
    fn basic_lookup_works() {
        let _guard = test_lock();
        init();
        let s = fl!(&*LOADER, "nav-home");
        assert!(!s.is_empty());
    }

    #[test]
    fn dynamic_language_switch_reverts_on_failure() {
        let _guard = test_lock();
        init();
        let before = fl!(&*LOADER, "nav-home");
        let _ = set_language("zz-ZZ");
        let after = fl!(&*LOADER, "nav-home");
        assert_eq!(before, after);
    }
}
