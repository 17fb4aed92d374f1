use dioxus::prelude::*;

use crate::state::{use_site_provider, SiteSignals};

/// Root wrapper every platform mounts around its router.
///
/// Owns the site state and mirrors the theme as a class on the wrapper, so
/// hosts without a DOM root (desktop, mobile) still switch palettes.
#[component]
pub fn SiteRoot(children: Element) -> Element {
    let site = use_site_provider();
    let SiteSignals {
        theme, language, ..
    } = site.signals;

    let class = format!("site {}", theme().css_class());
    let lang = language().code();

    rsx! {
        div {
            class: "{class}",
            lang: "{lang}",
            {children}
        }
    }
}
