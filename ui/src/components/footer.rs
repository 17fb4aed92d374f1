use dioxus::prelude::*;
use time::OffsetDateTime;

use crate::components::app_navbar::nav_link;
use crate::config::BRAND;
use crate::routes::NavTarget;
use crate::state::use_language;
use crate::t;

#[component]
pub fn SiteFooter() -> Element {
    let _language = use_language();
    let year = OffsetDateTime::now_utc().year().to_string();

    rsx! {
        footer { class: "site-footer",
            div { class: "site-footer__inner",
                span { class: "site-footer__brand", "{BRAND}" }
                nav { class: "site-footer__links",
                    {nav_link(NavTarget::About, &NavTarget::About.label(), "site-footer__link")}
                    {nav_link(NavTarget::Contact, &NavTarget::Contact.label(), "site-footer__link")}
                }
                p { class: "site-footer__rights", {t!("footer-rights", year = year)} }
            }
        }
    }
}
