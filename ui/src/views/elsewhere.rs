use dioxus::prelude::*;

use crate::components::app_navbar::nav_link;
use crate::routes::NavTarget;
use crate::state::use_language;
use crate::t;

/// Stand-in for routes served by other CeylonMine services.
#[component]
pub fn Elsewhere(path: String) -> Element {
    let _language = use_language();
    tracing::debug!(path = %path, "rendering placeholder for external route");

    rsx! {
        section { class: "page page-elsewhere",
            h1 { {t!("elsewhere-title")} }
            p { {t!("elsewhere-text", path = path.clone())} }
            {nav_link(NavTarget::Home, &t!("elsewhere-back"), "button button--primary")}
        }
    }
}
