use dioxus::prelude::*;

use crate::components::app_navbar::nav_link;
use crate::components::slider::{FeatureSlider, HeroSlider};
use crate::components::SiteFooter;
use crate::content::{Pillar, Service};
use crate::state::use_language;
use crate::t;

/// Landing page: hero, services grid, feature slider and the commitment band.
#[component]
pub fn Home() -> Element {
    let _language = use_language();

    rsx! {
        div { class: "page page-home",
            HeroSlider {}

            section { class: "services",
                h2 { class: "section-title", {t!("home-services-title")} }
                p { class: "section-lead", {t!("home-services-text")} }
                div { class: "services__grid",
                    for service in Service::ALL {
                        ServiceCard { key: "{service.target().path()}", service }
                    }
                }
            }

            FeatureSlider {}

            section { class: "commitment",
                h2 { class: "section-title", {t!("home-commitment-title")} }
                p { class: "section-lead", {t!("home-commitment-text")} }
                div { class: "pillars",
                    for pillar in Pillar::ALL {
                        div { key: "{pillar.icon()}", class: "pillar",
                            span { class: "pillar__icon", "{pillar.icon()}" }
                            h3 { class: "pillar__title", {pillar.title()} }
                            p { class: "pillar__text", "{pillar.description()}" }
                        }
                    }
                }
            }

            SiteFooter {}
        }
    }
}

#[component]
fn ServiceCard(service: Service) -> Element {
    let _language = use_language();

    rsx! {
        article { class: format!("service-card {}", service.accent()),
            span { class: "service-card__icon", "{service.icon()}" }
            h3 { class: "service-card__title", {service.title()} }
            p { class: "service-card__text", {service.description()} }
            {nav_link(service.target(), &t!("home-access-service"), "button button--primary service-card__cta")}
        }
    }
}
