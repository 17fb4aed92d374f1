use dioxus::prelude::*;

use crate::components::app_navbar::nav_link;
use crate::components::SiteFooter;
use crate::content::{SocialLink, TeamMember, ABOUT_CARDS, TEAM};
use crate::routes::NavTarget;
use crate::state::use_language;
use crate::t;

const TEAM_INTRO: &str = "Meet the team behind CeylonMine: engineers, designers and analysts working to bring Sri Lanka's mining sector into the digital age.";
const CTA_TITLE: &str = "Ready to modernize your mining operations?";
const CTA_TEXT: &str = "Join the growing number of mining operators and government officials using CeylonMine for licensing, royalties and compliance.";

#[component]
pub fn About() -> Element {
    let _language = use_language();

    rsx! {
        div { class: "page page-about",
            section { class: "about-hero",
                h1 { class: "about-hero__title", {t!("nav-about")} " CeylonMine" }
                p { class: "section-lead", {t!("home-commitment-text")} }
            }

            section { class: "about-cards",
                for card in ABOUT_CARDS.iter() {
                    article { key: "{card.title}", class: "about-card",
                        span { class: "about-card__icon", "{card.icon}" }
                        h2 { class: "about-card__title", "{card.title}" }
                        p { class: "about-card__text", "{card.body}" }
                    }
                }
            }

            section { class: "team",
                h2 { class: "section-title", "Our Team" }
                p { class: "section-lead", "{TEAM_INTRO}" }
                div { class: "team__grid",
                    for member in TEAM.iter() {
                        TeamCard { key: "{member.id}", member }
                    }
                }
            }

            section { class: "about-cta",
                h2 { class: "about-cta__title", "{CTA_TITLE}" }
                p { class: "about-cta__text", "{CTA_TEXT}" }
                div { class: "about-cta__actions",
                    {nav_link(NavTarget::SignIn, &t!("auth-signup"), "button button--primary")}
                    {nav_link(NavTarget::Contact, &t!("nav-contact"), "button button--ghost")}
                }
            }

            SiteFooter {}
        }
    }
}

#[component]
fn TeamCard(member: &'static TeamMember) -> Element {
    let TeamMember {
        name,
        position,
        image,
        bio,
        socials,
        ..
    } = member;

    rsx! {
        article { class: "team-card",
            img { class: "team-card__photo", src: "{image}", alt: "{name}" }
            div { class: "team-card__body",
                h3 { class: "team-card__name", "{name}" }
                p { class: "team-card__position", "{position}" }
                p { class: "team-card__bio", "{bio}" }
                div { class: "team-card__socials",
                    for SocialLink { platform, url } in socials.iter() {
                        a {
                            key: "{platform.label()}",
                            class: "team-card__social",
                            href: "{url}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            aria_label: "{platform.label()}",
                            svg { view_box: "0 0 24 24", fill: "currentColor",
                                path { d: "{platform.icon_path()}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
