use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::{AppNavbar, SiteRoot};
use ui::views::{About, Elsewhere, Home};
use ui::NavTarget;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Home {},
    #[route("/about")]
    About {},
    #[route("/:..segments")]
    External { segments: Vec<String> },
}

/// Home and About route in-app; every other destination is a sibling
/// service on the same origin and needs a full page load.
fn nav_link(target: NavTarget, label: &str, class: &str) -> Element {
    if target.is_local() {
        rsx!(Link {
            class: class.to_string(),
            to: target.path(),
            "{label}"
        })
    } else {
        rsx!(a {
            class: "{class}",
            href: target.path(),
            "{label}"
        })
    }
}

fn go_home() {
    navigator().push(Route::Home {});
}

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("logger already initialised: {err}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    register_nav(NavBuilder {
        link: nav_link,
        go_home,
    });

    rsx! {
        document::Title { "CeylonMine" }
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }

        SiteRoot {
            Router::<Route> {}
        }
    }
}

/// Web layout: the shared navbar above the routed page.
#[component]
fn WebNavbar() -> Element {
    let route: Route = use_route();
    rsx! {
        AppNavbar { current: route.to_string() }
        Outlet::<Route> {}
    }
}

/// Reached only by typing a sibling service's path while its deployment is
/// missing.
#[component]
fn External(segments: Vec<String>) -> Element {
    rsx! {
        Elsewhere { path: format!("/{}", segments.join("/")) }
    }
}
