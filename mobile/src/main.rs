use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::{AppNavbar, SiteRoot};
use ui::views::{About, Elsewhere, Home};
use ui::NavTarget;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(MobileNavbar)]
    #[route("/")]
    Home {},
    #[route("/about")]
    About {},
    #[route("/:..segments")]
    External { segments: Vec<String> },
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn nav_link(target: NavTarget, label: &str, class: &str) -> Element {
    rsx!(Link { class: class.to_string(), to: target.path(), "{label}" })
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
        document::Style { "{MAIN_CSS_INLINE}" }

        SiteRoot {
            Router::<Route> {}
        }
    }
}

#[component]
fn MobileNavbar() -> Element {
    let route: Route = use_route();
    rsx! {
        AppNavbar { current: route.to_string() }
        Outlet::<Route> {}
    }
}

#[component]
fn External(segments: Vec<String>) -> Element {
    rsx! {
        Elsewhere { path: format!("/{}", segments.join("/")) }
    }
}
