use crate::config::{BRAND, SCROLL_THRESHOLD_PX};
use crate::core::prefs::Theme;
use crate::routes::NavTarget;
use crate::state::{use_site, SiteSignals};
use crate::t;
use dioxus::prelude::*;
use once_cell::sync::OnceCell;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Platforms register a `NavBuilder` so the shared navbar can emit their own
/// router links without `ui` knowing each platform's `Route` enum.
///
/// `link` receives the destination, its localized label and the CSS class to
/// put on the anchor. `go_home` is used after a logout when the host could
/// not perform a full-page redirect (desktop, mobile).
///
/// Without a builder every destination renders as a plain `a { href }`.
///
/// ```ignore
/// use ui::components::app_navbar::{NavBuilder, register_nav};
/// register_nav(NavBuilder {
///     link: |target, label, class| rsx!( Link { class, to: target.path(), "{label}" } ),
///     go_home: || { navigator().push(Route::Home {}); },
/// });
/// ```
pub struct NavBuilder {
    pub link: fn(target: NavTarget, label: &str, class: &str) -> Element,
    pub go_home: fn(),
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

/// Render a link to `target` through the registered builder.
pub fn nav_link(target: NavTarget, label: &str, class: &str) -> Element {
    match NAV_BUILDER.get() {
        Some(builder) => (builder.link)(target, label, class),
        None => rsx! {
            a { class: "{class}", href: target.path(), "{label}" }
        },
    }
}

fn go_home() {
    if let Some(builder) = NAV_BUILDER.get() {
        (builder.go_home)();
    }
}

/// Tracks whether the page has scrolled past the navbar's threshold.
fn use_scrolled() -> Signal<bool> {
    let mut scrolled = use_signal(|| false);
    use_future(move || async move {
        let script = format!(
            "let last = null;\n\
             const report = () => {{\n\
               const past = window.scrollY > {SCROLL_THRESHOLD_PX};\n\
               if (past !== last) {{ last = past; dioxus.send(past); }}\n\
             }};\n\
             window.addEventListener('scroll', report, {{ passive: true }});\n\
             report();\n\
             await new Promise(() => {{}});"
        );
        let mut eval = document::eval(&script);
        loop {
            match eval.recv::<bool>().await {
                Ok(past) => scrolled.set(past),
                Err(err) => {
                    tracing::debug!("scroll tracking stopped: {err:?}");
                    break;
                }
            }
        }
    });
    scrolled
}

/// Site-wide navigation bar.
///
/// `current` is the active route path; on the home page the bar stays
/// transparent over the hero until the page scrolls.
#[component]
pub fn AppNavbar(current: String) -> Element {
    let site = use_site();
    let SiteSignals {
        theme,
        language,
        auth,
    } = site.signals;

    let scrolled = use_scrolled();
    let mut menu_open = use_signal(|| false);
    let mut profile_open = use_signal(|| false);

    let active = NavTarget::from_path(&current);
    let on_home = active == Some(NavTarget::Home);
    let transparent = on_home && !scrolled();

    let mut classes = vec!["navbar"];
    if transparent {
        classes.push("navbar--transparent");
    }
    if menu_open() {
        classes.push("navbar--menu-open");
    }
    let header_class = classes.join(" ");

    let badge = language().badge();
    let theme_now = theme();
    let auth_now = auth();

    let theme_site = site.clone();
    let language_site = site.clone();
    let logout_site = site.clone();

    let links = NavTarget::PRIMARY.into_iter().map(move |target| {
        let class = if active == Some(target) {
            "navbar__link navbar__link--active"
        } else {
            "navbar__link"
        };
        rsx! {
            li {
                key: "{target.path()}",
                onclick: move |_| menu_open.set(false),
                {nav_link(target, &target.label(), class)}
            }
        }
    });

    let account = match auth_now.profile() {
        Some(profile) => {
            let name = profile
                .display_name()
                .map(str::to_string)
                .unwrap_or_else(|| t!("auth-profile"));
            let initial: String = name.chars().take(1).flat_map(char::to_uppercase).collect();
            let email = profile.email.clone();
            let dashboard = profile.can_access_dashboard();
            rsx! {
                div { class: "navbar__profile",
                    button {
                        class: "navbar__avatar",
                        title: "{name}",
                        aria_expanded: "{profile_open()}",
                        onclick: move |_| profile_open.set(!profile_open()),
                        span { class: "navbar__avatar-initial", "{initial}" }
                        span { class: "navbar__avatar-name", "{name}" }
                    }
                    if profile_open() {
                        div {
                            class: "navbar__backdrop",
                            onclick: move |_| profile_open.set(false),
                        }
                        div { class: "navbar__dropdown",
                            p { class: "navbar__dropdown-name", "{name}" }
                            if let Some(email) = email {
                                p { class: "navbar__dropdown-email", "{email}" }
                            }
                            if dashboard {
                                div { onclick: move |_| profile_open.set(false),
                                    {nav_link(NavTarget::Dashboard, &t!("auth-dashboard"), "navbar__dropdown-link")}
                                }
                            }
                            button {
                                class: "navbar__dropdown-link navbar__dropdown-link--logout",
                                onclick: move |_| {
                                    profile_open.set(false);
                                    menu_open.set(false);
                                    if !logout_site.logout() {
                                        go_home();
                                    }
                                },
                                {t!("auth-logout")}
                            }
                        }
                    }
                }
            }
        }
        None => nav_link(NavTarget::SignIn, &t!("auth-signup"), "navbar__cta"),
    };

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header { id: "navbar", class: "{header_class}",
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    {nav_link(NavTarget::Home, BRAND, "navbar__brand-mark")}
                    span { class: "navbar__brand-subtitle", {t!("nav-brand-subtitle")} }
                }

                nav { class: "navbar__links",
                    ul { class: "navbar__list", {links} }
                }

                div { class: "navbar__actions",
                    button {
                        class: "navbar__toggle navbar__toggle--language",
                        title: t!("nav-language-title"),
                        onclick: move |_| language_site.toggle_language(),
                        "{badge}"
                    }
                    button {
                        class: "navbar__toggle navbar__toggle--theme",
                        title: t!("nav-theme-title"),
                        onclick: move |_| theme_site.toggle_theme(),
                        ThemeIcon { theme: theme_now }
                    }
                    {account}
                    button {
                        class: "navbar__menu-button",
                        aria_label: t!("nav-menu-label"),
                        aria_expanded: "{menu_open()}",
                        onclick: move |_| menu_open.set(!menu_open()),
                        span { class: "navbar__menu-bar" }
                        span { class: "navbar__menu-bar" }
                        span { class: "navbar__menu-bar" }
                    }
                }
            }
        }
    }
}

/// Sun while dark (switches to light), moon while light.
#[component]
fn ThemeIcon(theme: Theme) -> Element {
    if theme.is_dark() {
        rsx! {
            svg {
                class: "navbar__icon",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                circle { cx: "12", cy: "12", r: "5" }
                path { d: "M12 1v2M12 21v2M4.22 4.22l1.42 1.42M18.36 18.36l1.42 1.42M1 12h2M21 12h2M4.22 19.78l1.42-1.42M18.36 5.64l1.42-1.42" }
            }
        }
    } else {
        rsx! {
            svg {
                class: "navbar__icon",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                path { d: "M21 12.79A9 9 0 1 1 11.21 3 7 7 0 0 0 21 12.79z" }
            }
        }
    }
}
