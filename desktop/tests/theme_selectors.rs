#![cfg(test)]
/*!
Theme selector lint for the desktop build.

The desktop shell embeds `ui/assets/theme/main.css` with `include_str!`, so a
renamed or dropped selector only shows up as unstyled markup at runtime. This
test keeps the selectors the shared components rely on present.

If you rename a selector, update the component markup and REQUIRED_SELECTORS
together.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

/// Core selectors / tokens that must exist in the shared theme for desktop.
const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".site {",
    ".page {",
    // Theme palettes (document root class on web, wrapper class on desktop)
    ".dark,",
    ".theme-dark {",
    // Buttons
    ".button {",
    ".button--primary",
    ".button--accent",
    ".button--ghost",
    // Carousels
    ".hero__slide",
    ".slide--active",
    ".slide--before",
    ".slide--after",
    ".slider-controls__dot--active",
    ".feature-slider__image",
    // Landing sections
    ".services__grid",
    ".service-card",
    ".service-card--blue",
    ".service-card--red",
    ".pillars",
    // About page
    ".about-card",
    ".team-card",
    ".team-card__socials",
    // Footer & placeholder
    ".site-footer",
    ".page-elsewhere",
    // Media query token (sanity check responsive block exists)
    "@media (max-width: 720px)",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let mut missing = Vec::new();
    for sel in REQUIRED_SELECTORS {
        if !THEME_CSS.contains(sel) {
            missing.push(*sel);
        }
    }

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in unified theme:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 4_000,
        "Embedded theme appears unexpectedly small ({} non-whitespace chars) – \
         did the file get truncated or path change?",
        non_ws_len
    );
}

#[test]
fn every_service_accent_has_a_palette() {
    for accent in ["blue", "green", "orange", "yellow", "red"] {
        let selector = format!(".service-card--{accent}");
        assert!(
            THEME_CSS.contains(&selector),
            "Missing service accent selector {selector}"
        );
    }
}
