//! Landing page carousels.

use dioxus::prelude::*;

use crate::config::HERO_INTERVAL_MS;
use crate::content::{FEATURES, HERO_SLIDES};
use crate::core::carousel::Carousel;
use crate::core::timing;
use crate::state::use_language;
use crate::t;

/// Full-bleed rotating hero. Advances on its own and from the controls.
#[component]
pub fn HeroSlider() -> Element {
    let _language = use_language();
    let mut cursor = use_signal(|| Carousel::new(HERO_SLIDES.len()));

    use_future(move || async move {
        loop {
            timing::sleep_ms(HERO_INTERVAL_MS).await;
            cursor.with_mut(|c| {
                c.next();
            });
        }
    });

    let current = cursor();
    let slide = &HERO_SLIDES[current.index()];

    rsx! {
        section { class: "hero",
            for (i, s) in HERO_SLIDES.iter().enumerate() {
                div {
                    key: "{i}",
                    class: format!("hero__slide {}", current.offset_of(i).css_modifier()),
                    style: "background-image: url('{s.image}')",
                }
            }
            div { class: "hero__overlay" }
            div { class: "hero__content",
                h1 { class: "hero__title", "{slide.title}" }
                p { class: "hero__description", "{slide.description}" }
                p { class: "hero__subtitle", {t!("home-hero-subtitle")} }
            }
            SliderControls {
                len: current.len(),
                active: current.index(),
                on_prev: move |_| {
                    cursor.with_mut(|c| {
                        c.prev();
                    });
                },
                on_next: move |_| {
                    cursor.with_mut(|c| {
                        c.next();
                    });
                },
                on_jump: move |i| {
                    cursor.with_mut(|c| {
                        c.jump(i);
                    });
                },
            }
        }
    }
}

#[component]
pub fn FeatureSlider() -> Element {
    let _language = use_language();
    let mut cursor = use_signal(|| Carousel::new(FEATURES.len()));
    let current = cursor();
    let feature = &FEATURES[current.index()];
    let counter = format!("{:02} / {:02}", current.index() + 1, current.len());

    rsx! {
        section { class: "feature-slider",
            div { class: "feature-slider__media",
                for (i, f) in FEATURES.iter().enumerate() {
                    img {
                        key: "{f.id}",
                        class: format!("feature-slider__image {}", current.offset_of(i).css_modifier()),
                        src: "{f.image}",
                        alt: "{f.title}",
                    }
                }
            }
            div { class: "feature-slider__body",
                span { class: "feature-slider__counter", "{counter}" }
                h2 { class: "feature-slider__title", "{feature.title}" }
                h3 { class: "feature-slider__subtitle", "{feature.subtitle}" }
                p { class: "feature-slider__description", "{feature.description}" }
                SliderControls {
                    len: current.len(),
                    active: current.index(),
                    on_prev: move |_| {
                        cursor.with_mut(|c| {
                            c.prev();
                        });
                    },
                    on_next: move |_| {
                        cursor.with_mut(|c| {
                            c.next();
                        });
                    },
                    on_jump: move |i| {
                        cursor.with_mut(|c| {
                            c.jump(i);
                        });
                    },
                }
            }
        }
    }
}

/// Prev/next arrows plus one dot per slide.
#[component]
fn SliderControls(
    len: usize,
    active: usize,
    on_prev: EventHandler<()>,
    on_next: EventHandler<()>,
    on_jump: EventHandler<usize>,
) -> Element {
    let _language = use_language();

    rsx! {
        div { class: "slider-controls",
            button {
                class: "slider-controls__arrow",
                aria_label: t!("slider-prev"),
                onclick: move |_| on_prev.call(()),
                "‹"
            }
            div { class: "slider-controls__dots",
                for i in 0..len {
                    button {
                        key: "{i}",
                        class: if i == active { "slider-controls__dot slider-controls__dot--active" } else { "slider-controls__dot" },
                        aria_label: goto_label(i + 1),
                        onclick: move |_| on_jump.call(i),
                    }
                }
            }
            button {
                class: "slider-controls__arrow",
                aria_label: t!("slider-next"),
                onclick: move |_| on_next.call(()),
                "›"
            }
        }
    }
}

/// Accessible label for the dot that jumps to slide `number` (1-based).
fn goto_label(number: usize) -> String {
    t!("slider-goto", number = number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n;

    #[test]
    fn dot_labels_carry_the_one_based_slide_number() {
        let _guard = i18n::test_lock();
        i18n::init();
        let label = goto_label(3);
        assert!(label.contains('3'), "{label}");
        assert_ne!(goto_label(3), goto_label(4));
    }
}
