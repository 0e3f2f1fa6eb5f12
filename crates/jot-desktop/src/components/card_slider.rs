//! Landing page card slider

use dioxus::prelude::*;

use crate::state::AppState;

#[derive(Debug, Clone, Copy)]
struct Slide {
    label: &'static str,
    background: &'static str,
}

const SLIDES: [Slide; 5] = [
    Slide { label: "Secure Notes", background: "#0f766e" },
    Slide { label: "More Faster", background: "#be123c" },
    Slide { label: "Faster Impression", background: "#0f172a" },
    Slide { label: "Higher Lead Quality", background: "#581c87" },
    Slide { label: "Higher Conversion Rate", background: "#16a34a" },
];

/// Rotating card deck shown on the landing screen.
#[component]
pub fn CardSlider() -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();
    let mut active = use_signal(|| 0usize);

    let slide = SLIDES[active()];
    let position = format!("{} / {}", active() + 1, SLIDES.len());

    rsx! {
        div {
            class: "card-slider",
            style: "display: flex; flex-direction: column; align-items: center; gap: 12px;",

            div {
                class: "card-slide",
                style: "
                    width: 240px;
                    height: 320px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    border-radius: 8px;
                    padding: 0 16px;
                    color: #ffffff;
                    font-weight: 700;
                    font-size: 20px;
                    background: {slide.background};
                ",
                "{slide.label}"
            }

            div {
                style: "display: flex; gap: 8px; align-items: center;",

                button {
                    style: "padding: 4px 12px; border: 1px solid {colors.border}; border-radius: 4px; background: {colors.bg_primary}; color: {colors.text_primary}; cursor: pointer;",
                    onclick: move |_| active.set((active() + SLIDES.len() - 1) % SLIDES.len()),
                    "Prev"
                }

                span {
                    style: "font-size: 12px; color: {colors.text_muted};",
                    "{position}"
                }

                button {
                    style: "padding: 4px 12px; border: 1px solid {colors.border}; border-radius: 4px; background: {colors.bg_primary}; color: {colors.text_primary}; cursor: pointer;",
                    onclick: move |_| active.set((active() + 1) % SLIDES.len()),
                    "Next"
                }
            }
        }
    }
}
