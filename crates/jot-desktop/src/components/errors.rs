//! Full-view error display

use dioxus::prelude::*;

use crate::state::AppState;

/// Replaces a view's content when a structural failure occurred.
#[component]
pub fn ErrorDisplay(message: String) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    rsx! {
        div {
            class: "error-display",
            style: "
                display: flex;
                flex-direction: column;
                align-items: center;
                justify-content: center;
                min-height: 320px;
                gap: 8px;
            ",

            p {
                style: "margin: 0; font-size: 18px; font-weight: 600; color: {colors.text_primary};",
                "Something went wrong"
            }
            p {
                style: "margin: 0; color: {colors.error};",
                "{message}"
            }
        }
    }
}
