//! Note card component

use dioxus::prelude::*;

use crate::state::AppState;

/// A single note row rendered in the landing list.
#[component]
pub fn NoteCard(title: String, preview: String, onclick: EventHandler<MouseEvent>) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    rsx! {
        div {
            class: "note-card",
            style: "
                padding: 12px 16px;
                border: 1px solid {colors.border_light};
                border-radius: 6px;
                cursor: pointer;
                background: {colors.bg_primary};
                transition: background 0.15s;
            ",
            onclick: move |evt| onclick.call(evt),

            div {
                class: "note-title",
                style: "
                    font-weight: 500;
                    margin-bottom: 4px;
                    overflow: hidden;
                    text-overflow: ellipsis;
                    white-space: nowrap;
                    color: {colors.text_primary};
                ",
                "{title}"
            }

            div {
                class: "note-preview",
                style: "
                    font-size: 12px;
                    color: {colors.text_secondary};
                    overflow: hidden;
                    text-overflow: ellipsis;
                    white-space: nowrap;
                ",
                "{preview}"
            }
        }
    }
}
