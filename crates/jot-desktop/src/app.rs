//! Main application component

use std::sync::Arc;

use dioxus::prelude::*;

use jot_core::ApiClient;

use crate::components::ToastHost;
use crate::config::DesktopConfig;
use crate::state::{AppState, Screen};
use crate::theme::detect_theme;
use crate::views::{Landing, NoteDetails};

/// Root application component
#[component]
pub fn App() -> Element {
    let screen = use_signal(|| Screen::Landing);
    let theme = use_signal(detect_theme);
    let toasts = use_signal(Vec::new);
    let next_toast_id = use_signal(|| 0u64);

    // Build the API client once from environment configuration.
    let api = use_signal(|| {
        let config = DesktopConfig::from_env();
        match ApiClient::new(&config.api_base_url) {
            Ok(client) => Some(Arc::new(client)),
            Err(error) => {
                tracing::error!("Failed to configure API client: {error}");
                None
            }
        }
    });

    let state = use_context_provider(|| AppState {
        screen,
        api,
        theme,
        toasts,
        next_toast_id,
    });

    let colors = (state.theme)().palette();

    rsx! {
        div {
            class: "app-container",
            style: "
                min-height: 100vh;
                font-family: system-ui, -apple-system, sans-serif;
                font-size: 15px;
                background: {colors.bg_primary};
                color: {colors.text_primary};
            ",

            {match (state.screen)() {
                Screen::Landing => rsx! { Landing {} },
                Screen::NoteDetails(id) => rsx! { NoteDetails { id } },
            }}

            ToastHost {}
        }
    }
}
