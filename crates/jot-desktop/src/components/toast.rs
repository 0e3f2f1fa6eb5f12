//! Toast notifications

use std::time::{Duration, Instant};

use dioxus::prelude::*;

use crate::state::{AppState, ToastKind};

/// How long a toast stays on screen
const TOAST_TTL: Duration = Duration::from_secs(4);

/// Overlay that renders pending toasts and prunes expired ones.
#[component]
pub fn ToastHost() -> Element {
    let mut state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    // Prune expired toasts on a coarse tick.
    use_future(move || async move {
        loop {
            tokio::time::sleep(Duration::from_millis(500)).await;
            let now = Instant::now();
            let has_expired = state
                .toasts
                .peek()
                .iter()
                .any(|toast| now.duration_since(toast.shown_at) > TOAST_TTL);
            if has_expired {
                state
                    .toasts
                    .write()
                    .retain(|toast| now.duration_since(toast.shown_at) <= TOAST_TTL);
            }
        }
    });

    rsx! {
        div {
            class: "toast-host",
            style: "
                position: fixed;
                top: 16px;
                right: 16px;
                display: flex;
                flex-direction: column;
                gap: 8px;
                z-index: 9999;
            ",

            for toast in (state.toasts)() {
                {
                    let background = match toast.kind {
                        ToastKind::Success => colors.success,
                        ToastKind::Error => colors.error,
                    };

                    rsx! {
                        div {
                            key: "{toast.id}",
                            class: "toast",
                            style: "
                                padding: 10px 16px;
                                border-radius: 6px;
                                color: #ffffff;
                                font-size: 14px;
                                box-shadow: 0 2px 8px rgba(0,0,0,0.2);
                                background: {background};
                            ",
                            "{toast.message}"
                        }
                    }
                }
            }
        }
    }
}
