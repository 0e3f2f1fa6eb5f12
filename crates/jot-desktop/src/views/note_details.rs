//! Note detail view
//!
//! Owns the fetch/edit/save lifecycle for a single note: the decoded
//! document, the admin-gated audit trail, and the edit session driven
//! through the rich-text surface.

use std::sync::Arc;

use dioxus::prelude::*;

use jot_core::{content, ApiClient, AuditLogEntry, Error, NoteId};
use jot_editor::Editor;

use crate::components::{project_rows, AuditLogTable, ErrorDisplay, RichTextSurface};
use crate::state::AppState;

/// Exclusive display state of the detail view.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ViewState {
    Loading,
    Viewing,
    Editing,
    Error(String),
}

/// Detail screen for a single note.
#[component]
pub fn NoteDetails(id: ReadOnlySignal<NoteId>) -> Element {
    let mut state = use_context::<AppState>();

    let mut view_state = use_signal(|| ViewState::Loading);
    let mut parsed_content = use_signal(String::new);
    let mut editor_content = use_signal(String::new);
    let mut audit_logs = use_signal(Vec::<AuditLogEntry>::new);
    let mut audit_error = use_signal(|| None::<String>);
    let mut is_admin = use_signal(|| false);
    let mut save_in_flight = use_signal(|| false);
    // Bumped on every (re)load; a resolved request whose epoch has moved on
    // is discarded instead of overwriting newer state.
    let mut fetch_epoch = use_signal(|| 0u64);
    // Bumped to force a refetch without an id change (after save/cancel).
    let mut refresh_version = use_signal(|| 0u64);
    let quill_handle = use_signal(|| None::<Editor>);

    // Note fetch and role check run concurrently on mount and whenever the
    // id (or refresh counter) changes; completion order is not guaranteed.
    use_effect(move || {
        let note_id = id();
        let _refresh = refresh_version();

        let epoch = *fetch_epoch.peek() + 1;
        fetch_epoch.set(epoch);

        view_state.set(ViewState::Loading);
        audit_logs.set(Vec::new());
        audit_error.set(None);
        is_admin.set(false);

        let Some(api) = state.api.peek().clone() else {
            view_state.set(ViewState::Error("API client is not configured".to_string()));
            return;
        };

        spawn({
            let api = Arc::clone(&api);
            async move {
                let outcome = load_note(&api, note_id).await;
                if *fetch_epoch.peek() != epoch {
                    tracing::debug!("Discarding stale note fetch for {note_id}");
                    return;
                }
                match outcome {
                    Ok(document) => {
                        parsed_content.set(document.clone());
                        editor_content.set(document);
                        view_state.set(ViewState::Viewing);
                    }
                    Err(error) => {
                        tracing::error!("Failed to load note {note_id}: {error}");
                        view_state.set(ViewState::Error(fetch_error_message(&error)));
                    }
                }
            }
        });

        spawn(async move {
            let outcome = api.current_user().await;
            if *fetch_epoch.peek() != epoch {
                return;
            }
            match outcome {
                Ok(user) => is_admin.set(user.is_admin()),
                Err(error) => {
                    // Fail closed: no audit access without a confirmed role.
                    tracing::warn!("Role check failed: {error}");
                    is_admin.set(false);
                }
            }
        });
    });

    // The audit fetch reacts to the admin role resolving true, so a role
    // check that completes after the initial load still triggers it.
    use_effect(move || {
        let note_id = id();
        if !is_admin() {
            return;
        }
        let epoch = *fetch_epoch.peek();
        let Some(api) = state.api.peek().clone() else {
            return;
        };
        spawn(async move {
            let outcome = api.audit_log(note_id).await;
            if *fetch_epoch.peek() != epoch {
                return;
            }
            match outcome {
                Ok(entries) => {
                    audit_logs.set(entries);
                    audit_error.set(None);
                }
                Err(error) => {
                    // Non-fatal: the note itself stays viewable.
                    tracing::warn!("Audit log fetch failed for {note_id}: {error}");
                    audit_error.set(Some("Error fetching audit logs".to_string()));
                }
            }
        });
    });

    let on_edit = move |_| {
        // Seed the edit session from the current decoded document.
        editor_content.set(parsed_content());
        view_state.set(ViewState::Editing);
    };

    let on_cancel = move |_| {
        view_state.set(ViewState::Viewing);
        // Reload canonical server state after abandoning edits.
        refresh_version.set(refresh_version() + 1);
    };

    let on_save = move |_| {
        if save_in_flight() {
            return;
        }
        let document = editor_content();
        if document.trim().is_empty() {
            state.toast_error("Note content shouldn't be empty");
            return;
        }
        let Some(api) = state.api.peek().clone() else {
            state.toast_error("API client is not configured");
            return;
        };
        let note_id = id();
        save_in_flight.set(true);
        spawn(async move {
            match api.update_note(note_id, &document).await {
                Ok(()) => {
                    state.toast_success("Note update successful");
                    view_state.set(ViewState::Viewing);
                    // Refetch note and audit data to reflect the
                    // authoritative post-write state.
                    refresh_version.set(refresh_version() + 1);
                }
                Err(error) => {
                    tracing::error!("Failed to update note {note_id}: {error}");
                    // Edits stay in place for retry.
                    state.toast_error("Update Note Failed");
                }
            }
            save_in_flight.set(false);
        });
    };

    let colors = (state.theme)().palette();
    let current = view_state();

    rsx! {
        div {
            class: "note-details",
            style: "min-height: 100vh; padding: 24px 40px; background: {colors.bg_secondary};",

            button {
                class: "back-button",
                style: "
                    padding: 8px 16px;
                    border: none;
                    border-radius: 6px;
                    cursor: pointer;
                    background: {colors.accent};
                    color: {colors.accent_text};
                ",
                onclick: move |_| state.go_back(),
                "Go Back"
            }

            div {
                class: "note-panel",
                style: "
                    margin-top: 12px;
                    padding: 24px 32px;
                    border-radius: 6px;
                    background: {colors.bg_primary};
                    box-shadow: 0 2px 10px rgba(0,0,0,0.08);
                ",

                {match current {
                    ViewState::Loading => rsx! {
                        div {
                            class: "note-loading",
                            style: "
                                display: flex;
                                flex-direction: column;
                                align-items: center;
                                justify-content: center;
                                height: 320px;
                                color: {colors.text_muted};
                            ",
                            "Please wait..."
                        }
                    },

                    ViewState::Error(message) => rsx! {
                        ErrorDisplay { message }
                    },

                    ViewState::Editing => rsx! {
                        RichTextSurface {
                            read_only: save_in_flight(),
                            default_value: editor_content(),
                            on_text_change: move |document: String| editor_content.set(document),
                            handle: quill_handle,
                        }

                        div {
                            style: "display: flex; gap: 8px; margin-top: 16px;",

                            button {
                                class: "save-button",
                                style: "
                                    padding: 8px 16px;
                                    border: none;
                                    border-radius: 4px;
                                    cursor: pointer;
                                    background: {colors.accent};
                                    color: {colors.accent_text};
                                ",
                                disabled: save_in_flight(),
                                onclick: on_save,
                                if save_in_flight() { "Loading..." } else { "Update Note" }
                            }

                            button {
                                style: "
                                    padding: 8px 16px;
                                    border: 1px solid {colors.border};
                                    border-radius: 4px;
                                    cursor: pointer;
                                    background: {colors.bg_primary};
                                    color: {colors.text_primary};
                                ",
                                disabled: save_in_flight(),
                                onclick: on_cancel,
                                "Cancel"
                            }
                        }
                    },

                    ViewState::Viewing => {
                        let rendered = content::render_markdown(&parsed_content());
                        rsx! {
                            article {
                                class: "note-content",
                                style: "line-height: 1.7; color: {colors.text_primary};",
                                dangerous_inner_html: rendered,
                            }

                            button {
                                style: "
                                    margin-top: 16px;
                                    padding: 8px 16px;
                                    border: none;
                                    border-radius: 4px;
                                    cursor: pointer;
                                    background: {colors.accent};
                                    color: {colors.accent_text};
                                ",
                                onclick: on_edit,
                                "Edit Note"
                            }

                            if is_admin() {
                                section {
                                    class: "audit-section",
                                    style: "margin-top: 40px;",

                                    h2 {
                                        style: "
                                            text-align: center;
                                            text-transform: uppercase;
                                            font-size: 18px;
                                            color: {colors.text_secondary};
                                            padding: 16px 0;
                                        ",
                                        "Audit Logs"
                                    }

                                    if let Some(message) = audit_error() {
                                        p {
                                            style: "text-align: center; color: {colors.error};",
                                            "{message}"
                                        }
                                    } else {
                                        AuditLogTable { rows: project_rows(&audit_logs()) }
                                    }
                                }
                            }
                        }
                    },
                }}
            }
        }
    }
}

/// Fetch the note and decode its stored document. One decode per fetch.
async fn load_note(api: &ApiClient, id: NoteId) -> jot_core::Result<String> {
    let note = api.find_note(id).await?;
    content::decode_note_content(&note.content)
}

/// User-facing message for a failed note fetch.
///
/// Structural failures carry their own wording; server rejections surface the
/// payload message; transport failures collapse to a generic line.
fn fetch_error_message(error: &Error) -> String {
    match error {
        Error::NoteNotFound(_) | Error::MalformedContent(_) => error.to_string(),
        Error::Api { message, .. } => message.clone(),
        _ => "Failed to load note".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_missing_note_reads_as_invalid_note() {
        let message = fetch_error_message(&Error::NoteNotFound(NoteId::new(4)));
        assert_eq!(message, "Invalid Note");
    }

    #[test]
    fn test_server_rejection_surfaces_payload_message() {
        let message = fetch_error_message(&Error::Api {
            status: 403,
            message: "You do not own this note".to_string(),
        });
        assert_eq!(message, "You do not own this note");
    }

    #[test]
    fn test_malformed_content_is_descriptive() {
        let error = content::decode_note_content("not an envelope").unwrap_err();
        let message = fetch_error_message(&error);
        assert!(message.starts_with("Malformed note content"));
    }

    #[test]
    fn test_other_failures_collapse_to_generic_line() {
        let message = fetch_error_message(&Error::EmptyContent);
        assert_eq!(message, "Failed to load note");
    }
}
