//! Landing view - card slider and note list

use dioxus::prelude::*;

use jot_core::{content, Note};

use crate::components::{CardSlider, NoteCard};
use crate::state::AppState;

/// Landing screen: product carousel plus the list of notes to open.
#[component]
pub fn Landing() -> Element {
    let mut state = use_context::<AppState>();
    let mut notes = use_signal(Vec::<Note>::new);
    let mut load_error = use_signal(|| None::<String>);
    let mut loading = use_signal(|| true);

    use_effect(move || {
        let api = state.api.peek().clone();
        spawn(async move {
            let Some(api) = api else {
                load_error.set(Some("API client is not configured".to_string()));
                loading.set(false);
                return;
            };
            match api.list_notes().await {
                Ok(fetched) => notes.set(fetched),
                Err(error) => {
                    tracing::error!("Failed to load notes: {error}");
                    load_error.set(Some("Failed to load notes".to_string()));
                }
            }
            loading.set(false);
        });
    });

    let colors = (state.theme)().palette();

    rsx! {
        div {
            class: "landing",
            style: "
                display: flex;
                flex-direction: column;
                align-items: center;
                gap: 32px;
                padding: 48px 24px;
                min-height: 100vh;
                background: {colors.bg_secondary};
            ",

            h1 {
                style: "margin: 0; font-size: 28px; color: {colors.text_primary};",
                "Jot"
            }
            p {
                style: "margin: 0; color: {colors.text_secondary};",
                "Your notes, with a full audit trail."
            }

            CardSlider {}

            section {
                class: "note-list",
                style: "display: flex; flex-direction: column; gap: 8px; width: 420px; max-width: 100%;",

                h2 {
                    style: "margin: 0 0 4px 0; font-size: 16px; color: {colors.text_primary};",
                    "My Notes"
                }

                if loading() {
                    p { style: "color: {colors.text_muted};", "Loading notes..." }
                } else if let Some(message) = load_error() {
                    p { style: "color: {colors.error};", "{message}" }
                } else if notes().is_empty() {
                    p { style: "color: {colors.text_muted};", "No notes yet" }
                } else {
                    for note in notes() {
                        {
                            let note_id = note.id;
                            let (title, preview) = note_preview(&note);

                            rsx! {
                                NoteCard {
                                    key: "{note_id}",
                                    title,
                                    preview,
                                    onclick: move |_| state.open_note(note_id),
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// First line of the decoded document as the card title, with a flattened
/// preview of the whole document. Decode failures degrade to a placeholder
/// instead of hiding the note.
fn note_preview(note: &Note) -> (String, String) {
    match content::decode_note_content(&note.content) {
        Ok(document) => {
            let title: String = document
                .lines()
                .next()
                .unwrap_or("")
                .trim_start_matches(['#', ' '])
                .chars()
                .take(48)
                .collect();
            let title = if title.is_empty() {
                "Untitled note".to_string()
            } else {
                title
            };
            let preview: String = document
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" ")
                .chars()
                .take(80)
                .collect();
            (title, preview)
        }
        Err(_) => (
            "Unreadable note".to_string(),
            format!("Note {} could not be decoded", note.id),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jot_core::NoteId;
    use pretty_assertions::assert_eq;

    fn note(document: &str) -> Note {
        Note {
            id: NoteId::new(1),
            content: content::encode_note_content(document),
        }
    }

    #[test]
    fn test_note_preview_uses_first_line_as_title() {
        let (title, preview) = note_preview(&note("# Groceries\n\n- milk\n- eggs"));
        assert_eq!(title, "Groceries");
        assert_eq!(preview, "# Groceries - milk - eggs");
    }

    #[test]
    fn test_note_preview_handles_blank_document() {
        let (title, preview) = note_preview(&note("   "));
        assert_eq!(title, "Untitled note");
        assert_eq!(preview, "");
    }

    #[test]
    fn test_note_preview_degrades_on_malformed_content() {
        let broken = Note {
            id: NoteId::new(7),
            content: "not an envelope".to_string(),
        };
        let (title, preview) = note_preview(&broken);
        assert_eq!(title, "Unreadable note");
        assert_eq!(preview, "Note 7 could not be decoded");
    }
}
