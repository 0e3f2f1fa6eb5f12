//! Rich-text surface component
//!
//! Bridges the imperative editor engine into the declarative tree: exactly
//! one engine per mounted surface, seeded once, change notifications
//! forwarded to the parent, and teardown on drop.

use std::rc::Rc;

use dioxus::prelude::*;

use jot_editor::{Editor, Range, Source, Subscription};

use crate::state::AppState;

/// Engine plus the subscriptions that must live as long as the mount.
struct MountedSurface {
    editor: Editor,
    _text_sub: Subscription,
    _selection_sub: Subscription,
}

/// Editable rich-text canvas around [`jot_editor::Editor`].
///
/// `default_value` seeds the engine at mount only; later changes to it are
/// ignored because the engine owns the live document from then on. `handle`
/// is the parent's imperative slot: populated after mount, cleared on
/// teardown.
#[component]
pub fn RichTextSurface(
    read_only: ReadOnlySignal<bool>,
    default_value: Option<String>,
    on_text_change: EventHandler<String>,
    on_selection_change: Option<EventHandler<Option<Range>>>,
    handle: Option<Signal<Option<Editor>>>,
) -> Element {
    let state = use_context::<AppState>();
    let mut contents = use_signal({
        let seed = default_value.clone();
        move || seed.unwrap_or_default()
    });

    // Mount-once: re-renders must never recreate the widget. Seeding happens
    // before the subscriptions attach, so the seed itself does not echo back
    // through `on_text_change` during the first render.
    let mounted = use_hook(move || {
        let editor = Editor::new();
        if let Some(seed) = default_value {
            editor.set_contents(&seed);
        }

        let text_sub = editor.on_text_change(move |document, _source| {
            contents.set(document.to_string());
            on_text_change.call(document.to_string());
        });
        let selection_sub = editor.on_selection_change(move |selection, _source| {
            if let Some(callback) = on_selection_change {
                callback.call(selection);
            }
        });

        Rc::new(MountedSurface {
            editor,
            _text_sub: text_sub,
            _selection_sub: selection_sub,
        })
    });

    // Expose the imperative handle to the parent once mounted.
    {
        let editor = mounted.editor.clone();
        use_effect(move || {
            if let Some(mut slot) = handle {
                slot.set(Some(editor.clone()));
            }
        });
    }

    // Forward read-only toggles without remounting; widget content and
    // cursor survive the switch.
    {
        let editor = mounted.editor.clone();
        use_effect(move || {
            editor.enable(!read_only());
        });
    }

    use_drop({
        let editor = mounted.editor.clone();
        move || {
            editor.dispose();
            if let Some(mut slot) = handle {
                slot.set(None);
            }
        }
    });

    let colors = (state.theme)().palette();
    let edit_editor = mounted.editor.clone();
    let focus_editor = mounted.editor.clone();
    let blur_editor = mounted.editor.clone();

    rsx! {
        section {
            class: "rich-text-surface",
            style: "
                display: flex;
                flex-direction: column;
                border: 1px solid {colors.border};
                border-radius: 6px;
                background: {colors.bg_primary};
            ",

            textarea {
                class: "rich-text-canvas",
                style: "
                    min-height: 280px;
                    border: none;
                    outline: none;
                    resize: vertical;
                    padding: 14px;
                    font-family: inherit;
                    font-size: inherit;
                    line-height: 1.6;
                    background: transparent;
                    color: {colors.text_primary};
                ",
                value: "{contents}",
                readonly: read_only(),
                placeholder: "Write your note...",
                oninput: move |event: Event<FormData>| {
                    edit_editor.apply_user_edit(&event.value());
                },
                onfocus: move |_| {
                    let caret = focus_editor.contents().chars().count();
                    focus_editor.set_selection(Some(Range::caret(caret)), Source::User);
                },
                onblur: move |_| {
                    blur_editor.set_selection(None, Source::User);
                },
            }
        }
    }
}
