//! Application state management
//!
//! Global state accessible via Dioxus context providers.

use std::sync::Arc;
use std::time::Instant;

use dioxus::prelude::*;

use jot_core::{ApiClient, NoteId};

use crate::theme::ResolvedTheme;

/// Which screen is on display.
///
/// Full routing is out of scope for this client; back navigation pops to the
/// landing screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Landing,
    NoteDetails(NoteId),
}

/// Toast severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// A transient user notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
    pub shown_at: Instant,
}

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    /// Current screen
    pub screen: Signal<Screen>,
    /// REST client, absent when configuration was rejected
    pub api: Signal<Option<Arc<ApiClient>>>,
    /// Resolved theme
    pub theme: Signal<ResolvedTheme>,
    /// Pending toast notifications
    pub toasts: Signal<Vec<Toast>>,
    /// Monotonic toast id source
    pub next_toast_id: Signal<u64>,
}

impl AppState {
    /// Open the detail view for a note.
    pub fn open_note(&mut self, id: NoteId) {
        self.screen.set(Screen::NoteDetails(id));
    }

    /// Navigate back to the landing screen.
    pub fn go_back(&mut self) {
        self.screen.set(Screen::Landing);
    }

    /// Show a success toast.
    pub fn toast_success(&mut self, message: impl Into<String>) {
        self.push_toast(ToastKind::Success, message);
    }

    /// Show an error toast.
    pub fn toast_error(&mut self, message: impl Into<String>) {
        self.push_toast(ToastKind::Error, message);
    }

    fn push_toast(&mut self, kind: ToastKind, message: impl Into<String>) {
        let id = (self.next_toast_id)();
        self.next_toast_id.set(id + 1);
        self.toasts.write().push(Toast {
            id,
            kind,
            message: message.into(),
            shown_at: Instant::now(),
        });
    }
}
