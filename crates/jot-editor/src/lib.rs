//! jot-editor - Imperative rich-text editing engine
//!
//! The engine behind the desktop rich-text surface. It owns its document,
//! selection, and subscriber lists the way an embedded third-party editor
//! widget would: callers hold a cheap clone-able [`Editor`] handle, seed it
//! once, subscribe to change notifications, toggle [`Editor::enable`], and
//! [`Editor::dispose`] it on teardown.
//!
//! The engine is single-threaded by design; the hosting UI runtime is
//! event-driven and cooperative, so interior state lives behind
//! `Rc<RefCell<..>>`.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

/// Cursor span within the document, measured in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    /// Character offset of the span start
    pub index: usize,
    /// Length of the span; zero for a bare caret
    pub len: usize,
}

impl Range {
    /// A collapsed caret at the given character offset
    #[must_use]
    pub const fn caret(index: usize) -> Self {
        Self { index, len: 0 }
    }
}

/// Origin of a change notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// A programmatic call through the handle API
    Api,
    /// The widget's own input handling
    User,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Channel {
    Text,
    Selection,
}

type TextCallback = Box<dyn FnMut(&str, Source)>;
type SelectionCallback = Box<dyn FnMut(Option<Range>, Source)>;

#[derive(Default)]
struct EditorInner {
    contents: String,
    selection: Option<Range>,
    enabled: bool,
    disposed: bool,
    next_subscriber: u64,
    text_subscribers: Vec<(u64, TextCallback)>,
    selection_subscribers: Vec<(u64, SelectionCallback)>,
    // Unsubscribes that arrive while a notification is being dispatched are
    // applied once the detached subscriber list is restored.
    pending_removals: Vec<(Channel, u64)>,
}

impl EditorInner {
    fn remove_subscriber(&mut self, channel: Channel, id: u64) {
        match channel {
            Channel::Text => self.text_subscribers.retain(|(sub, _)| *sub != id),
            Channel::Selection => self.selection_subscribers.retain(|(sub, _)| *sub != id),
        }
        self.pending_removals.push((channel, id));
    }

    fn apply_pending_removals(&mut self) {
        let pending = std::mem::take(&mut self.pending_removals);
        for (channel, id) in pending {
            match channel {
                Channel::Text => self.text_subscribers.retain(|(sub, _)| *sub != id),
                Channel::Selection => self.selection_subscribers.retain(|(sub, _)| *sub != id),
            }
        }
    }

    fn clamp_selection(&mut self) {
        let max = self.contents.chars().count();
        if let Some(range) = self.selection {
            let index = range.index.min(max);
            let len = range.len.min(max - index);
            self.selection = Some(Range { index, len });
        }
    }
}

/// Handle to a single editor instance. Clones share the same widget.
#[derive(Clone)]
pub struct Editor {
    inner: Rc<RefCell<EditorInner>>,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Editor {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for Editor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Editor")
            .field("contents_len", &inner.contents.len())
            .field("enabled", &inner.enabled)
            .field("disposed", &inner.disposed)
            .finish()
    }
}

impl Editor {
    /// Create a fresh, enabled, empty editor.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(EditorInner {
                enabled: true,
                ..EditorInner::default()
            })),
        }
    }

    /// Replace the whole document programmatically.
    ///
    /// Works even while the editor is disabled (hosts seed read-only views);
    /// notifies text subscribers with [`Source::Api`].
    pub fn set_contents(&self, contents: &str) {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.disposed {
                return;
            }
            inner.contents = contents.to_string();
            inner.clamp_selection();
        }
        self.emit_text_change(Source::Api);
    }

    /// Current document contents.
    #[must_use]
    pub fn contents(&self) -> String {
        self.inner.borrow().contents.clone()
    }

    /// Enable or disable user edits.
    ///
    /// Toggling never touches the document or the selection.
    pub fn enable(&self, enabled: bool) {
        let mut inner = self.inner.borrow_mut();
        if inner.disposed {
            return;
        }
        inner.enabled = enabled;
    }

    /// Whether the widget currently accepts user edits.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        let inner = self.inner.borrow();
        inner.enabled && !inner.disposed
    }

    /// Entry point for the widget's own input handling.
    ///
    /// Ignored while the editor is disabled or disposed. Moves the caret to
    /// the end of the new document and notifies both channels with
    /// [`Source::User`].
    pub fn apply_user_edit(&self, contents: &str) {
        let selection_moved = {
            let mut inner = self.inner.borrow_mut();
            if inner.disposed || !inner.enabled {
                return;
            }
            inner.contents = contents.to_string();
            let caret = Some(Range::caret(inner.contents.chars().count()));
            let moved = inner.selection != caret;
            inner.selection = caret;
            moved
        };
        self.emit_text_change(Source::User);
        if selection_moved {
            self.emit_selection_change(Source::User);
        }
    }

    /// Move the cursor, or clear it with `None` (blur).
    pub fn set_selection(&self, selection: Option<Range>, source: Source) {
        let changed = {
            let mut inner = self.inner.borrow_mut();
            if inner.disposed {
                return;
            }
            let previous = inner.selection;
            inner.selection = selection;
            inner.clamp_selection();
            inner.selection != previous
        };
        if changed {
            self.emit_selection_change(source);
        }
    }

    /// Current cursor span, `None` when the widget has no focus.
    #[must_use]
    pub fn selection(&self) -> Option<Range> {
        self.inner.borrow().selection
    }

    /// Subscribe to content changes. Dropping the guard unsubscribes.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn on_text_change(&self, callback: impl FnMut(&str, Source) + 'static) -> Subscription {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_subscriber;
        inner.next_subscriber += 1;
        if !inner.disposed {
            inner.text_subscribers.push((id, Box::new(callback)));
        }
        Subscription {
            editor: Rc::downgrade(&self.inner),
            channel: Channel::Text,
            id,
        }
    }

    /// Subscribe to cursor changes. Dropping the guard unsubscribes.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn on_selection_change(
        &self,
        callback: impl FnMut(Option<Range>, Source) + 'static,
    ) -> Subscription {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_subscriber;
        inner.next_subscriber += 1;
        if !inner.disposed {
            inner.selection_subscribers.push((id, Box::new(callback)));
        }
        Subscription {
            editor: Rc::downgrade(&self.inner),
            channel: Channel::Selection,
            id,
        }
    }

    /// Tear down the widget: drop all subscribers, clear the document, and
    /// refuse further operations.
    pub fn dispose(&self) {
        let mut inner = self.inner.borrow_mut();
        if inner.disposed {
            return;
        }
        tracing::debug!("Disposing editor instance");
        inner.disposed = true;
        inner.enabled = false;
        inner.contents.clear();
        inner.selection = None;
        inner.text_subscribers.clear();
        inner.selection_subscribers.clear();
        inner.pending_removals.clear();
    }

    /// Whether [`Editor::dispose`] has run.
    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.inner.borrow().disposed
    }

    fn emit_text_change(&self, source: Source) {
        let (mut subscribers, contents) = {
            let mut inner = self.inner.borrow_mut();
            (
                std::mem::take(&mut inner.text_subscribers),
                inner.contents.clone(),
            )
        };
        for (_, callback) in &mut subscribers {
            callback(&contents, source);
        }
        let mut inner = self.inner.borrow_mut();
        if inner.disposed {
            return;
        }
        let added = std::mem::replace(&mut inner.text_subscribers, subscribers);
        inner.text_subscribers.extend(added);
        inner.apply_pending_removals();
    }

    fn emit_selection_change(&self, source: Source) {
        let (mut subscribers, selection) = {
            let mut inner = self.inner.borrow_mut();
            (
                std::mem::take(&mut inner.selection_subscribers),
                inner.selection,
            )
        };
        for (_, callback) in &mut subscribers {
            callback(selection, source);
        }
        let mut inner = self.inner.borrow_mut();
        if inner.disposed {
            return;
        }
        let added = std::mem::replace(&mut inner.selection_subscribers, subscribers);
        inner.selection_subscribers.extend(added);
        inner.apply_pending_removals();
    }
}

/// Guard for a change subscription; dropping it unsubscribes.
pub struct Subscription {
    editor: Weak<RefCell<EditorInner>>,
    channel: Channel,
    id: u64,
}

impl Subscription {
    /// Detach explicitly; equivalent to dropping the guard.
    pub fn cancel(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.editor.upgrade() {
            if let Ok(mut inner) = inner.try_borrow_mut() {
                inner.remove_subscriber(self.channel, self.id);
            }
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("channel", &self.channel)
            .field("id", &self.id)
            .finish()
    }
}
