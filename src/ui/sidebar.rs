//! Filter sidebar: open flag plus the document side effects tied to it.
//!
//! While the sidebar is open the page must not scroll and an Escape listener
//! must be attached. Both are held by an [`OpenSession`] guard that exists
//! exactly as long as the sidebar is open, so closing it through any path,
//! including dropping the controller, releases them.

use std::cell::Cell;
use std::rc::Rc;

use crate::ui::Key;

/// Document-level effects the sidebar needs.
pub trait Document {
    type Listener;

    fn lock_scroll(&self);
    fn unlock_scroll(&self);
    fn add_escape_listener(&self) -> Self::Listener;
    fn remove_escape_listener(&self, listener: Self::Listener);
}

/// Scroll lock and Escape listener acquired on open, released on drop.
pub struct OpenSession<D: Document> {
    document: D,
    listener: Option<D::Listener>,
}

impl<D: Document> OpenSession<D> {
    fn acquire(document: D) -> Self {
        document.lock_scroll();
        let listener = document.add_escape_listener();
        Self {
            document,
            listener: Some(listener),
        }
    }
}

impl<D: Document> Drop for OpenSession<D> {
    fn drop(&mut self) {
        if let Some(listener) = self.listener.take() {
            self.document.remove_escape_listener(listener);
        }
        self.document.unlock_scroll();
    }
}

pub struct Sidebar<D: Document + Clone> {
    document: D,
    session: Option<OpenSession<D>>,
}

impl<D: Document + Clone> Sidebar<D> {
    pub fn new(document: D) -> Self {
        Self {
            document,
            session: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    /// Menu button: flips the state unconditionally.
    pub fn toggle(&mut self) {
        if self.is_open() {
            self.close();
        } else {
            self.session = Some(OpenSession::acquire(self.document.clone()));
        }
    }

    /// Overlay, close button or Escape. No-op when already closed.
    pub fn close(&mut self) {
        if let Some(session) = self.session.take() {
            drop(session);
            log::debug!("Sidebar closed");
        }
    }

    /// Global keydown. Only reaches the sidebar while its listener exists.
    pub fn key_down(&mut self, key: Key) {
        if key == Key::Escape && self.is_open() {
            self.close();
        }
    }
}

/// In-process document used when rendering a page: records the effects so
/// the layout template can mirror them.
#[derive(Debug, Clone, Default)]
pub struct PageDocument {
    state: Rc<PageDocumentState>,
}

#[derive(Debug, Default)]
struct PageDocumentState {
    scroll_locked: Cell<bool>,
    escape_listeners: Cell<usize>,
}

impl PageDocument {
    pub fn is_scroll_locked(&self) -> bool {
        self.state.scroll_locked.get()
    }

    pub fn escape_listeners(&self) -> usize {
        self.state.escape_listeners.get()
    }
}

impl Document for PageDocument {
    type Listener = ();

    fn lock_scroll(&self) {
        self.state.scroll_locked.set(true);
    }

    fn unlock_scroll(&self) {
        self.state.scroll_locked.set(false);
    }

    fn add_escape_listener(&self) {
        let count = self.state.escape_listeners.get();
        self.state.escape_listeners.set(count + 1);
    }

    fn remove_escape_listener(&self, _listener: ()) {
        let count = self.state.escape_listeners.get();
        self.state.escape_listeners.set(count.saturating_sub(1));
    }
}
