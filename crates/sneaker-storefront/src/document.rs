//! Host document seam and scoped document effects.
//!
//! The cart widget touches the page outside its own subtree in two ways: it
//! listens for pointer-down events on the whole document, and it suppresses
//! page scrolling while the mobile modal is shown. Both are held as guards
//! that undo themselves on drop.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Identifier of a registered document listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// The host page the widget runs in.
///
/// Methods take `&self`; implementations keep their own interior state the
/// way a DOM handle does.
pub trait Document {
    /// Register a document-wide pointer-down listener.
    fn add_pointer_down_listener(&self) -> ListenerId;

    /// Unregister a listener. Unknown ids are ignored.
    fn remove_pointer_down_listener(&self, id: ListenerId);

    /// Suppress page scrolling.
    fn lock_scroll(&self);

    /// Restore page scrolling.
    fn unlock_scroll(&self);

    /// Show a blocking notification to the user.
    fn notify(&self, message: &str);
}

/// Registered pointer-down listener; unregisters on drop.
pub struct PointerDownListener<D: Document + ?Sized> {
    document: Rc<D>,
    id: ListenerId,
}

impl<D: Document + ?Sized> PointerDownListener<D> {
    /// Register a listener on `document`.
    pub fn attach(document: &Rc<D>) -> Self {
        let id = document.add_pointer_down_listener();
        Self {
            document: Rc::clone(document),
            id,
        }
    }

    pub fn id(&self) -> ListenerId {
        self.id
    }
}

impl<D: Document + ?Sized> Drop for PointerDownListener<D> {
    fn drop(&mut self) {
        self.document.remove_pointer_down_listener(self.id);
    }
}

/// Active scroll lock; unlocks on drop.
pub struct ScrollLock<D: Document + ?Sized> {
    document: Rc<D>,
}

impl<D: Document + ?Sized> ScrollLock<D> {
    /// Lock scrolling on `document`.
    pub fn acquire(document: &Rc<D>) -> Self {
        document.lock_scroll();
        Self {
            document: Rc::clone(document),
        }
    }
}

impl<D: Document + ?Sized> Drop for ScrollLock<D> {
    fn drop(&mut self) {
        self.document.unlock_scroll();
    }
}

/// In-memory document for headless hosts and tests.
///
/// Records listener registrations, the scroll flag and every notification.
#[derive(Debug, Default)]
pub struct MemoryDocument {
    next_id: Cell<u64>,
    listeners: RefCell<Vec<ListenerId>>,
    scroll_locked: Cell<bool>,
    notifications: RefCell<Vec<String>>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of pointer-down listeners currently registered.
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.scroll_locked.get()
    }

    /// Notifications shown so far, oldest first.
    pub fn notifications(&self) -> Vec<String> {
        self.notifications.borrow().clone()
    }
}

impl Document for MemoryDocument {
    fn add_pointer_down_listener(&self) -> ListenerId {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.listeners.borrow_mut().push(id);
        id
    }

    fn remove_pointer_down_listener(&self, id: ListenerId) {
        self.listeners.borrow_mut().retain(|l| *l != id);
    }

    fn lock_scroll(&self) {
        self.scroll_locked.set(true);
    }

    fn unlock_scroll(&self) {
        self.scroll_locked.set(false);
    }

    fn notify(&self, message: &str) {
        self.notifications.borrow_mut().push(message.to_string());
    }
}
