//! Terminal implementation of the storefront's host document.

use console::{style, Term};
use sneaker_storefront::{Document, ListenerId, MemoryDocument};

/// Host document backed by the terminal.
///
/// Listener and scroll bookkeeping is kept in memory so the renderer can
/// show it; notifications are printed and, in interactive sessions, block
/// until the user presses Enter.
pub struct TerminalDocument {
    state: MemoryDocument,
    interactive: bool,
    json: bool,
    term: Term,
}

impl TerminalDocument {
    pub fn new(interactive: bool, json: bool) -> Self {
        Self {
            state: MemoryDocument::new(),
            interactive,
            json,
            term: Term::stdout(),
        }
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.state.is_scroll_locked()
    }

    /// Every notification shown so far.
    pub fn notifications(&self) -> Vec<String> {
        self.state.notifications()
    }
}

impl Document for TerminalDocument {
    fn add_pointer_down_listener(&self) -> ListenerId {
        let id = self.state.add_pointer_down_listener();
        tracing::trace!(id = id.0, "pointer-down listener attached");
        id
    }

    fn remove_pointer_down_listener(&self, id: ListenerId) {
        tracing::trace!(id = id.0, "pointer-down listener detached");
        self.state.remove_pointer_down_listener(id);
    }

    fn lock_scroll(&self) {
        tracing::trace!("scroll locked");
        self.state.lock_scroll();
    }

    fn unlock_scroll(&self) {
        tracing::trace!("scroll unlocked");
        self.state.unlock_scroll();
    }

    fn notify(&self, message: &str) {
        self.state.notify(message);
        if self.json {
            return;
        }
        println!("\n  {} {}", style("[alert]").yellow().bold(), message);
        if self.interactive && self.term.is_term() {
            println!("  {}", style("Press Enter to continue").dim());
            if let Err(e) = self.term.read_line() {
                tracing::warn!(error = %e, "failed to wait for acknowledgement");
            }
        }
    }
}
