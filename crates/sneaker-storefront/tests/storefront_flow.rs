//! End-to-end flows through the app shell.

use std::cell::RefCell;
use std::rc::Rc;

use sneaker_storefront::{
    AppShell, Currency, Document, ListenerId, MemoryDocument, Money, PanelVariant, PointerTarget,
    Route, Viewport, WidgetState,
};

const DESKTOP: Viewport = Viewport { width_px: 1440 };
const MOBILE: Viewport = Viewport { width_px: 375 };

/// Document double that records every effect call in order.
#[derive(Debug, Default)]
struct RecordingDocument {
    inner: MemoryDocument,
    log: RefCell<Vec<String>>,
}

impl RecordingDocument {
    fn log(&self) -> Vec<String> {
        self.log.borrow().clone()
    }

    fn assert_released(&self) {
        assert!(!self.inner.is_scroll_locked(), "scroll still locked");
        assert_eq!(self.inner.listener_count(), 0, "listener still attached");
    }
}

impl Document for RecordingDocument {
    fn add_pointer_down_listener(&self) -> ListenerId {
        let id = self.inner.add_pointer_down_listener();
        self.log.borrow_mut().push(format!("attach {}", id.0));
        id
    }

    fn remove_pointer_down_listener(&self, id: ListenerId) {
        self.log.borrow_mut().push(format!("detach {}", id.0));
        self.inner.remove_pointer_down_listener(id);
    }

    fn lock_scroll(&self) {
        self.log.borrow_mut().push("lock".to_string());
        self.inner.lock_scroll();
    }

    fn unlock_scroll(&self) {
        self.log.borrow_mut().push("unlock".to_string());
        self.inner.unlock_scroll();
    }

    fn notify(&self, message: &str) {
        self.log.borrow_mut().push(format!("notify {message}"));
        self.inner.notify(message);
    }
}

fn shell() -> (AppShell<RecordingDocument>, Rc<RecordingDocument>) {
    let doc = Rc::new(RecordingDocument::default());
    (AppShell::new(Rc::clone(&doc)), doc)
}

#[test]
fn add_merge_and_checkout_scenario() {
    let (mut shell, doc) = shell();
    let page = shell.page_mut();
    page.increase_quantity();
    page.add_to_cart().unwrap();
    for _ in 0..2 {
        page.increase_quantity();
    }
    page.add_to_cart().unwrap();

    let cart = shell.cart().snapshot();
    assert_eq!(cart.line_count(), 1);
    assert_eq!(cart.items()[0].quantity, 5);
    assert_eq!(cart.items()[0].unit_price, Money::from_major(125, Currency::USD));

    shell.widget_mut().toggle(DESKTOP);
    let summary = shell.widget_mut().checkout().unwrap();
    assert_eq!(summary.total, Money::from_major(625, Currency::USD));
    assert_eq!(shell.widget().state(), WidgetState::Closed);
    assert_eq!(shell.cart().item_count(), 5);
    assert_eq!(
        doc.log(),
        vec!["attach 0", "notify Checkout 1 item(s) for $625.00", "detach 0"]
    );
    doc.assert_released();
}

#[test]
fn every_close_trigger_releases_effects() {
    // Toggle, desktop and mobile
    for viewport in [DESKTOP, MOBILE] {
        let (mut shell, doc) = shell();
        shell.widget_mut().toggle(viewport);
        shell.widget_mut().toggle(viewport);
        doc.assert_released();
    }

    // Outside click
    {
        let (mut shell, doc) = shell();
        shell.widget_mut().toggle(DESKTOP);
        assert!(shell.widget_mut().pointer_down(PointerTarget::Outside));
        doc.assert_released();
    }

    // Backdrop
    {
        let (mut shell, doc) = shell();
        shell.widget_mut().toggle(MOBILE);
        assert!(shell.widget_mut().backdrop_click());
        doc.assert_released();
    }

    // Checkout, desktop and mobile
    for viewport in [DESKTOP, MOBILE] {
        let (mut shell, doc) = shell();
        shell.page_mut().add_to_cart().unwrap();
        shell.widget_mut().toggle(viewport);
        shell.widget_mut().checkout().unwrap();
        doc.assert_released();
    }

    // Teardown while open
    for viewport in [DESKTOP, MOBILE] {
        let (mut shell, doc) = shell();
        shell.widget_mut().toggle(viewport);
        drop(shell);
        doc.assert_released();
    }
}

#[test]
fn mobile_session_locks_scroll_exactly_once() {
    let (mut shell, doc) = shell();
    shell.widget_mut().toggle(MOBILE);
    let view = shell.view().unwrap();
    assert_eq!(view.widget.panel.unwrap().variant, PanelVariant::Modal);

    shell.widget_mut().backdrop_click();
    shell.widget_mut().toggle(MOBILE);
    shell.widget_mut().toggle(MOBILE);
    assert_eq!(doc.log(), vec!["lock", "unlock", "lock", "unlock"]);
}

#[test]
fn gallery_wraps_across_both_surfaces() {
    let (mut shell, _) = shell();
    let page = shell.page_mut();
    assert_eq!(page.previous_image(), 3);
    assert_eq!(page.next_image(), 0);

    page.select_image(1);
    let view = shell.view().unwrap();
    assert_eq!(view.page.image.src, "/images/image-product-2.jpg");
    assert!(view.page.thumbnails[1].selected);
    assert!(view.page.carousel_dots[1]);
}

#[test]
fn every_nav_route_renders_the_product_page() {
    let (mut shell, _) = shell();
    for route in Route::NAV {
        shell.navigate_path(route.path()).unwrap();
        let view = shell.view().unwrap();
        assert_eq!(view.route, route);
        assert_eq!(view.page.name, "Fall Limited Edition Sneakers");
    }
}

#[test]
fn shell_works_through_a_trait_object_document() {
    let memory = Rc::new(MemoryDocument::new());
    let doc: Rc<dyn Document> = memory.clone();
    let mut shell = AppShell::new(doc);

    shell.page_mut().add_to_cart().unwrap();
    shell.widget_mut().toggle(MOBILE);
    assert!(memory.is_scroll_locked());
    shell.widget_mut().checkout().unwrap();

    assert!(!memory.is_scroll_locked());
    assert_eq!(memory.notifications(), vec!["Checkout 1 item(s) for $125.00"]);
}
