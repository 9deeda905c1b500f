//! App shell: the composition root shared by every route.

use std::rc::Rc;

use serde::Serialize;
use sneaker_commerce::catalog::Product;
use sneaker_commerce::CommerceError;
use tracing::debug;

use crate::document::Document;
use crate::error::StorefrontResult;
use crate::page::{ProductPage, ProductPageView};
use crate::routes::Route;
use crate::store::CartStore;
use crate::widget::{CartWidget, CartWidgetView, WidgetState};

/// Root layout: header with navigation and cart widget, plus the routed page.
///
/// The shell owns the session's cart. The mounted page and the widget hold
/// clones of the same `CartStore`; navigating remounts the page (fresh
/// gallery and quantity) while the cart and the widget persist.
#[derive(Debug)]
pub struct AppShell<D: Document + ?Sized> {
    product: Rc<Product>,
    cart: CartStore,
    widget: CartWidget<D>,
    page: ProductPage,
    route: Route,
    menu_open: bool,
}

impl<D: Document + ?Sized> AppShell<D> {
    /// Mount the shell on `document` at the index route with the demo product.
    pub fn new(document: Rc<D>) -> Self {
        Self::with_product(document, Product::fall_limited_edition_sneakers())
            .unwrap_or_else(|| unreachable!("demo product has images"))
    }

    /// Mount the shell for `product`; `None` if the product has no images.
    pub fn with_product(document: Rc<D>, product: Product) -> Option<Self> {
        let product = Rc::new(product);
        let cart = CartStore::with_currency(product.price.currency);
        let page = ProductPage::mount(Rc::clone(&product), cart.clone())?;
        let widget = CartWidget::new(cart.clone(), document);
        Some(Self {
            product,
            cart,
            widget,
            page,
            route: Route::Home,
            menu_open: false,
        })
    }

    /// Current route.
    pub fn route(&self) -> Route {
        self.route
    }

    /// The session's cart.
    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    /// The mounted product page.
    pub fn page(&self) -> &ProductPage {
        &self.page
    }

    /// Mutable access to the mounted product page.
    pub fn page_mut(&mut self) -> &mut ProductPage {
        &mut self.page
    }

    /// The header cart widget.
    pub fn widget(&self) -> &CartWidget<D> {
        &self.widget
    }

    /// Mutable access to the header cart widget.
    pub fn widget_mut(&mut self) -> &mut CartWidget<D> {
        &mut self.widget
    }

    /// Follow a navigation link.
    ///
    /// Remounts the product page and closes the navigation drawer.
    pub fn navigate(&mut self, route: Route) {
        if let Some(page) = ProductPage::mount(Rc::clone(&self.product), self.cart.clone()) {
            self.page = page;
        }
        self.route = route;
        self.menu_open = false;
        debug!(route = %route, "navigated");
    }

    /// Navigate by path.
    pub fn navigate_path(&mut self, path: &str) -> StorefrontResult<Route> {
        let route = Route::from_path(path)?;
        self.navigate(route);
        Ok(route)
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// Hamburger button in mobile layout.
    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    /// Close button inside the drawer.
    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Render model of the whole page.
    pub fn view(&self) -> Result<ShellView, CommerceError> {
        Ok(ShellView {
            route: self.route,
            nav: Route::NAV
                .iter()
                .map(|route| NavLinkView {
                    label: route.label(),
                    path: route.path(),
                    active: *route == self.route,
                })
                .collect(),
            menu_open: self.menu_open,
            widget_state: self.widget.state(),
            widget: self.widget.view()?,
            page: self.page.view(),
        })
    }
}

/// Render model of the shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShellView {
    pub route: Route,
    pub nav: Vec<NavLinkView>,
    pub menu_open: bool,
    pub widget_state: WidgetState,
    pub widget: CartWidgetView,
    pub page: ProductPageView,
}

/// One navigation link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLinkView {
    pub label: &'static str,
    pub path: &'static str,
    pub active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::MemoryDocument;
    use crate::viewport::Viewport;

    fn shell() -> AppShell<MemoryDocument> {
        AppShell::new(Rc::new(MemoryDocument::new()))
    }

    #[test]
    fn test_page_and_widget_share_cart() {
        let mut shell = shell();
        shell.page_mut().increase_quantity();
        shell.page_mut().add_to_cart().unwrap();

        let view = shell.view().unwrap();
        assert_eq!(view.widget.badge, Some(2));
        assert_eq!(shell.cart().item_count(), 2);
    }

    #[test]
    fn test_navigation_remounts_page_but_keeps_cart() {
        let mut shell = shell();
        shell.page_mut().add_to_cart().unwrap();
        shell.page_mut().next_image();
        shell.page_mut().increase_quantity();

        shell.navigate(Route::Men);
        assert_eq!(shell.route(), Route::Men);
        assert_eq!(shell.page().gallery().index(), 0);
        assert_eq!(shell.page().quantity(), 1);
        assert_eq!(shell.cart().item_count(), 1);
    }

    #[test]
    fn test_widget_survives_navigation() {
        let mut shell = shell();
        shell.widget_mut().toggle(Viewport::new(1024));
        shell.navigate(Route::About);
        assert_eq!(shell.widget().state(), WidgetState::OpenDesktop);
    }

    #[test]
    fn test_menu_closes_on_navigation() {
        let mut shell = shell();
        assert!(shell.toggle_menu());
        shell.navigate_path("/contact").unwrap();
        assert!(!shell.is_menu_open());

        shell.toggle_menu();
        shell.close_menu();
        assert!(!shell.is_menu_open());
    }

    #[test]
    fn test_unknown_path_keeps_current_page() {
        let mut shell = shell();
        shell.navigate(Route::Women);
        assert!(shell.navigate_path("/nope").is_err());
        assert_eq!(shell.route(), Route::Women);
    }

    #[test]
    fn test_nav_marks_active_route() {
        let mut shell = shell();
        shell.navigate(Route::Collections);
        let view = shell.view().unwrap();
        let active: Vec<&str> = view
            .nav
            .iter()
            .filter(|link| link.active)
            .map(|link| link.label)
            .collect();
        assert_eq!(active, ["Collections"]);
        assert_eq!(view.nav.len(), 5);
    }
}
