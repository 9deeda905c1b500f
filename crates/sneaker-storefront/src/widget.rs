//! Cart widget: badge, dropdown/modal panel and its open/close state machine.

use std::fmt;
use std::rc::Rc;

use serde::Serialize;
use sneaker_commerce::{CommerceError, Money};
use tracing::{debug, info};

use crate::document::{Document, PointerDownListener, ScrollLock};
use crate::store::CartStore;
use crate::viewport::{Viewport, ViewportClass};

/// Observable widget state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetState {
    Closed,
    /// Dropdown anchored to the cart icon.
    OpenDesktop,
    /// Full-screen modal with a backdrop.
    OpenMobile,
}

impl WidgetState {
    pub fn is_open(&self) -> bool {
        !matches!(self, WidgetState::Closed)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WidgetState::Closed => "closed",
            WidgetState::OpenDesktop => "open_desktop",
            WidgetState::OpenMobile => "open_mobile",
        }
    }
}

impl fmt::Display for WidgetState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why the widget closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    /// Cart icon activated again.
    Toggle,
    /// Pointer-down outside the widget in desktop layout.
    OutsideClick,
    /// Backdrop activated in mobile layout.
    Backdrop,
    /// Checkout action.
    Checkout,
}

/// Where a document pointer-down landed relative to the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    Inside,
    Outside,
}

/// State plus the document effects that belong to it.
///
/// Effects are owned by the variant, so leaving a state by any path drops
/// (and releases) exactly the effects that state acquired.
enum Phase<D: Document + ?Sized> {
    Closed,
    OpenDesktop { _listener: PointerDownListener<D> },
    OpenMobile { _scroll_lock: ScrollLock<D> },
}

impl<D: Document + ?Sized> Phase<D> {
    fn state(&self) -> WidgetState {
        match self {
            Phase::Closed => WidgetState::Closed,
            Phase::OpenDesktop { .. } => WidgetState::OpenDesktop,
            Phase::OpenMobile { .. } => WidgetState::OpenMobile,
        }
    }
}

/// Totals reported by the placeholder checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CheckoutSummary {
    /// Distinct cart lines.
    pub line_count: usize,
    /// Sum of quantities.
    pub item_count: u64,
    pub total: Money,
}

impl CheckoutSummary {
    /// Text of the blocking notification.
    pub fn message(&self) -> String {
        format!("Checkout {} item(s) for {}", self.line_count, self.total)
    }
}

/// The header cart widget.
///
/// Reads the shared cart for rendering and never mutates it. The layout
/// variant is picked from the viewport when the widget opens and kept until
/// it closes, even if the viewport crosses the breakpoint meanwhile.
pub struct CartWidget<D: Document + ?Sized> {
    cart: CartStore,
    document: Rc<D>,
    phase: Phase<D>,
}

impl<D: Document + ?Sized> CartWidget<D> {
    /// Create a closed widget over `cart`.
    pub fn new(cart: CartStore, document: Rc<D>) -> Self {
        Self {
            cart,
            document,
            phase: Phase::Closed,
        }
    }

    /// Current state.
    pub fn state(&self) -> WidgetState {
        self.phase.state()
    }

    /// Check if the dropdown or modal is showing.
    pub fn is_open(&self) -> bool {
        self.state().is_open()
    }

    /// Cart icon activated.
    pub fn toggle(&mut self, viewport: Viewport) -> WidgetState {
        if self.is_open() {
            self.close(CloseReason::Toggle);
        } else {
            self.open(viewport.class());
        }
        self.state()
    }

    fn open(&mut self, class: ViewportClass) {
        self.phase = match class {
            ViewportClass::Desktop => Phase::OpenDesktop {
                _listener: PointerDownListener::attach(&self.document),
            },
            ViewportClass::Mobile => Phase::OpenMobile {
                _scroll_lock: ScrollLock::acquire(&self.document),
            },
        };
        debug!(state = %self.state(), "cart widget opened");
    }

    fn close(&mut self, reason: CloseReason) {
        let from = self.state();
        self.phase = Phase::Closed;
        debug!(from = %from, ?reason, "cart widget closed");
    }

    /// Document pointer-down.
    ///
    /// Only the desktop dropdown listens; returns whether the widget closed.
    pub fn pointer_down(&mut self, target: PointerTarget) -> bool {
        if target == PointerTarget::Outside && matches!(self.phase, Phase::OpenDesktop { .. }) {
            self.close(CloseReason::OutsideClick);
            true
        } else {
            false
        }
    }

    /// Mobile backdrop activated; returns whether the widget closed.
    pub fn backdrop_click(&mut self) -> bool {
        if matches!(self.phase, Phase::OpenMobile { .. }) {
            self.close(CloseReason::Backdrop);
            true
        } else {
            false
        }
    }

    /// Placeholder checkout.
    ///
    /// Totals the cart as it is now, shows them in a blocking notification
    /// and closes. The cart is left as it was.
    pub fn checkout(&mut self) -> Result<CheckoutSummary, CommerceError> {
        let pricing = self.cart.calculate_pricing()?;
        let summary = CheckoutSummary {
            line_count: pricing.line_count(),
            item_count: pricing.item_count,
            total: pricing.grand_total,
        };
        info!(
            lines = summary.line_count,
            items = summary.item_count,
            total = %summary.total,
            "checkout"
        );
        self.document.notify(&summary.message());
        if self.is_open() {
            self.close(CloseReason::Checkout);
        }
        Ok(summary)
    }

    /// Render model for the badge and, when open, the panel.
    pub fn view(&self) -> Result<CartWidgetView, CommerceError> {
        let pricing = self.cart.calculate_pricing()?;
        let badge = (!pricing.is_empty()).then_some(pricing.item_count);

        let variant = match self.state() {
            WidgetState::Closed => return Ok(CartWidgetView { badge, panel: None }),
            WidgetState::OpenDesktop => PanelVariant::Dropdown,
            WidgetState::OpenMobile => PanelVariant::Modal,
        };

        let lines = pricing
            .line_items
            .iter()
            .map(|line| CartLineView {
                name: line.name.clone(),
                quantity: line.quantity,
                subtotal: line.subtotal.display(),
            })
            .collect::<Vec<_>>();

        Ok(CartWidgetView {
            badge,
            panel: Some(CartPanelView {
                variant,
                is_empty: lines.is_empty(),
                show_checkout: !lines.is_empty(),
                lines,
                total: pricing.grand_total.display(),
            }),
        })
    }
}

impl<D: Document + ?Sized> fmt::Debug for CartWidget<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartWidget")
            .field("cart", &self.cart)
            .field("state", &self.state())
            .finish()
    }
}

/// Which panel layout is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelVariant {
    Dropdown,
    Modal,
}

/// Render model of the widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartWidgetView {
    /// Sum of quantities; hidden when the cart is empty.
    pub badge: Option<u64>,
    pub panel: Option<CartPanelView>,
}

/// Render model of the open panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartPanelView {
    pub variant: PanelVariant,
    pub lines: Vec<CartLineView>,
    pub total: String,
    pub is_empty: bool,
    pub show_checkout: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartLineView {
    pub name: String,
    pub quantity: u32,
    pub subtotal: String,
}
