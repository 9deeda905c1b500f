//! Storefront actions shared by the interactive shop and the script runner.

use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use anyhow::{anyhow, bail, Context as _, Result};
use sneaker_storefront::{AppShell, PointerTarget, Route, ShellView, Viewport, WidgetState};

use crate::terminal::TerminalDocument;

/// One user interaction with the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Increase,
    Decrease,
    NextImage,
    PreviousImage,
    /// Select an image by 1-based position.
    SelectImage(usize),
    AddToCart,
    ToggleCart,
    ClickOutside,
    ClickInside,
    Backdrop,
    Checkout,
    Navigate(Route),
    ToggleMenu,
    CloseMenu,
    Resize(u32),
    Show,
}

impl Action {
    /// Script keywords, for help text.
    pub const SYNTAX: &'static [&'static str] = &[
        "inc | dec",
        "next | prev | select <n>",
        "add",
        "cart | click outside | click inside | backdrop | checkout",
        "go <route>",
        "menu | menu close",
        "resize <px>",
        "show",
    ];
}

impl FromStr for Action {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut words = s.split_whitespace();
        let command = words.next().ok_or_else(|| anyhow!("empty action"))?;
        let arg = words.next();
        if let Some(extra) = words.next() {
            bail!("unexpected '{}' in '{}'", extra, s.trim());
        }

        let action = match (command, arg) {
            ("inc" | "+", None) => Action::Increase,
            ("dec" | "-", None) => Action::Decrease,
            ("next", None) => Action::NextImage,
            ("prev", None) => Action::PreviousImage,
            ("select", Some(n)) => Action::SelectImage(
                n.parse()
                    .with_context(|| format!("invalid image position '{}'", n))?,
            ),
            ("add", None) => Action::AddToCart,
            ("cart", None) => Action::ToggleCart,
            ("click", Some("outside")) => Action::ClickOutside,
            ("click", Some("inside")) => Action::ClickInside,
            ("backdrop", None) => Action::Backdrop,
            ("checkout", None) => Action::Checkout,
            ("go", Some(route)) => Action::Navigate(route.parse()?),
            ("menu", None) => Action::ToggleMenu,
            ("menu", Some("close")) => Action::CloseMenu,
            ("resize", Some(px)) => Action::Resize(
                px.parse()
                    .with_context(|| format!("invalid width '{}'", px))?,
            ),
            ("show", None) => Action::Show,
            _ => bail!("unknown action '{}'", s.trim()),
        };
        Ok(action)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Increase => write!(f, "inc"),
            Action::Decrease => write!(f, "dec"),
            Action::NextImage => write!(f, "next"),
            Action::PreviousImage => write!(f, "prev"),
            Action::SelectImage(n) => write!(f, "select {}", n),
            Action::AddToCart => write!(f, "add"),
            Action::ToggleCart => write!(f, "cart"),
            Action::ClickOutside => write!(f, "click outside"),
            Action::ClickInside => write!(f, "click inside"),
            Action::Backdrop => write!(f, "backdrop"),
            Action::Checkout => write!(f, "checkout"),
            Action::Navigate(route) => write!(f, "go {}", route),
            Action::ToggleMenu => write!(f, "menu"),
            Action::CloseMenu => write!(f, "menu close"),
            Action::Resize(px) => write!(f, "resize {}", px),
            Action::Show => write!(f, "show"),
        }
    }
}

/// A running storefront in the terminal.
pub struct Session {
    pub shell: AppShell<TerminalDocument>,
    pub document: Rc<TerminalDocument>,
    pub viewport: Viewport,
}

impl Session {
    pub fn new(document: TerminalDocument, viewport: Viewport) -> Self {
        let document = Rc::new(document);
        Self {
            shell: AppShell::new(Rc::clone(&document)),
            document,
            viewport,
        }
    }

    /// Apply an action; returns a short description of what happened.
    pub fn apply(&mut self, action: Action) -> Result<String> {
        let message = match action {
            Action::Increase => format!("Quantity {}", self.shell.page_mut().increase_quantity()),
            Action::Decrease => format!("Quantity {}", self.shell.page_mut().decrease_quantity()),
            Action::NextImage => format!("Image {}", self.shell.page_mut().next_image() + 1),
            Action::PreviousImage => {
                format!("Image {}", self.shell.page_mut().previous_image() + 1)
            }
            Action::SelectImage(position) => {
                let count = self.shell.page().gallery().len();
                if position == 0 || position > count {
                    bail!("image position must be between 1 and {}", count);
                }
                self.shell.page_mut().select_image(position - 1);
                format!("Image {}", position)
            }
            Action::AddToCart => {
                let quantity = self.shell.page().quantity();
                self.shell.page_mut().add_to_cart()?;
                format!("Added {} to cart", quantity)
            }
            Action::ToggleCart => {
                let state = self.shell.widget_mut().toggle(self.viewport);
                format!("Cart {}", describe(state))
            }
            Action::ClickOutside => {
                if self.shell.widget_mut().pointer_down(PointerTarget::Outside) {
                    "Cart closed".to_string()
                } else {
                    "Nothing to dismiss".to_string()
                }
            }
            Action::ClickInside => {
                self.shell.widget_mut().pointer_down(PointerTarget::Inside);
                format!("Cart {}", describe(self.shell.widget().state()))
            }
            Action::Backdrop => {
                if self.shell.widget_mut().backdrop_click() {
                    "Cart closed".to_string()
                } else {
                    "No backdrop shown".to_string()
                }
            }
            Action::Checkout => {
                if !self.shell.widget().is_open() || self.shell.cart().is_empty() {
                    bail!("checkout is only offered in an open cart with items");
                }
                let summary = self.shell.widget_mut().checkout()?;
                format!("Checked out {} for {}", summary.item_count, summary.total)
            }
            Action::Navigate(route) => {
                self.shell.navigate(route);
                format!("Now on {}", route)
            }
            Action::ToggleMenu => {
                if self.shell.toggle_menu() {
                    "Menu opened".to_string()
                } else {
                    "Menu closed".to_string()
                }
            }
            Action::CloseMenu => {
                self.shell.close_menu();
                "Menu closed".to_string()
            }
            Action::Resize(width) => {
                self.viewport = Viewport::new(width);
                format!("Viewport {}px", width)
            }
            Action::Show => String::new(),
        };
        tracing::debug!(%action, "applied");
        Ok(message)
    }

    pub fn view(&self) -> Result<ShellView> {
        Ok(self.shell.view()?)
    }
}

fn describe(state: WidgetState) -> &'static str {
    match state {
        WidgetState::Closed => "closed",
        WidgetState::OpenDesktop => "opened (dropdown)",
        WidgetState::OpenMobile => "opened (full screen)",
    }
}

/// Parse a script: one action per line, blank lines and `#` comments skipped.
pub fn parse_script(text: &str) -> Result<Vec<(usize, Action)>> {
    text.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.split('#').next().unwrap_or_default().trim()))
        .filter(|(_, line)| !line.is_empty())
        .map(|(number, line)| {
            line.parse()
                .map(|action| (number, action))
                .with_context(|| format!("line {}", number))
        })
        .collect()
}
