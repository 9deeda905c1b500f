//! Interactive shopping session.

use anyhow::{bail, Result};
use dialoguer::{theme::ColorfulTheme, Input, Select};
use sneaker_storefront::{Route, WidgetState};

use super::ShopArgs;
use crate::action::{Action, Session};
use crate::context::Context;
use crate::render::render_shell;
use crate::terminal::TerminalDocument;

/// Run the shop command.
pub fn run(args: ShopArgs, ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        bail!("the interactive shop has no JSON mode; use `sneakers run` instead");
    }

    let mut session = Session::new(TerminalDocument::new(true, false), ctx.viewport());
    if let Some(route) = args.route {
        session.apply(Action::Navigate(route.parse()?))?;
    }

    let theme = ColorfulTheme::default();
    let mut status = String::new();
    loop {
        ctx.output.clear();
        render_shell(
            &ctx.output,
            &session.view()?,
            session.viewport,
            session.document.is_scroll_locked(),
        );
        if !status.is_empty() {
            ctx.output.info(&status);
        }

        let menu = menu_for(&session);
        let labels: Vec<&str> = menu.iter().map(|(label, _)| *label).collect();
        let choice = Select::with_theme(&theme)
            .with_prompt("What next?")
            .items(&labels)
            .default(0)
            .interact_opt()?;

        let Some(index) = choice else {
            break;
        };
        let action = match menu.get(index).map(|(_, entry)| *entry) {
            Some(MenuEntry::Do(action)) => action,
            Some(MenuEntry::PickImage) => {
                let count = session.shell.page().gallery().len();
                let position: usize = Input::with_theme(&theme)
                    .with_prompt(format!("Image (1-{})", count))
                    .interact_text()?;
                Action::SelectImage(position)
            }
            Some(MenuEntry::PickRoute) => {
                let labels: Vec<&str> = Route::NAV.iter().map(|r| r.label()).collect();
                let picked = Select::with_theme(&theme)
                    .with_prompt("Go to")
                    .items(&labels)
                    .default(0)
                    .interact()?;
                match Route::NAV.get(picked) {
                    Some(route) => Action::Navigate(*route),
                    None => continue,
                }
            }
            Some(MenuEntry::Resize) => {
                let width: u32 = Input::with_theme(&theme)
                    .with_prompt("Viewport width (px)")
                    .default(session.viewport.width_px)
                    .interact_text()?;
                Action::Resize(width)
            }
            Some(MenuEntry::Quit) | None => break,
        };

        status = match session.apply(action) {
            Ok(message) => message,
            Err(e) => {
                ctx.output.warn(&format!("{:#}", e));
                String::new()
            }
        };
    }

    ctx.output.success("Thanks for visiting");
    Ok(())
}

#[derive(Debug, Clone, Copy)]
enum MenuEntry {
    Do(Action),
    PickImage,
    PickRoute,
    Resize,
    Quit,
}

/// Choices that make sense in the current state, mirroring what the page
/// would show.
fn menu_for(session: &Session) -> Vec<(&'static str, MenuEntry)> {
    let mut menu = Vec::new();
    let widget_state = session.shell.widget().state();

    match widget_state {
        WidgetState::OpenDesktop => {
            menu.push(("Click outside the cart", MenuEntry::Do(Action::ClickOutside)));
        }
        WidgetState::OpenMobile => {
            menu.push(("Tap the backdrop", MenuEntry::Do(Action::Backdrop)));
        }
        WidgetState::Closed => {}
    }
    if widget_state.is_open() && !session.shell.cart().is_empty() {
        menu.push(("Checkout", MenuEntry::Do(Action::Checkout)));
    }

    menu.extend([
        ("Add to cart", MenuEntry::Do(Action::AddToCart)),
        ("Quantity +", MenuEntry::Do(Action::Increase)),
        ("Quantity -", MenuEntry::Do(Action::Decrease)),
        ("Next image", MenuEntry::Do(Action::NextImage)),
        ("Previous image", MenuEntry::Do(Action::PreviousImage)),
        ("Pick an image", MenuEntry::PickImage),
        ("Cart icon", MenuEntry::Do(Action::ToggleCart)),
        ("Navigate", MenuEntry::PickRoute),
        ("Menu", MenuEntry::Do(Action::ToggleMenu)),
        ("Resize viewport", MenuEntry::Resize),
        ("Quit", MenuEntry::Quit),
    ]);
    menu
}
