//! Text rendering of the storefront view models.

use console::style;
use sneaker_storefront::{CartPanelView, PanelVariant, ShellView, Viewport};

use crate::output::Output;

/// Draw the header, the cart panel (when open) and the product page.
pub fn render_shell(output: &Output, view: &ShellView, viewport: Viewport, scroll_locked: bool) {
    if output.is_json() {
        output.json(view);
        return;
    }

    render_header(output, view, viewport);

    if let Some(panel) = &view.widget.panel {
        render_panel(output, panel);
    }

    if view.menu_open {
        output.header("Menu");
        for link in &view.nav {
            output.list_item(link.label);
        }
    }

    let page = &view.page;
    output.header(&page.name);
    output.line(&format!("{}", style(page.company.to_uppercase()).dim()));
    output.line(&page.description);
    output.line("");

    let mut price = format!("{}", style(&page.price).bold());
    if let Some(badge) = &page.discount_badge {
        price.push_str(&format!("  {}", style(badge).reverse()));
    }
    if let Some(compare) = &page.compare_at_price {
        price.push_str(&format!("  {}", style(format!("was {}", compare)).dim()));
    }
    output.line(&price);
    output.line("");

    let dots: String = page
        .carousel_dots
        .iter()
        .map(|selected| if *selected { '●' } else { '○' })
        .collect();
    output.kv("image", &format!("{} {}", page.image.src, dots));
    let thumbnails: Vec<String> = page
        .thumbnails
        .iter()
        .enumerate()
        .map(|(i, thumb)| {
            if thumb.selected {
                format!("[{}]", i + 1)
            } else {
                format!(" {} ", i + 1)
            }
        })
        .collect();
    output.kv("thumbnails", &thumbnails.join(""));
    output.kv("quantity", &format!("- {} +", page.quantity));

    if scroll_locked {
        output.line(&format!("{}", style("(page scroll locked)").dim()));
    }
}

fn render_header(output: &Output, view: &ShellView, viewport: Viewport) {
    let nav: Vec<String> = view
        .nav
        .iter()
        .map(|link| {
            if link.active {
                format!("{}", style(link.label).bold())
            } else {
                link.label.to_string()
            }
        })
        .collect();

    let badge = view
        .widget
        .badge
        .map(|count| format!(" {}", style(format!("({})", count)).yellow().bold()))
        .unwrap_or_default();

    let layout = if viewport.is_desktop() { "desktop" } else { "mobile" };
    output.line(&format!(
        "{}  {}  {}{}  {}",
        style("sneakers").bold(),
        nav.join(" "),
        "Cart",
        badge,
        style(format!("{}px {}", viewport.width_px, layout)).dim()
    ));
}

fn render_panel(output: &Output, panel: &CartPanelView) {
    let title = match panel.variant {
        PanelVariant::Dropdown => "Cart",
        PanelVariant::Modal => "Cart (full screen)",
    };
    output.header(title);

    if panel.is_empty {
        output.line("  Your cart is empty.");
        return;
    }

    for line in &panel.lines {
        let quantity = format!("× {}", line.quantity);
        output.table_row(
            &[line.name.as_str(), quantity.as_str(), line.subtotal.as_str()],
            &[32, 6, 10],
        );
    }
    output.kv("Total", &panel.total);
    if panel.show_checkout {
        output.line(&format!("  {}", style("[ Checkout ]").yellow()));
    }
}
