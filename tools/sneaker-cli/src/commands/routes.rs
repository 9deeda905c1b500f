//! List storefront routes.

use anyhow::Result;
use serde::Serialize;
use sneaker_storefront::Route;

use crate::context::Context;

#[derive(Serialize)]
struct RouteRow {
    path: &'static str,
    label: &'static str,
}

/// Run the routes command.
pub fn run(ctx: &Context) -> Result<()> {
    let rows: Vec<RouteRow> = std::iter::once(Route::Home)
        .chain(Route::NAV)
        .map(|route| RouteRow {
            path: route.path(),
            label: route.label(),
        })
        .collect();

    if ctx.output.is_json() {
        ctx.output.json(&rows);
        return Ok(());
    }

    ctx.output.header("Routes");
    ctx.output.table_row(&["PATH", "LABEL"], &[14, 12]);
    for row in &rows {
        ctx.output.table_row(&[row.path, row.label], &[14, 12]);
    }
    ctx.output.info("Every route renders the product page.");
    Ok(())
}
