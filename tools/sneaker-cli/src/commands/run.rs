//! Replay a script of storefront actions.

use anyhow::{Context as _, Result};

use super::RunArgs;
use crate::action::{parse_script, Action, Session};
use crate::context::Context;
use crate::render::render_shell;
use crate::terminal::TerminalDocument;

/// Run the run command.
pub fn run(args: RunArgs, ctx: &Context) -> Result<()> {
    let text = std::fs::read_to_string(&args.script)
        .with_context(|| format!("Failed to read script: {}", args.script.display()))?;
    let script = parse_script(&text).map_err(|e| {
        ctx.output.info("Actions:");
        for syntax in Action::SYNTAX {
            ctx.output.list_item(syntax);
        }
        e
    })?;

    ctx.output.debug(&format!("{} actions", script.len()));
    let mut session = Session::new(
        TerminalDocument::new(false, ctx.output.is_json()),
        ctx.viewport(),
    );

    for (line, action) in script {
        let message = session
            .apply(action)
            .with_context(|| format!("line {}: {}", line, action))?;
        if !message.is_empty() {
            ctx.output.info(&format!("{}: {}", action, message));
        }
        if args.each || action == Action::Show {
            render(&session, ctx)?;
        }
    }

    if !args.each {
        render(&session, ctx)?;
    }
    Ok(())
}

fn render(session: &Session, ctx: &Context) -> Result<()> {
    render_shell(
        &ctx.output,
        &session.view()?,
        session.viewport,
        session.document.is_scroll_locked(),
    );
    Ok(())
}
