//! Configuration management commands.

use anyhow::{bail, Context as _, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CliConfig, CONFIG_FILE_NAMES};
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { file, force } => init_config(&file, force, ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Current Configuration");

    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.info("");
    ctx.output.info("[display]");
    ctx.output.kv(
        "viewport_width",
        &ctx.config.display.viewport_width.to_string(),
    );
    let layout = if ctx.viewport().is_desktop() {
        "desktop"
    } else {
        "mobile"
    };
    ctx.output.kv("layout", layout);

    ctx.output.info("");
    ctx.output.info("[log]");
    ctx.output.kv("level", &ctx.config.log.level);
    ctx.output.kv("format", &format!("{:?}", ctx.config.log.format).to_lowercase());

    Ok(())
}

fn init_config(file: &str, force: bool, ctx: &Context) -> Result<()> {
    if !CONFIG_FILE_NAMES.contains(&file) {
        ctx.output.warn(&format!(
            "{} is not searched automatically; pass it with --config",
            file
        ));
    }
    let path = ctx.cwd.join(file);

    if path.exists() && !force {
        bail!(
            "{} already exists. Use --force to overwrite.",
            path.display()
        );
    }

    if file.ends_with(".json") {
        CliConfig::default().save(&path.to_string_lossy())?;
    } else {
        std::fs::write(&path, generate_default_config())
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }
    ctx.output.success(&format!("Created {}", path.display()));

    Ok(())
}
