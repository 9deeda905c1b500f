//! Sneakers CLI - Terminal front end for the sneaker storefront.
//!
//! Commands:
//! - `sneakers shop` - Browse the product page interactively
//! - `sneakers run` - Replay a script of storefront actions
//! - `sneakers routes` - List storefront routes
//! - `sneakers config` - Manage configuration

mod action;
mod commands;
mod config;
mod context;
mod output;
mod render;
mod terminal;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{ConfigArgs, RunArgs, ShopArgs};
use config::LogFormat;

/// Sneakers CLI - Browse the sneaker storefront from a terminal
#[derive(Parser)]
#[command(name = "sneakers")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Viewport width in pixels (overrides config)
    #[arg(short, long, global = true)]
    width: Option<u32>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the product page interactively
    Shop(ShopArgs),

    /// Replay a script of storefront actions
    Run(RunArgs),

    /// List storefront routes
    Routes,

    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let mut ctx = match context::Context::load(config_path, output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };
    if let Some(width) = cli.width {
        ctx.config.display.viewport_width = width;
    }

    init_logging(&ctx, cli.verbose);

    // Execute command
    let result = match cli.command {
        Commands::Shop(args) => commands::shop::run(args, &ctx),
        Commands::Run(args) => commands::run::run(args, &ctx),
        Commands::Routes => commands::routes::run(&ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

/// Install the tracing subscriber.
///
/// `SNEAKERS_LOG` (then `RUST_LOG`) wins over `--verbose`, which wins over
/// the config level.
fn init_logging(ctx: &context::Context, verbose: bool) {
    let default_level = if verbose {
        "debug"
    } else {
        ctx.config.log.level.as_str()
    };
    let filter = EnvFilter::try_from_env("SNEAKERS_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    match ctx.config.log.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Human => builder.init(),
    }
}
