//! CLI command implementations.

pub mod config;
pub mod routes;
pub mod run;
pub mod shop;

use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Arguments for the shop command.
#[derive(Args)]
pub struct ShopArgs {
    /// Route to open first (e.g. "men" or "/women").
    #[arg(short, long)]
    pub route: Option<String>,
}

/// Arguments for the run command.
#[derive(Args)]
pub struct RunArgs {
    /// Script file, one action per line.
    pub script: PathBuf,

    /// Render the page after every action instead of only at the end.
    #[arg(long)]
    pub each: bool,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Write a default config file
    Init {
        /// File to write; a `.json` name writes JSON
        #[arg(default_value = "sneakers.toml")]
        file: String,

        /// Overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}
