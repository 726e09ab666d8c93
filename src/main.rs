//! Folio - content pipeline for a static personal website.

mod cli;
mod config;
mod content;
mod embed;
mod generate;
mod logger;
mod render;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::FolioConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = FolioConfig::load(&cli)?;

    match &cli.command {
        Commands::Render { json_file, backup, .. } => {
            cli::render::render_site(json_file, *backup, &config)
        }
        Commands::Serve { .. } => cli::serve::serve_site(&config),
        Commands::Commit { message, status, .. } => {
            cli::commit::commit_site(message.as_deref(), *status, &config)
        }
        Commands::Generate { watch, .. } => cli::generate::generate_site(*watch, &config),
    }
}
