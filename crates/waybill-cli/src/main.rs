//! Waybill CLI Application
//!
//! Command-line interface for the waybill order-to-delivery follow-up
//! tool.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use waybill_core::{params::ListItems, TrackerBuilder};
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let tracker = TrackerBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize tracker")?;

    let renderer = TerminalRenderer::new(!no_color);
    let cli = Cli::new(tracker, renderer);

    info!("Waybill started");

    match command {
        Some(Party { command }) => cli.handle_party_command(command).await,
        Some(Item { command }) => cli.handle_item_command(command).await,
        Some(Step { command }) => cli.handle_step_command(command).await,
        Some(Config { command }) => cli.handle_config_command(command).await,
        Some(Watch(watch_args)) => cli.watch(watch_args).await,
        None => cli.list_items(&ListItems::default()).await,
    }
}
