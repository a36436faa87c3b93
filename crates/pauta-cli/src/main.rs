//! Pauta CLI Application
//!
//! Command-line interface for the Pauta Instagram content planner.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use pauta_core::ContentPlannerBuilder;
use renderer::TerminalRenderer;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        data_dir,
        no_color,
        command,
    } = Args::parse();

    let planner = ContentPlannerBuilder::new()
        .with_data_dir(data_dir)
        .build()
        .await
        .context("Failed to initialize planner")?;

    let renderer = TerminalRenderer::new(!no_color);
    let cli = Cli::new(planner, renderer);

    info!("Pauta started");

    match command {
        Some(Commands::Week { command }) => cli.handle_week_command(command).await,
        Some(Commands::Post { command }) => cli.handle_post_command(command).await,
        Some(Commands::Ideas { command }) => cli.handle_idea_command(command).await,
        Some(Commands::Backup { command }) => cli.handle_backup_command(command).await,
        Some(Commands::Config { command }) => cli.handle_config_command(command).await,
        None => cli.show_current_week().await,
    }
}
