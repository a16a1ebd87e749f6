mod cli;
mod config;
mod consts;
mod models;
mod net;
mod timetable;
mod tui;
mod utils;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use cli::args::{Cli, Commands};
use cli::handlers;
use config::AppConfig;
use tui::app::Outcome;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let mut config = AppConfig::load().context("Loading config")?;
    if let Some(server) = cli.server {
        config.server.base_url = server;
    }

    match cli.command {
        Some(Commands::Times { prayer }) => {
            handlers::handle_times(&config, prayer.as_deref()).await?;
        }
        Some(Commands::Init) => {
            handlers::handle_init()?;
        }

        // No subcommand: run the wall display until quit, rebuilding the
        // session whenever the server publishes a new content version.
        None => loop {
            info!("starting display session against {}", config.server.base_url);
            match tui::app::run(config.clone()).await? {
                Outcome::Reload => continue,
                Outcome::Quit => break,
            }
        },
    }

    Ok(())
}
