//! Alien vs Predator - terminal tic-tac-toe
//!
//! Plays one interactive session on stdin/stdout. Logs go to stderr and are
//! controlled by `RUST_LOG`.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod console;
mod scoreboard;

use anyhow::{Context, Result};
use avp_tictactoe::{GameConfig, GameEvent, TurnController};
use clap::Parser;
use cli::{Cli, Command};
use console::Console;
use std::path::PathBuf;
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            two_player,
            seed,
        } => run_play(config, two_player, seed),
        Command::CheckConfig { path } => run_check_config(path),
    }
}

/// Resolves settings (flags over file over defaults) and runs the game loop.
#[instrument]
fn run_play(config: Option<PathBuf>, two_player: bool, seed: Option<u64>) -> Result<()> {
    let mut settings = match &config {
        Some(path) => GameConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => GameConfig::default(),
    };
    if two_player {
        settings = settings.with_opponent_enabled(false);
    }
    if seed.is_some() {
        settings = settings.with_seed(seed);
    }
    debug!(?settings, "Resolved settings");

    info!("Starting game");
    let game = TurnController::from_config(&settings, Vec::<GameEvent>::new());
    let mut console = Console::new(game);

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    console.run(stdin.lock(), &mut stdout)?;

    info!(score = ?console.score(), "Session finished");
    Ok(())
}

/// Loads a config file and prints what it resolves to.
#[instrument]
fn run_check_config(path: PathBuf) -> Result<()> {
    let settings = GameConfig::from_file(&path)
        .with_context(|| format!("Failed to load config from {}", path.display()))?;

    println!("opponent_enabled = {}", settings.opponent_enabled());
    match settings.seed() {
        Some(seed) => println!("seed = {}", seed),
        None => println!("seed = (random)"),
    }
    println!("alien_name = {:?}", settings.alien_name());
    println!("predator_name = {:?}", settings.predator_name());
    Ok(())
}
