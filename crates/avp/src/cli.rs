//! Command-line interface for avp.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Alien vs Predator - tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "avp")]
#[command(about = "Alien vs Predator tic-tac-toe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game on stdin/stdout
    Play {
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Both sides are played from the keyboard
        #[arg(long)]
        two_player: bool,

        /// Seed for the opponent's random choices
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Load a config file and print the resolved settings
    CheckConfig {
        /// Path to the TOML config file
        path: PathBuf,
    },
}
