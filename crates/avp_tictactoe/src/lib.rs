//! Alien vs Predator tic-tac-toe.
//!
//! Game-state engine for a 3x3 board, played human-vs-human or against a
//! heuristic opponent.
//!
//! # Architecture
//!
//! - **Board**: the grid, placement and win/draw queries
//! - **Rules**: pure line and fullness checks shared by board and opponent
//! - **Opponent**: prioritized tactics gated by a random threshold
//! - **TurnController**: session state machine that drives both sides
//!
//! # Example
//!
//! ```
//! use avp_tictactoe::{GameEvent, Phase, Players, TurnController};
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let mut game = TurnController::new(Players::default(), StdRng::seed_from_u64(1), Vec::<GameEvent>::new());
//! game.set_opponent_enabled(true);
//! let phase = game.submit_move(1, 1)?;
//! assert_eq!(phase, Phase::InProgress);
//! assert_eq!(game.board().empty_positions().len(), 7);
//! # Ok::<(), avp_tictactoe::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod config;
mod controller;
mod error;
mod event;
mod opponent;
mod position;
pub mod rules;
mod types;

pub use board::Board;
pub use config::{ConfigError, GameConfig};
pub use controller::{OPPONENT_ID, TurnController};
pub use error::MoveError;
pub use event::{EventSink, GameEvent, TracingSink};
pub use opponent::{
    BLOCK_THRESHOLD, Dice, Opponent, OpponentMove, POSITIONAL_THRESHOLD, RANDOM_ATTACK_THRESHOLD,
    Tactic, winning_move,
};
pub use position::Position;
pub use types::{Mark, Outcome, Phase, Player, PlayerId, Players, Square};
