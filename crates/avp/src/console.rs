//! Line-oriented game loop.
//!
//! Reads one command per line, forwards moves to the [`TurnController`] and
//! renders the events it reports.

use crate::scoreboard::Scoreboard;
use anyhow::{Context, Result};
use avp_tictactoe::{Dice, GameEvent, PlayerId, TurnController};
use derive_more::{Display, Error};
use std::io::{BufRead, Write};
use tracing::{debug, instrument};

const HELP: &str = "\
Commands:
  <row> <col>     place your mark (0-2 each, e.g. `1 1` for the center)
  reset           start a new game
  opponent on|off let the Predator play itself, or not (starts a new game)
  board           show the board
  score           show the tally
  help            show this text
  quit            leave";

/// A parsed input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// Place the active player's mark.
    Move {
        /// Zero-based row.
        row: usize,
        /// Zero-based column.
        col: usize,
    },
    /// Start over.
    Reset,
    /// Toggle the heuristic opponent.
    Opponent(bool),
    /// Print the board.
    Board,
    /// Print the tally.
    Score,
    /// Print the command list.
    Help,
    /// Leave the loop.
    Quit,
}

/// Input line that is not a command.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Unrecognized command `{}` (type `help`)", input)]
pub struct ParseCommandError {
    /// The offending line, trimmed.
    pub input: String,
}

impl std::str::FromStr for ConsoleCommand {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let input = line.trim();
        let err = || ParseCommandError {
            input: input.to_string(),
        };
        let words: Vec<&str> = input
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|w| !w.is_empty())
            .collect();

        match words.as_slice() {
            ["reset" | "new"] => Ok(Self::Reset),
            ["board"] => Ok(Self::Board),
            ["score"] => Ok(Self::Score),
            ["help" | "?"] => Ok(Self::Help),
            ["quit" | "exit" | "q"] => Ok(Self::Quit),
            ["opponent", "on"] => Ok(Self::Opponent(true)),
            ["opponent", "off"] => Ok(Self::Opponent(false)),
            [row, col] => {
                let row: usize = row.parse().map_err(|_| err())?;
                let col: usize = col.parse().map_err(|_| err())?;
                if row < 3 && col < 3 {
                    Ok(Self::Move { row, col })
                } else {
                    Err(err())
                }
            }
            _ => Err(err()),
        }
    }
}

/// Whether the loop keeps reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next line.
    Continue,
    /// Stop.
    Quit,
}

/// A game session plus the tally shown to the players.
#[derive(Debug)]
pub struct Console<D> {
    game: TurnController<D, Vec<GameEvent>>,
    score: Scoreboard,
}

impl<D: Dice> Console<D> {
    /// Wraps a session.
    pub fn new(game: TurnController<D, Vec<GameEvent>>) -> Self {
        Self {
            game,
            score: Scoreboard::new(),
        }
    }

    /// The tally so far.
    pub fn score(&self) -> &Scoreboard {
        &self.score
    }

    /// The underlying session.
    pub fn game(&self) -> &TurnController<D, Vec<GameEvent>> {
        &self.game
    }

    /// Reads commands from `input` until `quit` or end of input.
    #[instrument(skip_all)]
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<()> {
        writeln!(out, "{}", self.banner())?;
        writeln!(out, "{}", self.game.board())?;
        self.prompt(out)?;

        for line in input.lines() {
            let line = line.context("Failed to read input")?;
            if line.trim().is_empty() {
                self.prompt(out)?;
                continue;
            }
            match line.parse::<ConsoleCommand>() {
                Ok(command) => {
                    if self.execute(command, out)? == Flow::Quit {
                        return Ok(());
                    }
                }
                Err(e) => writeln!(out, "{}", e)?,
            }
            self.prompt(out)?;
        }

        debug!("Input closed");
        Ok(())
    }

    /// Applies one command and renders whatever it produced.
    #[instrument(skip(self, out))]
    pub fn execute<W: Write>(&mut self, command: ConsoleCommand, out: &mut W) -> Result<Flow> {
        match command {
            ConsoleCommand::Move { row, col } => {
                if let Err(e) = self.game.submit_move(row, col) {
                    if !e.is_recoverable() {
                        return Err(e).context("Game engine rejected a validated move");
                    }
                }
                self.render_events(out)?;
                writeln!(out, "{}", self.game.board())?;
            }
            ConsoleCommand::Reset => {
                self.game.reset();
                self.render_events(out)?;
                writeln!(out, "{}", self.game.board())?;
            }
            ConsoleCommand::Opponent(enabled) => {
                self.game.set_opponent_enabled(enabled);
                let who = self.game.players().get(PlayerId::Predator).name().to_string();
                if enabled {
                    writeln!(out, "{} is now played by the computer.", who)?;
                } else {
                    writeln!(out, "{} is now played from the keyboard.", who)?;
                }
                self.render_events(out)?;
                writeln!(out, "{}", self.game.board())?;
            }
            ConsoleCommand::Board => writeln!(out, "{}", self.game.board())?,
            ConsoleCommand::Score => writeln!(out, "{}", self.score.summary(self.game.players()))?,
            ConsoleCommand::Help => writeln!(out, "{}", HELP)?,
            ConsoleCommand::Quit => {
                writeln!(out, "{}", self.score.summary(self.game.players()))?;
                return Ok(Flow::Quit);
            }
        }
        Ok(Flow::Continue)
    }

    fn render_events<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let events: Vec<GameEvent> = self.game.sink_mut().drain(..).collect();
        for event in events {
            match event {
                GameEvent::MoveMade {
                    player,
                    position,
                    flavor,
                    ..
                } => {
                    let player = self.game.players().get(player);
                    let action = flavor.unwrap_or(player.tagline());
                    writeln!(out, "{} {} ({}).", player.name(), action, position)?;
                }
                GameEvent::InvalidMove { reason } => writeln!(out, "Invalid move: {}", reason)?,
                GameEvent::GameOver(outcome) => {
                    self.score.record(outcome);
                    match outcome.winner() {
                        Some(id) => {
                            writeln!(out, "{} wins!", self.game.players().get(id).name())?
                        }
                        None => writeln!(out, "It's a draw!")?,
                    }
                    writeln!(out, "{}", self.score.summary(self.game.players()))?;
                    writeln!(out, "Type `reset` to play again.")?;
                }
                GameEvent::Reset => writeln!(out, "New game.")?,
            }
        }
        Ok(())
    }

    fn banner(&self) -> String {
        let players = self.game.players();
        let alien = players.get(PlayerId::Alien);
        let predator = players.get(PlayerId::Predator);
        let mode = if self.game.opponent_enabled() {
            "computer"
        } else {
            "keyboard"
        };
        format!(
            "{} ({}) vs {} ({}, {}). Type `help` for commands.",
            alien.name(),
            alien.mark(),
            predator.name(),
            predator.mark(),
            mode
        )
    }

    fn prompt<W: Write>(&self, out: &mut W) -> Result<()> {
        if !self.game.is_over() {
            let active = self.game.active_player();
            write!(out, "{} ({}) > ", active.name(), active.mark())?;
        } else {
            write!(out, "> ")?;
        }
        out.flush()?;
        Ok(())
    }
}
