//! Turn sequencing for a single game session.

use crate::{
    Board, Dice, EventSink, GameConfig, GameEvent, MoveError, Opponent, Outcome, Phase, Player,
    PlayerId, Players, Position, Square,
};
use rand::{SeedableRng, rngs::StdRng};
use tracing::{debug, error, info, instrument, warn};

/// Identity whose moves the opponent makes when opponent mode is on.
pub const OPPONENT_ID: PlayerId = PlayerId::Predator;

/// Owns the board and session state and decides whose turn it is.
///
/// A human move may be followed by exactly one opponent move inside the same
/// [`TurnController::submit_move`] call.
#[derive(Debug)]
pub struct TurnController<D, S> {
    board: Board,
    players: Players,
    active: PlayerId,
    phase: Phase,
    opponent_enabled: bool,
    opponent: Opponent<D>,
    sink: S,
}

impl<S: EventSink> TurnController<StdRng, S> {
    /// Builds a session from configuration.
    ///
    /// Uses the configured seed for the opponent, or OS entropy without one.
    #[instrument(skip(config, sink))]
    pub fn from_config(config: &GameConfig, sink: S) -> Self {
        let rng = match config.seed() {
            Some(seed) => StdRng::seed_from_u64(*seed),
            None => StdRng::from_os_rng(),
        };
        let players = Players::named(config.alien_name().as_str(), config.predator_name().as_str());
        let mut controller = Self::new(players, rng, sink);
        controller.opponent_enabled = *config.opponent_enabled();
        controller
    }
}

impl<D: Dice, S: EventSink> TurnController<D, S> {
    /// Creates a session in progress with the Alien to move and opponent mode off.
    pub fn new(players: Players, dice: D, sink: S) -> Self {
        Self {
            board: Board::new(),
            players,
            active: PlayerId::Alien,
            phase: Phase::InProgress,
            opponent_enabled: false,
            opponent: Opponent::new(dice),
            sink,
        }
    }

    /// Plays the active player's mark at `(row, col)`.
    ///
    /// With opponent mode on, the opponent answers in the same call. Returns
    /// the phase after all moves were applied.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] once the game has ended.
    /// - [`MoveError::OccupiedCell`] if the cell is taken.
    /// - [`MoveError::OutOfRange`] for coordinates outside the board.
    ///
    /// None of these change the session.
    #[instrument(skip(self), fields(active = %self.active))]
    pub fn submit_move(&mut self, row: usize, col: usize) -> Result<Phase, MoveError> {
        if let Phase::GameOver(_) = self.phase {
            return Err(self.reject(MoveError::GameOver));
        }

        let Some(position) = Position::from_row_col(row, col) else {
            error!(row, col, "Move outside the board");
            return Err(MoveError::OutOfRange { row, col });
        };

        let mover = self.active;
        let mark = self.players.get(mover).mark();
        if !self.board.place(position, mark) {
            return Err(self.reject(MoveError::OccupiedCell { row, col }));
        }
        self.sink.notify(GameEvent::MoveMade {
            player: mover,
            mark,
            position,
            flavor: None,
        });

        if self.conclude(mover) {
            return Ok(self.phase);
        }
        self.active = mover.other();

        if self.opponent_enabled && self.active == OPPONENT_ID {
            self.opponent_turn()?;
        }

        Ok(self.phase)
    }

    /// Clears the board and starts over with the Alien to move.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.reset();
        self.active = PlayerId::Alien;
        self.phase = Phase::InProgress;
        info!("Game reset");
        self.sink.notify(GameEvent::Reset);
    }

    /// Turns opponent mode on or off. Always resets the game.
    #[instrument(skip(self))]
    pub fn set_opponent_enabled(&mut self, enabled: bool) {
        self.opponent_enabled = enabled;
        self.reset();
    }

    /// Square at `(row, col)`.
    pub fn cell_value(&self, row: usize, col: usize) -> Result<Square, MoveError> {
        self.board.value_at(row, col)
    }

    /// The player whose turn it is.
    pub fn active_player(&self) -> &Player {
        self.players.get(self.active)
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True once a win or draw has been reached.
    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver(_))
    }

    /// Whether the Predator is played by the opponent.
    pub fn opponent_enabled(&self) -> bool {
        self.opponent_enabled
    }

    /// Read access to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The two players.
    pub fn players(&self) -> &Players {
        &self.players
    }

    /// The event sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutable access to the event sink.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// One opponent ply, with the same end-of-game check as a human move.
    fn opponent_turn(&mut self) -> Result<(), MoveError> {
        let mover = self.active;
        let mark = self.players.get(mover).mark();
        let chosen = self
            .opponent
            .select_move(&self.board, mark, mark.opponent())
            .inspect_err(|e| error!(error = %e, "Opponent invoked without a legal move"))?;

        if !self.board.place(chosen.position, mark) {
            error!(position = %chosen.position, "Opponent chose an occupied cell");
            return Err(MoveError::OccupiedCell {
                row: chosen.position.row(),
                col: chosen.position.col(),
            });
        }
        self.sink.notify(GameEvent::MoveMade {
            player: mover,
            mark,
            position: chosen.position,
            flavor: Some(chosen.flavor()),
        });

        if !self.conclude(mover) {
            self.active = mover.other();
        }
        Ok(())
    }

    /// Ends the game if `mover` just won or filled the board.
    fn conclude(&mut self, mover: PlayerId) -> bool {
        let mark = self.players.get(mover).mark();
        let outcome = if self.board.check_win(mark) {
            Outcome::Winner(mover)
        } else if self.board.is_full() {
            Outcome::Draw
        } else {
            debug!(next = %mover.other(), "Game continues");
            return false;
        };

        info!(%outcome, "Game over");
        self.phase = Phase::GameOver(outcome);
        self.sink.notify(GameEvent::GameOver(outcome));
        true
    }

    fn reject(&mut self, err: MoveError) -> MoveError {
        warn!(error = %err, "Move rejected");
        self.sink.notify(GameEvent::InvalidMove {
            reason: err.to_string(),
        });
        err
    }
}
