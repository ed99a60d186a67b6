//! Heuristic opponent.
//!
//! The opponent draws one aggressiveness threshold per move and walks a
//! fixed list of tactics:
//!
//! 1. above 0.8, a random empty cell;
//! 2. a move that wins outright;
//! 3. above 0.3, a move that blocks the other side's win;
//! 4. above 0.5, the center, or failing that a free corner;
//! 5. a random empty cell.
//!
//! Blocking is deliberately probabilistic, so the opponent can be beaten.

use crate::{Board, Mark, MoveError, Position};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Threshold above which the opponent plays a random attack.
pub const RANDOM_ATTACK_THRESHOLD: f64 = 0.8;
/// Threshold above which the opponent blocks an imminent loss.
pub const BLOCK_THRESHOLD: f64 = 0.3;
/// Threshold above which the opponent goes for the center or a corner.
pub const POSITIONAL_THRESHOLD: f64 = 0.5;

/// Source of randomness for the opponent.
///
/// Every [`Rng`] is a `Dice`; tests can supply scripted values instead.
pub trait Dice {
    /// Draws an aggressiveness threshold in `[0, 1)`.
    fn threshold(&mut self) -> f64;

    /// Picks an index in `0..len`. `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;
}

impl<R: Rng + ?Sized> Dice for R {
    fn threshold(&mut self) -> f64 {
        self.random::<f64>()
    }

    fn pick(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }
}

/// The rule that produced a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tactic {
    /// Uniformly random empty cell, taken on a high threshold.
    RandomAttack,
    /// Completes a line for the opponent's own mark.
    Kill,
    /// Occupies the cell the other side needs to complete a line.
    Block,
    /// Takes the empty center.
    Center,
    /// Takes a random empty corner.
    Corner,
    /// Uniformly random empty cell, the fallback.
    Tactical,
}

impl Tactic {
    /// Flavor text shown alongside the move.
    pub fn flavor(self) -> &'static str {
        match self {
            Tactic::RandomAttack => "launches an aggressive random attack",
            Tactic::Kill => "moves in for the kill",
            Tactic::Block => "blocks the attack",
            Tactic::Center => "takes a strategic position",
            Tactic::Corner => "moves to higher ground",
            Tactic::Tactical => "makes a tactical move",
        }
    }
}

/// A move chosen by the opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpponentMove {
    /// Chosen cell.
    pub position: Position,
    /// Rule that chose it.
    pub tactic: Tactic,
}

impl OpponentMove {
    /// Flavor text for the tactic taken.
    pub fn flavor(&self) -> &'static str {
        self.tactic.flavor()
    }
}

/// Heuristic move selector.
#[derive(Debug, Clone)]
pub struct Opponent<D> {
    dice: D,
}

impl<D: Dice> Opponent<D> {
    /// Creates an opponent drawing from `dice`.
    pub fn new(dice: D) -> Self {
        Self { dice }
    }

    /// Chooses a move for `own` on `board`.
    ///
    /// The board is only read; trial placements happen on a private copy.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::NoAvailableMove`] if the board is full.
    #[instrument(skip(self, board))]
    pub fn select_move(
        &mut self,
        board: &Board,
        own: Mark,
        opponent: Mark,
    ) -> Result<OpponentMove, MoveError> {
        let empty = board.empty_positions();
        if empty.is_empty() {
            return Err(MoveError::NoAvailableMove);
        }

        let t = self.dice.threshold();
        debug!(threshold = t, empty = empty.len(), "Opponent deliberating");

        let chosen = if t > RANDOM_ATTACK_THRESHOLD {
            self.random_from(&empty, Tactic::RandomAttack)
        } else if let Some(position) = winning_move(board, own) {
            OpponentMove {
                position,
                tactic: Tactic::Kill,
            }
        } else if let Some(position) = (t > BLOCK_THRESHOLD)
            .then(|| winning_move(board, opponent))
            .flatten()
        {
            OpponentMove {
                position,
                tactic: Tactic::Block,
            }
        } else if let Some(positional) = (t > POSITIONAL_THRESHOLD)
            .then(|| self.positional(board))
            .flatten()
        {
            positional
        } else {
            self.random_from(&empty, Tactic::Tactical)
        };

        debug!(position = %chosen.position, tactic = ?chosen.tactic, "Opponent chose move");
        Ok(chosen)
    }

    /// Center if free, otherwise a random free corner.
    fn positional(&mut self, board: &Board) -> Option<OpponentMove> {
        if board.is_empty(Position::CENTER) {
            return Some(OpponentMove {
                position: Position::CENTER,
                tactic: Tactic::Center,
            });
        }

        let corners: Vec<Position> = Position::CORNERS
            .iter()
            .copied()
            .filter(|&pos| board.is_empty(pos))
            .collect();
        if corners.is_empty() {
            return None;
        }
        Some(self.random_from(&corners, Tactic::Corner))
    }

    fn random_from(&mut self, candidates: &[Position], tactic: Tactic) -> OpponentMove {
        let index = self.dice.pick(candidates.len());
        OpponentMove {
            position: candidates[index],
            tactic,
        }
    }
}

/// First empty cell, row-major, where `mark` would complete a line.
#[instrument(skip(board))]
pub fn winning_move(board: &Board, mark: Mark) -> Option<Position> {
    let mut trial = board.clone();
    for pos in board.empty_positions() {
        trial.place(pos, mark);
        let wins = trial.check_win(mark);
        trial.clear(pos);
        if wins {
            return Some(pos);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    /// Dice that replays fixed thresholds and always picks index 0.
    struct Scripted {
        thresholds: Vec<f64>,
    }

    impl Dice for Scripted {
        fn threshold(&mut self) -> f64 {
            self.thresholds.remove(0)
        }

        fn pick(&mut self, _len: usize) -> usize {
            0
        }
    }

    fn scripted(t: f64) -> Opponent<Scripted> {
        Opponent::new(Scripted {
            thresholds: vec![t],
        })
    }

    fn board_with(cells: &[(Position, Mark)]) -> Board {
        let mut board = Board::new();
        for &(pos, mark) in cells {
            board.place(pos, mark);
        }
        board
    }

    #[test]
    fn test_full_board_is_contract_violation() {
        let mut board = Board::new();
        for pos in Position::ALL {
            board.place(pos, Mark::X);
        }
        let result = scripted(0.0).select_move(&board, Mark::O, Mark::X);
        assert_eq!(result, Err(MoveError::NoAvailableMove));
    }

    #[test]
    fn test_kill_takes_first_winning_cell() {
        // O can win at TopRight (row) or BottomLeft (column); row-major picks TopRight.
        let board = board_with(&[
            (Position::TopLeft, Mark::O),
            (Position::TopCenter, Mark::O),
            (Position::MiddleLeft, Mark::O),
            (Position::Center, Mark::X),
            (Position::MiddleRight, Mark::X),
        ]);
        let chosen = scripted(0.1).select_move(&board, Mark::O, Mark::X).unwrap();
        assert_eq!(chosen.position, Position::TopRight);
        assert_eq!(chosen.tactic, Tactic::Kill);
        assert_eq!(chosen.flavor(), "moves in for the kill");
    }

    #[test]
    fn test_kill_preferred_over_block() {
        let board = board_with(&[
            (Position::TopLeft, Mark::X),
            (Position::TopCenter, Mark::X),
            (Position::BottomLeft, Mark::O),
            (Position::BottomCenter, Mark::O),
        ]);
        let chosen = scripted(0.7).select_move(&board, Mark::O, Mark::X).unwrap();
        assert_eq!(chosen.position, Position::BottomRight);
        assert_eq!(chosen.tactic, Tactic::Kill);
    }

    #[test]
    fn test_block_above_threshold() {
        let board = board_with(&[
            (Position::TopLeft, Mark::X),
            (Position::TopCenter, Mark::X),
            (Position::Center, Mark::O),
        ]);
        let chosen = scripted(0.4).select_move(&board, Mark::O, Mark::X).unwrap();
        assert_eq!(chosen.position, Position::TopRight);
        assert_eq!(chosen.tactic, Tactic::Block);
        assert_eq!(chosen.flavor(), "blocks the attack");
    }

    #[test]
    fn test_no_block_at_low_threshold() {
        let board = board_with(&[
            (Position::TopLeft, Mark::X),
            (Position::TopCenter, Mark::X),
            (Position::Center, Mark::O),
        ]);
        let chosen = scripted(0.2).select_move(&board, Mark::O, Mark::X).unwrap();
        assert_eq!(chosen.tactic, Tactic::Tactical);
        // Scripted pick is index 0, the first empty cell.
        assert_eq!(chosen.position, Position::TopRight);
    }

    #[test]
    fn test_random_attack_ignores_winning_move() {
        let board = board_with(&[
            (Position::MiddleLeft, Mark::O),
            (Position::Center, Mark::O),
        ]);
        let chosen = scripted(0.9).select_move(&board, Mark::O, Mark::X).unwrap();
        assert_eq!(chosen.tactic, Tactic::RandomAttack);
        assert_eq!(chosen.position, Position::TopLeft);
    }

    #[test]
    fn test_center_then_corner() {
        let empty = Board::new();
        let chosen = scripted(0.6).select_move(&empty, Mark::O, Mark::X).unwrap();
        assert_eq!(chosen.position, Position::Center);
        assert_eq!(chosen.tactic, Tactic::Center);

        let board = board_with(&[(Position::Center, Mark::X), (Position::TopLeft, Mark::O)]);
        let chosen = scripted(0.6).select_move(&board, Mark::O, Mark::X).unwrap();
        assert_eq!(chosen.position, Position::TopRight);
        assert_eq!(chosen.tactic, Tactic::Corner);
        assert_eq!(chosen.flavor(), "moves to higher ground");
    }

    #[test]
    fn test_positional_gives_up_without_center_or_corner() {
        let mut board = Board::new();
        board.place(Position::CENTER, Mark::X);
        for pos in Position::CORNERS {
            board.place(pos, Mark::O);
        }
        assert_eq!(scripted(0.6).positional(&board), None);
    }

    #[test]
    fn test_selection_leaves_board_untouched() {
        let board = board_with(&[
            (Position::TopLeft, Mark::X),
            (Position::TopCenter, Mark::X),
            (Position::Center, Mark::O),
        ]);
        let before = board.clone();
        let mut opponent = Opponent::new(StdRng::seed_from_u64(7));
        for _ in 0..50 {
            let chosen = opponent.select_move(&board, Mark::O, Mark::X).unwrap();
            assert!(board.is_empty(chosen.position));
            assert_eq!(board, before);
        }
    }
}
