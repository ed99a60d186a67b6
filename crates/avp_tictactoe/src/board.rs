//! The 3x3 board.

use crate::{Mark, MoveError, Position, Square, rules};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Gets the square at a zero-based row and column.
    pub fn value_at(&self, row: usize, col: usize) -> Result<Square, MoveError> {
        Position::from_row_col(row, col)
            .map(|pos| self.get(pos))
            .ok_or(MoveError::OutOfRange { row, col })
    }

    /// Places `mark` if the square is empty.
    ///
    /// Returns false, leaving the board untouched, if the square is taken.
    #[instrument(skip(self))]
    pub fn place(&mut self, pos: Position, mark: Mark) -> bool {
        if !self.is_empty(pos) {
            return false;
        }
        self.squares[pos.to_index()] = Square::Occupied(mark);
        true
    }

    /// Range-checked [`Board::place`] for raw coordinates.
    pub fn place_at(&mut self, row: usize, col: usize, mark: Mark) -> Result<bool, MoveError> {
        let pos = Position::from_row_col(row, col).ok_or(MoveError::OutOfRange { row, col })?;
        Ok(self.place(pos, mark))
    }

    /// Empties a single square. Only used to undo trial placements.
    pub(crate) fn clear(&mut self, pos: Position) {
        self.squares[pos.to_index()] = Square::Empty;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Empty positions in row-major order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::iter()
            .filter(|&pos| self.is_empty(pos))
            .collect()
    }

    /// True if `mark` fills any row, column or diagonal.
    pub fn check_win(&self, mark: Mark) -> bool {
        rules::check_win(self, mark)
    }

    /// Returns the mark holding a complete line, if any.
    pub fn winner(&self) -> Option<Mark> {
        rules::check_winner(self)
    }

    /// True if no square is empty.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Empties every square.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.squares = [Square::Empty; 9];
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.squares.chunks(3).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            write!(f, "{} {} {}", cells[0], cells[1], cells[2])?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_only_on_empty() {
        let mut board = Board::new();
        assert!(board.place(Position::Center, Mark::X));
        assert!(!board.place(Position::Center, Mark::O));
        assert_eq!(board.get(Position::Center), Square::Occupied(Mark::X));
    }

    #[test]
    fn test_place_at_out_of_range() {
        let mut board = Board::new();
        assert_eq!(
            board.place_at(0, 3, Mark::X),
            Err(MoveError::OutOfRange { row: 0, col: 3 })
        );
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_value_at() {
        let mut board = Board::new();
        assert_eq!(board.place_at(2, 1, Mark::O), Ok(true));
        assert_eq!(board.value_at(2, 1), Ok(Square::Occupied(Mark::O)));
        assert_eq!(board.value_at(1, 2), Ok(Square::Empty));
        assert!(board.value_at(3, 3).is_err());
    }

    #[test]
    fn test_clear_then_place_again() {
        let mut board = Board::new();
        board.place(Position::TopLeft, Mark::X);
        board.clear(Position::TopLeft);
        assert!(board.is_empty(Position::TopLeft));
        assert!(board.place(Position::TopLeft, Mark::O));
    }

    #[test]
    fn test_reset_empties_everything() {
        let mut board = Board::new();
        for pos in Position::ALL {
            board.place(pos, Mark::O);
        }
        assert!(board.is_full());
        board.reset();
        assert_eq!(board.empty_positions(), Position::ALL.to_vec());
    }

    #[test]
    fn test_display_matches_console_layout() {
        let mut board = Board::new();
        board.place(Position::TopLeft, Mark::X);
        board.place(Position::Center, Mark::O);
        assert_eq!(board.to_string(), "X - -\n- O -\n- - -");
    }
}
