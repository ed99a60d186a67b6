//! Error types for move handling.

use derive_more::{Display, Error};

/// Error that can occur when submitting or selecting a move.
///
/// `OccupiedCell` and `GameOver` are ordinary gameplay outcomes and are
/// reported back to the caller. `OutOfRange` and `NoAvailableMove` mean the
/// caller broke the API contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The target cell already holds a mark.
    #[display("Cell ({row}, {col}) is already occupied")]
    OccupiedCell {
        /// Zero-based row.
        row: usize,
        /// Zero-based column.
        col: usize,
    },

    /// A move was submitted after the game ended.
    #[display("The game is over; reset to play again")]
    GameOver,

    /// Row or column outside `0..3`.
    #[display("Coordinates ({row}, {col}) are outside the 3x3 board")]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The opponent was asked to move on a full board.
    #[display("No empty cell left for the opponent")]
    NoAvailableMove,
}

impl MoveError {
    /// Returns true for errors caused by a legal but unplayable request.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, MoveError::OccupiedCell { .. } | MoveError::GameOver)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_messages_are_distinct() {
        let occupied = MoveError::OccupiedCell { row: 1, col: 2 }.to_string();
        let over = MoveError::GameOver.to_string();
        assert_ne!(occupied, over);
        assert!(occupied.contains("occupied"));
        assert!(over.contains("over"));
    }

    #[test]
    fn test_recoverable_split() {
        assert!(MoveError::OccupiedCell { row: 0, col: 0 }.is_recoverable());
        assert!(MoveError::GameOver.is_recoverable());
        assert!(!MoveError::OutOfRange { row: 3, col: 0 }.is_recoverable());
        assert!(!MoveError::NoAvailableMove.is_recoverable());
    }
}
