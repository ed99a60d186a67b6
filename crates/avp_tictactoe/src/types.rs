//! Core domain types for Alien vs Predator tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Mark placed on the board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Mark {
    /// Mark X (placed by the Alien, who moves first).
    #[display("X")]
    X,
    /// Mark O (placed by the Predator).
    #[display("O")]
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell holding a mark.
    Occupied(Mark),
}

impl Square {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Square::Empty => None,
            Square::Occupied(mark) => Some(mark),
        }
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Square::Empty => write!(f, "-"),
            Square::Occupied(mark) => write!(f, "{}", mark),
        }
    }
}

/// Fixed identity of one of the two sides.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum PlayerId {
    /// First side, always moves first after a reset.
    #[display("Alien")]
    Alien,
    /// Second side, driven by the opponent when opponent mode is on.
    #[display("Predator")]
    Predator,
}

impl PlayerId {
    /// Returns the other identity.
    pub fn other(self) -> Self {
        match self {
            PlayerId::Alien => PlayerId::Predator,
            PlayerId::Predator => PlayerId::Alien,
        }
    }
}

/// A player: identity, display name, mark and flavor text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    name: String,
    mark: Mark,
    tagline: String,
}

impl Player {
    /// Creates a player.
    pub fn new(id: PlayerId, name: impl Into<String>, mark: Mark, tagline: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            mark,
            tagline: tagline.into(),
        }
    }

    /// Default Alien player, mark X.
    pub fn alien() -> Self {
        Self::new(PlayerId::Alien, "Alien", Mark::X, "skitters across the grid")
    }

    /// Default Predator player, mark O.
    pub fn predator() -> Self {
        Self::new(PlayerId::Predator, "Predator", Mark::O, "stalks the grid")
    }

    /// Returns the identity.
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the mark.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Returns the flavor text used when this player moves.
    pub fn tagline(&self) -> &str {
        &self.tagline
    }
}

/// The two fixed players of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Players {
    alien: Player,
    predator: Player,
}

impl Players {
    /// Creates the pair, renaming each side but keeping its identity and mark.
    pub fn named(alien_name: impl Into<String>, predator_name: impl Into<String>) -> Self {
        let alien = Player::alien();
        let predator = Player::predator();
        Self {
            alien: Player::new(PlayerId::Alien, alien_name, alien.mark, alien.tagline),
            predator: Player::new(
                PlayerId::Predator,
                predator_name,
                predator.mark,
                predator.tagline,
            ),
        }
    }

    /// Returns the player with the given identity.
    pub fn get(&self, id: PlayerId) -> &Player {
        match id {
            PlayerId::Alien => &self.alien,
            PlayerId::Predator => &self.predator,
        }
    }
}

impl Default for Players {
    fn default() -> Self {
        Self {
            alien: Player::alien(),
            predator: Player::predator(),
        }
    }
}

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The given side completed a line.
    Winner(PlayerId),
    /// Board filled with no line.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            Outcome::Winner(id) => Some(*id),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(id) => write!(f, "{} wins", id),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Session phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Moves are accepted.
    InProgress,
    /// Terminal; only a reset leaves this phase.
    GameOver(Outcome),
}
