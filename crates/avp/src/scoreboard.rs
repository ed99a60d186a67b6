//! Win tallies for the lifetime of the process.

use avp_tictactoe::{Outcome, PlayerId, Players};
use tracing::instrument;

/// Counts finished games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scoreboard {
    alien: u32,
    predator: u32,
    draws: u32,
}

impl Scoreboard {
    /// Creates an empty scoreboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one finished game.
    #[instrument(skip(self))]
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Winner(PlayerId::Alien) => self.alien += 1,
            Outcome::Winner(PlayerId::Predator) => self.predator += 1,
            Outcome::Draw => self.draws += 1,
        }
    }

    /// Wins for `id`.
    pub fn wins(&self, id: PlayerId) -> u32 {
        match id {
            PlayerId::Alien => self.alien,
            PlayerId::Predator => self.predator,
        }
    }

    /// Drawn games.
    pub fn draws(&self) -> u32 {
        self.draws
    }

    /// One-line summary using the players' display names.
    pub fn summary(&self, players: &Players) -> String {
        format!(
            "{} {} - {} {} ({} drawn)",
            players.get(PlayerId::Alien).name(),
            self.wins(PlayerId::Alien),
            self.wins(PlayerId::Predator),
            players.get(PlayerId::Predator).name(),
            self.draws()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_outcomes() {
        let mut score = Scoreboard::new();
        score.record(Outcome::Winner(PlayerId::Alien));
        score.record(Outcome::Winner(PlayerId::Alien));
        score.record(Outcome::Winner(PlayerId::Predator));
        score.record(Outcome::Draw);

        assert_eq!(score.wins(PlayerId::Alien), 2);
        assert_eq!(score.wins(PlayerId::Predator), 1);
        assert_eq!(score.draws(), 1);
        assert_eq!(
            score.summary(&Players::default()),
            "Alien 2 - 1 Predator (1 drawn)"
        );
    }
}
