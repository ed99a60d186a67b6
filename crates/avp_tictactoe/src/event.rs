//! Notifications delivered to the display layer.

use crate::{Mark, Outcome, PlayerId, Position};
use serde::Serialize;
use tracing::{info, warn};

/// Something the display layer should show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum GameEvent {
    /// A mark was placed.
    MoveMade {
        /// Who moved.
        player: PlayerId,
        /// The mark placed.
        mark: Mark,
        /// Where it went.
        position: Position,
        /// Opponent flavor text; `None` for moves submitted by a caller.
        flavor: Option<&'static str>,
    },
    /// A submitted move was rejected.
    InvalidMove {
        /// Human-readable reason.
        reason: String,
    },
    /// The game reached a terminal state.
    GameOver(Outcome),
    /// The board was cleared and a new game started.
    Reset,
}

/// Receiver of [`GameEvent`]s.
pub trait EventSink {
    /// Handles one event.
    fn notify(&mut self, event: GameEvent);
}

impl EventSink for Vec<GameEvent> {
    fn notify(&mut self, event: GameEvent) {
        self.push(event);
    }
}

/// Sink that only logs events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn notify(&mut self, event: GameEvent) {
        match event {
            GameEvent::MoveMade {
                player,
                mark,
                position,
                flavor,
            } => info!(%player, %mark, %position, flavor = flavor.unwrap_or(""), "Move made"),
            GameEvent::InvalidMove { reason } => warn!(%reason, "Invalid move"),
            GameEvent::GameOver(outcome) => info!(%outcome, "Game over"),
            GameEvent::Reset => info!("Game reset"),
        }
    }
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn notify(&mut self, event: GameEvent) {
        (**self).notify(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sink_through_mutable_reference() {
        fn push_two(mut sink: impl EventSink) {
            sink.notify(GameEvent::Reset);
            sink.notify(GameEvent::GameOver(Outcome::Draw));
        }

        let mut events = Vec::new();
        push_two(&mut events);
        assert_eq!(events, vec![GameEvent::Reset, GameEvent::GameOver(Outcome::Draw)]);
    }

    #[test]
    fn test_tracing_sink_accepts_every_event() {
        let mut sink = TracingSink;
        sink.notify(GameEvent::MoveMade {
            player: PlayerId::Predator,
            mark: Mark::O,
            position: Position::Center,
            flavor: Some("takes a strategic position"),
        });
        sink.notify(GameEvent::InvalidMove {
            reason: "occupied".to_string(),
        });
        sink.notify(GameEvent::GameOver(Outcome::Winner(PlayerId::Alien)));
        sink.notify(GameEvent::Reset);
    }
}
