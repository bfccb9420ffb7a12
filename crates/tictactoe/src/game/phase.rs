//! Round phases, outcomes and seat rotation.

use serde::{Deserialize, Serialize};

/// One of the two fixed seats at the table.
///
/// Turn order rotates between the seats; players are never compared to find
/// out whose turn it is.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
pub enum Seat {
    /// Seat of the player who opens the first round.
    First,
    /// The other seat.
    Second,
}

impl Seat {
    /// Returns the other seat.
    pub fn opponent(self) -> Self {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }

    /// Index into a two-element array of per-seat values.
    pub fn index(self) -> usize {
        match self {
            Seat::First => 0,
            Seat::Second => 1,
        }
    }
}

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Outcome {
    /// The active player completed a line.
    Won,
    /// The board filled up with no line completed.
    Draw,
}

/// Where the game loop currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Phase {
    /// Waiting for the active player's move.
    Playing,
    /// A round just ended; the result has not been shown yet.
    RoundOver(Outcome),
    /// Result shown, waiting for the play-again answer.
    AwaitingReplayDecision,
    /// The loop is finished.
    Terminated,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seat_rotation() {
        assert_eq!(Seat::First.opponent(), Seat::Second);
        assert_eq!(Seat::Second.opponent(), Seat::First);
        assert_eq!(Seat::First.opponent().opponent(), Seat::First);
    }

    #[test]
    fn test_seat_index() {
        assert_eq!(Seat::First.index(), 0);
        assert_eq!(Seat::Second.index(), 1);
    }

    #[test]
    fn test_phase_labels() {
        assert_eq!(Phase::Playing.to_string(), "playing");
        assert_eq!(Phase::AwaitingReplayDecision.to_string(), "awaiting_replay_decision");
        assert_eq!(Outcome::Draw.to_string(), "draw");
    }
}
