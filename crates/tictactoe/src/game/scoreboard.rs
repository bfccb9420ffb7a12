//! Round results kept for the life of one run.

use super::phase::Seat;

/// Wins per seat and draws, counted across rounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scoreboard {
    wins: [u32; 2],
    draws: u32,
}

impl Scoreboard {
    /// Creates an empty scoreboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts a win for `seat`.
    pub fn record_win(&mut self, seat: Seat) {
        self.wins[seat.index()] += 1;
    }

    /// Counts a drawn round.
    pub fn record_draw(&mut self) {
        self.draws += 1;
    }

    /// Rounds won by `seat`.
    pub fn wins(&self, seat: Seat) -> u32 {
        self.wins[seat.index()]
    }

    /// Drawn rounds.
    pub fn draws(&self) -> u32 {
        self.draws
    }

    /// Rounds finished so far.
    pub fn rounds(&self) -> u32 {
        self.wins.iter().sum::<u32>() + self.draws
    }
}
