//! Round orchestration between two players.
//!
//! [`GameLoop`] is an explicit state machine over [`Phase`]. Its transition
//! methods are pure with respect to I/O; [`GameLoop::run`] drives them
//! through a [`Console`].

mod phase;
mod scoreboard;

pub use phase::{Outcome, Phase, Seat};
pub use scoreboard::Scoreboard;

use crate::board::Board;
use crate::console::Console;
use crate::error::MoveError;
use crate::player::Player;
use crate::position::Position;
use crate::screen;
use std::io;
use tracing::{debug, info, instrument, warn};

/// Game state for one process run: the board, the two seated players,
/// whose turn it is and where the loop stands.
#[derive(Debug, Clone)]
pub struct GameLoop {
    board: Board,
    players: [Player; 2],
    active: Seat,
    alert: String,
    phase: Phase,
    scoreboard: Scoreboard,
}

impl GameLoop {
    /// Seats `first` and `second` at `board`. `first` moves first.
    #[instrument(skip(board), fields(height = board.height(), width = board.width()))]
    pub fn new(board: Board, first: Player, second: Player) -> Self {
        Self {
            board,
            players: [first, second],
            active: Seat::First,
            alert: String::new(),
            phase: Phase::Playing,
            scoreboard: Scoreboard::new(),
        }
    }

    /// The playing field.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Both players, indexed by [`Seat::index`].
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Seat whose turn it is.
    pub fn active_seat(&self) -> Seat {
        self.active
    }

    /// Player whose turn it is. After a win this is the winner.
    pub fn active_player(&self) -> &Player {
        &self.players[self.active.index()]
    }

    /// Message about the last rejected move, empty otherwise.
    pub fn alert(&self) -> &str {
        &self.alert
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Results of finished rounds.
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// True once the loop has nothing left to do.
    pub fn is_terminated(&self) -> bool {
        self.phase == Phase::Terminated
    }

    /// Plays the active player's move.
    ///
    /// A rejected move sets the alert and keeps the same player to move.
    /// An accepted move clears the alert, then ends the round on a win or
    /// a full board, or passes the turn. On a win the turn is not passed.
    ///
    /// # Errors
    ///
    /// Returns the board's [`MoveError`] for a rejected move, and
    /// [`MoveError::RoundOver`] when called outside [`Phase::Playing`].
    #[instrument(skip(self), fields(phase = %self.phase, player = %self.active_player()))]
    pub fn submit_move(&mut self, move_text: &str) -> Result<Position, MoveError> {
        if self.phase != Phase::Playing {
            return Err(MoveError::RoundOver);
        }

        let player = &self.players[self.active.index()];
        let position = match self.board.try_write_turn(player, move_text) {
            Ok(position) => position,
            Err(err) => {
                self.alert = screen::invalid_move_alert(move_text);
                return Err(err);
            }
        };
        self.alert.clear();

        if self.board.check_win() {
            info!(winner = %self.active_player(), "Round won");
            self.scoreboard.record_win(self.active);
            self.phase = Phase::RoundOver(Outcome::Won);
        } else {
            self.active = self.active.opponent();
            if self.board.is_full() {
                info!("Round drawn");
                self.scoreboard.record_draw();
                self.phase = Phase::RoundOver(Outcome::Draw);
            }
        }

        Ok(position)
    }

    /// Marks the round result as shown.
    pub fn acknowledge_round(&mut self) {
        if let Phase::RoundOver(outcome) = self.phase {
            debug!(%outcome, "Round result shown");
            self.phase = Phase::AwaitingReplayDecision;
        }
    }

    /// Applies the play-again answer.
    ///
    /// Only an exact `"Y"` or `"y"` starts another round, and that round is
    /// opened by the player who was active when the last one ended.
    /// `None` (input exhausted) and every other answer end the loop.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn decide_replay(&mut self, answer: Option<&str>) {
        if self.phase != Phase::AwaitingReplayDecision {
            return;
        }

        if matches!(answer, Some("Y" | "y")) {
            self.board.reset();
            self.alert.clear();
            self.phase = Phase::Playing;
            info!(first = %self.active_player(), "New round");
        } else {
            self.terminate();
        }
    }

    /// Ends the loop from any phase.
    pub fn terminate(&mut self) {
        debug!(from = %self.phase, "Terminating");
        self.phase = Phase::Terminated;
    }

    /// Runs until the loop terminates, reading moves and answers from
    /// `console`.
    ///
    /// # Errors
    ///
    /// Only console I/O errors escape; rejected moves are shown as alerts.
    #[instrument(skip_all)]
    pub fn run<C: Console>(&mut self, mut console: C) -> io::Result<()> {
        info!("Starting game loop");

        loop {
            match self.phase {
                Phase::Playing => {
                    console.clear()?;
                    console.show(&screen::playing(&self.board, &self.alert, self.active_player()))?;
                    match console.prompt(screen::MOVE_PROMPT)? {
                        Some(text) => {
                            if let Err(err) = self.submit_move(&text) {
                                debug!(%err, "Move rejected");
                            }
                        }
                        None => {
                            warn!("Input closed mid-round");
                            self.terminate();
                        }
                    }
                }
                Phase::RoundOver(outcome) => {
                    console.clear()?;
                    console.show(&screen::round_over(&self.board, outcome, self.active_player()))?;
                    self.acknowledge_round();
                }
                Phase::AwaitingReplayDecision => {
                    let answer = console.prompt(screen::REPLAY_PROMPT)?;
                    self.decide_replay(answer.as_deref());
                }
                Phase::Terminated => {
                    console.show(&screen::final_tally(&self.scoreboard, &self.players))?;
                    info!(rounds = self.scoreboard.rounds(), "Game loop finished");
                    return Ok(());
                }
            }
        }
    }
}
