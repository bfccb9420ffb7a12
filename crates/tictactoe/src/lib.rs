//! Console tic-tac-toe game logic.
//!
//! # Architecture
//!
//! - **Slot / Board**: the grid, move validation and rendering
//! - **Rules**: win and full-board detection
//! - **Player**: immutable token and name
//! - **GameLoop**: the round state machine, driven through a [`Console`]
//!
//! # Example
//!
//! ```
//! use tictactoe::{Board, GameLoop, Player, ScriptedConsole};
//!
//! let mut game = GameLoop::new(
//!     Board::new(3, 3),
//!     Player::new("O", "Player 1"),
//!     Player::new("X", "Player 2"),
//! );
//! let mut console = ScriptedConsole::new(["1", "4", "2", "5", "3", "n"]);
//! game.run(&mut console).unwrap();
//! assert!(console.transcript().contains("Player 1 has won!"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod console;
mod error;
mod game;
mod player;
mod position;
pub mod rules;
pub mod screen;
mod slot;

pub use board::Board;
pub use console::{Console, ScriptedConsole};
pub use error::MoveError;
pub use game::{GameLoop, Outcome, Phase, Scoreboard, Seat};
pub use player::Player;
pub use position::Position;
pub use slot::{BLANK, Slot};
