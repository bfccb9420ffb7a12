//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart from
//! board storage so the round state machine and the board share one
//! definition of "won" and "full".

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{lines, winning_token};
