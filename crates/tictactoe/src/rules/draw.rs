//! Full-board and draw detection.

use super::win::winning_token;
use crate::Board;
use tracing::instrument;

/// Checks if no slot is empty.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.slots().iter().all(|slot| !slot.is_empty())
}

/// A full board with no winning line.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && winning_token(board).is_none()
}
