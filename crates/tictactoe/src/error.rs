//! Move rejection reasons.

/// Why a move was refused.
///
/// Callers that only need a yes/no answer use [`crate::Board::write_turn`];
/// the players are shown the same generic alert for every variant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The move text is not an integer.
    #[display("'{}' is not a slot number", input)]
    InvalidMoveFormat {
        /// Text exactly as the player typed it.
        input: String,
    },

    /// The number does not address a slot on this board.
    #[display("Slot {} is outside 1-{}", position, max)]
    MoveOutOfRange {
        /// Parsed number.
        position: i64,
        /// Highest valid slot number.
        max: usize,
    },

    /// The slot already holds a token.
    #[display("Slot {} is already taken", position)]
    SlotOccupied {
        /// 1-based slot number.
        position: usize,
    },

    /// No round is being played, so no move can be taken.
    #[display("The round is already over")]
    RoundOver,
}

impl std::error::Error for MoveError {}
