//! Slot addressing by 1-based, row-major number.

use crate::error::MoveError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A slot number in `1..=len`, counted row by row from the top-left.
///
/// Only constructed against a board size, so a `Position` always addresses
/// a real slot of a board with at least that many cells.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub struct Position(usize);

impl Position {
    /// Returns the position for `number` if it lies in `1..=len`.
    pub fn new(number: usize, len: usize) -> Option<Self> {
        (1..=len).contains(&number).then_some(Self(number))
    }

    /// Creates a position from a 0-based row-major index.
    pub fn from_index(index: usize, len: usize) -> Option<Self> {
        Self::new(index + 1, len)
    }

    /// Parses player input against a board of `len` slots.
    ///
    /// Surrounding whitespace and a leading sign are accepted, the way a
    /// console integer prompt usually is.
    #[instrument]
    pub fn parse(text: &str, len: usize) -> Result<Self, MoveError> {
        let number: i64 = text
            .trim()
            .parse()
            .map_err(|_| MoveError::InvalidMoveFormat {
                input: text.to_string(),
            })?;

        usize::try_from(number)
            .ok()
            .and_then(|n| Self::new(n, len))
            .ok_or(MoveError::MoveOutOfRange {
                position: number,
                max: len,
            })
    }

    /// The 1-based slot number.
    pub fn number(self) -> usize {
        self.0
    }

    /// The 0-based row-major index.
    pub fn index(self) -> usize {
        self.0 - 1
    }

    /// Row and column on a board `width` slots wide.
    pub fn row_col(self, width: usize) -> (usize, usize) {
        (self.index() / width, self.index() % width)
    }
}
