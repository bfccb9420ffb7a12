//! The playing field.

use crate::error::MoveError;
use crate::player::Player;
use crate::position::Position;
use crate::rules;
use crate::slot::Slot;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Separator drawn between rows.
const ROW_SEPARATOR: &str = "-------------";

/// A `height` × `width` grid of slots.
///
/// Slots are stored row-major; position `p` lives at index `p - 1`.
/// Dimensions never change after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    height: usize,
    width: usize,
    slots: Vec<Slot>,
}

impl Board {
    /// Creates a board with every slot blank.
    #[instrument]
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            height,
            width,
            slots: vec![Slot::default(); height * width],
        }
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Total number of slots, which is also the highest position.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True for a board with no slots at all.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// All slots in row-major order.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// The slot at `position`.
    pub fn slot(&self, position: Position) -> Option<&Slot> {
        self.slots.get(position.index())
    }

    /// Positions whose slot is still empty, in ascending order.
    pub fn available_positions(&self) -> Vec<Position> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_empty())
            .filter_map(|(i, _)| Position::from_index(i, self.len()))
            .collect()
    }

    /// Checks if every slot holds a token.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Checks if a row, column or diagonal is filled with one token.
    pub fn check_win(&self) -> bool {
        rules::winning_token(self).is_some()
    }

    /// Renders the board as text.
    ///
    /// With `use_tokens` false every cell shows its position number instead
    /// of its token, producing the guide players use to pick a slot.
    pub fn draw(&self, use_tokens: bool) -> String {
        let mut printed = String::new();

        for row in 0..self.height {
            for col in 0..self.width {
                let index = row * self.width + col;
                let label = if use_tokens {
                    self.slots[index].token().to_string()
                } else {
                    (index + 1).to_string()
                };

                if col == 0 {
                    printed.push_str(&format!(" {label} | "));
                } else {
                    printed.push_str(&label);
                }
                if 0 < col && col + 1 < self.width {
                    printed.push_str(" | ");
                }
            }

            printed.push('\n');
            if row + 1 < self.height {
                printed.push_str(ROW_SEPARATOR);
                printed.push('\n');
            }
        }

        printed
    }

    /// Writes `player`'s token at the slot named by `move_text`.
    ///
    /// # Errors
    ///
    /// - [`MoveError::InvalidMoveFormat`] if the text is not an integer
    /// - [`MoveError::MoveOutOfRange`] if it names no slot on this board
    /// - [`MoveError::SlotOccupied`] if the slot already holds a token
    ///
    /// The board is left untouched on error.
    #[instrument(skip(self, player), fields(token = %player.token()))]
    pub fn try_write_turn(&mut self, player: &Player, move_text: &str) -> Result<Position, MoveError> {
        let position = Position::parse(move_text, self.len())?;
        let slot = &mut self.slots[position.index()];

        if !slot.is_empty() {
            return Err(MoveError::SlotOccupied {
                position: position.number(),
            });
        }

        slot.set_token(player.token().as_str());
        debug!(%position, "Token written");
        Ok(position)
    }

    /// Writes `player`'s token at `move_text`, returning whether it was accepted.
    pub fn write_turn(&mut self, player: &Player, move_text: &str) -> bool {
        self.try_write_turn(player, move_text).is_ok()
    }

    /// Blanks every slot.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.slots.iter_mut().for_each(Slot::reset);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(3, 3)
    }
}
