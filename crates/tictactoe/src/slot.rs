//! A single cell of the playing field.

use serde::{Deserialize, Serialize};

/// Marker written into a slot that holds no token.
pub const BLANK: &str = " ";

/// One grid cell, holding a player's token or the blank marker.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Slot {
    token: String,
}

impl Slot {
    /// Creates a slot holding `token`.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// Returns the token currently in the slot.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Overwrites the token. No validation is performed.
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = token.into();
    }

    /// Returns true if the token is empty or whitespace only.
    pub fn is_empty(&self) -> bool {
        self.token.trim().is_empty()
    }

    /// Puts the blank marker back.
    pub fn reset(&mut self) {
        self.token.clear();
        self.token.push_str(BLANK);
    }
}

impl Default for Slot {
    fn default() -> Self {
        Self::new(BLANK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_slot_is_blank_and_empty() {
        let slot = Slot::default();
        assert_eq!(slot.token(), " ");
        assert!(slot.is_empty());
    }

    #[test]
    fn test_whitespace_tokens_count_as_empty() {
        for token in ["", " ", "   ", "\t", " \n "] {
            assert!(Slot::new(token).is_empty(), "{token:?} should be empty");
        }
    }

    #[test]
    fn test_token_makes_slot_occupied() {
        let mut slot = Slot::default();
        slot.set_token("X");
        assert!(!slot.is_empty());
        assert_eq!(slot.token(), "X");
    }

    #[test]
    fn test_reset_restores_blank_marker() {
        let mut slot = Slot::new("");
        slot.reset();
        assert_eq!(slot.token(), BLANK);

        slot.set_token("O");
        slot.reset();
        assert_eq!(slot, Slot::default());
    }
}
