//! Players taking part in a game.

use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A participant: the token they mark slots with and their display name.
///
/// Immutable once built; the fields are only reachable through getters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, Serialize, Deserialize, new)]
pub struct Player {
    /// Token written into claimed slots (e.g. `"X"`).
    #[new(into)]
    token: String,
    /// Name shown in turn and result messages.
    #[new(into)]
    name: String,
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
