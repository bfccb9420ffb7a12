//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe::{Board, GameLoop, Player};
use tracing::{debug, info, instrument, warn};

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "tictactoe.toml";

/// Largest accepted board side.
const MAX_SIDE: usize = 9;

/// Board shape, seating and display settings.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of rows.
    height: usize,

    /// Number of columns.
    width: usize,

    /// Player who opens the first round.
    first: Player,

    /// The other player.
    second: Player,

    /// Clear the terminal before each screen.
    clear_screen: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            height: 3,
            width: 3,
            first: Player::new("O", "Player 1"),
            second: Player::new("X", "Player 2"),
            clear_screen: true,
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(height = config.height, width = config.width, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `explicit` if given, else [`DEFAULT_CONFIG_FILE`] if it exists,
    /// else the defaults.
    #[instrument]
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => Self::from_file(DEFAULT_CONFIG_FILE),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Applies command-line overrides on top of the loaded values.
    pub fn apply_overrides(&mut self, height: Option<usize>, width: Option<usize>, no_clear: bool) {
        if let Some(height) = height {
            self.height = height;
        }
        if let Some(width) = width {
            self.width = width;
        }
        if no_clear {
            self.clear_screen = false;
        }
    }

    /// Checks the settings describe a playable game.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (label, side) in [("height", self.height), ("width", self.width)] {
            if !(1..=MAX_SIDE).contains(&side) {
                return Err(ConfigError::new(format!(
                    "Board {} must be between 1 and {}, got {}",
                    label, MAX_SIDE, side
                )));
            }
        }

        for player in [&self.first, &self.second] {
            if player.token().trim().is_empty() {
                return Err(ConfigError::new(format!("Player '{}' has a blank token", player.name())));
            }
            if player.name().trim().is_empty() {
                return Err(ConfigError::new(format!(
                    "Player with token '{}' has no name",
                    player.token()
                )));
            }
        }

        if self.first.token() == self.second.token() {
            return Err(ConfigError::new(format!(
                "Both players use token '{}'",
                self.first.token()
            )));
        }

        if self.height != self.width {
            warn!(
                height = self.height,
                width = self.width,
                "Board is not square, diagonals will not count as wins"
            );
        }

        Ok(())
    }

    /// Builds a fresh game from these settings.
    pub fn build_game(&self) -> GameLoop {
        GameLoop::new(
            Board::new(self.height, self.width),
            self.first.clone(),
            self.second.clone(),
        )
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults_match_classic_game() {
        let config = GameConfig::default();
        assert_eq!((*config.height(), *config.width()), (3, 3));
        assert_eq!(config.first().token(), "O");
        assert_eq!(config.first().name(), "Player 1");
        assert_eq!(config.second().token(), "X");
        assert_eq!(config.second().name(), "Player 2");
        assert!(*config.clear_screen());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_file_partial() {
        let file = write_config(
            r#"
height = 4
width = 4

[first]
token = "A"
name = "Alice"
"#,
        );
        let config = GameConfig::from_file(file.path()).unwrap();
        assert_eq!(*config.height(), 4);
        assert_eq!(config.first().name(), "Alice");
        assert_eq!(config.second(), &Player::new("X", "Player 2"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_file_missing() {
        let err = GameConfig::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(err.message.starts_with("Failed to read config file"));
    }

    #[test]
    fn test_from_file_malformed() {
        let file = write_config("height = \"tall\"");
        let err = GameConfig::from_file(file.path()).unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }

    #[test]
    fn test_overrides() {
        let mut config = GameConfig::default();
        config.apply_overrides(Some(5), None, true);
        assert_eq!((*config.height(), *config.width()), (5, 3));
        assert!(!*config.clear_screen());
    }

    #[test]
    fn test_validate_rejects_bad_sizes() {
        for (h, w) in [(0, 3), (3, 0), (10, 10)] {
            let mut config = GameConfig::default();
            config.apply_overrides(Some(h), Some(w), false);
            assert!(config.validate().is_err(), "{h}x{w}");
        }
    }

    #[test]
    fn test_validate_rejects_bad_players() {
        let mut config = GameConfig::default();
        config.second = Player::new("O", "Player 2");
        assert!(config.validate().unwrap_err().message.contains("Both players"));

        config.second = Player::new(" ", "Player 2");
        assert!(config.validate().unwrap_err().message.contains("blank token"));

        config.second = Player::new("X", "");
        assert!(config.validate().unwrap_err().message.contains("no name"));
    }

    #[test]
    fn test_build_game_uses_settings() {
        let mut config = GameConfig::default();
        config.apply_overrides(Some(4), Some(4), false);
        let game = config.build_game();
        assert_eq!(game.board().len(), 16);
        assert_eq!(game.active_player().name(), "Player 1");
    }
}
