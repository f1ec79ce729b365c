//! Game configuration, loadable from TOML

use std::path::Path;

use crate::board::{Stone, BOARD_SIZE, MAX_BOARD_SIZE, WIN_LENGTH};
use crate::error::ConfigError;
use crate::search::Strategy;

/// Longest winning run supported.
///
/// Past five, a single open window of `n - 1` stones weighs `10^(n-1)` and the
/// window sum overtakes `PatternScore::WIN`.
pub const MAX_WIN_LENGTH: usize = 5;

/// Who plays which side
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum GameMode {
    /// A human against the engine
    HumanVsAi { human_color: Stone },
    /// The engine against itself
    AiVsAi,
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::HumanVsAi {
            human_color: Stone::Black,
        }
    }
}

/// Top-level game configuration.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Search depth in plies
    pub depth: u8,
    /// Board edge length
    pub board_size: usize,
    /// Run length needed to win
    pub win_length: usize,
    /// Search used when the engine plays Black
    pub black_strategy: Strategy,
    /// Search used when the engine plays White
    pub white_strategy: Strategy,
    pub mode: GameMode,
    /// Fixed seed for the move shuffle; random when absent
    pub seed: Option<u64>,
    /// Pause before the engine answers a human move
    pub ai_delay_ms: u64,
    /// Pause between engine moves in AI-vs-AI games
    pub ai_vs_ai_delay_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            depth: 2,
            board_size: BOARD_SIZE,
            win_length: WIN_LENGTH,
            black_strategy: Strategy::Minimax,
            white_strategy: Strategy::AlphaBeta,
            mode: GameMode::default(),
            seed: None,
            ai_delay_ms: 500,
            ai_vs_ai_delay_ms: 100,
        }
    }
}

impl GameConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: GameConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.depth == 0 {
            return Err(ConfigError::Validation("depth must be >= 1".into()));
        }
        if self.board_size == 0 || self.board_size > MAX_BOARD_SIZE {
            return Err(ConfigError::Validation(format!(
                "board_size must be in [1, {MAX_BOARD_SIZE}]"
            )));
        }
        let max_win = self.board_size.min(MAX_WIN_LENGTH);
        if self.win_length == 0 || self.win_length > max_win {
            return Err(ConfigError::Validation(format!(
                "win_length must be in [1, {max_win}]"
            )));
        }
        if let GameMode::HumanVsAi { human_color } = self.mode {
            if human_color == Stone::Empty {
                return Err(ConfigError::Validation(
                    "mode.human_color must be black or white".into(),
                ));
            }
        }
        Ok(())
    }

    /// Search used by the engine when it plays `color`
    pub fn strategy_for(&self, color: Stone) -> Strategy {
        match color {
            Stone::White => self.white_strategy,
            _ => self.black_strategy,
        }
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&GameConfig::default())
    }
}
