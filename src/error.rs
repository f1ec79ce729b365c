//! Error types for board mutation, the turn controller and configuration

use std::path::PathBuf;

/// Errors raised when a move cannot be applied.
///
/// The search never produces these: it only enumerates Empty cells. They exist
/// for callers that feed moves from outside (a click, a test, a text board).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("cell ({row}, {col}) is already occupied")]
    IllegalMove { row: u8, col: u8 },

    #[error("cannot place an empty stone")]
    EmptyStone,

    #[error("cell ({row}, {col}) is outside the board")]
    OutOfBounds { row: i32, col: i32 },

    #[error("the game is already over")]
    GameOver,

    #[error("move played out of turn")]
    OutOfTurn,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Errors produced while parsing the text form of a board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardParseError {
    #[error("board text is empty")]
    Empty,

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        found: usize,
        expected: usize,
    },

    #[error("unexpected character {ch:?} at row {row}, column {col}")]
    BadCell { ch: char, row: usize, col: usize },

    #[error("board size {0} is not supported")]
    BadSize(usize),
}
