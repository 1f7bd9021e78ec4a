//! Error types for the game core and configuration loading

use std::path::PathBuf;

/// Errors reported by the board and the game session.
///
/// Win, loss and draw are outcomes, not errors; see [`crate::game::Outcome`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("position ({row}, {col}) is outside the {size}x{size} board")]
    OutOfRange { row: i32, col: i32, size: usize },

    #[error("invalid move: ({row}, {col}) is already occupied")]
    InvalidMove { row: u8, col: u8 },

    #[error("the game is over, restart to play again")]
    GameOver,

    #[error("cell ({row}, {col}) holds {value}, expected 0, 1 or 2")]
    InvalidCell { row: usize, col: usize, value: u8 },

    #[error("board rows must all have length {expected}, row {row} has {found}")]
    RaggedRows { row: usize, expected: usize, found: usize },

    #[error("board size {0} is not supported (expected 1..={max})", max = crate::board::MAX_BOARD_SIZE)]
    InvalidBoardSize(usize),
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
