//! Gomoku against the computer
//!
//! A human plays a computer opponent on a square board (15x15 by default).
//! The first side with five or more stones in a row, horizontally,
//! vertically or diagonally, wins. A full board with no five is a draw.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//! - [`board`]: Board representation and scoped stone placement
//! - [`rules`]: Five-in-a-row detection
//! - [`search`]: Candidate generation and minimax with alpha-beta pruning
//! - [`engine`]: Move selection (immediate win, block, search)
//! - [`game`]: Game session: move validation, turn order, outcome
//! - [`config`]: TOML configuration
//! - [`ui`]: egui desktop front end
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{GameSession, Outcome, Stone};
//!
//! let mut session = GameSession::new();
//!
//! // Human plays at the center, the computer answers in the same call
//! let outcome = session.apply_player_move(7, 7).unwrap();
//! assert_eq!(outcome, Outcome::Ongoing);
//!
//! let ai = session.last_ai_move().unwrap();
//! assert_eq!(session.board().get(ai), Ok(Stone::Computer));
//! println!("AI plays at {ai}");
//! ```
//!
//! # Search Priority
//!
//! The engine follows this priority:
//! 1. Immediate winning move
//! 2. Block the opponent's immediate five
//! 3. Alpha-Beta search to a fixed depth (3 plies by default)

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod game;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone, BOARD_SIZE, WIN_LENGTH};
pub use config::AppConfig;
pub use engine::{AIEngine, MoveResult, SearchType};
pub use error::{ConfigError, GameError};
pub use game::{GameSession, GameView, Outcome};
