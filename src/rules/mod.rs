//! Game rules for Gomoku
//!
//! Free-style rules: five or more in an unbroken line wins, no captures and
//! no forbidden moves.

pub mod win;

// Re-exports for convenient access
pub use win::{check_win, check_winner, find_winning_line, has_five_in_row};
