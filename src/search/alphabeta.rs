//! Minimax search with alpha-beta pruning
//!
//! The computer is the maximizing side. Positions are only scored by win
//! detection: a five for the opponent is `-WIN_SCORE`, a five for the
//! computer is `+WIN_SCORE`, anything else at the horizon is 0.
//!
//! Moves are made and unmade on a single shared board through
//! [`Board::place`] guards, so a cutoff `break` can never leave a stone
//! behind.
//!
//! # Example
//!
//! ```
//! use gomoku::board::{Board, Pos, Stone};
//! use gomoku::search::{Searcher, INF, WIN_SCORE};
//!
//! let mut board = Board::new();
//! for col in 3..7 {
//!     board.set(Pos::new(7, col), Stone::Computer).unwrap();
//! }
//! board.set(Pos::new(8, 8), Stone::Opponent).unwrap();
//!
//! let mut searcher = Searcher::new();
//! let score = searcher.minimax(&mut board, 1, true, -INF, INF);
//! assert_eq!(score, WIN_SCORE);
//! ```

use crate::board::{Board, Pos, Stone};
use crate::rules::{check_win, has_five_in_row};

use super::candidates::generate_candidates;

/// Score of a won position, from the computer's point of view
pub const WIN_SCORE: i32 = 10_000;

/// Infinity score for alpha-beta bounds
pub const INF: i32 = WIN_SCORE + 1;

/// Default search depth in plies
pub const DEFAULT_MAX_DEPTH: u8 = 3;

/// Search statistics for diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes visited (including terminal ones)
    pub nodes: u64,
    /// Times the remaining siblings were skipped because `beta <= alpha`
    pub beta_cutoffs: u64,
}

/// Alpha-beta searcher.
///
/// Holds no position state; the board is borrowed for each call.
#[derive(Debug, Default)]
pub struct Searcher {
    stats: SearchStats,
}

impl Searcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Minimax value of `board` with `depth` plies left.
    ///
    /// `maximizing` is true when the computer is to move. The board is
    /// returned unchanged.
    pub fn minimax(
        &mut self,
        board: &mut Board,
        depth: u8,
        maximizing: bool,
        alpha: i32,
        beta: i32,
    ) -> i32 {
        self.search_node(board, depth, maximizing, alpha, beta, None)
    }

    /// Recursive alpha-beta search.
    ///
    /// `last_move` is the stone placed by the parent node. The entry node has
    /// none and scans the whole board; below it only the last stone can have
    /// completed a line, so the anchored check gives the same verdict.
    fn search_node(
        &mut self,
        board: &mut Board,
        depth: u8,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
        last_move: Option<Pos>,
    ) -> i32 {
        self.stats.nodes += 1;

        if let Some(score) = terminal_score(board, last_move) {
            return score;
        }
        if depth == 0 {
            return 0;
        }

        let candidates = generate_candidates(board);
        if candidates.is_empty() {
            return 0; // Draw
        }

        if maximizing {
            let mut best = -INF;
            for mov in candidates {
                let Ok(mut child) = board.place(mov, Stone::Computer) else {
                    continue;
                };
                let score = self.search_node(&mut child, depth - 1, false, alpha, beta, Some(mov));
                best = best.max(score);
                alpha = alpha.max(best);
                if beta <= alpha {
                    self.stats.beta_cutoffs += 1;
                    break;
                }
            }
            best
        } else {
            let mut best = INF;
            for mov in candidates {
                let Ok(mut child) = board.place(mov, Stone::Opponent) else {
                    continue;
                };
                let score = self.search_node(&mut child, depth - 1, true, alpha, beta, Some(mov));
                best = best.min(score);
                beta = beta.min(best);
                if beta <= alpha {
                    self.stats.beta_cutoffs += 1;
                    break;
                }
            }
            best
        }
    }

    /// Statistics accumulated since the last reset.
    #[must_use]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = SearchStats::default();
    }
}

/// Win/loss score if the game is already decided at this node.
///
/// The opponent's five is checked before the computer's.
fn terminal_score(board: &Board, last_move: Option<Pos>) -> Option<i32> {
    match last_move {
        Some(pos) => match board.get(pos) {
            Ok(Stone::Opponent) if check_win(board, pos, Stone::Opponent) => Some(-WIN_SCORE),
            Ok(Stone::Computer) if check_win(board, pos, Stone::Computer) => Some(WIN_SCORE),
            _ => None,
        },
        None => {
            if has_five_in_row(board, Stone::Opponent) {
                Some(-WIN_SCORE)
            } else if has_five_in_row(board, Stone::Computer) {
                Some(WIN_SCORE)
            } else {
                None
            }
        }
    }
}
