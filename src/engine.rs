//! Main AI Engine integrating all search components
//!
//! This module picks the computer's move. The search follows a priority system:
//!
//! 1. **Immediate win**: a candidate that completes five for the computer
//! 2. **Block**: the first candidate that would complete five for the opponent
//! 3. **Alpha-Beta**: fixed-depth minimax over every candidate
//!
//! The two pre-checks bypass the search entirely.
//!
//! # Example
//!
//! ```
//! use gomoku::{AIEngine, Board, Pos, SearchType, Stone};
//!
//! let mut engine = AIEngine::with_config(2);
//! let mut board = Board::new();
//! for col in 0..4 {
//!     board.set(Pos::new(9, col), Stone::Opponent).unwrap();
//! }
//! board.set(Pos::new(3, 3), Stone::Computer).unwrap();
//!
//! let result = engine.get_move_with_stats(&mut board);
//! assert_eq!(result.best_move, Some(Pos::new(9, 4)));
//! assert_eq!(result.search_type, SearchType::Block);
//! ```

use std::time::Instant;

use tracing::debug;

use crate::board::{Board, Pos, Stone};
use crate::config::EngineConfig;
use crate::rules::check_win;
use crate::search::{generate_candidates, Searcher, DEFAULT_MAX_DEPTH, INF, WIN_SCORE};

/// Type of search that produced the result.
///
/// This indicates which phase of the search hierarchy found the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Completes five for the computer
    ImmediateWin,
    /// Occupies the cell that would complete five for the opponent
    Block,
    /// Regular alpha-beta search result
    AlphaBeta,
    /// No candidate left; the board is full
    NoMove,
}

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Best move found, if any
    pub best_move: Option<Pos>,
    /// Minimax score of the chosen move (computer's point of view)
    pub score: i32,
    /// Type of search that found this move
    pub search_type: SearchType,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

impl MoveResult {
    #[inline]
    fn immediate_win(pos: Pos, time_ms: u64) -> Self {
        Self {
            best_move: Some(pos),
            score: WIN_SCORE,
            search_type: SearchType::ImmediateWin,
            time_ms,
            nodes: 0,
        }
    }

    #[inline]
    fn block(pos: Pos, time_ms: u64) -> Self {
        Self {
            best_move: Some(pos),
            score: 0,
            search_type: SearchType::Block,
            time_ms,
            nodes: 0,
        }
    }

    #[inline]
    fn alpha_beta(pos: Option<Pos>, score: i32, time_ms: u64, nodes: u64) -> Self {
        Self {
            best_move: pos,
            score,
            search_type: SearchType::AlphaBeta,
            time_ms,
            nodes,
        }
    }

    #[inline]
    fn no_move(time_ms: u64) -> Self {
        Self {
            best_move: None,
            score: 0,
            search_type: SearchType::NoMove,
            time_ms,
            nodes: 0,
        }
    }
}

/// Main AI Engine for Gomoku.
///
/// The engine plays [`Stone::Computer`] against [`Stone::Opponent`]. It
/// works on the caller's board in place: candidate stones are placed and
/// removed during the search, and the board is handed back unchanged.
pub struct AIEngine {
    searcher: Searcher,
    /// Search depth in plies for the alpha-beta phase
    max_depth: u8,
}

impl AIEngine {
    /// Create a new AI engine searching [`DEFAULT_MAX_DEPTH`] plies.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(DEFAULT_MAX_DEPTH)
    }

    /// Create an AI engine with a custom search depth.
    ///
    /// ```
    /// use gomoku::AIEngine;
    ///
    /// let engine = AIEngine::with_config(2);
    /// assert_eq!(engine.max_depth(), 2);
    /// ```
    #[must_use]
    pub fn with_config(max_depth: u8) -> Self {
        Self {
            searcher: Searcher::new(),
            max_depth,
        }
    }

    #[must_use]
    pub fn from_config(config: &EngineConfig) -> Self {
        Self::with_config(config.max_depth)
    }

    /// Get the best move for the computer, or `None` on a full board.
    #[must_use]
    pub fn get_move(&mut self, board: &mut Board) -> Option<Pos> {
        self.get_move_with_stats(board).best_move
    }

    /// Get the best move with search statistics.
    ///
    /// # Search Priority
    ///
    /// 1. Immediate winning move (no search)
    /// 2. First opponent winning cell in candidate order (no search)
    /// 3. Alpha-beta: the candidate with the strictly greatest score,
    ///    ties keep the earlier candidate
    #[must_use]
    pub fn get_move_with_stats(&mut self, board: &mut Board) -> MoveResult {
        let start = Instant::now();
        let elapsed_ms = || start.elapsed().as_millis() as u64;

        let candidates = generate_candidates(board);
        if candidates.is_empty() {
            debug!("no candidate moves left");
            return MoveResult::no_move(elapsed_ms());
        }

        // 1. Win now if we can
        if let Some(win_move) = find_immediate_win(board, &candidates, Stone::Computer) {
            let result = MoveResult::immediate_win(win_move, elapsed_ms());
            log_result(&result);
            return result;
        }

        // 2. Block the opponent's five
        if let Some(block) = find_immediate_win(board, &candidates, Stone::Opponent) {
            let result = MoveResult::block(block, elapsed_ms());
            log_result(&result);
            return result;
        }

        // 3. Alpha-beta over every candidate, the opponent replies next
        self.searcher.reset_stats();
        let mut best_move = None;
        let mut best_score = -INF;

        for mov in candidates {
            let Ok(mut placed) = board.place(mov, Stone::Computer) else {
                continue;
            };
            let score = self
                .searcher
                .minimax(&mut placed, self.max_depth, false, -INF, INF);

            if score > best_score {
                best_score = score;
                best_move = Some(mov);
            }
        }

        let result = MoveResult::alpha_beta(
            best_move,
            best_score,
            elapsed_ms(),
            self.searcher.stats().nodes,
        );
        log_result(&result);
        result
    }

    #[must_use]
    pub fn max_depth(&self) -> u8 {
        self.max_depth
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// First candidate, in generator order, where `color` completes five.
fn find_immediate_win(board: &mut Board, candidates: &[Pos], color: Stone) -> Option<Pos> {
    candidates.iter().copied().find(|&pos| {
        board
            .place(pos, color)
            .is_ok_and(|placed| check_win(&placed, pos, color))
    })
}

fn log_result(result: &MoveResult) {
    if let Some(pos) = result.best_move {
        debug!(
            search_type = ?result.search_type,
            %pos,
            score = result.score,
            nodes = result.nodes,
            time_ms = result.time_ms,
            "computer move selected"
        );
    }
}
