//! Search module for Gomoku AI
//!
//! Contains:
//! - Candidate move generation (cells next to existing stones)
//! - Minimax search with alpha-beta pruning

pub mod alphabeta;
pub mod candidates;

pub use alphabeta::{SearchStats, Searcher, DEFAULT_MAX_DEPTH, INF, WIN_SCORE};
pub use candidates::generate_candidates;
