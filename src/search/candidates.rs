//! Candidate move generation
//!
//! The search only looks at empty cells touching an existing stone, which
//! keeps the branching factor small on a mostly empty board.

use crate::board::{Board, Pos, Stone};

/// Generate candidate moves in row-major order.
///
/// - Empty board: the single centre cell.
/// - Otherwise: every empty cell with at least one occupied 8-neighbour.
/// - Full board: no candidates.
///
/// The order is fixed so that tie-breaks in move selection are reproducible.
pub fn generate_candidates(board: &Board) -> Vec<Pos> {
    if board.is_board_empty() {
        return vec![board.center()];
    }

    board
        .positions()
        .filter(|&pos| board.is_empty(pos) && has_neighbor(board, pos))
        .collect()
}

/// Check whether any of the 8 surrounding cells holds a stone
#[inline]
fn has_neighbor(board: &Board, pos: Pos) -> bool {
    for dr in -1i32..=1 {
        for dc in -1i32..=1 {
            if dr == 0 && dc == 0 {
                continue;
            }
            let (r, c) = pos.offset(dr, dc);
            if matches!(board.cell(r, c), Some(s) if s != Stone::Empty) {
                return true;
            }
        }
    }
    false
}
