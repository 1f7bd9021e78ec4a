//! Win condition checking
//!
//! A player wins by forming an unbroken line of [`WIN_LENGTH`] or more
//! stones horizontally, vertically or along either diagonal.

use crate::board::{Board, Pos, Stone, WIN_LENGTH};

/// Direction vectors for line checking (4 directions)
const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Count contiguous `color` stones starting one step from `pos` along (dr, dc).
#[inline]
fn run_length(board: &Board, pos: Pos, color: Stone, dr: i32, dc: i32) -> usize {
    let mut count = 0;
    let (mut r, mut c) = pos.offset(dr, dc);
    while board.cell(r, c) == Some(color) {
        count += 1;
        r += dr;
        c += dc;
    }
    count
}

/// Five-in-a-row check anchored on the stone at `pos`.
///
/// Only the four lines through `pos` are inspected, so this must be called
/// right after `color` was placed there. A `false` result does not mean the
/// board holds no winning line elsewhere.
#[inline]
pub fn check_win(board: &Board, pos: Pos, color: Stone) -> bool {
    if color == Stone::Empty {
        return false;
    }
    DIRECTIONS.iter().any(|&(dr, dc)| {
        1 + run_length(board, pos, color, dr, dc) + run_length(board, pos, color, -dr, -dc)
            >= WIN_LENGTH
    })
}

/// Find the winning line through `pos`.
///
/// Returns every stone of the run (overlines included) in ascending
/// row-major order, or `None` when no direction reaches [`WIN_LENGTH`].
/// Every direction steps down or right, so walking it from the back end
/// already yields that order.
pub fn find_winning_line(board: &Board, pos: Pos, color: Stone) -> Option<Vec<Pos>> {
    if color == Stone::Empty || board.get(pos).ok()? != color {
        return None;
    }

    for &(dr, dc) in &DIRECTIONS {
        let back = run_length(board, pos, color, -dr, -dc) as i32;
        let forward = run_length(board, pos, color, dr, dc) as i32;
        if (back + forward + 1) as usize >= WIN_LENGTH {
            let line = (-back..=forward)
                .map(|i| {
                    let (r, c) = pos.offset(dr * i, dc * i);
                    Pos::new(r as u8, c as u8)
                })
                .collect();
            return Some(line);
        }
    }
    None
}

/// Check if there's 5+ in a row for the given color anywhere on the board
pub fn has_five_in_row(board: &Board, color: Stone) -> bool {
    board.stones(color).any(|pos| check_win(board, pos, color))
}

/// Check for a winner
///
/// The opponent is checked first, matching the search's terminal test.
pub fn check_winner(board: &Board) -> Option<Stone> {
    [Stone::Opponent, Stone::Computer]
        .into_iter()
        .find(|&color| has_five_in_row(board, color))
}
