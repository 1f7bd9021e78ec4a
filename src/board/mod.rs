//! Board representation for Gomoku

pub mod board;

#[cfg(test)]
mod tests;

// Re-exports
pub use board::{Board, Placement};

/// Default board size (15x15)
pub const BOARD_SIZE: usize = 15;

/// Largest supported board size
pub const MAX_BOARD_SIZE: usize = 32;

/// Stones in an unbroken line needed to win
pub const WIN_LENGTH: usize = 5;

/// Cell contents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Stone {
    #[default]
    Empty,
    /// The human player
    Opponent,
    /// The engine
    Computer,
}

impl Stone {
    /// Wire encoding: 0 = empty, 1 = opponent, 2 = computer
    #[inline]
    pub fn to_wire(self) -> u8 {
        match self {
            Stone::Empty => 0,
            Stone::Opponent => 1,
            Stone::Computer => 2,
        }
    }

    pub fn from_wire(value: u8) -> Option<Stone> {
        match value {
            0 => Some(Stone::Empty),
            1 => Some(Stone::Opponent),
            2 => Some(Stone::Computer),
            _ => None,
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!((row as usize) < MAX_BOARD_SIZE && (col as usize) < MAX_BOARD_SIZE);
        Self { row, col }
    }

    /// Row-major index on a board of the given size
    #[inline]
    pub fn to_index(self, size: usize) -> usize {
        self.row as usize * size + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize, size: usize) -> Self {
        Self {
            row: (idx / size) as u8,
            col: (idx % size) as u8,
        }
    }

    /// Offset by (dr, dc) as signed coordinates, which may fall off the board
    #[inline]
    pub fn offset(self, dr: i32, dc: i32) -> (i32, i32) {
        (i32::from(self.row) + dr, i32::from(self.col) + dc)
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.row, self.col).cmp(&(other.row, other.col))
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
