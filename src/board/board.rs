//! Board structure with a scoped place-and-restore guard

use std::ops::{Deref, DerefMut};

use super::{Pos, Stone, BOARD_SIZE, MAX_BOARD_SIZE};
use crate::error::GameError;

/// Game board: an N×N grid of cells stored row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Stone>,
    /// Number of occupied cells
    stones: usize,
}

impl Board {
    /// Create an empty board of the default size
    pub fn new() -> Self {
        Self {
            size: BOARD_SIZE,
            cells: vec![Stone::Empty; BOARD_SIZE * BOARD_SIZE],
            stones: 0,
        }
    }

    /// Create an empty board with `size` rows and columns
    pub fn with_size(size: usize) -> Result<Self, GameError> {
        if size == 0 || size > MAX_BOARD_SIZE {
            return Err(GameError::InvalidBoardSize(size));
        }
        Ok(Self {
            size,
            cells: vec![Stone::Empty; size * size],
            stones: 0,
        })
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether signed coordinates fall inside the grid
    #[inline]
    pub fn contains(&self, row: i32, col: i32) -> bool {
        let n = self.size as i32;
        row >= 0 && row < n && col >= 0 && col < n
    }

    /// Validate signed coordinates into a position on this board
    pub fn pos(&self, row: i32, col: i32) -> Result<Pos, GameError> {
        if self.contains(row, col) {
            Ok(Pos::new(row as u8, col as u8))
        } else {
            Err(GameError::OutOfRange { row, col, size: self.size })
        }
    }

    #[inline]
    fn index(&self, pos: Pos) -> Result<usize, GameError> {
        if (pos.row as usize) < self.size && (pos.col as usize) < self.size {
            Ok(pos.to_index(self.size))
        } else {
            Err(GameError::OutOfRange {
                row: i32::from(pos.row),
                col: i32::from(pos.col),
                size: self.size,
            })
        }
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Result<Stone, GameError> {
        self.index(pos).map(|idx| self.cells[idx])
    }

    /// Set a cell, keeping the stone count in step
    pub fn set(&mut self, pos: Pos, stone: Stone) -> Result<(), GameError> {
        let idx = self.index(pos)?;
        let previous = std::mem::replace(&mut self.cells[idx], stone);
        match (previous, stone) {
            (Stone::Empty, Stone::Empty) => {}
            (Stone::Empty, _) => self.stones += 1,
            (_, Stone::Empty) => self.stones -= 1,
            _ => {}
        }
        Ok(())
    }

    /// Bounds-checked lookup on signed coordinates.
    ///
    /// Returns `None` off the board, which ends line walks at the edge.
    #[inline]
    pub fn cell(&self, row: i32, col: i32) -> Option<Stone> {
        if self.contains(row, col) {
            Some(self.cells[row as usize * self.size + col as usize])
        } else {
            None
        }
    }

    /// Check if position is empty (false off the board)
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        matches!(self.get(pos), Ok(Stone::Empty))
    }

    /// Place `stone` at an empty cell for the lifetime of the returned guard.
    ///
    /// The cell is restored to empty when the guard is dropped, however the
    /// enclosing scope is left. Nested placements go through the guard.
    pub fn place(&mut self, pos: Pos, stone: Stone) -> Result<Placement<'_>, GameError> {
        if self.get(pos)? != Stone::Empty {
            return Err(GameError::InvalidMove { row: pos.row, col: pos.col });
        }
        self.set(pos, stone)?;
        Ok(Placement { board: self, pos })
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> usize {
        self.stones
    }

    /// Check if no stone has been placed
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.stones == 0
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.stones == self.cells.len()
    }

    /// Centre cell, (⌊N/2⌋, ⌊N/2⌋)
    #[inline]
    pub fn center(&self) -> Pos {
        let mid = (self.size / 2) as u8;
        Pos::new(mid, mid)
    }

    /// All positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Pos> {
        let size = self.size;
        (0..size * size).map(move |idx| Pos::from_index(idx, size))
    }

    /// Positions holding `stone`, row-major
    pub fn stones(&self, stone: Stone) -> impl Iterator<Item = Pos> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(move |&(_, &cell)| cell == stone)
            .map(move |(idx, _)| Pos::from_index(idx, size))
    }

    /// Reset every cell to empty
    pub fn clear(&mut self) {
        self.cells.fill(Stone::Empty);
        self.stones = 0;
    }

    /// Rows of wire values (0 = empty, 1 = opponent, 2 = computer)
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.cells
            .chunks(self.size)
            .map(|row| row.iter().map(|s| s.to_wire()).collect())
            .collect()
    }

    /// Rebuild a board from wire rows, rejecting unknown cell values and
    /// non-square grids.
    pub fn from_rows(rows: &[Vec<u8>]) -> Result<Self, GameError> {
        let mut board = Self::with_size(rows.len())?;
        for (r, row) in rows.iter().enumerate() {
            if row.len() != board.size {
                return Err(GameError::RaggedRows { row: r, expected: board.size, found: row.len() });
            }
            for (c, &value) in row.iter().enumerate() {
                let stone = Stone::from_wire(value).ok_or(GameError::InvalidCell { row: r, col: c, value })?;
                board.set(Pos::from_index(r * board.size + c, board.size), stone)?;
            }
        }
        Ok(board)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// A stone placed for the duration of a scope.
///
/// Dereferences to the board so deeper search levels can keep placing
/// stones; dropping it empties the cell again.
#[derive(Debug)]
pub struct Placement<'a> {
    board: &'a mut Board,
    pos: Pos,
}

impl Placement<'_> {
    /// The cell this guard occupies
    #[inline]
    pub fn pos(&self) -> Pos {
        self.pos
    }
}

impl Deref for Placement<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Placement<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Placement<'_> {
    fn drop(&mut self) {
        let idx = self.pos.to_index(self.board.size);
        if self.board.cells[idx] != Stone::Empty {
            self.board.cells[idx] = Stone::Empty;
            self.board.stones -= 1;
        }
    }
}
