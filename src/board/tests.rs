use super::*;
use crate::error::GameError;

#[test]
fn test_from_rows_matches_to_rows() {
    let mut board = Board::with_size(4).unwrap();
    board.set(Pos::new(0, 3), Stone::Opponent).unwrap();
    board.set(Pos::new(2, 1), Stone::Computer).unwrap();

    let rebuilt = Board::from_rows(&board.to_rows()).unwrap();
    assert_eq!(rebuilt, board);
    assert_eq!(rebuilt.stone_count(), 2);
}

#[test]
fn test_from_rows_rejects_unknown_value() {
    let rows = vec![vec![0, 1], vec![3, 0]];
    assert_eq!(
        Board::from_rows(&rows),
        Err(GameError::InvalidCell { row: 1, col: 0, value: 3 })
    );
}

#[test]
fn test_stone_wire_values() {
    assert_eq!(Stone::Empty.to_wire(), 0);
    assert_eq!(Stone::Opponent.to_wire(), 1);
    assert_eq!(Stone::Computer.to_wire(), 2);
    assert_eq!(Stone::from_wire(2), Some(Stone::Computer));
    assert_eq!(Stone::from_wire(3), None);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(7, 7); // Center of 15x15
    assert_eq!(pos.to_index(15), 7 * 15 + 7);
    assert_eq!(pos.to_index(15), 112);

    let pos2 = Pos::from_index(112, 15);
    assert_eq!(pos2, pos);
}

#[test]
fn test_pos_ordering_is_row_major() {
    let pos1 = Pos::new(0, 0);
    let pos2 = Pos::new(0, 1);
    let pos3 = Pos::new(1, 0);

    assert!(pos1 < pos2);
    assert!(pos2 < pos3);
    assert!(pos1 < pos3);
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 15);
    assert_eq!(WIN_LENGTH, 5);
}

#[test]
fn test_new_board_is_empty() {
    let board = Board::new();
    assert_eq!(board.size(), 15);
    assert!(board.is_board_empty());
    assert_eq!(board.stone_count(), 0);
    assert!(board.positions().all(|p| board.is_empty(p)));
}

#[test]
fn test_with_size_bounds() {
    assert_eq!(Board::with_size(0), Err(GameError::InvalidBoardSize(0)));
    assert_eq!(Board::with_size(33), Err(GameError::InvalidBoardSize(33)));
    assert_eq!(Board::with_size(5).map(|b| b.size()), Ok(5));
}

#[test]
fn test_get_set() {
    let mut board = Board::new();
    let pos = Pos::new(3, 4);
    board.set(pos, Stone::Opponent).unwrap();
    assert_eq!(board.get(pos), Ok(Stone::Opponent));
    assert!(!board.is_board_empty());
    assert_eq!(board.stone_count(), 1);

    board.set(pos, Stone::Computer).unwrap();
    assert_eq!(board.stone_count(), 1);

    board.set(pos, Stone::Empty).unwrap();
    assert!(board.is_board_empty());
}

#[test]
fn test_get_out_of_range() {
    let board = Board::with_size(9).unwrap();
    let err = board.get(Pos::new(9, 0)).unwrap_err();
    assert_eq!(err, GameError::OutOfRange { row: 9, col: 0, size: 9 });
}

#[test]
fn test_set_out_of_range() {
    let mut board = Board::with_size(9).unwrap();
    assert!(board.set(Pos::new(0, 12), Stone::Computer).is_err());
    assert!(board.is_board_empty());
}

#[test]
fn test_pos_validation() {
    let board = Board::new();
    assert_eq!(board.pos(14, 14), Ok(Pos::new(14, 14)));
    assert!(board.pos(-1, 0).is_err());
    assert!(board.pos(0, -1).is_err());
    assert!(board.pos(15, 0).is_err());
    assert!(board.pos(0, 15).is_err());
}

#[test]
fn test_cell_off_board_is_none() {
    let mut board = Board::new();
    board.set(Pos::new(0, 0), Stone::Computer).unwrap();
    assert_eq!(board.cell(0, 0), Some(Stone::Computer));
    assert_eq!(board.cell(-1, 0), None);
    assert_eq!(board.cell(0, 15), None);
}

#[test]
fn test_center() {
    assert_eq!(Board::new().center(), Pos::new(7, 7));
    assert_eq!(Board::with_size(6).unwrap().center(), Pos::new(3, 3));
}

#[test]
fn test_placement_restores_on_drop() {
    let mut board = Board::new();
    let pos = Pos::new(5, 5);
    {
        let placed = board.place(pos, Stone::Computer).unwrap();
        assert_eq!(placed.pos(), pos);
        assert_eq!(placed.get(pos), Ok(Stone::Computer));
        assert_eq!(placed.stone_count(), 1);
    }
    assert_eq!(board.get(pos), Ok(Stone::Empty));
    assert!(board.is_board_empty());
}

#[test]
fn test_nested_placements_unwind() {
    let mut board = Board::new();
    board.set(Pos::new(7, 7), Stone::Opponent).unwrap();
    let before = board.clone();

    for first in [Pos::new(6, 6), Pos::new(6, 7)] {
        let mut outer = board.place(first, Stone::Computer).unwrap();
        for second in [Pos::new(8, 8), Pos::new(8, 7)] {
            let inner = outer.place(second, Stone::Opponent).unwrap();
            assert_eq!(inner.stone_count(), 3);
            if second == Pos::new(8, 8) {
                // leaving early still restores
                continue;
            }
        }
        assert_eq!(outer.stone_count(), 2);
    }

    assert_eq!(board, before);
}

#[test]
fn test_place_on_occupied_fails() {
    let mut board = Board::new();
    board.set(Pos::new(2, 2), Stone::Opponent).unwrap();
    let err = board.place(Pos::new(2, 2), Stone::Computer).unwrap_err();
    assert_eq!(err, GameError::InvalidMove { row: 2, col: 2 });
    assert_eq!(board.get(Pos::new(2, 2)), Ok(Stone::Opponent));
}

#[test]
fn test_stones_iterator_row_major() {
    let mut board = Board::new();
    board.set(Pos::new(4, 1), Stone::Computer).unwrap();
    board.set(Pos::new(1, 9), Stone::Computer).unwrap();
    board.set(Pos::new(2, 2), Stone::Opponent).unwrap();

    let computer: Vec<Pos> = board.stones(Stone::Computer).collect();
    assert_eq!(computer, vec![Pos::new(1, 9), Pos::new(4, 1)]);
}

#[test]
fn test_clear_and_rows() {
    let mut board = Board::with_size(3).unwrap();
    board.set(Pos::new(0, 1), Stone::Opponent).unwrap();
    board.set(Pos::new(2, 2), Stone::Computer).unwrap();
    assert_eq!(board.to_rows(), vec![vec![0, 1, 0], vec![0, 0, 0], vec![0, 0, 2]]);

    board.clear();
    assert!(board.is_board_empty());
    assert_eq!(board.to_rows(), vec![vec![0; 3]; 3]);
}

#[test]
fn test_is_full() {
    let mut board = Board::with_size(2).unwrap();
    for pos in board.positions().collect::<Vec<_>>() {
        board.set(pos, Stone::Opponent).unwrap();
    }
    assert!(board.is_full());
}
