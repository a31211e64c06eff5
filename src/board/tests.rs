use super::*;
use crate::error::RuleError;

#[test]
fn test_stone_opponent() {
    assert_eq!(Stone::Black.opponent(), Stone::White);
    assert_eq!(Stone::White.opponent(), Stone::Black);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(7, 7); // Center
    assert_eq!(pos.to_index(), 7 * 15 + 7);
    assert_eq!(pos.to_index(), 112);

    let pos2 = Pos::from_index(112);
    assert_eq!(pos2, pos);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(14, 14));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, -1));
    assert!(!Pos::is_valid(15, 0));
    assert!(!Pos::is_valid(0, 15));
}

#[test]
fn test_pos_try_new() {
    assert_eq!(Pos::try_new(3, 4).unwrap(), Pos::new(3, 4));
    assert_eq!(
        Pos::try_new(-1, 4).unwrap_err(),
        RuleError::OutOfBounds { row: -1, col: 4 }
    );
}

#[test]
fn test_pos_offset() {
    let pos = Pos::new(0, 14);
    assert_eq!(pos.offset(1, -1, 2), Some(Pos::new(2, 12)));
    assert_eq!(pos.offset(0, 1, 1), None);
    assert_eq!(pos.offset(-1, 0, 1), None);
}

#[test]
fn test_pos_ordering() {
    assert!(Pos::new(0, 0) < Pos::new(0, 1));
    assert!(Pos::new(0, 14) < Pos::new(1, 0));
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 15);
    assert_eq!(TOTAL_CELLS, 225);
}

#[test]
fn test_cell_at_out_of_bounds() {
    let board = Board::new();
    assert_eq!(
        board.cell_at(Pos { row: 3, col: 15 }).unwrap_err(),
        RuleError::OutOfBounds { row: 3, col: 15 }
    );
    assert!(!board.is_empty(Pos { row: 3, col: 15 }));
}

#[test]
fn test_place_and_count() {
    let mut board = Board::new();
    board.place(Pos::new(7, 7), Stone::Black).unwrap();
    board.place(Pos::new(7, 8), Stone::White).unwrap();

    assert_eq!(board.cell_at(Pos::new(7, 7)).unwrap(), Cell::Occupied(Stone::Black));
    assert_eq!(board.cell_at(Pos::new(7, 8)).unwrap(), Cell::Occupied(Stone::White));
    assert!(!board.is_empty(Pos::new(7, 7)));
    assert_eq!(board.stone_count(), 2);
    assert_eq!(board.empty_points().count(), TOTAL_CELLS - 2);
    assert!(!board.is_full());
}

#[test]
fn test_place_occupied_rejected() {
    let mut board = Board::new();
    board.place(Pos::new(7, 7), Stone::Black).unwrap();
    assert_eq!(
        board.place(Pos::new(7, 7), Stone::White).unwrap_err(),
        RuleError::AlreadyOccupied(Pos::new(7, 7))
    );
    // Nothing changed
    assert_eq!(board.stone_count(), 1);
    assert_eq!(board.cell_at(Pos::new(7, 7)).unwrap(), Cell::Occupied(Stone::Black));
}

#[test]
fn test_text_form() {
    let mut board = Board::new();
    board.place(Pos::new(0, 0), Stone::Black).unwrap();
    board.place(Pos::new(14, 14), Stone::White).unwrap();

    let text = board.to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 15);
    assert_eq!(lines[0], "B..............");
    assert_eq!(lines[14], "..............W");

    let parsed: Board = text.parse().unwrap();
    assert_eq!(parsed, board);
}

#[test]
fn test_parse_spaced_rows() {
    let mut text = String::new();
    for row in 0..15 {
        if row == 7 {
            text.push_str(". . . . . . B W . . . . . . .\n");
        } else {
            text.push_str(". . . . . . . . . . . . . . .\n");
        }
    }
    let board: Board = text.parse().unwrap();
    assert_eq!(board.cell_at(Pos::new(7, 6)).unwrap(), Cell::Occupied(Stone::Black));
    assert_eq!(board.cell_at(Pos::new(7, 7)).unwrap(), Cell::Occupied(Stone::White));
    assert_eq!(board.stone_count(), 2);
}

#[test]
fn test_parse_errors() {
    let short_row = "....\n".repeat(15);
    assert!(matches!(
        short_row.parse::<Board>(),
        Err(RuleError::Parse { line: 1, .. })
    ));

    let bad_symbol = format!("{}..X............\n", "...............\n".repeat(2));
    assert!(matches!(
        bad_symbol.parse::<Board>(),
        Err(RuleError::Parse { line: 3, .. })
    ));

    let too_few = "...............\n".repeat(14);
    assert!(matches!(too_few.parse::<Board>(), Err(RuleError::Parse { .. })));
}
