//! Tests for board queries and terminal-state judgment.

use strictly_minimax::{
    Board, BoardError, Cell, Mark, Outcome, Position,
    rules::{LINES, evaluate},
};

#[test]
fn test_single_line_wins_for_its_mark() {
    for (mark, other) in [(Mark::X, Mark::O), (Mark::O, Mark::X)] {
        for line in LINES {
            let mut board = Board::new();
            for pos in line {
                board.place(pos.to_index(), mark).unwrap();
            }
            // One stray opposing mark off the line.
            let stray = Position::ALL
                .into_iter()
                .find(|p| !line.contains(p))
                .unwrap();
            board.place(stray.to_index(), other).unwrap();
            assert_eq!(evaluate(&board), Outcome::Win(mark));
        }
    }
}

#[test]
fn test_full_boards_without_lines_are_draws() {
    for s in ["XOX OXX OXO", "XXO OOX XOX", "OXO XXO XOX"] {
        let board: Board = s.parse().unwrap();
        assert!(board.is_full());
        assert_eq!(evaluate(&board), Outcome::Draw, "{}", s);
    }
}

#[test]
fn test_open_boards_without_lines_are_ongoing() {
    for s in ["...  ... ...", "X.. ... ...", "XOX OXX OX.", "XX. OO. ..."] {
        let board: Board = s.parse().unwrap();
        assert_eq!(evaluate(&board), Outcome::Ongoing, "{}", s);
    }
}

#[test]
fn test_is_empty_cell_bounds() {
    let board = Board::new();
    assert!((0..9).all(|i| board.is_empty_cell(i)));
    assert!(!board.is_empty_cell(9));
    assert!(!board.is_empty_cell(usize::MAX));
}

#[test]
fn test_place_errors() {
    let mut board = Board::new();
    board.place(8, Mark::O).unwrap();
    assert_eq!(
        board.place(8, Mark::X),
        Err(BoardError::OccupiedCell(Position::BottomRight))
    );
    assert_eq!(board.place(10, Mark::X), Err(BoardError::InvalidIndex(10)));
    assert_eq!(board.get(8), Ok(Cell::Occupied(Mark::O)));
    assert_eq!(board.occupied_count(), 1);
}

#[test]
fn test_error_messages() {
    assert_eq!(
        BoardError::InvalidIndex(12).to_string(),
        "Index 12 is out of bounds (must be 0-8)"
    );
    assert!(
        BoardError::OccupiedCell(Position::Center)
            .to_string()
            .contains("occupied")
    );
}

#[test]
fn test_board_serializes() {
    let board: Board = "X.. .O. ...".parse().unwrap();
    let json = serde_json::to_string(&board).unwrap();
    let back: Board = serde_json::from_str(&json).unwrap();
    assert_eq!(back, board);
}
