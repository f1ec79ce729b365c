use super::*;
use crate::error::{BoardParseError, GameError};

#[test]
fn test_stone_opponent() {
    assert_eq!(Stone::Black.opponent(), Stone::White);
    assert_eq!(Stone::White.opponent(), Stone::Black);
    assert_eq!(Stone::Empty.opponent(), Stone::Empty);
}

#[test]
fn test_stone_maximizing() {
    assert!(Stone::Black.is_maximizing());
    assert!(!Stone::White.is_maximizing());
    assert_eq!(Stone::from_maximizing(true), Stone::Black);
    assert_eq!(Stone::from_maximizing(false), Stone::White);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(7, 7); // Center
    assert_eq!(pos.to_index(BOARD_SIZE), 7 * 15 + 7);

    let pos2 = Pos::from_index(112, BOARD_SIZE);
    assert_eq!(pos2, Pos::new(7, 7));
}

#[test]
fn test_pos_checked() {
    assert_eq!(Pos::checked(0, 0, 15), Some(Pos::new(0, 0)));
    assert_eq!(Pos::checked(14, 14, 15), Some(Pos::new(14, 14)));
    assert_eq!(Pos::checked(-1, 0, 15), None);
    assert_eq!(Pos::checked(0, -1, 15), None);
    assert_eq!(Pos::checked(15, 0, 15), None);
    assert_eq!(Pos::checked(0, 15, 15), None);
}

#[test]
fn test_pos_ordering() {
    let pos1 = Pos::new(0, 0);
    let pos2 = Pos::new(0, 1);
    let pos3 = Pos::new(1, 0);

    assert!(pos1 < pos2);
    assert!(pos2 < pos3);
    assert!(pos1 < pos3);
}

#[test]
fn test_new_board_is_empty() {
    let board = Board::new();
    assert_eq!(board.size(), 15);
    assert_eq!(board.win_length(), 5);
    assert!(board.is_board_empty());
    assert!(!board.is_full());
    assert_eq!(board.empty_cells().count(), 225);
}

#[test]
fn test_place_and_remove() {
    let mut board = Board::new();
    let pos = Pos::new(3, 4);
    board.place(pos, Stone::Black).unwrap();
    assert_eq!(board.get(pos), Stone::Black);
    assert_eq!(board.stone_count(), 1);

    board.remove_stone(pos);
    assert!(board.is_empty(pos));
    assert_eq!(board.stone_count(), 0);
}

#[test]
fn test_place_on_occupied_is_illegal() {
    let mut board = Board::new();
    let pos = Pos::new(7, 7);
    board.place(pos, Stone::Black).unwrap();
    assert_eq!(
        board.place(pos, Stone::White),
        Err(GameError::IllegalMove { row: 7, col: 7 })
    );
    assert_eq!(board.get(pos), Stone::Black);
}

#[test]
fn test_place_empty_stone_is_rejected() {
    let mut board = Board::new();
    let pos = Pos::new(3, 4);
    assert_eq!(board.place(pos, Stone::Empty), Err(GameError::EmptyStone));
    assert!(board.is_board_empty());
    assert_eq!(board.stone_count(), 0);
}

#[test]
fn test_place_out_of_bounds() {
    let mut board = Board::with_size(5, 3);
    assert_eq!(
        board.place(Pos::new(5, 0), Stone::Black),
        Err(GameError::OutOfBounds { row: 5, col: 0 })
    );
}

#[test]
fn test_is_full() {
    let mut board = Board::with_size(3, 3);
    for (i, pos) in board.positions().collect::<Vec<_>>().into_iter().enumerate() {
        assert!(!board.is_full());
        let stone = if i % 2 == 0 { Stone::Black } else { Stone::White };
        board.place(pos, stone).unwrap();
    }
    assert!(board.is_full());
}

#[test]
fn test_text_round_trip() {
    let text = "B..\n.W.\n..B\n";
    let board: Board = text.parse().unwrap();
    assert_eq!(board.size(), 3);
    assert_eq!(board.win_length(), 3);
    assert_eq!(board.get(Pos::new(1, 1)), Stone::White);
    assert_eq!(board.stone_count(), 3);
    assert_eq!(board.to_string(), text);
}

#[test]
fn test_parse_rejects_bad_input() {
    assert_eq!("".parse::<Board>(), Err(BoardParseError::Empty));
    assert_eq!(
        "B..\n..\n...".parse::<Board>(),
        Err(BoardParseError::RaggedRow {
            row: 1,
            found: 2,
            expected: 3
        })
    );
    assert_eq!(
        "B.?\n...\n...".parse::<Board>(),
        Err(BoardParseError::BadCell {
            ch: '?',
            row: 0,
            col: 2
        })
    );
}
