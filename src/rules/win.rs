//! Win condition checking
//!
//! A player wins with `win_length` consecutive stones along one of the four
//! line directions. Longer runs also win since they contain a full-length run.
//!
//! Cells are scanned in row-major order and, for each cell, directions in
//! [`DIRECTIONS`] order. `winning_line` reports the first run found in that
//! order, so the result is deterministic when several runs exist.

use crate::board::{Board, Pos, Stone, DIRECTIONS};

/// Cells of the run of `board.win_length()` starting at `start` along
/// `(dr, dc)`, if every one of them is on the board and holds `stone`.
fn run_from(board: &Board, start: Pos, (dr, dc): (i32, i32), stone: Stone) -> Option<Vec<Pos>> {
    let mut line = Vec::with_capacity(board.win_length());
    for i in 0..board.win_length() as i32 {
        match start.offset(dr, dc, i, board.size()) {
            Some(p) if board.get(p) == stone => line.push(p),
            _ => return None,
        }
    }
    Some(line)
}

/// Whether `stone` has a winning run anywhere on the board.
#[must_use]
pub fn has_won(board: &Board, stone: Stone) -> bool {
    if stone == Stone::Empty {
        return false;
    }
    board.occupied().any(|(pos, s)| {
        s == stone
            && DIRECTIONS
                .iter()
                .any(|&dir| run_from(board, pos, dir, stone).is_some())
    })
}

/// The first winning run for `stone` in scan order, start cell first.
#[must_use]
pub fn winning_line(board: &Board, stone: Stone) -> Option<Vec<Pos>> {
    if stone == Stone::Empty {
        return None;
    }
    board
        .occupied()
        .filter(|&(_, s)| s == stone)
        .find_map(|(pos, _)| {
            DIRECTIONS
                .iter()
                .find_map(|&dir| run_from(board, pos, dir, stone))
        })
}

/// The winning side, if any. Black is checked first.
#[must_use]
pub fn winner(board: &Board) -> Option<Stone> {
    [Stone::Black, Stone::White]
        .into_iter()
        .find(|&s| has_won(board, s))
}

/// Fast win check through a single cell.
///
/// Counts contiguous `stone`s through `pos` in both senses of each direction.
/// Equivalent to `has_won` when `pos` holds the only stone placed since the
/// last full check.
#[inline]
pub fn has_won_at(board: &Board, pos: Pos, stone: Stone) -> bool {
    let size = board.size();
    DIRECTIONS.iter().any(|&(dr, dc)| {
        let count_towards = |sign: i32| {
            (1..)
                .map_while(|i| pos.offset(dr * sign, dc * sign, i, size))
                .take_while(|&p| board.get(p) == stone)
                .count()
        };
        1 + count_towards(1) + count_towards(-1) >= board.win_length()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn swap_colors(board: &Board) -> Board {
        let mut swapped = Board::with_size(board.size(), board.win_length());
        for (pos, stone) in board.occupied() {
            swapped.place_stone(pos, stone.opponent());
        }
        swapped
    }

    #[test]
    fn test_five_in_row_horizontal() {
        let mut board = Board::new();
        for i in 0..5 {
            board.place_stone(Pos::new(7, i), Stone::Black);
        }
        assert!(has_won(&board, Stone::Black));
        assert!(!has_won(&board, Stone::White));
        assert_eq!(
            winning_line(&board, Stone::Black),
            Some(vec![
                Pos::new(7, 0),
                Pos::new(7, 1),
                Pos::new(7, 2),
                Pos::new(7, 3),
                Pos::new(7, 4),
            ])
        );
    }

    #[test]
    fn test_five_in_row_vertical() {
        let mut board = Board::new();
        for i in 0..5 {
            board.place_stone(Pos::new(i, 9), Stone::White);
        }
        assert!(has_won(&board, Stone::White));
        assert_eq!(winner(&board), Some(Stone::White));
    }

    #[test]
    fn test_five_in_row_diagonals() {
        let mut down = Board::new();
        for i in 0..5 {
            down.place_stone(Pos::new(i, i), Stone::Black);
        }
        assert!(has_won(&down, Stone::Black));

        let mut up = Board::new();
        for i in 0..5 {
            up.place_stone(Pos::new(10 - i, 2 + i), Stone::White);
        }
        assert!(has_won(&up, Stone::White));
        // Up-right runs are reported from their bottom-left cell
        assert_eq!(
            winning_line(&up, Stone::White).map(|l| l[0]),
            Some(Pos::new(10, 2))
        );
    }

    #[test]
    fn test_six_in_row_also_wins() {
        let mut board = Board::new();
        for i in 0..6 {
            board.place_stone(Pos::new(9, i), Stone::Black);
        }
        assert!(has_won(&board, Stone::Black));
        // First run in scan order starts at the leftmost stone
        assert_eq!(
            winning_line(&board, Stone::Black).map(|l| l[0]),
            Some(Pos::new(9, 0))
        );
    }

    #[test]
    fn test_four_in_row_not_win() {
        let mut board = Board::new();
        for i in 0..4 {
            board.place_stone(Pos::new(9, i), Stone::Black);
        }
        assert!(!has_won(&board, Stone::Black));
        assert_eq!(winning_line(&board, Stone::Black), None);
    }

    #[test]
    fn test_run_broken_by_edge_does_not_win() {
        let mut board = Board::new();
        for i in 12..15 {
            board.place_stone(Pos::new(0, i), Stone::Black);
        }
        for i in 0..2 {
            board.place_stone(Pos::new(1, i), Stone::Black);
        }
        assert!(!has_won(&board, Stone::Black));
    }

    #[test]
    fn test_winning_line_prefers_scan_order() {
        // Vertical run starting at (2,3) and horizontal run starting at (4,0):
        // (2,3) comes first in row-major order.
        let mut board = Board::new();
        for i in 0..5 {
            board.place_stone(Pos::new(4, i), Stone::Black);
        }
        for r in [2, 3, 5, 6] {
            board.place_stone(Pos::new(r, 3), Stone::Black);
        }
        let line = winning_line(&board, Stone::Black).unwrap();
        assert_eq!(line.first(), Some(&Pos::new(2, 3)));
        assert_eq!(line.last(), Some(&Pos::new(6, 3)));
    }

    #[test]
    fn test_horizontal_before_vertical_from_same_cell() {
        let mut board = Board::new();
        for i in 0..5 {
            board.place_stone(Pos::new(0, i), Stone::White);
        }
        for i in 1..5 {
            board.place_stone(Pos::new(i, 0), Stone::White);
        }
        let line = winning_line(&board, Stone::White).unwrap();
        assert_eq!(line[1], Pos::new(0, 1));
    }

    #[test]
    fn test_win_symmetric_under_color_swap() {
        let boards = [
            "B B B . .\nW W W . .\n. . . . .\n. . . . .\n. . . . .",
            "B . . . .\n. B . W .\n. . B W .\n. . . W .\n. . . . .",
            "W B W B W\nB W B W B\nW B W B W\nB W B W B\nW B W B W",
        ];
        for text in boards {
            let board: Board = text.parse::<Board>().unwrap().with_win_length(3);
            let swapped = swap_colors(&board);
            for stone in [Stone::Black, Stone::White] {
                assert_eq!(has_won(&board, stone), has_won(&swapped, stone.opponent()));
            }
        }
    }

    #[test]
    fn test_has_won_at_matches_full_scan() {
        let mut board = Board::new();
        for i in [3, 4, 6, 7] {
            board.place_stone(Pos::new(5, i), Stone::Black);
        }
        let gap = Pos::new(5, 5);
        assert!(!has_won_at(&board, Pos::new(5, 4), Stone::Black));
        board.place_stone(gap, Stone::Black);
        assert!(has_won_at(&board, gap, Stone::Black));
        assert!(has_won(&board, Stone::Black));
    }

    #[test]
    fn test_empty_never_wins() {
        let board = Board::new();
        assert!(!has_won(&board, Stone::Empty));
        assert_eq!(winning_line(&board, Stone::Empty), None);
        assert_eq!(winner(&board), None);
    }
}
