//! Heuristic evaluation function for Gomoku board positions
//!
//! Every cell starts one window per direction. Windows reaching past the edge
//! are still counted, their off-board cells simply hold no stone. A stone
//! therefore takes part in up to `win_length` windows per direction, and the
//! sum is left unnormalized: stones central to many open lines score more.

use crate::board::{Board, Stone, DIRECTIONS};
use crate::rules::has_won;

use super::patterns::{window_weight, PatternScore};

/// Evaluate the board from Black's perspective.
///
/// Returns `PatternScore::WIN` if Black has a winning run, `-PatternScore::WIN`
/// if White has one, and otherwise `score(Black) - score(White)`.
#[must_use]
pub fn evaluate(board: &Board) -> i64 {
    if has_won(board, Stone::Black) {
        return PatternScore::WIN;
    }
    if has_won(board, Stone::White) {
        return -PatternScore::WIN;
    }
    score(board, Stone::Black) - score(board, Stone::White)
}

/// Window score for one side.
///
/// For each window: no opponent stone adds `10^own` (so an empty window adds
/// 1), no own stone subtracts `10^opp`, mixed windows are dead and add nothing.
#[must_use]
pub fn score(board: &Board, color: Stone) -> i64 {
    let opponent = color.opponent();
    let size = board.size() as i32;
    let len = board.win_length() as i32;

    let mut total = 0;
    for r in 0..size {
        for c in 0..size {
            for &(dr, dc) in &DIRECTIONS {
                let mut own = 0;
                let mut opp = 0;
                for i in 0..len {
                    match board.at(r + dr * i, c + dc * i) {
                        Some(s) if s == color => own += 1,
                        Some(s) if s == opponent => opp += 1,
                        _ => {}
                    }
                }
                if opp == 0 {
                    total += window_weight(own);
                } else if own == 0 {
                    total -= window_weight(opp);
                }
            }
        }
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Pos;

    #[test]
    fn test_empty_board_counts_every_window_once() {
        // Both counts are zero in every window, which lands in the
        // "no opponent" branch: +10^0 for each of the 15 * 15 * 4 windows.
        let board = Board::new();
        assert_eq!(score(&board, Stone::Black), 900);
        assert_eq!(score(&board, Stone::White), 900);
        assert_eq!(evaluate(&board), 0);
    }

    #[test]
    fn test_single_center_stone() {
        // (7,7) lies in 5 windows per direction, all starting on the board
        let mut board = Board::new();
        board.place_stone(Pos::new(7, 7), Stone::Black);

        assert_eq!(score(&board, Stone::Black), 900 - 20 + 20 * 10);
        assert_eq!(score(&board, Stone::White), 900 - 20 - 20 * 10);
        assert_eq!(evaluate(&board), 400);
    }

    #[test]
    fn test_corner_stone_has_no_wraparound() {
        // Only windows starting at (0,0) itself can contain the corner
        let mut board = Board::new();
        board.place_stone(Pos::new(0, 0), Stone::White);

        assert_eq!(score(&board, Stone::White), 900 - 4 + 4 * 10);
        assert_eq!(score(&board, Stone::Black), 900 - 4 - 4 * 10);
        assert_eq!(evaluate(&board), -80);
    }

    #[test]
    fn test_dead_windows_score_nothing() {
        let mut board = Board::with_size(2, 2);
        board.place_stone(Pos::new(0, 0), Stone::Black);
        board.place_stone(Pos::new(0, 1), Stone::White);

        // Windows by start cell, directions h v d u:
        // (0,0): dead B B B    (0,1): W W W W
        // (1,0): . . . W       (1,1): . . . .
        assert_eq!(score(&board, Stone::Black), 3 * 10 - 5 * 10 + 7);
        assert_eq!(score(&board, Stone::White), 5 * 10 - 3 * 10 + 7);
        assert_eq!(evaluate(&board), -40);
    }

    #[test]
    fn test_longer_runs_dominate() {
        let mut three = Board::new();
        let mut two_pairs = Board::new();
        for i in 5..8 {
            three.place_stone(Pos::new(7, i), Stone::Black);
        }
        two_pairs.place_stone(Pos::new(2, 2), Stone::Black);
        two_pairs.place_stone(Pos::new(2, 3), Stone::Black);
        two_pairs.place_stone(Pos::new(11, 11), Stone::Black);
        assert!(evaluate(&three) > evaluate(&two_pairs));
    }

    #[test]
    fn test_win_sentinel() {
        let mut board = Board::new();
        for i in 0..5 {
            board.place_stone(Pos::new(7, i), Stone::Black);
        }
        assert_eq!(evaluate(&board), PatternScore::WIN);
        assert_eq!(evaluate(&board), 100_000);

        let mut board = Board::new();
        for i in 0..5 {
            board.place_stone(Pos::new(i, 4), Stone::White);
        }
        assert_eq!(evaluate(&board), -100_000);
    }

    #[test]
    fn test_win_outscores_open_run_at_longest_win_length() {
        use crate::config::MAX_WIN_LENGTH;

        for size in [MAX_WIN_LENGTH + 2, 15, crate::board::MAX_BOARD_SIZE] {
            let mid = (size / 2) as u8;
            let start = mid - 2;
            let mut open = Board::with_size(size, MAX_WIN_LENGTH);
            for i in 0..MAX_WIN_LENGTH as u8 - 1 {
                open.place_stone(Pos::new(mid, start + i), Stone::Black);
            }
            let mut won = open.clone();
            won.place_stone(Pos::new(mid, start + MAX_WIN_LENGTH as u8 - 1), Stone::Black);

            assert!(has_won(&won, Stone::Black));
            assert!(evaluate(&won) > evaluate(&open), "size {size}");
        }
    }

    #[test]
    fn test_evaluation_is_antisymmetric() {
        let board: Board = "\
            .....\n\
            .BW..\n\
            ..B..\n\
            .W...\n\
            .....\n"
            .parse()
            .unwrap();
        let mut swapped = Board::with_size(board.size(), board.win_length());
        for (pos, stone) in board.occupied() {
            swapped.place_stone(pos, stone.opponent());
        }
        assert_eq!(evaluate(&board), -evaluate(&swapped));
    }
}
