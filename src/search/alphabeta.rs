//! Minimax with alpha-beta pruning
//!
//! Same terminal test, candidates and shuffle as plain minimax. `alpha` is the
//! score Black is already guaranteed, `beta` the score White is already
//! guaranteed. Once `beta <= alpha` the remaining siblings cannot change the
//! result and are skipped. Called with the full window the root score equals
//! the minimax score; the chosen move may differ among equal-scored moves.

use crate::board::{Board, Pos, Stone};

use super::Searcher;

impl Searcher {
    /// Alpha-beta value of `board` inside the `(alpha, beta)` window.
    ///
    /// `board` is mutated during the call and restored before returning.
    pub(super) fn alphabeta(
        &mut self,
        board: &mut Board,
        depth: u8,
        mut alpha: i64,
        mut beta: i64,
        maximizing: bool,
        last: Option<Pos>,
    ) -> (i64, Option<Pos>) {
        self.stats.nodes += 1;
        if Self::is_terminal(board, depth, last) {
            return self.leaf(board);
        }

        let color = Stone::from_maximizing(maximizing);
        let mut best_score = if maximizing { i64::MIN } else { i64::MAX };
        let mut best_move = None;

        for mov in self.ordered_moves(board) {
            board.place_stone(mov, color);
            let (score, _) = self.alphabeta(board, depth - 1, alpha, beta, !maximizing, Some(mov));
            board.remove_stone(mov);

            if maximizing {
                if score > best_score {
                    best_score = score;
                    best_move = Some(mov);
                }
                alpha = alpha.max(score);
            } else {
                if score < best_score {
                    best_score = score;
                    best_move = Some(mov);
                }
                beta = beta.min(score);
            }

            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        (best_score, best_move)
    }
}

#[cfg(test)]
mod tests {
    use crate::board::{Board, Pos, Stone};
    use crate::search::{Searcher, Strategy};

    #[test]
    fn test_prunes_on_larger_tree() {
        let mut board = Board::with_size(5, 3);
        board.place_stone(Pos::new(2, 2), Stone::Black);
        board.place_stone(Pos::new(1, 2), Stone::White);

        let mm = Searcher::with_seed(8).search(&board, 3, true, Strategy::Minimax);
        let ab = Searcher::with_seed(8).search(&board, 3, true, Strategy::AlphaBeta);

        assert_eq!(ab.score, mm.score);
        assert!(ab.stats.cutoffs > 0);
        assert!(ab.stats.nodes < mm.stats.nodes);
    }

    #[test]
    fn test_best_move_achieves_score() {
        let mut board = Board::with_size(6, 4);
        board.place_stone(Pos::new(2, 2), Stone::Black);
        board.place_stone(Pos::new(3, 3), Stone::White);
        board.place_stone(Pos::new(2, 3), Stone::Black);

        let result = Searcher::with_seed(12).search(&board, 2, false, Strategy::AlphaBeta);
        let mov = result.best_move.unwrap();

        // Replaying the chosen move and searching one ply less from Black's
        // side reproduces the root score.
        let mut child = board.clone();
        child.place_stone(mov, Stone::White);
        let reply = Searcher::with_seed(12).search(&child, 1, true, Strategy::Minimax);
        assert_eq!(reply.score, result.score);
    }
}
