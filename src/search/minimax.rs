//! Plain depth-limited minimax
//!
//! Every candidate of every node is explored. Ties keep the earlier move in
//! shuffled order because only a strict improvement replaces the best.

use crate::board::{Board, Pos, Stone};

use super::Searcher;

impl Searcher {
    /// Minimax value of `board` and the move achieving it.
    ///
    /// `board` is mutated during the call and restored before returning.
    pub(super) fn minimax(
        &mut self,
        board: &mut Board,
        depth: u8,
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
            let (score, _) = self.minimax(board, depth - 1, !maximizing, Some(mov));
            board.remove_stone(mov);

            let improves = if maximizing {
                score > best_score
            } else {
                score < best_score
            };
            if improves {
                best_score = score;
                best_move = Some(mov);
            }
        }

        (best_score, best_move)
    }
}
