//! Engine entry points
//!
//! The free functions here are the whole surface a front end needs: pick a
//! move, test for a win or a full board, recover the winning line, and list
//! plausible moves. [`AIEngine`] wraps them for a game in progress, mapping the
//! side to move onto the maximizing flag and the strategy configured for it.
//!
//! # Example
//!
//! ```
//! use gomoku::{best_move, Board, Pos, Stone, Strategy};
//!
//! let mut board = Board::new();
//! board.place(Pos::new(7, 7), Stone::Black).unwrap();
//!
//! // White to move: White is the minimizing side
//! let result = best_move(&board, 1, false, Strategy::AlphaBeta);
//! assert!(result.best_move.is_some());
//! ```

use std::collections::BTreeSet;
use std::time::Instant;

use crate::board::{Board, Pos, Stone};
use crate::config::GameConfig;
use crate::search::{candidate_moves, SearchResult, Searcher, Strategy};

/// Best move for the side given by `maximizing` (Black when true).
///
/// Uses a freshly seeded shuffle; use [`Searcher::with_seed`] for
/// reproducible results.
pub fn best_move(board: &Board, depth: u8, maximizing: bool, strategy: Strategy) -> SearchResult {
    Searcher::new().search(board, depth, maximizing, strategy)
}

/// True iff no Empty cell remains
#[inline]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// Plausible moves: Empty cells near existing stones, or every cell of an
/// empty board.
///
/// A human move only needs to land on an Empty cell; it does not have to be
/// in this set.
pub fn legal_moves(board: &Board) -> BTreeSet<Pos> {
    candidate_moves(board).into_iter().collect()
}

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Best move found, if any
    pub best_move: Option<Pos>,
    /// Minimax score of the position, from Black's perspective
    pub score: i64,
    /// Strategy that produced the move
    pub strategy: Strategy,
    /// Depth searched
    pub depth: u8,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

impl MoveResult {
    fn from_search(result: SearchResult, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            strategy: result.strategy,
            depth: result.depth,
            time_ms,
            nodes: result.stats.nodes,
        }
    }
}

/// Main AI Engine for Gomoku.
///
/// Owns a [`Searcher`] so that a seeded engine plays a reproducible sequence
/// of moves over a whole game.
///
/// # Example
///
/// ```
/// use gomoku::{AIEngine, Board, Stone, Pos};
///
/// let mut engine = AIEngine::new();
/// let mut board = Board::new();
/// board.place_stone(Pos::new(7, 7), Stone::Black);
///
/// if let Some(best_move) = engine.get_move(&board, Stone::White) {
///     println!("Play at ({}, {})", best_move.row, best_move.col);
/// }
/// ```
pub struct AIEngine {
    searcher: Searcher,
    depth: u8,
    black_strategy: Strategy,
    white_strategy: Strategy,
}

impl AIEngine {
    /// Engine with default settings: depth 2, Minimax for Black and
    /// AlphaBeta for White.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&GameConfig::default())
    }

    /// Engine following a game configuration
    #[must_use]
    pub fn with_config(config: &GameConfig) -> Self {
        let searcher = match config.seed {
            Some(seed) => Searcher::with_seed(seed),
            None => Searcher::new(),
        };
        Self {
            searcher,
            depth: config.depth,
            black_strategy: config.black_strategy,
            white_strategy: config.white_strategy,
        }
    }

    /// Search depth in plies
    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// Strategy used when moving for `color`
    pub fn strategy_for(&self, color: Stone) -> Strategy {
        match color {
            Stone::White => self.white_strategy,
            _ => self.black_strategy,
        }
    }

    /// Get the best move for the given position.
    ///
    /// Returns `None` when the position is terminal (full board or already won).
    pub fn get_move(&mut self, board: &Board, color: Stone) -> Option<Pos> {
        self.get_move_with_stats(board, color).best_move
    }

    /// Get the best move with search statistics.
    pub fn get_move_with_stats(&mut self, board: &Board, color: Stone) -> MoveResult {
        let start = Instant::now();
        let strategy = self.strategy_for(color);
        let result = self
            .searcher
            .search(board, self.depth, color.is_maximizing(), strategy);
        let time_ms = start.elapsed().as_millis() as u64;

        tracing::info!(
            color = color.name(),
            %strategy,
            depth = self.depth,
            best = ?result.best_move,
            score = result.score,
            nodes = result.stats.nodes,
            time_ms,
            "engine move"
        );
        MoveResult::from_search(result, time_ms)
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::{evaluate, PatternScore};
    use crate::rules::{has_won, winning_line};

    #[test]
    fn test_engine_creation() {
        let engine = AIEngine::new();
        assert_eq!(engine.depth(), 2);
        assert_eq!(engine.strategy_for(Stone::Black), Strategy::Minimax);
        assert_eq!(engine.strategy_for(Stone::White), Strategy::AlphaBeta);
    }

    #[test]
    fn test_engine_with_config() {
        let config = GameConfig {
            depth: 3,
            black_strategy: Strategy::AlphaBeta,
            seed: Some(99),
            ..GameConfig::default()
        };
        let engine = AIEngine::with_config(&config);
        assert_eq!(engine.depth(), 3);
        assert_eq!(engine.strategy_for(Stone::Black), Strategy::AlphaBeta);
    }

    #[test]
    fn test_seeded_engines_agree() {
        let config = GameConfig {
            seed: Some(2024),
            ..GameConfig::default()
        };
        let mut board = Board::new();
        board.place_stone(Pos::new(7, 7), Stone::Black);

        let a = AIEngine::with_config(&config).get_move(&board, Stone::White);
        let b = AIEngine::with_config(&config).get_move(&board, Stone::White);
        assert!(a.is_some());
        assert_eq!(a, b);
    }

    #[test]
    fn test_engine_finds_immediate_win() {
        let mut board = Board::new();
        for i in 0..4 {
            board.place_stone(Pos::new(9, i), Stone::White);
        }
        board.place_stone(Pos::new(10, 0), Stone::Black);
        board.place_stone(Pos::new(10, 1), Stone::Black);
        board.place_stone(Pos::new(11, 2), Stone::Black);

        let mut engine = AIEngine::new();
        let result = engine.get_move_with_stats(&board, Stone::White);
        assert_eq!(result.best_move, Some(Pos::new(9, 4)));
        assert_eq!(result.score, -PatternScore::WIN);
        assert_eq!(result.strategy, Strategy::AlphaBeta);
    }

    #[test]
    fn test_winning_row_properties() {
        let mut board = Board::new();
        for i in 0..5 {
            board.place(Pos::new(7, i), Stone::Black).unwrap();
        }
        assert!(has_won(&board, Stone::Black));
        assert_eq!(
            winning_line(&board, Stone::Black),
            Some((0..5).map(|i| Pos::new(7, i)).collect())
        );
        assert_eq!(evaluate(&board), 100_000);

        // Terminal root: no move, static score
        let result = best_move(&board, 2, false, Strategy::Minimax);
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, 100_000);
    }

    #[test]
    fn test_full_board_has_no_move() {
        // Stripes of two: no five anywhere on a 15x15 board
        let mut board = Board::new();
        for pos in board.positions().collect::<Vec<_>>() {
            let band = (pos.col as usize / 2 + pos.row as usize) % 2;
            let stone = if band == 0 { Stone::Black } else { Stone::White };
            board.place(pos, stone).unwrap();
        }
        assert!(is_full(&board));
        assert!(!has_won(&board, Stone::Black));
        assert!(!has_won(&board, Stone::White));

        for depth in [1, 2, 4] {
            for strategy in [Strategy::Minimax, Strategy::AlphaBeta] {
                let result = best_move(&board, depth, true, strategy);
                assert_eq!(result.best_move, None);
                assert_eq!(result.score, evaluate(&board));
            }
        }
        assert!(legal_moves(&board).is_empty());
    }

    #[test]
    fn test_legal_moves_counts() {
        let mut board = Board::new();
        assert_eq!(legal_moves(&board).len(), 225);

        board.place_stone(Pos::new(7, 7), Stone::Black);
        assert_eq!(legal_moves(&board).len(), 16);

        let mut edge = Board::new();
        edge.place_stone(Pos::new(0, 7), Stone::White);
        assert!(legal_moves(&edge).len() < 16);
    }
}
