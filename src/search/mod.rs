//! Search module for Gomoku AI
//!
//! Contains:
//! - Candidate move generation with proximity filtering
//! - Plain minimax
//! - Minimax with alpha-beta pruning
//!
//! Both strategies share the terminal test, candidate generation and a
//! seedable shuffle of the candidate order. Black always maximizes, White
//! always minimizes. The recursion runs on one private working board with
//! place/undo, so the caller's board is never modified.

pub mod alphabeta;
pub mod minimax;
pub mod movegen;

use std::fmt;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::board::{Board, Pos};
use crate::eval::evaluate;
use crate::rules::{has_won_at, winner};

pub use movegen::candidate_moves;

/// Which tree search to run
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Full minimax over every candidate
    #[default]
    Minimax,
    /// Minimax with alpha-beta cutoffs
    #[serde(alias = "alpha-beta", alias = "alpha_beta")]
    #[value(name = "alphabeta", alias = "alpha-beta")]
    AlphaBeta,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Minimax => write!(f, "Minimax"),
            Strategy::AlphaBeta => write!(f, "AlphaBeta"),
        }
    }
}

/// Search statistics for diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes visited, root included
    pub nodes: u64,
    /// Nodes answered by the static evaluator
    pub leaves: u64,
    /// Alpha-beta cutoffs (always 0 for minimax)
    pub cutoffs: u64,
}

/// Search result: score of the position and the move achieving it.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move found; `None` only at a terminal root
    pub best_move: Option<Pos>,
    /// Minimax value of the root position
    pub score: i64,
    /// Depth searched
    pub depth: u8,
    /// Strategy that produced the result
    pub strategy: Strategy,
    /// Search diagnostics
    pub stats: SearchStats,
}

/// Depth-limited game tree searcher.
///
/// Holds the random source used to shuffle candidate moves. Fixing the seed
/// makes every search from the same state reproducible.
pub struct Searcher {
    rng: StdRng,
    stats: SearchStats,
}

impl Searcher {
    /// Searcher seeded from OS entropy
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            stats: SearchStats::default(),
        }
    }

    /// Searcher with a fixed shuffle seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            stats: SearchStats::default(),
        }
    }

    /// Search `depth` plies from `board` with the given side to move.
    ///
    /// Returns `(evaluate(board), None)` when the root is terminal: depth 0,
    /// a full board, or a win for either side.
    pub fn search(
        &mut self,
        board: &Board,
        depth: u8,
        maximizing: bool,
        strategy: Strategy,
    ) -> SearchResult {
        let start = Instant::now();
        self.stats = SearchStats::default();

        let mut work_board = board.clone();
        let (score, best_move) = match strategy {
            Strategy::Minimax => self.minimax(&mut work_board, depth, maximizing, None),
            Strategy::AlphaBeta => {
                self.alphabeta(&mut work_board, depth, i64::MIN, i64::MAX, maximizing, None)
            }
        };
        debug_assert_eq!(&work_board, board, "search must restore the working board");

        tracing::debug!(
            %strategy,
            depth,
            maximizing,
            nodes = self.stats.nodes,
            leaves = self.stats.leaves,
            cutoffs = self.stats.cutoffs,
            elapsed_ms = start.elapsed().as_millis() as u64,
            best = ?best_move,
            score,
            "search finished"
        );

        SearchResult {
            best_move,
            score,
            depth,
            strategy,
            stats: self.stats,
        }
    }

    /// Terminal test shared by both strategies.
    ///
    /// `last` is the move that produced this node. A non-terminal parent had
    /// no winner, so only runs through `last` need checking. The root passes
    /// `None` and gets a full scan.
    fn is_terminal(board: &Board, depth: u8, last: Option<Pos>) -> bool {
        if depth == 0 || board.is_full() {
            return true;
        }
        match last {
            Some(pos) => has_won_at(board, pos, board.get(pos)),
            None => winner(board).is_some(),
        }
    }

    /// Static value of a terminal node
    fn leaf(&mut self, board: &Board) -> (i64, Option<Pos>) {
        self.stats.leaves += 1;
        (evaluate(board), None)
    }

    /// Candidates in shuffled order
    fn ordered_moves(&mut self, board: &Board) -> Vec<Pos> {
        let mut moves = candidate_moves(board);
        moves.shuffle(&mut self.rng);
        moves
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new()
    }
}
