//! Gomoku engine with minimax and alpha-beta search
//!
//! A five-in-a-row engine for a square board (15x15 by default):
//! - First unbroken run of the win length (5 by default) wins
//! - A full board with no such run is a draw
//! - Black moves first and is the maximizing side
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation and text form
//! - [`rules`]: Win detection and winning-line recovery
//! - [`eval`]: Static window-based evaluation
//! - [`search`]: Candidate generation, minimax and alpha-beta search
//! - [`engine`]: Entry points and the per-game AI engine
//! - [`config`]: TOML-backed game configuration
//! - [`ui`]: Turn controller and egui front end
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{AIEngine, Board, Stone, Pos};
//!
//! let mut board = Board::new();
//! let mut engine = AIEngine::new();
//!
//! board.place_stone(Pos::new(7, 7), Stone::Black);
//!
//! // AI responds as White
//! if let Some(pos) = engine.get_move(&board, Stone::White) {
//!     board.place(pos, Stone::White).unwrap();
//!     println!("AI plays at ({}, {})", pos.row, pos.col);
//! }
//! ```
//!
//! # Search
//!
//! Each call searches a fixed number of plies. Candidates are Empty cells at
//! most two steps from a stone along the eight compass rays, shuffled with a
//! seedable generator so equal-scored moves are picked at random. The caller's
//! board is never modified.

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone, BOARD_SIZE, WIN_LENGTH};
pub use config::{GameConfig, GameMode};
pub use engine::{best_move, is_full, legal_moves, AIEngine, MoveResult};
pub use error::{ConfigError, GameError};
pub use eval::evaluate;
pub use rules::{has_won, winning_line};
pub use search::{SearchResult, Searcher, Strategy};
