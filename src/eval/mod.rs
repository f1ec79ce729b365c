//! Evaluation module for Gomoku positions
//!
//! Static scoring of a position from Black's point of view: wins are
//! reported as a fixed sentinel, everything else is the difference of the two
//! sides' window scores.

pub mod heuristic;
pub mod patterns;

pub use heuristic::{evaluate, score};
pub use patterns::{window_weight, PatternScore};
