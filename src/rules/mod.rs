//! Game rules for Gomoku
//!
//! Free-style rules: the first player with an unbroken run of the board's win
//! length in any of the four line directions wins. A full board with no such
//! run is a draw.

pub mod win;

// Re-exports for convenient access
pub use win::{has_won, has_won_at, winner, winning_line};
