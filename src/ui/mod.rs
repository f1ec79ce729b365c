//! Front ends for the Gomoku game
//!
//! [`GameState`] is the turn controller shared by the egui window and the
//! headless runner.

mod app;
mod board_view;
mod game_state;
mod theme;

pub use app::GomokuApp;
pub use game_state::{AiState, GameOutcome, GameState};
