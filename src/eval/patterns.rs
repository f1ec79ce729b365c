//! Scoring weights for Gomoku evaluation
//!
//! A window is any `win_length` span of cells along one direction. Windows
//! that only hold one side's stones are worth `10^count` to that side, so each
//! extra stone in an unblocked line multiplies its value by ten.

/// Score constants for evaluation
pub struct PatternScore;

impl PatternScore {
    /// A completed run. Returned as is, never summed with window weights.
    pub const WIN: i64 = 100_000;
    /// Base of the exponential window weight
    pub const WINDOW_BASE: i64 = 10;
}

/// Weight of a window holding `count` stones of one side and none of the other.
#[inline]
pub fn window_weight(count: usize) -> i64 {
    PatternScore::WINDOW_BASE.pow(count as u32)
}
