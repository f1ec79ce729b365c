//! Board representation for Gomoku

pub mod board;

#[cfg(test)]
mod tests;

// Re-exports
pub use board::Board;

/// Default board size (15x15)
pub const BOARD_SIZE: usize = 15;
/// Default run length needed to win
pub const WIN_LENGTH: usize = 5;
/// Largest supported board edge
pub const MAX_BOARD_SIZE: usize = 32;

/// Line directions in scan order: horizontal, vertical, diagonal down-right,
/// diagonal up-right. The order decides which run `winning_line` reports first.
pub const DIRECTIONS: [(i32, i32); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

/// Stone colors
///
/// Black moves first and is the maximizing side of the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stone {
    Empty,
    Black,
    White,
}

impl Stone {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
            Stone::Empty => Stone::Empty,
        }
    }

    /// Whether this side maximizes the evaluation
    #[inline]
    pub fn is_maximizing(self) -> bool {
        self == Stone::Black
    }

    /// The side that moves with the given maximizing flag
    #[inline]
    pub fn from_maximizing(maximizing: bool) -> Stone {
        if maximizing {
            Stone::Black
        } else {
            Stone::White
        }
    }

    /// Text symbol used by the board's `Display`/`FromStr`
    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Stone::Empty => '.',
            Stone::Black => 'B',
            Stone::White => 'W',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Stone::Empty => "Empty",
            Stone::Black => "Black",
            Stone::White => "White",
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!((row as usize) < MAX_BOARD_SIZE && (col as usize) < MAX_BOARD_SIZE);
        Self { row, col }
    }

    /// Build a position from signed coordinates, if they fall on a `size` board
    #[inline]
    pub fn checked(row: i32, col: i32, size: usize) -> Option<Self> {
        if row >= 0 && col >= 0 && (row as usize) < size && (col as usize) < size {
            Some(Self::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Step `dist` cells along direction `(dr, dc)`, staying on a `size` board
    #[inline]
    pub fn offset(self, dr: i32, dc: i32, dist: i32, size: usize) -> Option<Self> {
        Self::checked(self.row as i32 + dr * dist, self.col as i32 + dc * dist, size)
    }

    #[inline]
    pub fn to_index(self, size: usize) -> usize {
        self.row as usize * size + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize, size: usize) -> Self {
        Self {
            row: (idx / size) as u8,
            col: (idx % size) as u8,
        }
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.row, self.col).cmp(&(other.row, other.col))
    }
}
