//! Board structure with occupancy tracking

use std::fmt;
use std::str::FromStr;

use super::{Pos, Stone, BOARD_SIZE, MAX_BOARD_SIZE, WIN_LENGTH};
use crate::error::{BoardParseError, GameError};

/// Square game board.
///
/// Cells go from Empty to occupied once during play. The search mutates a
/// private working copy with `place_stone`/`remove_stone` pairs and never
/// touches the caller's board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    win_length: usize,
    cells: Vec<Stone>,
    /// Number of occupied cells, kept in step with `cells`
    stones: usize,
}

impl Board {
    /// Empty 15x15 board with five-in-a-row
    pub fn new() -> Self {
        Self::with_size(BOARD_SIZE, WIN_LENGTH)
    }

    /// Empty board of the given edge and winning run length.
    ///
    /// # Panics
    ///
    /// Panics if `size` is 0 or above [`MAX_BOARD_SIZE`], or if `win_length` is 0.
    /// Configuration validation rejects these values before a board is built.
    pub fn with_size(size: usize, win_length: usize) -> Self {
        assert!(
            (1..=MAX_BOARD_SIZE).contains(&size),
            "board size {size} out of range"
        );
        assert!(win_length >= 1, "win length must be positive");
        Self {
            size,
            win_length,
            cells: vec![Stone::Empty; size * size],
            stones: 0,
        }
    }

    /// Same position with a different winning run length
    pub fn with_win_length(mut self, win_length: usize) -> Self {
        assert!(win_length >= 1, "win length must be positive");
        self.win_length = win_length;
        self
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn win_length(&self) -> usize {
        self.win_length
    }

    /// Whether a position lies on this board
    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        (pos.row as usize) < self.size && (pos.col as usize) < self.size
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        self.cells[pos.to_index(self.size)]
    }

    /// Stone at signed coordinates, `None` when off the board
    #[inline]
    pub fn at(&self, row: i32, col: i32) -> Option<Stone> {
        Pos::checked(row, col, self.size).map(|p| self.get(p))
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Stone::Empty
    }

    /// Place a stone after checking the target cell.
    ///
    /// This is the entry point for moves coming from outside the engine.
    pub fn place(&mut self, pos: Pos, stone: Stone) -> Result<(), GameError> {
        if stone == Stone::Empty {
            return Err(GameError::EmptyStone);
        }
        if !self.contains(pos) {
            return Err(GameError::OutOfBounds {
                row: pos.row as i32,
                col: pos.col as i32,
            });
        }
        if !self.is_empty(pos) {
            return Err(GameError::IllegalMove {
                row: pos.row,
                col: pos.col,
            });
        }
        self.place_stone(pos, stone);
        Ok(())
    }

    /// Place a stone on a cell known to be empty.
    /// Use `place` for moves that have not been validated.
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, stone: Stone) {
        debug_assert!(self.is_empty(pos), "placing on occupied cell {pos}");
        debug_assert_ne!(stone, Stone::Empty, "placing an empty stone at {pos}");
        self.cells[pos.to_index(self.size)] = stone;
        self.stones += 1;
    }

    /// Remove a stone (undo of `place_stone`)
    #[inline]
    pub fn remove_stone(&mut self, pos: Pos) {
        let idx = pos.to_index(self.size);
        if self.cells[idx] != Stone::Empty {
            self.cells[idx] = Stone::Empty;
            self.stones -= 1;
        }
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> usize {
        self.stones
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.stones == 0
    }

    /// True iff no Empty cell remains
    #[inline]
    pub fn is_full(&self) -> bool {
        self.stones == self.cells.len()
    }

    /// All positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Pos> {
        let size = self.size;
        (0..size * size).map(move |idx| Pos::from_index(idx, size))
    }

    /// Occupied positions with their stones, row-major
    pub fn occupied(&self) -> impl Iterator<Item = (Pos, Stone)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, s)| **s != Stone::Empty)
            .map(|(idx, s)| (Pos::from_index(idx, self.size), *s))
    }

    /// Empty positions, row-major
    pub fn empty_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, s)| **s == Stone::Empty)
            .map(|(idx, _)| Pos::from_index(idx, self.size))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            let line: String = (0..self.size)
                .map(|col| self.get(Pos::new(row as u8, col as u8)).symbol())
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parse a square grid of `.`, `B` and `W`, one row per line.
    /// Whitespace inside a row is ignored, blank lines are skipped.
    /// The win length is `min(size, 5)`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<Vec<char>> = s
            .lines()
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
            .filter(|row| !row.is_empty())
            .collect();

        let size = rows.len();
        if size == 0 {
            return Err(BoardParseError::Empty);
        }
        if size > MAX_BOARD_SIZE {
            return Err(BoardParseError::BadSize(size));
        }

        let mut board = Board::with_size(size, size.min(WIN_LENGTH));
        for (r, row) in rows.iter().enumerate() {
            if row.len() != size {
                return Err(BoardParseError::RaggedRow {
                    row: r,
                    found: row.len(),
                    expected: size,
                });
            }
            for (c, &ch) in row.iter().enumerate() {
                let stone = match ch.to_ascii_uppercase() {
                    '.' => continue,
                    'B' | 'X' => Stone::Black,
                    'W' | 'O' => Stone::White,
                    _ => return Err(BoardParseError::BadCell { ch, row: r, col: c }),
                };
                board.place_stone(Pos::new(r as u8, c as u8), stone);
            }
        }
        Ok(board)
    }
}
