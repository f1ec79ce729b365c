//! Candidate move generation with proximity filtering
//!
//! Only Empty cells up to two steps from an existing stone along one of the
//! eight compass rays are considered. On an empty board every cell is a
//! candidate.

use crate::board::{Board, Pos};

/// The eight compass rays
const RAYS: [(i32, i32); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (1, 1),
    (-1, 1),
    (1, -1),
];

/// Steps taken along each ray
const REACH: i32 = 2;

/// Unique candidate moves in row-major order.
///
/// Falls back to every Empty cell when no stone has an Empty neighbour in
/// reach, which only happens on an empty board. Returns an empty list only
/// when the board is full.
#[must_use]
pub fn candidate_moves(board: &Board) -> Vec<Pos> {
    let size = board.size();
    let mut near = vec![false; size * size];
    let mut any = false;

    for (pos, _) in board.occupied() {
        for &(dr, dc) in &RAYS {
            for dist in 1..=REACH {
                if let Some(p) = pos.offset(dr, dc, dist, size) {
                    if board.is_empty(p) {
                        near[p.to_index(size)] = true;
                        any = true;
                    }
                }
            }
        }
    }

    if !any {
        return board.empty_cells().collect();
    }

    near.iter()
        .enumerate()
        .filter(|&(_, &hit)| hit)
        .map(|(idx, _)| Pos::from_index(idx, size))
        .collect()
}
