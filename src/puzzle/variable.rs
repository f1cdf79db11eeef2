use serde::{Deserialize, Serialize};

/// The orientation of a word slot in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Direction {
    Across,
    Down,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Across => write!(f, "across"),
            Direction::Down => write!(f, "down"),
        }
    }
}

/// The identity of a word slot: where it starts, how long it is, and which
/// way it runs.
///
/// Variables are supplied wholesale by [`Puzzle`](crate::puzzle::Puzzle) and
/// are never created or destroyed by the solver. Equality and hashing are by
/// the full `(row, col, length, direction)` tuple, and the derived `Ord` over
/// that same tuple is the crate-wide canonical order used to break heuristic
/// ties deterministically.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Variable {
    pub row: usize,
    pub col: usize,
    pub length: usize,
    pub direction: Direction,
}

impl Variable {
    pub fn new(row: usize, col: usize, length: usize, direction: Direction) -> Self {
        Self {
            row,
            col,
            length,
            direction,
        }
    }

    /// The grid coordinate of the `k`-th character of a word written into
    /// this slot.
    pub fn cell(&self, k: usize) -> (usize, usize) {
        match self.direction {
            Direction::Across => (self.row, self.col + k),
            Direction::Down => (self.row + k, self.col),
        }
    }
}

impl std::fmt::Display for Variable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}-{} at ({}, {})",
            self.length, self.direction, self.row, self.col
        )
    }
}
