//! Gridfill is a constraint-satisfaction solver that fills crossword grids
//! by assigning dictionary words to slot variables subject to overlap
//! constraints.
//!
//! The solver is pure in-memory search: it consumes a read-only
//! [`Puzzle`](puzzle::Puzzle) (the grid's slot variables, vocabulary, and
//! overlap relation) and produces a complete
//! [`Assignment`](solver::assignment::Assignment) of a distinct word to every
//! slot, or `None` when no fill exists. Reading grids and word lists from
//! storage and rendering the result are the caller's business.
//!
//! # Core Concepts
//!
//! - **[`Puzzle`](puzzle::Puzzle)**: the puzzle structure model. Built from an
//!   occupancy mask; derives the slot [`Variable`](puzzle::Variable)s and the
//!   overlap relation between crossing slots.
//! - **[`Domains`](solver::domains::Domains)**: the per-slot candidate word
//!   sets, shrunk by node consistency (length filter) and the AC-3
//!   arc-consistency propagator before search begins.
//! - **[`SolverEngine`](solver::engine::SolverEngine)**: backtracking search
//!   over the propagated domains, guided by the minimum-remaining-values and
//!   least-constraining-value heuristics.
//!
//! # Example: A Two-Slot Cross
//!
//! ```
//! use gridfill::puzzle::{Direction, Puzzle, Variable};
//! use gridfill::solver::engine::SolverEngine;
//!
//! // A plus-shaped grid: one across slot crossing one down slot.
//! let puzzle = Puzzle::parse(
//!     &["___",
//!       "#_#",
//!       "#_#"],
//!     ["toe", "cat", "dog", "ace"].map(String::from),
//! )
//! .unwrap();
//!
//! let solution = SolverEngine::new().solve(&puzzle).expect("grid is fillable");
//!
//! let across = Variable::new(0, 0, 3, Direction::Across);
//! let down = Variable::new(0, 1, 3, Direction::Down);
//! // The fixed tie-breaks make the result deterministic: "ace" crossing
//! // "cat" on the shared 'c'.
//! assert_eq!(solution.word_for(&across), Some("ace"));
//! assert_eq!(solution.word_for(&down), Some("cat"));
//! ```

pub mod error;
pub mod examples;
pub mod puzzle;
pub mod solver;
