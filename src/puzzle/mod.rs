//! The puzzle structure model: the read-only description of a crossword grid
//! that the solver consumes.
//!
//! A [`Puzzle`] is built from an in-memory occupancy mask and a word list. It
//! derives the slot [`Variable`]s (maximal horizontal and vertical runs of
//! open cells, two cells or longer), the symmetric overlap relation between
//! crossing slots, and each slot's neighbor set. The solver never mutates any
//! of this; it only ever reads it.

pub mod variable;

use std::collections::HashMap;

use im::HashSet;

use crate::error::{Error, Result};

pub use self::variable::{Direction, Variable};

/// A crossword grid plus the vocabulary of candidate words.
///
/// The vocabulary is treated as ASCII: a word's length is its byte length,
/// and the characters compared at an overlap are the bytes at the overlap
/// indices. Supplying words whose byte length exceeds every slot is harmless
/// (node consistency filters them); supplying a structurally invalid overlap
/// is impossible, because overlaps are derived from the grid itself.
#[derive(Debug, Clone)]
pub struct Puzzle {
    width: usize,
    height: usize,
    words: HashSet<String>,
    variables: Vec<Variable>,
    overlaps: HashMap<(Variable, Variable), (usize, usize)>,
    neighbors: HashMap<Variable, Vec<Variable>>,
}

impl Puzzle {
    /// Builds a puzzle from an occupancy mask (`true` = open cell) and a
    /// word list.
    ///
    /// Fails if the mask has no rows, no columns, or ragged rows.
    pub fn new(
        structure: Vec<Vec<bool>>,
        words: impl IntoIterator<Item = String>,
    ) -> Result<Self> {
        let height = structure.len();
        let width = structure.first().map(|row| row.len()).unwrap_or(0);
        if height == 0 || width == 0 {
            return Err(Error::EmptyStructure);
        }
        for (row, cells) in structure.iter().enumerate() {
            if cells.len() != width {
                return Err(Error::RaggedStructure {
                    row,
                    expected: width,
                    found: cells.len(),
                });
            }
        }

        let variables = scan_slots(&structure);
        let (overlaps, neighbors) = cross_slots(&variables);

        Ok(Self {
            width,
            height,
            words: words.into_iter().collect(),
            variables,
            overlaps,
            neighbors,
        })
    }

    /// Convenience constructor from string rows, where `'_'` marks an open
    /// cell and any other character a blocked one. Purely in-memory; callers
    /// that keep grids in files do their own reading.
    pub fn parse(rows: &[&str], words: impl IntoIterator<Item = String>) -> Result<Self> {
        let structure = rows
            .iter()
            .map(|row| row.chars().map(|c| c == '_').collect())
            .collect();
        Self::new(structure, words)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// All slot variables, in canonical order.
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    /// The full candidate vocabulary.
    pub fn words(&self) -> &HashSet<String> {
        &self.words
    }

    /// The character positions where `a` and `b` cross: `Some((ia, ib))`
    /// means the `ia`-th character of `a`'s word shares a cell with the
    /// `ib`-th character of `b`'s word. `None` when the slots share no cell.
    ///
    /// Consistent in both argument orders: `overlap(a, b) == Some((i, j))`
    /// iff `overlap(b, a) == Some((j, i))`.
    pub fn overlap(&self, a: &Variable, b: &Variable) -> Option<(usize, usize)> {
        self.overlaps.get(&(a.clone(), b.clone())).copied()
    }

    /// Every variable with a defined overlap with `v`, in canonical order.
    pub fn neighbors(&self, v: &Variable) -> &[Variable] {
        self.neighbors.get(v).map(Vec::as_slice).unwrap_or(&[])
    }

    /// How many slots cross `v`.
    pub fn degree(&self, v: &Variable) -> usize {
        self.neighbors(v).len()
    }
}

/// Scans the mask for maximal runs of open cells, two cells or longer, in
/// both directions.
fn scan_slots(structure: &[Vec<bool>]) -> Vec<Variable> {
    let height = structure.len();
    let width = structure[0].len();
    let mut variables = Vec::new();

    for row in 0..height {
        let mut col = 0;
        while col < width {
            if structure[row][col] {
                let start = col;
                while col < width && structure[row][col] {
                    col += 1;
                }
                if col - start >= 2 {
                    variables.push(Variable::new(row, start, col - start, Direction::Across));
                }
            } else {
                col += 1;
            }
        }
    }

    for col in 0..width {
        let mut row = 0;
        while row < height {
            if structure[row][col] {
                let start = row;
                while row < height && structure[row][col] {
                    row += 1;
                }
                if row - start >= 2 {
                    variables.push(Variable::new(start, col, row - start, Direction::Down));
                }
            } else {
                row += 1;
            }
        }
    }

    variables.sort();
    variables
}

/// Computes the overlap relation and neighbor sets by intersecting the cell
/// footprints of every slot.
#[allow(clippy::type_complexity)]
fn cross_slots(
    variables: &[Variable],
) -> (
    HashMap<(Variable, Variable), (usize, usize)>,
    HashMap<Variable, Vec<Variable>>,
) {
    let mut occupants: HashMap<(usize, usize), Vec<(usize, usize)>> = HashMap::new();
    for (index, var) in variables.iter().enumerate() {
        for k in 0..var.length {
            occupants.entry(var.cell(k)).or_default().push((index, k));
        }
    }

    let mut overlaps = HashMap::new();
    let mut neighbors: HashMap<Variable, Vec<Variable>> =
        variables.iter().map(|v| (v.clone(), Vec::new())).collect();

    for slot_indices in occupants.values() {
        for &(a, ka) in slot_indices {
            for &(b, kb) in slot_indices {
                if a != b {
                    let (va, vb) = (&variables[a], &variables[b]);
                    overlaps.insert((va.clone(), vb.clone()), (ka, kb));
                    neighbors.get_mut(va).unwrap().push(vb.clone());
                }
            }
        }
    }

    for peers in neighbors.values_mut() {
        peers.sort();
        peers.dedup();
    }

    (overlaps, neighbors)
}
