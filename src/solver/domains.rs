//! The domain store: the mutable mapping from each variable to its current
//! candidate word set.
//!
//! Domains are created once per solve as a full copy of the vocabulary, shrink
//! during the node-consistency and arc-consistency phases, and are frozen by
//! the time search begins: the backtracking engine treats them as a read-only
//! candidate pool and performs no further pruning.

use im::{HashMap, HashSet};

use crate::puzzle::{Puzzle, Variable};

/// Per-variable candidate word sets.
///
/// Backed by persistent collections, so snapshotting a candidate set before
/// shrinking it in place is an O(1) clone.
#[derive(Debug, Clone)]
pub struct Domains(HashMap<Variable, HashSet<String>>);

impl Domains {
    /// Creates one domain per puzzle variable, each a copy of the full
    /// vocabulary.
    pub fn new(puzzle: &Puzzle) -> Self {
        Self(
            puzzle
                .variables()
                .iter()
                .map(|var| (var.clone(), puzzle.words().clone()))
                .collect(),
        )
    }

    /// Removes, for each variable, every candidate whose length differs from
    /// the variable's length.
    ///
    /// A single pass with no propagation; it never fails and never re-queues
    /// work. Establishes the length invariant everything downstream assumes.
    pub fn enforce_node_consistency(&mut self) {
        for (var, candidates) in self.0.iter_mut() {
            *candidates = candidates
                .iter()
                .filter(|word| word.len() == var.length)
                .cloned()
                .collect();
        }
    }

    /// The current candidate set for `var`.
    ///
    /// Panics if `var` is not a variable of the puzzle this store was built
    /// from; that is a caller precondition, not a runtime condition.
    pub fn candidates(&self, var: &Variable) -> &HashSet<String> {
        self.0.get(var).unwrap()
    }

    /// The current candidate count for `var`.
    pub fn len(&self, var: &Variable) -> usize {
        self.candidates(var).len()
    }

    pub fn is_empty(&self, var: &Variable) -> bool {
        self.len(var) == 0
    }

    /// Removes a candidate from `var`'s domain. Removing a word that is not
    /// present is a benign no-op.
    pub fn remove(&mut self, var: &Variable, word: &str) {
        if let Some(candidates) = self.0.get_mut(var) {
            candidates.remove(word);
        }
    }
}
