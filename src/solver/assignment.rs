//! The in-progress assignment of words to slots.
//!
//! Entries are added speculatively during search and removed again when a
//! branch fails; nothing persists past a failed subtree. The consistency
//! check deliberately re-validates the whole partial assignment rather than
//! just the most recent binding; it is the correctness anchor the search
//! relies on before recursing.

use std::collections::{HashMap, HashSet};

use crate::puzzle::{Puzzle, Variable};

/// A partial mapping from [`Variable`] to a chosen word.
#[derive(Debug, Clone, Default)]
pub struct Assignment {
    entries: HashMap<Variable, String>,
}

impl Assignment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `var` to `word`, replacing any previous binding.
    pub fn bind(&mut self, var: Variable, word: String) {
        self.entries.insert(var, word);
    }

    /// Removes the binding for `var`. Unbinding a variable that was never
    /// bound is a benign no-op.
    pub fn unbind(&mut self, var: &Variable) {
        self.entries.remove(var);
    }

    pub fn is_bound(&self, var: &Variable) -> bool {
        self.entries.contains_key(var)
    }

    pub fn word_for(&self, var: &Variable) -> Option<&str> {
        self.entries.get(var).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether every variable of the puzzle is bound.
    pub fn is_complete(&self, puzzle: &Puzzle) -> bool {
        puzzle.variables().iter().all(|var| self.is_bound(var))
    }

    /// Validates the entire current partial assignment: all bound words are
    /// pairwise distinct, each word's length matches its variable, and every
    /// pair of bound crossing slots agrees on the shared character.
    pub fn is_consistent(&self, puzzle: &Puzzle) -> bool {
        let mut seen = HashSet::new();
        for (var, word) in &self.entries {
            if !seen.insert(word.as_str()) {
                return false;
            }
            if word.len() != var.length {
                return false;
            }
        }

        for (var, word) in &self.entries {
            for neighbor in puzzle.neighbors(var) {
                let Some(other) = self.entries.get(neighbor) else {
                    continue;
                };
                let (i, j) = puzzle.overlap(var, neighbor).unwrap();
                if word.as_bytes()[i] != other.as_bytes()[j] {
                    return false;
                }
            }
        }

        true
    }

    /// The bindings as `(variable, word)` pairs in canonical variable order,
    /// the shape callers persist or render.
    pub fn entries(&self) -> Vec<(&Variable, &str)> {
        let mut entries: Vec<(&Variable, &str)> = self
            .entries
            .iter()
            .map(|(var, word)| (var, word.as_str()))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::puzzle::Direction;

    fn crossing_puzzle() -> (Puzzle, Variable, Variable) {
        let puzzle = Puzzle::parse(
            &["___", "##_", "##_"],
            ["cat", "toe", "tap"].into_iter().map(String::from),
        )
        .unwrap();
        let across = Variable::new(0, 0, 3, Direction::Across);
        let down = Variable::new(0, 2, 3, Direction::Down);
        (puzzle, across, down)
    }

    #[test]
    fn empty_assignment_is_consistent_but_incomplete() {
        let (puzzle, _, _) = crossing_puzzle();
        let assignment = Assignment::new();
        assert!(assignment.is_consistent(&puzzle));
        assert!(!assignment.is_complete(&puzzle));
    }

    #[test]
    fn agreeing_overlap_characters_are_consistent() {
        let (puzzle, across, down) = crossing_puzzle();
        let mut assignment = Assignment::new();
        assignment.bind(across, "cat".to_string());
        assignment.bind(down, "toe".to_string());

        assert!(assignment.is_consistent(&puzzle));
        assert!(assignment.is_complete(&puzzle));
    }

    #[test]
    fn conflicting_overlap_characters_are_inconsistent() {
        let (puzzle, across, down) = crossing_puzzle();
        let mut assignment = Assignment::new();
        assignment.bind(across, "cat".to_string());
        // The shared cell wants 't', but "ace" starts with 'a'.
        assignment.bind(down, "ace".to_string());

        assert!(!assignment.is_consistent(&puzzle));
    }

    #[test]
    fn duplicate_words_are_inconsistent() {
        let (puzzle, across, down) = crossing_puzzle();
        let mut assignment = Assignment::new();
        // "tat" agrees with itself at the overlap but repeats a word.
        assignment.bind(across, "tat".to_string());
        assignment.bind(down, "tat".to_string());

        assert!(!assignment.is_consistent(&puzzle));
    }

    #[test]
    fn wrong_length_words_are_inconsistent() {
        let (puzzle, across, _) = crossing_puzzle();
        let mut assignment = Assignment::new();
        assignment.bind(across, "cats".to_string());

        assert!(!assignment.is_consistent(&puzzle));
    }

    #[test]
    fn partial_assignments_only_check_bound_neighbors() {
        let (puzzle, across, _) = crossing_puzzle();
        let mut assignment = Assignment::new();
        assignment.bind(across, "cat".to_string());

        assert!(assignment.is_consistent(&puzzle));
        assert!(!assignment.is_complete(&puzzle));
    }

    #[test]
    fn unbinding_an_unbound_variable_is_a_no_op() {
        let (_, across, down) = crossing_puzzle();
        let mut assignment = Assignment::new();
        assignment.unbind(&across);
        assert!(assignment.is_empty());

        assignment.bind(down.clone(), "toe".to_string());
        assignment.unbind(&across);
        assert_eq!(assignment.len(), 1);
        assert_eq!(assignment.word_for(&down), Some("toe"));
    }

    #[test]
    fn entries_come_out_in_canonical_order() {
        let (_, across, down) = crossing_puzzle();
        let mut assignment = Assignment::new();
        assignment.bind(down.clone(), "toe".to_string());
        assignment.bind(across.clone(), "cat".to_string());

        let entries = assignment.entries();
        assert_eq!(entries, vec![(&across, "cat"), (&down, "toe")]);
    }
}
