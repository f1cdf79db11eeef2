//! Strategies for selecting which variable to branch on next during search.

use std::sync::Mutex;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::{
    puzzle::{Puzzle, Variable},
    solver::{assignment::Assignment, domains::Domains},
};

/// A trait for variable-selection heuristics.
///
/// Implementors define which unassigned variable the solver branches on
/// next. A good choice can dramatically shrink the explored search tree, but
/// any choice is correct: selection order never changes the solution set.
pub trait VariableSelectionHeuristic {
    /// Selects the next variable to assign, or `None` when every variable is
    /// already bound.
    fn select_variable(
        &self,
        domains: &Domains,
        assignment: &Assignment,
        puzzle: &Puzzle,
    ) -> Option<Variable>;
}

/// Chooses the unassigned variable with the fewest remaining candidates.
///
/// A "fail-first" strategy: tackling the most constrained slot early prunes
/// hopeless branches sooner. Ties on domain size go to the variable crossing
/// the most other slots (the degree heuristic), and any remaining tie is
/// broken by the canonical [`Variable`] order so that runs are reproducible.
pub struct MinimumRemainingValuesHeuristic;

impl VariableSelectionHeuristic for MinimumRemainingValuesHeuristic {
    fn select_variable(
        &self,
        domains: &Domains,
        assignment: &Assignment,
        puzzle: &Puzzle,
    ) -> Option<Variable> {
        puzzle
            .variables()
            .iter()
            .filter(|var| !assignment.is_bound(var))
            .min_by(|a, b| {
                domains
                    .len(a)
                    .cmp(&domains.len(b))
                    .then_with(|| puzzle.degree(b).cmp(&puzzle.degree(a)))
                    .then_with(|| a.cmp(b))
            })
            .cloned()
    }
}

/// Selects the first unassigned variable in canonical order.
///
/// A deterministic baseline with no look at the domains at all.
pub struct SelectFirstHeuristic;

impl VariableSelectionHeuristic for SelectFirstHeuristic {
    fn select_variable(
        &self,
        _domains: &Domains,
        assignment: &Assignment,
        puzzle: &Puzzle,
    ) -> Option<Variable> {
        puzzle
            .variables()
            .iter()
            .find(|var| !assignment.is_bound(var))
            .cloned()
    }
}

/// Selects an unassigned variable at random from a seeded generator.
///
/// Useful for shaking up pathological search orders while keeping runs
/// reproducible: the same seed always yields the same sequence of picks.
pub struct RandomVariableHeuristic {
    rng: Mutex<ChaCha8Rng>,
}

impl RandomVariableHeuristic {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }
}

impl VariableSelectionHeuristic for RandomVariableHeuristic {
    fn select_variable(
        &self,
        _domains: &Domains,
        assignment: &Assignment,
        puzzle: &Puzzle,
    ) -> Option<Variable> {
        use rand::seq::IteratorRandom;

        let mut rng = self.rng.lock().unwrap();
        puzzle
            .variables()
            .iter()
            .filter(|var| !assignment.is_bound(var))
            .choose(&mut *rng)
            .cloned()
    }
}
