use tracing::debug;

use crate::{
    puzzle::Puzzle,
    solver::{
        assignment::Assignment,
        domains::Domains,
        heuristics::{
            value::{LeastConstrainingValueHeuristic, ValueOrderingHeuristic},
            variable::{MinimumRemainingValuesHeuristic, VariableSelectionHeuristic},
        },
        propagate::ac3,
    },
};

/// Counters accumulated across one call to [`SolverEngine::solve`].
#[derive(Debug, Clone, Default)]
pub struct SearchStats {
    /// How many arcs AC-3 revised.
    pub revise_calls: u64,
    /// How many candidate words propagation removed.
    pub prunings: u64,
    /// Wall-clock time spent in propagation.
    pub propagation_micros: u64,
    /// How many search nodes the backtracking phase expanded.
    pub nodes_visited: u64,
    /// How many subtrees were abandoned after exhausting their candidates.
    pub backtracks: u64,
    /// Whether the search hit the step budget and gave up early. When set,
    /// a `None` result means "budget exhausted", not "proven unsolvable".
    pub aborted: bool,
}

/// The backtracking search engine for filling a crossword grid.
///
/// Solving runs the full pipeline: the domain store is initialized from the
/// vocabulary, filtered for node consistency, propagated to arc consistency
/// with AC-3, and only then searched. If propagation already empties a
/// domain, the puzzle is reported unsolvable without any search. During
/// search the domains are a frozen candidate pool; the engine does no
/// forward checking, relying instead on the full-assignment consistency
/// check before every recursion.
pub struct SolverEngine {
    variable_heuristic: Box<dyn VariableSelectionHeuristic>,
    value_heuristic: Box<dyn ValueOrderingHeuristic>,
    step_limit: Option<u64>,
}

impl SolverEngine {
    /// Creates an engine with the standard heuristics: minimum remaining
    /// values (degree tie-break) for variables and least constraining value
    /// for words.
    pub fn new() -> Self {
        Self::with_heuristics(
            Box::new(MinimumRemainingValuesHeuristic),
            Box::new(LeastConstrainingValueHeuristic),
        )
    }

    /// Creates an engine with caller-chosen ordering heuristics.
    pub fn with_heuristics(
        variable_heuristic: Box<dyn VariableSelectionHeuristic>,
        value_heuristic: Box<dyn ValueOrderingHeuristic>,
    ) -> Self {
        Self {
            variable_heuristic,
            value_heuristic,
            step_limit: None,
        }
    }

    /// Caps the number of search nodes expanded before the engine gives up.
    ///
    /// Worst-case search is exponential in the number of slots; a budget
    /// turns "runs unbounded" into a `None` result with
    /// [`SearchStats::aborted`] set.
    pub fn with_step_limit(mut self, limit: u64) -> Self {
        self.step_limit = Some(limit);
        self
    }

    /// Fills the puzzle, returning a complete, validated assignment of a
    /// distinct word to every slot, or `None` when no fill exists (or the
    /// step budget ran out).
    pub fn solve(&self, puzzle: &Puzzle) -> Option<Assignment> {
        self.solve_with_stats(puzzle).0
    }

    /// Like [`solve`](Self::solve), also returning the search statistics.
    pub fn solve_with_stats(&self, puzzle: &Puzzle) -> (Option<Assignment>, SearchStats) {
        let mut stats = SearchStats::default();

        let mut domains = Domains::new(puzzle);
        domains.enforce_node_consistency();

        let started = std::time::Instant::now();
        let consistent = ac3(&mut domains, puzzle, None, &mut stats);
        stats.propagation_micros = started.elapsed().as_micros() as u64;

        if !consistent {
            // Preprocessing proved unsolvability; never start the search.
            debug!("propagation emptied a domain, reporting no solution");
            return (None, stats);
        }

        let mut assignment = Assignment::new();
        if self.backtrack(puzzle, &domains, &mut assignment, &mut stats) {
            (Some(assignment), stats)
        } else {
            (None, stats)
        }
    }

    /// Depth-first search over partial assignments. Returns `true` leaving
    /// `assignment` complete and consistent, or `false` leaving it exactly
    /// as it was on entry.
    fn backtrack(
        &self,
        puzzle: &Puzzle,
        domains: &Domains,
        assignment: &mut Assignment,
        stats: &mut SearchStats,
    ) -> bool {
        if let Some(limit) = self.step_limit {
            if stats.nodes_visited >= limit {
                stats.aborted = true;
                debug!(limit, "step budget exhausted, aborting search");
                return false;
            }
        }
        stats.nodes_visited += 1;

        // Completeness is only reachable through the consistency check
        // below, so a complete assignment is already valid.
        if assignment.is_complete(puzzle) {
            return true;
        }

        let Some(var) = self
            .variable_heuristic
            .select_variable(domains, assignment, puzzle)
        else {
            return true;
        };

        for word in self.value_heuristic.order_values(&var, domains, puzzle) {
            assignment.bind(var.clone(), word);
            if assignment.is_consistent(puzzle)
                && self.backtrack(puzzle, domains, assignment, stats)
            {
                return true;
            }
            // Unbind on every failed branch, including consistency rejects.
            assignment.unbind(&var);
            if stats.aborted {
                return false;
            }
        }

        stats.backtracks += 1;
        false
    }
}

impl Default for SolverEngine {
    fn default() -> Self {
        Self::new()
    }
}
