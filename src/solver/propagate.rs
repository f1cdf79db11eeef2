//! Arc-consistency propagation (the AC-3 algorithm).
//!
//! Enforces the binary overlap constraints across the whole puzzle: after a
//! successful run, every candidate left in a variable's domain has at least
//! one supporting candidate in every crossing variable's domain. Domain sizes
//! only ever decrease across a run, and running AC-3 again on an already
//! arc-consistent store shrinks nothing.

use tracing::debug;

use crate::{
    puzzle::{Puzzle, Variable},
    solver::{domains::Domains, engine::SearchStats, work_list::WorkList},
};

/// Makes `x` arc-consistent with `y`: removes every candidate of `x` that has
/// no supporting candidate in `y`'s domain at the overlap position.
///
/// Returns whether any candidate was removed. Variables without a shared cell
/// are always mutually consistent, so an undefined overlap is an immediate
/// "no revision".
///
/// Precondition: node consistency has run, so every candidate of `x` and `y`
/// is long enough to be indexed at the overlap.
pub fn revise(domains: &mut Domains, x: &Variable, y: &Variable, puzzle: &Puzzle) -> bool {
    let Some((ix, iy)) = puzzle.overlap(x, y) else {
        return false;
    };

    let mut revised = false;
    // O(1) snapshots of the persistent sets; `remove` below mutates the
    // backing store without disturbing the iteration.
    let x_candidates = domains.candidates(x).clone();
    let y_candidates = domains.candidates(y).clone();

    for word in x_candidates.iter() {
        let wanted = word.as_bytes()[ix];
        let supported = y_candidates
            .iter()
            .any(|other| other.as_bytes()[iy] == wanted);
        if !supported {
            domains.remove(x, word);
            revised = true;
        }
    }

    revised
}

/// Runs AC-3 to a fixpoint over the given arcs, or over every ordered pair of
/// distinct variables when `arcs` is `None`.
///
/// Returns `false` as soon as a revision empties a domain (the puzzle is
/// unsolvable under the current domains), `true` once the queue drains with
/// every domain non-empty.
pub fn ac3(
    domains: &mut Domains,
    puzzle: &Puzzle,
    arcs: Option<Vec<(Variable, Variable)>>,
    stats: &mut SearchStats,
) -> bool {
    let mut worklist = WorkList::new();
    match arcs {
        Some(arcs) => {
            for (x, y) in arcs {
                worklist.push_back(x, y);
            }
        }
        None => {
            for x in puzzle.variables() {
                for y in puzzle.variables() {
                    if x != y {
                        worklist.push_back(x.clone(), y.clone());
                    }
                }
            }
        }
    }

    while let Some((x, y)) = worklist.pop_front() {
        stats.revise_calls += 1;
        let before = domains.len(&x);

        if revise(domains, &x, &y, puzzle) {
            stats.prunings += (before - domains.len(&x)) as u64;

            if domains.is_empty(&x) {
                debug!(variable = %x, "domain wiped out during propagation");
                return false;
            }

            // A shrink in x can invalidate support previously established
            // for x's other neighbors, so their arcs go back on the queue.
            for n in puzzle.neighbors(&x) {
                if n != &y {
                    worklist.push_back(n.clone(), x.clone());
                }
            }
        }
    }

    debug!("propagation reached a fixpoint");
    true
}
